use crate::core::{CostPolicy, CostResult, MeetingInput};
use crate::utils::error::{CostError, Result};

const MILLIS_PER_HOUR: f64 = 1000.0 * 60.0 * 60.0;

/// Domain of an attendee address, lowercased. Addresses without exactly one `@` have none.
pub fn domain_of(address: &str) -> Option<String> {
    let mut parts = address.split('@');
    let _local = parts.next()?;
    let domain = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some(domain.to_lowercase())
}

/// Derives the organizer domain from the acting user's address.
pub fn organizer_domain_from_address(address: &str) -> Result<String> {
    address
        .split('@')
        .nth(1)
        .filter(|domain| !domain.is_empty())
        .map(str::to_lowercase)
        .ok_or_else(|| CostError::OrganizerDomainUnavailable {
            address: address.to_string(),
        })
}

pub fn count_internal(input: &MeetingInput) -> u32 {
    let organizer_domain = input.organizer_domain.to_lowercase();
    input
        .attendees()
        .filter_map(|attendee| domain_of(&attendee.email_address))
        .filter(|domain| *domain == organizer_domain)
        .count() as u32
}

pub fn duration_hours(input: &MeetingInput) -> f64 {
    let millis = (input.end_time - input.start_time).num_milliseconds() as f64;
    let hours = millis / MILLIS_PER_HOUR;
    if hours <= 0.0 {
        0.0
    } else {
        hours
    }
}

pub fn compute_cost(input: &MeetingInput, policy: &CostPolicy) -> CostResult {
    // The organizer is always one more participant, even if listed as an attendee.
    let total_internal_participants = count_internal(input) + 1;
    let duration_hours = duration_hours(input);
    let total_cost =
        policy.cost_per_hour_per_person * f64::from(total_internal_participants) * duration_hours;

    tracing::debug!(
        "Computed cost {:.2} for {} internal participants over {:.2}h",
        total_cost,
        total_internal_participants,
        duration_hours
    );

    CostResult {
        total_internal_participants,
        duration_hours,
        total_cost,
    }
}
