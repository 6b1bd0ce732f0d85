use crate::core::{Gathered, MeetingInput, MeetingSource};
use crate::utils::error::Result;

/// Substitutes a failed host query with its zero value.
fn absorb<T: Default>(query: &str, outcome: Result<T>) -> T {
    match outcome {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Host query '{}' failed, treating as empty: {}", query, e);
            T::default()
        }
    }
}

/// Collects one `MeetingInput` from the source.
///
/// The four host queries run concurrently within the calling task and are all
/// awaited before assembling. Individual failures become empty lists or absent
/// timestamps. Only a missing organizer domain is an error; missing times yield
/// `Gathered::Unavailable`.
pub async fn gather<S: MeetingSource + ?Sized>(source: &S) -> Result<Gathered> {
    let organizer_domain = source.organizer_domain()?.to_lowercase();

    let (required, optional, start, end) = tokio::join!(
        source.required_attendees(),
        source.optional_attendees(),
        source.start_time(),
        source.end_time(),
    );

    let required_attendees = absorb("required_attendees", required);
    let optional_attendees = absorb("optional_attendees", optional);
    let start_time = absorb("start_time", start);
    let end_time = absorb("end_time", end);

    tracing::debug!(
        "Gathered {} required and {} optional attendees (start: {:?}, end: {:?})",
        required_attendees.len(),
        optional_attendees.len(),
        start_time,
        end_time
    );

    match (start_time, end_time) {
        (Some(start_time), Some(end_time)) => Ok(Gathered::Ready(MeetingInput {
            organizer_domain,
            required_attendees,
            optional_attendees,
            start_time,
            end_time,
        })),
        _ => Ok(Gathered::Unavailable),
    }
}
