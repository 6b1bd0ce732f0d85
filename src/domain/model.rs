use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const COST_PER_HOUR_PER_PERSON: f64 = 10_000.0;
pub const MIN_INTERNAL_PARTICIPANTS: u32 = 6;
pub const NOTIFICATION_KEY: &str = "costReunion";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(default)]
    pub email_address: String,
}

impl Attendee {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
        }
    }
}

/// Raw meeting data, assembled fresh for every computation.
#[derive(Debug, Clone)]
pub struct MeetingInput {
    /// Lowercase domain of the organizer's address.
    pub organizer_domain: String,
    pub required_attendees: Vec<Attendee>,
    pub optional_attendees: Vec<Attendee>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl MeetingInput {
    /// Required then optional, without touching either list.
    pub fn attendees(&self) -> impl Iterator<Item = &Attendee> {
        self.required_attendees
            .iter()
            .chain(self.optional_attendees.iter())
    }
}

/// Outcome of a gather: either everything needed to compute, or nothing to compute.
#[derive(Debug, Clone)]
pub enum Gathered {
    Ready(MeetingInput),
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostResult {
    pub total_internal_participants: u32,
    pub duration_hours: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub result: CostResult,
    pub applicable: bool,
}

/// Rate, threshold and presentation constants injected into the calculator and gate.
#[derive(Debug, Clone, PartialEq)]
pub struct CostPolicy {
    pub cost_per_hour_per_person: f64,
    pub min_internal_participants: u32,
    pub notification_key: String,
    pub currency_symbol: String,
}

impl Default for CostPolicy {
    fn default() -> Self {
        Self {
            cost_per_hour_per_person: COST_PER_HOUR_PER_PERSON,
            min_internal_participants: MIN_INTERNAL_PARTICIPANTS,
            notification_key: NOTIFICATION_KEY.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

/// A calendar event as returned by the remote events lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub subject: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    #[serde(default)]
    pub attendees: Vec<EventAttendee>,
    #[serde(default)]
    pub organizer: Option<EventRecipient>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    pub date_time: String,
    #[serde(default)]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendee {
    #[serde(default)]
    pub email_address: Option<EmailAddress>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecipient {
    #[serde(default)]
    pub email_address: Option<EmailAddress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAddress {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
}
