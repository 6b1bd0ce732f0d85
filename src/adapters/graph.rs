use crate::core::calculator::organizer_domain_from_address;
use crate::core::{Attendee, CalendarEvent, CalendarEvents, MeetingInput};
use crate::utils::error::{CostError, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

const EVENT_FIELDS: &str = "subject,start,end,attendees,organizer,isOnlineMeeting,onlineMeetingUrl";
const UPCOMING_FIELDS: &str = "subject,start,end,attendees,organizer";

#[derive(Debug, Deserialize)]
struct EventPage {
    #[serde(default)]
    value: Vec<CalendarEvent>,
}

/// Calendar events lookup against a Microsoft Graph style REST API.
#[derive(Debug, Clone)]
pub struct GraphCalendarClient {
    client: Client,
    base_url: String,
    lookup_size_with_id: usize,
    lookup_size_upcoming: usize,
}

impl GraphCalendarClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            lookup_size_with_id: 50,
            lookup_size_upcoming: 10,
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn lookup_sizes(mut self, with_id: usize, upcoming: usize) -> Self {
        self.lookup_size_with_id = with_id;
        self.lookup_size_upcoming = upcoming;
        self
    }

    fn events_url(&self) -> String {
        format!("{}/me/calendar/events", self.base_url)
    }

    async fn first_event(
        &self,
        token: &str,
        query: &[(&str, String)],
    ) -> Result<Option<CalendarEvent>> {
        let url = self.events_url();
        tracing::debug!("Requesting calendar events from: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .header("Prefer", "outlook.timezone=\"UTC\"")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Calendar API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CostError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let page: EventPage = response.json().await?;
        tracing::debug!("Calendar API returned {} events", page.value.len());
        Ok(page.value.into_iter().next())
    }
}

#[async_trait]
impl CalendarEvents for GraphCalendarClient {
    async fn find_meeting_event(
        &self,
        token: &str,
        meeting_id: Option<&str>,
    ) -> Result<Option<CalendarEvent>> {
        match meeting_id {
            // The online-meeting id cannot be resolved to an event directly,
            // so the most recent event stands in for it.
            Some(_) => {
                let query = [
                    ("$top", self.lookup_size_with_id.to_string()),
                    ("$orderby", "start/dateTime desc".to_string()),
                    ("$select", EVENT_FIELDS.to_string()),
                ];
                self.first_event(token, &query).await
            }
            None => {
                let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                let query = [
                    ("$filter", format!("start/dateTime ge '{}'", now)),
                    ("$top", self.lookup_size_upcoming.to_string()),
                    ("$orderby", "start/dateTime".to_string()),
                    ("$select", UPCOMING_FIELDS.to_string()),
                ];
                self.first_event(token, &query).await
            }
        }
    }
}

/// Parses an event time. Naive values are taken as UTC.
pub fn parse_event_time(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| CostError::TimestampParseError {
            value: value.to_string(),
        })
}

/// Maps an event into a `MeetingInput`; the organizer comes from the event itself.
pub fn meeting_input_from_event(event: &CalendarEvent) -> Result<MeetingInput> {
    let organizer_address = event
        .organizer
        .as_ref()
        .and_then(|organizer| organizer.email_address.as_ref())
        .map(|email| email.address.as_str())
        .unwrap_or("");
    let organizer_domain = organizer_domain_from_address(organizer_address)?;

    let mut required_attendees = Vec::new();
    let mut optional_attendees = Vec::new();
    for attendee in &event.attendees {
        let address = attendee
            .email_address
            .as_ref()
            .map(|email| email.address.clone())
            .unwrap_or_default();
        match attendee.kind.as_deref() {
            Some("optional") => optional_attendees.push(Attendee::new(address)),
            _ => required_attendees.push(Attendee::new(address)),
        }
    }

    Ok(MeetingInput {
        organizer_domain,
        required_attendees,
        optional_attendees,
        start_time: parse_event_time(&event.start.date_time)?,
        end_time: parse_event_time(&event.end.date_time)?,
    })
}
