use crate::domain::model::{Attendee, CalendarEvent};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Host accessors for the item being composed. Each query may fail independently.
#[async_trait]
pub trait MeetingSource: Send + Sync {
    async fn required_attendees(&self) -> Result<Vec<Attendee>>;
    async fn optional_attendees(&self) -> Result<Vec<Attendee>>;
    async fn start_time(&self) -> Result<Option<DateTime<Utc>>>;
    async fn end_time(&self) -> Result<Option<DateTime<Utc>>>;

    /// Domain of the acting user. No fallback when it cannot be derived.
    fn organizer_domain(&self) -> Result<String>;
}

/// Keyed, persistent notification banner on the host item.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn replace(&self, key: &str, message: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

#[async_trait]
pub trait CalendarEvents: Send + Sync {
    async fn find_meeting_event(
        &self,
        token: &str,
        meeting_id: Option<&str>,
    ) -> Result<Option<CalendarEvent>>;
}
