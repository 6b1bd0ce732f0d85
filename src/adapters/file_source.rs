use crate::core::calculator::organizer_domain_from_address;
use crate::core::{Attendee, MeetingSource};
use crate::utils::error::{CostError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Meeting item as a host would expose it, stored as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingDocument {
    pub organizer: String,
    #[serde(default)]
    pub required_attendees: Option<Vec<String>>,
    #[serde(default)]
    pub optional_attendees: Option<Vec<String>>,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

/// Stands in for the add-in host when running outside of it.
///
/// An attendee list missing from the document behaves like a failed host query.
#[derive(Debug, Clone)]
pub struct FileMeetingSource {
    document: MeetingDocument,
}

impl FileMeetingSource {
    pub fn new(document: MeetingDocument) -> Self {
        Self { document }
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: MeetingDocument = serde_json::from_str(content)?;
        Ok(Self::new(document))
    }

    fn attendees(query: &str, list: &Option<Vec<String>>) -> Result<Vec<Attendee>> {
        list.as_ref()
            .map(|addresses| addresses.iter().map(Attendee::new).collect())
            .ok_or_else(|| CostError::HostQueryError {
                query: query.to_string(),
                message: "not present in meeting document".to_string(),
            })
    }
}

#[async_trait]
impl MeetingSource for FileMeetingSource {
    async fn required_attendees(&self) -> Result<Vec<Attendee>> {
        Self::attendees("required_attendees", &self.document.required_attendees)
    }

    async fn optional_attendees(&self) -> Result<Vec<Attendee>> {
        Self::attendees("optional_attendees", &self.document.optional_attendees)
    }

    async fn start_time(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.document.start)
    }

    async fn end_time(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.document.end)
    }

    fn organizer_domain(&self) -> Result<String> {
        organizer_domain_from_address(&self.document.organizer)
    }
}
