//! Meeting-tab panel binding: one load per meeting, rendered into a static view.

use crate::adapters::graph::meeting_input_from_event;
use crate::core::engine::evaluate;
use crate::core::messages::{panel_details, panel_total};
use crate::core::{CalendarEvents, CostPolicy, Estimate, TokenProvider};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct PanelContext {
    pub meeting_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelView {
    Result { total_cost: String, details: String },
    NotApplicable,
    Error,
}

pub struct PanelController<T: TokenProvider, C: CalendarEvents> {
    tokens: T,
    events: C,
    policy: CostPolicy,
}

impl<T: TokenProvider, C: CalendarEvents> PanelController<T, C> {
    pub fn new(tokens: T, events: C) -> Self {
        Self::with_policy(tokens, events, CostPolicy::default())
    }

    pub fn with_policy(tokens: T, events: C, policy: CostPolicy) -> Self {
        Self {
            tokens,
            events,
            policy,
        }
    }

    /// `Ok(None)` when the lookup found no event.
    pub async fn estimate(&self, context: &PanelContext) -> Result<Option<Estimate>> {
        let token = self.tokens.access_token().await?;
        let event = self
            .events
            .find_meeting_event(&token, context.meeting_id.as_deref())
            .await?;

        let Some(event) = event else {
            tracing::warn!("No calendar event found for the meeting");
            return Ok(None);
        };

        let input = meeting_input_from_event(&event)?;
        Ok(Some(evaluate(&input, &self.policy)))
    }

    pub async fn load(&self, context: &PanelContext) -> PanelView {
        let estimate = match self.estimate(context).await {
            Ok(Some(estimate)) => estimate,
            Ok(None) => return PanelView::Error,
            Err(e) => {
                tracing::error!("Error loading meeting data: {}", e);
                return PanelView::Error;
            }
        };

        if !estimate.applicable {
            return PanelView::NotApplicable;
        }
        if estimate.result.duration_hours <= 0.0 {
            tracing::warn!("Meeting ends before it starts, not rendering a cost");
            return PanelView::Error;
        }

        PanelView::Result {
            total_cost: panel_total(&estimate.result, &self.policy),
            details: panel_details(&estimate.result, &self.policy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalendarEvent;
    use crate::utils::error::CostError;
    use async_trait::async_trait;

    struct FixedToken(Option<&'static str>);

    #[async_trait]
    impl TokenProvider for FixedToken {
        async fn access_token(&self) -> Result<String> {
            self.0.map(str::to_string).ok_or_else(|| CostError::AuthError {
                message: "consent required".to_string(),
            })
        }
    }

    struct FixedEvent(Option<serde_json::Value>);

    #[async_trait]
    impl CalendarEvents for FixedEvent {
        async fn find_meeting_event(
            &self,
            token: &str,
            _meeting_id: Option<&str>,
        ) -> Result<Option<CalendarEvent>> {
            assert_eq!(token, "tok");
            Ok(self
                .0
                .clone()
                .map(|value| serde_json::from_value(value).unwrap()))
        }
    }

    fn event(internal: usize, start: &str, end: &str) -> serde_json::Value {
        let attendees: Vec<_> = (0..internal)
            .map(|i| serde_json::json!({"type": "required", "emailAddress": {"address": format!("p{}@acme.com", i)}}))
            .collect();
        serde_json::json!({
            "start": {"dateTime": start},
            "end": {"dateTime": end},
            "attendees": attendees,
            "organizer": {"emailAddress": {"address": "boss@acme.com"}}
        })
    }

    #[tokio::test]
    async fn test_panel_renders_cost() {
        let controller = PanelController::new(
            FixedToken(Some("tok")),
            FixedEvent(Some(event(5, "2024-05-01T14:00:00", "2024-05-01T16:00:00"))),
        );

        let view = controller.load(&PanelContext::default()).await;

        assert_eq!(
            view,
            PanelView::Result {
                total_cost: "$120.000".to_string(),
                details: "6 internos \u{00b7} 2 horas \u{00b7} $10.000/hr/persona".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_panel_not_applicable() {
        let controller = PanelController::new(
            FixedToken(Some("tok")),
            FixedEvent(Some(event(2, "2024-05-01T14:00:00", "2024-05-01T17:00:00"))),
        );

        assert_eq!(
            controller.load(&PanelContext::default()).await,
            PanelView::NotApplicable
        );
    }

    #[tokio::test]
    async fn test_panel_errors() {
        let no_token = PanelController::new(FixedToken(None), FixedEvent(None));
        assert_eq!(no_token.load(&PanelContext::default()).await, PanelView::Error);

        let no_event = PanelController::new(FixedToken(Some("tok")), FixedEvent(None));
        assert_eq!(no_event.load(&PanelContext::default()).await, PanelView::Error);

        let inverted = PanelController::new(
            FixedToken(Some("tok")),
            FixedEvent(Some(event(6, "2024-05-01T16:00:00", "2024-05-01T14:00:00"))),
        );
        assert_eq!(inverted.load(&PanelContext::default()).await, PanelView::Error);
    }
}
