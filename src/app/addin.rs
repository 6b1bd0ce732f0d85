//! Mail-client add-in binding: one handler per host lifecycle event.

use crate::core::engine::CostEngine;
use crate::core::gate::{decide_advisory, decide_send, Advisory, SendDecision};
use crate::core::messages::{
    advisory_text, below_threshold_notice, ACTIVATION_NOTICE, UNAVAILABLE_NOTICE,
};
use crate::core::{CostPolicy, Estimate, MeetingSource, NotificationSink};
use crate::utils::error::Result;

/// Pretty JSON of the cost breakdown, `None` when the meeting could not be computed.
pub fn breakdown_json(estimate: Option<&Estimate>) -> Result<Option<String>> {
    let json = estimate
        .map(|estimate| serde_json::to_string_pretty(&estimate.result))
        .transpose()?;
    Ok(json)
}

pub struct AddinHandlers<S: MeetingSource, N: NotificationSink> {
    engine: CostEngine<S>,
    notifier: N,
}

impl<S: MeetingSource, N: NotificationSink> AddinHandlers<S, N> {
    pub fn new(source: S, notifier: N) -> Self {
        Self::with_policy(source, notifier, CostPolicy::default())
    }

    pub fn with_policy(source: S, notifier: N, policy: CostPolicy) -> Self {
        Self {
            engine: CostEngine::with_policy(source, policy),
            notifier,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn policy(&self) -> &CostPolicy {
        self.engine.policy()
    }

    /// Any gather failure reads as "nothing to compute".
    async fn quiet_estimate(&self) -> Option<Estimate> {
        match self.engine.estimate().await {
            Ok(estimate) => estimate,
            Err(e) => {
                tracing::warn!("Cost estimate unavailable: {}", e);
                None
            }
        }
    }

    async fn notify(&self, message: &str) -> Result<()> {
        self.notifier
            .replace(&self.policy().notification_key, message)
            .await
    }

    pub async fn on_new_appointment(&self) -> Result<()> {
        tracing::info!("New appointment opened, showing activation notice");
        self.notify(ACTIVATION_NOTICE).await
    }

    pub async fn on_send(&self) -> SendDecision {
        let estimate = self.quiet_estimate().await;
        let decision = decide_send(estimate.as_ref(), self.policy());
        match &decision {
            SendDecision::Allow => tracing::info!("Send allowed"),
            SendDecision::BlockWithPrompt { .. } => {
                tracing::info!("Send held for cost confirmation")
            }
        }
        decision
    }

    /// Recipients or time changed: refresh or clear the advisory.
    pub async fn on_item_changed(&self) -> Result<Advisory> {
        let estimate = self.quiet_estimate().await;
        let advisory = decide_advisory(estimate.as_ref(), self.policy());
        match &advisory {
            Advisory::Clear => {
                self.notifier
                    .remove(&self.policy().notification_key)
                    .await?
            }
            Advisory::Show { text } => self.notify(text).await?,
        }
        Ok(advisory)
    }

    /// Manual button: always leaves a notice explaining the outcome.
    pub async fn on_calculate(&self) -> Result<Option<Estimate>> {
        let estimate = self.quiet_estimate().await;
        let message = match &estimate {
            None => UNAVAILABLE_NOTICE.to_string(),
            Some(estimate) if !estimate.applicable => {
                below_threshold_notice(&estimate.result, self.policy())
            }
            Some(estimate) => advisory_text(&estimate.result, self.policy()),
        };
        self.notify(&message).await?;
        Ok(estimate)
    }
}
