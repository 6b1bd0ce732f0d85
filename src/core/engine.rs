use crate::core::calculator::compute_cost;
use crate::core::gate::ThresholdGate;
use crate::core::gatherer::gather;
use crate::core::{CostPolicy, Estimate, Gathered, MeetingInput, MeetingSource};
use crate::utils::error::Result;

/// Evaluates a prepared input against a policy.
pub fn evaluate(input: &MeetingInput, policy: &CostPolicy) -> Estimate {
    let result = compute_cost(input, policy);
    let applicable =
        ThresholdGate::from_policy(policy).is_applicable(result.total_internal_participants);
    Estimate { result, applicable }
}

pub struct CostEngine<S: MeetingSource> {
    source: S,
    policy: CostPolicy,
}

impl<S: MeetingSource> CostEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_policy(source, CostPolicy::default())
    }

    pub fn with_policy(source: S, policy: CostPolicy) -> Self {
        Self { source, policy }
    }

    pub fn policy(&self) -> &CostPolicy {
        &self.policy
    }

    /// Gathers and evaluates. `Ok(None)` means there is nothing to compute.
    pub async fn estimate(&self) -> Result<Option<Estimate>> {
        match gather(&self.source).await? {
            Gathered::Ready(input) => {
                let estimate = evaluate(&input, &self.policy);
                tracing::debug!(
                    "Estimate: {} participants, applicable: {}",
                    estimate.result.total_internal_participants,
                    estimate.applicable
                );
                Ok(Some(estimate))
            }
            Gathered::Unavailable => {
                tracing::debug!("Meeting times unavailable, nothing to compute");
                Ok(None)
            }
        }
    }
}
