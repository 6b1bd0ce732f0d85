use crate::core::messages::{advisory_text, send_prompt};
use crate::core::{CostPolicy, Estimate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdGate {
    min_internal_participants: u32,
}

impl ThresholdGate {
    pub fn new(min_internal_participants: u32) -> Self {
        Self {
            min_internal_participants,
        }
    }

    pub fn from_policy(policy: &CostPolicy) -> Self {
        Self::new(policy.min_internal_participants)
    }

    /// Inclusive: a meeting exactly at the minimum is applicable.
    pub fn is_applicable(&self, total_internal_participants: u32) -> bool {
        total_internal_participants >= self.min_internal_participants
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendDecision {
    Allow,
    /// The host resumes the send only on explicit user override.
    BlockWithPrompt { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    Clear,
    Show { text: String },
}

pub fn decide_send(estimate: Option<&Estimate>, policy: &CostPolicy) -> SendDecision {
    match estimate {
        Some(estimate) if estimate.applicable => SendDecision::BlockWithPrompt {
            message: send_prompt(&estimate.result, policy),
        },
        _ => SendDecision::Allow,
    }
}

pub fn decide_advisory(estimate: Option<&Estimate>, policy: &CostPolicy) -> Advisory {
    match estimate {
        Some(estimate) if estimate.applicable => Advisory::Show {
            text: advisory_text(&estimate.result, policy),
        },
        _ => Advisory::Clear,
    }
}
