pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, HostEvent};

pub use app::{AddinHandlers, PanelContext, PanelController, PanelView};
pub use config::AppConfig;
pub use core::engine::CostEngine;
pub use core::gate::{Advisory, SendDecision, ThresholdGate};
pub use domain::model::{CostPolicy, CostResult, Estimate, Gathered, MeetingInput};
pub use utils::error::{CostError, Result};
