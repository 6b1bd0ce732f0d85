pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "meeting-cost")]
#[command(about = "Estimate what a meeting costs the organization")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run an add-in handler against a meeting JSON file
    Estimate {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = HostEvent::Calculate)]
        event: HostEvent,

        #[arg(long, help = "Print the cost breakdown as JSON")]
        json: bool,
    },
    /// Load the meeting panel from the calendar API
    Panel {
        #[arg(long)]
        meeting_id: Option<String>,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, help = "Access token (defaults to auth.token or GRAPH_TOKEN)")]
        token: Option<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostEvent {
    /// New appointment opened by the organizer
    New,
    /// Send requested
    Send,
    /// Recipients or time changed
    Changed,
    /// Manual calculate button
    Calculate,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Estimate { file, .. } => {
                validate_non_empty_string("file", &file.to_string_lossy())
            }
            Command::Panel {
                token: Some(token), ..
            } => validate_non_empty_string("token", token),
            Command::Panel { .. } => Ok(()),
        }
    }
}
