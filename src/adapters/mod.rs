// Adapters layer: concrete implementations of the host ports (events API, tokens, notifications, local meeting files).

pub mod console;
pub mod file_source;
pub mod graph;
pub mod token;

pub use console::ConsoleNotifier;
pub use file_source::{FileMeetingSource, MeetingDocument};
pub use graph::GraphCalendarClient;
pub use token::StaticTokenProvider;
