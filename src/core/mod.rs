pub mod calculator;
pub mod engine;
pub mod format;
pub mod gate;
pub mod gatherer;
pub mod messages;

pub use crate::domain::model::{
    Attendee, CalendarEvent, CostPolicy, CostResult, Estimate, Gathered, MeetingInput,
};
pub use crate::domain::ports::{CalendarEvents, MeetingSource, NotificationSink, TokenProvider};
pub use crate::utils::error::Result;
