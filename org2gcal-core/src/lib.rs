//! Core library for org2gcal.
//!
//! Turns a plain-text time log into calendar events and writes them out as
//! JSON. The CLI wraps this with argument handling and error reporting.

pub mod clock;
pub mod error;
pub mod event;
pub mod output;
pub mod timelog;

pub use clock::ClockTime;
pub use error::{TimelogError, TimelogResult};
pub use event::{Event, EventResource, EventTime};
pub use timelog::LogEntry;
