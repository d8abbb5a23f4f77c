//! Calendar event records in the shape the Google Calendar insert call expects.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// One event ready to be submitted to a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub calendar_id: String,
    pub resource: EventResource,
}

/// The event body. Empty strings are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResource {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    pub start: EventTime,
    pub end: EventTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_time: String,
}

impl EventTime {
    /// Local time with a numeric offset, e.g. `2024-03-05T09:00:00+0900`.
    pub const FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S%z";

    pub fn new<Tz>(at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        EventTime {
            date_time: at.format(Self::FORMAT).to_string(),
        }
    }
}

impl Event {
    /// Build an event spanning `start..end` with only a summary set.
    pub fn new<Tz>(
        calendar_id: impl Into<String>,
        summary: impl Into<String>,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Event {
            calendar_id: calendar_id.into(),
            resource: EventResource {
                summary: summary.into(),
                start: EventTime::new(start),
                end: EventTime::new(end),
                ..Default::default()
            },
        }
    }
}
