use std::path::PathBuf;

/// Google's alias for the user's main calendar
pub const DEFAULT_CALENDAR_ID: &str = "primary";

/// Converted events are always written here, relative to the working directory
pub const OUTPUT_FILE: &str = "events.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Calendar the events are meant for (`CALENDAR_ID`)
    pub calendar_id: String,

    /// Where the JSON array is written
    pub output_path: PathBuf,
}

impl Config {
    /// Load config from the environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var("CALENDAR_ID").ok())
    }

    /// Build a config from an optional calendar id, falling back to
    /// `primary` when it is missing or empty.
    pub fn new(calendar_id: Option<String>) -> Self {
        let calendar_id = calendar_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_CALENDAR_ID.to_string());

        Config {
            calendar_id,
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }
}
