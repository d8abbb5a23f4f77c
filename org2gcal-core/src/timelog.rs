//! Time-log parsing.
//!
//! A time log is a list of lines like `- 9:00 write spec`: a marker token, a
//! clock value, and a description. Each line marks the moment an activity
//! ended, so an event runs from the previous line's clock to its own.

use std::fmt::Display;
use std::io::BufRead;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use tracing::debug;

use crate::clock::ClockTime;
use crate::error::{TimelogError, TimelogResult};
use crate::event::Event;

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub clock: ClockTime,
    pub summary: String,
}

impl LogEntry {
    /// Parse a trimmed, non-blank line. `line_no` is 1-based and only used
    /// for error messages.
    pub fn parse(line: &str, line_no: usize) -> TimelogResult<Self> {
        let malformed = || TimelogError::MalformedLine {
            line_no,
            line: line.to_string(),
        };

        // The marker (`-`, `*`, ...) carries no information.
        let (_marker, rest) = next_token(line).ok_or_else(malformed)?;
        let (clock, summary) = next_token(rest).ok_or_else(malformed)?;

        Ok(LogEntry {
            clock: clock.parse()?,
            summary: summary.trim_end().to_string(),
        })
    }
}

/// Split off the first whitespace-delimited token, returning it and the
/// remainder with leading whitespace removed.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.split_once(char::is_whitespace) {
        Some((token, rest)) => Some((token, rest.trim_start())),
        None => Some((s, "")),
    }
}

/// Start of `date` in `tz`. Fails when a DST transition skips midnight.
pub fn midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> TimelogResult<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or(TimelogError::NonexistentMidnight(date))
}

/// Read log lines until a blank line or end of input and turn them into
/// events on the day starting at `midnight`.
///
/// Each event starts where the previous one ended. The first event has no
/// predecessor and starts at its own end, so it is zero-length.
///
/// Nothing is returned unless every line parses; a read error or a bad line
/// fails the whole conversion.
pub fn convert<R, Tz>(
    reader: R,
    midnight: &DateTime<Tz>,
    calendar_id: &str,
) -> TimelogResult<Vec<Event>>
where
    R: BufRead,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut events = Vec::new();
    let mut cursor: Option<DateTime<Tz>> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            debug!(line_no = idx + 1, "blank line, end of time log");
            break;
        }

        let entry = LogEntry::parse(line, idx + 1)?;
        let end = entry.clock.after(midnight)?;
        let start = cursor.take().unwrap_or_else(|| end.clone());

        events.push(Event::new(calendar_id, entry.summary, &start, &end));
        cursor = Some(end);
    }

    debug!(count = events.len(), "converted time log");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use std::io::{self, BufReader, Cursor, Read};

    fn tokyo_midnight() -> DateTime<FixedOffset> {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        midnight(&tz, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()).unwrap()
    }

    fn convert_str(input: &str) -> TimelogResult<Vec<Event>> {
        convert(Cursor::new(input), &tokyo_midnight(), "primary")
    }

    // --- LogEntry::parse ---

    #[test]
    fn parse_splits_marker_clock_and_summary() {
        let entry = LogEntry::parse("- 9:00 write spec", 1).unwrap();
        assert_eq!(entry.clock, ClockTime::new(9, 0));
        assert_eq!(entry.summary, "write spec");
    }

    #[test]
    fn parse_keeps_inner_whitespace_of_summary() {
        let entry = LogEntry::parse("*\t10:30   review   code  ", 1).unwrap();
        assert_eq!(entry.clock, ClockTime::new(10, 30));
        assert_eq!(entry.summary, "review   code");
    }

    #[test]
    fn parse_allows_missing_summary() {
        let entry = LogEntry::parse("- 12:00", 1).unwrap();
        assert_eq!(entry.summary, "");
    }

    #[test]
    fn parse_rejects_line_without_clock() {
        let err = LogEntry::parse("lunch", 4).unwrap_err();
        match err {
            TimelogError::MalformedLine { line_no, line } => {
                assert_eq!(line_no, 4);
                assert_eq!(line, "lunch");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_bad_clock() {
        let err = LogEntry::parse("- 9-00 write spec", 1).unwrap_err();
        assert!(matches!(err, TimelogError::ClockParse { .. }));
    }

    // --- convert ---

    #[test]
    fn convert_chains_events() {
        let events = convert_str("- 9:00 write spec\n- 10:30 review code\n").unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].calendar_id, "primary");
        assert_eq!(events[0].resource.summary, "write spec");
        assert_eq!(events[0].resource.start.date_time, "2024-03-05T09:00:00+0900");
        assert_eq!(events[0].resource.end.date_time, "2024-03-05T09:00:00+0900");
        assert_eq!(events[1].resource.summary, "review code");
        assert_eq!(events[1].resource.start.date_time, "2024-03-05T09:00:00+0900");
        assert_eq!(events[1].resource.end.date_time, "2024-03-05T10:30:00+0900");
    }

    #[test]
    fn convert_links_consecutive_events() {
        let input = "- 8:15 a\n- 9:00 b\n- 9:45 c\n- 13:00 d\n";
        let events = convert_str(input).unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0].resource.start, events[0].resource.end);
        for pair in events.windows(2) {
            assert_eq!(pair[0].resource.end, pair[1].resource.start);
        }
    }

    #[test]
    fn convert_stops_at_blank_line() {
        let events = convert_str("- 9:00 a\n   \n- 10:00 b\n").unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn convert_accepts_end_of_input_without_blank_line() {
        let events = convert_str("- 9:00 a\n- 10:00 b").unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn convert_empty_input() {
        assert!(convert_str("").unwrap().is_empty());
        assert!(convert_str("\n- 9:00 a\n").unwrap().is_empty());
    }

    #[test]
    fn convert_rolls_into_next_day() {
        let events = convert_str("- 23:30 late\n- 24:15 later\n").unwrap();
        assert_eq!(events[1].resource.end.date_time, "2024-03-06T00:15:00+0900");
    }

    #[test]
    fn convert_fails_on_bad_line() {
        let err = convert_str("- 9:00 a\n- 9-00 b\n").unwrap_err();
        assert!(matches!(err, TimelogError::ClockParse { .. }));

        let err = convert_str("- 9:00 a\nnope\n").unwrap_err();
        assert!(matches!(err, TimelogError::MalformedLine { line_no: 2, .. }));
    }

    #[test]
    fn convert_fails_on_invalid_utf8() {
        let input: &[u8] = b"- 9:00 a\n- 10:00 \xff\xfe\n";
        let err = convert(input, &tokyo_midnight(), "primary").unwrap_err();
        assert!(matches!(err, TimelogError::InputRead(_)));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn convert_fails_on_read_error() {
        let err = convert(BufReader::new(FailingReader), &tokyo_midnight(), "primary").unwrap_err();
        assert!(matches!(err, TimelogError::InputRead(_)));
    }

    #[test]
    fn midnight_in_zone() {
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        let start = midnight(&tz, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()).unwrap();
        assert_eq!(start.to_rfc3339(), "2024-01-31T00:00:00-03:00");
    }
}
