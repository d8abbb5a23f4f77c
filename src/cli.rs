//! Command-line arguments: `org2gcal [--help] [date]`.

use std::ffi::OsString;

use chrono::NaiveDate;
use clap::Parser;
use org2gcal_core::{TimelogError, TimelogResult};

/// Accepts `2024-3-5` as well as `2024-03-05`.
const DATE_FORMAT: &str = "%Y-%m-%d";

pub const USAGE: &str = "\
NAME:
   org2gcal - Convert time-log to json format for gcal

Usage:
   org2gcal [date]

DATE:
   format\tYYYY-M-D
   note\t\tThis argument is optional. if you do not specify this, date is used today.";

#[derive(Parser, Debug)]
#[command(name = "org2gcal", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Print usage and exit
    #[arg(long)]
    help: bool,

    /// Date the time log belongs to; only one is accepted
    dates: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Convert(NaiveDate),
}

/// Parse the full argument list (program name first). `today` is used when
/// no date is given.
pub fn parse_args<I, T>(args: I, today: NaiveDate) -> TimelogResult<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // Count raw argv, program name included, before clap swallows a `--`.
    let got = args.len();
    if got > 2 {
        return Err(TimelogError::ArgumentCount { got });
    }

    let cli = Cli::try_parse_from(args).map_err(|e| {
        let rendered = e.to_string();
        let message = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ");
        TimelogError::InvalidArguments(message.to_string())
    })?;

    match (cli.help, cli.dates.as_slice()) {
        (true, []) => Ok(Invocation::Help),
        (false, []) => Ok(Invocation::Convert(today)),
        (false, [date]) => parse_date(date).map(Invocation::Convert),
        _ => Err(TimelogError::ArgumentCount { got }),
    }
}

/// Parse `YYYY-M-D`: exactly four year digits, one or two for month and day.
pub fn parse_date(input: &str) -> TimelogResult<NaiveDate> {
    if !has_date_shape(input) {
        return Err(TimelogError::DateParse {
            input: input.to_string(),
            source: None,
        });
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| TimelogError::DateParse {
        input: input.to_string(),
        source: Some(source),
    })
}

/// chrono's `%Y` takes any number of digits plus a sign, and numeric fields
/// skip leading whitespace, so the digit counts are checked up front.
fn has_date_shape(input: &str) -> bool {
    let digits = |part: &str, len: std::ops::RangeInclusive<usize>| {
        len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    match input.split('-').collect::<Vec<_>>().as_slice() {
        [year, month, day] => digits(year, 4..=4) && digits(month, 1..=2) && digits(day, 1..=2),
        _ => false,
    }
}
