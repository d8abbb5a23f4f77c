//! Application context: config, time zone and output streams in one place,
//! plus the single failure path every error goes through.

use std::ffi::OsString;
use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeZone};
use org2gcal_core::{output, timelog};
use tracing::info;

use crate::cli::{self, Invocation, USAGE};
use crate::config::Config;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub struct App<Tz, O, E> {
    config: Config,
    tz: Tz,
    today: NaiveDate,
    out: O,
    err: E,
}

impl<Tz, O, E> App<Tz, O, E>
where
    Tz: TimeZone,
    Tz::Offset: Display,
    O: Write,
    E: Write,
{
    pub fn new(config: Config, tz: Tz, today: NaiveDate, out: O, err: E) -> Self {
        App {
            config,
            tz,
            today,
            out,
            err,
        }
    }

    /// Run with the full argument list and the time log on `input`.
    /// Returns the process exit code.
    pub fn run<I, T, R>(&mut self, args: I, input: R) -> u8
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
        R: BufRead,
    {
        match self.try_run(args, input) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => self.fail(&e),
        }
    }

    fn try_run<I, T, R>(&mut self, args: I, input: R) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
        R: BufRead,
    {
        let date = match cli::parse_args(args, self.today)? {
            Invocation::Help => return self.usage(),
            Invocation::Convert(date) => date,
        };

        let midnight = timelog::midnight(&self.tz, date)?;
        info!(%date, calendar_id = %self.config.calendar_id, "converting time log");

        let events = timelog::convert(input, &midnight, &self.config.calendar_id)
            .context("Failed to convert time log")?;

        output::write_events(&self.config.output_path, &events)?;

        Ok(())
    }

    fn usage(&mut self) -> Result<()> {
        writeln!(self.out, "{}", USAGE).context("Failed to print usage")?;
        Ok(())
    }

    /// Message to the error stream, usage to the normal stream, exit code 1.
    fn fail(&mut self, error: &anyhow::Error) -> u8 {
        // Nowhere left to report a failure to write the report.
        let _ = writeln!(self.err, "{:#}", error);
        let _ = self.usage();
        EXIT_FAILURE
    }
}
