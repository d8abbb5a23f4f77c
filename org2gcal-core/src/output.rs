//! Writing converted events to disk.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{TimelogError, TimelogResult};
use crate::event::Event;

/// Serialize `events` as one JSON array and write it to `path`.
///
/// The events are serialized before the file is opened, so a serialization
/// failure leaves any existing file untouched. The file is truncated, so a
/// shorter array never leaves stale bytes from a previous run behind.
pub fn write_events(path: &Path, events: &[Event]) -> TimelogResult<()> {
    let body = serde_json::to_vec(events)?;

    let write_err = |source: io::Error| TimelogError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let file = options.open(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&body).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!(count = events.len(), path = %path.display(), "wrote events");
    Ok(())
}
