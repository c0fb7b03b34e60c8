//! Finalization: turn a rendered script into a written file or an echo.
//!
//! Replacing an existing file keeps the old one under a backup name:
//!
//! ```text
//! schema.sql  ->  2026101614302547_backup_schema.sql
//! ```
//!
//! The new script is written to a sibling temp file before the old file is
//! moved aside, so at every step both versions exist on disk.

mod sink;

pub use sink::{FsSink, MemorySink, OutputSink};

use std::fmt;
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info};

use crate::config::ChainConfig;
use crate::error::ChainResult;

/// Marker between the timestamp and the original file name.
pub const BACKUP_MARKER: &str = "_backup_";

/// What finalization did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No statements were recorded.
    NothingChanged,
    /// The script was written to `path`. `backup` holds the previous file, if any.
    Written {
        path: PathBuf,
        backup: Option<PathBuf>,
    },
    /// No output path was configured; the script is returned for display.
    Echoed(String),
}

impl Outcome {
    /// The generated script, if it was echoed rather than written.
    pub fn echoed_sql(&self) -> Option<&str> {
        match self {
            Outcome::Echoed(sql) => Some(sql),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NothingChanged => f.write_str("CHAIN SQL SUCCESS, NOTHING CHANGED"),
            Outcome::Written { .. } | Outcome::Echoed(_) => f.write_str("CHAIN SQL SUCCESS"),
        }
    }
}

/// Deliver `sql` according to `config`.
pub fn emit(sql: String, config: &ChainConfig, sink: &mut dyn OutputSink) -> ChainResult<Outcome> {
    if sql.is_empty() {
        info!("no statements recorded");
        return Ok(Outcome::NothingChanged);
    }

    let Some(path) = config.output_path() else {
        debug!(bytes = sql.len(), "no output file configured, echoing");
        return Ok(Outcome::Echoed(sql));
    };

    let backup = replace_file(&path, &sql, &backup_prefix(), sink)?;
    info!(path = %path.display(), backup = ?backup, "SQL script written");

    Ok(Outcome::Written { path, backup })
}

/// Write `contents` to `path`, moving any existing file to `<prefix><basename>`.
///
/// Returns the backup path when a previous file was moved aside.
pub fn replace_file(
    path: &Path,
    contents: &str,
    prefix: &str,
    sink: &mut dyn OutputSink,
) -> ChainResult<Option<PathBuf>> {
    if !sink.exists(path) {
        sink.write(path, contents)?;
        return Ok(None);
    }

    let staging = sibling(path, ".", ".tmp");
    sink.write(&staging, contents)?;

    let backup = free_backup(path, prefix, sink);
    debug!(from = %path.display(), to = %backup.display(), "backing up existing file");
    sink.rename(path, &backup)?;
    sink.rename(&staging, path)?;

    Ok(Some(backup))
}

/// `<YYYYMMDDHHMMSS><NN>_backup_` for the current local time.
pub fn backup_prefix() -> String {
    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let salt: u8 = rand::rng().random_range(10..=99);
    format!("{}{}{}", stamp, salt, BACKUP_MARKER)
}

/// First unused backup name for `path`. A taken `<stamp>_backup_` becomes
/// `<stamp>_1_backup_`, `<stamp>_2_backup_`, ...
fn free_backup(path: &Path, prefix: &str, sink: &dyn OutputSink) -> PathBuf {
    let mut candidate = sibling(path, prefix, "");
    let stem = prefix.strip_suffix(BACKUP_MARKER).unwrap_or(prefix);
    let mut n = 1u32;
    while sink.exists(&candidate) {
        candidate = sibling(path, &format!("{}_{}{}", stem, n, BACKUP_MARKER), "");
        n += 1;
    }
    candidate
}

fn sibling(path: &Path, prefix: &str, suffix: &str) -> PathBuf {
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}{}{}", prefix, base, suffix))
}
