//! FILENAME: app/cli/src/logging.rs
// PURPOSE: Logger setup for the evaluator binary.
// FORMAT: seq|level|category|message

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use env_logger::{Builder, Env};

use crate::error::AppResult;

/// Global sequence counter shared by every log record
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Formats one record as `seq|LEVEL|category|message`.
pub fn format_line(seq: u64, level: log::Level, category: &str, message: &str) -> String {
    format!("{}|{}|{}|{}", seq, level, category, message)
}

/// Installs the stderr logger. `RUST_LOG` overrides `default_filter`.
pub fn init(default_filter: &str) -> AppResult<()> {
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let line = format_line(
                next_seq(),
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{}", line)
        })
        .try_init()?;
    Ok(())
}
