//! Logging setup
//!
//! Library code only emits `tracing` events; the binary decides where they go.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log file used while the TUI owns the terminal
pub const TUI_LOG_FILE: &str = "word_scramble_tui.log";

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Line-oriented commands: events share the terminal on stderr
    Stderr,
    /// Full-screen mode: anything on stderr would be drawn over the UI
    File(PathBuf),
}

impl LogTarget {
    /// Target for a front end; the TUI always logs to [`TUI_LOG_FILE`]
    #[must_use]
    pub fn for_mode(tui: bool) -> Self {
        if tui {
            Self::File(PathBuf::from(TUI_LOG_FILE))
        } else {
            Self::Stderr
        }
    }

    /// Color escapes only make sense on a terminal
    #[must_use]
    pub fn uses_ansi(&self) -> bool {
        matches!(self, Self::Stderr)
    }

    fn make_writer(&self) -> BoxMakeWriter {
        match self {
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
            // An unwritable log file must not bring the game down
            Self::File(path) => match File::create(path) {
                Ok(file) => BoxMakeWriter::new(Arc::new(file)),
                Err(_) => BoxMakeWriter::new(std::io::sink),
            },
        }
    }
}

/// Default filter for a given `-v` count
#[must_use]
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "word_scramble=warn",
        1 => "word_scramble=info",
        2 => "word_scramble=debug",
        _ => "word_scramble=trace",
    }
}

/// Install the global subscriber, writing to `target`
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this more than once
/// is harmless; later calls are ignored.
pub fn init(verbosity: u8, target: &LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(target.make_writer())
                .with_ansi(target.uses_ansi())
                .with_target(false),
        )
        .try_init();
}
