//! Tracing setup
//!
//! Logs go to stderr by default. The TUI owns the terminal, so a log file can
//! be given instead.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::trace;
use tracing_subscriber::{
    EnvFilter, Layer, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Default filter when neither `--log-level` nor `JOTTO_LOG` is given
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if `filter` is not a valid `EnvFilter` directive, the log
/// file cannot be created, or a subscriber is already installed.
pub fn init_tracing(filter: &str, log_file: Option<&Path>) -> Result<()> {
    let env_filter = parse_filter(filter)?;

    let fmt_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .boxed()
        }
        None => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    trace!("finished");
    Ok(())
}

fn parse_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter).with_context(|| format!("invalid log filter {filter:?}"))
}
