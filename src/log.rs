// src/log.rs
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Result, TrainError};

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. `RUST_LOG` beats `-v`.
/// Timestamps are elapsed time since start. With `log_file`, lines are appended
/// there without colour instead of going to stderr.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let builder = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::uptime())
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    crate::file::ensure_directory(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| TrainError::Config(format!("logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(7), "debug");
    }
}
