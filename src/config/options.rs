// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::error::{Result, TrainError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub net: NetOptions,
    pub selection: SelectionOptions,
    pub export: ExportOptions,
    pub server: ServerOptions,
}

impl AppOptions {
    /// Read a TOML file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            TrainError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let opts: AppOptions = toml::from_str(text)?;
        opts.selection.check()?;
        Ok(opts)
    }

    /// `--config` given → must load; otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NetOptions {
    pub base_url: String,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub timeout_secs: u64,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            accept: s!(ACCEPT),
            accept_language: s!(ACCEPT_LANGUAGE),
            timeout_secs: TIMEOUT_SECS,
        }
    }
}

impl NetOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectionOptions {
    /// How many departures the "next N" modes keep.
    pub count: usize,
    /// Look-ahead for the local-only mode, in minutes.
    pub local_window_mins: i64,
    pub non_local_keywords: Vec<String>,
    pub local_keywords: Vec<String>,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            count: NEXT_COUNT,
            local_window_mins: LOCAL_WINDOW_MINS,
            non_local_keywords: NON_LOCAL_KEYWORDS.iter().map(|k| s!(*k)).collect(),
            local_keywords: LOCAL_KEYWORDS.iter().map(|k| s!(*k)).collect(),
        }
    }
}

impl SelectionOptions {
    fn check(&self) -> Result<()> {
        if self.count == 0 {
            return Err(TrainError::Config(s!("selection.count must be at least 1")));
        }
        if !(0..=MAX_LOCAL_WINDOW_MINS).contains(&self.local_window_mins) {
            return Err(TrainError::Config(format!(
                "selection.local_window_mins must be between 0 and {MAX_LOCAL_WINDOW_MINS}"
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUT_FILE) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerOptions {
    pub bind: String,
    pub cors_origins: Vec<String>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            bind: s!(DEFAULT_BIND),
            cors_origins: CORS_ORIGINS.iter().map(|o| s!(*o)).collect(),
        }
    }
}
