// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::consts::DEFAULT_OUT_FILE;
use crate::data::ScheduledTrain;
use crate::error::{Result, TrainError};

/// Write the selected trains as a pretty-printed JSON array.
/// Returns the final path written to.
pub fn write_json(path: &Path, trains: &[ScheduledTrain]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, trains)?;
    out.flush()?;

    info!(path = %path.display(), count = trains.len(), "saved train data");
    Ok(path.to_path_buf())
}

/// `-o` may be a file or a directory; a directory gets the default file name.
/// Nothing given → `fallback` as-is.
pub fn resolve_out_path(user_o: Option<&Path>, fallback: &Path) -> Result<PathBuf> {
    let Some(user_o) = user_o else { return Ok(fallback.to_path_buf()) };
    let raw = user_o.to_string_lossy();
    if raw.trim().is_empty() {
        return Ok(fallback.to_path_buf());
    }

    let p = PathBuf::from(normalize_separators(&raw));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(DEFAULT_OUT_FILE))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(TrainError::InvalidInput(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
