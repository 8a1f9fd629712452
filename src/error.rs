// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to fetch page: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("Bad selector: {0}")]
    Selector(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl TrainError {
    /// True when the website could not be reached or answered with an error.
    pub fn is_upstream(&self) -> bool {
        matches!(self, TrainError::Request(_) | TrainError::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, TrainError>;
