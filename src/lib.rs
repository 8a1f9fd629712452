// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;

pub mod file;
pub mod log;
pub mod progress;
pub mod report;
pub mod scrape;

#[cfg(feature = "api")]
pub mod api;

pub use error::{Result, TrainError};
