// src/scrape/mod.rs
mod scrape;
pub mod select;

pub use scrape::{collect_trains, ScrapeOutcome};
pub use select::{Selection, SelectionMode};
