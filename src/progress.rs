// src/progress.rs
use chrono::NaiveDate;

use crate::data::Route;
use crate::scrape::Selection;

/// Lightweight progress reporting for the scrape pipeline.
/// Frontends (CLI/API) implement this to surface status to users.
pub trait Progress {
    /// Called before the page is fetched. `date` is the travel date in `url`.
    fn begin(&mut self, _route: &Route, _url: &str, _date: NaiveDate) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once the page is parsed, with the number of usable rows.
    fn parsed(&mut self, _count: usize) {}

    /// Called at the end with whatever was selected (`None`: page had no listings).
    fn finish(&mut self, _selection: Option<&Selection>) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
