// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge of the schedule site: *where the ground truth lives
//! in the HTML* and *how to read it back tolerantly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page into [`crate::data::Train`] rows.
//! - **Selector choice** (`tr[data-train]`, `div.flexRow a.cavlink`, the icon
//!   classes that flag pantry, limited runs and notices).
//! - **Tolerant extraction**: a malformed row is logged and skipped, the rest of
//!   the page still counts.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **URL building**.
//! - **Ordering or filtering** of departures (`scrape::select`).
//! - **Export formatting** (`file`, `report`).
//!
//! ## Typical call chain
//! ```text
//! CLI / API → scrape::collect_trains → core::net::PageSource::get
//!                                   ↘ specs::trains::parse_document
//!                                   ↘ scrape::select::select
//! ```
//!
//! ## Testing notes
//! Specs are testable **offline** against saved HTML (`tests/fixtures/`).
pub mod trains;
