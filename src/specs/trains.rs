// src/specs/trains.rs
//! Scraping *spec* for the trains-between-stations listing.
//!
//! Every listing row is a `<tr data-train='{…}'>`. The attribute carries a small
//! JSON object with short keys:
//!
//! | key    | field            |
//! |--------|------------------|
//! | `num`  | train number     |
//! | `name` | train name       |
//! | `typ`  | train type       |
//! | `s`    | source station   |
//! | `st`   | departure `HH:MM`|
//! | `d`    | destination      |
//! | `dt`   | arrival `HH:MM`  |
//! | `tt`   | travel time      |
//!
//! The row's own attributes add booking flags (`book`, `ar`, `sd`, `ed`); icons
//! inside the row flag pantry, limited runs and notices.

use scraper::{ElementRef, Html, Selector};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::sanitize::clean_notice;
use crate::data::Train;
use crate::error::{Result, TrainError};

struct Selectors {
    row: Selector,
    flex_row: Selector,
    cavlink: Selector,
    notice: Selector,
    pantry: Selector,
    limited: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            row: sel("tr[data-train]")?,
            flex_row: sel("div.flexRow")?,
            cavlink: sel("a.cavlink")?,
            notice: sel("i.icon-info-circled")?,
            pantry: sel("i.icon-food")?,
            limited: sel("i.icon-date")?,
        })
    }
}

fn sel(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| TrainError::Selector(format!("{css}: {e}")))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Payload {
    #[serde(deserialize_with = "lenient")]
    num: String,
    #[serde(deserialize_with = "lenient")]
    name: String,
    #[serde(deserialize_with = "lenient")]
    typ: String,
    #[serde(deserialize_with = "lenient")]
    s: String,
    #[serde(deserialize_with = "lenient")]
    st: String,
    #[serde(deserialize_with = "lenient")]
    d: String,
    #[serde(deserialize_with = "lenient")]
    dt: String,
    #[serde(deserialize_with = "lenient")]
    tt: String,
}

/// Strings pass through, null is empty, anything else is rendered as JSON text (`12345`).
fn lenient<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => s!(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Parse a listing page.
///
/// `Ok(None)` when the page has no `tr[data-train]` rows at all (unknown station,
/// layout change, error page). Rows whose payload does not decode are skipped.
pub fn parse_document(doc: &str) -> Result<Option<Vec<Train>>> {
    let sel = Selectors::new()?;
    let html = Html::parse_document(doc);

    let mut seen = 0usize;
    let mut trains = Vec::new();
    for row in html.select(&sel.row) {
        seen += 1;
        match parse_row(row, &sel) {
            Ok(t) => trains.push(t),
            Err(e) => warn!(row = seen, "Error processing row: {e}"),
        }
    }

    if seen == 0 {
        debug!("no tr[data-train] rows in document");
        return Ok(None);
    }
    Ok(Some(trains))
}

fn parse_row(row: ElementRef<'_>, sel: &Selectors) -> std::result::Result<Train, serde_json::Error> {
    let el = row.value();
    let payload = match serde_json::from_str(el.attr("data-train").unwrap_or_default())? {
        obj @ Value::Object(_) => Payload::deserialize(obj)?,
        other => return Err(de::Error::custom(format!("payload is not an object: {other}"))),
    };

    let booking_classes = row
        .select(&sel.flex_row)
        .next()
        .map(|div| {
            div.select(&sel.cavlink)
                .map(|a| a.text().collect::<String>().trim().to_string())
                .collect()
        })
        .unwrap_or_default();

    let notices = row
        .select(&sel.notice)
        .filter_map(|i| i.value().attr("etitle"))
        .map(clean_notice)
        .collect();

    Ok(Train {
        train_number: payload.num,
        train_name: payload.name,
        train_type: payload.typ,
        source: payload.s,
        departure_time: payload.st,
        destination: payload.d,
        arrival_time: payload.dt,
        duration: payload.tt,
        booking_available: el.attr("book") == Some("1"),
        advance_reservation_period: s!(el.attr("ar").unwrap_or("0")),
        start_date: s!(el.attr("sd").unwrap_or_default()),
        end_date: s!(el.attr("ed").unwrap_or_default()),
        booking_classes,
        notices,
        has_pantry: row.select(&sel.pantry).next().is_some(),
        is_limited_run: row.select(&sel.limited).next().is_some(),
    })
}
