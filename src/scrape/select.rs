// src/scrape/select.rs
//! Pin each train to a departure instant, order them, and pick what to show.

use std::fmt;

use chrono::{Duration, NaiveDateTime, NaiveTime};
use tracing::{debug, info};

use crate::config::consts::{DEPARTURE_SHORT_FMT, UNKNOWN, UNKNOWN_DEPARTURE_DAYS};
use crate::config::options::SelectionOptions;
use crate::data::{ScheduledTrain, Train};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// Locals and non-locals both run: first N overall.
    Mixed,
    /// Only non-locals: first N of those.
    NonLocal,
    /// Only locals: everything inside the look-ahead window.
    Local,
    /// Only locals, but nothing inside the window: first N overall.
    LocalFallback,
    /// Nothing recognisable: first N overall.
    Other,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Mixed => "mixed",
            SelectionMode::NonLocal => "non_local",
            SelectionMode::Local => "local",
            SelectionMode::LocalFallback => "local_fallback",
            SelectionMode::Other => "other",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub mode: SelectionMode,
    pub trains: Vec<ScheduledTrain>,
    pub now: NaiveDateTime,
    /// End of the local look-ahead window (only meaningful for `Local*`).
    pub window_end: NaiveDateTime,
    pub count: usize,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }
}

/// "HH:MM" today; already gone → tomorrow. `None` for anything unparseable.
pub fn departure_at(time: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let (h, m) = time.trim().split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    let at = now.date().and_time(NaiveTime::from_hms_opt(h, m, 0)?);
    if at < now { Some(at + Duration::days(1)) } else { Some(at) }
}

pub fn schedule(train: Train, now: NaiveDateTime) -> ScheduledTrain {
    match departure_at(&train.departure_time, now) {
        Some(at) => ScheduledTrain {
            departure_datetime_str: at.format(DEPARTURE_SHORT_FMT).to_string(),
            departure_datetime: at,
            departure_known: true,
            train,
        },
        None => {
            if !train.departure_time.is_empty() {
                debug!(train = %train.train_number, time = %train.departure_time, "unparseable departure time");
            }
            ScheduledTrain {
                departure_datetime: now + Duration::days(UNKNOWN_DEPARTURE_DAYS),
                departure_datetime_str: s!(UNKNOWN),
                departure_known: false,
                train,
            }
        }
    }
}

fn matches_any(train: &Train, keywords: &[String]) -> bool {
    let name = train.train_name.to_lowercase();
    let typ = train.train_type.to_lowercase();
    keywords.iter().any(|k| {
        let k = k.to_lowercase();
        name.contains(&k) || typ.contains(&k)
    })
}

pub fn is_non_local(train: &Train, opts: &SelectionOptions) -> bool {
    matches_any(train, &opts.non_local_keywords)
}

pub fn is_local(train: &Train, opts: &SelectionOptions) -> bool {
    matches_any(train, &opts.local_keywords)
}

/// `now + mins`, saturating instead of overflowing.
fn window_end(now: NaiveDateTime, mins: i64) -> NaiveDateTime {
    Duration::try_minutes(mins.max(0))
        .and_then(|d| now.checked_add_signed(d))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Order by departure and apply the mode rules.
pub fn select(trains: Vec<Train>, now: NaiveDateTime, opts: &SelectionOptions) -> Selection {
    let mut sorted: Vec<ScheduledTrain> = trains.into_iter().map(|t| schedule(t, now)).collect();
    sorted.sort_by_key(|t| t.departure_datetime); // stable

    let has_non_local = sorted.iter().any(|t| is_non_local(&t.train, opts));
    let has_local = sorted.iter().any(|t| is_local(&t.train, opts));
    let window_end = window_end(now, opts.local_window_mins);
    let n = opts.count;

    let (mode, picked): (SelectionMode, Vec<ScheduledTrain>) = match (has_non_local, has_local) {
        (true, true) => (SelectionMode::Mixed, sorted.into_iter().take(n).collect()),
        (true, false) => (
            SelectionMode::NonLocal,
            sorted.into_iter().filter(|t| is_non_local(&t.train, opts)).take(n).collect(),
        ),
        (false, true) => {
            let in_window: Vec<ScheduledTrain> = sorted
                .iter()
                .filter(|t| t.departure_datetime <= window_end)
                .cloned()
                .collect();
            if in_window.is_empty() {
                info!("No trains found within {} min; falling back to next {n}", opts.local_window_mins);
                (SelectionMode::LocalFallback, sorted.into_iter().take(n).collect())
            } else {
                (SelectionMode::Local, in_window)
            }
        }
        (false, false) => (SelectionMode::Other, sorted.into_iter().take(n).collect()),
    };

    info!(mode = %mode, selected = picked.len(), "selection done");
    Selection { mode, trains: picked, now, window_end, count: n }
}
