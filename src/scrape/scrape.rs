// src/scrape/scrape.rs
use chrono::NaiveDateTime;
use tracing::info;

use crate::{
    config::options::AppOptions,
    core::net::{self, PageSource},
    data::Route,
    error::Result,
    progress::Progress,
    specs,
};

use super::select::{self, Selection};

/// Everything one run produced.
#[derive(Clone, Debug)]
pub struct ScrapeOutcome {
    pub url: String,
    /// Rows parsed from the page, before selection.
    pub total_found: usize,
    pub selection: Selection,
}

/// Build the URL for today, fetch it, parse it, pick the departures to show.
///
/// `Ok(None)` when the page carries no listing rows at all. Fetch failures are
/// errors, not an empty result.
pub fn collect_trains(
    source: &dyn PageSource,
    opts: &AppOptions,
    route: &Route,
    now: NaiveDateTime,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Option<ScrapeOutcome>> {
    route.validate()?;

    let url = net::build_url(&opts.net.base_url, route, Some(now.date()));
    info!(
        from = %route.origin.label(),
        to = %route.destination.label(),
        %url,
        "fetching trains"
    );
    if let Some(p) = progress.as_deref_mut() {
        p.begin(route, &url, now.date());
    }

    let doc = source.get(&url)?;

    let Some(trains) = specs::trains::parse_document(&doc)? else {
        info!("No train data found in the page.");
        if let Some(p) = progress.as_deref_mut() {
            p.log("No train data found in the page.");
            p.finish(None);
        }
        return Ok(None);
    };

    let total_found = trains.len();
    info!(total_found, "parsed listing");
    if let Some(p) = progress.as_deref_mut() {
        p.parsed(total_found);
    }

    let selection = select::select(trains, now, &opts.selection);

    if let Some(p) = progress.as_deref_mut() {
        p.finish(Some(&selection));
    }

    Ok(Some(ScrapeOutcome { url, total_found, selection }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use chrono::NaiveDate;

    use crate::data::Station;
    use crate::error::TrainError;
    use crate::progress::NullProgress;
    use crate::scrape::SelectionMode;

    struct Canned {
        body: Result<String>,
        asked: RefCell<Vec<String>>,
    }

    impl PageSource for Canned {
        fn get(&self, url: &str) -> Result<String> {
            self.asked.borrow_mut().push(s!(url));
            match &self.body {
                Ok(b) => Ok(b.clone()),
                Err(_) => Err(TrainError::Status { status: 503, url: s!(url) }),
            }
        }
    }

    fn canned(body: Result<String>) -> Canned {
        Canned { body, asked: RefCell::new(Vec::new()) }
    }

    fn route() -> Route {
        Route::new(Station::new("Howrah Jn", "HWH"), Station::new("Chittaranjan", "CRJ"))
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 21).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Progress for Recorder {
        fn begin(&mut self, _route: &Route, url: &str, date: NaiveDate) { self.events.push(format!("begin {date} {url}")); }
        fn parsed(&mut self, count: usize) { self.events.push(format!("parsed {count}")); }
        fn finish(&mut self, sel: Option<&Selection>) {
            self.events.push(format!("finish {}", sel.map(|s| s.trains.len()).unwrap_or(0)));
        }
    }

    #[test]
    fn fetches_todays_url_and_selects() {
        let body = r#"<table><tr data-train='{"num":"1","name":"Tejas","st":"09:00"}'><td></td></tr></table>"#;
        let src = canned(Ok(s!(body)));
        let mut rec = Recorder::default();

        let out = collect_trains(&src, &AppOptions::default(), &route(), now(), Some(&mut rec))
            .unwrap()
            .unwrap();

        assert_eq!(
            src.asked.borrow().as_slice(),
            ["https://etrain.info/trains/Howrah-Jn-HWH-to-Chittaranjan-CRJ?date=20250521"]
        );
        assert_eq!(out.total_found, 1);
        assert_eq!(out.selection.mode, SelectionMode::Other);
        assert_eq!(out.selection.trains[0].departure_datetime_str, "2025-05-21 09:00");
        assert_eq!(rec.events.len(), 3);
        assert!(rec.events[0].starts_with("begin 2025-05-21 https://"));
        assert_eq!(rec.events[1], "parsed 1");
    }

    #[test]
    fn null_progress_changes_nothing() {
        let body = r#"<table><tr data-train='{"num":"7","st":"09:00"}'><td></td></tr></table>"#;
        let src = canned(Ok(s!(body)));
        let quiet = collect_trains(&src, &AppOptions::default(), &route(), now(), Some(&mut NullProgress))
            .unwrap()
            .unwrap();
        let bare = collect_trains(&src, &AppOptions::default(), &route(), now(), None).unwrap().unwrap();
        assert_eq!(quiet.selection, bare.selection);
    }

    #[test]
    fn page_without_rows_is_none() {
        let src = canned(Ok(s!("<html><body>Invalid station</body></html>")));
        let out = collect_trains(&src, &AppOptions::default(), &route(), now(), None).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn fetch_error_propagates() {
        let src = canned(Err(TrainError::InvalidInput(s!("unused"))));
        let err = collect_trains(&src, &AppOptions::default(), &route(), now(), None).unwrap_err();
        assert!(err.is_upstream());
    }

    #[test]
    fn blank_station_never_fetches() {
        let src = canned(Ok(s!("")));
        let bad = Route::new(Station::new("", "HWH"), Station::new("Chittaranjan", "CRJ"));
        let err = collect_trains(&src, &AppOptions::default(), &bad, now(), None).unwrap_err();
        assert!(matches!(err, TrainError::InvalidInput(_)));
        assert!(src.asked.borrow().is_empty());
    }
}
