// tests/pipeline.rs
//
// Whole pipeline against a saved listing page, no network.
//
use std::fs;

use chrono::{NaiveDate, NaiveDateTime};
use train_scrape::config::options::AppOptions;
use train_scrape::core::net::PageSource;
use train_scrape::data::{Route, Station};
use train_scrape::file;
use train_scrape::scrape::{collect_trains, SelectionMode};
use train_scrape::specs::trains::parse_document;
use train_scrape::Result;

const SAMPLE: &str = include_str!("fixtures/etrain_sample.html");

struct Fixture;
impl PageSource for Fixture {
    fn get(&self, _url: &str) -> Result<String> {
        Ok(SAMPLE.to_string())
    }
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 21).unwrap().and_hms_opt(h, m, 0).unwrap()
}

fn route() -> Route {
    Route::new(Station::new("Howrah Jn", "HWH"), Station::new("Chittaranjan", "CRJ"))
}

#[test]
fn sample_rows_parse() {
    let trains = parse_document(SAMPLE).unwrap().unwrap();
    // six rows, one with a broken payload
    assert_eq!(trains.len(), 5);

    let intercity = trains.iter().find(|t| t.train_number == "13011").unwrap();
    assert_eq!(intercity.booking_classes, vec!["CC", "2S"]);
    assert_eq!(intercity.notices, vec!["Rescheduled by 30 min on \"21 May\""]);
    assert!(intercity.has_pantry);
    assert!(intercity.booking_available);
    assert_eq!(intercity.advance_reservation_period, "120");

    let memu = trains.iter().find(|t| t.train_number == "63501").unwrap();
    assert!(memu.is_limited_run);
    assert!(!memu.booking_available);
    assert_eq!(memu.start_date, "01-05-2025");
    assert!(memu.booking_classes.is_empty());

    let vb = trains.iter().find(|t| t.train_name == "Vande Bharat").unwrap();
    assert_eq!(vb.train_number, "22301");
    assert_eq!(vb.departure_time, "");
}

#[test]
fn morning_run_is_mixed() {
    let out = collect_trains(&Fixture, &AppOptions::default(), &route(), at(8, 0), None)
        .unwrap()
        .unwrap();
    assert_eq!(out.total_found, 5);
    assert_eq!(out.url, "https://etrain.info/trains/Howrah-Jn-HWH-to-Chittaranjan-CRJ?date=20250521");
    assert_eq!(out.selection.mode, SelectionMode::Mixed);

    let nums: Vec<&str> = out.selection.trains.iter().map(|t| t.train.train_number.as_str()).collect();
    assert_eq!(nums, vec!["37311", "13011", "63501"]);
}

#[test]
fn late_run_rolls_everything_to_tomorrow() {
    let out = collect_trains(&Fixture, &AppOptions::default(), &route(), at(23, 0), None)
        .unwrap()
        .unwrap();
    let firsts: Vec<&str> = out.selection.trains.iter().map(|t| t.departure_datetime_str.as_str()).collect();
    assert_eq!(firsts, vec!["2025-05-22 06:05", "2025-05-22 08:20", "2025-05-22 09:15"]);
}

#[test]
fn selection_written_as_json() {
    let out = collect_trains(&Fixture, &AppOptions::default(), &route(), at(8, 0), None)
        .unwrap()
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("next.json");
    let written = file::write_json(&target, &out.selection.trains).unwrap();
    assert_eq!(written, target);

    let text = fs::read_to_string(&written).unwrap();
    assert!(text.starts_with("[\n  {"), "two-space pretty print");

    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["train_number"], "37311");
    assert_eq!(arr[0]["departure_datetime"], "2025-05-21 08:20:00");
    assert_eq!(arr[0]["departure_datetime_str"], "2025-05-21 08:20");
    assert_eq!(arr[1]["has_pantry"], true);
    assert_eq!(arr[1]["booking_classes"][1], "2S");
    assert_eq!(arr[2]["is_limited_run"], true);
}

#[test]
fn directory_out_path_uses_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let resolved = file::resolve_out_path(Some(dir.path()), &AppOptions::default().export.out_path).unwrap();
    assert_eq!(resolved, dir.path().join("next_3_trains.json"));
}
