// src/report.rs
// Console listing of a selection.

use std::fmt::Write;

use crate::config::consts::UNKNOWN;
use crate::scrape::{Selection, SelectionMode};

const BANNER_WIDTH: usize = 80;
const RULE_WIDTH: usize = 60;

pub fn headline(sel: &Selection) -> String {
    let n = sel.count;
    match sel.mode {
        SelectionMode::Mixed => format!("FIRST {n} TRAINS (Mixed Local and Non-Local)"),
        SelectionMode::NonLocal => format!("NEXT {n} NON-LOCAL TRAINS"),
        SelectionMode::Local => format!("ALL TRAINS UP TO {} FROM NOW (Local Trains Only)", window_label(sel).to_uppercase()),
        SelectionMode::LocalFallback => format!("NEXT {n} TRAINS (Fallback - No trains within {})", window_label(sel)),
        SelectionMode::Other => format!("NEXT {n} TRAINS (Other Types)"),
    }
}

fn window_label(sel: &Selection) -> String {
    match (sel.window_end - sel.now).num_minutes() {
        60 => s!("1 hour"),
        m if m > 0 && m % 60 == 0 => format!("{} hours", m / 60),
        m => format!("{m} min"),
    }
}

/// One-line reason printed before the listing.
pub fn mode_note(sel: &Selection) -> String {
    let n = sel.count;
    match sel.mode {
        SelectionMode::Mixed => format!("Both local and non-local trains detected! Showing first {n} trains."),
        SelectionMode::NonLocal => format!("Only non-local trains detected! Showing next {n} non-local trains."),
        SelectionMode::Local => format!(
            "Only local trains detected! Found {} trains up to {}",
            sel.trains.len(),
            sel.window_end.format("%H:%M")
        ),
        SelectionMode::LocalFallback => format!(
            "Only local trains detected! No trains up to {}. Falling back to next {n} trains.",
            sel.window_end.format("%H:%M")
        ),
        SelectionMode::Other => format!("No specific train types detected. Showing next {n} trains."),
    }
}

pub fn render_selection(sel: &Selection) -> String {
    let mut out = String::new();
    if sel.is_empty() {
        out.push_str("\nNo trains found.\n");
        return out;
    }

    let bar = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);
    let _ = writeln!(out, "\n{bar}\n{}\n{bar}", headline(sel));

    for (i, st) in sel.trains.iter().enumerate() {
        let t = &st.train;
        let classes = if t.booking_classes.is_empty() { s!("None") } else { t.booking_classes.join(", ") };
        let _ = writeln!(out, "\n{}. Train No: {}", i + 1, t.train_number);
        let _ = writeln!(out, "   Name: {}", t.train_name);
        let _ = writeln!(out, "   Type: {}", t.train_type);
        let departs = if st.departure_known { t.departure_time.as_str() } else { UNKNOWN };
        let _ = writeln!(out, "   Departure: {departs} from {}", t.source);
        let _ = writeln!(out, "   Arrival: {} at {}", t.arrival_time, t.destination);
        let _ = writeln!(out, "   Duration: {}", t.duration);
        let _ = writeln!(out, "   Booking Classes: {classes}");
        let _ = writeln!(out, "{rule}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::config::options::SelectionOptions;
    use crate::data::Train;
    use crate::scrape::select::select;

    fn now() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 21).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn listing_blocks() {
        let trains = vec![Train {
            train_number: s!("13011"),
            train_name: s!("Intercity Express"),
            train_type: s!("Exp"),
            source: s!("HWH"),
            departure_time: s!("09:15"),
            destination: s!("CRJ"),
            arrival_time: s!("12:40"),
            duration: s!("03:25"),
            booking_classes: vec![s!("CC"), s!("2S")],
            ..Train::default()
        }];
        let sel = select(trains, now(), &SelectionOptions::default());
        let text = render_selection(&sel);

        assert!(text.contains("NEXT 3 NON-LOCAL TRAINS"));
        assert!(text.contains("1. Train No: 13011"));
        assert!(text.contains("   Departure: 09:15 from HWH"));
        assert!(text.contains("   Arrival: 12:40 at CRJ"));
        assert!(text.contains("   Booking Classes: CC, 2S"));
        assert!(text.contains(&"=".repeat(80)));
    }

    #[test]
    fn fallback_headline_uses_window() {
        let trains = vec![Train { train_name: s!("Local"), departure_time: s!("11:00"), ..Train::default() }];
        let sel = select(trains, now(), &SelectionOptions::default());
        assert_eq!(headline(&sel), "NEXT 3 TRAINS (Fallback - No trains within 1 hour)");

        let opts = SelectionOptions { local_window_mins: 45, ..SelectionOptions::default() };
        let trains = vec![Train { train_name: s!("Local"), departure_time: s!("08:30"), ..Train::default() }];
        let sel = select(trains, now(), &opts);
        assert_eq!(headline(&sel), "ALL TRAINS UP TO 45 MIN FROM NOW (Local Trains Only)");
    }

    #[test]
    fn unparseable_departure_shows_unknown() {
        let trains = vec![Train {
            train_number: s!("22301"),
            source: s!("HWH"),
            departure_time: s!("--:--"),
            ..Train::default()
        }];
        let sel = select(trains, now(), &SelectionOptions::default());
        let text = render_selection(&sel);
        assert!(text.contains("   Departure: Unknown from HWH"));
        assert!(!text.contains("--:--"));
    }

    #[test]
    fn empty_selection() {
        let sel = select(Vec::new(), now(), &SelectionOptions::default());
        assert_eq!(render_selection(&sel), "\nNo trains found.\n");
        assert_eq!(mode_note(&sel), "No specific train types detected. Showing next 3 trains.");
    }

    #[test]
    fn local_note_names_window_end() {
        let trains = vec![Train { train_name: s!("Local"), departure_time: s!("08:30"), ..Train::default() }];
        let sel = select(trains, now(), &SelectionOptions::default());
        assert_eq!(mode_note(&sel), "Only local trains detected! Found 1 trains up to 09:00");
        assert!(render_selection(&sel).contains("Booking Classes: None"));
    }
}
