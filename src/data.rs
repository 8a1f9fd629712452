// src/data.rs
//! Plain data shapes shared by the parser, the selector and the exporters.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

use crate::config::consts::DEPARTURE_FMT;
use crate::core::sanitize::slugify;
use crate::error::{Result, TrainError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub code: String,
}

impl Station {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self { name: name.into(), code: code.into() }
    }

    /// "Howrah Jn" + "HWH" → "Howrah-Jn-HWH"
    pub fn slug(&self) -> String {
        slugify(&self.name, &self.code)
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.name.trim(), self.code.trim().to_uppercase())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub origin: Station,
    pub destination: Station,
}

impl Route {
    pub fn new(origin: Station, destination: Station) -> Self {
        Self { origin, destination }
    }

    /// Every name and code must carry something besides whitespace.
    pub fn validate(&self) -> Result<()> {
        let parts = [
            &self.origin.name,
            &self.origin.code,
            &self.destination.name,
            &self.destination.code,
        ];
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(TrainError::InvalidInput(s!("All parameters must be provided")));
        }
        Ok(())
    }
}

/// One listing row as the site describes it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    pub train_number: String,
    pub train_name: String,
    pub train_type: String,
    pub source: String,
    pub departure_time: String,
    pub destination: String,
    pub arrival_time: String,
    pub duration: String,
    pub booking_available: bool,
    pub advance_reservation_period: String,
    pub start_date: String,
    pub end_date: String,
    pub booking_classes: Vec<String>,
    pub notices: Vec<String>,
    pub has_pantry: bool,
    pub is_limited_run: bool,
}

/// A train pinned to a concrete departure instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduledTrain {
    #[serde(flatten)]
    pub train: Train,
    #[serde(serialize_with = "serialize_departure")]
    pub departure_datetime: NaiveDateTime,
    /// "YYYY-MM-DD HH:MM", or "Unknown" when the site gave no usable time.
    pub departure_datetime_str: String,
    #[serde(skip)]
    pub departure_known: bool,
}

fn serialize_departure<S: Serializer>(dt: &NaiveDateTime, ser: S) -> std::result::Result<S::Ok, S::Error> {
    ser.collect_str(&dt.format(DEPARTURE_FMT))
}
