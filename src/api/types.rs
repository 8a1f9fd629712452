// src/api/types.rs
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::data::{Route, ScheduledTrain, Station};

/// Query string of `GET /trains/json`.
#[derive(Clone, Debug, Deserialize)]
pub struct TrainQuery {
    pub src_name: String,
    pub src_code: String,
    pub dst_name: String,
    pub dst_code: String,
}

impl TrainQuery {
    pub fn route(&self) -> Route {
        Route::new(
            Station::new(self.src_name.trim(), self.src_code.trim().to_uppercase()),
            Station::new(self.dst_name.trim(), self.dst_code.trim().to_uppercase()),
        )
    }
}

/// The subset of a listing the API hands out.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainInfo {
    pub train_number: String,
    pub train_name: String,
    pub train_type: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub source: String,
    pub destination: String,
    pub booking_classes: Vec<String>,
}

impl From<&ScheduledTrain> for TrainInfo {
    fn from(st: &ScheduledTrain) -> Self {
        let t = &st.train;
        Self {
            train_number: t.train_number.clone(),
            train_name: t.train_name.clone(),
            train_type: t.train_type.clone(),
            departure_time: t.departure_time.clone(),
            arrival_time: t.arrival_time.clone(),
            duration: t.duration.clone(),
            source: t.source.clone(),
            destination: t.destination.clone(),
            booking_classes: t.booking_classes.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainResponse {
    pub success: bool,
    pub data: Vec<TrainInfo>,
    pub total_count: usize,
    pub timestamp: String,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub timestamp: String,
}

/// Local wall-clock time, ISO-8601 without offset.
pub fn timestamp() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
