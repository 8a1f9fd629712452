// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://etrain.info";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
pub const TIMEOUT_SECS: u64 = 30;
pub const DATE_PARAM_FMT: &str = "%Y%m%d";

// Selection
pub const NEXT_COUNT: usize = 3;
pub const LOCAL_WINDOW_MINS: i64 = 60;
pub const MAX_LOCAL_WINDOW_MINS: i64 = 7 * 24 * 60;
pub const UNKNOWN_DEPARTURE_DAYS: i64 = 365; // sorts last
pub const NON_LOCAL_KEYWORDS: &[&str] = &[
    "express", "rajdhani", "shatabdi", "duronto", "garib rath",
    "superfast", "super fast", "fast", "mail", "special",
];
pub const LOCAL_KEYWORDS: &[&str] = &["local", "suburban", "passenger", "memu", "dmu", "emu"];

// Export
pub const DEFAULT_OUT_FILE: &str = "next_3_trains.json";
pub const DEPARTURE_FMT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEPARTURE_SHORT_FMT: &str = "%Y-%m-%d %H:%M";
pub const UNKNOWN: &str = "Unknown";

// Server
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:8080"];
