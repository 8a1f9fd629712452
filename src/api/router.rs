// src/api/router.rs
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, NaiveDateTime};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::error::ApiError;
use super::types::{timestamp, RootResponse, TrainInfo, TrainQuery, TrainResponse};
use crate::config::options::AppOptions;
use crate::core::net::PageSource;
use crate::progress::NullProgress;
use crate::scrape;

/// Shared handler state.
#[derive(Clone)]
pub struct ApiContext {
    pub options: Arc<AppOptions>,
    pub source: Arc<dyn PageSource + Send + Sync>,
    /// Reference time for "next departures".
    pub clock: fn() -> NaiveDateTime,
}

impl ApiContext {
    pub fn new(options: AppOptions, source: Arc<dyn PageSource + Send + Sync>) -> Self {
        Self { options: Arc::new(options), source, clock: local_now }
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn router(ctx: ApiContext) -> Router {
    let cors = cors_layer(&ctx.options.server.cors_origins);
    Router::new()
        .route("/", get(root))
        .route("/trains/json", get(trains_json))
        .with_state(ctx)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring unusable CORS origin");
                None
            }
        })
        .collect();

    // Credentials rule out a literal `*` for headers; echo what the browser asks for.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: s!("Train Info API is running"),
        version: s!(env!("CARGO_PKG_VERSION")),
        timestamp: timestamp(),
    })
}

async fn trains_json(
    State(ctx): State<ApiContext>,
    Query(q): Query<TrainQuery>,
) -> Result<Json<TrainResponse>, ApiError> {
    let route = q.route();
    route.validate()?;
    info!(
        "Fetching trains from {} to {}",
        route.origin.label(),
        route.destination.label()
    );

    let now = (ctx.clock)();
    let job = ctx.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let mut quiet = NullProgress;
        scrape::collect_trains(job.source.as_ref(), &job.options, &route, now, Some(&mut quiet))
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    let resp = match outcome {
        None => TrainResponse {
            success: true,
            data: Vec::new(),
            total_count: 0,
            timestamp: timestamp(),
            message: Some(s!("No trains found or invalid station code.")),
        },
        Some(o) => {
            let data: Vec<TrainInfo> = o.selection.trains.iter().map(TrainInfo::from).collect();
            let n = data.len();
            TrainResponse {
                success: true,
                data,
                total_count: n,
                timestamp: timestamp(),
                message: Some(format!("Found {n} trains")),
            }
        }
    };
    Ok(Json(resp))
}
