//! HTTP request handlers for the climate observation API
//!
//! Each handler is stateless: it converts path parameters into dates, calls
//! one store operation, and serializes the result to JSON. Malformed dates
//! surface as a 400 with a fixed-shape error body.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use tracing::{instrument, warn};

use crate::error::ClimateApiError;
use crate::models::{RoutesResponse, StationsResponse, TempStats, TemperatureData};
use crate::store::ClimateStore;

/// Route templates documented by the index route.
const ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/<start>",
    "/api/v1.0/<start>/<end>",
];

/// Builds the application router over a shared store handle.
///
/// Static segments take precedence over the `{start}` capture, so the named
/// views are never shadowed by the date routes.
pub fn router(store: ClimateStore) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(temp_stats_from))
        .route("/api/v1.0/{start}/{end}", get(temp_stats_range))
        .with_state(store)
}

async fn home() -> Json<RoutesResponse> {
    Json(RoutesResponse {
        routes: ROUTES.to_vec(),
    })
}

#[instrument(skip(store))]
async fn precipitation(
    State(store): State<ClimateStore>,
) -> Result<Json<BTreeMap<NaiveDate, Option<f64>>>, ClimateApiError> {
    Ok(Json(store.precipitation_window().await?))
}

#[instrument(skip(store))]
async fn stations(
    State(store): State<ClimateStore>,
) -> Result<Json<StationsResponse>, ClimateApiError> {
    let stations = store.station_codes().await?;
    Ok(Json(StationsResponse { stations }))
}

#[instrument(skip(store))]
async fn tobs(State(store): State<ClimateStore>) -> Result<Json<TemperatureData>, ClimateApiError> {
    let temperature_data = store.most_active_station_temps().await?;
    Ok(Json(TemperatureData { temperature_data }))
}

#[instrument(skip(store))]
async fn temp_stats_from(
    State(store): State<ClimateStore>,
    Path(start): Path<String>,
) -> Result<Json<TempStats>, ClimateApiError> {
    let start = parse_date(&start)?;
    Ok(Json(store.temperature_stats(start, None).await?))
}

#[instrument(skip(store))]
async fn temp_stats_range(
    State(store): State<ClimateStore>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TempStats>, ClimateApiError> {
    let start = parse_date(&start)?;
    let end = parse_date(&end)?;
    Ok(Json(store.temperature_stats(start, Some(end)).await?))
}

/// Strict ISO `YYYY-MM-DD` parse for path segments.
fn parse_date(segment: &str) -> Result<NaiveDate, ClimateApiError> {
    NaiveDate::parse_from_str(segment, "%Y-%m-%d").map_err(|_| {
        warn!(segment, "rejected malformed date segment");
        ClimateApiError::InvalidDate
    })
}
