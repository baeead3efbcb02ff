use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

// Database entity models. The schema is owned by the archive; only the
// columns this service consumes are declared.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Station {
    pub station: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Measurement {
    pub station: String,
    pub date: NaiveDate,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

// API response DTOs (kept separate from the entity models so the wire shape
// can evolve independently of the archive schema)
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TempObservation {
    pub date: NaiveDate,
    pub tobs: f64,
}

/// Aggregate temperature statistics over a date range. All fields are null
/// when no measurement falls inside the range.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct TempStats {
    pub min_temperature: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemperatureData {
    pub temperature_data: Vec<TempObservation>,
}
