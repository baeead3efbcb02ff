//! Data access layer over the climate observation archive.
//!
//! Every operation here is a single aggregate query over a date-filtered row
//! set. Dates are stored as ISO `YYYY-MM-DD` text, so lexical comparison in
//! SQL matches chronological order.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::Result;
use crate::error::ClimateApiError;
use crate::models::{Measurement, Station, TempObservation, TempStats};

/// Trailing window length used by the precipitation and tobs views.
const WINDOW_DAYS: i64 = 365;

/// Read-only handle over the `station` and `measurement` relations.
///
/// The pool is injected at construction so tests can supply an in-memory
/// fixture store instead of the production archive.
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Most recent observation date across all measurements.
    #[instrument(skip(self))]
    pub async fn latest_date(&self) -> Result<NaiveDate> {
        let latest: Option<NaiveDate> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        latest.ok_or(ClimateApiError::EmptyDataset)
    }

    /// Per-date precipitation over the trailing year ending at the latest
    /// observation date, bounds inclusive.
    ///
    /// The result is keyed per date, not per (station, date): rows sharing a
    /// date collapse to one entry, with later rows overwriting earlier ones.
    #[instrument(skip(self))]
    pub async fn precipitation_window(&self) -> Result<BTreeMap<NaiveDate, Option<f64>>> {
        let latest = self.latest_date().await?;
        let lower = latest - Duration::days(WINDOW_DAYS);

        let rows: Vec<Measurement> = sqlx::query_as(
            "SELECT station, date, prcp, tobs FROM measurement WHERE date >= ? AND date <= ?",
        )
        .bind(lower)
        .bind(latest)
        .fetch_all(&self.pool)
        .await?;

        let mut window = BTreeMap::new();
        for row in rows {
            window.insert(row.date, row.prcp);
        }
        Ok(window)
    }

    /// Every station code, one entry per station row, store-native order.
    #[instrument(skip(self))]
    pub async fn station_codes(&self) -> Result<Vec<String>> {
        let stations: Vec<Station> = sqlx::query_as("SELECT station FROM station")
            .fetch_all(&self.pool)
            .await?;
        Ok(stations.into_iter().map(|s| s.station).collect())
    }

    /// Temperature observations for the station with the highest measurement
    /// row count, restricted to the trailing year ending at the latest date.
    ///
    /// Count ties resolve to the store's first-encountered group.
    #[instrument(skip(self))]
    pub async fn most_active_station_temps(&self) -> Result<Vec<TempObservation>> {
        let most_active: Option<String> = sqlx::query_scalar(
            "SELECT station FROM measurement GROUP BY station ORDER BY COUNT(*) DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        let station = most_active.ok_or(ClimateApiError::EmptyDataset)?;

        let latest = self.latest_date().await?;
        let lower = latest - Duration::days(WINDOW_DAYS);

        let temps: Vec<TempObservation> = sqlx::query_as(
            "SELECT date, tobs FROM measurement WHERE station = ? AND date >= ? AND date <= ?",
        )
        .bind(&station)
        .bind(lower)
        .bind(latest)
        .fetch_all(&self.pool)
        .await?;
        Ok(temps)
    }

    /// Minimum, mean, and maximum temperature over `date >= start`, bounded
    /// above by `end` when supplied.
    ///
    /// Zero matching rows yield all-null fields, not an error.
    #[instrument(skip(self))]
    pub async fn temperature_stats(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<TempStats> {
        let stats: TempStats = if let Some(end) = end {
            sqlx::query_as(
                "SELECT MIN(tobs) AS min_temperature, \
                        AVG(tobs) AS avg_temperature, \
                        MAX(tobs) AS max_temperature \
                 FROM measurement WHERE date >= ? AND date <= ?",
            )
            .bind(start)
            .bind(end)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_as(
                "SELECT MIN(tobs) AS min_temperature, \
                        AVG(tobs) AS avg_temperature, \
                        MAX(tobs) AS max_temperature \
                 FROM measurement WHERE date >= ?",
            )
            .bind(start)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(stats)
    }
}
