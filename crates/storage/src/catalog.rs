//! Observation catalog using SQLite.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqlitePoolOptions, FromRow, SqlitePool};

use climate_common::{ClimateError, ClimateResult};

/// Database connection pool and catalog operations.
///
/// The catalog is read-only: the dataset is loaded by an external process
/// and this service only queries it. Dates are stored as ISO `YYYY-MM-DD`
/// text, so lexicographic comparison matches chronological order and the
/// queries compare date columns as strings.
pub struct Catalog {
    pool: SqlitePool,
}

impl Catalog {
    /// Create a new catalog connection from database URL.
    pub async fn connect(database_url: &str) -> ClimateResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| ClimateError::DatabaseError(format!("Connection failed: {}", e)))?;

        tracing::debug!("Connected to climate database at {}", database_url);

        Ok(Self { pool })
    }

    /// Create an in-memory catalog for tests.
    ///
    /// A single long-lived connection is required: every `sqlite::memory:`
    /// connection gets its own private database.
    pub async fn in_memory() -> ClimateResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| ClimateError::DatabaseError(format!("Connection failed: {}", e)))?;

        Ok(Self { pool })
    }

    /// Apply the schema.
    ///
    /// Production databases arrive pre-populated; this exists for tests and
    /// fresh deployments.
    pub async fn migrate(&self) -> ClimateResult<()> {
        // Split SQL statements and execute them individually
        for statement in SCHEMA_SQL.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| ClimateError::DatabaseError(format!("Migration failed: {}", e)))?;
            }
        }

        Ok(())
    }

    /// Access the underlying pool (used by tests to seed data).
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Verify database connectivity with a trivial query.
    pub async fn ping(&self) -> ClimateResult<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ClimateError::DatabaseError(format!("Ping failed: {}", e)))?;

        Ok(())
    }

    /// All precipitation measurements, ordered by date ascending.
    pub async fn list_precipitation(&self) -> ClimateResult<Vec<PrecipitationRow>> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(
            "SELECT date, prcp FROM measurement ORDER BY date ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(rows)
    }

    /// All stations, ordered by station identifier ascending.
    pub async fn list_stations(&self) -> ClimateResult<Vec<StationRow>> {
        let rows = sqlx::query_as::<_, StationRow>(
            "SELECT station AS station_id, name FROM station ORDER BY station ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(rows)
    }

    /// Temperature observations for one station on or after `since`,
    /// ordered by date ascending.
    pub async fn station_observations(
        &self,
        station_id: &str,
        since: NaiveDate,
    ) -> ClimateResult<Vec<ObservationRow>> {
        let rows = sqlx::query_as::<_, ObservationRow>(
            "SELECT date, tobs AS temp FROM measurement \
             WHERE station = ? AND date >= ? \
             ORDER BY date ASC",
        )
        .bind(station_id)
        .bind(since.format("%Y-%m-%d").to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(rows)
    }

    /// Min/max/avg temperature over all stations for `date >= start`,
    /// optionally bounded by `date <= end` (inclusive).
    ///
    /// SQL aggregate semantics apply: exactly one row comes back, with NULL
    /// fields when no measurement matches.
    pub async fn temperature_summary(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> ClimateResult<TobsSummary> {
        let start_str = start.format("%Y-%m-%d").to_string();

        let row = match end {
            Some(end) => sqlx::query_as::<_, TobsSummaryRow>(
                "SELECT MIN(tobs) AS tmin, MAX(tobs) AS tmax, AVG(tobs) AS tavg \
                 FROM measurement WHERE date >= ? AND date <= ?",
            )
            .bind(&start_str)
            .bind(end.format("%Y-%m-%d").to_string())
            .fetch_one(&self.pool)
            .await,
            None => sqlx::query_as::<_, TobsSummaryRow>(
                "SELECT MIN(tobs) AS tmin, MAX(tobs) AS tmax, AVG(tobs) AS tavg \
                 FROM measurement WHERE date >= ?",
            )
            .bind(&start_str)
            .fetch_one(&self.pool)
            .await,
        }
        .map_err(|e| ClimateError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(row.into())
    }
}

/// A dated precipitation reading.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A weather station identifier and its human-readable name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StationRow {
    pub station_id: String,
    pub name: String,
}

/// A dated temperature observation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ObservationRow {
    pub date: String,
    pub temp: f64,
}

/// Aggregate temperature statistics over a filtered row set.
///
/// All fields are `None` when no measurement matched the filter.
/// `tavg` is rounded to 2 decimal places here so every serialization
/// path sees the rounded value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TobsSummary {
    pub tmin: Option<f64>,
    pub tmax: Option<f64>,
    pub tavg: Option<f64>,
}

/// Internal row type for the aggregate query.
#[derive(FromRow)]
struct TobsSummaryRow {
    tmin: Option<f64>,
    tmax: Option<f64>,
    tavg: Option<f64>,
}

impl From<TobsSummaryRow> for TobsSummary {
    fn from(row: TobsSummaryRow) -> Self {
        TobsSummary {
            tmin: row.tmin,
            tmax: row.tmax,
            tavg: row.tavg.map(|v| (v * 100.0).round() / 100.0),
        }
    }
}

/// Database schema SQL.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL,
    date TEXT NOT NULL,
    prcp REAL,
    tobs REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_measurement_date ON measurement(date);
CREATE INDEX IF NOT EXISTS idx_measurement_station ON measurement(station);

CREATE TABLE IF NOT EXISTS station (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    latitude REAL,
    longitude REAL,
    elevation REAL
);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_catalog() -> Catalog {
        let catalog = Catalog::in_memory().await.expect("connect");
        catalog.migrate().await.expect("migrate");

        let measurements = [
            ("USC00519281", "2016-08-20", Some(0.05), 76.0),
            ("USC00519281", "2016-08-19", None, 74.0),
            ("USC00519397", "2016-08-19", Some(0.00), 80.0),
            ("USC00519281", "2015-01-01", Some(1.20), 65.0),
        ];
        for (station, date, prcp, tobs) in measurements {
            sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
                .bind(station)
                .bind(date)
                .bind(prcp)
                .bind(tobs)
                .execute(catalog.pool())
                .await
                .expect("insert measurement");
        }

        let stations = [
            ("USC00519397", "WAIKIKI 717.2, HI US"),
            ("USC00519281", "WAIHEE 837.5, HI US"),
        ];
        for (station, name) in stations {
            sqlx::query("INSERT INTO station (station, name) VALUES (?, ?)")
                .bind(station)
                .bind(name)
                .execute(catalog.pool())
                .await
                .expect("insert station");
        }

        catalog
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_precipitation_ordered_by_date() {
        let catalog = seeded_catalog().await;
        let rows = catalog.list_precipitation().await.unwrap();

        assert_eq!(rows.len(), 4);
        for pair in rows.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
        // NULL prcp survives as None
        assert!(rows.iter().any(|r| r.prcp.is_none()));
    }

    #[tokio::test]
    async fn test_precipitation_empty_table() {
        let catalog = Catalog::in_memory().await.unwrap();
        catalog.migrate().await.unwrap();

        let rows = catalog.list_precipitation().await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_stations_ordered_and_unique() {
        let catalog = seeded_catalog().await;
        let rows = catalog.list_stations().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].station_id, "USC00519281");
        assert_eq!(rows[0].name, "WAIHEE 837.5, HI US");
        assert_eq!(rows[1].station_id, "USC00519397");
    }

    #[tokio::test]
    async fn test_station_observations_filters_station_and_window() {
        let catalog = seeded_catalog().await;
        let rows = catalog
            .station_observations("USC00519281", date("2016-08-19"))
            .await
            .unwrap();

        // The 2015 row and the other station's row are filtered out.
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2016-08-19");
        assert_eq!(rows[0].temp, 74.0);
        assert_eq!(rows[1].date, "2016-08-20");
    }

    #[tokio::test]
    async fn test_temperature_summary_open_ended() {
        let catalog = seeded_catalog().await;
        let summary = catalog
            .temperature_summary(date("2016-08-19"), None)
            .await
            .unwrap();

        assert_eq!(summary.tmin, Some(74.0));
        assert_eq!(summary.tmax, Some(80.0));
        // avg(76, 74, 80) = 76.666... -> 76.67
        assert_eq!(summary.tavg, Some(76.67));
    }

    #[tokio::test]
    async fn test_temperature_summary_bounded_range() {
        let catalog = seeded_catalog().await;
        let summary = catalog
            .temperature_summary(date("2015-01-01"), Some(date("2015-12-31")))
            .await
            .unwrap();

        assert_eq!(summary.tmin, Some(65.0));
        assert_eq!(summary.tmax, Some(65.0));
        assert_eq!(summary.tavg, Some(65.0));
    }

    #[tokio::test]
    async fn test_temperature_summary_no_matches_is_all_null() {
        let catalog = seeded_catalog().await;
        // Inverted range: start after end.
        let summary = catalog
            .temperature_summary(date("2017-01-01"), Some(date("2016-01-01")))
            .await
            .unwrap();

        assert_eq!(summary.tmin, None);
        assert_eq!(summary.tmax, None);
        assert_eq!(summary.tavg, None);
    }
}
