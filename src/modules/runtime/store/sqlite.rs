//! SQLite store implementation

use async_trait::async_trait;
use climate_core::{ClimateError, TrailingWindow};
use climate_types::{Observation, Record, Station};
use serde_json::Number;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, TypeInfo, ValueRef};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, info};

use super::traits::{ClimateStore, NamedObservation, TemperatureStats};

const MAX_DATE: &str = "SELECT MAX(date) FROM measurement";

const OBSERVATIONS_IN_WINDOW: &str = "SELECT station, date, prcp, tobs FROM measurement \
     WHERE date >= ?1 AND date <= ?2 \
     ORDER BY date, rowid";

const STATION_OBSERVATIONS_IN_WINDOW: &str = "SELECT station, date, prcp, tobs FROM measurement \
     WHERE date >= ?1 AND date <= ?2 AND station = ?3 \
     ORDER BY date, rowid";

const NAMED_OBSERVATIONS_IN_WINDOW: &str =
    "SELECT m.station, m.date, m.prcp, m.tobs, s.name FROM measurement m \
     JOIN station s ON m.station = s.station \
     WHERE m.date >= ?1 AND m.date <= ?2 \
     ORDER BY m.date, m.rowid";

const STATIONS: &str = "SELECT station, name FROM station";

const STATS_FROM: &str = "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax \
     FROM measurement WHERE date >= ?1";

const STATS_BETWEEN: &str = "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax \
     FROM measurement WHERE date >= ?1 AND date <= ?2";

const TABLE_COLUMNS: &str = "SELECT name FROM pragma_table_info(?1)";

/// SQLite-backed climate store
///
/// Holds a pool capped at a single connection, so every request shares one
/// connection that is opened at startup and closed at shutdown.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the database file read-only and verify its schema
    ///
    /// `path` may be a plain file path or a `sqlite:` URL.
    pub async fn open(path: &str) -> Result<Self, ClimateError> {
        let options = if path.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(path).map_err(|e| {
                ClimateError::Database(format!("Invalid SQLite URL '{}': {}", path, e))
            })?
        } else {
            SqliteConnectOptions::new().filename(path)
        };
        let options = options.read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| {
                ClimateError::Database(format!("SQLite connection to '{}' failed: {}", path, e))
            })?;

        info!("Opened SQLite database {} (read-only)", path);
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, verifying that the declared records match the store
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, ClimateError> {
        let store = Self { pool };
        store.verify_schema::<Observation>().await?;
        store.verify_schema::<Station>().await?;
        Ok(store)
    }

    /// Fail if `R`'s table or any of its required columns is missing
    async fn verify_schema<R: Record>(&self) -> Result<(), ClimateError> {
        let columns: HashSet<String> = sqlx::query_scalar::<_, String>(TABLE_COLUMNS)
            .bind(R::TABLE)
            .fetch_all(&self.pool)
            .await
            .map_err(query_fault)?
            .into_iter()
            .map(|c| c.to_lowercase())
            .collect();

        if columns.is_empty() {
            return Err(ClimateError::Schema(format!(
                "table '{}' does not exist",
                R::TABLE
            )));
        }

        let missing: Vec<&str> = R::COLUMNS
            .iter()
            .copied()
            .filter(|c| !columns.contains(*c))
            .collect();

        if !missing.is_empty() {
            return Err(ClimateError::Schema(format!(
                "table '{}' is missing column(s): {}",
                R::TABLE,
                missing.join(", ")
            )));
        }

        debug!("Schema check passed for table '{}'", R::TABLE);
        Ok(())
    }

    fn row_to_observation(row: &SqliteRow) -> Result<Observation, ClimateError> {
        Ok(Observation {
            station: row.try_get("station").map_err(query_fault)?,
            date: row.try_get("date").map_err(query_fault)?,
            prcp: numeric_column(row, "prcp")?,
            tobs: numeric_column(row, "tobs")?,
        })
    }
}

fn query_fault(e: sqlx::Error) -> ClimateError {
    ClimateError::QueryExecution(e.to_string())
}

/// Read a numeric column keeping its storage class
///
/// INTEGER values stay integers and REAL values stay floats, so a reading
/// stored as `80` serializes as `80` rather than `80.0`.
fn numeric_column(row: &SqliteRow, column: &str) -> Result<Option<Number>, ClimateError> {
    let raw = row.try_get_raw(column).map_err(query_fault)?;
    if raw.is_null() {
        return Ok(None);
    }
    let storage = raw.type_info().name().to_string();

    match storage.as_str() {
        "INTEGER" | "BOOLEAN" => row
            .try_get::<i64, _>(column)
            .map(|v| Some(Number::from(v)))
            .map_err(query_fault),
        _ => {
            let value = row.try_get::<f64, _>(column).map_err(query_fault)?;
            Number::from_f64(value).map(Some).ok_or_else(|| {
                ClimateError::QueryExecution(format!(
                    "column '{}' holds a non-finite value",
                    column
                ))
            })
        }
    }
}

#[async_trait]
impl ClimateStore for SqliteStore {
    async fn max_date(&self) -> Result<Option<String>, ClimateError> {
        sqlx::query_scalar::<_, Option<String>>(MAX_DATE)
            .fetch_one(&self.pool)
            .await
            .map_err(query_fault)
    }

    async fn observations_in(
        &self,
        window: &TrailingWindow,
        station: Option<&str>,
    ) -> Result<Vec<Observation>, ClimateError> {
        let query = match station {
            Some(station) => sqlx::query(STATION_OBSERVATIONS_IN_WINDOW)
                .bind(window.start())
                .bind(window.end())
                .bind(station),
            None => sqlx::query(OBSERVATIONS_IN_WINDOW)
                .bind(window.start())
                .bind(window.end()),
        };

        let rows = query.fetch_all(&self.pool).await.map_err(query_fault)?;
        rows.iter().map(Self::row_to_observation).collect()
    }

    async fn named_observations_in(
        &self,
        window: &TrailingWindow,
    ) -> Result<Vec<NamedObservation>, ClimateError> {
        let rows = sqlx::query(NAMED_OBSERVATIONS_IN_WINDOW)
            .bind(window.start())
            .bind(window.end())
            .fetch_all(&self.pool)
            .await
            .map_err(query_fault)?;

        rows.iter()
            .map(|row| {
                Ok(NamedObservation {
                    observation: Self::row_to_observation(row)?,
                    station_name: row.try_get("name").map_err(query_fault)?,
                })
            })
            .collect()
    }

    async fn stations(&self) -> Result<Vec<Station>, ClimateError> {
        let rows = sqlx::query(STATIONS)
            .fetch_all(&self.pool)
            .await
            .map_err(query_fault)?;

        rows.iter()
            .map(|row| {
                Ok(Station {
                    station: row.try_get("station").map_err(query_fault)?,
                    name: row.try_get("name").map_err(query_fault)?,
                })
            })
            .collect()
    }

    async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<Option<TemperatureStats>, ClimateError> {
        let query = match end {
            Some(end) => sqlx::query(STATS_BETWEEN).bind(start).bind(end),
            None => sqlx::query(STATS_FROM).bind(start),
        };

        let row = query.fetch_one(&self.pool).await.map_err(query_fault)?;

        let (Some(min), Some(max)) = (numeric_column(&row, "tmin")?, numeric_column(&row, "tmax")?)
        else {
            return Ok(None);
        };
        let avg: Option<f64> = row.try_get("tavg").map_err(query_fault)?;

        Ok(avg.map(|avg| TemperatureStats { min, avg, max }))
    }

    async fn close(&self) -> Result<(), ClimateError> {
        self.pool.close().await;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), ClimateError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ClimateError::Database(format!("SQLite health check failed: {}", e)))?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
