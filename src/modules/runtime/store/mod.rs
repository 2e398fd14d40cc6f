//! Data access for the climate dataset
//!
//! The store is the single injected handle the handlers query through. The
//! SQLite implementation holds one read-only connection for the life of the
//! process.

mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{ClimateStore, NamedObservation, TemperatureStats};

#[cfg(test)]
pub(crate) mod fixtures {
    use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

    pub const SCHEMA: &[&str] = &[
        "CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, \
         latitude FLOAT, longitude FLOAT, elevation FLOAT)",
        "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, \
         prcp FLOAT, tobs INTEGER)",
    ];

    /// Single-connection in-memory pool; the database lives as long as the connection
    pub async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    pub async fn execute_all(pool: &SqlitePool, statements: &[&str]) {
        for statement in statements {
            sqlx::query(statement).execute(pool).await.unwrap();
        }
    }

    /// Two stations, readings spanning more than a year up to 2017-08-23
    pub async fn seeded_pool() -> SqlitePool {
        let pool = memory_pool().await;
        execute_all(&pool, SCHEMA).await;
        execute_all(
            &pool,
            &[
                "INSERT INTO station (station, name) VALUES \
                 ('USC00519397', 'WAIKIKI 717.2, HI US'), \
                 ('USC00519281', 'WAIHEE 837.5, HI US')",
                "INSERT INTO measurement (station, date, prcp, tobs) VALUES \
                 ('USC00519397', '2010-01-01', 0.08, 65), \
                 ('USC00519281', '2016-08-22', 0.4, 77), \
                 ('USC00519281', '2016-08-23', 1.79, 77), \
                 ('USC00519397', '2017-08-20', NULL, 81), \
                 ('USC00519281', '2017-08-20', 0.0, 80), \
                 ('USC00519397', '2017-08-23', 0.0, 81), \
                 ('USC00519281', '2017-08-23', 0.15, 79)",
            ],
        )
        .await;
        pool
    }
}
