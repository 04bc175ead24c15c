#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the folio-sqlite crate.
//! [folio_core]: https://docs.rs/folio_core/latest/folio_core/index.html
//! [folio_sqlite]: https://docs.rs/folio_sqlite/latest/folio_sqlite/index.html
#![doc = include_str!("../README.md")]

use folio_core::{models::AllocationConstraint, ports::SnapshotRepository};
use sqlx::sqlite;
use std::{str::FromStr, time::Duration};
use time::OffsetDateTime;
use tokio::try_join;

pub mod config;
pub mod types;

use config::SqliteConfig;
use types::{SnapshotId, SnapshotRecord};

/// Store operations fail for a handful of reasons, this is a unified
/// error type that our functions can return.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from SQLite operations
    #[error("sql error: {0}")]
    Sql(#[from] sqlx::Error),

    /// Error during database migrations
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Error in JSON serialization or deserialization
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// SQLite-backed snapshot store.
///
/// This struct provides separate reader and writer connection pools to a SQLite database.
/// SQLite does not have parallel writes, so the writer is capped to a single connection.
///
/// # Example
///
/// ```no_run
/// # use folio_sqlite::{Db, config::SqliteConfig};
/// # async fn example() -> Result<(), folio_sqlite::Error> {
/// let db = Db::open(&SqliteConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Db {
    /// Connection pool for read operations
    pub reader: sqlx::Pool<sqlx::Sqlite>,
    /// Connection pool for write operations (limited to 1 connection)
    pub writer: sqlx::Pool<sqlx::Sqlite>,
}

impl Db {
    /// Open a connection to the specified SQLite database.
    ///
    /// Creates a new database if one doesn't exist (when `create_if_missing` is true)
    /// and applies all pending migrations.
    pub async fn open(config: &SqliteConfig) -> Result<Self, Error> {
        let db_path = config
            .database_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        // sqlx gives ":memory:" a uniquely named shared cache, so both pools see the same data
        let options =
            sqlite::SqliteConnectOptions::from_str(db_path.as_deref().unwrap_or(":memory:"))?
                .busy_timeout(Duration::from_secs(5))
                .journal_mode(sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlite::SqliteSynchronous::Normal)
                .create_if_missing(config.create_if_missing);

        let reader = sqlite::SqlitePoolOptions::new().connect_with(options.clone());
        let writer = sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options);

        let (reader, writer) = try_join!(reader, writer)?;

        // Run any pending migrations before returning
        sqlx::migrate!("./schema").run(&writer).await?;

        tracing::debug!(
            path = db_path.as_deref().unwrap_or(":memory:"),
            "opened snapshot store"
        );

        Ok(Self { reader, writer })
    }

    /// Retrieve a stored snapshot, returning None if it does not exist.
    pub async fn get_snapshot(&self, id: SnapshotId) -> Result<Option<SnapshotRecord>, Error> {
        let row = sqlx::query_as::<_, (i64, OffsetDateTime, String)>(
            "select id, as_of, records from snapshot where id = ?",
        )
        .bind(id.0)
        .fetch_optional(&self.reader)
        .await?;

        row.map(|(id, as_of, records)| {
            Ok::<_, Error>(SnapshotRecord {
                id: SnapshotId(id),
                as_of,
                records: serde_json::from_str(&records)?,
            })
        })
        .transpose()
    }
}

impl SnapshotRepository for Db {
    type Error = Error;
    type SnapshotId = SnapshotId;
    type DateTime = OffsetDateTime;

    async fn save_snapshot(
        &self,
        records: &[AllocationConstraint],
        as_of: Self::DateTime,
    ) -> Result<Self::SnapshotId, Self::Error> {
        let payload = serde_json::to_string(records)?;

        let id = sqlx::query_scalar::<_, i64>(
            "insert into snapshot (as_of, records) values (?, ?) returning id",
        )
        .bind(as_of)
        .bind(payload)
        .fetch_one(&self.writer)
        .await?;

        tracing::info!(snapshot_id = id, records = records.len(), "stored snapshot");

        Ok(SnapshotId(id))
    }
}
