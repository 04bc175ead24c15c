//! Where the snapshot store keeps its data.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the snapshot database.
///
/// Without a `database_path` the store lives in memory and is discarded when the
/// process exits. Snapshots written by one `folio sync` invocation are then gone
/// before a later `folio show` can read them, so a path is needed for anything
/// beyond a single process.
///
/// ```
/// use folio_sqlite::config::SqliteConfig;
/// use std::path::PathBuf;
///
/// let persistent = SqliteConfig {
///     database_path: Some(PathBuf::from("snapshots.db")),
///     ..Default::default()
/// };
/// assert!(persistent.create_if_missing);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    /// The snapshot database file, or None for a process-local store
    pub database_path: Option<PathBuf>,

    /// Create an empty, migrated database when the file is absent. When false,
    /// opening a missing file fails instead of silently starting a fresh history.
    #[serde(default = "create_by_default")]
    pub create_if_missing: bool,
}

fn create_by_default() -> bool {
    true
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            create_if_missing: create_by_default(),
        }
    }
}
