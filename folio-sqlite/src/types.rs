//! Row types stored in and read from the snapshot table.

use folio_core::models::AllocationConstraint;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// The primary key of a stored snapshot
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SnapshotId(pub(crate) i64);

impl From<i64> for SnapshotId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<SnapshotId> for i64 {
    fn from(value: SnapshotId) -> Self {
        value.0
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A snapshot as read back from the store
#[derive(Debug, Serialize)]
pub struct SnapshotRecord {
    /// The snapshot's id
    pub id: SnapshotId,
    /// When the snapshot was taken
    #[serde(with = "time::serde::rfc3339")]
    pub as_of: OffsetDateTime,
    /// The constraint table, in its original order
    pub records: Vec<AllocationConstraint>,
}
