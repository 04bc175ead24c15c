use crate::models::AllocationConstraint;

/// Repository interface for persisting snapshots of a constraint table.
///
/// A snapshot is a write-once record: the allocation logic never reads one back.
/// Implementations receive their store handle at construction rather than
/// reaching for process-wide state.
pub trait SnapshotRepository {
    /// Error type for underlying store operations
    type Error: std::error::Error;

    /// The identifier assigned to a stored snapshot
    type SnapshotId;

    /// The timestamp type recorded alongside a snapshot
    type DateTime;

    /// Store the constraint table as a single snapshot.
    ///
    /// The records keep the field names of [`AllocationConstraint`].
    fn save_snapshot(
        &self,
        records: &[AllocationConstraint],
        as_of: Self::DateTime,
    ) -> impl Future<Output = Result<Self::SnapshotId, Self::Error>> + Send;
}
