/// The ways in which an allocation can fail to be produced
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AllocationError {
    /// The program has no optimal solution. This covers infeasible and
    /// unbounded programs as well as an exhausted iteration or time budget.
    #[error("non feasible allocation: {status}")]
    NonFeasible {
        /// The terminal status reported by the optimizer
        status: String,
    },

    /// Two constraints share an asset label
    #[error("duplicate asset: {0}")]
    DuplicateAsset(String),
}

impl AllocationError {
    pub(crate) fn non_feasible(status: impl Into<String>) -> Self {
        Self::NonFeasible {
            status: status.into(),
        }
    }
}
