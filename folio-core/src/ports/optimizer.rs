use crate::models::{AllocationConstraint, AllocationResult};

/// Interface for optimizers that allocate capital across a constraint set.
///
/// An optimizer maximizes the total expected return `Σ rᵢ·xᵢ` subject to each
/// `xᵢ` lying within its constraint's bounds and the allocations summing to one.
///
/// Implementations hold configuration only. Each call to `solve` builds its own
/// problem and solver instance, so a single optimizer may be shared freely.
pub trait Optimizer {
    /// The configuration type for this optimizer
    type Settings;

    /// Error type for optimizer failures, including infeasible constraint sets
    type Error: std::error::Error;

    /// Create a new instance with the provided settings
    fn new(settings: Self::Settings) -> Self;

    /// Solve the allocation problem.
    ///
    /// # Returns
    ///
    /// One result per constraint, in the same order as `constraints`, whose
    /// proportions sum to one and respect every bound. If the problem has no
    /// optimal solution, an error is returned and no partial output is exposed.
    fn solve(
        &self,
        constraints: &[AllocationConstraint],
    ) -> Result<Vec<AllocationResult>, Self::Error>;
}
