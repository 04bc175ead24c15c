use crate::{AllocationError, Set};
use folio_core::models::AllocationConstraint;

/// Implementation using the Clarabel interior point solver
#[cfg(feature = "clarabel")]
pub mod clarabel;

/// Implementation using an exact greedy fill
pub mod greedy;

// Checks shared by every optimizer before any program is built. An empty set can
// never sum to one, and duplicate labels would yield two allocations that cannot
// be told apart downstream.
pub(crate) fn prepare(constraints: &[AllocationConstraint]) -> Result<(), AllocationError> {
    if constraints.is_empty() {
        return Err(AllocationError::non_feasible("empty constraint set"));
    }

    let mut assets = Set::default();
    for constraint in constraints {
        if !assets.insert(constraint.asset()) {
            return Err(AllocationError::DuplicateAsset(constraint.asset().to_owned()));
        }
    }

    Ok(())
}
