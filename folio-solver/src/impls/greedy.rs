use super::prepare;
use crate::AllocationError;
use folio_core::{
    models::{AllocationConstraint, AllocationResult},
    ports::Optimizer,
};

/// The largest tolerance honored; anything looser is treated as this.
pub const MAX_TOLERANCE: f64 = 1e-6;

/// Configuration for the [`GreedyOptimizer`]
#[derive(Clone, Debug)]
pub struct GreedySettings {
    /// How far the bound sums may stray past one before the problem is
    /// declared infeasible. Absorbs rounding in the inputs, e.g. 0.2 + 0.7 + 0.1.
    /// Clamped to `[0, MAX_TOLERANCE]`.
    pub tolerance: f64,
}

impl Default for GreedySettings {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

/// An exact optimizer exploiting the structure of the allocation program.
///
/// The budget is the only constraint coupling the assets, so an optimal vertex is
/// found by placing every asset at its minimum and then filling the remaining
/// capital in order of decreasing expected return, each asset up to its maximum.
/// Assets with equal returns are filled in input order.
#[derive(Default)]
pub struct GreedyOptimizer(GreedySettings);

impl Optimizer for GreedyOptimizer {
    type Settings = GreedySettings;
    type Error = AllocationError;

    fn new(settings: Self::Settings) -> Self {
        Self(settings)
    }

    fn solve(
        &self,
        constraints: &[AllocationConstraint],
    ) -> Result<Vec<AllocationResult>, Self::Error> {
        prepare(constraints)?;

        // NaN.max(0.0) is 0.0, so a NaN tolerance becomes strict
        let tolerance = self.0.tolerance.max(0.0).min(MAX_TOLERANCE);

        let floor = constraints.iter().map(|c| c.minimum()).sum::<f64>();
        if floor > 1.0 + tolerance {
            return Err(AllocationError::non_feasible(format!(
                "minimum allocations sum to {floor}"
            )));
        }

        let ceiling = constraints.iter().map(|c| c.maximum()).sum::<f64>();
        if ceiling < 1.0 - tolerance {
            return Err(AllocationError::non_feasible(format!(
                "maximum allocations sum to {ceiling}"
            )));
        }

        let mut allocation = constraints
            .iter()
            .map(|c| c.minimum())
            .collect::<Vec<_>>();

        // sort_by is stable, which is what gives ties their input ordering
        let mut order = (0..constraints.len()).collect::<Vec<_>>();
        order.sort_by(|&i, &j| {
            constraints[j]
                .expected_return()
                .total_cmp(&constraints[i].expected_return())
        });

        let mut remaining = 1.0 - floor;
        for idx in order {
            if remaining <= 0.0 {
                break;
            }
            let (minimum, maximum) = constraints[idx].bounds();
            let fill = (maximum - minimum).min(remaining);
            allocation[idx] += fill;
            remaining -= fill;
        }

        Ok(constraints
            .iter()
            .zip(allocation)
            .map(|(constraint, proportion)| AllocationResult::new(constraint.asset(), proportion))
            .collect())
    }
}
