use super::prepare;
use crate::AllocationError;
use clarabel::{algebra::*, solver::*};
use folio_core::{
    models::{AllocationConstraint, AllocationResult},
    ports::Optimizer,
};
use std::time::Duration;

/// An optimizer that poses the allocation as a linear program to Clarabel.
///
/// Clarabel is an interior point method, so it solves to a tolerance rather than
/// exactly. The returned proportions are projected back onto their bounds; the
/// budget constraint then holds to within the solver's feasibility tolerance.
pub struct ClarabelOptimizer(DefaultSettings<f64>);

impl Default for ClarabelOptimizer {
    fn default() -> Self {
        let mut settings = DefaultSettings::default();
        settings.verbose = false;
        Self(settings)
    }
}

impl ClarabelOptimizer {
    /// Bound the wall-clock time of each solve. A solve that runs out of time
    /// is reported as non feasible rather than returning a partial allocation.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.0.time_limit = limit.as_secs_f64();
        self
    }
}

impl Optimizer for ClarabelOptimizer {
    type Settings = DefaultSettings<f64>;
    type Error = AllocationError;

    fn new(settings: Self::Settings) -> Self {
        Self(settings)
    }

    fn solve(
        &self,
        constraints: &[AllocationConstraint],
    ) -> Result<Vec<AllocationResult>, Self::Error> {
        prepare(constraints)?;

        let n = constraints.len();

        // Clarabel minimizes, so we negate the returns. There is no quadratic term.
        let q = constraints
            .iter()
            .map(|constraint| -constraint.expected_return())
            .collect::<Vec<_>>();

        let p_matrix = CscMatrix {
            m: n,
            n,
            colptr: vec![0; n + 1],
            rowval: Vec::new(),
            nzval: Vec::new(),
        };

        // Clarabel handles constraints via a cone specification, e.g. Ax + s = b, where s is a cone.
        // Row 0 is the budget Σx = 1 in the zero cone; everything after it is s >= 0.
        let mut b = vec![1.0];

        // Clarabel's matrix input is in the form of CSC, so we handle the memory representation
        // carefully. Each column has exactly four entries.
        let mut a_nzval = Vec::with_capacity(4 * n);
        let mut a_rowval = Vec::with_capacity(4 * n);
        let mut a_colptr = Vec::with_capacity(n + 1);

        for constraint in constraints {
            let (minimum, maximum) = constraint.bounds();

            // start a new column in the constraint matrix
            a_colptr.push(a_nzval.len());

            // every allocation counts towards the budget
            a_nzval.push(1.0);
            a_rowval.push(0);

            // The rows are grown dynamically, using b to track their indices.
            // The signs on the lower bounds are wonky because we have to use s>=0
            // as the cone specification.
            // x >= 0 ==> -x + s == 0
            a_nzval.push(-1.0);
            a_rowval.push(b.len());
            b.push(0.0);

            // x >= min ==> -x + s == -min
            a_nzval.push(-1.0);
            a_rowval.push(b.len());
            b.push(-minimum);

            // x <= max ==> x + s == max
            a_nzval.push(1.0);
            a_rowval.push(b.len());
            b.push(maximum);
        }

        // We need to polish off the CSC matrix
        a_colptr.push(a_nzval.len());

        let a_matrix = CscMatrix {
            m: b.len(),
            n,
            colptr: a_colptr,
            rowval: a_rowval,
            nzval: a_nzval,
        };

        let cones = [ZeroConeT(1), NonnegativeConeT(b.len() - 1)];

        // A fresh solver per call; nothing is shared between solves.
        // Rejected settings or problem data surface as a non optimal outcome
        let mut solver = DefaultSolver::new(&p_matrix, &q, &a_matrix, &b, &cones, self.0.clone())
            .map_err(|error| AllocationError::non_feasible(format!("{error:?}")))?;
        solver.solve();

        // Anything short of a full solve, including AlmostSolved and MaxTime, is a failure.
        match solver.solution.status {
            SolverStatus::Solved => {}
            status => return Err(AllocationError::non_feasible(format!("{status:?}"))),
        }

        Ok(constraints
            .iter()
            .zip(solver.solution.x.iter())
            .map(|(constraint, &x)| {
                AllocationResult::new(
                    constraint.asset(),
                    x.clamp(constraint.minimum(), constraint.maximum()),
                )
            })
            .collect())
    }
}
