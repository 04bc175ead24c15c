use approx::assert_abs_diff_eq;
use folio_core::{
    models::{AllocationConstraint, AllocationResult},
    ports::Optimizer,
};
use folio_solver::AllocationError;
use rstest::*;
use rstest_reuse::{self, *};

mod all_optimizers;
use all_optimizers::all_optimizers;

const EPS: f64 = 1e-6;

fn table(rows: &[(&str, f64, f64, f64)]) -> Vec<AllocationConstraint> {
    rows.iter()
        .map(|&(asset, r, min, max)| AllocationConstraint::new(asset, r, min, max).unwrap())
        .collect()
}

#[fixture]
pub fn example() -> Vec<AllocationConstraint> {
    feasible(0)
}

// Constraint sets with Σmin ≤ 1 ≤ Σmax, the last two on the boundary
const FEASIBLE: usize = 6;

fn feasible(case: usize) -> Vec<AllocationConstraint> {
    match case {
        0 => table(&[
            ("A", 0.15, 0.10, 0.55),
            ("B", 0.20, 0.11, 0.50),
            ("C", 0.30, 0.05, 0.50),
            ("D", 0.10, 0.20, 0.60),
        ]),
        1 => table(&[("X", -0.1, 0.0, 0.8), ("Y", -0.3, 0.1, 0.9)]),
        2 => table(&[
            ("P", 0.1, 0.0, 0.6),
            ("Q", 0.1, 0.0, 0.6),
            ("R", 0.1, 0.0, 0.6),
        ]),
        3 => table(&[
            ("Bonds", 0.03, 0.05, 0.4),
            ("Equity", 0.08, 0.10, 0.7),
            ("Gold", 0.01, 0.00, 0.2),
            ("Cash", 0.00, 0.02, 0.3),
            ("Crypto", 0.25, 0.00, 0.05),
        ]),
        // Σmin == 1, so the minimums are the only allocation
        4 => table(&[("Low", 0.3, 0.25, 0.5), ("High", 0.1, 0.75, 0.9)]),
        // Σmax == 1, so the maximums are the only allocation
        5 => table(&[
            ("Low", 0.3, 0.0, 0.5),
            ("Mid", -0.1, 0.25, 0.25),
            ("High", 0.1, 0.0, 0.25),
        ]),
        _ => unreachable!(),
    }
}

fn assert_valid(constraints: &[AllocationConstraint], results: &[AllocationResult]) {
    assert_eq!(constraints.len(), results.len());

    let total = results.iter().map(|r| r.proportion).sum::<f64>();
    assert_abs_diff_eq!(total, 1.0, epsilon = EPS);

    for (constraint, result) in constraints.iter().zip(results) {
        assert_eq!(constraint.asset(), result.asset);
        assert!(result.proportion >= constraint.minimum());
        assert!(result.proportion <= constraint.maximum());
    }
}

#[apply(all_optimizers)]
#[rstest]
fn should_allocate_to_highest_return(
    optimizer: impl Optimizer<Error = AllocationError>,
    example: Vec<AllocationConstraint>,
) {
    let results = optimizer.solve(&example).unwrap();
    assert_valid(&example, &results);

    // The minimums take 0.46; the rest goes to C until full, then to B.
    let expected = [0.10, 0.20, 0.50, 0.20];
    for (result, expected) in results.iter().zip(expected) {
        assert_abs_diff_eq!(result.proportion, expected, epsilon = EPS);
    }
}

#[apply(all_optimizers)]
#[rstest]
fn should_satisfy_all_bounds(optimizer: impl Optimizer<Error = AllocationError>) {
    for case in 0..FEASIBLE {
        let constraints = feasible(case);
        let results = optimizer.solve(&constraints).unwrap();
        assert_valid(&constraints, &results);
    }
}

#[apply(all_optimizers)]
#[rstest]
fn should_pin_allocation_on_boundary(optimizer: impl Optimizer<Error = AllocationError>) {
    let results = optimizer.solve(&feasible(4)).unwrap();
    assert_abs_diff_eq!(results[0].proportion, 0.25, epsilon = EPS);
    assert_abs_diff_eq!(results[1].proportion, 0.75, epsilon = EPS);

    let results = optimizer.solve(&feasible(5)).unwrap();
    assert_abs_diff_eq!(results[0].proportion, 0.5, epsilon = EPS);
    assert_abs_diff_eq!(results[1].proportion, 0.25, epsilon = EPS);
    assert_abs_diff_eq!(results[2].proportion, 0.25, epsilon = EPS);
}

#[apply(all_optimizers)]
#[rstest]
fn should_prefer_least_negative_return(optimizer: impl Optimizer<Error = AllocationError>) {
    let constraints = feasible(1);
    let results = optimizer.solve(&constraints).unwrap();
    assert_abs_diff_eq!(results[0].proportion, 0.8, epsilon = EPS);
    assert_abs_diff_eq!(results[1].proportion, 0.2, epsilon = EPS);
}

#[apply(all_optimizers)]
#[rstest]
fn should_reject_excess_minimums(optimizer: impl Optimizer<Error = AllocationError>) {
    let constraints = table(&[("A", 0.1, 0.6, 0.9), ("B", 0.2, 0.5, 0.9)]);
    assert!(matches!(
        optimizer.solve(&constraints),
        Err(AllocationError::NonFeasible { .. })
    ));
}

#[apply(all_optimizers)]
#[rstest]
fn should_reject_short_maximums(optimizer: impl Optimizer<Error = AllocationError>) {
    let constraints = table(&[("A", 0.1, 0.0, 0.3), ("B", 0.2, 0.0, 0.4)]);
    assert!(matches!(
        optimizer.solve(&constraints),
        Err(AllocationError::NonFeasible { .. })
    ));
}

#[apply(all_optimizers)]
#[rstest]
fn should_reject_empty(optimizer: impl Optimizer<Error = AllocationError>) {
    assert!(matches!(
        optimizer.solve(&[]),
        Err(AllocationError::NonFeasible { .. })
    ));
}

#[apply(all_optimizers)]
#[rstest]
fn should_reject_duplicates(optimizer: impl Optimizer<Error = AllocationError>) {
    let constraints = table(&[
        ("A", 0.1, 0.0, 0.6),
        ("B", 0.2, 0.0, 0.6),
        ("A", 0.3, 0.0, 0.6),
    ]);
    assert_eq!(
        optimizer.solve(&constraints),
        Err(AllocationError::DuplicateAsset("A".to_owned()))
    );
}

#[apply(all_optimizers)]
#[rstest]
fn should_be_idempotent(
    optimizer: impl Optimizer<Error = AllocationError>,
    example: Vec<AllocationConstraint>,
) {
    let first = optimizer.solve(&example).unwrap();
    let second = optimizer.solve(&example).unwrap();
    assert_eq!(first, second);
}
