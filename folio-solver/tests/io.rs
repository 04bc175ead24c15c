use folio_solver::{
    greedy::GreedyOptimizer,
    io::{OutcomeError, Portfolio},
};
use folio_core::palette::PaletteError;
use serde_json::json;

#[test]
fn seven_assets_exceed_the_palette() {
    let portfolio: Portfolio = serde_json::from_value(json!([
        { "asset": "A", "expected_return": 0.1, "minimum": 0.0, "maximum": 0.5 },
        { "asset": "B", "expected_return": 0.2, "minimum": 0.0, "maximum": 0.5 },
        { "asset": "C", "expected_return": 0.3, "minimum": 0.0, "maximum": 0.5 },
        { "asset": "D", "expected_return": 0.4, "minimum": 0.0, "maximum": 0.5 },
        { "asset": "E", "expected_return": 0.5, "minimum": 0.0, "maximum": 0.5 },
        { "asset": "F", "expected_return": 0.6, "minimum": 0.0, "maximum": 0.5 },
        { "asset": "G", "expected_return": 0.7, "minimum": 0.0, "maximum": 0.5 },
    ]))
    .unwrap();

    match portfolio.solve(&GreedyOptimizer::default()) {
        Err(OutcomeError::Palette(error)) => assert_eq!(
            error,
            PaletteError::InsufficientCapacity {
                requested: 7,
                capacity: 6
            }
        ),
        other => panic!("expected a palette error, got {other:?}"),
    }
}

#[test]
fn infeasibility_is_reported_before_coloring() {
    let portfolio: Portfolio = serde_json::from_value(json!([
        { "asset": "A", "expected_return": 0.1, "minimum": 0.0, "maximum": 0.3 },
        { "asset": "B", "expected_return": 0.2, "minimum": 0.0, "maximum": 0.4 },
    ]))
    .unwrap();

    assert!(matches!(
        portfolio.solve(&GreedyOptimizer::default()),
        Err(OutcomeError::Allocation(_))
    ));
}

#[test]
fn export_writes_both_formats() {
    let portfolio: Portfolio = serde_json::from_value(json!([
        { "asset": "A", "expected_return": 0.1, "minimum": 0.0, "maximum": 0.6 },
        { "asset": "B", "expected_return": 0.2, "minimum": 0.0, "maximum": 0.6 },
    ]))
    .unwrap();

    let mut lp = Vec::new();
    portfolio.export_lp(&mut lp).unwrap();
    assert!(String::from_utf8(lp).unwrap().starts_with("\\ folio allocation\n"));

    let mut mps = Vec::new();
    portfolio.export_mps(&mut mps).unwrap();
    assert!(String::from_utf8(mps).unwrap().starts_with("NAME folio_allocation\n"));
}
