use folio_core::{
    models::{AllocationConstraint, AllocationResult},
    palette::PaletteGenerator,
};
use serde_json::json;

#[test]
fn constraint_roundtrips_with_field_names() {
    let constraint = AllocationConstraint::new("S&P", 0.15, 0.1, 0.55).unwrap();
    let value = serde_json::to_value(&constraint).unwrap();
    assert_eq!(
        value,
        json!({
            "asset": "S&P",
            "expected_return": 0.15,
            "minimum": 0.1,
            "maximum": 0.55,
        })
    );

    let parsed: AllocationConstraint = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, constraint);
}

#[test]
fn invalid_constraint_fails_to_deserialize() {
    let raw = json!({
        "asset": "Facebook",
        "expected_return": 0.1,
        "minimum": -0.01,
        "maximum": 0.6,
    });
    assert!(serde_json::from_value::<AllocationConstraint>(raw).is_err());
}

#[test]
fn one_invalid_record_rejects_the_whole_table() {
    let raw = json!([
        { "asset": "A", "expected_return": 0.15, "minimum": 0.10, "maximum": 0.55 },
        { "asset": "B", "expected_return": 0.20, "minimum": 0.60, "maximum": 0.50 },
    ]);
    assert!(serde_json::from_value::<Vec<AllocationConstraint>>(raw).is_err());
}

#[test]
fn colors_serialize_as_bare_strings() {
    let results = vec![AllocationResult::new("A", 1.0)];
    let assigned = PaletteGenerator::assign(results).unwrap();
    let value = serde_json::to_value(&assigned[0]).unwrap();
    assert_eq!(value, json!([{ "asset": "A", "proportion": 1.0 }, "#CC3333"]));
}
