#![allow(unused_macros)]
use rstest_reuse::template;

// This creates a testing "template" to allow for the injection of each optimizer
// implementation

#[template]
#[rstest]
#[case::clarabel(folio_solver::clarabel::ClarabelOptimizer::default())]
#[case::greedy(folio_solver::greedy::GreedyOptimizer::default())]
pub fn all_optimizers(#[case] optimizer: impl folio_core::ports::Optimizer) -> () {}
