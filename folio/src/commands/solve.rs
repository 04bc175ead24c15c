use crate::config::SolverConfig;
use clap::ValueEnum;
use folio_solver::{
    clarabel::ClarabelOptimizer,
    greedy::GreedyOptimizer,
    io::{Outcome, OutcomeError, Portfolio},
};
use serde::{Deserialize, Serialize};

// This explicitly articulates the available optimizers for the `solve` subcommand
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverLib {
    #[default]
    Clarabel,
    Greedy,
}

// Conveniently, we can use the same enum to handle the particulars of calling into
// the various optimizer implementations
impl SolverLib {
    pub fn solve(
        &self,
        portfolio: &Portfolio,
        config: &SolverConfig,
    ) -> Result<Outcome, OutcomeError> {
        match self {
            SolverLib::Clarabel => {
                let mut optimizer = ClarabelOptimizer::default();
                if let Some(limit) = config.time_limit {
                    optimizer = optimizer.with_time_limit(limit);
                }
                portfolio.solve(&optimizer)
            }
            SolverLib::Greedy => portfolio.solve(&GreedyOptimizer::default()),
        }
    }
}
