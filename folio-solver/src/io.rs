use crate::{
    AllocationError,
    export::{export_lp, export_mps},
};
use folio_core::{
    models::AllocationConstraint,
    palette::{Color, PaletteError, PaletteGenerator},
    ports::Optimizer,
};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// a representation of a constraint table
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portfolio(pub Vec<AllocationConstraint>);

/// the solved allocation of one asset, ready to be charted
#[derive(Debug, Serialize, Deserialize)]
pub struct Allocation {
    /// the asset label
    pub asset: String,
    /// the fraction of capital assigned to the asset
    pub proportion: f64,
    /// the color to render the asset with
    pub color: Color,
}

/// a representation of the solution of a portfolio, in input order
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outcome(pub Vec<Allocation>);

/// The reasons a portfolio cannot be turned into an outcome
#[derive(Debug, thiserror::Error)]
pub enum OutcomeError {
    /// The optimizer failed
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    /// The portfolio has more assets than colors
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

impl Portfolio {
    /// solve the portfolio and color the result
    pub fn solve<T: Optimizer<Error = AllocationError>>(
        &self,
        optimizer: &T,
    ) -> Result<Outcome, OutcomeError> {
        let results = optimizer.solve(&self.0)?;
        let allocations = PaletteGenerator::assign(results)?
            .into_iter()
            .map(|(result, color)| Allocation {
                asset: result.asset,
                proportion: result.proportion,
                color,
            })
            .collect();
        Ok(Outcome(allocations))
    }

    /// export the portfolio to LP format
    pub fn export_lp(&self, buffer: &mut impl Write) -> Result<(), std::io::Error> {
        export_lp(&self.0, buffer)
    }

    /// export the portfolio to MPS format
    pub fn export_mps(&self, buffer: &mut impl Write) -> Result<(), std::io::Error> {
        export_mps(&self.0, buffer)
    }
}
