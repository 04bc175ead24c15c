/// One asset's expected return together with the bounds on its allocation.
///
/// A constraint can only be obtained through validation, so holding one
/// guarantees `0 ≤ minimum ≤ maximum ≤ 1` and finite, non-NaN values.
/// Constraints are immutable; optimizers only ever read them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "AllocationConstraintDto", into = "AllocationConstraintDto")
)]
pub struct AllocationConstraint {
    asset: String,
    expected_return: f64,
    minimum: f64,
    maximum: f64,
}

impl AllocationConstraint {
    /// Creates a new constraint, validating its bounds
    pub fn new(
        asset: impl Into<String>,
        expected_return: f64,
        minimum: f64,
        maximum: f64,
    ) -> Result<Self, ConstraintError> {
        AllocationConstraintDto {
            asset: asset.into(),
            expected_return,
            minimum,
            maximum,
        }
        .try_into()
    }

    /// The label identifying the asset
    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// The return per unit of capital allocated to the asset (any sign)
    pub fn expected_return(&self) -> f64 {
        self.expected_return
    }

    /// The smallest admissible allocation
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// The largest admissible allocation
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// The admissible allocation interval as (minimum, maximum)
    pub fn bounds(&self) -> (f64, f64) {
        (self.minimum, self.maximum)
    }
}

/// The unvalidated form of an [`AllocationConstraint`], used for (de)serialization.
///
/// The field names are those of the constraint itself, so a snapshot of a
/// constraint table reads the same whichever side of validation it came from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct AllocationConstraintDto {
    /// The label identifying the asset
    pub asset: String,
    /// The expected return of the asset
    pub expected_return: f64,
    /// The smallest admissible allocation, in [0, 1]
    pub minimum: f64,
    /// The largest admissible allocation, in [0, 1]
    pub maximum: f64,
}

impl From<AllocationConstraint> for AllocationConstraintDto {
    fn from(value: AllocationConstraint) -> Self {
        let AllocationConstraint {
            asset,
            expected_return,
            minimum,
            maximum,
        } = value;
        Self {
            asset,
            expected_return,
            minimum,
            maximum,
        }
    }
}

impl TryFrom<AllocationConstraintDto> for AllocationConstraint {
    type Error = ConstraintError;

    fn try_from(value: AllocationConstraintDto) -> Result<Self, Self::Error> {
        let AllocationConstraintDto {
            asset,
            expected_return,
            minimum,
            maximum,
        } = value;

        if expected_return.is_nan() || minimum.is_nan() || maximum.is_nan() {
            return Err(ConstraintError::NaN);
        }
        if expected_return.is_infinite() {
            return Err(ConstraintError::InfiniteReturn);
        }
        if minimum < 0.0 {
            return Err(ConstraintError::NegativeMinimum);
        }
        if minimum > maximum {
            return Err(ConstraintError::MinimumAboveMaximum);
        }
        if maximum > 1.0 {
            return Err(ConstraintError::MaximumAboveOne);
        }

        Ok(Self {
            asset,
            expected_return,
            minimum,
            maximum,
        })
    }
}

/// The ways in which a constraint's parameters may be invalid
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConstraintError {
    /// Error when the return or either bound is NaN
    #[error("invalid constraint: NaN value encountered")]
    NaN,
    /// Error when the expected return is infinite
    #[error("invalid constraint: expected return cannot be infinite")]
    InfiniteReturn,
    /// Error when the minimum allocation is below zero
    #[error("invalid constraint: minimum is negative")]
    NegativeMinimum,
    /// Error when the bounds are reversed
    #[error("invalid constraint: minimum exceeds maximum")]
    MinimumAboveMaximum,
    /// Error when the maximum allocation is above one
    #[error("invalid constraint: maximum exceeds 1")]
    MaximumAboveOne,
}
