/// The solved allocation for a single asset.
///
/// Results are only produced by an optimizer, one per input constraint and in
/// the same order as the input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationResult {
    /// The asset label, copied from the matching constraint
    pub asset: String,
    /// The fraction of capital assigned to the asset, within the constraint's bounds
    pub proportion: f64,
}

impl AllocationResult {
    /// Pair an asset label with its solved proportion
    pub fn new(asset: impl Into<String>, proportion: f64) -> Self {
        Self {
            asset: asset.into(),
            proportion,
        }
    }
}
