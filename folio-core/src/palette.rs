use crate::models::AllocationResult;
use std::fmt;

/// The channel intensity used for a cleared bit
const LOW: &str = "33";
/// The channel intensity used for a set bit
const HIGH: &str = "CC";

/// Every (r, g, b) bit combination except black and white, ordered with red
/// varying fastest and blue slowest.
const COMBINATIONS: [(bool, bool, bool); 6] = [
    (true, false, false),
    (false, true, false),
    (true, true, false),
    (false, false, true),
    (true, false, true),
    (false, true, true),
];

/// A color in `#RRGGBB` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Color(String);

impl Color {
    fn from_bits((r, g, b): (bool, bool, bool)) -> Self {
        let channel = |bit: bool| if bit { HIGH } else { LOW };
        Self(format!("#{}{}{}", channel(r), channel(g), channel(b)))
    }

    /// The hex string, including the leading `#`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Produces distinct colors for rendering allocations against a dark background.
///
/// Each channel takes one of two intensities, which yields eight colors; black
/// and white are excluded, leaving a fixed, ordered palette of six. The same
/// count always produces the same colors in the same order.
pub struct PaletteGenerator;

impl PaletteGenerator {
    /// The largest number of colors the palette can provide
    pub const CAPACITY: usize = COMBINATIONS.len();

    /// Returns the first `n` colors of the palette.
    pub fn colors(n: usize) -> Result<Vec<Color>, PaletteError> {
        if n > Self::CAPACITY {
            return Err(PaletteError::InsufficientCapacity {
                requested: n,
                capacity: Self::CAPACITY,
            });
        }

        Ok(COMBINATIONS
            .iter()
            .take(n)
            .map(|&bits| Color::from_bits(bits))
            .collect())
    }

    /// Pairs each result with its color, preserving the order of `results`.
    pub fn assign(
        results: Vec<AllocationResult>,
    ) -> Result<Vec<(AllocationResult, Color)>, PaletteError> {
        let colors = Self::colors(results.len())?;
        Ok(results.into_iter().zip(colors).collect())
    }
}

/// Errors that can occur when generating a palette
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PaletteError {
    /// Error when more colors are requested than the palette holds
    #[error("requested {requested} colors, but the palette only has {capacity}")]
    InsufficientCapacity {
        /// The number of colors requested
        requested: usize,
        /// The number of colors available
        capacity: usize,
    },
}
