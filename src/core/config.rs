//! Board configuration.
//!
//! Callers configure a session at startup: grid dimensions, the size of the
//! tile-kind space, and optionally a seed for deterministic play. The engine
//! hardcodes none of these.

use serde::{Deserialize, Serialize};

/// Smallest board dimension that can host a run of 3.
pub const MIN_DIM: usize = 3;

/// Largest supported board dimension.
pub const MAX_DIM: usize = 64;

/// Smallest tile-kind space for which constrained generation always succeeds.
///
/// With 3 or more kinds, at most two kinds are ever excluded at a cell (one
/// by the row constraint, one by the column constraint), so a candidate
/// always remains.
pub const MIN_TYPES: u8 = 3;

/// Largest supported tile-kind space.
pub const MAX_TYPES: u8 = 32;

/// Configuration for one board session.
///
/// ```
/// use rust_match3::core::BoardConfig;
///
/// let config = BoardConfig::new(8, 8, 6).with_seed(42);
///
/// assert_eq!(config.rows, 8);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// Size of the tile-kind space; kinds are `[0, num_types)`.
    pub num_types: u8,

    /// RNG seed. `None` seeds from entropy at session start.
    pub seed: Option<u64>,
}

impl BoardConfig {
    /// Create a configuration with no seed (entropy-seeded at start).
    ///
    /// ## Panics
    ///
    /// Panics if the dimensions fall outside `[MIN_DIM, MAX_DIM]` or
    /// `num_types` outside `[MIN_TYPES, MAX_TYPES]` - these are
    /// construction-time programmer errors, not runtime conditions.
    #[must_use]
    pub fn new(rows: usize, cols: usize, num_types: u8) -> Self {
        assert!(
            (MIN_DIM..=MAX_DIM).contains(&rows),
            "rows must be {MIN_DIM}-{MAX_DIM}"
        );
        assert!(
            (MIN_DIM..=MAX_DIM).contains(&cols),
            "cols must be {MIN_DIM}-{MAX_DIM}"
        );
        assert!(
            (MIN_TYPES..=MAX_TYPES).contains(&num_types),
            "num_types must be {MIN_TYPES}-{MAX_TYPES}"
        );

        Self {
            rows,
            cols,
            num_types,
            seed: None,
        }
    }

    /// Pin the RNG seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for BoardConfig {
    /// The classic 8x8 board with 6 tile kinds.
    fn default() -> Self {
        Self::new(8, 8, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_board() {
        let config = BoardConfig::default();
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 8);
        assert_eq!(config.num_types, 6);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_with_seed() {
        let config = BoardConfig::new(4, 5, 3).with_seed(7);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    #[should_panic(expected = "rows must be")]
    fn test_rejects_tiny_board() {
        let _ = BoardConfig::new(2, 8, 6);
    }

    #[test]
    #[should_panic(expected = "num_types must be")]
    fn test_rejects_two_kind_generation() {
        let _ = BoardConfig::new(8, 8, 2);
    }
}
