//! Swap validation.
//!
//! Two positions may be exchanged only if they are 4-directionally adjacent.
//! A non-adjacent request is a *rejection* - a recoverable no-op outcome the
//! caller may surface as UI feedback - while an out-of-range coordinate is a
//! programmer error and fails with `OutOfBounds`.
//!
//! Reverting a swap that produced no match is the controller's job: swap is
//! self-inverse, so the revert is a second `Board::swap` on the same pair.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Pos;
use crate::error::EngineError;

/// Why a swap request was rejected without mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The two positions are not 4-directionally adjacent.
    NotAdjacent,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NotAdjacent => f.write_str("not adjacent"),
        }
    }
}

/// Outcome of a validated swap request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapOutcome {
    /// The swap was performed on the board.
    Accepted,
    /// The swap was refused; the board is untouched.
    Rejected(RejectReason),
}

impl SwapOutcome {
    /// Whether the swap was performed.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, SwapOutcome::Accepted)
    }
}

/// Validate and perform a swap.
///
/// Bounds are checked first: an out-of-range position is an error before
/// adjacency is even considered. A non-adjacent pair is rejected with no
/// mutation; an adjacent pair is exchanged unconditionally - whether the
/// swap *produces* a match is decided afterwards by the detector.
///
/// ```
/// use rust_match3::board::Board;
/// use rust_match3::core::Pos;
/// use rust_match3::rules::{try_swap, RejectReason, SwapOutcome};
///
/// let mut board = Board::from_rows(&[
///     vec![0, 1, 2],
///     vec![1, 2, 0],
///     vec![2, 0, 1],
/// ]);
///
/// let outcome = try_swap(&mut board, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
/// assert_eq!(outcome, SwapOutcome::Rejected(RejectReason::NotAdjacent));
///
/// let outcome = try_swap(&mut board, Pos::new(0, 0), Pos::new(0, 1)).unwrap();
/// assert!(outcome.is_accepted());
/// ```
pub fn try_swap(board: &mut Board, a: Pos, b: Pos) -> Result<SwapOutcome, EngineError> {
    board.get(a)?;
    board.get(b)?;

    if !a.is_adjacent(b) {
        return Ok(SwapOutcome::Rejected(RejectReason::NotAdjacent));
    }

    board.swap(a, b)?;
    Ok(SwapOutcome::Accepted)
}
