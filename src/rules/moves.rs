//! Move availability: the stalemate check.
//!
//! Exhaustively simulates every adjacent swap on a scratch copy of the
//! board and asks the detector whether any of them would produce a match.
//! Trying only the right and down neighbor of each cell covers every
//! unordered adjacent pair exactly once; left and up trials would re-test
//! the same pairs. The live board is never touched - a check has zero
//! observable effect on game state.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Pos, Tile};

use super::detector::detect;

/// Diagnostic result: the first discovered producing swap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableMove {
    /// One end of the producing swap.
    pub a: Pos,

    /// The other end.
    pub b: Pos,

    /// The tiles the swap would match, as detected on the trial board.
    pub matched: Vec<Tile>,
}

/// Find the first adjacent swap that would produce a match, scanning
/// row-major and trying each cell's right and down neighbor.
///
/// Returns `None` on a stalemate board.
#[must_use]
pub fn find_first_move(board: &Board) -> Option<AvailableMove> {
    let (rows, cols) = board.dimensions();
    let mut scratch = board.clone();

    for row in 0..rows {
        for col in 0..cols {
            let here = Pos::new(row, col);

            if col + 1 < cols {
                if let Some(matched) = trial(&mut scratch, here, here.right()) {
                    return Some(AvailableMove {
                        a: here,
                        b: here.right(),
                        matched,
                    });
                }
            }
            if row + 1 < rows {
                if let Some(matched) = trial(&mut scratch, here, here.down()) {
                    return Some(AvailableMove {
                        a: here,
                        b: here.down(),
                        matched,
                    });
                }
            }
        }
    }

    None
}

/// The authoritative stalemate signal: whether any legal swap can match.
///
/// ```
/// use rust_match3::board::Board;
/// use rust_match3::rules::has_available_move;
///
/// // A 2-kind checkerboard can never produce a run of 3.
/// let board = Board::from_rows(&[
///     vec![0, 1, 0, 1],
///     vec![1, 0, 1, 0],
///     vec![0, 1, 0, 1],
///     vec![1, 0, 1, 0],
/// ]);
/// assert!(!has_available_move(&board));
/// ```
#[must_use]
pub fn has_available_move(board: &Board) -> bool {
    find_first_move(board).is_some()
}

/// Swap, detect, revert. The revert happens before the result is
/// inspected so the scratch board is clean for the next trial.
fn trial(scratch: &mut Board, a: Pos, b: Pos) -> Option<Vec<Tile>> {
    // Both positions come from the scan loops, so the swap cannot fail.
    scratch.swap(a, b).expect("trial swap stays on the grid");
    let detection = detect(scratch);
    scratch.swap(a, b).expect("trial revert stays on the grid");

    if detection.removals.is_empty() {
        None
    } else {
        Some(detection.removals)
    }
}
