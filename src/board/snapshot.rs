//! Serializable board snapshots for frontends.
//!
//! A snapshot is the renderer-facing view of the grid: dimensions plus every
//! tile record in row-major order. It carries no cell storage details and no
//! engine internals, so frontends can transport it over whatever encoding
//! serde supports.

use serde::{Deserialize, Serialize};

use super::Board;
use crate::core::Tile;

/// Point-in-time copy of the board's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Grid row count.
    pub rows: usize,

    /// Grid column count.
    pub cols: usize,

    /// All tiles on the board, row-major. On a settled board this holds
    /// exactly `rows * cols` entries.
    pub tiles: Vec<Tile>,
}

impl BoardSnapshot {
    /// Capture the current state of a board.
    #[must_use]
    pub fn capture(board: &Board) -> Self {
        Self {
            rows: board.rows(),
            cols: board.cols(),
            tiles: board.tiles().copied().collect(),
        }
    }
}

impl Board {
    /// Capture a serializable snapshot of this board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pos;

    #[test]
    fn test_snapshot_covers_all_tiles() {
        let board = Board::from_rows(&[vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]);
        let snapshot = board.snapshot();

        assert_eq!(snapshot.rows, 3);
        assert_eq!(snapshot.cols, 3);
        assert_eq!(snapshot.tiles.len(), 9);
        assert_eq!(snapshot.tiles[5].pos(), Pos::new(1, 2));
    }

    #[test]
    fn test_snapshot_skips_empty_cells() {
        let mut board = Board::from_rows(&[vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]);
        board.take(Pos::new(1, 1)).unwrap();

        let snapshot = board.snapshot();
        assert_eq!(snapshot.tiles.len(), 8);
        assert!(snapshot.tiles.iter().all(|t| t.pos() != Pos::new(1, 1)));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let board = Board::from_rows(&[vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]);
        let snapshot = board.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
