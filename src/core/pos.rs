//! Grid positions and axes.
//!
//! Positions are `(row, col)` pairs with row 0 at the top of the board.
//! Adjacency is 4-directional only; diagonal neighbors are never adjacent.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// ```
/// use rust_match3::core::Pos;
///
/// let a = Pos::new(2, 3);
/// let b = Pos::new(2, 4);
///
/// assert!(a.is_adjacent(b));
/// assert!(!a.is_adjacent(Pos::new(3, 4))); // diagonal
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Row index, 0 at the top.
    pub row: usize,

    /// Column index, 0 at the left.
    pub col: usize,
}

impl Pos {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 4-directional adjacency: same row and columns differ by exactly 1,
    /// or same column and rows differ by exactly 1. Symmetric by
    /// construction; a position is never adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Pos) -> bool {
        (self.row == other.row && self.col.abs_diff(other.col) == 1)
            || (self.col == other.col && self.row.abs_diff(other.row) == 1)
    }

    /// The cell one column to the right.
    #[must_use]
    pub const fn right(self) -> Pos {
        Pos::new(self.row, self.col + 1)
    }

    /// The cell one row down.
    #[must_use]
    pub const fn down(self) -> Pos {
        Pos::new(self.row + 1, self.col)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of a run on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Same row, consecutive columns.
    Horizontal,
    /// Same column, consecutive rows.
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_horizontal_and_vertical() {
        let p = Pos::new(3, 3);
        assert!(p.is_adjacent(Pos::new(3, 2)));
        assert!(p.is_adjacent(Pos::new(3, 4)));
        assert!(p.is_adjacent(Pos::new(2, 3)));
        assert!(p.is_adjacent(Pos::new(4, 3)));
    }

    #[test]
    fn test_not_adjacent_diagonal_or_far() {
        let p = Pos::new(3, 3);
        assert!(!p.is_adjacent(Pos::new(2, 2)));
        assert!(!p.is_adjacent(Pos::new(4, 4)));
        assert!(!p.is_adjacent(Pos::new(3, 5)));
        assert!(!p.is_adjacent(Pos::new(0, 3)));
    }

    #[test]
    fn test_not_adjacent_to_self() {
        let p = Pos::new(1, 1);
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn test_neighbors() {
        let p = Pos::new(2, 5);
        assert_eq!(p.right(), Pos::new(2, 6));
        assert_eq!(p.down(), Pos::new(3, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Pos::new(4, 7)), "(4, 7)");
    }
}
