//! Tile records and identity.
//!
//! Every tile on the board carries a stable `TileId`, assigned when the tile
//! is created (board initialization or refill) and unique for the tile's
//! lifetime. Frontends map ids to their own visual handles; the engine never
//! holds or dereferences a drawable object.
//!
//! ## Usage
//!
//! ```
//! use rust_match3::core::{Tile, TileId, TileKind};
//!
//! let tile = Tile::new(TileId::new(7), TileKind::new(2), 4, 1);
//!
//! assert_eq!(tile.id.raw(), 7);
//! assert_eq!(tile.kind.raw(), 2);
//! assert!(tile.special.is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::Pos;

/// Unique identifier for a tile.
///
/// Ids are allocated by the board and never reused within a session.
/// Two tiles of the same kind are still distinct entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// The matching key of a tile.
///
/// A value in `[0, num_types)` where `num_types` is fixed per board.
/// Tiles match iff their kinds are equal; the engine attaches no other
/// meaning to the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileKind(pub u8);

impl TileKind {
    /// Create a new tile kind.
    #[must_use]
    pub const fn new(kind: u8) -> Self {
        Self(kind)
    }

    /// Get the raw kind value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for TileKind {
    fn from(kind: u8) -> Self {
        Self(kind)
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kind({})", self.0)
    }
}

/// Marking applied to the surviving tile of a run longer than 3.
///
/// Only the stripe variants are ever produced by the detector: a run of
/// exactly 4 yields `HorizontalStripe`, a longer run yields `VerticalStripe`,
/// in both cases regardless of the run's axis. `Cross`, `TShape`, and
/// `LShape` are declared categories with no producer; intersecting runs are
/// deduplicated, not shape-classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKind {
    /// Surviving tile of a run of exactly 4.
    HorizontalStripe,
    /// Surviving tile of a run of 5 or more.
    VerticalStripe,
    /// Declared but never produced.
    Cross,
    /// Declared but never produced.
    TShape,
    /// Declared but never produced.
    LShape,
}

impl SpecialKind {
    /// Stable string form for frontends and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialKind::HorizontalStripe => "striped-horizontal",
            SpecialKind::VerticalStripe => "striped-vertical",
            SpecialKind::Cross => "cross",
            SpecialKind::TShape => "t-shape",
            SpecialKind::LShape => "l-shape",
        }
    }
}

impl std::fmt::Display for SpecialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tile on the board: immutable identity plus mutable position.
///
/// Outside an in-progress board mutation, `(row, col)` always equals the
/// tile's slot in the grid; the board rewrites the coordinates on every
/// placement so the two can never desynchronize at rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identity, unique for the tile's lifetime.
    pub id: TileId,

    /// The matching key.
    pub kind: TileKind,

    /// Current grid row.
    pub row: usize,

    /// Current grid column.
    pub col: usize,

    /// Special marking, if the tile survived a long run.
    pub special: Option<SpecialKind>,
}

impl Tile {
    /// Create a new ordinary tile at the given cell.
    #[must_use]
    pub const fn new(id: TileId, kind: TileKind, row: usize, col: usize) -> Self {
        Self {
            id,
            kind,
            row,
            col,
            special: None,
        }
    }

    /// The tile's current position.
    #[must_use]
    pub const fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }

    /// Whether the tile carries a special marking.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        self.special.is_some()
    }

    /// Apply a special marking. A later marking overwrites an earlier one.
    pub fn mark_special(&mut self, kind: SpecialKind) {
        self.special = Some(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id_ordering() {
        assert!(TileId::new(1) < TileId::new(2));
        assert_eq!(TileId::new(5), TileId::from(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TileId(42)), "Tile(42)");
        assert_eq!(format!("{}", TileKind(3)), "Kind(3)");
        assert_eq!(
            format!("{}", SpecialKind::HorizontalStripe),
            "striped-horizontal"
        );
    }

    #[test]
    fn test_new_tile_is_ordinary() {
        let tile = Tile::new(TileId::new(0), TileKind::new(1), 2, 3);
        assert!(!tile.is_special());
        assert_eq!(tile.pos(), Pos::new(2, 3));
    }

    #[test]
    fn test_mark_special_overwrites() {
        let mut tile = Tile::new(TileId::new(0), TileKind::new(1), 0, 0);
        tile.mark_special(SpecialKind::HorizontalStripe);
        tile.mark_special(SpecialKind::VerticalStripe);
        assert_eq!(tile.special, Some(SpecialKind::VerticalStripe));
    }

    #[test]
    fn test_serialization() {
        let tile = Tile::new(TileId::new(9), TileKind::new(4), 1, 7);
        let json = serde_json::to_string(&tile).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, back);
    }
}
