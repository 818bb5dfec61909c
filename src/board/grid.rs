//! The board model: a fixed-size grid of tile cells.
//!
//! The board owns the tiles and exposes read/mutate primitives only; rules
//! logic (matching, validation, cascading) lives in `rules` and `resolve`.
//! Storage is a flat row-major `Vec` of optional tiles. Cells are empty only
//! mid-cascade; a board at rest holds exactly one tile per cell.
//!
//! Every placement rewrites the placed tile's `(row, col)`, so a tile's
//! coordinates and its slot can only disagree inside an in-progress
//! mutation, never at rest.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    BoardConfig, BoardRng, Pos, SpecialKind, Tile, TileId, TileKind, MAX_TYPES, MIN_TYPES,
};
use crate::error::EngineError;

/// The game board: `rows x cols` cells, each holding at most one tile.
///
/// ```
/// use rust_match3::board::Board;
/// use rust_match3::core::{BoardConfig, BoardRng, Pos};
///
/// let config = BoardConfig::new(8, 8, 6);
/// let mut rng = BoardRng::new(42);
/// let board = Board::generate(&config, &mut rng);
///
/// assert_eq!(board.dimensions(), (8, 8));
/// assert!(board.get(Pos::new(0, 0)).unwrap().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    num_types: u8,
    /// Flat cell storage, row-major (`row * cols + col`).
    cells: Vec<Option<Tile>>,
    /// Next tile id to allocate. Ids are never reused within a session.
    next_id: u32,
}

impl Board {
    /// Generate a settled initial board.
    ///
    /// Each cell's kind is drawn uniformly from the kinds that do not
    /// complete a run of 3 with the two cells to the left or the two cells
    /// above, so a freshly generated board never starts with a match.
    ///
    /// ## Panics
    ///
    /// Panics if `config.num_types < MIN_TYPES`; with fewer kinds the
    /// candidate set can empty out mid-generation.
    #[must_use]
    pub fn generate(config: &BoardConfig, rng: &mut BoardRng) -> Self {
        assert!(
            config.num_types >= MIN_TYPES,
            "generation requires at least {MIN_TYPES} tile kinds"
        );

        let mut board = Self::empty(config.rows, config.cols, config.num_types);

        for row in 0..config.rows {
            for col in 0..config.cols {
                // A kind is banned if placing it would complete a run of 3
                // leftward or upward. At most two kinds are banned per cell.
                let mut banned: SmallVec<[TileKind; 2]> = SmallVec::new();
                if col >= 2 {
                    if let (Some(k1), Some(k2)) =
                        (board.kind_at(row, col - 1), board.kind_at(row, col - 2))
                    {
                        if k1 == k2 {
                            banned.push(k1);
                        }
                    }
                }
                if row >= 2 {
                    if let (Some(k1), Some(k2)) =
                        (board.kind_at(row - 1, col), board.kind_at(row - 2, col))
                    {
                        if k1 == k2 && !banned.contains(&k1) {
                            banned.push(k1);
                        }
                    }
                }

                let allowed = config.num_types as usize - banned.len();
                let mut pick = rng.gen_range_usize(0..allowed);
                let mut kind = TileKind::new(0);
                for raw in 0..config.num_types {
                    let candidate = TileKind::new(raw);
                    if banned.contains(&candidate) {
                        continue;
                    }
                    if pick == 0 {
                        kind = candidate;
                        break;
                    }
                    pick -= 1;
                }

                board.spawn(kind, row, col);
            }
        }

        board
    }

    /// Build a board from explicit kind rows, row 0 first.
    ///
    /// Intended for tests and scripted levels. The kind space is inferred as
    /// `max kind + 1`. Tile ids are allocated in row-major order starting
    /// at 0.
    ///
    /// ## Panics
    ///
    /// Panics if the rows are empty or ragged.
    #[must_use]
    pub fn from_rows(kind_rows: &[Vec<u8>]) -> Self {
        assert!(!kind_rows.is_empty(), "board must have at least one row");
        let cols = kind_rows[0].len();
        assert!(cols > 0, "board must have at least one column");
        assert!(
            kind_rows.iter().all(|r| r.len() == cols),
            "all rows must have the same length"
        );
        assert!(
            kind_rows
                .iter()
                .flat_map(|r| r.iter())
                .all(|&kind| kind < MAX_TYPES),
            "tile kinds must be below {MAX_TYPES}"
        );

        let num_types = kind_rows
            .iter()
            .flat_map(|r| r.iter().copied())
            .max()
            .map_or(1, |max| max + 1);

        let mut board = Self::empty(kind_rows.len(), cols, num_types);
        for (row, kinds) in kind_rows.iter().enumerate() {
            for (col, &kind) in kinds.iter().enumerate() {
                board.spawn(TileKind::new(kind), row, col);
            }
        }
        board
    }

    fn empty(rows: usize, cols: usize, num_types: u8) -> Self {
        Self {
            rows,
            cols,
            num_types,
            cells: vec![None; rows * cols],
            next_id: 0,
        }
    }

    /// Grid dimensions as `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Size of the tile-kind space.
    #[must_use]
    pub fn num_types(&self) -> u8 {
        self.num_types
    }

    /// Whether a position lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Pos) -> Result<usize, EngineError> {
        if self.in_bounds(pos) {
            Ok(pos.row * self.cols + pos.col)
        } else {
            Err(EngineError::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Read the cell at `pos`: `Ok(None)` for an empty cell.
    pub fn get(&self, pos: Pos) -> Result<Option<Tile>, EngineError> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Write the cell at `pos`.
    ///
    /// Placing `Some(tile)` rewrites the tile's coordinates to `pos`,
    /// keeping tile and slot consistent.
    pub fn set(&mut self, pos: Pos, cell: Option<Tile>) -> Result<(), EngineError> {
        let idx = self.index(pos)?;
        self.cells[idx] = cell.map(|mut tile| {
            tile.row = pos.row;
            tile.col = pos.col;
            tile
        });
        Ok(())
    }

    /// Remove and return the tile at `pos`, leaving the cell empty.
    pub fn take(&mut self, pos: Pos) -> Result<Option<Tile>, EngineError> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx].take())
    }

    /// Exchange two cells unconditionally, rewriting the coordinates of any
    /// tile involved. Validity (adjacency, phase) is the caller's concern;
    /// this operation only guarantees internal consistency.
    ///
    /// Swap is self-inverse: swapping the same pair twice restores the
    /// original grid exactly.
    pub fn swap(&mut self, a: Pos, b: Pos) -> Result<(), EngineError> {
        let ia = self.index(a)?;
        let ib = self.index(b)?;

        self.cells.swap(ia, ib);

        if let Some(tile) = self.cells[ia].as_mut() {
            tile.row = a.row;
            tile.col = a.col;
        }
        if let Some(tile) = self.cells[ib].as_mut() {
            tile.row = b.row;
            tile.col = b.col;
        }

        Ok(())
    }

    /// The kind of the tile at `(row, col)`, or `None` for an empty or
    /// out-of-range cell. Convenience for scan loops.
    #[must_use]
    pub fn kind_at(&self, row: usize, col: usize) -> Option<TileKind> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col].map(|tile| tile.kind)
        } else {
            None
        }
    }

    /// Iterate over all tiles currently on the board, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().filter_map(|cell| cell.as_ref())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    // === In-crate primitives ===
    //
    // Index-checked by the caller's loop bounds; plain slice indexing keeps
    // the hot paths free of per-cell Result plumbing.

    /// Borrow the cell at `(row, col)`.
    pub(crate) fn cell(&self, row: usize, col: usize) -> &Option<Tile> {
        &self.cells[row * self.cols + col]
    }

    /// Remove and return the tile at `(row, col)`.
    pub(crate) fn take_at(&mut self, row: usize, col: usize) -> Option<Tile> {
        self.cells[row * self.cols + col].take()
    }

    /// Place a tile at `(row, col)`, rewriting its coordinates.
    pub(crate) fn put_at(&mut self, row: usize, col: usize, mut tile: Tile) {
        tile.row = row;
        tile.col = col;
        self.cells[row * self.cols + col] = Some(tile);
    }

    /// Allocate a fresh tile of `kind` at `(row, col)` and place it.
    /// Returns a copy of the placed tile.
    pub(crate) fn spawn(&mut self, kind: TileKind, row: usize, col: usize) -> Tile {
        let tile = Tile::new(TileId::new(self.next_id), kind, row, col);
        self.next_id += 1;
        self.cells[row * self.cols + col] = Some(tile);
        tile
    }

    /// Mark the tile at `(row, col)` as special, in place.
    /// Returns a copy of the updated tile, or `None` for an empty cell.
    pub(crate) fn mark_special_at(
        &mut self,
        row: usize,
        col: usize,
        kind: SpecialKind,
    ) -> Option<Tile> {
        let cell = &mut self.cells[row * self.cols + col];
        cell.as_mut().map(|tile| {
            tile.mark_special(kind);
            *tile
        })
    }
}

impl std::fmt::Display for Board {
    /// ASCII kind grid: one base-36 digit per tile, `.` for an empty cell.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                match self.cell(row, col) {
                    Some(tile) => {
                        let digit =
                            char::from_digit(u32::from(tile.kind.raw()), 36).unwrap_or('?');
                        write!(f, "{digit}")?;
                    }
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
