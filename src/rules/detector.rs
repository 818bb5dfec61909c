//! Match detection.
//!
//! A single left-to-right sweep per row and top-to-bottom sweep per column
//! finds every maximal run of 3 or more same-kind tiles - O(rows x cols)
//! per axis, no re-scanning of consumed runs. Detection is pure: it reads
//! the board and never mutates it.
//!
//! ## Special runs
//!
//! A run longer than 3 keeps its first tile (in scan order) on the board as
//! a marked special tile; that survivor is excluded from the removal set
//! entirely, even when it also sits on a crossing run. Classification is by
//! length alone: exactly 4 yields a horizontal stripe, 5 or more a vertical
//! stripe, regardless of the run's axis. Intersecting runs are deduplicated
//! by tile identity, never shape-classified - `Cross`/`TShape`/`LShape`
//! have no producer.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Axis, SpecialKind, Tile, TileKind};

/// A maximal run of same-kind tiles along one axis, in scan order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// The axis the run lies on.
    pub axis: Axis,

    /// The shared kind of every tile in the run.
    pub kind: TileKind,

    /// The run's tiles, ordered by increasing column (horizontal) or
    /// increasing row (vertical). Always at least 3.
    pub tiles: SmallVec<[Tile; 8]>,
}

impl Run {
    /// Number of tiles in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for detector-produced runs; present for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether the run is long enough to create a special tile.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.len() > 3
    }
}

/// The complete result of one detection pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Every maximal run of length >= 3, horizontal runs first (row-major),
    /// then vertical runs (column-major).
    pub runs: Vec<Run>,

    /// Tiles to remove, deduplicated by identity in scan order. Excludes
    /// special-run survivors.
    pub removals: Vec<Tile>,

    /// Surviving special tiles with their marking, one per qualifying run.
    pub specials: Vec<(Tile, SpecialKind)>,
}

impl Detection {
    /// Whether the pass found nothing to remove - the settled condition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty()
    }
}

/// Scan the board for matched runs.
///
/// ```
/// use rust_match3::board::Board;
/// use rust_match3::rules::detect;
///
/// let board = Board::from_rows(&[
///     vec![0, 0, 0],
///     vec![1, 2, 1],
///     vec![2, 1, 2],
/// ]);
///
/// let detection = detect(&board);
/// assert_eq!(detection.removals.len(), 3);
/// assert!(detection.specials.is_empty());
/// ```
#[must_use]
pub fn detect(board: &Board) -> Detection {
    let runs = collect_runs(board);

    // Qualifying runs retain their first tile as a marked survivor.
    let mut specials = Vec::new();
    let mut survivor_ids: FxHashSet<_> = FxHashSet::default();
    for run in &runs {
        if run.is_special() {
            let marking = if run.len() == 4 {
                SpecialKind::HorizontalStripe
            } else {
                SpecialKind::VerticalStripe
            };
            let survivor = run.tiles[0];
            survivor_ids.insert(survivor.id);
            specials.push((survivor, marking));
        }
    }

    // Removal set: every run tile once, survivors excluded outright.
    let mut seen: FxHashSet<_> = FxHashSet::default();
    let mut removals = Vec::new();
    for run in &runs {
        for tile in &run.tiles {
            if survivor_ids.contains(&tile.id) {
                continue;
            }
            if seen.insert(tile.id) {
                removals.push(*tile);
            }
        }
    }

    Detection {
        runs,
        removals,
        specials,
    }
}

fn collect_runs(board: &Board) -> Vec<Run> {
    let (rows, cols) = board.dimensions();
    let mut runs = Vec::new();

    // Horizontal sweep: one pass per row, runs never re-scanned.
    for row in 0..rows {
        let mut start = 0;
        while start < cols {
            let Some(kind) = board.kind_at(row, start) else {
                start += 1;
                continue;
            };
            let mut end = start + 1;
            while end < cols && board.kind_at(row, end) == Some(kind) {
                end += 1;
            }
            if end - start >= 3 {
                runs.push(Run {
                    axis: Axis::Horizontal,
                    kind,
                    tiles: (start..end).filter_map(|col| *board.cell(row, col)).collect(),
                });
            }
            start = end;
        }
    }

    // Vertical sweep: one pass per column.
    for col in 0..cols {
        let mut start = 0;
        while start < rows {
            let Some(kind) = board.kind_at(start, col) else {
                start += 1;
                continue;
            };
            let mut end = start + 1;
            while end < rows && board.kind_at(end, col) == Some(kind) {
                end += 1;
            }
            if end - start >= 3 {
                runs.push(Run {
                    axis: Axis::Vertical,
                    kind,
                    tiles: (start..end).filter_map(|row| *board.cell(row, col)).collect(),
                });
            }
            start = end;
        }
    }

    runs
}
