//! Resolution events.
//!
//! The resolver describes everything it does to the board as an ordered
//! event stream. The engine computes a full cascade eagerly; the frontend
//! drains the log at whatever pace its animations need and maps tile ids to
//! its own visual handles. Audio and effect dispatchers subscribe to the
//! same stream.

use serde::{Deserialize, Serialize};

use crate::core::{SpecialKind, Tile};

/// One observable board mutation during resolution.
///
/// Event payloads carry tile *records*, not references: a removed tile no
/// longer exists on the board by the time the frontend reads the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A matched tile was cleared from its cell.
    TileRemoved {
        /// The removed tile, with the coordinates it occupied.
        tile: Tile,
    },

    /// A tile fell to close a gap below it.
    TileMoved {
        /// The moved tile, with its *new* coordinates.
        tile: Tile,
        /// Row before the fall.
        from_row: usize,
        /// Row after the fall.
        to_row: usize,
    },

    /// A fresh tile filled a vacated cell at the top of a column.
    TileSpawned {
        /// The spawned tile.
        tile: Tile,
    },

    /// A long run's surviving tile received its special marking.
    SpecialCreated {
        /// The surviving tile, already marked.
        tile: Tile,
        /// The marking applied.
        kind: SpecialKind,
    },
}

impl BoardEvent {
    /// The tile the event concerns.
    #[must_use]
    pub fn tile(&self) -> &Tile {
        match self {
            BoardEvent::TileRemoved { tile }
            | BoardEvent::TileMoved { tile, .. }
            | BoardEvent::TileSpawned { tile }
            | BoardEvent::SpecialCreated { tile, .. } => tile,
        }
    }
}

/// The ordered record of one full cascade.
///
/// Events from every iteration are concatenated in emission order:
/// removals, then special markings, then falls, then spawns, repeating
/// until a detection pass comes up empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionLog {
    /// All events across the cascade, in order.
    pub events: Vec<BoardEvent>,

    /// Score gained: one point per removed tile.
    pub score_delta: u32,

    /// Number of iterations that removed tiles. Zero for a settled board.
    pub iterations: u32,
}

impl ResolutionLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cascade did nothing (the board was already settled).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of tiles removed across the whole cascade.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BoardEvent::TileRemoved { .. }))
            .count()
    }

    /// Number of tiles spawned across the whole cascade.
    #[must_use]
    pub fn spawned_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BoardEvent::TileSpawned { .. }))
            .count()
    }
}
