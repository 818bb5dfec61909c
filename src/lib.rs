//! # rust-match3
//!
//! A deterministic match-3 board engine for game frontends.
//!
//! ## Design Principles
//!
//! 1. **Pure rules, no presentation**: The engine validates swaps, detects
//!    runs, cascades gravity and refill, and reports everything as data.
//!    It never draws, waits, or plays a sound - frontends consume the
//!    event log at their own pace.
//!
//! 2. **Data-only tiles**: Tiles are records with stable ids, not handles
//!    to anything visual. Frontends map ids to sprites; the engine never
//!    holds a drawable object.
//!
//! 3. **One controller per session**: All session state - board, RNG,
//!    score, selection, phase - lives in one `BoardController` constructed
//!    per game instance. No process-wide state.
//!
//! 4. **Deterministic by seed**: Every source of randomness flows through
//!    one seeded ChaCha8 generator. Same seed, same board, same cascades.
//!
//! ## Architecture
//!
//! A player command enters at the controller, which validates the swap,
//! hands the board to the cascade resolver, and returns the ordered
//! `ResolutionLog` of removals, falls, and spawns. After each settled
//! cascade the move-availability checker decides whether the session
//! continues.
//!
//! ## Modules
//!
//! - `core`: Tile records, positions, RNG, configuration
//! - `board`: The grid model and serializable snapshots
//! - `rules`: Match detection, swap validation, move availability
//! - `resolve`: The cascade resolver and its event log
//! - `controller`: The per-session state machine
//! - `error`: Recoverable engine errors

pub mod board;
pub mod controller;
pub mod core;
pub mod error;
pub mod resolve;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Axis, BoardConfig, BoardRng, BoardRngState, Pos, SpecialKind, Tile, TileId, TileKind,
};

pub use crate::board::{Board, BoardSnapshot};

pub use crate::rules::{
    detect, find_first_move, has_available_move, try_swap, AvailableMove, Detection,
    RejectReason, Run, SwapOutcome,
};

pub use crate::resolve::{BoardEvent, CascadeResolver, ResolutionLog};

pub use crate::controller::{BoardController, ControllerPhase, SelectOutcome};

pub use crate::error::EngineError;
