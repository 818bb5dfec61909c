//! Engine error types.
//!
//! All rules errors are local and recoverable; none are fatal to the
//! process. Out-of-range coordinates are programmer errors surfaced as
//! `Result`s at the API boundary so they fail fast without panicking the
//! host. Rejected-but-legal inputs (a non-adjacent swap) are *outcomes*,
//! not errors - see `rules::SwapOutcome`.

use thiserror::Error;

use crate::controller::ControllerPhase;
use crate::core::Pos;

/// Errors surfaced by the engine's public API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A coordinate fell outside the grid.
    #[error("position {pos} is outside the {rows}x{cols} board")]
    OutOfBounds {
        /// The offending position.
        pos: Pos,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// A command arrived while the controller cannot accept one
    /// (resolution events still draining, or the session is over).
    #[error("command rejected while {phase}")]
    InvalidState {
        /// The phase that rejected the command.
        phase: ControllerPhase,
    },

    /// A session was handed a board that still contains resolvable matches.
    #[error("board has resolvable matches; a session must start settled")]
    UnsettledBoard,
}
