//! The board controller: one session's state machine.
//!
//! The controller is the only component a frontend calls into. It owns the
//! board, the RNG, the score, and the transient selection - one struct per
//! game instance, no process-wide state. Commands arrive as
//! `select_or_swap` calls; outcomes and the cascade event log flow back for
//! the frontend to animate at its own pace.
//!
//! ## Phases
//!
//! - `Idle`: accepting selections and swaps (a selection may be pending).
//! - `Resolving`: a cascade's events are still draining on the caller's
//!   side; new commands are rejected until `complete_resolution`. This is
//!   an input-admission gate, not a concurrency primitive - the engine
//!   computed the whole outcome before returning.
//! - `GameOver`: the settled board has no producing swap. Terminal until
//!   `reset`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardSnapshot};
use crate::core::{BoardConfig, BoardRng, Pos};
use crate::error::EngineError;
use crate::resolve::{CascadeResolver, ResolutionLog};
use crate::rules::{detect, has_available_move, try_swap, SwapOutcome};

/// The controller's admission state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerPhase {
    /// Accepting commands; a tile may be selected.
    Idle,
    /// A cascade's events are draining; commands are rejected.
    Resolving,
    /// No moves available. Terminal until reset.
    GameOver,
}

impl std::fmt::Display for ControllerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerPhase::Idle => f.write_str("idle"),
            ControllerPhase::Resolving => f.write_str("resolving"),
            ControllerPhase::GameOver => f.write_str("game over"),
        }
    }
}

/// What a `select_or_swap` command did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The position became the pending selection.
    Selected(Pos),

    /// Re-clicking the selected tile cleared the selection.
    Deselected,

    /// A second, non-adjacent tile was clicked: the selection is cleared
    /// and the board untouched.
    SelectionCleared,

    /// The swap was adjacent but produced no match; it was undone and the
    /// board is exactly as before.
    SwapReverted,

    /// The swap matched. The full cascade ran; its events await draining.
    SwapResolved(ResolutionLog),
}

/// One game session: board, RNG, score, selection, and phase.
///
/// ```
/// use rust_match3::controller::BoardController;
/// use rust_match3::core::BoardConfig;
///
/// let controller = BoardController::new(BoardConfig::default().with_seed(42));
///
/// assert_eq!(controller.score(), 0);
/// assert!(!controller.is_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct BoardController {
    config: BoardConfig,
    board: Board,
    rng: BoardRng,
    score: u32,
    selected: Option<Pos>,
    phase: ControllerPhase,
    /// Set while `Resolving` if the settled board has no producing swap;
    /// applied when the caller acknowledges the drain.
    stalemate_pending: bool,
}

impl BoardController {
    /// Start a session with a freshly generated, settled board.
    ///
    /// Seeds from `config.seed`, or from entropy when absent. A generated
    /// board with no available move enters `GameOver` immediately.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => BoardRng::new(seed),
            None => BoardRng::from_entropy(),
        };
        let board = Board::generate(&config, &mut rng);

        let mut controller = Self {
            config,
            board,
            rng,
            score: 0,
            selected: None,
            phase: ControllerPhase::Idle,
            stalemate_pending: false,
        };
        controller.check_opening_stalemate();
        controller
    }

    /// Start a session over a scripted board (tests, fixed levels).
    ///
    /// The board must already be settled; a board with resolvable matches
    /// is rejected with `UnsettledBoard`.
    pub fn with_board(board: Board, seed: u64) -> Result<Self, EngineError> {
        if !detect(&board).is_empty() {
            return Err(EngineError::UnsettledBoard);
        }

        let config = BoardConfig {
            rows: board.rows(),
            cols: board.cols(),
            num_types: board.num_types(),
            seed: Some(seed),
        };

        let mut controller = Self {
            config,
            board,
            rng: BoardRng::new(seed),
            score: 0,
            selected: None,
            phase: ControllerPhase::Idle,
            stalemate_pending: false,
        };
        controller.check_opening_stalemate();
        Ok(controller)
    }

    fn check_opening_stalemate(&mut self) {
        if !has_available_move(&self.board) {
            debug!("opening board has no producing swap; game over");
            self.phase = ControllerPhase::GameOver;
        }
    }

    /// Handle a player click on `pos`: select, deselect, or swap.
    ///
    /// See `SelectOutcome` for the possible results. Commands are rejected
    /// with `InvalidState` while `Resolving` or after `GameOver`, and with
    /// `OutOfBounds` for positions off the grid; neither rejection mutates
    /// anything.
    pub fn select_or_swap(&mut self, pos: Pos) -> Result<SelectOutcome, EngineError> {
        match self.phase {
            ControllerPhase::Idle => {}
            phase => return Err(EngineError::InvalidState { phase }),
        }
        self.board.get(pos)?;

        let Some(selected) = self.selected else {
            self.selected = Some(pos);
            return Ok(SelectOutcome::Selected(pos));
        };

        if selected == pos {
            self.selected = None;
            return Ok(SelectOutcome::Deselected);
        }

        // Any second click resolves the selection, one way or another.
        self.selected = None;

        match try_swap(&mut self.board, selected, pos)? {
            SwapOutcome::Rejected(_) => Ok(SelectOutcome::SelectionCleared),
            SwapOutcome::Accepted => {
                let cascade = CascadeResolver::resolve(&mut self.board, &mut self.rng);

                if cascade.removed_count() == 0 {
                    // Non-productive swap: swap is self-inverse, undo it.
                    self.board.swap(selected, pos)?;
                    debug!("swap {selected}<->{pos} produced no match; reverted");
                    return Ok(SelectOutcome::SwapReverted);
                }

                self.score += cascade.score_delta;
                self.stalemate_pending = !has_available_move(&self.board);
                self.phase = ControllerPhase::Resolving;
                debug!(
                    "swap {selected}<->{pos} resolved: +{} score, {} iteration(s)",
                    cascade.score_delta, cascade.iterations
                );
                Ok(SelectOutcome::SwapResolved(cascade))
            }
        }
    }

    /// The caller's signal that it finished draining the cascade events.
    ///
    /// Transitions `Resolving` to `GameOver` when the settled board has no
    /// producing swap, otherwise back to `Idle`. Any other phase is an
    /// `InvalidState` error.
    pub fn complete_resolution(&mut self) -> Result<(), EngineError> {
        if self.phase != ControllerPhase::Resolving {
            return Err(EngineError::InvalidState { phase: self.phase });
        }

        if self.stalemate_pending {
            debug!("no moves available; session over");
            self.phase = ControllerPhase::GameOver;
        } else {
            self.phase = ControllerPhase::Idle;
        }
        Ok(())
    }

    /// Start over: fresh settled board, zero score, no selection.
    ///
    /// The RNG continues from its current state, so a reset session does
    /// not replay the previous board.
    ///
    /// ## Panics
    ///
    /// Panics for sessions whose kind space is below `MIN_TYPES` (only
    /// possible via `with_board` on a scripted board), since constrained
    /// generation needs at least 3 kinds.
    pub fn reset(&mut self) {
        self.board = Board::generate(&self.config, &mut self.rng);
        self.score = 0;
        self.selected = None;
        self.stalemate_pending = false;
        self.phase = ControllerPhase::Idle;
        self.check_opening_stalemate();
    }

    /// Accumulated score: one point per removed tile.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current admission phase.
    #[must_use]
    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    /// Whether the session has ended in a stalemate.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == ControllerPhase::GameOver
    }

    /// The pending selection, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    /// Read access to the live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A serializable snapshot of the current board for renderers.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Whether any producing swap exists right now. Never mutates.
    #[must_use]
    pub fn has_available_move(&self) -> bool {
        has_available_move(&self.board)
    }
}
