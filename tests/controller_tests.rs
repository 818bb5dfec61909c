//! Board controller integration tests.
//!
//! Drives complete player interactions through the session state machine:
//! selection handling, swap validation and revert, cascade hand-off, the
//! resolving admission gate, stalemate detection, and reset.

use rust_match3::board::Board;
use rust_match3::controller::{BoardController, ControllerPhase, SelectOutcome};
use rust_match3::core::{BoardConfig, Pos};
use rust_match3::error::EngineError;
use rust_match3::rules::detect;

/// Settled 6x6 board built on a diagonal striping (itself move-free) with
/// three planted 3-kind tiles: swapping (3, 2)<->(3, 3) completes a
/// vertical run in column 2, while (0, 0)<->(0, 1) matches nothing.
fn fixture() -> Board {
    Board::from_rows(&[
        vec![0, 1, 2, 0, 1, 2],
        vec![1, 2, 0, 1, 2, 0],
        vec![2, 0, 3, 2, 0, 1],
        vec![0, 1, 2, 3, 1, 2],
        vec![1, 2, 3, 1, 2, 0],
        vec![2, 0, 1, 2, 0, 1],
    ])
}

fn session() -> BoardController {
    BoardController::with_board(fixture(), 42).unwrap()
}

// =============================================================================
// Selection policy
// =============================================================================

/// First click selects; re-click deselects.
#[test]
fn test_select_then_deselect() {
    let mut controller = session();

    assert_eq!(
        controller.select_or_swap(Pos::new(1, 1)).unwrap(),
        SelectOutcome::Selected(Pos::new(1, 1))
    );
    assert_eq!(
        controller.select_or_swap(Pos::new(1, 1)).unwrap(),
        SelectOutcome::Deselected
    );
    assert_eq!(controller.selected(), None);
}

/// Clicking a second, non-adjacent tile clears the selection without
/// touching the board - the (0,0) vs (5,5) scenario.
#[test]
fn test_non_adjacent_pair_rejected_without_mutation() {
    let mut controller = session();
    let before = controller.snapshot();

    controller.select_or_swap(Pos::new(0, 0)).unwrap();
    let outcome = controller.select_or_swap(Pos::new(5, 5)).unwrap();

    assert_eq!(outcome, SelectOutcome::SelectionCleared);
    assert_eq!(controller.selected(), None);
    assert_eq!(controller.snapshot(), before);
    assert_eq!(controller.phase(), ControllerPhase::Idle);
}

/// After a cleared selection the next click starts a fresh selection.
#[test]
fn test_selection_restarts_after_clear() {
    let mut controller = session();

    controller.select_or_swap(Pos::new(0, 0)).unwrap();
    controller.select_or_swap(Pos::new(5, 5)).unwrap();

    assert_eq!(
        controller.select_or_swap(Pos::new(2, 2)).unwrap(),
        SelectOutcome::Selected(Pos::new(2, 2))
    );
}

// =============================================================================
// Swaps
// =============================================================================

/// An adjacent swap that matches nothing is undone: the grid is restored
/// exactly and no score is granted.
#[test]
fn test_unproductive_swap_reverts_exactly() {
    let mut controller = session();
    let before = controller.board().clone();

    controller.select_or_swap(Pos::new(0, 0)).unwrap();
    let outcome = controller.select_or_swap(Pos::new(0, 1)).unwrap();

    assert_eq!(outcome, SelectOutcome::SwapReverted);
    assert_eq!(controller.board(), &before);
    assert_eq!(controller.score(), 0);
    assert_eq!(controller.phase(), ControllerPhase::Idle);
}

/// A productive swap runs the whole cascade and reports it.
#[test]
fn test_productive_swap_resolves_and_scores() {
    let mut controller = session();

    controller.select_or_swap(Pos::new(3, 2)).unwrap();
    let outcome = controller.select_or_swap(Pos::new(3, 3)).unwrap();

    let SelectOutcome::SwapResolved(cascade) = outcome else {
        panic!("expected SwapResolved, got {outcome:?}");
    };

    assert!(cascade.score_delta >= 3);
    assert_eq!(controller.score(), cascade.score_delta);
    assert!(detect(controller.board()).is_empty());
    assert_eq!(controller.board().tile_count(), 36);
}

// =============================================================================
// The resolving gate
// =============================================================================

/// While the cascade's events drain, every command is rejected without
/// mutation; acknowledging the drain reopens the session.
#[test]
fn test_resolving_gate() {
    let mut controller = session();

    controller.select_or_swap(Pos::new(3, 2)).unwrap();
    controller.select_or_swap(Pos::new(3, 3)).unwrap();
    assert_eq!(controller.phase(), ControllerPhase::Resolving);

    let err = controller.select_or_swap(Pos::new(0, 0)).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidState {
            phase: ControllerPhase::Resolving,
        }
    );

    controller.complete_resolution().unwrap();
    assert_ne!(controller.phase(), ControllerPhase::Resolving);

    // Acknowledging twice is itself an invalid command.
    assert!(controller.complete_resolution().is_err());
}

// =============================================================================
// Game over
// =============================================================================

/// A stalemate opening board is terminal from the first command.
#[test]
fn test_stalemate_board_is_terminal() {
    let checkerboard = Board::from_rows(&[
        vec![0, 1, 0, 1],
        vec![1, 0, 1, 0],
        vec![0, 1, 0, 1],
        vec![1, 0, 1, 0],
    ]);
    let mut controller = BoardController::with_board(checkerboard, 7).unwrap();

    assert!(controller.is_game_over());
    assert!(!controller.has_available_move());

    let err = controller.select_or_swap(Pos::new(0, 0)).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidState {
            phase: ControllerPhase::GameOver,
        }
    );
    assert!(controller.complete_resolution().is_err());
}

// =============================================================================
// Sessions
// =============================================================================

/// Same configuration and seed: byte-identical sessions and cascades.
#[test]
fn test_sessions_are_deterministic() {
    let config = BoardConfig::new(8, 8, 6).with_seed(1234);
    let mut a = BoardController::new(config);
    let mut b = BoardController::new(config);

    assert_eq!(a.board(), b.board());

    // Replay the same command sequence on both sessions.
    for pos in [Pos::new(0, 0), Pos::new(0, 1), Pos::new(4, 4), Pos::new(4, 5)] {
        let out_a = a.select_or_swap(pos);
        let out_b = b.select_or_swap(pos);
        assert_eq!(out_a, out_b);

        if a.phase() == ControllerPhase::Resolving {
            a.complete_resolution().unwrap();
            b.complete_resolution().unwrap();
        }
    }

    assert_eq!(a.board(), b.board());
    assert_eq!(a.score(), b.score());
}

/// Reset gives a fresh settled board and zeroed session state, and the
/// continued RNG means a different layout.
#[test]
fn test_reset_starts_over() {
    let mut controller = BoardController::new(BoardConfig::default().with_seed(42));
    let opening = controller.board().clone();

    controller.select_or_swap(Pos::new(0, 0)).unwrap();
    controller.reset();

    assert_eq!(controller.score(), 0);
    assert_eq!(controller.selected(), None);
    assert!(detect(controller.board()).is_empty());
    assert_ne!(controller.board(), &opening);
}

/// Snapshots serialize for out-of-process renderers.
#[test]
fn test_snapshot_round_trip() {
    let controller = session();
    let snapshot = controller.snapshot();

    assert_eq!(snapshot.tiles.len(), 36);

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: rust_match3::board::BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, back);
}

/// The with_board constructor refuses a board that still has matches.
#[test]
fn test_unsettled_board_rejected() {
    let unsettled = Board::from_rows(&[
        vec![0, 0, 0],
        vec![1, 2, 1],
        vec![2, 1, 2],
    ]);
    assert_eq!(
        BoardController::with_board(unsettled, 1).unwrap_err(),
        EngineError::UnsettledBoard
    );
}
