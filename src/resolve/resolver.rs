//! The cascade resolver.
//!
//! One resolution cycle runs the loop `Detecting -> Removing -> Falling ->
//! Refilling -> Detecting` until a detection pass finds nothing, then the
//! board is settled. Chain reactions - a fall or refill producing a fresh
//! run - are handled by the loop itself; the caller sees a single ordered
//! event log for the whole cascade.
//!
//! The resolver is total: removals are bounded by board size and the loop
//! exits on the first empty detection, so `resolve` always terminates. It
//! never waits on a clock; pacing the reveal is the frontend's concern.

use log::{debug, trace};

use crate::board::Board;
use crate::core::BoardRng;
use crate::rules::detector::{detect, Detection};

use super::events::{BoardEvent, ResolutionLog};

/// Runs full resolution cycles over a board.
pub struct CascadeResolver;

impl CascadeResolver {
    /// Resolve the board to a settled state, consuming refill randomness
    /// from `rng`.
    ///
    /// Resolving an already-settled board is a no-op: empty log, zero
    /// score delta.
    pub fn resolve(board: &mut Board, rng: &mut BoardRng) -> ResolutionLog {
        let mut log = ResolutionLog::new();

        loop {
            let detection = detect(board);
            if detection.is_empty() {
                break;
            }

            log.iterations += 1;
            trace!(
                "iteration {}: {} removals, {} specials",
                log.iterations,
                detection.removals.len(),
                detection.specials.len()
            );

            Self::remove_matches(board, &detection, &mut log);
            Self::apply_gravity(board, &mut log);
            Self::refill(board, rng, &mut log);
        }

        if !log.is_empty() {
            debug!(
                "cascade settled after {} iteration(s): {} removed, {} spawned, +{} score",
                log.iterations,
                log.removed_count(),
                log.spawned_count(),
                log.score_delta
            );
        }

        log
    }

    /// Clear every matched cell, then apply special markings in the same
    /// step. Score counts one point per removed tile.
    fn remove_matches(board: &mut Board, detection: &Detection, log: &mut ResolutionLog) {
        for tile in &detection.removals {
            board.take_at(tile.row, tile.col);
            log.events.push(BoardEvent::TileRemoved { tile: *tile });
            log.score_delta += 1;
        }

        for &(survivor, kind) in &detection.specials {
            if let Some(marked) = board.mark_special_at(survivor.row, survivor.col, kind) {
                log.events.push(BoardEvent::SpecialCreated { tile: marked, kind });
            }
        }
    }

    /// Compact each column downward, preserving relative vertical order.
    /// Tiles never pass each other; every closed gap emits one move event.
    fn apply_gravity(board: &mut Board, log: &mut ResolutionLog) {
        let (rows, cols) = board.dimensions();

        for col in 0..cols {
            let mut write = rows;
            for read in (0..rows).rev() {
                let Some(tile) = *board.cell(read, col) else {
                    continue;
                };
                write -= 1;
                if write != read {
                    board.take_at(read, col);
                    board.put_at(write, col, tile);

                    let mut landed = tile;
                    landed.row = write;
                    log.events.push(BoardEvent::TileMoved {
                        tile: landed,
                        from_row: read,
                        to_row: write,
                    });
                }
            }
        }
    }

    /// Fill the vacancies left at the top of each column, bottom-to-top,
    /// with fresh uniformly random tiles.
    fn refill(board: &mut Board, rng: &mut BoardRng, log: &mut ResolutionLog) {
        let (rows, cols) = board.dimensions();
        let num_types = board.num_types();

        for col in 0..cols {
            for row in (0..rows).rev() {
                if board.cell(row, col).is_none() {
                    let kind = rng.next_kind(num_types);
                    let tile = board.spawn(kind, row, col);
                    log.events.push(BoardEvent::TileSpawned { tile });
                }
            }
        }
    }
}
