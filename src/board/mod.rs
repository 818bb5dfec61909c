//! The board model: grid storage and snapshots.
//!
//! Pure state with read/mutate primitives; the rules components decide what
//! mutations are legal and when they happen.

pub mod grid;
pub mod snapshot;

pub use grid::Board;
pub use snapshot::BoardSnapshot;
