//! Cascade resolution: the removal/gravity/refill loop and its event log.

pub mod events;
pub mod resolver;

pub use events::{BoardEvent, ResolutionLog};
pub use resolver::CascadeResolver;
