//! Compute module - grid state and the Game of Life transition.

mod grid;
mod propagator;
mod rule;

pub use grid::*;
pub use propagator::*;
pub use rule::*;
