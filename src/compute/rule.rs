//! The B3/S23 cell rule.
//!
//! A dead cell is born with exactly 3 living neighbors; a living cell
//! survives with 2 or 3.

use super::{ALIVE, DEAD};

/// Neighbor count that brings a dead cell to life.
pub const BIRTH: u8 = 3;
/// Fewest neighbors a living cell needs to survive.
pub const SURVIVAL_MIN: u8 = 2;
/// Most neighbors a living cell can have and survive.
pub const SURVIVAL_MAX: u8 = 3;

/// Compute a cell's next value from its current value and living neighbors.
#[inline]
pub fn next_cell(current: u8, living_neighbors: u8) -> u8 {
    match (current, living_neighbors) {
        // resurrection
        (DEAD, BIRTH) => ALIVE,
        // solitude
        (ALIVE, n) if n < SURVIVAL_MIN => DEAD,
        // overpopulation
        (ALIVE, n) if n > SURVIVAL_MAX => DEAD,
        (value, _) => value,
    }
}
