//! CPU Propagator - computes successive Game of Life generations.
//!
//! Every call reads only from the frozen input generation and writes into a
//! freshly allocated output, so cells can be computed in any order (or in
//! parallel) with identical results.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Grid, next_cell};

/// Game of Life transition engine on a toroidal grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuPropagator {
    parallel: bool,
}

impl CpuPropagator {
    /// Sequential propagator, row-major order.
    pub fn new() -> Self {
        Self { parallel: false }
    }

    /// Propagator that computes rows in parallel with rayon.
    pub fn parallel() -> Self {
        Self { parallel: true }
    }

    /// Whether rows are computed in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Compute the next generation. The input is left untouched.
    pub fn next(&self, grid: &Grid) -> Grid {
        let width = grid.width();
        let mut cells = grid.cells().to_vec();

        if self.parallel {
            cells
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| step_row(grid, row, out));
        } else {
            for (row, out) in cells.chunks_mut(width).enumerate() {
                step_row(grid, row, out);
            }
        }

        grid.with_cells(cells)
    }

    /// Apply [`CpuPropagator::next`] `steps` times and return the result.
    pub fn run(&self, grid: &Grid, steps: u64) -> Grid {
        let mut current = grid.clone();
        for _ in 0..steps {
            current = self.next(&current);
        }
        current
    }
}

/// Fill one output row from the frozen input grid.
fn step_row(grid: &Grid, row: usize, out: &mut [u8]) {
    for (col, cell) in out.iter_mut().enumerate() {
        *cell = next_cell(grid.get(row, col), grid.living_neighbors(row, col));
    }
}

/// Simulation statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub generation: u64,
    pub width: usize,
    pub height: usize,
    pub population: usize,
    /// Fraction of living cells in [0, 1].
    pub density: f32,
}

impl SimulationStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid, generation: u64) -> Self {
        let population = grid.population();
        let total = grid.width() * grid.height();

        Self {
            generation,
            width: grid.width(),
            height: grid.height(),
            population,
            density: population as f32 / total as f32,
        }
    }
}
