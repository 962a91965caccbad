//! Toroidal Life - Conway's Game of Life on a wraparound grid.
//!
//! The board's edges wrap to the opposite edge, so every cell has a full
//! Moore neighborhood. Generations follow the standard B3/S23 rule and are
//! computed synchronously: each new generation is a fresh grid derived from
//! a frozen copy of the previous one.
//!
//! # Architecture
//!
//! - `compute`: Grid state, the cell rule and the propagator
//! - `schema`: Configuration, bundled figures and initial states
//! - `animation`: The render/step/pause loop and frame sinks
//!
//! # Example
//!
//! ```rust,no_run
//! use toroidal_life::{
//!     compute::{CpuPropagator, SimulationStats},
//!     schema::InitialState,
//! };
//!
//! let initial = InitialState::Figure { name: "glider".into() }
//!     .generate()
//!     .expect("bundled figure");
//!
//! let propagator = CpuPropagator::new();
//! let grid = propagator.run(&initial, 100);
//!
//! let stats = SimulationStats::from_grid(&grid, 100);
//! println!("Population after 100 generations: {}", stats.population);
//! ```

pub mod animation;
pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use animation::{AnimationDriver, FrameSink};
pub use compute::{CpuPropagator, Grid, GridError, SimulationStats};
pub use schema::{Figure, InitialState, SeedError, SimulationConfig};
