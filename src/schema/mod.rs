//! Schema module - Configuration and initial states for Game of Life runs.

mod config;
mod figure;
mod seed;

pub use config::*;
pub use figure::*;
pub use seed::*;
