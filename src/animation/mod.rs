//! Animation of successive generations.
//!
//! The driver owns the loop (render, step, pause) and knows nothing about
//! displays; anything implementing [`FrameSink`] can receive frames:
//!
//! - [`TerminalSink`]: text frames with ANSI screen clearing
//! - [`StatsSink`]: headless, logs population per generation

mod driver;
mod sink;

pub use driver::AnimationDriver;
pub use sink::{FrameSink, StatsSink, TerminalSink};
