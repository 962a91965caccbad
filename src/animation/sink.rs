//! Frame sinks that display generations.

use std::io::{self, Write};

use crate::compute::{ALIVE, Grid, SimulationStats};
use crate::schema::RenderConfig;

/// ANSI escape: clear screen and move cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Receives each generation produced by the animation driver.
pub trait FrameSink {
    /// Display one generation.
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()>;
}

/// Draws frames as text to a terminal or any other writer.
pub struct TerminalSink<W: Write> {
    writer: W,
    config: RenderConfig,
    /// Reused line buffer for one frame.
    frame: String,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(writer: W, config: RenderConfig) -> Self {
        Self {
            writer,
            config,
            frame: String::new(),
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        self.frame.clear();
        if self.config.clear_screen {
            self.frame.push_str(CLEAR_SCREEN);
        }

        let (alive, dead) = (self.config.alive, self.config.dead);
        for row in grid.rows() {
            self.frame
                .extend(row.iter().map(|&cell| if cell == ALIVE { alive } else { dead }));
            self.frame.push('\n');
        }

        let stats = SimulationStats::from_grid(grid, generation);
        self.frame.push_str(&format!(
            "generation {}  population {}\n",
            stats.generation, stats.population
        ));

        self.writer.write_all(self.frame.as_bytes())?;
        self.writer.flush()
    }
}

/// Headless sink that logs statistics instead of drawing.
#[derive(Debug, Default)]
pub struct StatsSink {
    last: Option<SimulationStats>,
}

impl StatsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent frame.
    pub fn last(&self) -> Option<&SimulationStats> {
        self.last.as_ref()
    }
}

impl FrameSink for StatsSink {
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        let stats = SimulationStats::from_grid(grid, generation);
        log::info!(
            "Generation {}: population={}, density={:.4}",
            stats.generation,
            stats.population,
            stats.density
        );
        self.last = Some(stats);
        Ok(())
    }
}
