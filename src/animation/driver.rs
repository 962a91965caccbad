//! Animation driver: render, step, pause, repeat.

use std::io;
use std::thread;
use std::time::Duration;

use super::FrameSink;
use crate::compute::{CpuPropagator, Grid};
use crate::schema::SimulationConfig;

/// Runs a fixed number of generations, handing each to a [`FrameSink`].
///
/// Usage:
/// ```ignore
/// let driver = AnimationDriver::from_config(&config);
/// let mut sink = TerminalSink::new(std::io::stdout(), config.render.clone());
/// let last = driver.run(initial, &mut sink)?;
/// ```
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    propagator: CpuPropagator,
    generations: u64,
    interval: Duration,
}

impl AnimationDriver {
    pub fn new(propagator: CpuPropagator, generations: u64, interval: Duration) -> Self {
        Self {
            propagator,
            generations,
            interval,
        }
    }

    /// Build a driver from generation count, frame interval and parallelism.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let propagator = if config.parallel {
            CpuPropagator::parallel()
        } else {
            CpuPropagator::new()
        };
        Self::new(propagator, config.generations, config.frame_interval())
    }

    /// Number of generations computed after the initial frame.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Render the initial grid, then compute and render each generation,
    /// pausing for the frame interval between consecutive frames.
    ///
    /// Returns the last generation.
    pub fn run<S: FrameSink + ?Sized>(&self, initial: Grid, sink: &mut S) -> io::Result<Grid> {
        log::debug!(
            "Animating {}x{} grid for {} generations",
            initial.width(),
            initial.height(),
            self.generations
        );

        let mut current = initial;
        sink.render(&current, 0)?;

        // Pause between frames only, never after the last one.
        for generation in 1..=self.generations {
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }

            current = self.propagator.next(&current);
            sink.render(&current, generation)?;
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    /// Keeps every frame it receives.
    #[derive(Default)]
    struct CollectingSink {
        frames: Vec<(u64, Grid)>,
    }

    impl FrameSink for CollectingSink {
        fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
            self.frames.push((generation, grid.clone()));
            Ok(())
        }
    }

    /// Fails on a chosen generation.
    struct FailingSink {
        fail_at: u64,
    }

    impl FrameSink for FailingSink {
        fn render(&mut self, _grid: &Grid, generation: u64) -> io::Result<()> {
            if generation == self.fail_at {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "display closed"));
            }
            Ok(())
        }
    }

    /// Records when each frame arrives.
    #[derive(Default)]
    struct TimingSink {
        rendered_at: Vec<Instant>,
    }

    impl FrameSink for TimingSink {
        fn render(&mut self, _grid: &Grid, _generation: u64) -> io::Result<()> {
            self.rendered_at.push(Instant::now());
            Ok(())
        }
    }

    fn blinker() -> Grid {
        Grid::parse("00000\n00000\n01110\n00000\n00000\n").unwrap()
    }

    #[test]
    fn test_renders_initial_plus_generations() {
        let driver = AnimationDriver::new(CpuPropagator::new(), 5, Duration::ZERO);
        let mut sink = CollectingSink::default();
        let last = driver.run(blinker(), &mut sink).unwrap();

        assert_eq!(sink.frames.len(), 6);
        let generations: Vec<u64> = sink.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(sink.frames[0].1, blinker());
        assert_eq!(sink.frames[2].1, blinker());
        assert_eq!(last, sink.frames[5].1);
        assert_ne!(last, blinker());
    }

    #[test]
    fn test_zero_generations_renders_once() {
        let driver = AnimationDriver::new(CpuPropagator::new(), 0, Duration::ZERO);
        let mut sink = CollectingSink::default();
        let last = driver.run(blinker(), &mut sink).unwrap();

        assert_eq!(sink.frames.len(), 1);
        assert_eq!(last, blinker());
    }

    #[test]
    fn test_pauses_between_frames_not_after_last() {
        let interval = Duration::from_millis(150);
        let driver = AnimationDriver::new(CpuPropagator::new(), 2, interval);
        let mut sink = TimingSink::default();

        driver.run(blinker(), &mut sink).unwrap();
        let finished = Instant::now();

        assert_eq!(sink.rendered_at.len(), 3);
        for pair in sink.rendered_at.windows(2) {
            assert!(pair[1] - pair[0] >= interval);
        }
        let last = sink.rendered_at[2];
        assert!(finished - last < interval);
    }

    #[test]
    fn test_sink_error_stops_run() {
        let driver = AnimationDriver::new(CpuPropagator::new(), 10, Duration::ZERO);
        let err = driver
            .run(blinker(), &mut FailingSink { fail_at: 3 })
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_from_config() {
        let config = SimulationConfig {
            generations: 12,
            parallel: true,
            ..Default::default()
        };
        let driver = AnimationDriver::from_config(&config);
        assert_eq!(driver.generations(), 12);
        assert!(driver.propagator.is_parallel());
        assert_eq!(driver.interval, Duration::from_millis(50));
    }
}
