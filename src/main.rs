//! Toroidal Life CLI - animate Conway's Game of Life in the terminal.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use toroidal_life::{
    animation::{AnimationDriver, StatsSink, TerminalSink},
    compute::{Grid, SimulationStats},
    schema::{ConfigError, InitialState, SeedError, SimulationConfig},
};

/// Visualization for Conway's Game of Life
#[derive(Parser, Debug)]
#[command(name = "toroidal-life", version)]
#[command(group(clap::ArgGroup::new("source").args(["random", "input", "object"])))]
struct Args {
    /// Use a random initial state of the given size
    #[arg(short, long, allow_negative_numbers = true)]
    random: Option<i64>,

    /// Read the initial state from a file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use a predefined object (glider, spaceships, wave)
    #[arg(short, long)]
    object: Option<String>,

    /// Load simulation settings from a JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print an example configuration and exit
    #[arg(long)]
    example: bool,

    /// Number of generations to animate
    #[arg(short, long)]
    generations: Option<u64>,

    /// Pause between frames in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Seed for random initial states
    #[arg(long)]
    seed: Option<u64>,

    /// Compute rows in parallel
    #[arg(long)]
    parallel: bool,

    /// Log statistics instead of drawing frames
    #[arg(long)]
    headless: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Error reading config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error parsing config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error("Display error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if args.example {
        print_example_config()?;
        return Ok(());
    }

    let config = load_config(&args)?;
    let initial = initial_grid(&args, &config)?;
    let initial_stats = SimulationStats::from_grid(&initial, 0);

    let driver = AnimationDriver::from_config(&config);
    let last = if args.headless {
        driver.run(initial, &mut StatsSink::new())?
    } else {
        let mut sink = TerminalSink::new(io::stdout().lock(), config.render.clone());
        driver.run(initial, &mut sink)?
    };

    let final_stats = SimulationStats::from_grid(&last, driver.generations());
    log::info!(
        "Finished {} generations: population {} -> {}",
        final_stats.generation,
        initial_stats.population,
        final_stats.population
    );
    Ok(())
}

/// Load the config file if given, then apply command line overrides.
fn load_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&text)?
        }
        None => SimulationConfig::default(),
    };

    if let Some(generations) = args.generations {
        config.generations = generations;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.frame_interval_ms = interval_ms;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.parallel {
        config.parallel = true;
    }

    config.validate()?;
    Ok(config)
}

/// Build the first generation from the selected source.
///
/// An unknown figure name falls back to the default random grid.
fn initial_grid(args: &Args, config: &SimulationConfig) -> Result<Grid, CliError> {
    let fallback = config.fallback_state();

    let state = if let Some(size) = args.random {
        log::info!("Generating random grid with size {}", size);
        InitialState::Random {
            size,
            seed: config.seed,
        }
    } else if let Some(path) = &args.input {
        log::info!("Generating grid from file {}", path.display());
        InitialState::File { path: path.clone() }
    } else if let Some(name) = &args.object {
        log::info!("Generating {}", name);
        InitialState::Figure { name: name.clone() }
    } else if let Some(state) = &config.initial {
        state.clone()
    } else {
        log::info!(
            "No initial state specified, generating a random {0}x{0} grid",
            config.default_size
        );
        fallback.clone()
    };

    Ok(state.generate_or_fallback(&fallback)?)
}

fn print_example_config() -> Result<(), serde_json::Error> {
    let config = SimulationConfig {
        initial: Some(InitialState::Figure {
            name: "glider".to_string(),
        }),
        ..Default::default()
    };

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
