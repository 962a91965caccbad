//! Initial state sources for Game of Life simulations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::Figure;
use crate::compute::{Grid, GridError};

/// Errors raised while producing an initial grid.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Failed to read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unknown figure '{0}' (expected glider, spaceships or wave)")]
    UnknownFigure(String),
}

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InitialState {
    /// Square grid of independent fair coin flips.
    Random {
        /// Side length. Must be positive.
        size: i64,
        /// RNG seed (None = thread-local RNG).
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Grid parsed from a text file.
    File { path: PathBuf },
    /// One of the bundled figures, by name.
    Figure { name: String },
}

impl Default for InitialState {
    fn default() -> Self {
        InitialState::Random {
            size: 64,
            seed: None,
        }
    }
}

impl InitialState {
    /// Produce the initial grid.
    pub fn generate(&self) -> Result<Grid, SeedError> {
        match self {
            InitialState::Random { seed: Some(seed), .. } => {
                self.generate_with_rng(&mut StdRng::seed_from_u64(*seed))
            }
            _ => self.generate_with_rng(&mut thread_rng()),
        }
    }

    /// Produce the initial grid, or generate `fallback` if the figure name
    /// is unknown. Every other error is returned unchanged.
    pub fn generate_or_fallback(&self, fallback: &InitialState) -> Result<Grid, SeedError> {
        match self.generate() {
            Err(SeedError::UnknownFigure(name)) => {
                log::warn!("Unknown object '{}': using random state", name);
                fallback.generate()
            }
            result => result,
        }
    }

    /// Produce the initial grid, drawing any randomness from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, SeedError> {
        match self {
            InitialState::Random { size, .. } => {
                let side = usize::try_from(*size)
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or(GridError::InvalidDimension(*size))?;
                Ok(Grid::random(side, rng)?)
            }
            InitialState::File { path } => load_grid_file(path),
            InitialState::Figure { name } => {
                let figure: Figure = name.parse()?;
                Ok(figure.load()?)
            }
        }
    }
}

/// Read and parse a grid file.
pub fn load_grid_file(path: &Path) -> Result<Grid, SeedError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SeedError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SeedError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let grid = Grid::parse(&text)?;
    log::debug!(
        "Loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_random_with_seed_is_reproducible() {
        let state = InitialState::Random {
            size: 8,
            seed: Some(99),
        };
        let a = state.generate().unwrap();
        let b = state.generate().unwrap();
        assert_eq!(a, b);
        assert_eq!((a.width(), a.height()), (8, 8));
    }

    #[test]
    fn test_random_rejects_non_positive_size() {
        for size in [0, -1] {
            let state = InitialState::Random { size, seed: None };
            let err = state.generate().unwrap_err();
            assert!(
                matches!(err, SeedError::Grid(GridError::InvalidDimension(n)) if n == size),
                "unexpected error for size {}: {:?}",
                size,
                err
            );
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "1 0 1\n0 1 0\n1 0 1\n").unwrap();

        let state = InitialState::File {
            path: file.path().to_path_buf(),
        };
        let grid = state.generate().unwrap();
        assert_eq!(
            grid.to_rows(),
            vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 0, 1]]
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = load_grid_file(&path).unwrap_err();
        assert!(matches!(err, SeedError::FileNotFound { path: p } if p == path));
    }

    #[test]
    fn test_unreadable_file() {
        // A directory exists but cannot be read as text.
        let dir = tempdir().unwrap();
        let err = load_grid_file(dir.path()).unwrap_err();
        assert!(matches!(err, SeedError::FileUnreadable { .. }));
    }

    #[test]
    fn test_ragged_file_fails_at_load() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "1 1 1\n1 1\n").unwrap();
        let err = load_grid_file(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Grid(GridError::RaggedGrid { .. })));
    }

    #[test]
    fn test_named_figure() {
        let state = InitialState::Figure {
            name: "glider".to_string(),
        };
        assert_eq!(state.generate().unwrap(), Figure::Glider.load().unwrap());

        let unknown = InitialState::Figure {
            name: "pulsar".to_string(),
        };
        assert!(matches!(
            unknown.generate(),
            Err(SeedError::UnknownFigure(_))
        ));
    }

    #[test]
    fn test_unknown_figure_uses_fallback() {
        let fallback = InitialState::Random {
            size: 64,
            seed: Some(3),
        };
        let state = InitialState::Figure {
            name: "pulsar".to_string(),
        };

        let grid = state.generate_or_fallback(&fallback).unwrap();
        assert_eq!((grid.width(), grid.height()), (64, 64));
        assert_eq!(grid, fallback.generate().unwrap());
    }

    #[test]
    fn test_known_figure_ignores_fallback() {
        let fallback = InitialState::default();
        let state = InitialState::Figure {
            name: "glider".to_string(),
        };
        assert_eq!(
            state.generate_or_fallback(&fallback).unwrap(),
            Figure::Glider.load().unwrap()
        );
    }

    #[test]
    fn test_missing_file_not_masked_by_fallback() {
        let dir = tempdir().unwrap();
        let state = InitialState::File {
            path: dir.path().join("absent.txt"),
        };
        let err = state
            .generate_or_fallback(&InitialState::default())
            .unwrap_err();
        assert!(matches!(err, SeedError::FileNotFound { .. }));
    }

    #[test]
    fn test_serde_tagged() {
        let json = r#"{"type":"Random","size":32,"seed":5}"#;
        let state: InitialState = serde_json::from_str(json).unwrap();
        assert_eq!(
            state,
            InitialState::Random {
                size: 32,
                seed: Some(5)
            }
        );
    }
}
