//! Catalog of bundled starting figures.
//!
//! The figure files live in `figures/` at the crate root and are embedded at
//! build time, so the binary does not depend on its working directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SeedError;
use crate::compute::{Grid, GridError};

/// A named predefined pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Figure {
    /// A single glider travelling diagonally.
    Glider,
    /// Two lightweight spaceships travelling horizontally.
    Spaceships,
    /// A full-width line that breaks into waves.
    Wave,
}

impl Figure {
    /// Every bundled figure.
    pub const ALL: [Figure; 3] = [Figure::Glider, Figure::Spaceships, Figure::Wave];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Figure::Glider => "glider",
            Figure::Spaceships => "spaceships",
            Figure::Wave => "wave",
        }
    }

    /// Bundled file the figure is read from.
    pub fn file_name(self) -> &'static str {
        match self {
            Figure::Glider => "glider.txt",
            Figure::Spaceships => "spaceships.txt",
            Figure::Wave => "wave.txt",
        }
    }

    /// Text contents of the bundled file.
    pub fn source(self) -> &'static str {
        match self {
            Figure::Glider => include_str!("../../figures/glider.txt"),
            Figure::Spaceships => include_str!("../../figures/spaceships.txt"),
            Figure::Wave => include_str!("../../figures/wave.txt"),
        }
    }

    /// Parse the bundled file into a grid.
    pub fn load(self) -> Result<Grid, GridError> {
        log::debug!("Loading bundled figure {}", self.file_name());
        Grid::parse(self.source())
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Figure {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Figure::ALL
            .into_iter()
            .find(|figure| figure.name() == s)
            .ok_or_else(|| SeedError::UnknownFigure(s.to_string()))
    }
}
