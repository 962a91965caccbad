//! Grid state for the Game of Life.
//!
//! A [`Grid`] is one generation: a rectangular, non-empty array of binary
//! cells stored row-major. Construction validates the shape, so every `Grid`
//! that exists is safe to hand to the propagator.

use std::fmt;

use rand::Rng;

/// Cell value for a dead cell.
pub const DEAD: u8 = 0;
/// Cell value for a living cell.
pub const ALIVE: u8 = 1;

/// Grid construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid size must be positive, got {0}")]
    InvalidDimension(i64),
    #[error("Grid has no cells")]
    EmptyGrid,
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("Grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
}

/// Cell count of a `width` x `height` grid, rejecting overflow.
fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })
}

/// One generation of a toroidal Game of Life board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cells indexed as [row * width + col].
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from nested rows, validating shape and cell values.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RaggedGrid {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            if let Some((col, &value)) = values.iter().enumerate().find(|&(_, &v)| v > ALIVE) {
                return Err(GridError::InvalidCell { row, col, value });
            }
            cells.extend(values);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse the plain-text grid format.
    ///
    /// Each line is one row and every ASCII digit on it is one cell, in
    /// reading order. Other characters are separators and are skipped. Lines
    /// without any digit (blank lines, the trailing newline) produce no row.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<u8>> = text
            .lines()
            .map(|line| {
                line.chars()
                    .filter_map(|c| c.to_digit(10))
                    .map(|d| d as u8)
                    .collect::<Vec<u8>>()
            })
            .filter(|row| !row.is_empty())
            .collect();

        Self::from_rows(rows)
    }

    /// Square grid where each cell is alive with probability 1/2.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidDimension(0));
        }

        let cells = (0..cell_count(size, size)?)
            .map(|_| if rng.gen_bool(0.5) { ALIVE } else { DEAD })
            .collect();

        Ok(Self {
            cells,
            width: size,
            height: size,
        })
    }

    /// Grid of the given shape with every cell dead.
    pub fn dead(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            cells: vec![DEAD; cell_count(width, height)?],
            width,
            height,
        })
    }

    /// Wrap an already validated cell buffer of the same shape as `self`.
    pub(crate) fn with_cells(&self, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            cells,
            width: self.width,
            height: self.height,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Cell value at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.width + col]
    }

    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == ALIVE
    }

    /// Sum of the 8 Moore neighbors of (row, col), wrapping at every edge.
    pub fn living_neighbors(&self, row: usize, col: usize) -> u8 {
        let up = (row + self.height - 1) % self.height;
        let down = (row + 1) % self.height;
        let left = (col + self.width - 1) % self.width;
        let right = (col + 1) % self.width;

        self.get(up, left)
            + self.get(up, col)
            + self.get(up, right)
            + self.get(row, left)
            + self.get(row, right)
            + self.get(down, left)
            + self.get(down, col)
            + self.get(down, right)
    }

    /// Count of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }

    /// Copy out nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }
}

/// Writes the same text format [`Grid::parse`] reads.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
