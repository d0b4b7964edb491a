//! The symbol grid.
//!
//! A `Grid` is a dense `height x width` array of symbols stored row-major as
//! nested rows, which is also its interchange shape: it serializes to and
//! from a plain array of integer arrays.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A cell's colour/category. `0` is the background.
pub type Symbol = u8;

/// Largest valid symbol.
pub const MAX_SYMBOL: Symbol = 9;

/// Symbol used for newly allocated cells.
pub const BACKGROUND: Symbol = 0;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Symbol>>", into = "Vec<Vec<Symbol>>")]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Vec<Symbol>>,
}

impl Grid {
    /// Create a background-filled grid.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![vec![BACKGROUND; width]; height],
        })
    }

    /// Background-filled grid of `size`; zero sides are raised to 1.
    pub fn blank(size: GridSize) -> Self {
        let (height, width) = (size.height.max(1), size.width.max(1));
        Self {
            height,
            width,
            cells: vec![vec![BACKGROUND; width]; height],
        }
    }

    /// Create a grid of the given size, copying the overlapping top-left
    /// rectangle of `initial`. Added rows/columns are background; cells beyond
    /// the new extent are dropped.
    pub fn with_cells(height: usize, width: usize, initial: &[Vec<Symbol>]) -> Result<Self, GridError> {
        let mut grid = Self::new(height, width)?;
        for (dst, src) in grid.cells.iter_mut().zip(initial) {
            let n = width.min(src.len());
            dst[..n].copy_from_slice(&src[..n]);
        }
        Ok(grid)
    }

    /// Build a grid from row data, validating shape and symbols.
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).ok_or(GridError::EmptyGrid)?;
        Self::from_parts(height, width, rows)
    }

    /// Build a grid from explicit dimensions plus row data.
    pub fn from_parts(height: usize, width: usize, cells: Vec<Vec<Symbol>>) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { height, width });
        }
        if cells.len() != height {
            return Err(GridError::InvalidDimensions { height: cells.len(), width });
        }
        for (row, cells_in_row) in cells.iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(GridError::RaggedRow { row, expected: width, found: cells_in_row.len() });
            }
            if let Some(&symbol) = cells_in_row.iter().find(|&&s| s > MAX_SYMBOL) {
                return Err(GridError::InvalidSymbol { symbol });
            }
        }
        Ok(Self { height, width, cells })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn size(&self) -> GridSize {
        GridSize { height: self.height, width: self.width }
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.height * self.width
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Symbol, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        if symbol > MAX_SYMBOL {
            return Err(GridError::InvalidSymbol { symbol });
        }
        self.cells[row][col] = symbol;
        Ok(())
    }

    /// Row data, for rendering and serialization.
    pub fn rows(&self) -> &[Vec<Symbol>] {
        &self.cells
    }

    pub fn into_rows(self) -> Vec<Vec<Symbol>> {
        self.cells
    }

    /// Iterate `(row, col, symbol)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Symbol)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &s)| (r, c, s)))
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { row, col, height: self.height, width: self.width })
        }
    }
}

impl TryFrom<Vec<Vec<Symbol>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Symbol>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Symbol>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for symbol in row {
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

/// Grid dimensions as typed into the size box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub height: usize,
    pub width: usize,
}

impl GridSize {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl FromStr for GridSize {
    type Err = GridError;

    /// Accepts `"HxW"`, `"H W"`, `"H,W"` or a single `"N"` for a square grid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidSize(s.to_string());
        let parts: Vec<&str> = s
            .trim()
            .split(|c: char| c == 'x' || c == 'X' || c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let parse = |p: &str| p.parse::<usize>().ok().filter(|&n| n > 0);
        match parts.as_slice() {
            [n] => {
                let n = parse(n).ok_or_else(invalid)?;
                Ok(Self::new(n, n))
            }
            [h, w] => Ok(Self::new(parse(h).ok_or_else(invalid)?, parse(w).ok_or_else(invalid)?)),
            _ => Err(invalid()),
        }
    }
}
