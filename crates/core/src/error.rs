use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside `[0, height) x [0, width)`.
    OutOfBounds { row: usize, col: usize, height: usize, width: usize },
    /// Zero-sized grid, or a size above the configured maximum.
    InvalidDimensions { height: usize, width: usize },
    /// Symbol outside `0..=MAX_SYMBOL`.
    InvalidSymbol { symbol: u8 },
    /// Row length disagrees with the grid width.
    RaggedRow { row: usize, expected: usize, found: usize },
    /// Row data with no rows at all.
    EmptyGrid,
    /// Copy or paste with nothing selected / nothing on the clipboard.
    EmptyPasteSelection,
    /// Paste target selection covers more than one cell.
    MultiCellPasteAnchor { count: usize },
    /// Size string that is not `HxW`.
    InvalidSize(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { row, col, height, width } => {
                write!(f, "cell ({row}, {col}) is outside the {height}x{width} grid")
            }
            Self::InvalidDimensions { height, width } => {
                write!(f, "invalid grid dimensions {height}x{width}")
            }
            Self::InvalidSymbol { symbol } => write!(f, "invalid symbol: {symbol}"),
            Self::RaggedRow { row, expected, found } => {
                write!(f, "row {row} has {found} cell(s), expected {expected}")
            }
            Self::EmptyGrid => write!(f, "grid has no rows"),
            Self::EmptyPasteSelection => write!(f, "no cells to paste"),
            Self::MultiCellPasteAnchor { count } => {
                write!(f, "paste target must be a single cell, {count} selected")
            }
            Self::InvalidSize(input) => write!(f, "cannot parse grid size '{input}'"),
        }
    }
}

impl std::error::Error for GridError {}
