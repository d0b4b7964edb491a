//! Cell selection and the copy/paste clipboard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::{Grid, Symbol};

/// Inclusive rectangle of cells, stored with start <= end on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl Range {
    /// Rectangle spanned by two corner cells given in any order.
    pub fn new(r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        Self {
            start_row: r1.min(r2),
            start_col: c1.min(c2),
            end_row: r1.max(r2),
            end_col: c1.max(c2),
        }
    }

    pub fn single(row: usize, col: usize) -> Self {
        Self::new(row, col, row, col)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.start_row..=self.end_row).contains(&row) && (self.start_col..=self.end_col).contains(&col)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (start_col, end_col) = (self.start_col, self.end_col);
        (self.start_row..=self.end_row).flat_map(move |r| (start_col..=end_col).map(move |c| (r, c)))
    }
}

/// Selected ranges plus the anchor that `extend_to` stretches from.
/// Empty when nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ranges: Vec<Range>,
    anchor: (usize, usize),
}

impl Selection {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            ranges: vec![Range::single(row, col)],
            anchor: (row, col),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.ranges.iter().any(|r| r.contains(row, col))
    }

    /// Distinct selected cells, row-major. Overlapping ranges count once.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let mut cells: Vec<(usize, usize)> = self.ranges.iter().flat_map(|r| r.cells()).collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells().len()
    }

    /// Click: select just this cell.
    pub fn select_cell(&mut self, row: usize, col: usize) {
        *self = Self::new(row, col);
    }

    /// Drag: the last range becomes anchor..(row, col).
    pub fn extend_to(&mut self, row: usize, col: usize) {
        let (anchor_row, anchor_col) = self.anchor;
        let range = Range::new(anchor_row, anchor_col, row, col);
        match self.ranges.last_mut() {
            Some(last) => *last = range,
            None => self.ranges.push(range),
        }
    }

    /// Ctrl-click: add a cell and move the anchor to it.
    pub fn add_cell(&mut self, row: usize, col: usize) {
        self.ranges.push(Range::single(row, col));
        self.anchor = (row, col);
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// The single cell a paste is anchored at.
    pub fn paste_anchor(&self) -> Result<(usize, usize), GridError> {
        match self.cells().as_slice() {
            [] => Err(GridError::EmptyPasteSelection),
            [cell] => Ok(*cell),
            cells => Err(GridError::MultiCellPasteAnchor { count: cells.len() }),
        }
    }
}

/// One copied cell: its source coordinate and symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopiedCell {
    pub row: usize,
    pub col: usize,
    pub symbol: Symbol,
}

impl CopiedCell {
    pub fn new(row: usize, col: usize, symbol: Symbol) -> Self {
        Self { row, col, symbol }
    }
}

/// Cells captured by a copy, kept until the next copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    cells: Vec<CopiedCell>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the selected cells of `grid`. Selected coordinates outside the
    /// grid are ignored; the clipboard is left untouched on error.
    pub fn copy(&mut self, grid: &Grid, selection: &Selection) -> Result<usize, GridError> {
        let captured: BTreeMap<(usize, usize), Symbol> = selection
            .cells()
            .into_iter()
            .filter_map(|(r, c)| grid.get(r, c).ok().map(|s| ((r, c), s)))
            .collect();
        if captured.is_empty() {
            return Err(GridError::EmptyPasteSelection);
        }
        self.cells = captured
            .into_iter()
            .map(|((row, col), symbol)| CopiedCell::new(row, col, symbol))
            .collect();
        Ok(self.cells.len())
    }

    pub fn cells(&self) -> &[CopiedCell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_single() {
        let r = Range::single(5, 3);
        assert!(r.contains(5, 3));
        assert!(!r.contains(5, 4));
        assert_eq!(r.cells().collect::<Vec<_>>(), vec![(5, 3)]);
    }

    #[test]
    fn test_range_normalizes() {
        let r = Range::new(5, 5, 1, 1);
        assert_eq!((r.start_row, r.start_col, r.end_row, r.end_col), (1, 1, 5, 5));
        assert_eq!(r.cells().count(), 25);
    }

    #[test]
    fn test_selection_clear() {
        let mut sel = Selection::new(1, 1);
        sel.extend_to(2, 2);
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.paste_anchor(), Err(GridError::EmptyPasteSelection));
    }

    #[test]
    fn test_selection_extend() {
        let mut sel = Selection::new(2, 2);
        sel.extend_to(4, 3);

        assert_eq!(sel.anchor(), (2, 2));
        assert!(sel.contains(3, 3));
        assert!(!sel.contains(1, 1));
        assert_eq!(sel.cell_count(), 6);
    }

    #[test]
    fn test_overlapping_ranges_count_once() {
        let mut sel = Selection::new(0, 0);
        sel.extend_to(1, 1);
        sel.add_cell(1, 1);
        assert_eq!(sel.cell_count(), 4);
    }

    #[test]
    fn test_paste_anchor() {
        assert_eq!(Selection::empty().paste_anchor(), Err(GridError::EmptyPasteSelection));
        assert_eq!(Selection::new(2, 1).paste_anchor(), Ok((2, 1)));

        let mut sel = Selection::new(0, 0);
        sel.add_cell(0, 1);
        assert_eq!(sel.paste_anchor(), Err(GridError::MultiCellPasteAnchor { count: 2 }));
    }

    #[test]
    fn test_clipboard_copy() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let mut sel = Selection::new(0, 1);
        sel.extend_to(1, 1);

        let mut clipboard = Clipboard::new();
        assert_eq!(clipboard.copy(&grid, &sel), Ok(2));
        assert_eq!(clipboard.len(), 2);
        assert_eq!(clipboard.cells(), &[CopiedCell::new(0, 1, 2), CopiedCell::new(1, 1, 4)]);

        clipboard.clear();
        assert!(clipboard.is_empty());
        assert_eq!(clipboard.len(), 0);
    }

    #[test]
    fn test_clipboard_copy_ignores_offgrid_and_keeps_previous_on_error() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let mut clipboard = Clipboard::new();
        clipboard.copy(&grid, &Selection::new(0, 0)).unwrap();

        assert_eq!(clipboard.copy(&grid, &Selection::new(5, 5)), Err(GridError::EmptyPasteSelection));
        assert_eq!(clipboard.copy(&grid, &Selection::empty()), Err(GridError::EmptyPasteSelection));
        assert_eq!(clipboard.cells(), &[CopiedCell::new(0, 0, 1)]);
    }
}
