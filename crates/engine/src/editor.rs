//! The output-grid editor.
//!
//! `GridEditEngine` is the only mutation surface over the current output
//! grid. Every operation either changes the grid and pushes exactly one
//! `ChangeRecord`, or is a no-op that leaves grid and history untouched.
//! Renderers re-read `grid()` after each call.

use taskgrid_config::EditorSettings;
use taskgrid_core::{Clipboard, CopiedCell, Grid, GridError, GridSize, Selection, Symbol};

use crate::change::{CellDiff, ChangeKind, ChangeRecord, GridSwap};
use crate::flood_fill::flood_fill;
use crate::history::HistoryLog;

#[derive(Debug, Clone)]
pub struct GridEditEngine {
    grid: Grid,
    history: HistoryLog,
    default_size: GridSize,
    max_dimension: usize,
}

impl Default for GridEditEngine {
    fn default() -> Self {
        Self::with_settings(&EditorSettings::default())
    }
}

impl GridEditEngine {
    /// 3x3 background grid, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &EditorSettings) -> Self {
        let default_size = GridSize::new(settings.default_height.max(1), settings.default_width.max(1));
        Self {
            grid: Grid::blank(default_size),
            history: HistoryLog::with_limit(settings.history_limit),
            default_size,
            max_dimension: settings.max_dimension.max(1),
        }
    }

    /// Start from an existing grid with empty history.
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid, ..Self::default() }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn default_size(&self) -> GridSize {
        self.default_size
    }

    // =========================================================================
    // Cell edits
    // =========================================================================

    /// Set one cell. Returns `false` (nothing recorded) if it already holds `symbol`.
    pub fn paint_cell(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<bool, GridError> {
        let old = self.grid.get(row, col)?;
        if old == symbol {
            log::trace!("paint ({row}, {col}): already {symbol}");
            return Ok(false);
        }
        self.grid.set(row, col, symbol)?;
        self.record(ChangeRecord::CellEdit(CellDiff::single(row, col, old, symbol)));
        Ok(true)
    }

    /// Fill the 4-connected region at `(row, col)`, recorded as one multi-cell edit.
    pub fn flood_fill_at(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<bool, GridError> {
        if self.grid.get(row, col)? == symbol {
            log::trace!("flood fill ({row}, {col}): region already {symbol}");
            return Ok(false);
        }
        let before = self.grid.clone();
        flood_fill(&mut self.grid, row, col, symbol)?;
        Ok(self.record_diff(&before, ChangeRecord::CellEdit))
    }

    /// Paint every selected cell that lies on the grid with `symbol`.
    pub fn fill_selection(&mut self, selection: &Selection, symbol: Symbol) -> Result<bool, GridError> {
        let targets: Vec<(usize, usize)> = selection
            .cells()
            .into_iter()
            .filter(|&(r, c)| self.grid.contains(r, c))
            .collect();
        if targets.is_empty() {
            return Ok(false);
        }

        let mut after = self.grid.clone();
        for (r, c) in targets {
            after.set(r, c, symbol)?;
        }
        let before = std::mem::replace(&mut self.grid, after);
        Ok(self.record_diff(&before, ChangeRecord::CellEdit))
    }

    /// Paste `cells` with their top-left corner at the anchor. Fragments that
    /// land outside the grid are dropped.
    pub fn paste_at(&mut self, anchor_row: usize, anchor_col: usize, cells: &[CopiedCell]) -> Result<bool, GridError> {
        let min_row = cells.iter().map(|c| c.row).min().ok_or(GridError::EmptyPasteSelection)?;
        let min_col = cells.iter().map(|c| c.col).min().ok_or(GridError::EmptyPasteSelection)?;

        let mut after = self.grid.clone();
        for cell in cells {
            let target = anchor_row
                .checked_add(cell.row - min_row)
                .zip(anchor_col.checked_add(cell.col - min_col));
            if let Some((row, col)) = target.filter(|&(r, c)| after.contains(r, c)) {
                after.set(row, col, cell.symbol)?;
            }
        }
        let before = std::mem::replace(&mut self.grid, after);
        Ok(self.record_diff(&before, ChangeRecord::Paste))
    }

    /// Paste the clipboard at the selection's single anchor cell.
    pub fn paste_selection(&mut self, clipboard: &Clipboard, target: &Selection) -> Result<bool, GridError> {
        if clipboard.is_empty() {
            return Err(GridError::EmptyPasteSelection);
        }
        let (row, col) = target.paste_anchor()?;
        self.paste_at(row, col, clipboard.cells())
    }

    // =========================================================================
    // Structural changes
    // =========================================================================

    /// Resize, keeping the overlapping top-left rectangle.
    pub fn resize(&mut self, height: usize, width: usize) -> Result<(), GridError> {
        if height == 0 || width == 0 || height > self.max_dimension || width > self.max_dimension {
            return Err(GridError::InvalidDimensions { height, width });
        }
        let resized = Grid::with_cells(height, width, self.grid.rows())?;
        let previous = std::mem::replace(&mut self.grid, resized);
        self.record(ChangeRecord::Resize { previous, size: GridSize::new(height, width) });
        Ok(())
    }

    /// Replace the grid with a blank one of the default size.
    pub fn reset(&mut self) {
        let next = Grid::blank(self.default_size);
        let previous = std::mem::replace(&mut self.grid, next.clone());
        self.record(ChangeRecord::Reset(GridSwap { previous, next }));
    }

    /// Replace the grid with a copy of `source` (usually the test input).
    pub fn copy_from_source(&mut self, source: &Grid) {
        let previous = std::mem::replace(&mut self.grid, source.clone());
        self.record(ChangeRecord::CopyFromSource(GridSwap { previous, next: source.clone() }));
    }

    /// Blank default-size grid and empty history, without recording anything.
    pub fn reset_task(&mut self) {
        self.grid = Grid::blank(self.default_size);
        self.history.clear();
        log::debug!("history cleared for new task");
    }

    // =========================================================================
    // Undo / redo
    // =========================================================================

    /// Revert the last applied change. `Ok(None)` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<Option<ChangeKind>, GridError> {
        let Some(record) = self.history.peek_undo() else {
            return Ok(None);
        };
        record.apply_undo(&mut self.grid)?;
        let kind = record.kind();
        self.history.undo();
        log::debug!("undo {kind} (cursor {:?})", self.history.cursor());
        Ok(Some(kind))
    }

    /// Re-apply the next undone change. `Ok(None)` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<Option<ChangeKind>, GridError> {
        let Some(record) = self.history.peek_redo() else {
            return Ok(None);
        };
        record.apply_redo(&mut self.grid)?;
        let kind = record.kind();
        self.history.redo();
        log::debug!("redo {kind} (cursor {:?})", self.history.cursor());
        Ok(Some(kind))
    }

    fn record(&mut self, record: ChangeRecord) {
        log::debug!("record: {}", record.description());
        self.history.push(record);
    }

    /// Diff `before` against the current grid and record it if anything changed.
    fn record_diff(&mut self, before: &Grid, make: fn(CellDiff) -> ChangeRecord) -> bool {
        let diff = CellDiff::between(before, &self.grid);
        if diff.is_empty() {
            log::trace!("diff against {}x{} grid: no cells changed", before.height(), before.width());
            return false;
        }
        self.record(make(diff));
        true
    }
}
