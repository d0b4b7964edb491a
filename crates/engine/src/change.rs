//! Reversible grid mutations.
//!
//! Cell-level edits (single paint, flood fill, paste, selection fill) are
//! recorded as sparse diffs: only cells whose symbol changed are stored.
//! Structural changes store whole-grid snapshots, except `Resize`, whose
//! redo side keeps only the target size and re-derives cells from whatever
//! grid is current when it is redone.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use taskgrid_core::{Grid, GridError, GridSize, Symbol};

/// Sparse `(row, col) -> symbol` map.
pub type DiffMap = BTreeMap<(usize, usize), Symbol>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    CellEdit,
    Paste,
    Resize,
    Reset,
    CopyFromSource,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeKind::CellEdit => "edit",
            ChangeKind::Paste => "paste",
            ChangeKind::Resize => "resize",
            ChangeKind::Reset => "reset",
            ChangeKind::CopyFromSource => "copy from input",
        };
        f.write_str(name)
    }
}

/// Old and new symbols of every changed cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellDiff {
    pub undo: DiffMap,
    pub redo: DiffMap,
}

impl CellDiff {
    pub fn single(row: usize, col: usize, old: Symbol, new: Symbol) -> Self {
        Self {
            undo: DiffMap::from([((row, col), old)]),
            redo: DiffMap::from([((row, col), new)]),
        }
    }

    /// Compare two same-sized grids cell by cell.
    pub fn between(before: &Grid, after: &Grid) -> Self {
        debug_assert_eq!(before.size(), after.size());
        let mut diff = Self::default();
        for ((r, c, old), (_, _, new)) in before.iter().zip(after.iter()) {
            if old != new {
                diff.undo.insert((r, c), old);
                diff.redo.insert((r, c), new);
            }
        }
        diff
    }

    pub fn len(&self) -> usize {
        self.undo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }
}

/// Before/after snapshots for whole-grid replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSwap {
    pub previous: Grid,
    pub next: Grid,
}

/// One undoable step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRecord {
    CellEdit(CellDiff),
    Paste(CellDiff),
    Resize {
        /// Full grid before the resize.
        previous: Grid,
        /// Target size; cells are recomputed on redo.
        size: GridSize,
    },
    Reset(GridSwap),
    CopyFromSource(GridSwap),
}

impl ChangeRecord {
    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeRecord::CellEdit(_) => ChangeKind::CellEdit,
            ChangeRecord::Paste(_) => ChangeKind::Paste,
            ChangeRecord::Resize { .. } => ChangeKind::Resize,
            ChangeRecord::Reset(_) => ChangeKind::Reset,
            ChangeRecord::CopyFromSource(_) => ChangeKind::CopyFromSource,
        }
    }

    /// Short label for history panels and status lines.
    pub fn description(&self) -> String {
        match self {
            ChangeRecord::CellEdit(diff) => format!("edit {} cell(s)", diff.len()),
            ChangeRecord::Paste(diff) => format!("paste {} cell(s)", diff.len()),
            ChangeRecord::Resize { size, .. } => format!("resize to {size}"),
            ChangeRecord::Reset(swap) => format!("reset to {}", swap.next.size()),
            ChangeRecord::CopyFromSource(swap) => format!("copy from input ({})", swap.next.size()),
        }
    }

    /// Restore the state before this change. On error `grid` is untouched.
    pub fn apply_undo(&self, grid: &mut Grid) -> Result<(), GridError> {
        match self {
            ChangeRecord::CellEdit(diff) | ChangeRecord::Paste(diff) => scatter(grid, &diff.undo),
            ChangeRecord::Resize { previous, .. } => {
                *grid = previous.clone();
                Ok(())
            }
            ChangeRecord::Reset(swap) | ChangeRecord::CopyFromSource(swap) => {
                *grid = swap.previous.clone();
                Ok(())
            }
        }
    }

    /// Re-apply this change after it was undone. On error `grid` is untouched.
    pub fn apply_redo(&self, grid: &mut Grid) -> Result<(), GridError> {
        match self {
            ChangeRecord::CellEdit(diff) | ChangeRecord::Paste(diff) => scatter(grid, &diff.redo),
            ChangeRecord::Resize { size, .. } => {
                // Derived from the current grid, not a stored post-resize snapshot.
                *grid = Grid::with_cells(size.height, size.width, grid.rows())?;
                Ok(())
            }
            ChangeRecord::Reset(swap) | ChangeRecord::CopyFromSource(swap) => {
                *grid = swap.next.clone();
                Ok(())
            }
        }
    }
}

/// Write every entry of `map`, checking all coordinates first.
fn scatter(grid: &mut Grid, map: &DiffMap) -> Result<(), GridError> {
    if let Some(&(row, col)) = map.keys().find(|&&(r, c)| !grid.contains(r, c)) {
        log::warn!("diff entry ({row}, {col}) outside {} grid", grid.size());
        return Err(GridError::OutOfBounds { row, col, height: grid.height(), width: grid.width() });
    }
    for (&(row, col), &symbol) in map {
        grid.set(row, col, symbol)?;
    }
    Ok(())
}
