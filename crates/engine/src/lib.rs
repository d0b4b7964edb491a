//! `taskgrid-engine`: the output-grid editor and its undo/redo log.
//!
//! Pure engine crate: callers (UI, scripts, tests) drive `GridEditEngine`
//! and re-read `grid()` after each call. No rendering or file IO.

pub mod change;
pub mod editor;
pub mod flood_fill;
pub mod history;
pub mod task;

pub use change::{CellDiff, ChangeKind, ChangeRecord, DiffMap, GridSwap};
pub use editor::GridEditEngine;
pub use flood_fill::flood_fill;
pub use history::HistoryLog;
pub use task::{SolutionCheck, Task, TaskError, TaskPair, TaskSession};

pub use taskgrid_core::{Clipboard, CopiedCell, Grid, GridError, GridSize, Selection, Symbol};
