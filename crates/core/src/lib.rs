//! `taskgrid-core`: symbol grids, selections and the shared error type.

pub mod error;
pub mod grid;
pub mod selection;

pub use error::GridError;
pub use grid::{Grid, GridSize, Symbol, BACKGROUND, MAX_SYMBOL};
pub use selection::{Clipboard, CopiedCell, Range, Selection};
