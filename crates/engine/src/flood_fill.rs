//! Connected-region fill.

use rustc_hash::FxHashSet;
use taskgrid_core::{Grid, GridError, Symbol, MAX_SYMBOL};

/// Replace the 4-connected region containing `(row, col)` with `new_symbol`.
///
/// The region is every cell reachable through up/down/left/right neighbours
/// that hold the same symbol as the start cell. Returns the number of cells
/// filled; `0` when the start cell already holds `new_symbol`.
pub fn flood_fill(grid: &mut Grid, row: usize, col: usize, new_symbol: Symbol) -> Result<usize, GridError> {
    let target = grid.get(row, col)?;
    if target == new_symbol {
        return Ok(0);
    }
    if new_symbol > MAX_SYMBOL {
        return Err(GridError::InvalidSymbol { symbol: new_symbol });
    }

    let mut visited: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut stack = vec![(row, col)];
    let mut filled = 0;

    while let Some((r, c)) = stack.pop() {
        if !visited.insert((r, c)) {
            continue;
        }
        if grid.get(r, c)? != target {
            continue;
        }
        grid.set(r, c, new_symbol)?;
        filled += 1;

        if r > 0 {
            stack.push((r - 1, c));
        }
        if r + 1 < grid.height() {
            stack.push((r + 1, c));
        }
        if c > 0 {
            stack.push((r, c - 1));
        }
        if c + 1 < grid.width() {
            stack.push((r, c + 1));
        }
    }

    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[Symbol]]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_fills_connected_region_only() {
        let mut g = grid(&[&[1, 1, 2], &[1, 2, 2], &[2, 2, 2]]);
        assert_eq!(flood_fill(&mut g, 0, 0, 5), Ok(3));
        assert_eq!(g, grid(&[&[5, 5, 2], &[5, 2, 2], &[2, 2, 2]]));
    }

    #[test]
    fn test_diagonal_neighbours_untouched() {
        let mut g = grid(&[&[1, 0, 1], &[0, 1, 0], &[1, 0, 1]]);
        assert_eq!(flood_fill(&mut g, 1, 1, 3), Ok(1));
        assert_eq!(g, grid(&[&[1, 0, 1], &[0, 3, 0], &[1, 0, 1]]));
    }

    #[test]
    fn test_same_symbol_is_noop() {
        let mut g = grid(&[&[4, 4], &[4, 4]]);
        assert_eq!(flood_fill(&mut g, 0, 0, 4), Ok(0));
        assert_eq!(g, grid(&[&[4, 4], &[4, 4]]));
    }

    #[test]
    fn test_whole_grid() {
        let mut g = Grid::new(4, 5).unwrap();
        assert_eq!(flood_fill(&mut g, 3, 4, 9), Ok(20));
        assert!(g.iter().all(|(_, _, s)| s == 9));
    }

    #[test]
    fn test_winding_region() {
        let mut g = grid(&[
            &[1, 1, 1, 1],
            &[0, 0, 0, 1],
            &[1, 1, 0, 1],
            &[1, 0, 0, 1],
            &[1, 1, 1, 1],
        ]);
        assert_eq!(flood_fill(&mut g, 0, 0, 7), Ok(14));
        assert_eq!(g.get(1, 0), Ok(0));
        assert_eq!(g.get(2, 0), Ok(7));
    }

    #[test]
    fn test_out_of_bounds_start() {
        let mut g = Grid::new(2, 2).unwrap();
        assert!(matches!(flood_fill(&mut g, 2, 0, 1), Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn test_invalid_symbol_leaves_grid_untouched() {
        let mut g = grid(&[&[1, 1], &[1, 1]]);
        assert_eq!(flood_fill(&mut g, 0, 0, 11), Err(GridError::InvalidSymbol { symbol: 11 }));
        assert_eq!(g, grid(&[&[1, 1], &[1, 1]]));
    }
}
