// transition.rs - One generation of Conway's rules

use crate::grid::{Cell, Grid};

/// Offsets of the eight neighbours around a cell.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Computes the next generation from `grid`.
///
/// Every cell is evaluated against the input grid only, so the update is
/// simultaneous. The input is never modified.
pub fn step(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        cells.extend(next_row(grid, row));
    }
    Grid::from_rows(rows, cols, cells)
}

/// Computes one row of the next generation from the current snapshot.
pub fn next_row(grid: &Grid, row: usize) -> Vec<Cell> {
    (0..grid.cols())
        .map(|col| {
            let current = grid.get(row, col).unwrap_or_default();
            next_state(current, live_neighbors(grid, row, col))
        })
        .collect()
}

/// Live cells among the in-bounds neighbours of `(row, col)`. Edges are
/// clipped, never wrapped.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    NEIGHBOUR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?)))
        .filter(|&(nr, nc)| grid.is_alive(nr, nc))
        .count() as u8
}

/// Conway's B3/S23 rule.
pub fn next_state(current: Cell, live_neighbors: u8) -> Cell {
    match (current, live_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3)                     => Cell::Alive, // Birth
        _                                   => Cell::Dead,  // Death or stays dead
    }
}
