// grid.rs - Grid types for Conway's Game of Life

use std::fmt;

use rand::Rng;
use thiserror::Error;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn flipped(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// A fixed-size generation of cells, stored row-major.
///
/// A `Grid` is a value: editing or advancing it produces a new `Grid`, so a
/// snapshot handed out for rendering never changes underneath its holder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Every cell dead.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Each cell is independently alive when a uniform draw in `[0, 1)`
    /// exceeds `1 - alive_probability`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Self {
        let threshold = 1.0 - alive_probability;
        let cells = (0..rows * cols)
            .map(|_| Cell::from(rng.random::<f64>() > threshold))
            .collect();
        Self { rows, cols, cells }
    }

    /// Builds a grid with exactly the listed cells alive.
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::empty(rows, cols);
        for &(row, col) in alive {
            let index = grid.index(row, col)?;
            grid.cells[index] = Cell::Alive;
        }
        Ok(grid)
    }

    pub(crate) fn from_rows(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Returns a copy with the cell at `(row, col)` flipped.
    pub fn toggle(&self, row: usize, col: usize) -> Result<Self, GridError> {
        let index = self.index(row, col)?;
        let mut next = self.clone();
        next.cells[index] = next.cells[index].flipped();
        Ok(next)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).ok().map(|index| self.cells[index])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &cell)| (index / self.cols, index % self.cols, cell))
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_grid_has_requested_shape_and_no_life() {
        let grid = Grid::empty(3, 4);
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_cells().count(), 12);
        for row in 0..3 {
            assert_eq!(grid.row(row).map(<[Cell]>::len), Some(4));
        }
        assert!(grid.row(3).is_none());
    }

    #[test]
    fn toggle_flips_only_the_target_cell() {
        let grid = Grid::empty(5, 5);
        let toggled = grid.toggle(2, 3).unwrap();

        assert_eq!(toggled.get(2, 3), Some(Cell::Alive));
        assert_eq!(toggled.population(), 1);
        // Input left as it was.
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn toggle_twice_restores_the_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(6, 9, 0.25, &mut rng);
        for (row, col) in [(0, 0), (5, 8), (3, 4)] {
            let back = grid.toggle(row, col).unwrap().toggle(row, col).unwrap();
            assert_eq!(back, grid);
        }
    }

    #[test]
    fn toggle_out_of_bounds_is_rejected() {
        let grid = Grid::empty(5, 6);
        assert_eq!(
            grid.toggle(5, 0),
            Err(GridError::OutOfBounds { row: 5, col: 0, rows: 5, cols: 6 })
        );
        assert!(grid.toggle(0, 6).is_err());
    }

    #[test]
    fn with_alive_rejects_coordinates_outside_the_grid() {
        assert!(Grid::with_alive(3, 3, &[(1, 1), (3, 0)]).is_err());
        let grid = Grid::with_alive(3, 3, &[(0, 0), (2, 2)]).unwrap();
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(2, 2));
        assert!(!grid.is_alive(1, 1));
        assert!(!grid.is_alive(9, 9));
    }

    #[test]
    fn random_is_reproducible_for_a_seed() {
        let a = Grid::random(25, 50, 0.25, &mut StdRng::seed_from_u64(42));
        let b = Grid::random(25, 50, 0.25, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn random_respects_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::random(10, 10, 0.0, &mut rng).population(), 0);

        let full = Grid::random(10, 10, 1.0, &mut rng);
        assert!(full.population() >= 99);
    }

    #[test]
    fn random_density_is_near_the_requested_probability() {
        let grid = Grid::random(100, 100, 0.25, &mut StdRng::seed_from_u64(3));
        let density = grid.population() as f64 / 10_000.0;
        assert!((0.2..0.3).contains(&density), "density was {density}");
    }

    #[test]
    fn display_draws_one_line_per_row() {
        let grid = Grid::with_alive(2, 3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(grid.to_string(), ".#.\n..#\n");
    }
}
