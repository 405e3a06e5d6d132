// patterns.rs - Named preset layouts

use thiserror::Error;

use crate::grid::{Grid, GridError};

/// Every preset is authored on a board of this size.
pub const PATTERN_ROWS: usize = 25;
pub const PATTERN_COLS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("no pattern named {0:?}")]
    UnknownPattern(String),
    #[error("pattern {name:?} does not fit its board: {source}")]
    Malformed {
        name: &'static str,
        source: GridError,
    },
}

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Anvil",
        cells: &[
            (10, 25), (10, 26),
            (11, 21), (11, 22), (11, 25), (11, 27),
            (12, 21), (12, 27),
            (13, 22), (13, 23), (13, 24), (13, 25), (13, 26),
            (14, 24),
        ],
    },
    Pattern {
        name: "Glider",
        cells: &[(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(12, 24), (12, 25), (12, 26)],
    },
    Pattern {
        name: "Toad",
        cells: &[(12, 25), (12, 26), (12, 27), (13, 24), (13, 25), (13, 26)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (6, 24), (6, 25), (6, 26), (6, 30), (6, 31), (6, 32),
            (8, 22), (8, 27), (8, 29), (8, 34),
            (9, 22), (9, 27), (9, 29), (9, 34),
            (10, 22), (10, 27), (10, 29), (10, 34),
            (11, 24), (11, 25), (11, 26), (11, 30), (11, 31), (11, 32),
            // Bottom half (mirrored)
            (13, 24), (13, 25), (13, 26), (13, 30), (13, 31), (13, 32),
            (14, 22), (14, 27), (14, 29), (14, 34),
            (15, 22), (15, 27), (15, 29), (15, 34),
            (16, 22), (16, 27), (16, 29), (16, 34),
            (18, 24), (18, 25), (18, 26), (18, 30), (18, 31), (18, 32),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(12, 25), (12, 26), (11, 26), (13, 25), (13, 24)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (5, 1), (5, 2), (6, 1), (6, 2),
            (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
            (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17),
            (7, 17), (6, 18), (3, 21), (4, 21), (5, 21), (3, 22), (4, 22),
            (5, 22), (2, 23), (6, 23), (1, 25), (2, 25), (6, 25), (7, 25),
            (3, 35), (4, 35), (3, 36), (4, 36),
        ],
    },
];

/// Lookup over [`PATTERNS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternLibrary;

impl PatternLibrary {
    /// Names in authoring order.
    pub fn list_patterns(&self) -> Vec<&'static str> {
        PATTERNS.iter().map(|pattern| pattern.name).collect()
    }

    /// Renders the named preset onto a fresh `PATTERN_ROWS x PATTERN_COLS` grid.
    pub fn get(&self, name: &str) -> Result<Grid, PatternError> {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.name == name)
            .ok_or_else(|| PatternError::UnknownPattern(name.to_owned()))?;
        pattern.render()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (PATTERN_ROWS, PATTERN_COLS)
    }
}

impl Pattern {
    fn render(&self) -> Result<Grid, PatternError> {
        Grid::with_alive(PATTERN_ROWS, PATTERN_COLS, self.cells)
            .map_err(|source| PatternError::Malformed { name: self.name, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::step;
    use std::collections::HashSet;

    fn advance(grid: &Grid, generations: usize) -> Grid {
        (0..generations).fold(grid.clone(), |g, _| step(&g))
    }

    #[test]
    fn every_authored_cell_fits_the_board() {
        for pattern in PATTERNS {
            let grid = Grid::with_alive(PATTERN_ROWS, PATTERN_COLS, pattern.cells);
            assert!(grid.is_ok(), "{} has a cell off the board", pattern.name);
        }
    }

    #[test]
    fn names_are_unique_and_listed_in_order() {
        let names = PatternLibrary.list_patterns();
        assert_eq!(names.len(), PATTERNS.len());
        assert_eq!(names.first(), Some(&"Anvil"));
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn rendered_population_matches_authored_cells() {
        for name in PatternLibrary.list_patterns() {
            let grid = PatternLibrary.get(name).unwrap();
            let pattern = PATTERNS.iter().find(|p| p.name == name).unwrap();
            assert_eq!(grid.dimensions(), PatternLibrary.dimensions());
            assert_eq!(grid.population(), pattern.cells.len(), "{name}");
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            PatternLibrary.get("Achim's P1000"),
            Err(PatternError::UnknownPattern("Achim's P1000".into()))
        );
        assert!(PatternLibrary.get("anvil").is_err());
    }

    #[test]
    fn anvil_is_a_still_life() {
        let anvil = PatternLibrary.get("Anvil").unwrap();
        assert_eq!(anvil.population(), 14);
        assert_eq!(step(&anvil), anvil);
    }

    #[test]
    fn oscillators_return_after_their_period() {
        for (name, period) in [("Blinker", 2), ("Toad", 2), ("Beacon", 2), ("Pulsar", 3)] {
            let start = PatternLibrary.get(name).unwrap();
            assert_ne!(step(&start), start, "{name} should move");
            assert_eq!(advance(&start, period), start, "{name} period {period}");
        }
    }

    #[test]
    fn glider_moves_one_cell_diagonally_every_four_generations() {
        let glider = PatternLibrary.get("Glider").unwrap();
        let shifted: Vec<_> = glider.iter_cells().filter(|(_, _, c)| c.is_alive()).map(|(r, c, _)| (r + 1, c + 1)).collect();
        let expected = Grid::with_alive(PATTERN_ROWS, PATTERN_COLS, &shifted).unwrap();
        assert_eq!(advance(&glider, 4), expected);
    }

    #[test]
    fn glider_gun_emits_a_glider_every_thirty_generations() {
        let gun = PatternLibrary.get("Gosper Glider Gun").unwrap();
        assert_eq!(advance(&gun, 30).population(), gun.population() + 5);
    }
}
