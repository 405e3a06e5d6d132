// config.rs - Construction-time simulation settings

use std::time::Duration;

use thiserror::Error;

use crate::patterns::{PATTERN_COLS, PATTERN_ROWS};

pub const DEFAULT_ROWS: usize = PATTERN_ROWS;                     // Presets load without resizing
pub const DEFAULT_COLS: usize = PATTERN_COLS;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50); // Delay between ticks
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.25;                  // Random fill density

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },
    #[error("a {rows}x{cols} grid has more cells than can be addressed")]
    TooLarge { rows: usize, cols: usize },
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
    #[error("alive probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// How the board is filled when a simulation is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialFill {
    #[default]
    Empty,
    Random,
}

/// Settings fixed for the lifetime of a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub rows: usize,
    pub cols: usize,
    pub interval: Duration,
    pub alive_probability: f64,
    pub initial_fill: InitialFill,
    /// `None` seeds the random fill from the operating system.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            interval: DEFAULT_INTERVAL,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            initial_fill: InitialFill::Empty,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_alive_probability(mut self, alive_probability: f64) -> Self {
        self.alive_probability = alive_probability;
        self
    }

    pub fn with_initial_fill(mut self, initial_fill: InitialFill) -> Self {
        self.initial_fill = initial_fill;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension { rows: self.rows, cols: self.cols });
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(ConfigError::TooLarge { rows: self.rows, cols: self.cols });
        }
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::InvalidProbability(self.alive_probability));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_match_the_preset_board() {
        let config = SimConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.dimensions(), (25, 50));
        assert_eq!(config.interval, Duration::from_millis(50));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let config = SimConfig::default().with_dimensions(0, 10);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimension { rows: 0, cols: 10 }));
    }

    #[test]
    fn rejects_cell_counts_that_overflow() {
        let config = SimConfig::default().with_dimensions(usize::MAX, 2);
        assert_eq!(config.validate(), Err(ConfigError::TooLarge { rows: usize::MAX, cols: 2 }));
    }

    #[test]
    fn rejects_zero_interval() {
        let config = SimConfig::default().with_interval(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn rejects_probability_outside_unit_interval() {
        for p in [-0.1, 1.5, f64::NAN] {
            let config = SimConfig::default().with_alive_probability(p);
            assert!(matches!(config.validate(), Err(ConfigError::InvalidProbability(_))), "{p}");
        }
        assert!(SimConfig::default().with_alive_probability(1.0).validate().is_ok());
    }
}
