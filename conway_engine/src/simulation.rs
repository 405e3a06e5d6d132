// simulation.rs - Run/stop state machine around the current generation

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::config::{ConfigError, InitialFill, SimConfig};
use crate::grid::{Grid, GridError};
use crate::patterns::{PatternError, PatternLibrary};
use crate::transition::step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Stopped => f.write_str("stopped"),
            RunState::Running => f.write_str("running"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    OutOfBounds(#[from] GridError),
    #[error(transparent)]
    UnknownPattern(#[from] PatternError),
    #[error("pattern is {found:?} but the board is {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("cannot {operation} while {state}")]
    InvalidOperationForState {
        operation: &'static str,
        state: RunState,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("simulation state lock was poisoned")]
    StatePoisoned,
}

/// Read-only copy of the simulation handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub generation: u64,
    pub running: bool,
    /// The last tick left the board unchanged (still life or extinct).
    pub stable: bool,
}

/// The current generation plus its run flag.
///
/// Every operation either succeeds completely or leaves the state exactly as
/// it was. Editing is only allowed while stopped.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    generation: u64,
    running: bool,
    stable: bool,
    patterns: PatternLibrary,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = match config.initial_fill {
            InitialFill::Empty => Grid::empty(config.rows, config.cols),
            InitialFill::Random => {
                Grid::random(config.rows, config.cols, config.alive_probability, &mut rng)
            }
        };
        Ok(Self {
            config,
            grid,
            generation: 1,
            running: false,
            stable: false,
            patterns: PatternLibrary,
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the most recent tick reproduced the board it started from.
    /// Observed only; the run flag is left alone.
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    pub fn run_state(&self) -> RunState {
        if self.running { RunState::Running } else { RunState::Stopped }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            generation: self.generation,
            running: self.running,
            stable: self.stable,
        }
    }

    pub fn list_patterns(&self) -> Vec<&'static str> {
        self.patterns.list_patterns()
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), SimulationError> {
        self.require_stopped("toggle a cell")?;
        self.grid = self.grid.toggle(row, col)?;
        self.stable = false;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), SimulationError> {
        self.require_stopped("start")?;
        self.running = true;
        log::info!("simulation started at generation {}", self.generation);
        Ok(())
    }

    /// Stopping an already stopped simulation is a no-op.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("simulation stopped at generation {}", self.generation);
        }
    }

    pub fn clear(&mut self) -> Result<(), SimulationError> {
        self.require_stopped("clear")?;
        self.install(Grid::empty(self.config.rows, self.config.cols));
        Ok(())
    }

    pub fn randomize(&mut self) -> Result<(), SimulationError> {
        self.require_stopped("randomize")?;
        let grid = Grid::random(
            self.config.rows,
            self.config.cols,
            self.config.alive_probability,
            &mut self.rng,
        );
        self.install(grid);
        Ok(())
    }

    pub fn load_pattern(&mut self, name: &str) -> Result<(), SimulationError> {
        self.require_stopped("load a pattern")?;
        let pattern = self.patterns.get(name)?;
        let expected = self.config.dimensions();
        if pattern.dimensions() != expected {
            return Err(SimulationError::DimensionMismatch {
                expected,
                found: pattern.dimensions(),
            });
        }
        self.install(pattern);
        log::info!("loaded pattern {name:?}");
        Ok(())
    }

    /// Advances one generation if running. Returns whether a transition was
    /// applied.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let next = step(&self.grid);
        let stable = next == self.grid;
        if stable && !self.stable {
            log::info!("board stable at generation {}", self.generation + 1);
        }
        self.stable = stable;
        self.grid = next;
        self.generation += 1;
        log::debug!("generation {} ({} alive)", self.generation, self.grid.population());
        true
    }

    fn install(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 1;
        self.stable = false;
    }

    fn require_stopped(&self, operation: &'static str) -> Result<(), SimulationError> {
        match self.run_state() {
            RunState::Stopped => Ok(()),
            state => Err(SimulationError::InvalidOperationForState { operation, state }),
        }
    }
}
