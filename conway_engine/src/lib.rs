//! Conway's Game of Life on a fixed, edge-clipped board.
//!
//! [`transition::step`] is the pure B3/S23 transition. [`Simulation`] wraps
//! the current generation in a stopped/running state machine, and
//! [`Controller`] drives it from a tokio timer task while publishing
//! [`Snapshot`]s to whatever renders them.

pub mod config;
pub mod controller;
pub mod grid;
pub mod patterns;
pub mod simulation;
pub mod transition;

pub use config::{ConfigError, InitialFill, SimConfig};
pub use controller::Controller;
pub use grid::{Cell, Grid, GridError};
pub use patterns::{PatternError, PatternLibrary};
pub use simulation::{RunState, Simulation, SimulationError, Snapshot};
pub use transition::step;
