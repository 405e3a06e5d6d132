// main.rs - egui front-end for the Game of Life engine
// Renders controller snapshots and forwards button/cell clicks as intents.

use eframe::egui;
use egui::Color32;

use conway_engine::{Controller, InitialFill, SimConfig, SimulationError};

mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let runtime = tokio::runtime::Runtime::new()?;
    let config = SimConfig::default().with_initial_fill(InitialFill::Random);
    let controller = Controller::new(config, runtime.handle().clone())?;
    let patterns = controller.list_patterns()?;
    log::info!("{} presets available", patterns.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(controller, patterns, runtime))),
    )?;
    Ok(())
}

/// Presentation state only; the simulation itself lives in the controller.
pub struct GameOfLife {
    controller: Controller,
    patterns: Vec<&'static str>,
    pub selected_pattern: usize,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub status: Option<String>,

    // Hosts the controller's tick task; dropped with the window.
    _runtime: tokio::runtime::Runtime,
}

impl GameOfLife {
    fn new(controller: Controller, patterns: Vec<&'static str>, runtime: tokio::runtime::Runtime) -> Self {
        Self {
            controller,
            patterns,
            selected_pattern: 0,
            live_color: Color32::from_rgb(0x00, 0x9c, 0xde),
            dead_color: Color32::from_rgb(0xab, 0xe0, 0xf9),
            status: None,
            _runtime: runtime,
        }
    }

    /// Runs one intent, surfacing a rejection in the status line.
    fn dispatch(&mut self, intent: &str, result: Result<(), SimulationError>) {
        match result {
            Ok(()) => self.status = None,
            Err(err) => {
                log::warn!("{intent} rejected: {err}");
                self.status = Some(format!("{intent}: {err}"));
            }
        }
    }
}
