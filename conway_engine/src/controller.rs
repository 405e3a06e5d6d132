// controller.rs - Drives a Simulation on a tokio timer task

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::SimConfig;
use crate::simulation::{Simulation, SimulationError, Snapshot};

/// Everything guarded by the controller's lock.
struct Shared {
    sim: Simulation,
    /// Bumped on every start so a tick task from an earlier run never
    /// touches a later one.
    epoch: u64,
    ticker: Option<JoinHandle<()>>,
}

/// Single owner of a [`Simulation`].
///
/// Operations and ticks are serialized through one mutex. While running, a
/// task on the given runtime sleeps for the configured interval, ticks, and
/// repeats; the delay is measured from the end of the previous tick. Every
/// state change is published to [`Controller::subscribe`] receivers.
pub struct Controller {
    shared: Arc<Mutex<Shared>>,
    updates: watch::Sender<Snapshot>,
    runtime: Handle,
    interval: Duration,
}

impl Controller {
    /// Builds a stopped controller whose tick task will run on `runtime`.
    pub fn new(config: SimConfig, runtime: Handle) -> Result<Self, SimulationError> {
        let interval = config.interval;
        let sim = Simulation::new(config)?;
        let (updates, _) = watch::channel(sim.snapshot());
        Ok(Self {
            shared: Arc::new(Mutex::new(Shared { sim, epoch: 0, ticker: None })),
            updates,
            runtime,
            interval,
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.updates.subscribe()
    }

    pub fn snapshot(&self) -> Result<Snapshot, SimulationError> {
        Ok(self.lock()?.sim.snapshot())
    }

    pub fn list_patterns(&self) -> Result<Vec<&'static str>, SimulationError> {
        Ok(self.lock()?.sim.list_patterns())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<(), SimulationError> {
        self.edit(|sim| sim.toggle_cell(row, col))
    }

    pub fn clear(&self) -> Result<(), SimulationError> {
        self.edit(Simulation::clear)
    }

    pub fn randomize(&self) -> Result<(), SimulationError> {
        self.edit(Simulation::randomize)
    }

    pub fn load_pattern(&self, name: &str) -> Result<(), SimulationError> {
        self.edit(|sim| sim.load_pattern(name))
    }

    /// Stopped -> Running, and spawns the tick task for this run.
    pub fn start(&self) -> Result<(), SimulationError> {
        let mut shared = self.lock()?;
        shared.sim.start()?;
        shared.epoch += 1;
        if let Some(stale) = shared.ticker.take() {
            stale.abort();
        }
        let task = run_ticks(
            Arc::clone(&self.shared),
            self.updates.clone(),
            self.interval,
            shared.epoch,
        );
        shared.ticker = Some(self.runtime.spawn(task));
        self.updates.send_replace(shared.sim.snapshot());
        Ok(())
    }

    /// Running -> Stopped. Once this returns no further tick mutates the
    /// simulation. Stopping a stopped controller does nothing.
    pub fn stop(&self) -> Result<(), SimulationError> {
        let mut shared = self.lock()?;
        let was_running = shared.sim.is_running();
        shared.sim.stop();
        if let Some(ticker) = shared.ticker.take() {
            ticker.abort();
        }
        if was_running {
            self.updates.send_replace(shared.sim.snapshot());
        }
        Ok(())
    }

    /// Convenience for a single play/stop button.
    pub fn toggle_running(&self) -> Result<(), SimulationError> {
        let running = self.lock()?.sim.is_running();
        if running { self.stop() } else { self.start() }
    }

    fn edit(
        &self,
        op: impl FnOnce(&mut Simulation) -> Result<(), SimulationError>,
    ) -> Result<(), SimulationError> {
        let mut shared = self.lock()?;
        op(&mut shared.sim)?;
        self.updates.send_replace(shared.sim.snapshot());
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Shared>, SimulationError> {
        self.shared.lock().map_err(|_| SimulationError::StatePoisoned)
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.lock() {
            if let Some(ticker) = shared.ticker.take() {
                ticker.abort();
            }
        }
    }
}

/// Tick loop for one run. Exits as soon as it finds its run is over.
async fn run_ticks(
    shared: Arc<Mutex<Shared>>,
    updates: watch::Sender<Snapshot>,
    interval: Duration,
    epoch: u64,
) {
    loop {
        tokio::time::sleep(interval).await;

        let Ok(mut guard) = shared.lock() else {
            log::error!("simulation state poisoned, tick loop exiting");
            return;
        };
        // Checked at fire time: a stop() that raced this sleep wins.
        if guard.epoch != epoch || !guard.sim.tick() {
            return;
        }
        updates.send_replace(guard.sim.snapshot());
    }
}
