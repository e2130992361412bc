//! Owner of the selection state and of everything reducers must not touch.
//!
//! The engine keeps the timer handle, the snapshot of names taken when the
//! pick started, and the random source. Each pick cycle gets a new
//! generation number; ticks from any other generation are stale and are
//! ignored.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::runtime::Handle;

use crate::config::PickerConfig;
use crate::registry::Registry;
use crate::ui::mvi::Reducer;

use super::intent::SelectionIntent;
use super::reducer::SelectionReducer;
use super::state::{SelectionState, WinnerRecord};
use super::timer::{ShuffleTick, ShuffleTimer, TickSink};

/// Shuffle timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleSettings {
    pub interval: Duration,
    pub duration: Duration,
}

impl ShuffleSettings {
    /// Number of flicker ticks per cycle: `ceil(duration / interval)`, at least one.
    pub fn ticks(&self) -> u32 {
        let interval = self.interval.as_nanos().max(1);
        let ticks = self.duration.as_nanos().div_ceil(interval);
        u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
    }
}

impl Default for ShuffleSettings {
    fn default() -> Self {
        Self::from(&PickerConfig::default())
    }
}

impl From<&PickerConfig> for ShuffleSettings {
    fn from(config: &PickerConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.shuffle_interval_ms),
            duration: Duration::from_millis(config.shuffle_duration_ms),
        }
    }
}

pub struct SelectionEngine<R = StdRng> {
    state: SelectionState,
    timer: Option<ShuffleTimer>,
    snapshot: Vec<String>,
    generation: u64,
    settings: ShuffleSettings,
    rng: R,
    runtime: Handle,
    sink: TickSink,
}

impl SelectionEngine<StdRng> {
    pub fn new(settings: ShuffleSettings, runtime: Handle, sink: TickSink) -> Self {
        Self::with_rng(settings, runtime, sink, StdRng::from_os_rng())
    }
}

impl<R: Rng> SelectionEngine<R> {
    pub fn with_rng(settings: ShuffleSettings, runtime: Handle, sink: TickSink, rng: R) -> Self {
        Self {
            state: SelectionState::Idle,
            timer: None,
            snapshot: Vec::new(),
            generation: 0,
            settings,
            rng,
            runtime,
            sink,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn winner(&self) -> Option<&WinnerRecord> {
        self.state.winner()
    }

    pub fn settings(&self) -> ShuffleSettings {
        self.settings
    }

    /// Generation of the current (or most recent) pick cycle.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a shuffle timer is owned by the engine.
    pub fn has_active_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Start a pick cycle over a snapshot of `registry`.
    ///
    /// No-op when the registry is empty or a shuffle is already running.
    pub fn pick(&mut self, registry: &Registry) -> bool {
        if self.state.is_shuffling() {
            tracing::debug!("pick ignored: shuffle already running");
            return false;
        }
        if registry.is_empty() {
            tracing::debug!("pick ignored: no participants");
            return false;
        }

        self.snapshot = registry.names().to_vec();
        self.generation = self.generation.wrapping_add(1);
        self.dispatch(SelectionIntent::Start);

        let ticks = self.settings.ticks();
        self.timer = Some(ShuffleTimer::start(
            &self.runtime,
            self.settings.interval,
            ticks,
            self.generation,
            Arc::clone(&self.sink),
        ));
        tracing::info!(
            generation = self.generation,
            entrants = self.snapshot.len(),
            ticks,
            "shuffle started"
        );
        true
    }

    /// Handle one timer firing.
    pub fn on_tick(&mut self, tick: ShuffleTick) {
        if tick.generation != self.generation || !self.state.is_shuffling() {
            tracing::trace!(
                tick_generation = tick.generation,
                generation = self.generation,
                "stale shuffle tick ignored"
            );
            return;
        }

        let Some(sample) = self.draw() else {
            return;
        };
        self.dispatch(SelectionIntent::Tick { sample });

        if self.state.ticks() >= self.settings.ticks() {
            self.resolve();
        }
    }

    /// Cancel any shuffle and forget the winner. Safe to call in any state.
    pub fn reset(&mut self) {
        let was_idle = self.state.is_idle();
        self.timer = None;
        self.snapshot.clear();
        self.generation = self.generation.wrapping_add(1);
        self.dispatch(SelectionIntent::Reset);
        if !was_idle {
            tracing::info!("selection reset");
        }
    }

    fn resolve(&mut self) {
        self.timer = None;
        // The winner is drawn afresh; displayed samples carry no weight.
        let Some(name) = self.draw() else {
            self.reset();
            return;
        };
        let winner = WinnerRecord::new(name, Local::now().date_naive());
        tracing::info!(
            generation = self.generation,
            winner = %winner.name,
            entrants = self.snapshot.len(),
            "winner drawn"
        );
        self.snapshot.clear();
        self.dispatch(SelectionIntent::Resolve { winner });
    }

    /// Uniform draw with replacement from the snapshot.
    fn draw(&mut self) -> Option<String> {
        if self.snapshot.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.snapshot.len());
        Some(self.snapshot[index].clone())
    }

    fn dispatch(&mut self, intent: SelectionIntent) {
        self.state = SelectionReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
