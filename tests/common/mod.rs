//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use giveaway_picker::registry::Registry;
use giveaway_picker::ui::selection::{SelectionEngine, ShuffleSettings, ShuffleTick, TickSink};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

pub type TickRx = mpsc::UnboundedReceiver<ShuffleTick>;

pub fn registry_of(names: &[&str]) -> Registry {
    let mut registry = Registry::new();
    for name in names {
        registry.add_one(name);
    }
    registry
}

pub fn settings(interval_ms: u64, duration_ms: u64) -> ShuffleSettings {
    ShuffleSettings {
        interval: Duration::from_millis(interval_ms),
        duration: Duration::from_millis(duration_ms),
    }
}

/// Engine on the current runtime whose ticks land in a channel.
pub fn channel_engine(settings: ShuffleSettings, seed: u64) -> (SelectionEngine<StdRng>, TickRx) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sink: TickSink = Arc::new(move |tick| tx.send(tick).is_ok());
    let engine = SelectionEngine::with_rng(
        settings,
        Handle::current(),
        sink,
        StdRng::seed_from_u64(seed),
    );
    (engine, rx)
}

/// Feed ticks until the shuffle ends. Returns the flicker names seen.
pub async fn drive(engine: &mut SelectionEngine<StdRng>, rx: &mut TickRx) -> Vec<String> {
    let mut seen = Vec::new();
    while engine.state().is_shuffling() {
        let tick = rx.recv().await.expect("timer stopped before resolution");
        engine.on_tick(tick);
        if let Some(name) = engine.state().displayed() {
            seen.push(name.to_string());
        }
    }
    seen
}
