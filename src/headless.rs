//! Pick a winner without the TUI and print it.

use std::sync::Arc;

use anyhow::{bail, Context};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::export::export_winner_card;
use crate::registry::Registry;
use crate::shutdown::ShutdownHandle;
use crate::ui::selection::{SelectionEngine, ShuffleSettings, TickSink, WinnerRecord};

/// Run one full shuffle over `registry` and return the winner.
///
/// Returns `None` when the registry is empty.
pub async fn pick_winner(registry: &Registry, settings: ShuffleSettings) -> Option<WinnerRecord> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sink: TickSink = Arc::new(move |tick| tx.send(tick).is_ok());
    let mut engine = SelectionEngine::new(settings, Handle::current(), sink);

    if !engine.pick(registry) {
        return None;
    }

    while let Some(tick) = rx.recv().await {
        engine.on_tick(tick);
        if let Some(winner) = engine.winner() {
            return Some(winner.clone());
        }
    }
    None
}

pub async fn run_headless(
    registry: &Registry,
    config: &Config,
    export: bool,
    shutdown: ShutdownHandle,
) -> anyhow::Result<()> {
    if registry.is_empty() {
        bail!("no participants: pass names as arguments or use --names-file");
    }

    let settings = ShuffleSettings::from(&config.picker);
    let winner = tokio::select! {
        winner = pick_winner(registry, settings) => winner,
        result = shutdown.wait_for_signal() => {
            result.context("failed to listen for shutdown signals")?;
            bail!("interrupted before a winner was picked");
        }
    };
    let Some(winner) = winner else {
        bail!("shuffle ended without a winner");
    };

    println!("{}", winner.announcement());

    if export {
        let export_config = config.export.clone();
        let record = winner.clone();
        let path = tokio::task::spawn_blocking(move || export_winner_card(&record, &export_config))
            .await
            .context("export task panicked")?
            .context("failed to export winner card")?;
        println!("Saved {}", path.display());
    }

    Ok(())
}
