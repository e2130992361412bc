use crate::config::Config;
use crate::registry::Registry;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// UI tick; also paces the export spinner.
const TICK_RATE: Duration = Duration::from_millis(100);

pub fn run(
    config: &Config,
    registry: Registry,
    runtime: Handle,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE, shutdown.clone());

    let signal_tx = events.sender();
    let signal_shutdown = shutdown.clone();
    runtime.spawn(async move {
        if let Err(err) = signal_shutdown.wait_for_signal().await {
            tracing::warn!(error = %err, "signal handler unavailable");
            return;
        }
        let _ = signal_tx.send(AppEvent::Shutdown);
    });

    let mut app = App::new(config, registry, runtime, events.sender());
    tracing::info!(participants = app.registry().count(), "picker started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => process_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    // Dropping the app drops the engine, which cancels a running shuffle.
    drop(app);
    drop(guard);
    tracing::info!("picker stopped");
    Ok(())
}

/// Route one event to the app.
pub fn process_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => app.insert_str(&text),
        AppEvent::Tick => app.on_tick(),
        // The next draw picks up the new size.
        AppEvent::Resize(..) => {}
        AppEvent::ShuffleTick(tick) => app.on_shuffle_tick(tick),
        AppEvent::ExportFinished { job, outcome } => app.on_export_finished(job, outcome),
        AppEvent::Shutdown => app.request_quit(),
    }
}
