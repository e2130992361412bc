mod common;

use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use giveaway_picker::config::Config;
use giveaway_picker::ui::app::{App, EntryMode};
use giveaway_picker::ui::events::AppEvent;
use giveaway_picker::ui::export::ExportState;
use giveaway_picker::ui::runtime::process_event;
use tokio::runtime::Handle;

fn fast_config() -> Config {
    let mut config = Config::default();
    config.picker.shuffle_interval_ms = 10;
    config.picker.shuffle_duration_ms = 50;
    config
}

fn make_app(config: &Config, names: &[&str]) -> (App, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let app = App::new(config, common::registry_of(names), Handle::current(), tx);
    (app, rx)
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(ch: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

/// Pump timer events into the app until the shuffle is over.
async fn settle(app: &mut App, rx: &mpsc::Receiver<AppEvent>) {
    for _ in 0..100 {
        if !app.selection().is_shuffling() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        while let Ok(event) = rx.try_recv() {
            process_event(app, event);
        }
    }
    panic!("shuffle did not finish");
}

#[tokio::test(start_paused = true)]
async fn typing_and_picking_with_keys() {
    let (mut app, rx) = make_app(&fast_config(), &[]);

    for ch in "Uzi".chars() {
        process_event(&mut app, key(KeyCode::Char(ch)));
    }
    process_event(&mut app, key(KeyCode::Enter));
    process_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.entry_mode(), EntryMode::Bulk);
    process_event(&mut app, AppEvent::Paste("Tanbir\nAna\n".to_string()));
    process_event(&mut app, ctrl('s'));
    assert_eq!(app.registry().names(), ["Uzi", "Tanbir", "Ana"]);

    process_event(&mut app, ctrl('p'));
    assert!(app.selection().is_shuffling());
    assert!(!app.can_pick());

    settle(&mut app, &rx).await;
    let winner = app.selection().winner().unwrap();
    assert!(app.registry().names().contains(&winner.name));
}

#[tokio::test(start_paused = true)]
async fn pick_with_no_participants_does_nothing() {
    let (mut app, _rx) = make_app(&fast_config(), &[]);
    assert!(!app.can_pick());
    process_event(&mut app, ctrl('p'));
    assert!(app.selection().is_idle());
}

#[tokio::test(start_paused = true)]
async fn reset_keeps_participants() {
    let (mut app, rx) = make_app(&fast_config(), &["Uzi", "Tanbir"]);
    app.pick();
    settle(&mut app, &rx).await;
    assert!(app.selection().is_resolved());

    process_event(&mut app, ctrl('r'));
    assert!(app.selection().is_idle());
    assert_eq!(app.registry().count(), 2);
}

#[tokio::test(start_paused = true)]
async fn clear_all_during_shuffle_returns_to_idle() {
    let (mut app, rx) = make_app(&fast_config(), &["Uzi", "Tanbir"]);
    app.pick();
    tokio::time::sleep(Duration::from_millis(15)).await;
    while let Ok(event) = rx.try_recv() {
        process_event(&mut app, event);
    }

    process_event(&mut app, ctrl('x'));
    assert!(app.selection().is_idle());
    assert!(app.registry().is_empty());
    assert!(!app.engine().has_active_timer());

    // Ticks already in flight belong to a dead cycle.
    tokio::time::sleep(Duration::from_millis(200)).await;
    while let Ok(event) = rx.try_recv() {
        process_event(&mut app, event);
    }
    assert!(app.selection().is_idle());
}

#[tokio::test(start_paused = true)]
async fn clear_all_after_resolution_forgets_the_winner() {
    let (mut app, rx) = make_app(&fast_config(), &["Uzi", "Tanbir"]);
    app.pick();
    settle(&mut app, &rx).await;
    assert!(app.selection().is_resolved());

    process_event(&mut app, ctrl('x'));
    assert!(app.selection().is_idle());
    assert!(app.selection().winner().is_none());
    assert!(app.engine().winner().is_none());
    assert!(app.registry().is_empty());
    assert_eq!(app.export_state(), &ExportState::Idle);
}

#[tokio::test(start_paused = true)]
async fn delete_removes_selected_participant() {
    let (mut app, _rx) = make_app(&fast_config(), &["a", "b", "c"]);
    process_event(&mut app, key(KeyCode::Down));
    process_event(&mut app, key(KeyCode::Delete));
    assert_eq!(app.registry().names(), ["a", "c"]);
    assert_eq!(app.cursor(), 1);
}

#[tokio::test(start_paused = true)]
async fn quit_keys() {
    let (mut app, _rx) = make_app(&fast_config(), &[]);
    process_event(&mut app, key(KeyCode::Esc));
    assert!(app.should_quit());

    let (mut app, _rx) = make_app(&fast_config(), &[]);
    process_event(&mut app, ctrl('q'));
    assert!(app.should_quit());

    let (mut app, _rx) = make_app(&fast_config(), &[]);
    process_event(&mut app, AppEvent::Shutdown);
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn export_failure_clears_the_spinner() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fast_config();
    config.export.output_dir = Some(dir.path().to_path_buf());
    config.export.font_path = Some(dir.path().join("missing.ttf"));

    let (mut app, rx) = make_app(&config, &["Uzi"]);
    assert!(!app.request_export());

    app.pick();
    settle(&mut app, &rx).await;
    assert!(app.request_export());
    assert!(app.export_state().is_in_progress());
    assert!(!app.request_export());

    let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    process_event(&mut app, event);
    match app.export_state() {
        ExportState::Failed { error } => assert!(error.contains("missing.ttf"), "{error}"),
        other => panic!("unexpected export state: {other:?}"),
    }
    assert!(!dir.path().join("winner-uzi.png").exists());
}

#[tokio::test(start_paused = true)]
async fn export_result_without_request_is_dropped() {
    let (mut app, rx) = make_app(&fast_config(), &["Uzi"]);
    app.pick();
    settle(&mut app, &rx).await;

    process_event(
        &mut app,
        AppEvent::ExportFinished {
            job: 1,
            outcome: Ok("/tmp/winner-uzi.png".into()),
        },
    );
    // Not in progress, so the late result is dropped.
    assert_eq!(app.export_state(), &ExportState::Idle);
}

#[tokio::test(start_paused = true)]
async fn outcome_of_superseded_export_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fast_config();
    config.export.output_dir = Some(dir.path().to_path_buf());
    config.export.font_path = Some(dir.path().join("missing.ttf"));

    let (mut app, rx) = make_app(&config, &["Uzi"]);
    app.pick();
    settle(&mut app, &rx).await;

    // First export finishes but its outcome is not delivered yet.
    assert!(app.request_export());
    let first_job = app.export_state().active_job().unwrap();
    let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();

    app.reset_selection();
    app.pick();
    settle(&mut app, &rx).await;
    assert!(app.request_export());
    let second_job = app.export_state().active_job().unwrap();
    assert_ne!(first_job, second_job);

    process_event(&mut app, first);
    assert_eq!(app.export_state().active_job(), Some(second_job));

    let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(matches!(
        &second,
        AppEvent::ExportFinished { job, .. } if *job == second_job
    ));
    process_event(&mut app, second);
    assert!(app.export_state().error_message().is_some());
}
