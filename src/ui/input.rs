use crate::ui::app::{App, EntryMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = key.code {
            match ch.to_ascii_lowercase() {
                'p' => {
                    app.pick();
                }
                'r' => app.reset_selection(),
                'x' => app.clear_all(),
                'e' => {
                    app.request_export();
                }
                'y' => {
                    app.copy_announcement();
                }
                's' => {
                    app.submit_bulk();
                }
                _ => {}
            }
        }
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.toggle_entry_mode(),
        KeyCode::Enter => match app.entry_mode() {
            EntryMode::Single => {
                app.submit_single();
            }
            EntryMode::Bulk => app.insert_newline(),
        },
        KeyCode::Backspace => app.backspace(),
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::Delete => {
            app.remove_selected();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => app.insert_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
