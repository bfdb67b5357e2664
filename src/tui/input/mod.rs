mod edit;
mod insert;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C quits from any mode
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Transient messages last until the next keypress
    app.clear_status();

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Insert => insert::handle_insert(app, key),
        Mode::Edit => edit::handle_edit(app, key),
    }
}
