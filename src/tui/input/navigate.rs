use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::ops;
use crate::tui::app::{App, FlatRow, Mode, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Theme picker: selection keys just leave the screen
    if app.view == View::Themes {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('t') | KeyCode::Char('q') => {
                app.view = View::Tasks;
            }
            _ => {}
        }
        return;
    }

    match (key.modifiers, key.code) {
        // Quit: q
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Theme picker: t
        (KeyModifiers::NONE, KeyCode::Char('t')) => {
            app.view = View::Themes;
        }

        // Cursor movement: up/down
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => {
            move_cursor(app, -1);
        }
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => {
            move_cursor(app, 1);
        }

        // Jump to first/last task row
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            jump_to_top(app);
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            jump_to_bottom(app);
        }

        // Toggle completion
        (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            toggle_complete_action(app);
        }

        // Toggle favorite
        (KeyModifiers::NONE, KeyCode::Char('f')) => {
            toggle_favorite_action(app);
        }

        // Delete (fires after a short delay)
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            delete_action(app);
        }

        // Edit in place
        (KeyModifiers::NONE, KeyCode::Char('e') | KeyCode::Enter) => {
            if let Some(id) = app.selected_task_id() {
                app.start_edit(id);
            }
        }

        // Focus the add field
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i')) => {
            app.mode = Mode::Insert;
        }

        _ => {}
    }
}

/// Step the cursor over task rows, hopping the done separator
pub(super) fn move_cursor(app: &mut App, delta: isize) {
    let rows = app.flat_rows();
    if rows.is_empty() {
        return;
    }
    let mut idx = app.cursor.min(rows.len() - 1) as isize;
    loop {
        idx += delta;
        if idx < 0 || idx as usize >= rows.len() {
            return;
        }
        if matches!(rows[idx as usize], FlatRow::Task(_)) {
            app.cursor = idx as usize;
            return;
        }
    }
}

fn jump_to_top(app: &mut App) {
    let rows = app.flat_rows();
    if let Some(idx) = rows.iter().position(|r| matches!(r, FlatRow::Task(_))) {
        app.cursor = idx;
    }
}

fn jump_to_bottom(app: &mut App) {
    let rows = app.flat_rows();
    if let Some(idx) = rows.iter().rposition(|r| matches!(r, FlatRow::Task(_))) {
        app.cursor = idx;
    }
}

fn toggle_complete_action(app: &mut App) {
    let Some(id) = app.selected_task_id() else {
        return;
    };
    if ops::toggle_complete(&mut app.tasks, id) {
        debug!(%id, "toggled completion");
        // The task changed sections; keep the cursor where it was
        app.clamp_cursor();
    }
}

fn toggle_favorite_action(app: &mut App) {
    let Some(id) = app.selected_task_id() else {
        return;
    };
    if ops::toggle_favorite(&mut app.tasks, id) {
        // Sorting may have moved the row; stay on the task
        app.move_cursor_to(id);
    }
}

fn delete_action(app: &mut App) {
    let Some(id) = app.selected_task_id() else {
        return;
    };
    debug!(%id, "delete scheduled");
    app.schedule_delete(id, Instant::now());
}
