use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::ops::{self, TaskError};
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// The nag shown when submitting a blank add field
const EMPTY_TASK_NOTICE: &str = "Please enter a task!";

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Submit the field
        (_, KeyCode::Enter) => {
            submit_input(app);
        }

        // Blur without submitting. Whatever was typed stays in the field.
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }

        // Word movement, Ctrl or Alt + arrow depending on the terminal
        (m, KeyCode::Left)
            if m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::ALT) =>
        {
            app.input_cursor = unicode::word_boundary_left(&app.input, app.input_cursor);
        }
        (m, KeyCode::Right)
            if m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::ALT) =>
        {
            app.input_cursor = unicode::word_boundary_right(&app.input, app.input_cursor);
        }

        // Cursor movement
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        (_, KeyCode::Home) => {
            app.input_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.input_cursor = app.input.len();
        }

        // Kill to start of line: Ctrl+U
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.input.drain(..app.input_cursor);
            app.input_cursor = 0;
        }

        // Delete the word behind the cursor
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::ALT) =>
        {
            let start = unicode::word_boundary_left(&app.input, app.input_cursor);
            app.input.drain(start..app.input_cursor);
            app.input_cursor = start;
        }

        // Delete backward/forward by grapheme
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.drain(prev..app.input_cursor);
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.drain(app.input_cursor..next);
            }
        }

        // Type character
        (m, KeyCode::Char(c))
            if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }

        _ => {}
    }
}

/// Try to add what's in the field. The field only empties on success;
/// rejected input stays put for fixing.
fn submit_input(app: &mut App) {
    match ops::add_task(&mut app.tasks, &app.input) {
        Ok(id) => {
            info!(%id, "task added");
            app.input.clear();
            app.input_cursor = 0;
            app.mode = Mode::Navigate;
            app.move_cursor_to(id);
        }
        Err(TaskError::EmptyText) => {
            app.set_error(EMPTY_TASK_NOTICE);
        }
    }
}
