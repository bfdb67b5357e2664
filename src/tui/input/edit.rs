use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::navigate;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    // Dropping out of the editor always writes the buffer back; there is
    // no cancel. Esc behaves like clicking elsewhere, not like undo.
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.commit_edit();
            return;
        }
        // Moving to another row blurs this one first
        KeyCode::Up => {
            app.commit_edit();
            navigate::move_cursor(app, -1);
            return;
        }
        KeyCode::Down => {
            app.commit_edit();
            navigate::move_cursor(app, 1);
            return;
        }
        _ => {}
    }

    let Some(edit) = app.edit.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match (key.modifiers, key.code) {
        // Word movement. Terminals disagree on whether word-jump arrives as
        // Ctrl+arrow or Alt+arrow, so take either.
        (m, KeyCode::Left)
            if m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::ALT) =>
        {
            edit.cursor = unicode::word_boundary_left(&edit.buffer, edit.cursor);
        }
        (m, KeyCode::Right)
            if m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::ALT) =>
        {
            edit.cursor = unicode::word_boundary_right(&edit.buffer, edit.cursor);
        }

        // Cursor movement
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.cursor = next;
            }
        }
        (_, KeyCode::Home) => {
            edit.cursor = 0;
        }
        (_, KeyCode::End) => {
            edit.cursor = edit.buffer.len();
        }

        // Kill to start of line: Ctrl+U
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            edit.buffer.drain(..edit.cursor);
            edit.cursor = 0;
        }

        // Delete the word behind the cursor
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::ALT) =>
        {
            let start = unicode::word_boundary_left(&edit.buffer, edit.cursor);
            edit.buffer.drain(start..edit.cursor);
            edit.cursor = start;
        }

        // Delete backward/forward by grapheme
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.buffer.drain(prev..edit.cursor);
                edit.cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.buffer.drain(edit.cursor..next);
            }
        }

        // Type character
        (m, KeyCode::Char(c))
            if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            edit.buffer.insert(edit.cursor, c);
            edit.cursor += c.len_utf8();
        }

        _ => {}
    }
}
