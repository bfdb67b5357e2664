use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::TaskItem;
use crate::tui::app::{App, EditState, FlatRow, Mode};
use crate::util::unicode;

/// Columns to the left of the task text: selection bar, completion
/// circle and their spacing.
const TEXT_PREFIX_WIDTH: usize = 6;
/// Columns reserved at the right edge: star, delete marker, margin.
const ACTIONS_WIDTH: usize = 4;

/// Render the task list content area
pub fn render_task_rows(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = app.flat_rows();
    let visible_height = area.height as usize;

    // Keep the cursor inside the window
    app.cursor = app.cursor.min(rows.len().saturating_sub(1));
    if app.cursor < app.scroll {
        app.scroll = app.cursor;
    } else if app.cursor >= app.scroll + visible_height {
        app.scroll = (app.cursor + 1).saturating_sub(visible_height);
    }

    if rows.is_empty() {
        let empty = Paragraph::new(" No tasks yet")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let end = rows.len().min(app.scroll + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);

    for (row, idx) in rows[app.scroll..end].iter().zip(app.scroll..end) {
        let is_cursor = idx == app.cursor;
        match row {
            FlatRow::Task(id) => {
                if let Some(task) = app.tasks.get(*id) {
                    lines.push(render_task_line(app, task, is_cursor, area.width as usize));
                }
            }
            FlatRow::DoneSeparator => {
                lines.push(render_done_separator(app, area.width as usize, is_cursor));
            }
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn render_task_line(app: &App, task: &TaskItem, is_cursor: bool, width: usize) -> Line<'static> {
    let row_bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let mut spans: Vec<Span> = Vec::new();

    // Column 0 reservation
    if is_cursor {
        spans.push(Span::styled(
            "\u{258E}".to_string(),
            Style::default()
                .fg(app.theme.selection_border)
                .bg(app.theme.selection_bg),
        ));
    } else {
        spans.push(Span::styled(
            " ".to_string(),
            Style::default().bg(app.theme.background),
        ));
    }

    // Completion circle
    let mut circle_style = Style::default()
        .fg(app.theme.status_color(task.status))
        .bg(row_bg);
    if task.status.is_completed() {
        circle_style = circle_style.add_modifier(Modifier::BOLD);
    }
    spans.push(Span::styled(" ".to_string(), Style::default().bg(row_bg)));
    spans.push(Span::styled(
        format!("({})", task.status.symbol()),
        circle_style,
    ));
    spans.push(Span::styled(" ".to_string(), Style::default().bg(row_bg)));

    // Text, or the edit buffer when this row is being edited
    let edit = match (&app.mode, &app.edit) {
        (Mode::Edit, Some(e)) if e.id == task.id => Some(e),
        _ => None,
    };
    let text_width = match edit {
        Some(edit) => push_edit_spans(&mut spans, app, edit, row_bg),
        None => {
            let avail = width.saturating_sub(TEXT_PREFIX_WIDTH + ACTIONS_WIDTH + 1);
            let shown = unicode::truncate_to_width(&task.text, avail);
            let style = if task.status.is_completed() {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if task.favorite {
                Style::default().fg(app.theme.favorite).bg(row_bg)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            let shown_width = unicode::display_width(&shown);
            spans.push(Span::styled(shown, style));
            shown_width
        }
    };

    // Right-aligned actions: favorite star + delete marker
    let used = TEXT_PREFIX_WIDTH + text_width;
    if used + ACTIONS_WIDTH <= width {
        spans.push(Span::styled(
            " ".repeat(width - used - ACTIONS_WIDTH),
            Style::default().bg(row_bg),
        ));
        if task.favorite {
            spans.push(Span::styled(
                "\u{2605}".to_string(),
                Style::default().fg(app.theme.favorite).bg(row_bg),
            ));
        } else {
            spans.push(Span::styled(
                "\u{2606}".to_string(),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }
        spans.push(Span::styled(" ".to_string(), Style::default().bg(row_bg)));
        if app.is_pending_delete(task.id) {
            spans.push(Span::styled(
                "\u{25A0}".to_string(),
                Style::default()
                    .fg(app.theme.delete)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                "\u{25A1}".to_string(),
                Style::default().fg(app.theme.delete).bg(row_bg),
            ));
        }
        spans.push(Span::styled(" ".to_string(), Style::default().bg(row_bg)));
    }

    Line::from(spans)
}

/// Push the edit buffer with a block cursor, returning its display width.
fn push_edit_spans(
    spans: &mut Vec<Span<'static>>,
    app: &App,
    edit: &EditState,
    row_bg: Color,
) -> usize {
    let edit_style = Style::default()
        .fg(app.theme.text)
        .bg(row_bg)
        .add_modifier(Modifier::BOLD);
    let cursor_style = Style::default().fg(app.theme.background).bg(app.theme.text);

    let before = &edit.buffer[..edit.cursor];
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), edit_style));
    }
    let under = unicode::grapheme_at(&edit.buffer, edit.cursor);
    if under.is_empty() {
        // Cursor past the end: block on the trailing cell
        spans.push(Span::styled(" ".to_string(), cursor_style));
        unicode::display_width(&edit.buffer) + 1
    } else {
        spans.push(Span::styled(under.to_string(), cursor_style));
        let rest = &edit.buffer[edit.cursor + under.len()..];
        if !rest.is_empty() {
            spans.push(Span::styled(rest.to_string(), edit_style));
        }
        unicode::display_width(&edit.buffer)
    }
}

fn render_done_separator(app: &App, width: usize, is_cursor: bool) -> Line<'static> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = Vec::new();

    // Column 0 reservation
    if is_cursor {
        spans.push(Span::styled(
            "\u{258E}".to_string(),
            Style::default()
                .fg(app.theme.selection_border)
                .bg(app.theme.selection_bg),
        ));
    } else {
        spans.push(Span::styled(
            " ".to_string(),
            Style::default().bg(app.theme.background),
        ));
    }

    let label = " done ";
    let dashes_before = 2;
    let dashes_after = width.saturating_sub(label.len() + dashes_before + 2);

    let line_text = format!(
        "{}{}{}",
        "\u{2500}".repeat(dashes_before),
        label,
        "\u{2500}".repeat(dashes_after.max(2))
    );

    spans.push(Span::styled(line_text, style));
    Line::from(spans)
}
