use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

pub const PLACEHOLDER: &str = "Write a task";

/// Render the add-task field (bottom of the task view)
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let inserting = app.mode == Mode::Insert;
    let mut spans: Vec<Span> = Vec::new();

    // "+" add affordance, bright while the field has focus
    let plus_style = if inserting {
        Style::default()
            .fg(app.theme.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    spans.push(Span::styled(" ", Style::default().bg(bg)));
    spans.push(Span::styled("+", plus_style));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    if inserting {
        let text_style = Style::default().fg(app.theme.text).bg(bg);
        let cursor_style = Style::default().fg(app.theme.background).bg(app.theme.text);

        let before = &app.input[..app.input_cursor];
        if !before.is_empty() {
            spans.push(Span::styled(before.to_string(), text_style));
        }
        let under = unicode::grapheme_at(&app.input, app.input_cursor);
        if under.is_empty() {
            spans.push(Span::styled(" ", cursor_style));
        } else {
            spans.push(Span::styled(under.to_string(), cursor_style));
            let rest = &app.input[app.input_cursor + under.len()..];
            if !rest.is_empty() {
                spans.push(Span::styled(rest.to_string(), text_style));
            }
        }
        if app.input.is_empty() {
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default().fg(app.theme.field).bg(bg),
            ));
        }
    } else if app.input.is_empty() {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.field).bg(bg),
        ));
    } else {
        // A draft left behind by Esc stays visible, parked
        spans.push(Span::styled(
            app.input.clone(),
            Style::default().fg(app.theme.field).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
