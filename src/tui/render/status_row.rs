use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let mut spans: Vec<Span> = Vec::new();

    if let Some(ref message) = app.status_message {
        let style = if app.status_is_error {
            Style::default()
                .fg(app.theme.delete)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.push(Span::styled(message.clone(), style));
    }

    if app.show_key_hints {
        let hint = match (app.view, app.mode) {
            (View::Themes, _) => "esc back",
            (View::Tasks, Mode::Navigate) => {
                "a add  e edit  space done  f fav  d delete  t themes  q quit"
            }
            (View::Tasks, Mode::Insert) => "enter add  esc back",
            (View::Tasks, Mode::Edit) => "enter/esc save",
        };
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                hint,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    if spans.is_empty() {
        spans.push(Span::styled(" ".repeat(width), Style::default().bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
