use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the theme selector screen. Static for now: it names the
/// screen and shows the palette in use; nothing is selectable yet.
pub fn render_themes_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let height = area.height as usize;

    let swatches = [
        app.theme.accent,
        app.theme.favorite,
        app.theme.done,
        app.theme.delete,
        app.theme.field,
        app.theme.dim,
        app.theme.text,
    ];

    let mut lines: Vec<Line> = Vec::new();
    let top_pad = height.saturating_sub(4) / 2;
    for _ in 0..top_pad {
        lines.push(Line::from(""));
    }

    lines.push(centered(
        width,
        vec![Span::styled(
            "Theme Selector Page",
            Style::default()
                .fg(app.theme.text)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )],
    ));
    lines.push(Line::from(""));

    let mut swatch_spans: Vec<Span> = Vec::new();
    for (i, color) in swatches.iter().enumerate() {
        if i > 0 {
            swatch_spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        swatch_spans.push(Span::styled(
            "\u{2588}\u{2588}",
            Style::default().fg(*color).bg(bg),
        ));
    }
    lines.push(centered(width, swatch_spans));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pad a set of spans so they sit in the middle of the row.
fn centered(width: usize, spans: Vec<Span<'static>>) -> Line<'static> {
    let content: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(content) / 2;
    let mut padded: Vec<Span> = vec![Span::raw(" ".repeat(pad))];
    padded.extend(spans);
    Line::from(padded)
}
