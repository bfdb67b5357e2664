pub mod header;
pub mod input_bar;
pub mod status_row;
pub mod task_rows;
pub mod themes_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

/// Main render function; dispatches to the per-view sub-renderers.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    match app.view {
        View::Tasks => {
            // Layout: header (2 rows) | task rows | add field | status row
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // title + rule
                    Constraint::Min(1),    // task rows
                    Constraint::Length(1), // add field
                    Constraint::Length(1), // status row
                ])
                .split(area);

            header::render_header(frame, app, chunks[0]);
            task_rows::render_task_rows(frame, app, chunks[1]);
            input_bar::render_input_bar(frame, app, chunks[2]);
            status_row::render_status_row(frame, app, chunks[3]);
        }
        View::Themes => {
            // The theme screen has no add field
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(area);

            header::render_header(frame, app, chunks[0]);
            themes_view::render_themes_view(frame, app, chunks[1]);
            status_row::render_status_row(frame, app, chunks[2]);
        }
    }
}
