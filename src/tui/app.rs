use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{AppConfig, TaskId, TaskList};
use crate::ops;

use super::input;
use super::render;
use super::theme::Theme;

/// How long a delete stays pending before it is applied
pub const DELETE_DELAY: Duration = Duration::from_millis(200);

/// Idle poll interval when no delete deadline is closer
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The task list
    Tasks,
    /// The theme picker
    Themes,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the add field
    Insert,
    /// Editing a task's text in place
    Edit,
}

/// A row in the task view's visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatRow {
    Task(TaskId),
    /// The `── done ──` line between active and completed tasks
    DoneSeparator,
}

/// An in-place edit of one task's text
#[derive(Debug, Clone)]
pub struct EditState {
    pub id: TaskId,
    pub buffer: String,
    /// Byte offset of the cursor in `buffer`
    pub cursor: usize,
}

/// A delete that has been requested but not applied yet
#[derive(Debug, Clone, Copy)]
pub struct PendingDelete {
    pub id: TaskId,
    pub fire_at: Instant,
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the flat visible rows
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll: usize,
    /// The add field at the bottom of the task view
    pub input: String,
    /// Byte offset of the cursor in `input`
    pub input_cursor: usize,
    /// Active in-place edit, if any
    pub edit: Option<EditState>,
    /// Deletes waiting for their deadline
    pub pending_deletes: Vec<PendingDelete>,
    /// One-line message for the status row
    pub status_message: Option<String>,
    pub status_is_error: bool,
    /// Date shown in the header, fixed at startup
    pub header_date: String,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            tasks: TaskList::new(),
            view: View::Tasks,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll: 0,
            input: String::new(),
            input_cursor: 0,
            edit: None,
            pending_deletes: Vec::new(),
            status_message: None,
            status_is_error: false,
            header_date: chrono::Local::now().format("%a %-d %b").to_string(),
        }
    }

    /// Build the visible rows: active tasks favorites-first, then a
    /// separator and the done pile (only when something is done)
    pub fn flat_rows(&self) -> Vec<FlatRow> {
        let mut rows: Vec<FlatRow> = ops::active_view(&self.tasks)
            .iter()
            .map(|t| FlatRow::Task(t.id))
            .collect();
        let completed = ops::completed_view(&self.tasks);
        if !completed.is_empty() {
            rows.push(FlatRow::DoneSeparator);
            rows.extend(completed.iter().map(|t| FlatRow::Task(t.id)));
        }
        rows
    }

    /// The task under the cursor, if the cursor is on a task row
    pub fn selected_task_id(&self) -> Option<TaskId> {
        match self.flat_rows().get(self.cursor) {
            Some(FlatRow::Task(id)) => Some(*id),
            _ => None,
        }
    }

    /// Put the cursor on the row showing `id`, wherever sorting moved it
    pub fn move_cursor_to(&mut self, id: TaskId) {
        let rows = self.flat_rows();
        if let Some(idx) = rows
            .iter()
            .position(|r| matches!(r, FlatRow::Task(t) if *t == id))
        {
            self.cursor = idx;
        }
    }

    /// Keep the cursor on a selectable row after rows changed
    pub fn clamp_cursor(&mut self) {
        let rows = self.flat_rows();
        if rows.is_empty() {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.min(rows.len() - 1);
        if rows[self.cursor] == FlatRow::DoneSeparator {
            if self.cursor > 0 {
                self.cursor -= 1;
            } else if rows.len() > 1 {
                self.cursor += 1;
            }
        }
    }

    // --- status line ---

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    // --- in-place edit ---

    /// Enter edit mode on a task, cursor at the end of its text
    pub fn start_edit(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.get(id) {
            let buffer = task.text.clone();
            let cursor = buffer.len();
            self.edit = Some(EditState { id, buffer, cursor });
            self.mode = Mode::Edit;
        }
    }

    /// Leave edit mode, writing the buffer back. Every way out of an edit
    /// lands here; there is no cancel. If the task was deleted while the
    /// edit was open the write-back quietly misses.
    pub fn commit_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            if !ops::edit_task(&mut self.tasks, edit.id, edit.buffer) {
                debug!(id = %edit.id, "edit target vanished before commit");
            }
        }
        self.mode = Mode::Navigate;
    }

    // --- deferred deletes ---

    pub fn is_pending_delete(&self, id: TaskId) -> bool {
        self.pending_deletes.iter().any(|p| p.id == id)
    }

    /// Arm a delete to fire after `DELETE_DELAY`. Pressing delete again on
    /// the same task does not push the deadline back.
    pub fn schedule_delete(&mut self, id: TaskId, now: Instant) {
        if self.is_pending_delete(id) {
            return;
        }
        self.pending_deletes.push(PendingDelete {
            id,
            fire_at: now + DELETE_DELAY,
        });
    }

    /// When the next pending delete wants to run
    pub fn next_delete_deadline(&self) -> Option<Instant> {
        self.pending_deletes.iter().map(|p| p.fire_at).min()
    }

    /// Apply every pending delete whose deadline has passed. A deadline
    /// whose task is already gone drops silently.
    pub fn apply_due_deletes(&mut self, now: Instant) {
        if self.pending_deletes.is_empty() {
            return;
        }
        let mut fired = Vec::new();
        self.pending_deletes.retain(|p| {
            if now >= p.fire_at {
                fired.push(p.id);
                false
            } else {
                true
            }
        });
        for id in fired {
            if ops::delete_task(&mut self.tasks, id) {
                debug!(%id, "deferred delete applied");
            }
        }
        self.clamp_cursor();
    }
}

/// Run the TUI application
pub fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("session started");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(tasks = app.tasks.len(), "session ended");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Wake up in time for the nearest delete deadline
        let timeout = match app.next_delete_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(POLL_INTERVAL),
            None => POLL_INTERVAL,
        };

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        app.apply_due_deletes(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(texts: &[&str]) -> App {
        let mut app = App::new(&AppConfig::default());
        for text in texts {
            ops::add_task(&mut app.tasks, text).unwrap();
        }
        app
    }

    #[test]
    fn flat_rows_no_separator_without_completed() {
        let app = app_with(&["A", "B"]);
        assert_eq!(app.flat_rows().len(), 2);
        assert!(!app.flat_rows().contains(&FlatRow::DoneSeparator));
    }

    #[test]
    fn flat_rows_separator_sits_between_sections() {
        let mut app = app_with(&["A", "B", "C"]);
        let id = app.selected_task_id().unwrap();
        ops::complete_task(&mut app.tasks, id);

        let rows = app.flat_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2], FlatRow::DoneSeparator);
        assert_eq!(rows[3], FlatRow::Task(id));
    }

    #[test]
    fn clamp_cursor_steps_off_separator() {
        let mut app = app_with(&["A", "B"]);
        // Complete B: rows are [A, sep, B]
        let rows = app.flat_rows();
        let FlatRow::Task(b) = rows[1] else {
            panic!("expected task row")
        };
        ops::complete_task(&mut app.tasks, b);

        app.cursor = 1;
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn clamp_cursor_steps_down_when_separator_is_first() {
        let mut app = app_with(&["A"]);
        let id = app.selected_task_id().unwrap();
        ops::complete_task(&mut app.tasks, id);

        // Rows are [sep, A]
        app.cursor = 0;
        app.clamp_cursor();
        assert_eq!(app.cursor, 1);
        assert_eq!(app.selected_task_id(), Some(id));
    }

    #[test]
    fn schedule_delete_does_not_reschedule() {
        let mut app = app_with(&["A"]);
        let id = app.selected_task_id().unwrap();
        let now = Instant::now();

        app.schedule_delete(id, now);
        let first = app.pending_deletes[0].fire_at;
        app.schedule_delete(id, now + Duration::from_millis(150));
        assert_eq!(app.pending_deletes.len(), 1);
        assert_eq!(app.pending_deletes[0].fire_at, first);
    }

    #[test]
    fn apply_due_deletes_waits_for_deadline() {
        let mut app = app_with(&["A", "B"]);
        let id = app.selected_task_id().unwrap();
        let now = Instant::now();
        app.schedule_delete(id, now);

        app.apply_due_deletes(now);
        assert_eq!(app.tasks.len(), 2);

        app.apply_due_deletes(now + DELETE_DELAY);
        assert_eq!(app.tasks.len(), 1);
        assert!(app.tasks.get(id).is_none());
        assert!(app.pending_deletes.is_empty());
    }

    #[test]
    fn due_delete_for_missing_task_drops_silently() {
        let mut app = app_with(&["A"]);
        let id = app.selected_task_id().unwrap();
        let now = Instant::now();
        app.schedule_delete(id, now);
        ops::delete_task(&mut app.tasks, id);

        app.apply_due_deletes(now + DELETE_DELAY);
        assert!(app.pending_deletes.is_empty());
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn deletes_on_several_rows_pend_independently() {
        let mut app = app_with(&["A", "B"]);
        let rows = app.flat_rows();
        let FlatRow::Task(a) = rows[0] else { panic!() };
        let FlatRow::Task(b) = rows[1] else { panic!() };

        let now = Instant::now();
        app.schedule_delete(a, now);
        app.schedule_delete(b, now + Duration::from_millis(50));

        assert_eq!(app.next_delete_deadline(), Some(now + DELETE_DELAY));

        app.apply_due_deletes(now + DELETE_DELAY);
        assert!(app.tasks.get(a).is_none());
        assert!(app.tasks.get(b).is_some());

        app.apply_due_deletes(now + Duration::from_millis(50) + DELETE_DELAY);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn commit_edit_writes_buffer_back() {
        let mut app = app_with(&["Buy milk"]);
        let id = app.selected_task_id().unwrap();

        app.start_edit(id);
        assert_eq!(app.mode, Mode::Edit);
        let edit = app.edit.as_mut().unwrap();
        assert_eq!(edit.cursor, edit.buffer.len());
        edit.buffer = "Buy oat milk".into();

        app.commit_edit();
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.edit.is_none());
        assert_eq!(app.tasks.get(id).unwrap().text, "Buy oat milk");
    }

    #[test]
    fn commit_edit_on_deleted_task_is_noop() {
        let mut app = app_with(&["Buy milk"]);
        let id = app.selected_task_id().unwrap();
        app.start_edit(id);
        ops::delete_task(&mut app.tasks, id);

        app.commit_edit();
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.tasks.is_empty());
    }
}
