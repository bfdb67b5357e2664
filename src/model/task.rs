use std::fmt;

/// Identifier for a task, unique within the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub(crate) u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a task lives: the working list or the done pile below it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Active,
    Completed,
}

impl TaskStatus {
    /// The character shown in the status column
    pub fn symbol(self) -> char {
        match self {
            TaskStatus::Active => '·',
            TaskStatus::Completed => '\u{2714}', // ✔
        }
    }

    pub fn is_completed(self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: TaskId,
    /// Display text; edits may leave this empty, adds may not
    pub text: String,
    pub favorite: bool,
    pub status: TaskStatus,
}

impl TaskItem {
    /// Create a fresh task: not a favorite, not completed
    pub fn new(id: TaskId, text: String) -> Self {
        TaskItem {
            id,
            text,
            favorite: false,
            status: TaskStatus::Active,
        }
    }
}
