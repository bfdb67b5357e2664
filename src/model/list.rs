use super::task::{TaskId, TaskItem};

/// The session's tasks, in the order they were added.
///
/// Nothing here is persisted; the list lives and dies with the process.
/// Completion does not move a task; the working and done views are derived
/// by the read operations in `ops`.
#[derive(Debug)]
pub struct TaskList {
    tasks: Vec<TaskItem>,
    next_id: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        TaskList {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a task with a fresh id. Text is stored as given.
    pub fn push(&mut self, text: String) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(TaskItem::new(id, text));
        id
    }

    /// Remove a task by id, returning it if it was present
    pub fn remove(&mut self, id: TaskId) -> Option<TaskItem> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskItem> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut TaskItem> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// All tasks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TaskItem> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
