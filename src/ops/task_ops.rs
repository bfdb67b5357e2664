use crate::model::{TaskId, TaskItem, TaskList, TaskStatus};

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task text is empty")]
    EmptyText,
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// Add a task from raw input. Leading/trailing whitespace is trimmed away;
/// input that trims to nothing is rejected and the list is untouched.
/// Returns the assigned id.
pub fn add_task(list: &mut TaskList, text: &str) -> Result<TaskId, TaskError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyText);
    }
    Ok(list.push(trimmed.to_string()))
}

/// Mark a task completed. Returns false (and changes nothing) for a
/// missing id; completing an already-completed task is also a no-op.
pub fn complete_task(list: &mut TaskList, id: TaskId) -> bool {
    set_status(list, id, TaskStatus::Completed)
}

/// Mark a task active again. Missing ids are a no-op.
pub fn uncomplete_task(list: &mut TaskList, id: TaskId) -> bool {
    set_status(list, id, TaskStatus::Active)
}

/// Flip a task between active and completed. Missing ids are a no-op.
pub fn toggle_complete(list: &mut TaskList, id: TaskId) -> bool {
    match list.get(id).map(|t| t.status) {
        Some(TaskStatus::Active) => complete_task(list, id),
        Some(TaskStatus::Completed) => uncomplete_task(list, id),
        None => false,
    }
}

/// Replace a task's text. Unlike `add_task` there is no validation: the
/// caller may store empty text. Missing ids are a no-op.
pub fn edit_task(list: &mut TaskList, id: TaskId, new_text: String) -> bool {
    match list.get_mut(id) {
        Some(task) => {
            task.text = new_text;
            true
        }
        None => false,
    }
}

/// Remove a task permanently. Missing ids are a no-op.
pub fn delete_task(list: &mut TaskList, id: TaskId) -> bool {
    list.remove(id).is_some()
}

/// Flip a task's favorite flag. Missing ids are a no-op.
/// The flag survives completion, so a favorite keeps its star in the done pile.
pub fn toggle_favorite(list: &mut TaskList, id: TaskId) -> bool {
    match list.get_mut(id) {
        Some(task) => {
            task.favorite = !task.favorite;
            true
        }
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// Active tasks, favorites first. Ordering is stable: within each group
/// tasks keep the order they were added in, and toggling a favorite moves
/// only that task across the group boundary.
pub fn active_view(list: &TaskList) -> Vec<&TaskItem> {
    let favorites = list
        .iter()
        .filter(|t| !t.status.is_completed() && t.favorite);
    let rest = list
        .iter()
        .filter(|t| !t.status.is_completed() && !t.favorite);
    favorites.chain(rest).collect()
}

/// Completed tasks in the order they were added. Favorites get no special
/// placement here.
pub fn completed_view(list: &TaskList) -> Vec<&TaskItem> {
    list.iter().filter(|t| t.status.is_completed()).collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn set_status(list: &mut TaskList, id: TaskId, status: TaskStatus) -> bool {
    match list.get_mut(id) {
        Some(task) => {
            task.status = status;
            true
        }
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a list from (text, favorite, completed) rows
    fn sample_list(rows: &[(&str, bool, bool)]) -> (TaskList, Vec<TaskId>) {
        let mut list = TaskList::new();
        let mut ids = Vec::new();
        for (text, favorite, completed) in rows {
            let id = add_task(&mut list, text).unwrap();
            if *favorite {
                toggle_favorite(&mut list, id);
            }
            if *completed {
                complete_task(&mut list, id);
            }
            ids.push(id);
        }
        (list, ids)
    }

    fn texts(view: &[&TaskItem]) -> Vec<String> {
        view.iter().map(|t| t.text.clone()).collect()
    }

    /// A deleted task's id, guaranteed absent from the list
    fn missing_id(list: &mut TaskList) -> TaskId {
        let id = add_task(list, "doomed").unwrap();
        delete_task(list, id);
        id
    }

    // --- add ---

    #[test]
    fn test_add_task_trims_whitespace() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "  Buy milk  ").unwrap();
        assert_eq!(list.get(id).unwrap().text, "Buy milk");
    }

    #[test]
    fn test_add_task_defaults() {
        let mut list = TaskList::new();
        let id = add_task(&mut list, "Buy milk").unwrap();
        let task = list.get(id).unwrap();
        assert!(!task.favorite);
        assert_eq!(task.status, TaskStatus::Active);
    }

    #[test]
    fn test_add_task_rejects_empty() {
        let mut list = TaskList::new();
        assert!(matches!(add_task(&mut list, ""), Err(TaskError::EmptyText)));
        assert!(matches!(
            add_task(&mut list, "   "),
            Err(TaskError::EmptyText)
        ));
        assert!(matches!(
            add_task(&mut list, "\t\n"),
            Err(TaskError::EmptyText)
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_task_ids_unique_across_deletes() {
        let mut list = TaskList::new();
        let a = add_task(&mut list, "one").unwrap();
        delete_task(&mut list, a);
        let b = add_task(&mut list, "two").unwrap();
        assert_ne!(a, b);
    }

    // --- complete / uncomplete ---

    #[test]
    fn test_complete_and_uncomplete() {
        let (mut list, ids) = sample_list(&[("Buy milk", false, false)]);

        assert!(complete_task(&mut list, ids[0]));
        assert_eq!(list.get(ids[0]).unwrap().status, TaskStatus::Completed);

        assert!(uncomplete_task(&mut list, ids[0]));
        assert_eq!(list.get(ids[0]).unwrap().status, TaskStatus::Active);
    }

    #[test]
    fn test_complete_idempotent() {
        let (mut list, ids) = sample_list(&[("Buy milk", false, true)]);
        assert!(complete_task(&mut list, ids[0]));
        assert_eq!(list.get(ids[0]).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn test_toggle_complete_round_trip() {
        let (mut list, ids) = sample_list(&[("Buy milk", false, false)]);

        assert!(toggle_complete(&mut list, ids[0]));
        assert!(list.get(ids[0]).unwrap().status.is_completed());

        assert!(toggle_complete(&mut list, ids[0]));
        assert!(!list.get(ids[0]).unwrap().status.is_completed());
    }

    #[test]
    fn test_complete_missing_id_is_noop() {
        let (mut list, _) = sample_list(&[("Buy milk", false, false)]);
        let gone = missing_id(&mut list);

        assert!(!complete_task(&mut list, gone));
        assert!(!uncomplete_task(&mut list, gone));
        assert!(!toggle_complete(&mut list, gone));
        assert_eq!(list.len(), 1);
    }

    // --- edit ---

    #[test]
    fn test_edit_task_replaces_text() {
        let (mut list, ids) = sample_list(&[("Buy milk", false, false)]);
        assert!(edit_task(&mut list, ids[0], "Buy oat milk".into()));
        assert_eq!(list.get(ids[0]).unwrap().text, "Buy oat milk");
    }

    #[test]
    fn test_edit_task_allows_empty_text() {
        // Adds validate, edits do not. An edit may blank a task out.
        let (mut list, ids) = sample_list(&[("Buy milk", false, false)]);
        assert!(edit_task(&mut list, ids[0], String::new()));
        assert_eq!(list.get(ids[0]).unwrap().text, "");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_edit_missing_id_is_noop() {
        let (mut list, _) = sample_list(&[("Buy milk", false, false)]);
        let gone = missing_id(&mut list);
        assert!(!edit_task(&mut list, gone, "nope".into()));
    }

    // --- delete ---

    #[test]
    fn test_delete_task_removes_permanently() {
        let (mut list, ids) = sample_list(&[("Buy milk", false, false), ("Walk dog", false, false)]);
        assert!(delete_task(&mut list, ids[0]));
        assert_eq!(list.len(), 1);
        assert!(list.get(ids[0]).is_none());
        assert!(list.get(ids[1]).is_some());
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let (mut list, ids) = sample_list(&[("Buy milk", false, false)]);
        assert!(delete_task(&mut list, ids[0]));
        // Second delete finds nothing
        assert!(!delete_task(&mut list, ids[0]));
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_completed_task() {
        let (mut list, ids) = sample_list(&[("Buy milk", false, true)]);
        assert!(delete_task(&mut list, ids[0]));
        assert!(completed_view(&list).is_empty());
    }

    // --- favorite ---

    #[test]
    fn test_toggle_favorite_flips_flag() {
        let (mut list, ids) = sample_list(&[("Buy milk", false, false)]);

        assert!(toggle_favorite(&mut list, ids[0]));
        assert!(list.get(ids[0]).unwrap().favorite);

        assert!(toggle_favorite(&mut list, ids[0]));
        assert!(!list.get(ids[0]).unwrap().favorite);
    }

    #[test]
    fn test_favorite_survives_completion() {
        let (mut list, ids) = sample_list(&[("Buy milk", true, false)]);
        complete_task(&mut list, ids[0]);
        assert!(list.get(ids[0]).unwrap().favorite);
    }

    #[test]
    fn test_toggle_favorite_missing_id_is_noop() {
        let (mut list, _) = sample_list(&[("Buy milk", false, false)]);
        let gone = missing_id(&mut list);
        assert!(!toggle_favorite(&mut list, gone));
    }

    // --- views ---

    #[test]
    fn test_active_view_favorites_first_stable() {
        let (list, _) = sample_list(&[
            ("A", false, false),
            ("B", true, false),
            ("C", false, false),
            ("D", true, false),
        ]);
        assert_eq!(texts(&active_view(&list)), ["B", "D", "A", "C"]);
    }

    #[test]
    fn test_active_view_excludes_completed() {
        let (list, _) = sample_list(&[
            ("A", false, false),
            ("B", true, true),
            ("C", false, true),
            ("D", true, false),
        ]);
        assert_eq!(texts(&active_view(&list)), ["D", "A"]);
    }

    #[test]
    fn test_toggle_favorite_moves_only_that_task() {
        let (mut list, ids) = sample_list(&[
            ("A", false, false),
            ("B", true, false),
            ("C", false, false),
        ]);
        toggle_favorite(&mut list, ids[2]);
        // C joins the favorites after B; A stays where it was
        assert_eq!(texts(&active_view(&list)), ["B", "C", "A"]);

        toggle_favorite(&mut list, ids[1]);
        assert_eq!(texts(&active_view(&list)), ["C", "A", "B"]);
    }

    #[test]
    fn test_completed_view_insertion_order_ignores_favorites() {
        let (list, _) = sample_list(&[
            ("A", false, true),
            ("B", true, true),
            ("C", false, true),
        ]);
        assert_eq!(texts(&completed_view(&list)), ["A", "B", "C"]);
    }

    #[test]
    fn test_uncomplete_returns_to_insertion_slot() {
        let (mut list, ids) = sample_list(&[
            ("A", false, false),
            ("B", false, true),
            ("C", false, false),
        ]);
        uncomplete_task(&mut list, ids[1]);
        // B never moved in the underlying list, so it reappears between A and C
        assert_eq!(texts(&active_view(&list)), ["A", "B", "C"]);
    }

    // --- end to end ---

    #[test]
    fn test_buy_milk_session() {
        let mut list = TaskList::new();

        let id = add_task(&mut list, "Buy milk").unwrap();
        assert!(matches!(
            add_task(&mut list, ""),
            Err(TaskError::EmptyText)
        ));

        toggle_favorite(&mut list, id);
        complete_task(&mut list, id);

        assert!(active_view(&list).is_empty());
        assert_eq!(texts(&completed_view(&list)), ["Buy milk"]);
        assert!(completed_view(&list)[0].favorite);
    }
}
