//! Task List Utilities
//!
//! Pure helpers behind the Tasks page store.

use chrono::{DateTime, Utc};

use crate::models::{Task, TaskFilter};

/// Build a task from user input. Blank text yields `None`.
pub fn new_task(id: u32, text: &str, now: DateTime<Utc>) -> Option<Task> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(Task {
        id,
        text: text.to_string(),
        completed: false,
        created_at: now,
    })
}

pub fn visible_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Number of tasks not yet completed
pub fn remaining(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

/// Flip completion; returns false if no task has `id`
pub fn toggle(tasks: &mut [Task], id: u32) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

pub fn remove(tasks: &mut Vec<Task>, id: u32) {
    tasks.retain(|t| t.id != id);
}

/// Drop completed tasks, returning how many were removed
pub fn clear_completed(tasks: &mut Vec<Task>) -> usize {
    let before = tasks.len();
    tasks.retain(|t| !t.completed);
    before - tasks.len()
}
