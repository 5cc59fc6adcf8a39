//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Tasks live in
//! memory only and are gone on reload.

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::tasks;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks on the Tasks page
    pub tasks: Vec<Task>,
    /// Id handed to the next created task
    pub next_task_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_task_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task from raw input; returns its id, or `None` for blank input
pub fn store_add_task(store: &AppStore, text: &str) -> Option<u32> {
    let id = *store.next_task_id().read_untracked();
    let task = tasks::new_task(id, text, Utc::now())?;
    *store.next_task_id().write() = id + 1;
    store.tasks().write().push(task);
    Some(id)
}

/// Toggle a task's completed flag by ID
pub fn store_toggle_task(store: &AppStore, task_id: u32) {
    if !tasks::toggle(&mut store.tasks().write(), task_id) {
        log::warn!("[TASKS] Toggle for unknown task {}", task_id);
    }
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: u32) {
    tasks::remove(&mut store.tasks().write(), task_id);
}

/// Remove every completed task
pub fn store_clear_completed(store: &AppStore) {
    let removed = tasks::clear_completed(&mut store.tasks().write());
    log::debug!("[TASKS] Cleared {} completed tasks", removed);
}
