//! Frontend Models
//!
//! Task list entities. Posts and users come from `post_feed`.

use chrono::{DateTime, Utc};

pub use post_feed::{Post, User};

/// A to-do entry on the Tasks page
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u32,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}
