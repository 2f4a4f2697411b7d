//! Filtering of task lists.
//!
//! [`filter_tasks`] is a pure function over a task slice and a set of
//! [`FilterCriteria`]. It never reorders: the result keeps the relative order
//! of the input, so an empty criteria set yields the input unchanged.
//!
//! # Examples
//!
//! ```
//! use chrono::{NaiveDate, Utc};
//! use taskflow_protocol::{FilterCriteria, Status, Task, TaskFields, TaskId, filter_tasks};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let tasks = vec![
//!     Task::from_fields(TaskId::generate(), TaskFields::new("Write docs", today), Utc::now()),
//!     Task::from_fields(
//!         TaskId::generate(),
//!         TaskFields::new("Fix login bug", today).status(Status::Done),
//!         Utc::now(),
//!     ),
//! ];
//!
//! let criteria = FilterCriteria::default().with_search("FIX");
//! let hits = filter_tasks(&tasks, &criteria);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Fix login bug");
//! ```

use crate::task::{Priority, Status, Task};

/// The criteria a task list is narrowed by.
///
/// Each criterion left empty matches every task. Non-empty criteria are
/// combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against titles.
    pub search: String,
    /// Exact status to keep, or `None` for all.
    pub status: Option<Status>,
    /// Exact priority to keep, or `None` for all.
    pub priority: Option<Priority>,
}

impl FilterCriteria {
    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the status filter.
    #[must_use]
    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority filter.
    #[must_use]
    pub fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = priority;
        self
    }

    /// Returns `true` if no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.status.is_none() && self.priority.is_none()
    }

    /// Returns `true` if the task satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.status.is_none_or(|s| task.status == s)
            && self.priority.is_none_or(|p| task.priority == p)
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        task.title
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }
}

/// Returns the tasks that match `criteria`, in their original order.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    tasks.iter().filter(|task| criteria.matches(task)).collect()
}
