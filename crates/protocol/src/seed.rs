//! First-run example tasks.
//!
//! When nothing is stored yet, the repository starts with a small set of
//! illustrative tasks, one per status, instead of an empty list.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use taskflow_protocol::{Status, seed::seed_tasks};
//!
//! let now = Utc::now();
//! let today = now.date_naive();
//! let tasks = seed_tasks(now, today);
//! assert_eq!(tasks.len(), 3);
//! assert!(tasks.iter().any(|t| t.status == Status::Done));
//! ```

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::task::{Priority, Status, Task, TaskFields, TaskId};

/// A builder for seed tasks due a number of days from today.
struct SeedBuilder {
    fields: TaskFields,
    due_in_days: u64,
}

impl SeedBuilder {
    fn new(title: &str, description: &str, today: NaiveDate) -> Self {
        Self {
            fields: TaskFields::new(title, today).description(description),
            due_in_days: 0,
        }
    }

    fn status(mut self, status: Status) -> Self {
        self.fields.status = status;
        self
    }

    fn priority(mut self, priority: Priority) -> Self {
        self.fields.priority = priority;
        self
    }

    fn due_in(mut self, days: u64) -> Self {
        self.due_in_days = days;
        self
    }

    fn build(self, now: DateTime<Utc>) -> Task {
        let mut fields = self.fields;
        fields.due_date = fields
            .due_date
            .checked_add_days(Days::new(self.due_in_days))
            .unwrap_or(fields.due_date);
        Task::from_fields(TaskId::generate(), fields, now)
    }
}

/// Returns the example tasks used on first run.
///
/// All tasks are stamped with `now`; due dates are relative to `today`.
#[must_use]
pub fn seed_tasks(now: DateTime<Utc>, today: NaiveDate) -> Vec<Task> {
    vec![
        SeedBuilder::new(
            "Design landing page",
            "Create hero section, CTA, and responsive grid.",
            today,
        )
        .status(Status::InProgress)
        .priority(Priority::High)
        .due_in(3)
        .build(now),
        SeedBuilder::new(
            "Write API documentation",
            "Cover auth, rate limits, and examples.",
            today,
        )
        .status(Status::Todo)
        .priority(Priority::Medium)
        .due_in(5)
        .build(now),
        SeedBuilder::new(
            "Fix login bug",
            "Resolve redirect loop on session refresh.",
            today,
        )
        .status(Status::Done)
        .priority(Priority::Critical)
        .build(now),
    ]
}
