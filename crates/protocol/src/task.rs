//! Task-related types.
//!
//! This module defines the core task types used throughout the taskflow
//! application, including task identifiers, status and priority enums, the
//! editable field set, and the task structure itself.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a task.
///
/// New identifiers are UUID v4 strings, but any string is accepted when
/// loading stored tasks so that records written with other id schemes
/// remain addressable.
///
/// # Examples
///
/// ```
/// use taskflow_protocol::TaskId;
///
/// let a = TaskId::generate();
/// let b = TaskId::generate();
/// assert_ne!(a, b);
/// assert!(!a.as_str().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh, globally unique identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The workflow status of a task.
///
/// Serialized as `"todo"`, `"inprogress"` and `"done"`.
///
/// # Examples
///
/// ```
/// use taskflow_protocol::Status;
///
/// assert_eq!(Status::default(), Status::Todo);
/// assert_eq!(Status::InProgress.label(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not started yet.
    #[default]
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl Status {
    /// Returns all statuses in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Todo, Self::InProgress, Self::Done]
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the value used in the persisted layout.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Returns the next status, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::Todo,
        }
    }

    /// Returns the previous status, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Todo => Self::Done,
            Self::InProgress => Self::Todo,
            Self::Done => Self::InProgress,
        }
    }
}

/// How urgent a task is.
///
/// Serialized as `"low"`, `"medium"`, `"high"` and `"critical"`.
///
/// # Examples
///
/// ```
/// use taskflow_protocol::Priority;
///
/// assert_eq!(Priority::default(), Priority::Medium);
/// assert_eq!(Priority::Critical.next(), Priority::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The usual.
    #[default]
    Medium,
    /// Should be handled soon.
    High,
    /// Drop everything.
    Critical,
}

impl Priority {
    /// Returns all priorities in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Returns the value used in the persisted layout.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Returns the next priority, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Critical,
            Self::Critical => Self::Low,
        }
    }

    /// Returns the previous priority, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Low => Self::Critical,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
            Self::Critical => Self::High,
        }
    }
}

/// The user-editable fields of a task.
///
/// This is what a create or update submits; `id` and `created_at` are never
/// part of it because they are owned by the repository.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskflow_protocol::{Priority, Status, TaskFields};
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let fields = TaskFields::with_defaults(today);
/// assert!(fields.title.is_empty());
/// assert_eq!(fields.status, Status::Todo);
/// assert_eq!(fields.priority, Priority::Medium);
/// assert_eq!(fields.due_date, today);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    /// Short summary; must not be blank.
    pub title: String,
    /// Free-form details.
    pub description: String,
    /// Workflow status.
    pub status: Status,
    /// Urgency.
    pub priority: Priority,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
}

impl TaskFields {
    /// Creates a field set with the given title and all other fields at
    /// their defaults.
    #[must_use]
    pub fn new(title: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            title: title.into(),
            ..Self::with_defaults(today)
        }
    }

    /// Returns the default field set: empty text, `Todo`, `Medium`, due
    /// `today`.
    #[must_use]
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: Status::default(),
            priority: Priority::default(),
            due_date: today,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    /// Checks that the fields may be persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankTitle`] if the title is empty after
    /// trimming whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        Ok(())
    }
}

/// A tracked unit of work.
///
/// Field names in the persisted JSON are `id`, `title`, `description`,
/// `status`, `priority`, `dueDate` and `createdAt` (milliseconds since the
/// Unix epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned once at creation.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Detailed description.
    #[serde(default)]
    pub description: String,
    /// Workflow status.
    #[serde(default)]
    pub status: Status,
    /// Urgency.
    #[serde(default)]
    pub priority: Priority,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
    /// When the task was created, never changed afterwards.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a task from its identity and editable fields.
    ///
    /// `created_at` is truncated to millisecond precision so that a task
    /// compares equal to itself after a trip through storage.
    #[must_use]
    pub fn from_fields(id: TaskId, fields: TaskFields, created_at: DateTime<Utc>) -> Self {
        let created_at = DateTime::from_timestamp_millis(created_at.timestamp_millis())
            .unwrap_or(created_at);
        Self {
            id,
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            due_date: fields.due_date,
            created_at,
        }
    }

    /// Returns a copy of the editable fields.
    #[must_use]
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
        }
    }

    /// Replaces every editable field, leaving `id` and `created_at` intact.
    pub fn apply(&mut self, fields: TaskFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.status = fields.status;
        self.priority = fields.priority;
        self.due_date = fields.due_date;
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    impl Arbitrary for Status {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(Status::Todo), Just(Status::InProgress), Just(Status::Done)].boxed()
        }
    }

    impl Arbitrary for Priority {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(Priority::Low),
                Just(Priority::Medium),
                Just(Priority::High),
                Just(Priority::Critical),
            ]
            .boxed()
        }
    }

    prop_compose! {
        fn arb_task()(
            title in "[a-zA-Z][a-zA-Z0-9 ]{0,50}",
            description in "[a-zA-Z0-9 .,!?]{0,200}",
            status in any::<Status>(),
            priority in any::<Priority>(),
            day_offset in 0i64..20_000,
            millis in 0i64..4_000_000_000_000,
        ) -> Task {
            let due = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + chrono::Duration::days(day_offset);
            let created = DateTime::from_timestamp_millis(millis).unwrap();
            Task::from_fields(
                TaskId::generate(),
                TaskFields::new(title, due)
                    .description(description)
                    .status(status)
                    .priority(priority),
                created,
            )
        }
    }

    proptest! {
        /// Tests that Task serialization roundtrips correctly, preserving all fields.
        #[test]
        fn task_roundtrip(task in arb_task()) {
            let json = serde_json::to_string(&task).expect("serialize");
            let parsed: Task = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(task, parsed);
        }

        /// Tests that Task serialization is deterministic.
        #[test]
        fn task_serialization_is_deterministic(task in arb_task()) {
            let json1 = serde_json::to_string(&task).expect("serialize 1");
            let json2 = serde_json::to_string(&task).expect("serialize 2");
            prop_assert_eq!(json1, json2);
        }

        /// Tests that the editable fields survive a fields/apply cycle.
        #[test]
        fn fields_then_apply_is_identity(task in arb_task()) {
            let mut copy = task.clone();
            copy.apply(task.fields());
            prop_assert_eq!(task, copy);
        }
    }
}
