//! Shared protocol types for the taskflow application.
//!
//! This crate defines the core types used across all taskflow components,
//! including tasks, filter criteria, messages, and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, status/priority enums, and the `Task` struct
//! - [`query`]: Filter criteria and the pure filtering function
//! - [`seed`]: Example tasks used on first run
//! - [`message`]: TUI event messages
//! - [`error`]: Validation errors
//!
//! # Examples
//!
//! ```
//! use chrono::{NaiveDate, Utc};
//! use taskflow_protocol::{Priority, Task, TaskFields, TaskId};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let fields = TaskFields::new("Ship release", today).priority(Priority::High);
//! fields.validate().expect("title is not blank");
//!
//! let task = Task::from_fields(TaskId::generate(), fields, Utc::now());
//! assert_eq!(task.priority, Priority::High);
//! ```

pub mod error;
pub mod message;
pub mod query;
pub mod seed;
pub mod task;

// Re-export primary types at crate root for convenience
pub use error::ValidationError;
pub use message::Message;
pub use query::{FilterCriteria, filter_tasks};
pub use task::{Priority, Status, Task, TaskFields, TaskId};
