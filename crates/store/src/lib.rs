//! Task persistence for the taskflow application.
//!
//! # Overview
//!
//! - [`storage`]: the [`KeyValueStorage`] seam with file and in-memory
//!   backends
//! - [`store`]: [`TaskStore`], best-effort JSON persistence of task lists
//! - [`repository`]: [`TaskRepository`], the session's task collection
//! - [`error`]: storage and repository errors
//!
//! # Examples
//!
//! ```no_run
//! use taskflow_store::{FileStorage, RepositoryOptions, TaskRepository, TaskStore};
//!
//! # fn example() -> taskflow_store::Result<()> {
//! let storage = FileStorage::with_path("/tmp/taskflow/storage")?;
//! let repo = TaskRepository::open(TaskStore::new(storage), RepositoryOptions::new("tm_tasks_v1"));
//! println!("{} tasks", repo.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod repository;
pub mod storage;
pub mod store;

pub use error::{RepositoryError, Result, StorageError};
pub use repository::{Clock, RepositoryOptions, SystemClock, TaskRepository};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::TaskStore;
