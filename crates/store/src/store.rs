//! Persistent task store.
//!
//! [`TaskStore`] serializes task lists as JSON arrays into a
//! [`KeyValueStorage`]. Persistence is best-effort: read failures fall back
//! to a caller-supplied value and write failures are reported as `false`.
//! Every failure is logged and none reaches the caller as an error.

use std::fmt;

use taskflow_protocol::Task;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::storage::KeyValueStorage;

/// Reads and writes task lists under storage keys.
///
/// # Examples
///
/// ```
/// use taskflow_store::{MemoryStorage, TaskStore};
///
/// let mut store = TaskStore::new(MemoryStorage::new());
/// assert!(store.load("tasks", Vec::new()).is_empty());
/// assert!(store.save("tasks", &[]));
/// assert_eq!(store.load_existing("tasks"), Some(Vec::new()));
/// ```
pub struct TaskStore {
    storage: Box<dyn KeyValueStorage>,
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore").finish_non_exhaustive()
    }
}

impl TaskStore {
    /// Creates a store over the given storage backend.
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Loads the tasks under `key`, returning `fallback` if nothing usable
    /// is stored.
    #[must_use]
    pub fn load(&self, key: &str, fallback: Vec<Task>) -> Vec<Task> {
        self.load_existing(key).unwrap_or(fallback)
    }

    /// Loads the tasks under `key`.
    ///
    /// Returns `None` if the key is missing, the value is not a JSON array
    /// of tasks, or the backend fails.
    #[instrument(skip(self))]
    pub fn load_existing(&self, key: &str) -> Option<Vec<Task>> {
        match self.try_load(key) {
            Ok(Some(tasks)) => {
                debug!(tasks = tasks.len(), "loaded stored tasks");
                Some(tasks)
            }
            Ok(None) => {
                debug!("no stored tasks");
                None
            }
            Err(e) => {
                warn!(error = %e, "ignoring unreadable stored tasks");
                None
            }
        }
    }

    /// Writes `tasks` under `key`, returning whether the write succeeded.
    #[instrument(skip(self, tasks), fields(tasks = tasks.len()))]
    pub fn save(&mut self, key: &str, tasks: &[Task]) -> bool {
        match self.try_save(key, tasks) {
            Ok(()) => {
                debug!("tasks saved");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to save tasks");
                false
            }
        }
    }

    fn try_load(&self, key: &str) -> Result<Option<Vec<Task>>> {
        match self.storage.get(key)? {
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
            None => Ok(None),
        }
    }

    fn try_save(&mut self, key: &str, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string(tasks)?;
        self.storage.set(key, &content)
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::{DateTime, Days, NaiveDate};
    use proptest::prelude::*;
    use taskflow_protocol::{Priority, Status, TaskFields, TaskId};

    fn arb_status() -> impl Strategy<Value = Status> {
        prop_oneof![Just(Status::Todo), Just(Status::InProgress), Just(Status::Done)]
    }

    fn arb_priority() -> impl Strategy<Value = Priority> {
        prop_oneof![
            Just(Priority::Low),
            Just(Priority::Medium),
            Just(Priority::High),
            Just(Priority::Critical),
        ]
    }

    prop_compose! {
        fn arb_task()(
            id in "[a-z0-9-]{1,36}",
            title in "\\PC{1,40}",
            description in "\\PC{0,80}",
            status in arb_status(),
            priority in arb_priority(),
            day_offset in 0u64..20_000,
            millis in 0i64..4_000_000_000_000,
        ) -> Task {
            let due = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Days::new(day_offset);
            Task::from_fields(
                TaskId::from(id),
                TaskFields::new(title, due)
                    .description(description)
                    .status(status)
                    .priority(priority),
                DateTime::from_timestamp_millis(millis).unwrap(),
            )
        }
    }

    proptest! {
        /// Tests that whatever is saved is loaded back field-for-field.
        #[test]
        fn save_then_load_reproduces_sequence(tasks in prop::collection::vec(arb_task(), 0..20)) {
            let mut store = TaskStore::new(MemoryStorage::new());
            prop_assert!(store.save("tasks", &tasks));
            prop_assert_eq!(store.load("tasks", Vec::new()), tasks);
        }

        /// Tests that arbitrary stored text never panics and yields the fallback
        /// unless it is a valid task array.
        #[test]
        fn garbage_never_panics(raw in "\\PC{0,200}") {
            let mut storage = MemoryStorage::new();
            storage.set("tasks", &raw).unwrap();
            let store = TaskStore::new(storage);
            let loaded = store.load("tasks", Vec::new());
            if serde_json::from_str::<Vec<Task>>(&raw).is_err() {
                prop_assert!(loaded.is_empty());
            }
        }
    }
}
