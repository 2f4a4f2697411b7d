//! The in-memory task collection.
//!
//! [`TaskRepository`] owns every task for the session. It keeps them in
//! insertion order, hands out identities, and writes the full collection
//! through its [`TaskStore`] after each successful mutation.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Local, NaiveDate, Utc};
use taskflow_protocol::seed::seed_tasks;
use taskflow_protocol::{Task, TaskFields, TaskId};
use tracing::{debug, info, instrument, warn};

use crate::error::RepositoryError;
use crate::store::TaskStore;

/// Source of the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date in local time.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// How a repository is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOptions {
    /// Storage key the collection lives under.
    pub storage_key: String,
    /// Start with the example tasks when nothing usable is stored.
    pub seed_on_first_run: bool,
}

impl RepositoryOptions {
    /// Creates options for `storage_key` with seeding enabled.
    #[must_use]
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            seed_on_first_run: true,
        }
    }

    /// Sets whether to seed on first run.
    #[must_use]
    pub fn seed_on_first_run(mut self, seed: bool) -> Self {
        self.seed_on_first_run = seed;
        self
    }
}

/// Ordered collection of tasks, persisted on every change.
///
/// # Examples
///
/// ```
/// use taskflow_store::{MemoryStorage, RepositoryOptions, TaskRepository, TaskStore};
/// use taskflow_protocol::TaskFields;
///
/// let store = TaskStore::new(MemoryStorage::new());
/// let options = RepositoryOptions::new("tasks").seed_on_first_run(false);
/// let mut repo = TaskRepository::open(store, options);
///
/// let fields = TaskFields::new("Buy milk", repo.today());
/// let task = repo.create(fields).unwrap();
/// assert_eq!(repo.list().len(), 1);
/// assert!(repo.delete(&task.id));
/// assert!(repo.list().is_empty());
/// ```
pub struct TaskRepository {
    store: TaskStore,
    storage_key: String,
    tasks: Vec<Task>,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for TaskRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskRepository")
            .field("storage_key", &self.storage_key)
            .field("tasks", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

impl TaskRepository {
    /// Opens the repository using the system clock.
    ///
    /// See [`open_with_clock`](Self::open_with_clock).
    pub fn open(store: TaskStore, options: RepositoryOptions) -> Self {
        Self::open_with_clock(store, options, SystemClock)
    }

    /// Opens the repository, reading the collection stored under the
    /// configured key.
    ///
    /// If nothing usable is stored and seeding is enabled, the example tasks
    /// are loaded and written through. Records with a blank title or
    /// repeating an earlier id are dropped.
    #[instrument(skip(store, clock), fields(key = %options.storage_key))]
    pub fn open_with_clock(
        mut store: TaskStore,
        options: RepositoryOptions,
        clock: impl Clock + 'static,
    ) -> Self {
        let RepositoryOptions {
            storage_key,
            seed_on_first_run,
        } = options;

        let tasks = match store.load_existing(&storage_key) {
            Some(tasks) => dedup_ids(drop_blank_titles(tasks)),
            None if seed_on_first_run => {
                let seeded = seed_tasks(clock.now(), clock.today());
                info!(tasks = seeded.len(), "seeding example tasks");
                store.save(&storage_key, &seeded);
                seeded
            }
            None => Vec::new(),
        };

        Self {
            store,
            storage_key,
            tasks,
            clock: Box::new(clock),
        }
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the storage key the collection is written under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Today's date according to the repository clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Appends a new task built from `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Validation`] if the title is blank. The
    /// collection is left untouched.
    #[instrument(skip(self, fields))]
    pub fn create(&mut self, fields: TaskFields) -> Result<Task, RepositoryError> {
        fields.validate()?;

        let id = self.fresh_id();
        let task = Task::from_fields(id, fields, self.clock.now());
        debug!(id = %task.id, "created task");

        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Replaces the editable fields of the task with the given id, keeping
    /// its position, id and creation time.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no task has this id, and
    /// [`RepositoryError::Validation`] if the title is blank. The collection
    /// is left untouched on error.
    #[instrument(skip(self, fields), fields(id = %id))]
    pub fn update(&mut self, id: &TaskId, fields: TaskFields) -> Result<Task, RepositoryError> {
        let Some(index) = self.tasks.iter().position(|t| &t.id == id) else {
            return Err(RepositoryError::NotFound(id.clone()));
        };
        fields.validate()?;

        self.tasks[index].apply(fields);
        let task = self.tasks[index].clone();
        debug!("updated task");

        self.persist();
        Ok(task)
    }

    /// Removes the task with the given id.
    ///
    /// Returns `false` without touching storage if there is no such task.
    #[instrument(skip(self), fields(id = %id))]
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|t| &t.id == id) else {
            debug!("delete of missing task ignored");
            return false;
        };

        self.tasks.remove(index);
        debug!("deleted task");
        self.persist();
        true
    }

    /// Rewrites the full collection to storage.
    pub fn flush(&mut self) -> bool {
        self.persist()
    }

    fn persist(&mut self) -> bool {
        self.store.save(&self.storage_key, &self.tasks)
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn drop_blank_titles(tasks: Vec<Task>) -> Vec<Task> {
    let total = tasks.len();
    let valid: Vec<Task> = tasks
        .into_iter()
        .filter(|t| !t.title.trim().is_empty())
        .collect();
    if valid.len() != total {
        warn!(dropped = total - valid.len(), "dropped tasks with blank titles");
    }
    valid
}

fn dedup_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let total = tasks.len();
    let unique: Vec<Task> = tasks
        .into_iter()
        .filter(|t| seen.insert(t.id.clone()))
        .collect();
    if unique.len() != total {
        warn!(dropped = total - unique.len(), "dropped tasks with duplicate ids");
    }
    unique
}


#[cfg(test)]
mod proptest_tests {
    use super::tests::FixedClock;
    use super::*;
    use crate::storage::MemoryStorage;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Create(String),
        Update(usize, String),
        Delete(usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[ a-z]{0,12}".prop_map(Op::Create),
            (0usize..8, "[ a-z]{0,12}").prop_map(|(i, t)| Op::Update(i, t)),
            (0usize..8).prop_map(Op::Delete),
        ]
    }

    proptest! {
        /// Tests that arbitrary operation sequences keep ids unique and track
        /// a simple model of titles.
        #[test]
        fn crud_matches_model(ops in prop::collection::vec(arb_op(), 0..40)) {
            let mut repo = TaskRepository::open_with_clock(
                TaskStore::new(MemoryStorage::new()),
                RepositoryOptions::new("tasks").seed_on_first_run(false),
                FixedClock::at_millis(0),
            );
            let today = repo.today();
            let mut model: Vec<String> = Vec::new();

            for op in ops {
                match op {
                    Op::Create(title) => {
                        let ok = repo.create(TaskFields::new(title.clone(), today)).is_ok();
                        prop_assert_eq!(ok, !title.trim().is_empty());
                        if ok {
                            model.push(title);
                        }
                    }
                    Op::Update(i, title) => {
                        let Some(id) = repo.list().get(i).map(|t| t.id.clone()) else {
                            continue;
                        };
                        let before = repo.get(&id).cloned();
                        let ok = repo.update(&id, TaskFields::new(title.clone(), today)).is_ok();
                        prop_assert_eq!(ok, !title.trim().is_empty());
                        if ok {
                            model[i] = title;
                            let after = repo.get(&id).cloned();
                            prop_assert_eq!(
                                before.map(|t| (t.id, t.created_at)),
                                after.map(|t| (t.id, t.created_at))
                            );
                        }
                    }
                    Op::Delete(i) => {
                        let id = repo.list().get(i).map(|t| t.id.clone());
                        let removed = id.as_ref().is_some_and(|id| repo.delete(id));
                        prop_assert_eq!(removed, i < model.len());
                        if removed {
                            model.remove(i);
                        }
                    }
                }

                let titles: Vec<String> = repo.list().iter().map(|t| t.title.clone()).collect();
                prop_assert_eq!(&titles, &model);

                let ids: HashSet<_> = repo.list().iter().map(|t| &t.id).collect();
                prop_assert_eq!(ids.len(), repo.len());
            }
        }
    }
}
