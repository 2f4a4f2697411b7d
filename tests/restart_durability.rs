//! Tasks written in one session are visible in the next.

use std::fs;

use chrono::NaiveDate;
use taskflow_protocol::{Priority, Status, TaskFields};
use taskflow_store::{FileStorage, RepositoryOptions, TaskRepository, TaskStore};
use tempfile::TempDir;

const KEY: &str = "tm_tasks_v1";

fn open(dir: &TempDir, seed: bool) -> TaskRepository {
    let storage = FileStorage::with_path(dir.path()).unwrap();
    TaskRepository::open(
        TaskStore::new(storage),
        RepositoryOptions::new(KEY).seed_on_first_run(seed),
    )
}

fn due() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

#[test]
fn first_run_seeds_and_persists() {
    let dir = TempDir::new().unwrap();

    let repo = open(&dir, true);
    let titles: Vec<&str> = repo.list().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Design landing page", "Write API documentation", "Fix login bug"]
    );
    assert!(dir.path().join(format!("{KEY}.json")).exists());

    let reopened = open(&dir, true);
    assert_eq!(reopened.list(), repo.list());
}

#[test]
fn seed_is_not_reapplied_after_deleting_everything() {
    let dir = TempDir::new().unwrap();

    let mut repo = open(&dir, true);
    let ids: Vec<_> = repo.list().iter().map(|t| t.id.clone()).collect();
    for id in &ids {
        assert!(repo.delete(id));
    }
    drop(repo);

    let reopened = open(&dir, true);
    assert!(reopened.is_empty());
}

#[test]
fn no_seed_starts_empty() {
    let dir = TempDir::new().unwrap();

    let repo = open(&dir, false);
    assert!(repo.is_empty());
}

#[test]
fn crud_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut repo = open(&dir, false);
    let kept = repo
        .create(
            TaskFields::new("Ship release", due())
                .description("Tag and publish")
                .priority(Priority::High),
        )
        .unwrap();
    let edited = repo.create(TaskFields::new("Draft notes", due())).unwrap();
    let removed = repo.create(TaskFields::new("Scratch", due())).unwrap();

    repo.update(
        &edited.id,
        TaskFields::new("Final notes", due()).status(Status::Done),
    )
    .unwrap();
    assert!(repo.delete(&removed.id));
    drop(repo);

    let reopened = open(&dir, false);
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.get(&kept.id), Some(&kept));

    let notes = reopened.get(&edited.id).unwrap();
    assert_eq!(notes.title, "Final notes");
    assert_eq!(notes.status, Status::Done);
    assert_eq!(notes.created_at, edited.created_at);
    assert!(reopened.get(&removed.id).is_none());
}

#[test]
fn stored_layout_uses_camel_case_fields() {
    let dir = TempDir::new().unwrap();

    let mut repo = open(&dir, false);
    repo.create(TaskFields::new("Layout", due())).unwrap();

    let raw = fs::read_to_string(dir.path().join(format!("{KEY}.json"))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let task = &value.as_array().unwrap()[0];

    assert_eq!(task["title"], "Layout");
    assert_eq!(task["status"], "todo");
    assert_eq!(task["priority"], "medium");
    assert_eq!(task["dueDate"], "2025-09-01");
    assert!(task["createdAt"].is_i64());
    assert!(task["id"].is_string());
}

#[test]
fn corrupt_storage_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(format!("{KEY}.json")), "{ not json").unwrap();

    let repo = open(&dir, true);
    assert_eq!(repo.len(), 3);

    let reopened = open(&dir, false);
    assert_eq!(reopened.len(), 3);
}

#[test]
fn separate_keys_do_not_interfere() {
    let dir = TempDir::new().unwrap();

    let mut work = TaskRepository::open(
        TaskStore::new(FileStorage::with_path(dir.path()).unwrap()),
        RepositoryOptions::new("work").seed_on_first_run(false),
    );
    work.create(TaskFields::new("Work item", due())).unwrap();

    let home = TaskRepository::open(
        TaskStore::new(FileStorage::with_path(dir.path()).unwrap()),
        RepositoryOptions::new("home").seed_on_first_run(false),
    );
    assert!(home.is_empty());
    assert_eq!(open_key(&dir, "work").len(), 1);
}

fn open_key(dir: &TempDir, key: &str) -> TaskRepository {
    TaskRepository::open(
        TaskStore::new(FileStorage::with_path(dir.path()).unwrap()),
        RepositoryOptions::new(key).seed_on_first_run(false),
    )
}
