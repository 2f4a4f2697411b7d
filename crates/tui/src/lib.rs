//! Terminal UI for the taskflow task tracker.
//!
//! This crate provides a Ratatui-based interface to list, filter, create,
//! edit and delete tasks held by a [`TaskRepository`](taskflow_store::TaskRepository).
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`route`]: Screens and their paths
//! - [`state`]: Selection, overlays and toasts
//! - [`query_state`]: Debounced search and filters
//! - [`form`]: The create/edit form state machine
//! - [`timer`]: Deadlines polled by the run loop
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering
//!
//! # Example
//!
//! ```no_run
//! use taskflow_config::TimingConfig;
//! use taskflow_store::{MemoryStorage, RepositoryOptions, TaskRepository, TaskStore};
//! use taskflow_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut session = terminal::TerminalSession::start()?;
//!
//!     let mut repo = TaskRepository::open(
//!         TaskStore::new(MemoryStorage::new()),
//!         RepositoryOptions::new("tasks"),
//!     );
//!     let result = App::new(&mut repo, TimingConfig::default())
//!         .run(session.terminal_mut())
//!         .await;
//!
//!     session.restore()?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod form;
pub mod layout;
pub mod query_state;
pub mod route;
pub mod state;
pub mod terminal;
pub mod timer;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use form::{FormController, FormMode, SubmitOutcome};
pub use query_state::QueryEngine;
pub use route::Route;
pub use state::{AppState, Toast};
pub use timer::Timer;
