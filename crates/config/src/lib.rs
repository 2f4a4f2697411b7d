//! Configuration management for the taskflow application.
//!
//! This crate handles loading, validating, and persisting configuration.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`timing`]: Search debounce and post-save notice delays
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. An explicit path given on the command line
//! 2. Local config (`./taskflow.json5` or `./taskflow.json`)
//! 3. User config (`~/.config/taskflow/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   // Storage key the task list is persisted under
//!   storage_key: "tm_tasks_v1",
//!   seed_on_first_run: true,
//!   timing: { search_debounce_ms: 200, notice_delay_ms: 1000 },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use taskflow_config::Config;
//!
//! # fn example() -> taskflow_config::Result<()> {
//! let config = Config::load()?;
//! println!("Tasks are stored under {}", config.storage_key);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod timing;

// Re-export primary types at crate root for convenience
pub use config::{Config, DEFAULT_STORAGE_KEY};
pub use error::{ConfigError, Result};
pub use timing::TimingConfig;
