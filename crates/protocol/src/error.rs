//! Error types shared across taskflow components.

/// A submitted set of task fields that cannot be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The title is empty or only whitespace.
    #[error("Title required")]
    BlankTitle,

    /// The due date could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid due date (expected YYYY-MM-DD)")]
    InvalidDueDate,
}
