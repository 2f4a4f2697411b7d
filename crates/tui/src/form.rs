//! Task form state.
//!
//! A [`FormController`] stages the editable fields of one task, validates
//! them on submit and commits a create or update to the repository. After a
//! successful save it shows a notice and schedules navigation back to the
//! list; the app observes that through [`FormController::tick`].

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use taskflow_protocol::{Priority, Status, Task, TaskFields, TaskId, ValidationError};
use taskflow_store::TaskRepository;
use tracing::{debug, info};

use crate::timer::Timer;

/// Date format accepted by the due date field.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether the form creates a task or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting appends a new task.
    Create,
    /// Submitting updates the task with this id.
    Edit(TaskId),
}

/// A focusable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Task title.
    #[default]
    Title,
    /// Task description.
    Description,
    /// Status selector.
    Status,
    /// Priority selector.
    Priority,
    /// Due date as `YYYY-MM-DD`.
    DueDate,
}

impl FormField {
    /// Returns all fields in focus order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Title,
            Self::Description,
            Self::Status,
            Self::Priority,
            Self::DueDate,
        ]
    }

    /// Returns the next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Status,
            Self::Status => Self::Priority,
            Self::Priority => Self::DueDate,
            Self::DueDate => Self::Title,
        }
    }

    /// Returns the previous field, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::DueDate,
            Self::Description => Self::Title,
            Self::Status => Self::Description,
            Self::Priority => Self::Status,
            Self::DueDate => Self::Priority,
        }
    }

    /// Returns the field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Status => "Status",
            Self::Priority => "Priority",
            Self::DueDate => "Due Date",
        }
    }

    /// Returns `true` for free-text fields.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Title | Self::Description | Self::DueDate)
    }
}

/// A single-line text buffer with a cursor.
///
/// The cursor is a character index in `0..=len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Creates an input holding `value` with the cursor at the end.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Returns the text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position in characters.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index();
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.value.remove(at);
    }

    /// Moves the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one character right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Fields can be edited and submitted.
    #[default]
    Editing,
    /// The task was saved; waiting to return to the list.
    Submitted,
}

/// Result of [`FormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The task was written to the repository.
    Saved(Task),
    /// Validation or the repository refused the submission. The error is
    /// available from [`FormController::error`].
    Rejected,
    /// The form was already submitted.
    Ignored,
}

/// Editable form for one task.
#[derive(Debug, Clone)]
pub struct FormController {
    mode: FormMode,
    title: TextInput,
    description: TextInput,
    status: Status,
    priority: Priority,
    due_date: TextInput,
    focus: FormField,
    error: Option<String>,
    phase: FormPhase,
    notice: Option<&'static str>,
    nav_timer: Timer,
    notice_delay: Duration,
}

impl FormController {
    /// Opens a form for `mode`.
    ///
    /// In edit mode the fields are copied from the task. If the task does
    /// not exist the form starts from the defaults like a create form; the
    /// missing task is only reported when the form is submitted.
    #[must_use]
    pub fn open(mode: FormMode, repo: &TaskRepository, notice_delay: Duration) -> Self {
        let existing = match &mode {
            FormMode::Edit(id) => {
                let fields = repo.get(id).map(Task::fields);
                if fields.is_none() {
                    debug!(%id, "editing missing task, showing defaults");
                }
                fields
            }
            FormMode::Create => None,
        };
        let fields = existing.unwrap_or_else(|| TaskFields::with_defaults(repo.today()));
        Self::with_fields(mode, fields, notice_delay)
    }

    /// Opens a form pre-filled with `fields`.
    #[must_use]
    pub fn with_fields(mode: FormMode, fields: TaskFields, notice_delay: Duration) -> Self {
        Self {
            mode,
            title: TextInput::new(fields.title),
            description: TextInput::new(fields.description),
            status: fields.status,
            priority: fields.priority,
            due_date: TextInput::new(fields.due_date.format(DUE_DATE_FORMAT).to_string()),
            focus: FormField::default(),
            error: None,
            phase: FormPhase::default(),
            notice: None,
            nav_timer: Timer::new(),
            notice_delay,
        }
    }

    /// Returns the form mode.
    #[must_use]
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Returns the heading shown above the form.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Task",
            FormMode::Edit(_) => "Edit Task",
        }
    }

    /// Returns the focused field.
    #[must_use]
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Returns the title input.
    #[must_use]
    pub fn title(&self) -> &TextInput {
        &self.title
    }

    /// Returns the description input.
    #[must_use]
    pub fn description(&self) -> &TextInput {
        &self.description
    }

    /// Returns the selected status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the selected priority.
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date input.
    #[must_use]
    pub fn due_date(&self) -> &TextInput {
        &self.due_date
    }

    /// Returns the inline error from the last rejected submit.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the confirmation shown after a successful save.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Returns `true` once the task has been saved.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Returns `true` while navigation back to the list is scheduled.
    #[must_use]
    pub fn is_navigation_pending(&self) -> bool {
        self.nav_timer.is_pending()
    }

    /// Moves focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types a character into the focused text field.
    pub fn input_char(&mut self, ch: char) {
        if self.is_submitted() || ch.is_control() {
            return;
        }
        if let Some(input) = self.focused_input() {
            input.insert(ch);
        }
    }

    /// Deletes the character before the cursor in the focused text field.
    pub fn backspace(&mut self) {
        if self.is_submitted() {
            return;
        }
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
    }

    /// Moves the text cursor, or cycles the focused selector.
    ///
    /// A negative `delta` goes left, a positive one right.
    pub fn cycle(&mut self, delta: i32) {
        if self.is_submitted() || delta == 0 {
            return;
        }
        let forward = delta > 0;
        match self.focus {
            FormField::Status => {
                self.status = if forward {
                    self.status.next()
                } else {
                    self.status.prev()
                };
            }
            FormField::Priority => {
                self.priority = if forward {
                    self.priority.next()
                } else {
                    self.priority.prev()
                };
            }
            FormField::Title | FormField::Description | FormField::DueDate => {
                if let Some(input) = self.focused_input() {
                    if forward {
                        input.move_right();
                    } else {
                        input.move_left();
                    }
                }
            }
        }
    }

    /// Assembles and validates the staged fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankTitle`] if the title is blank and
    /// [`ValidationError::InvalidDueDate`] if the due date is not a
    /// `YYYY-MM-DD` date. The title is checked first.
    pub fn fields(&self) -> Result<TaskFields, ValidationError> {
        if self.title.value().trim().is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        let due_date = NaiveDate::parse_from_str(self.due_date.value().trim(), DUE_DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDueDate)?;

        let fields = TaskFields::new(self.title.value(), due_date)
            .description(self.description.value())
            .status(self.status)
            .priority(self.priority);
        fields.validate()?;
        Ok(fields)
    }

    /// Validates the form and commits it to `repo`.
    ///
    /// On success the form enters [`FormPhase::Submitted`] and navigation back
    /// to the list is scheduled after the notice delay. Submitting again
    /// afterwards does nothing.
    pub fn submit(&mut self, repo: &mut TaskRepository, now: Instant) -> SubmitOutcome {
        if self.is_submitted() {
            debug!("ignoring repeated submit");
            return SubmitOutcome::Ignored;
        }

        let fields = match self.fields() {
            Ok(fields) => fields,
            Err(e) => {
                debug!(error = %e, "form rejected");
                self.error = Some(e.to_string());
                return SubmitOutcome::Rejected;
            }
        };

        let result = match &self.mode {
            FormMode::Create => repo.create(fields),
            FormMode::Edit(id) => repo.update(id, fields),
        };

        match result {
            Ok(task) => {
                info!(id = %task.id, mode = ?self.mode, "task saved");
                self.error = None;
                self.phase = FormPhase::Submitted;
                self.notice = Some(match self.mode {
                    FormMode::Create => "Task created!",
                    FormMode::Edit(_) => "Task updated!",
                });
                self.nav_timer.schedule(now, self.notice_delay);
                SubmitOutcome::Saved(task)
            }
            Err(e) => {
                debug!(error = %e, "repository rejected form");
                self.error = Some(e.to_string());
                SubmitOutcome::Rejected
            }
        }
    }

    /// Returns `true` once, when it is time to return to the list.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.nav_timer.fire(now)
    }

    /// Cancels pending navigation. Called when the form is closed.
    pub fn teardown(&mut self) {
        self.nav_timer.cancel();
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::Status | FormField::Priority => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_store::{MemoryStorage, RepositoryOptions, TaskStore};

    const DELAY: Duration = Duration::from_millis(1000);

    fn empty_repo() -> TaskRepository {
        TaskRepository::open(
            TaskStore::new(MemoryStorage::new()),
            RepositoryOptions::new("tasks").seed_on_first_run(false),
        )
    }

    fn type_str(form: &mut FormController, text: &str) {
        for ch in text.chars() {
            form.input_char(ch);
        }
    }

    fn clear_focused(form: &mut FormController) {
        for _ in 0..64 {
            form.backspace();
        }
    }

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::new("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);

        input.move_right();
        input.move_right();
        assert_eq!(input.cursor(), 3);

        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn text_input_handles_multibyte() {
        let mut input = TextInput::new("café");
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "caé");
        input.insert('f');
        assert_eq!(input.value(), "café");
    }

    #[test]
    fn text_input_backspace_at_start() {
        let mut input = TextInput::new("x");
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn field_focus_cycles() {
        let mut field = FormField::Title;
        for expected in [
            FormField::Description,
            FormField::Status,
            FormField::Priority,
            FormField::DueDate,
            FormField::Title,
        ] {
            field = field.next();
            assert_eq!(field, expected);
        }
        assert_eq!(FormField::Title.prev(), FormField::DueDate);
    }

    #[test]
    fn create_form_starts_with_defaults() {
        let repo = empty_repo();
        let form = FormController::open(FormMode::Create, &repo, DELAY);

        assert_eq!(form.heading(), "Create Task");
        assert_eq!(form.title().value(), "");
        assert_eq!(form.status(), Status::Todo);
        assert_eq!(form.priority(), Priority::Medium);
        assert_eq!(
            form.due_date().value(),
            repo.today().format(DUE_DATE_FORMAT).to_string()
        );
        assert_eq!(form.focus(), FormField::Title);
    }

    #[test]
    fn edit_form_prefills_from_task() {
        let mut repo = empty_repo();
        let today = repo.today();
        let task = repo
            .create(
                TaskFields::new("Existing", today)
                    .description("details")
                    .status(Status::Done)
                    .priority(Priority::Critical),
            )
            .unwrap();

        let form = FormController::open(FormMode::Edit(task.id.clone()), &repo, DELAY);
        assert_eq!(form.heading(), "Edit Task");
        assert_eq!(form.title().value(), "Existing");
        assert_eq!(form.description().value(), "details");
        assert_eq!(form.status(), Status::Done);
        assert_eq!(form.priority(), Priority::Critical);
        assert_eq!(form.fields().unwrap(), task.fields());
    }

    #[test]
    fn edit_form_for_missing_task_shows_defaults() {
        let mut repo = empty_repo();
        let mut form = FormController::open(FormMode::Edit(TaskId::from("gone")), &repo, DELAY);

        assert_eq!(form.title().value(), "");
        assert!(form.error().is_none());

        type_str(&mut form, "Valid title");
        let outcome = form.submit(&mut repo, Instant::now());
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(form.error(), Some("task not found: gone"));
        assert!(repo.is_empty());
        assert!(!form.is_submitted());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut repo = empty_repo();
        let mut form = FormController::open(FormMode::Create, &repo, DELAY);
        type_str(&mut form, " ");

        assert_eq!(form.submit(&mut repo, Instant::now()), SubmitOutcome::Rejected);
        assert_eq!(form.error(), Some("Title required"));
        assert!(repo.is_empty());
        assert!(!form.is_navigation_pending());
    }

    #[test]
    fn invalid_due_date_is_rejected() {
        let mut repo = empty_repo();
        let mut form = FormController::open(FormMode::Create, &repo, DELAY);
        type_str(&mut form, "Task");

        form.focus_prev();
        assert_eq!(form.focus(), FormField::DueDate);
        clear_focused(&mut form);
        type_str(&mut form, "2025-13-01");

        assert_eq!(form.submit(&mut repo, Instant::now()), SubmitOutcome::Rejected);
        assert!(form.error().unwrap().starts_with("Invalid due date"));
        assert!(repo.is_empty());
    }

    #[test]
    fn title_error_takes_precedence() {
        let repo = empty_repo();
        let mut form = FormController::open(FormMode::Create, &repo, DELAY);
        form.focus_prev();
        clear_focused(&mut form);

        assert_eq!(form.fields(), Err(ValidationError::BlankTitle));
    }

    #[test]
    fn selectors_cycle_both_ways() {
        let repo = empty_repo();
        let mut form = FormController::open(FormMode::Create, &repo, DELAY);

        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), FormField::Status);
        form.cycle(1);
        assert_eq!(form.status(), Status::InProgress);
        form.cycle(-1);
        form.cycle(-1);
        assert_eq!(form.status(), Status::Done);

        form.focus_next();
        form.cycle(1);
        assert_eq!(form.priority(), Priority::High);

        // Typing into a selector does nothing
        form.input_char('x');
        assert_eq!(form.title().value(), "");
    }

    #[test]
    fn control_characters_are_ignored() {
        let repo = empty_repo();
        let mut form = FormController::open(FormMode::Create, &repo, DELAY);
        form.input_char('\t');
        form.input_char('\n');
        assert_eq!(form.title().value(), "");
    }

    #[test]
    fn create_submit_saves_and_schedules_navigation() {
        let mut repo = empty_repo();
        let start = Instant::now();
        let mut form = FormController::open(FormMode::Create, &repo, DELAY);
        type_str(&mut form, "Write tests");
        form.focus_next();
        type_str(&mut form, "cover the form");

        let SubmitOutcome::Saved(task) = form.submit(&mut repo, start) else {
            panic!("expected the task to be saved");
        };
        assert_eq!(task.title, "Write tests");
        assert_eq!(task.description, "cover the form");
        assert_eq!(repo.list(), [task]);

        assert!(form.is_submitted());
        assert_eq!(form.notice(), Some("Task created!"));
        assert!(form.error().is_none());

        assert!(!form.tick(start + Duration::from_millis(999)));
        assert!(form.tick(start + DELAY));
        assert!(!form.tick(start + 2 * DELAY));
    }

    #[test]
    fn edit_submit_updates_in_place() {
        let mut repo = empty_repo();
        let today = repo.today();
        let task = repo.create(TaskFields::new("Before", today)).unwrap();

        let mut form = FormController::open(FormMode::Edit(task.id.clone()), &repo, DELAY);
        clear_focused(&mut form);
        type_str(&mut form, "After");

        assert!(matches!(
            form.submit(&mut repo, Instant::now()),
            SubmitOutcome::Saved(_)
        ));
        assert_eq!(form.notice(), Some("Task updated!"));

        let stored = repo.get(&task.id).unwrap();
        assert_eq!(stored.title, "After");
        assert_eq!(stored.created_at, task.created_at);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn double_submit_creates_once() {
        let mut repo = empty_repo();
        let now = Instant::now();
        let mut form = FormController::open(FormMode::Create, &repo, DELAY);
        type_str(&mut form, "Once");

        assert!(matches!(form.submit(&mut repo, now), SubmitOutcome::Saved(_)));
        assert_eq!(form.submit(&mut repo, now), SubmitOutcome::Ignored);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn submitted_form_ignores_edits() {
        let mut repo = empty_repo();
        let mut form = FormController::open(FormMode::Create, &repo, DELAY);
        type_str(&mut form, "Done");
        form.submit(&mut repo, Instant::now());

        form.input_char('!');
        form.backspace();
        assert_eq!(form.title().value(), "Done");
    }

    #[test]
    fn teardown_cancels_navigation() {
        let mut repo = empty_repo();
        let start = Instant::now();
        let mut form = FormController::open(FormMode::Create, &repo, DELAY);
        type_str(&mut form, "Leave early");
        form.submit(&mut repo, start);

        form.teardown();
        assert!(!form.is_navigation_pending());
        assert!(!form.tick(start + DELAY));
    }

    #[test]
    fn error_clears_after_successful_submit() {
        let mut repo = empty_repo();
        let mut form = FormController::open(FormMode::Create, &repo, DELAY);

        form.submit(&mut repo, Instant::now());
        assert!(form.error().is_some());

        type_str(&mut form, "Fixed");
        form.submit(&mut repo, Instant::now());
        assert!(form.error().is_none());
    }
}
