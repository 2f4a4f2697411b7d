//! Main application struct and run loop.
//!
//! [`App`] owns the view state and borrows the [`TaskRepository`] for the
//! whole session. Terminal events become [`Message`]s, messages update the
//! state, and timers are ticked after every poll.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use taskflow_config::TimingConfig;
use taskflow_protocol::{Message, Task, TaskId};
use taskflow_store::TaskRepository;
use tracing::{debug, info};

use crate::{
    AppState,
    event::{InputContext, event_to_message, poll_event},
    form::{FormController, FormMode, SubmitOutcome},
    layout::{FILTER_BAR_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT},
    query_state::QueryEngine,
    route::Route,
    terminal::AppTerminal,
    widgets::{
        render_confirm_dialog, render_filter_bar, render_help_overlay, render_not_found,
        render_status_bar, render_task_form, render_task_list, render_toast,
    },
};

/// The main application struct.
#[derive(Debug)]
pub struct App<'r> {
    repo: &'r mut TaskRepository,
    state: AppState,
    query: QueryEngine,
    form: Option<FormController>,
    timing: TimingConfig,
    should_quit: bool,
}

impl<'r> App<'r> {
    /// Creates an application showing the task list.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskflow_config::TimingConfig;
    /// use taskflow_store::{MemoryStorage, RepositoryOptions, TaskRepository, TaskStore};
    /// use taskflow_tui::{App, Route};
    ///
    /// let mut repo = TaskRepository::open(
    ///     TaskStore::new(MemoryStorage::new()),
    ///     RepositoryOptions::new("tasks"),
    /// );
    /// let app = App::new(&mut repo, TimingConfig::default());
    /// assert_eq!(app.route(), &Route::List);
    /// ```
    #[must_use]
    pub fn new(repo: &'r mut TaskRepository, timing: TimingConfig) -> Self {
        let mut app = Self {
            repo,
            state: AppState::default(),
            query: QueryEngine::new(timing.search_debounce()),
            form: None,
            timing,
            should_quit: false,
        };
        app.sync_selection();
        app
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the current route.
    #[must_use]
    pub fn route(&self) -> &Route {
        &self.state.route
    }

    /// Returns the search and filter state.
    #[must_use]
    pub fn query(&self) -> &QueryEngine {
        &self.query
    }

    /// Returns the open form, if a form route is shown.
    #[must_use]
    pub fn form(&self) -> Option<&FormController> {
        self.form.as_ref()
    }

    /// Returns the repository.
    #[must_use]
    pub fn repository(&self) -> &TaskRepository {
        &*self.repo
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the tasks matching the applied filters, in repository order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.query.results(self.repo.list())
    }

    /// Returns the selected task in the filtered list.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        let idx = self.state.selected?;
        self.visible_tasks().get(idx).copied()
    }

    /// Returns which key mapping applies right now.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        if self.state.pending_delete.is_some() {
            return InputContext::Confirm;
        }
        match self.state.route {
            Route::List => InputContext::List {
                search_focused: self.state.search_focused,
            },
            Route::Create | Route::Edit(_) => InputContext::Form,
            Route::NotFound(_) => InputContext::NotFound,
        }
    }

    /// Shows `route`.
    ///
    /// Any open form is torn down first, which cancels its pending
    /// navigation. Form routes open a fresh form.
    pub fn navigate(&mut self, route: Route) {
        if let Some(mut form) = self.form.take() {
            form.teardown();
        }
        let notice_delay = self.timing.notice_delay();
        self.form = match &route {
            Route::Create => Some(FormController::open(
                FormMode::Create,
                self.repo,
                notice_delay,
            )),
            Route::Edit(id) => Some(FormController::open(
                FormMode::Edit(id.clone()),
                self.repo,
                notice_delay,
            )),
            Route::List | Route::NotFound(_) => None,
        };
        debug!(%route, "navigating");
        self.state.route = route;
        self.state.search_focused = false;
        self.state.pending_delete = None;
        self.sync_selection();
    }

    /// Updates the application state based on a message.
    pub fn update(&mut self, msg: Message) {
        self.update_at(msg, Instant::now());
    }

    /// Updates the application state as if `msg` arrived at `now`.
    ///
    /// While the help overlay is visible, any message other than `Quit`
    /// only dismisses it. While a delete is pending, only the confirmation
    /// messages are handled.
    pub fn update_at(&mut self, msg: Message, now: Instant) {
        if msg.is_terminating() {
            if let Some(form) = self.form.as_mut() {
                form.teardown();
            }
            self.should_quit = true;
            return;
        }

        if self.state.dismiss_help() {
            debug!(?msg, "help dismissed");
            return;
        }

        if self.state.pending_delete.is_some() {
            self.update_confirm(msg, now);
            return;
        }

        match self.state.route {
            Route::List => self.update_list(msg, now),
            Route::Create | Route::Edit(_) => self.update_form(msg, now),
            Route::NotFound(_) => {
                if msg == Message::GoHome {
                    self.navigate(Route::List);
                }
            }
        }
    }

    fn update_confirm(&mut self, msg: Message, now: Instant) {
        match msg {
            Message::ConfirmDelete => {
                if let Some(id) = self.state.pending_delete.take() {
                    if self.repo.delete(&id) {
                        info!(%id, "task deleted");
                        self.state
                            .show_toast("Task deleted", now, self.timing.notice_delay());
                    }
                    self.sync_selection();
                }
            }
            Message::CancelDelete | Message::Escape => {
                self.state.pending_delete = None;
            }
            _ => {}
        }
    }

    fn update_list(&mut self, msg: Message, now: Instant) {
        match msg {
            Message::NavigateUp => {
                let len = self.visible_tasks().len();
                self.state.navigate_up(len);
            }
            Message::NavigateDown => {
                let len = self.visible_tasks().len();
                self.state.navigate_down(len);
            }
            Message::NewTask => self.navigate(Route::Create),
            Message::EditSelected => {
                if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
                    self.navigate(Route::Edit(id));
                }
            }
            Message::RequestDelete => {
                self.state.pending_delete = self.selected_task().map(|t| t.id.clone());
            }
            Message::FocusSearch => self.state.search_focused = true,
            Message::BlurSearch | Message::Escape => self.state.search_focused = false,
            Message::SearchInput { ch } => self.query.push_char(ch, now),
            Message::SearchBackspace => self.query.backspace(now),
            Message::CycleStatusFilter => {
                self.query.cycle_status();
                self.sync_selection();
            }
            Message::CyclePriorityFilter => {
                self.query.cycle_priority();
                self.sync_selection();
            }
            Message::ClearFilters => {
                self.query.clear();
                self.sync_selection();
            }
            Message::ToggleHelp => self.state.toggle_help(),
            _ => {}
        }
    }

    fn update_form(&mut self, msg: Message, now: Instant) {
        if msg == Message::Escape {
            self.navigate(Route::List);
            return;
        }
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match msg {
            Message::FormNextField => form.focus_next(),
            Message::FormPrevField => form.focus_prev(),
            Message::FormInput { ch } => form.input_char(ch),
            Message::FormBackspace => form.backspace(),
            Message::FormCycle { delta } => form.cycle(delta),
            Message::FormSubmit => match form.submit(self.repo, now) {
                SubmitOutcome::Saved(task) => self.select_task(&task.id),
                SubmitOutcome::Rejected | SubmitOutcome::Ignored => {}
            },
            _ => {}
        }
    }

    /// Fires the timers that are due at `now`.
    ///
    /// Applies debounced search text, returns from a submitted form to the
    /// list, and expires the toast.
    pub fn tick(&mut self, now: Instant) {
        if self.query.tick(now) {
            self.sync_selection();
        }
        if self.form.as_mut().is_some_and(|f| f.tick(now)) {
            self.navigate(Route::List);
        }
        self.state.expire_toast(now);
    }

    /// Selects `id` if it is visible.
    fn select_task(&mut self, id: &TaskId) {
        if let Some(index) = self.visible_tasks().iter().position(|t| &t.id == id) {
            self.state.selected = Some(index);
        }
        self.sync_selection();
    }

    /// Keeps the selection on a visible task.
    fn sync_selection(&mut self) {
        let len = self.visible_tasks().len();
        self.state.clamp_selection(len);
        if self.state.selected.is_none() && len > 0 {
            self.state.selected = Some(0);
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Below the minimum terminal size only a "terminal too small" message
    /// is drawn.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.render_terminal_too_small(frame, area);
            return;
        }

        let [header_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        self.render_header(frame, header_area);

        match &self.state.route {
            Route::List => self.render_list(frame, content_area),
            Route::Create | Route::Edit(_) => {
                if let Some(form) = &self.form {
                    render_task_form(form, content_area, frame.buffer_mut());
                }
            }
            Route::NotFound(path) => render_not_found(path, content_area, frame.buffer_mut()),
        }

        render_status_bar(self.input_context(), status_area, frame.buffer_mut());

        if let Some(id) = &self.state.pending_delete {
            let title = self.repo.get(id).map_or("", |t| t.title.as_str());
            render_confirm_dialog(title, content_area, frame.buffer_mut());
        }

        if let Some(toast) = &self.state.toast {
            render_toast(&toast.message, content_area, frame.buffer_mut());
        }

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let [filter_area, list_area] =
            Layout::vertical([Constraint::Length(FILTER_BAR_HEIGHT), Constraint::Min(0)])
                .areas(area);

        let buf = frame.buffer_mut();
        render_filter_bar(&self.query, self.state.search_focused, filter_area, buf);

        let empty_message = if self.repo.is_empty() {
            "No tasks yet. Press n to create one."
        } else {
            "No tasks match the current filters."
        };
        render_task_list(
            &self.visible_tasks(),
            self.state.selected,
            empty_message,
            list_area,
            buf,
        );
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title, screen name and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let screen = match &self.state.route {
            Route::List => "Dashboard",
            Route::Create => "Create Task",
            Route::Edit(_) => "Edit Task",
            Route::NotFound(_) => "Not Found",
        };
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "TaskFlow Pro",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(screen, Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskflow_config::TimingConfig;
    /// use taskflow_store::{MemoryStorage, RepositoryOptions, TaskRepository, TaskStore};
    /// use taskflow_tui::{App, terminal::TerminalSession};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut repo = TaskRepository::open(
    ///         TaskStore::new(MemoryStorage::new()),
    ///         RepositoryOptions::new("tasks"),
    ///     );
    ///     let mut session = TerminalSession::start()?;
    ///     App::new(&mut repo, TimingConfig::default())
    ///         .run(session.terminal_mut())
    ///         .await?;
    ///     session.restore()?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                if let Some(msg) = event_to_message(&event, self.input_context()) {
                    self.update(msg);
                }
            }

            self.tick(Instant::now());

            if self.should_quit {
                break;
            }
            tokio::task::yield_now().await;
        }

        Ok(())
    }
}
