//! TUI rendering and terminal management (impure shell).
//!
//! Everything stateful lives in [`crate::state`]; this module owns the
//! terminal, translates key events into state transitions, and queues API
//! requests the transitions ask for. Rendering is generic over the backend
//! so screens can be exercised against `TestBackend` in tests.

pub mod accounts;
pub mod confirm;
pub mod help;
pub mod layout;
pub mod login;
pub mod notes;
pub mod pagination_bar;
pub mod qna_form;
pub mod qna_list;
pub mod styles;
pub mod tabs;

pub use styles::{ColorConfig, UiStyles};

use crate::api::{ApiRequest, ApiWorker};
use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::state::{
    AdminTab, AppState, DeleteTarget, FocusPane, FormField, LoginForm, NoteField,
    NoteForm, QnaForm, RegisterField, RegisterForm, Screen, SearchInput,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;

/// Poll interval for draining worker responses.
const TICK: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application.
///
/// Generic over backend to support testing with TestBackend.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    worker: ApiWorker,
    key_bindings: KeyBindings,
    styles: UiStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize the application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen and
    /// queues the session probe and the first page fetch.
    pub fn new(worker: ApiWorker, page_size: u32, styles: UiStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let mut state = AppState::new(page_size);
        worker.send(ApiRequest::FetchMe);
        worker.send(state.fetch_request());

        Ok(Self {
            terminal,
            state,
            worker,
            key_bindings: KeyBindings::default(),
            styles,
        })
    }

    /// Run the main event loop until the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let result = self.event_loop();
        // Always restore terminal state.
        restore_terminal()?;
        result
    }

    fn event_loop(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => {
                        self.handle_key(key);
                        if self.state.should_quit {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            } else {
                // Timer elapsed; apply whatever the worker finished.
                let responses = self.worker.drain();
                if !responses.is_empty() {
                    for response in responses {
                        if let Some(follow_up) = self.state.apply_response(response) {
                            self.worker.send(follow_up);
                        }
                    }
                    self.draw()?;
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an application over an existing backend. Test entry point;
    /// does not touch the real terminal.
    pub fn with_backend(backend: B, worker: ApiWorker, page_size: u32) -> Result<Self, TuiError> {
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            state: AppState::new(page_size),
            worker,
            key_bindings: KeyBindings::default(),
            styles: UiStyles::new(ColorConfig::from_env_and_args(true)),
        })
    }

    /// The current state. Test helper.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable state access. Test helper.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// The terminal backend. Test helper for buffer inspection.
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Handle a single keyboard event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits, even mid-modal.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return;
        }

        // Any keypress clears a lingering status message.
        self.state.status = None;

        if self.state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.state.help_visible = false;
            }
            return;
        }

        if self.state.confirm.is_open() {
            self.handle_confirm_key(key);
            return;
        }
        if self.state.qna_form.is_some() {
            self.handle_qna_form_key(key);
            return;
        }
        if self.state.note_form.is_some() {
            self.handle_note_form_key(key);
            return;
        }
        if self.state.register_form.is_some() {
            self.handle_register_form_key(key);
            return;
        }
        if self.state.screen == Screen::Login {
            self.handle_login_key(key);
            return;
        }
        if matches!(self.state.search, SearchInput::Typing(_)) {
            self.handle_search_key(key);
            return;
        }

        if let Some(action) = self.key_bindings.get(key) {
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: KeyAction) {
        let on_qna_list = self.state.screen == Screen::Browse
            || (self.state.screen == Screen::Dashboard && self.state.tab == AdminTab::Qna);

        match action {
            KeyAction::Quit => self.state.should_quit = true,
            KeyAction::Help => self.state.help_visible = true,
            KeyAction::SelectNext => {
                if on_qna_list && self.state.focus == FocusPane::Facets {
                    self.state.facet_next();
                } else if on_qna_list {
                    self.state.select_next();
                } else {
                    let len = self.current_list_len();
                    if len > 0 && self.state.qna.selected + 1 < len {
                        self.state.qna.selected += 1;
                    }
                }
            }
            KeyAction::SelectPrev => {
                if on_qna_list && self.state.focus == FocusPane::Facets {
                    self.state.facet_prev();
                } else {
                    self.state.select_prev();
                }
            }
            KeyAction::ToggleExpand => {
                if on_qna_list {
                    self.state.toggle_expand_selected();
                }
            }
            KeyAction::NextPage => {
                if on_qna_list && self.state.pager.can_next(self.state.qna.meta.total_pages) {
                    self.state.pager.next(self.state.qna.meta.total_pages);
                    let request = self.state.fetch_request();
                    self.worker.send(request);
                }
            }
            KeyAction::PrevPage => {
                if on_qna_list && self.state.pager.can_prev() {
                    self.state.pager.prev(self.state.qna.meta.total_pages);
                    let request = self.state.fetch_request();
                    self.worker.send(request);
                }
            }
            KeyAction::FirstPage => {
                if on_qna_list && self.state.pager.can_prev() {
                    self.state.pager.goto(1, self.state.qna.meta.total_pages);
                    let request = self.state.fetch_request();
                    self.worker.send(request);
                }
            }
            KeyAction::LastPage => {
                let last = self.state.qna.meta.total_pages;
                if on_qna_list && self.state.pager.can_next(last) {
                    self.state.pager.goto(last, last);
                    let request = self.state.fetch_request();
                    self.worker.send(request);
                }
            }
            KeyAction::CycleLimit => {
                if on_qna_list {
                    self.state.pager.cycle_limit();
                    let request = self.state.fetch_request();
                    self.worker.send(request);
                }
            }
            KeyAction::StartSearch => {
                if on_qna_list {
                    self.state.start_search();
                }
            }
            KeyAction::CycleFocus => {
                if on_qna_list {
                    self.state.focus = match self.state.focus {
                        FocusPane::List => FocusPane::Facets,
                        FocusPane::Facets => FocusPane::List,
                    };
                }
            }
            KeyAction::ToggleFacet => {
                if on_qna_list && self.state.focus == FocusPane::Facets {
                    self.state.toggle_facet();
                }
            }
            KeyAction::ClearFilters => {
                if on_qna_list {
                    self.state.clear_filters();
                }
            }
            KeyAction::TabQna => self.switch_tab(AdminTab::Qna),
            KeyAction::TabNotes => self.switch_tab(AdminTab::Notes),
            KeyAction::TabAccounts => self.switch_tab(AdminTab::Accounts),
            KeyAction::New => self.open_create_form(),
            KeyAction::Edit => {
                if self.state.screen == Screen::Dashboard && self.state.tab == AdminTab::Qna {
                    if let Some(record) = self.state.selected_record() {
                        self.state.qna_form = Some(QnaForm::edit(record));
                    }
                }
            }
            KeyAction::Delete => self.open_delete_prompt(),
            KeyAction::Refresh => {
                let request = match (self.state.screen, self.state.tab) {
                    (Screen::Dashboard, AdminTab::Notes) => ApiRequest::FetchNotes,
                    (Screen::Dashboard, AdminTab::Accounts) => ApiRequest::FetchAccounts,
                    _ => self.state.fetch_request(),
                };
                self.worker.send(request);
            }
            KeyAction::Login => {
                if self.state.user.is_some() {
                    self.state.screen = Screen::Dashboard;
                } else {
                    self.state.login = LoginForm::new();
                    self.state.screen = Screen::Login;
                }
            }
            KeyAction::Logout => {
                if self.state.user.is_some() {
                    self.worker.send(ApiRequest::Logout);
                }
            }
        }
    }

    fn current_list_len(&self) -> usize {
        match (self.state.screen, self.state.tab) {
            (Screen::Dashboard, AdminTab::Notes) => self.state.notes.len(),
            (Screen::Dashboard, AdminTab::Accounts) => self.state.accounts.len(),
            _ => self.state.visible().len(),
        }
    }

    fn switch_tab(&mut self, tab: AdminTab) {
        if self.state.screen != Screen::Dashboard {
            return;
        }
        if let Some(request) = self.state.set_tab(tab) {
            self.worker.send(request);
        }
        if self.state.tab == tab {
            self.state.qna.selected = 0;
        }
    }

    fn open_create_form(&mut self) {
        if self.state.screen != Screen::Dashboard {
            return;
        }
        match self.state.tab {
            AdminTab::Qna => self.state.qna_form = Some(QnaForm::create()),
            AdminTab::Notes => self.state.note_form = Some(NoteForm::new()),
            AdminTab::Accounts => self.state.register_form = Some(RegisterForm::new()),
        }
    }

    fn open_delete_prompt(&mut self) {
        if self.state.screen != Screen::Dashboard {
            return;
        }
        let selected = self.state.qna.selected;
        let target = match self.state.tab {
            AdminTab::Qna => self.state.selected_record().map(|r| DeleteTarget::Qna {
                id: r.id,
                preview: layout::truncate_to_width(&r.question, 48),
            }),
            AdminTab::Notes => self.state.notes.get(selected).map(|n| DeleteTarget::Note {
                id: n.id.clone(),
                preview: layout::truncate_to_width(&n.title, 48),
            }),
            AdminTab::Accounts => {
                let own_id = self.state.user.as_ref().map(|u| u.id);
                match self.state.accounts.get(selected) {
                    Some(user) if Some(user.id) == own_id => {
                        self.state.set_error("cannot delete your own account");
                        None
                    }
                    Some(user) => Some(DeleteTarget::Account {
                        id: user.id,
                        preview: format!("{} ({})", user.name, user.email),
                    }),
                    None => None,
                }
            }
        };
        if let Some(target) = target {
            self.state.confirm.open(target);
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if let Some(target) = self.state.confirm.confirm() {
                    let request = match target {
                        DeleteTarget::Qna { id, .. } => ApiRequest::DeleteQna(id),
                        DeleteTarget::Note { id, .. } => ApiRequest::DeleteNote(id),
                        DeleteTarget::Account { id, .. } => ApiRequest::DeleteAccount(id),
                    };
                    self.worker.send(request);
                }
            }
            KeyCode::Esc | KeyCode::Char('n') => self.state.confirm.cancel(),
            _ => {}
        }
    }

    fn handle_qna_form_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.state.qna_form else {
            return;
        };
        if form.submitting {
            return;
        }
        match key.code {
            KeyCode::Esc => self.state.qna_form = None,
            KeyCode::Tab => form.focus = form.focus.next(),
            KeyCode::BackTab => form.focus = form.focus.prev(),
            KeyCode::Enter => {
                if form.focus == FormField::TagInput && !form.tag_input.trim().is_empty() {
                    form.add_tag();
                } else if let Some(payload) = form.submission() {
                    let request = match form.editing_id {
                        Some(id) => ApiRequest::UpdateQna { id, payload },
                        None => ApiRequest::CreateQna(payload),
                    };
                    self.worker.send(request);
                }
            }
            KeyCode::Backspace => match form.focus {
                FormField::Question => {
                    form.question.pop();
                }
                FormField::Answer => {
                    form.answer.pop();
                }
                FormField::TagInput => {
                    if form.tag_input.pop().is_none() {
                        form.pop_tag();
                    }
                }
                FormField::Category => {}
            },
            // Delete on the tag line removes the named tag, so any tag can
            // be taken off the draft, not just the newest.
            KeyCode::Delete if form.focus == FormField::TagInput => {
                let tag = form.tag_input.trim().to_owned();
                if tag.is_empty() {
                    form.pop_tag();
                } else {
                    form.remove_tag(&tag);
                    form.tag_input.clear();
                }
            }
            KeyCode::Char(' ') | KeyCode::Right if form.focus == FormField::Category => {
                form.cycle_category();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                match form.focus {
                    FormField::Question => form.question.push(ch),
                    FormField::Answer => form.answer.push(ch),
                    FormField::TagInput => form.tag_input.push(ch),
                    FormField::Category => {}
                }
            }
            _ => {}
        }
    }

    fn handle_note_form_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.state.note_form else {
            return;
        };
        if form.submitting {
            return;
        }
        match key.code {
            KeyCode::Esc => self.state.note_form = None,
            KeyCode::Tab | KeyCode::BackTab => form.focus = form.focus.toggle(),
            KeyCode::Enter => {
                if form.focus == NoteField::Title {
                    form.focus = NoteField::Content;
                } else if let Some(note) = form.submission() {
                    self.worker.send(ApiRequest::CreateNote(note));
                }
            }
            KeyCode::Backspace => {
                match form.focus {
                    NoteField::Title => form.title.pop(),
                    NoteField::Content => form.content.pop(),
                };
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                match form.focus {
                    NoteField::Title => form.title.push(ch),
                    NoteField::Content => form.content.push(ch),
                }
            }
            _ => {}
        }
    }

    fn handle_register_form_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.state.register_form else {
            return;
        };
        if form.submitting {
            return;
        }
        match key.code {
            KeyCode::Esc => self.state.register_form = None,
            KeyCode::Tab => form.focus = form.focus.next(),
            KeyCode::BackTab => form.focus = form.focus.prev(),
            KeyCode::Enter => {
                if let Some(payload) = form.submission() {
                    self.worker.send(ApiRequest::Register(payload));
                }
            }
            KeyCode::Char(' ') if form.focus == RegisterField::Role => form.toggle_role(),
            KeyCode::Backspace => {
                match form.focus {
                    RegisterField::Name => form.name.pop(),
                    RegisterField::Email => form.email.pop(),
                    RegisterField::Password => form.password.pop(),
                    RegisterField::Role => None,
                };
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                match form.focus {
                    RegisterField::Name => form.name.push(ch),
                    RegisterField::Email => form.email.push(ch),
                    RegisterField::Password => form.password.push(ch),
                    RegisterField::Role => {}
                }
            }
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if self.state.login.submitting {
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.state.login = LoginForm::new();
                self.state.screen = Screen::Browse;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.state.login.focus = self.state.login.focus.toggle();
            }
            KeyCode::Enter => {
                if let Some((email, password)) = self.state.login.submission() {
                    self.worker.send(ApiRequest::Login { email, password });
                }
            }
            KeyCode::Backspace => {
                match self.state.login.focus {
                    crate::state::LoginField::Email => self.state.login.email.pop(),
                    crate::state::LoginField::Password => self.state.login.password.pop(),
                };
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.state.login.focus {
                    crate::state::LoginField::Email => self.state.login.email.push(ch),
                    crate::state::LoginField::Password => self.state.login.password.push(ch),
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.cancel_search(),
            KeyCode::Enter => self.state.commit_search(),
            KeyCode::Backspace => {
                if let SearchInput::Typing(buffer) = &mut self.state.search {
                    buffer.pop();
                }
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let SearchInput::Typing(buffer) = &mut self.state.search {
                    buffer.push(ch);
                }
            }
            _ => {}
        }
    }

    /// Render the current state.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let styles = &self.styles;
        self.terminal.draw(|frame| render_frame(frame, state, styles))?;
        Ok(())
    }
}

/// Render one full frame for `state`.
pub fn render_frame(frame: &mut Frame, state: &AppState, styles: &UiStyles) {
    let (header, body, footer) = layout::screen_chunks(frame.area());

    render_header(frame, header, state, styles);

    match state.screen {
        Screen::Browse => {
            qna_list::render(frame, body, state, styles);
            layout::render_footer(
                frame,
                footer,
                state,
                styles,
                "j/k move  enter expand  / search  a sign in  ? help  q quit",
            );
        }
        Screen::Login => {
            login::render(frame, body, &state.login, styles);
            layout::render_footer(frame, footer, state, styles, "enter sign in  esc back");
        }
        Screen::Dashboard => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(1)])
                .split(body);
            tabs::render_tab_bar(frame, rows[0], state, styles);
            match state.tab {
                AdminTab::Qna => qna_list::render(frame, rows[1], state, styles),
                AdminTab::Notes => notes::render_list(frame, rows[1], state, styles),
                AdminTab::Accounts => accounts::render_list(frame, rows[1], state, styles),
            }
            layout::render_footer(
                frame,
                footer,
                state,
                styles,
                "n new  e edit  d delete  r refresh  1/2/3 tabs  Q sign out  ? help",
            );
        }
    }

    if let Some(form) = &state.qna_form {
        qna_form::render(frame, body, form, styles);
    }
    if let Some(form) = &state.note_form {
        notes::render_form(frame, body, form, styles);
    }
    if let Some(form) = &state.register_form {
        accounts::render_form(frame, body, form, styles);
    }
    if state.confirm.is_open() {
        confirm::render(frame, body, &state.confirm, styles);
    }
    if state.help_visible {
        help::render(frame, body, styles);
    }
}

fn render_header(frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState, styles: &UiStyles) {
    let mut spans = vec![Span::styled("Q&A Knowledge Base", styles.title)];
    match &state.user {
        Some(user) => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{} ({})", user.email, user.role.as_str()),
                styles.info,
            ));
        }
        None => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("not signed in", styles.dim));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
