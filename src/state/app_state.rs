//! Root application state and response reducer.
//!
//! The shell feeds key events and worker responses into this module; every
//! transition is a plain method so the whole flow is testable without a
//! terminal or a server. Methods that need a follow-up request return the
//! [`ApiRequest`] for the shell to queue rather than touching the worker
//! themselves.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::api::{ApiRequest, ApiResponse};
use crate::model::{Note, PaginationMeta, QnaRecord, User};
use crate::state::confirm::ConfirmState;
use crate::state::filter::{self, FilterCriteria};
use crate::state::login::LoginForm;
use crate::state::note_form::NoteForm;
use crate::state::pager::PagerState;
use crate::state::qna_form::QnaForm;
use crate::state::register_form::RegisterForm;

/// Which top-level screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The public search/browse page.
    Browse,
    /// The credential entry screen.
    Login,
    /// The authenticated admin area.
    Dashboard,
}

/// Tabs of the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    /// Q&A record management.
    Qna,
    /// Free-form notes (admin only).
    Notes,
    /// User accounts (admin only).
    Accounts,
}

impl AdminTab {
    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Qna => "Q&A",
            Self::Notes => "Notes",
            Self::Accounts => "Accounts",
        }
    }

    /// Whether the tab requires the admin role.
    pub fn admin_only(self) -> bool {
        !matches!(self, Self::Qna)
    }
}

/// Search input mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchInput {
    /// Not capturing text.
    #[default]
    Inactive,
    /// Capturing text into the buffer; committed on enter.
    Typing(String),
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Informational.
    Info,
    /// Something failed.
    Error,
}

/// One-line status message shown at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Message text.
    pub text: String,
    /// Severity.
    pub kind: StatusKind,
}

/// Which pane of the browse view has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    /// The record list.
    List,
    /// The category/tag facet sidebar.
    Facets,
}

/// One entry of the facet sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    /// A category derived from the loaded page.
    Category(String),
    /// A tag derived from the loaded page.
    Tag(String),
}

/// The loaded Q&A page plus its presentation state.
#[derive(Debug, Clone)]
pub struct QnaListState {
    /// Records of the current page.
    pub records: Vec<QnaRecord>,
    /// Pagination metadata from the last successful fetch.
    pub meta: PaginationMeta,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Ids rendered expanded. Each record toggles independently.
    pub expanded: HashSet<u64>,
    /// Cursor into the visible (filtered) list.
    pub selected: usize,
}

impl QnaListState {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            meta: PaginationMeta::empty(),
            loading: false,
            expanded: HashSet::new(),
            selected: 0,
        }
    }
}

/// All application state.
#[derive(Debug)]
pub struct AppState {
    /// Active screen.
    pub screen: Screen,
    /// Active dashboard tab.
    pub tab: AdminTab,
    /// The authenticated user, if any.
    pub user: Option<User>,
    /// The Q&A list and its presentation state.
    pub qna: QnaListState,
    /// Page and limit owned by the client.
    pub pager: PagerState,
    /// Active filters.
    pub criteria: FilterCriteria,
    /// Search input mode.
    pub search: SearchInput,
    /// Focused browse pane.
    pub focus: FocusPane,
    /// Cursor into the facet sidebar.
    pub facet_cursor: usize,
    /// Loaded notes. Empty until the notes tab is first opened.
    pub notes: Vec<Note>,
    /// Whether notes have been fetched this session.
    pub notes_loaded: bool,
    /// Loaded accounts.
    pub accounts: Vec<User>,
    /// Whether accounts have been fetched this session.
    pub accounts_loaded: bool,
    /// Open Q&A create/edit form, if any.
    pub qna_form: Option<QnaForm>,
    /// Open add-note form, if any.
    pub note_form: Option<NoteForm>,
    /// Open add-user form, if any.
    pub register_form: Option<RegisterForm>,
    /// Delete confirmation flow.
    pub confirm: ConfirmState,
    /// Login form.
    pub login: LoginForm,
    /// Bottom status line.
    pub status: Option<StatusLine>,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
    /// Set when the user asked to exit.
    pub should_quit: bool,
    next_fetch_seq: u64,
    latest_fetch_seq: u64,
}

impl AppState {
    /// Fresh state on the browse screen with the configured page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            screen: Screen::Browse,
            tab: AdminTab::Qna,
            user: None,
            qna: QnaListState::new(),
            pager: PagerState::new(page_size),
            criteria: FilterCriteria::default(),
            search: SearchInput::Inactive,
            focus: FocusPane::List,
            facet_cursor: 0,
            notes: Vec::new(),
            notes_loaded: false,
            accounts: Vec::new(),
            accounts_loaded: false,
            qna_form: None,
            note_form: None,
            register_form: None,
            confirm: ConfirmState::default(),
            login: LoginForm::new(),
            status: None,
            help_visible: false,
            should_quit: false,
            next_fetch_seq: 0,
            latest_fetch_seq: 0,
        }
    }

    /// Build the next paged fetch, marking it as the latest.
    ///
    /// Any response still in flight for an earlier sequence number will be
    /// discarded when it arrives.
    pub fn fetch_request(&mut self) -> ApiRequest {
        self.next_fetch_seq += 1;
        self.latest_fetch_seq = self.next_fetch_seq;
        self.qna.loading = true;
        ApiRequest::FetchQna {
            seq: self.latest_fetch_seq,
            page: self.pager.current_page(),
            limit: self.pager.items_per_page(),
        }
    }

    /// Records passing the active filters, in page order.
    pub fn visible(&self) -> Vec<&QnaRecord> {
        filter::apply(&self.qna.records, &self.criteria)
    }

    /// The record under the cursor, if any.
    pub fn selected_record(&self) -> Option<&QnaRecord> {
        self.visible().get(self.qna.selected).copied()
    }

    /// Move the list cursor down.
    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.qna.selected + 1 < len {
            self.qna.selected += 1;
        }
    }

    /// Move the list cursor up.
    pub fn select_prev(&mut self) {
        self.qna.selected = self.qna.selected.saturating_sub(1);
    }

    /// Toggle expansion of the record under the cursor.
    pub fn toggle_expand_selected(&mut self) {
        if let Some(id) = self.selected_record().map(|r| r.id) {
            if !self.qna.expanded.remove(&id) {
                self.qna.expanded.insert(id);
            }
        }
    }

    /// Facet sidebar entries derived from the loaded page: categories first,
    /// then tags, both in first-seen order.
    pub fn facets(&self) -> Vec<Facet> {
        let mut out: Vec<Facet> = filter::categories(&self.qna.records)
            .into_iter()
            .map(Facet::Category)
            .collect();
        out.extend(filter::tags(&self.qna.records).into_iter().map(Facet::Tag));
        out
    }

    /// Whether a facet is currently selected.
    pub fn facet_selected(&self, facet: &Facet) -> bool {
        match facet {
            Facet::Category(c) => self.criteria.category.as_deref() == Some(c.as_str()),
            Facet::Tag(t) => self.criteria.tags.contains(t),
        }
    }

    /// Move the facet cursor down.
    pub fn facet_next(&mut self) {
        let len = self.facets().len();
        if len > 0 && self.facet_cursor + 1 < len {
            self.facet_cursor += 1;
        }
    }

    /// Move the facet cursor up.
    pub fn facet_prev(&mut self) {
        self.facet_cursor = self.facet_cursor.saturating_sub(1);
    }

    /// Toggle the facet under the cursor.
    pub fn toggle_facet(&mut self) {
        if let Some(facet) = self.facets().get(self.facet_cursor).cloned() {
            match facet {
                Facet::Category(c) => self.criteria.toggle_category(&c),
                Facet::Tag(t) => self.criteria.toggle_tag(&t),
            }
            self.clamp_selection();
        }
    }

    /// Start capturing search text, seeded with the current term.
    pub fn start_search(&mut self) {
        self.search = SearchInput::Typing(self.criteria.search_term.clone());
    }

    /// Commit the typed search term as the active filter.
    pub fn commit_search(&mut self) {
        if let SearchInput::Typing(buffer) = std::mem::take(&mut self.search) {
            self.criteria.search_term = buffer;
            self.clamp_selection();
        }
    }

    /// Abandon the typed search text, keeping the previous term.
    pub fn cancel_search(&mut self) {
        self.search = SearchInput::Inactive;
    }

    /// Drop every active filter.
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.clamp_selection();
    }

    /// Whether the session user has the admin role.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_admin())
    }

    /// Switch dashboard tabs, returning the lazy fetch for the tab's data.
    ///
    /// Admin-only tabs are refused for non-admin users with an error status
    /// rather than an empty rendering.
    pub fn set_tab(&mut self, tab: AdminTab) -> Option<ApiRequest> {
        if tab.admin_only() && !self.is_admin() {
            self.set_error("unauthorized: admin role required");
            return None;
        }
        self.tab = tab;
        match tab {
            AdminTab::Notes if !self.notes_loaded => Some(ApiRequest::FetchNotes),
            AdminTab::Accounts if !self.accounts_loaded => Some(ApiRequest::FetchAccounts),
            _ => None,
        }
    }

    /// Set an informational status message.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            kind: StatusKind::Info,
        });
    }

    /// Set an error status message.
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            kind: StatusKind::Error,
        });
    }

    /// Whether any modal (form, prompt, search, help) is capturing input.
    pub fn modal_open(&self) -> bool {
        self.qna_form.is_some()
            || self.note_form.is_some()
            || self.register_form.is_some()
            || self.confirm.is_open()
            || self.help_visible
            || matches!(self.search, SearchInput::Typing(_))
    }

    /// Apply one worker response.
    ///
    /// Returns the follow-up request to queue, if the transition calls for
    /// one (refetch after a save or delete, session fetch after login).
    pub fn apply_response(&mut self, response: ApiResponse) -> Option<ApiRequest> {
        match response {
            ApiResponse::QnaPage { seq, result } => self.apply_qna_page(seq, result),
            ApiResponse::QnaSaved(result) => match result {
                Ok(()) => {
                    self.qna_form = None;
                    self.set_status("saved");
                    Some(self.fetch_request())
                }
                Err(err) => {
                    if let Some(form) = &mut self.qna_form {
                        form.submitting = false;
                    }
                    self.set_error(err.status_line());
                    None
                }
            },
            ApiResponse::QnaDeleted(result) => {
                self.confirm.finish();
                match result {
                    Ok(()) => {
                        self.set_status("entry deleted");
                        Some(self.fetch_request())
                    }
                    Err(err) => {
                        self.set_error(err.status_line());
                        None
                    }
                }
            }
            ApiResponse::Me(result) => {
                match result {
                    Ok(user) => self.user = Some(user),
                    Err(err) => {
                        // No session (or it expired); browse stays available.
                        debug!(error = %err, "no active session");
                        self.user = None;
                    }
                }
                None
            }
            ApiResponse::LoggedIn(result) => match result {
                Ok(()) => {
                    self.login = LoginForm::new();
                    self.screen = Screen::Dashboard;
                    self.tab = AdminTab::Qna;
                    self.set_status("logged in");
                    Some(ApiRequest::FetchMe)
                }
                Err(err) => {
                    self.login.fail(err.status_line());
                    None
                }
            },
            ApiResponse::LoggedOut(result) => {
                if let Err(err) = result {
                    warn!(error = %err, "logout request failed");
                }
                // Local session state is cleared either way.
                self.user = None;
                self.screen = Screen::Browse;
                self.tab = AdminTab::Qna;
                self.notes.clear();
                self.notes_loaded = false;
                self.accounts.clear();
                self.accounts_loaded = false;
                self.set_status("logged out");
                None
            }
            ApiResponse::Registered(result) => match result {
                Ok(()) => {
                    self.register_form = None;
                    self.set_status("account created");
                    Some(ApiRequest::FetchAccounts)
                }
                Err(err) => {
                    if let Some(form) = &mut self.register_form {
                        form.submitting = false;
                        form.error = Some(err.status_line());
                    }
                    None
                }
            },
            ApiResponse::Notes(result) => {
                match result {
                    Ok(notes) => {
                        self.notes = notes;
                        self.notes_loaded = true;
                    }
                    Err(err) => self.set_error(err.status_line()),
                }
                None
            }
            ApiResponse::NoteCreated(result) => {
                match result {
                    Ok(note) => {
                        self.note_form = None;
                        // Newest first, matching the list ordering.
                        self.notes.insert(0, note);
                        self.set_status("note added");
                    }
                    Err(err) => {
                        if let Some(form) = &mut self.note_form {
                            form.submitting = false;
                        }
                        self.set_error(err.status_line());
                    }
                }
                None
            }
            ApiResponse::NoteDeleted { id, result } => {
                self.confirm.finish();
                match result {
                    Ok(()) => {
                        self.notes.retain(|n| n.id != id);
                        self.set_status("note deleted");
                    }
                    Err(err) => self.set_error(err.status_line()),
                }
                None
            }
            ApiResponse::Accounts(result) => {
                match result {
                    Ok(accounts) => {
                        self.accounts = accounts;
                        self.accounts_loaded = true;
                    }
                    Err(err) => self.set_error(err.status_line()),
                }
                None
            }
            ApiResponse::AccountDeleted(result) => {
                self.confirm.finish();
                match result {
                    Ok(()) => {
                        self.set_status("account deleted");
                        Some(ApiRequest::FetchAccounts)
                    }
                    Err(err) => {
                        self.set_error(err.status_line());
                        None
                    }
                }
            }
        }
    }

    fn apply_qna_page(
        &mut self,
        seq: u64,
        result: Result<crate::api::QnaPage, crate::model::ApiError>,
    ) -> Option<ApiRequest> {
        if seq != self.latest_fetch_seq {
            debug!(seq, latest = self.latest_fetch_seq, "discarding stale page");
            return None;
        }
        self.qna.loading = false;
        match result {
            Ok(page) => {
                // A delete can shrink the dataset under us; when the backend
                // reports fewer pages than we asked for, snap back and
                // refetch the real last page.
                if page.items.is_empty()
                    && page.pagination.total_pages > 0
                    && self.pager.current_page() > page.pagination.total_pages
                {
                    self.pager.clamp_to(page.pagination.total_pages);
                    return Some(self.fetch_request());
                }

                let ids: HashSet<u64> = page.items.iter().map(|r| r.id).collect();
                self.qna.expanded.retain(|id| ids.contains(id));
                self.qna.records = page.items;
                self.qna.meta = page.pagination;
                self.pager.clamp_to(self.qna.meta.total_pages);
                self.clamp_selection();
                None
            }
            Err(err) => {
                // Keep the prior page on screen; only surface the failure.
                warn!(error = %err, "page fetch failed");
                self.set_error(err.status_line());
                None
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.qna.selected = self.qna.selected.min(len.saturating_sub(1));
        let facet_len = self.facets().len();
        self.facet_cursor = self.facet_cursor.min(facet_len.saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
