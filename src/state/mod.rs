//! Application state: pure data and transitions, no terminal or network.

pub mod app_state;
pub mod confirm;
pub mod filter;
pub mod login;
pub mod note_form;
pub mod pager;
pub mod qna_form;
pub mod register_form;

pub use app_state::{AdminTab, AppState, Facet, FocusPane, Screen, SearchInput, StatusKind, StatusLine};
pub use confirm::{ConfirmState, DeleteTarget};
pub use filter::FilterCriteria;
pub use login::{LoginField, LoginForm};
pub use note_form::{NoteField, NoteForm};
pub use pager::{page_tokens, PageToken, PagerState, LIMIT_CHOICES};
pub use qna_form::{FieldErrors, FormField, QnaForm, CATEGORY_CHOICES};
pub use register_form::{RegisterField, RegisterForm};
