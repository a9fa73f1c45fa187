//! Domain model types (pure).
//!
//! Value objects mirroring the backend wire format, plus the error taxonomy
//! and domain-level keyboard actions. Nothing in here performs I/O.

pub mod error;
pub mod key_action;
pub mod note;
pub mod pagination;
pub mod qna;
pub mod user;

// Re-export for convenience
pub use error::{ApiError, AppError};
pub use key_action::KeyAction;
pub use note::Note;
pub use pagination::PaginationMeta;
pub use qna::{QnaPayload, QnaRecord};
pub use user::{RegisterPayload, Role, User};
