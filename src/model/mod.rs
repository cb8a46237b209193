//! Domain model types (pure).

pub mod error;
pub mod issue;
pub mod key_action;

// Re-export for convenience
pub use error::{AppError, FetchError, LoggingError, ParseError};
pub use issue::{Account, Issue, IssueState, Label, Repository};
pub use key_action::KeyAction;
