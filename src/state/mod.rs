//! Application state and pure action handlers.

pub mod app_state;
pub mod scroll_handler;

pub use app_state::{scroll_to_reveal, AppState, Card};
pub use scroll_handler::handle_key_action;
