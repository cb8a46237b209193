//! Keyboard action handler (pure).
//!
//! Transforms [`AppState`] in response to semantic key actions. Scroll
//! arithmetic saturates and is clamped against the current content height;
//! the caller supplies both heights because only the view layer knows them.

use crate::model::KeyAction;
use crate::state::AppState;
use tracing::debug;

/// Apply a key action to the state.
///
/// `viewport_height` is the card list viewport in lines; `total_height` is
/// the full laid-out content height. Returns the new state.
pub fn handle_key_action(
    mut state: AppState,
    action: KeyAction,
    viewport_height: usize,
    total_height: usize,
) -> AppState {
    let max_scroll = total_height.saturating_sub(viewport_height);

    match action {
        KeyAction::ScrollUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        KeyAction::ScrollDown => {
            state.scroll_offset = state.scroll_offset.saturating_add(1).min(max_scroll);
        }
        KeyAction::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(viewport_height);
        }
        KeyAction::PageDown => {
            state.scroll_offset = state
                .scroll_offset
                .saturating_add(viewport_height)
                .min(max_scroll);
        }
        KeyAction::Top => {
            state.scroll_offset = 0;
        }
        KeyAction::Bottom => {
            state.scroll_offset = max_scroll;
        }
        KeyAction::NextCard => {
            state.select_next();
        }
        KeyAction::PrevCard => {
            state.select_prev();
        }
        KeyAction::OpenDetail => {
            state.status = Some(match state.selected_issue().and_then(|i| i.detail_url()) {
                Some(url) => {
                    debug!(url, "View more requested");
                    format!("Open: {url}")
                }
                None => "Selected issue has no detail URL".to_string(),
            });
        }
        // Quit is handled by the event loop.
        KeyAction::Quit => {}
    }

    state
}
