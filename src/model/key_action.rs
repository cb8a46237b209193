//! Semantic key actions, decoupled from physical key events.

/// Actions the card browser understands.
///
/// Physical key events are translated to these by the key bindings in
/// `config::keybindings`; handlers never see raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Scroll the card list up by one line.
    ScrollUp,
    /// Scroll the card list down by one line.
    ScrollDown,
    /// Scroll up by one viewport height.
    PageUp,
    /// Scroll down by one viewport height.
    PageDown,
    /// Jump to the top of the list.
    Top,
    /// Jump to the bottom of the list.
    Bottom,
    /// Move selection to the next card.
    NextCard,
    /// Move selection to the previous card.
    PrevCard,
    /// Surface the selected card's detail URL ("view more").
    OpenDetail,
    /// Quit the application.
    Quit,
}
