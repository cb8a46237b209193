//! Default key bindings.
//!
//! Maps physical key events to semantic [`KeyAction`]s so handlers never
//! see raw key codes.

use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding table. Currently the default vi-flavored set.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {}

impl KeyBindings {
    /// Create the default bindings.
    pub fn new() -> Self {
        Self {}
    }

    /// Translate a key event, `None` when unbound.
    pub fn resolve(&self, key: KeyEvent) -> Option<KeyAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => Some(KeyAction::Quit),
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                Some(KeyAction::ScrollUp)
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                Some(KeyAction::ScrollDown)
            }
            (KeyCode::PageUp, _) => Some(KeyAction::PageUp),
            (KeyCode::PageDown, _) => Some(KeyAction::PageDown),
            (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => Some(KeyAction::Top),
            (KeyCode::End, _) | (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
                Some(KeyAction::Bottom)
            }
            (KeyCode::Tab, _) | (KeyCode::Char('n'), KeyModifiers::NONE) => {
                Some(KeyAction::NextCard)
            }
            (KeyCode::BackTab, _) | (KeyCode::Char('p'), KeyModifiers::NONE) => {
                Some(KeyAction::PrevCard)
            }
            (KeyCode::Enter, _) => Some(KeyAction::OpenDetail),
            _ => None,
        }
    }
}
