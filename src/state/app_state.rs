//! Central application state (pure).

use crate::lazy::{LazyLoader, LazyOptions, LazyTuning};
use crate::model::Issue;
use std::time::Instant;

/// One issue card: the record plus its own lazy-load lifecycle.
///
/// Every card owns its loader exclusively; no state crosses cards.
#[derive(Debug)]
pub struct Card {
    /// The issue rendered on this card.
    pub issue: Issue,
    /// Deferred-mount lifecycle for the card's expensive content.
    pub lazy: LazyLoader,
}

/// Pure application state for the card browser.
#[derive(Debug)]
pub struct AppState {
    cards: Vec<Card>,
    loading: bool,
    /// Scroll offset in lines from the top of the card list.
    pub scroll_offset: usize,
    /// Index of the selected card.
    pub selected: usize,
    /// One-line status message shown at the bottom of the screen.
    pub status: Option<String>,
}

impl AppState {
    /// Create the pre-fetch "Loading…" state.
    pub fn loading() -> Self {
        Self {
            cards: Vec::new(),
            loading: true,
            scroll_offset: 0,
            selected: 0,
            status: None,
        }
    }

    /// Create state from fetched issues, starting each card's lazy
    /// lifecycle at `now`.
    pub fn with_issues(
        issues: Vec<Issue>,
        options: &LazyOptions,
        tuning: &LazyTuning,
        now: Instant,
    ) -> Self {
        let cards = issues
            .into_iter()
            .map(|issue| {
                let mut lazy = LazyLoader::with_tuning(options.clone(), tuning.clone());
                lazy.start(now);
                Card { issue, lazy }
            })
            .collect();
        Self {
            cards,
            loading: false,
            scroll_offset: 0,
            selected: 0,
            status: None,
        }
    }

    /// Whether issue data has not arrived yet.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The cards, in payload order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Mutable access to the cards (for lifecycle driving).
    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// The selected card's issue, if any cards exist.
    pub fn selected_issue(&self) -> Option<&Issue> {
        self.cards.get(self.selected).map(|card| &card.issue)
    }

    /// Clamp the scroll offset to `[0, max]`.
    pub fn clamp_scroll(&mut self, max: usize) {
        self.scroll_offset = self.scroll_offset.min(max);
    }

    /// Move selection forward, clamped to the last card.
    pub fn select_next(&mut self) {
        if !self.cards.is_empty() {
            self.selected = (self.selected + 1).min(self.cards.len() - 1);
        }
    }

    /// Move selection backward, clamped to the first card.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Stop every card's lazy lifecycle. Called on teardown so no deferred
    /// callback can observe a disposed element.
    pub fn stop_all(&mut self) {
        for card in &mut self.cards {
            card.lazy.stop();
        }
    }
}

/// Adjust a scroll offset so the region `[y, y + height)` (in content
/// lines) is visible in a viewport of `viewport_height` lines.
///
/// Scrolls the minimum distance; a region taller than the viewport aligns
/// its top edge.
pub fn scroll_to_reveal(
    scroll_offset: usize,
    y: usize,
    height: usize,
    viewport_height: usize,
) -> usize {
    if y < scroll_offset {
        y
    } else if y + height > scroll_offset + viewport_height {
        (y + height)
            .saturating_sub(viewport_height)
            // Never push the top of the region out of view.
            .min(y)
    } else {
        scroll_offset
    }
}
