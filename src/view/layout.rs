//! Card list layout and element probes.
//!
//! Lays the cards out as a single column and derives, for each card, the
//! bounding rect the lazy loader sees. Heights are computed from content
//! alone (long lines truncate rather than wrap), so layout is deterministic
//! and cheap enough to recompute every tick.

use crate::lazy::{BoundingRect, Dimensions, ElementProbe};
use crate::model::Issue;

/// Maximum body lines a card devotes to the issue body.
pub const BODY_MAX_LINES: u16 = 8;

/// Blank lines between consecutive cards.
pub const CARD_GAP: u16 = 1;

/// One card's slot in the laid-out column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    /// Top edge in content lines, from the top of the list.
    pub y: usize,
    /// Card height in lines, borders included.
    pub height: u16,
}

/// Height of one card, borders included.
///
/// Sections mirror the card template: repository, title, status, creation
/// date, one line per label, author, one line per assignee, body (capped),
/// detail URL. Absent sections take no space.
pub fn card_height(issue: &Issue) -> u16 {
    let mut rows: u16 = 2; // borders (heading lives on the top border)
    if issue.repository.is_some() {
        rows += 1;
    }
    rows += 1; // title
    rows += 1; // status
    if issue.created_at.is_some() {
        rows += 1;
    }
    rows = rows.saturating_add(issue.labels.len().min(u16::MAX as usize) as u16);
    if issue.author.is_some() {
        rows += 1;
    }
    rows = rows.saturating_add(issue.assignees.len().min(u16::MAX as usize) as u16);
    if !issue.body.is_empty() {
        let body_lines = issue.body.lines().count().min(BODY_MAX_LINES as usize) as u16;
        rows = rows.saturating_add(body_lines.max(1));
    }
    if issue.html_url.is_some() {
        rows += 1;
    }
    rows
}

/// Lay out all cards as a column. Returns the slots and the total content
/// height in lines.
pub fn layout_cards<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> (Vec<CardSlot>, usize) {
    let mut slots = Vec::new();
    let mut y = 0usize;
    for (index, issue) in issues.into_iter().enumerate() {
        if index > 0 {
            y += CARD_GAP as usize;
        }
        let height = card_height(issue);
        slots.push(CardSlot { y, height });
        y += height as usize;
    }
    (slots, y)
}

/// [`ElementProbe`] backed by a card's laid-out slot.
///
/// The rect is viewport-relative: a card scrolled past the top has a
/// negative top edge. A probe built without a slot (card not laid out)
/// reports detached.
#[derive(Debug, Clone, Copy)]
pub struct CardProbe {
    rect: Option<BoundingRect>,
    size: Dimensions,
}

impl CardProbe {
    /// Probe for a laid-out card at the current scroll offset.
    pub fn new(slot: CardSlot, scroll_offset: usize, width: u16) -> Self {
        let top = slot.y as i64 - scroll_offset as i64;
        let bottom = top + i64::from(slot.height);
        Self {
            rect: Some(BoundingRect::new(top as i32, bottom as i32)),
            size: Dimensions::new(width, slot.height),
        }
    }

    /// Probe for a card with no layout slot.
    pub fn detached() -> Self {
        Self {
            rect: None,
            size: Dimensions::ZERO,
        }
    }
}

impl ElementProbe for CardProbe {
    fn bounding_rect(&self) -> Option<BoundingRect> {
        self.rect
    }

    fn client_size(&self) -> Dimensions {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Account, IssueState, Label};

    fn bare_issue() -> Issue {
        Issue {
            id: 1,
            repository: None,
            title: "t".to_string(),
            state: IssueState::Open,
            labels: vec![],
            assignees: vec![],
            author: None,
            body: String::new(),
            html_url: None,
            created_at: None,
        }
    }

    #[test]
    fn bare_card_is_borders_plus_title_and_status() {
        assert_eq!(card_height(&bare_issue()), 4);
    }

    #[test]
    fn each_label_and_assignee_adds_a_line() {
        let mut issue = bare_issue();
        issue.labels = vec![
            Label {
                name: "bug".to_string(),
            },
            Label {
                name: "ui".to_string(),
            },
        ];
        issue.assignees = vec![Account {
            login: "octocat".to_string(),
            html_url: None,
        }];
        assert_eq!(card_height(&issue), 4 + 3);
    }

    #[test]
    fn creation_date_adds_a_line() {
        use chrono::TimeZone;
        let mut issue = bare_issue();
        issue.created_at = Some(chrono::Utc.with_ymd_and_hms(2026, 4, 22, 13, 33, 48).unwrap());
        assert_eq!(card_height(&issue), 5);
    }

    #[test]
    fn body_is_capped() {
        let mut issue = bare_issue();
        issue.body = vec!["line"; 40].join("\n");
        assert_eq!(card_height(&issue), 4 + BODY_MAX_LINES);
    }

    #[test]
    fn layout_stacks_cards_with_gaps() {
        let issues = vec![bare_issue(), bare_issue(), bare_issue()];
        let (slots, total) = layout_cards(&issues);
        assert_eq!(slots[0].y, 0);
        assert_eq!(slots[1].y, 5); // 4 + gap
        assert_eq!(slots[2].y, 10);
        assert_eq!(total, 14);
    }

    #[test]
    fn empty_list_lays_out_to_nothing() {
        let (slots, total) = layout_cards(&[]);
        assert!(slots.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn probe_rect_is_scroll_relative() {
        let slot = CardSlot { y: 100, height: 10 };
        let probe = CardProbe::new(slot, 95, 60);
        assert_eq!(probe.bounding_rect(), Some(BoundingRect::new(5, 15)));
        assert_eq!(probe.client_size(), Dimensions::new(60, 10));
    }

    #[test]
    fn probe_rect_goes_negative_when_scrolled_past() {
        let slot = CardSlot { y: 10, height: 10 };
        let probe = CardProbe::new(slot, 25, 60);
        assert_eq!(probe.bounding_rect(), Some(BoundingRect::new(-15, -5)));
    }

    #[test]
    fn detached_probe_reports_nothing() {
        let probe = CardProbe::detached();
        assert_eq!(probe.bounding_rect(), None);
        assert_eq!(probe.client_size(), Dimensions::ZERO);
    }
}
