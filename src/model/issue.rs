//! Issue record domain types (pure).
//!
//! These are the validated shapes produced by the parser from raw API
//! records. Fields that the remote tracker may omit are optional; the card
//! view tolerates every combination.

use chrono::{DateTime, Utc};
use std::fmt;

/// Lifecycle state of an issue as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueState {
    /// The issue is open.
    Open,
    /// The issue is closed.
    Closed,
    /// Any other state string the tracker reports, preserved verbatim.
    Other(String),
}

impl IssueState {
    /// Parse a state string. Unknown strings are preserved, not rejected.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "open" => Self::Open,
            "closed" => Self::Closed,
            other => Self::Other(other.to_string()),
        }
    }

    /// The display string for this state.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Label name.
    pub name: String,
}

/// A user account referenced by an issue (author or assignee).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Login name.
    pub login: String,
    /// Profile URL, if the tracker provides one.
    pub html_url: Option<String>,
}

/// The repository an issue belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Repository name.
    pub name: String,
    /// Repository URL, if the tracker provides one.
    pub html_url: Option<String>,
}

/// One issue record, as rendered on a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Tracker-assigned identifier.
    pub id: u64,
    /// Owning repository, if reported.
    pub repository: Option<Repository>,
    /// Issue title.
    pub title: String,
    /// Current state.
    pub state: IssueState,
    /// Attached labels, possibly empty.
    pub labels: Vec<Label>,
    /// Assigned accounts, possibly empty.
    pub assignees: Vec<Account>,
    /// The account that filed the issue, if reported.
    pub author: Option<Account>,
    /// Markdown body, possibly empty.
    pub body: String,
    /// Detail URL opened by the "view more" action.
    pub html_url: Option<String>,
    /// Creation timestamp, if reported.
    pub created_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Card heading, e.g. `Issue 1347`.
    pub fn heading(&self) -> String {
        format!("Issue {}", self.id)
    }

    /// The detail URL for the "view more" action, if any.
    pub fn detail_url(&self) -> Option<&str> {
        self.html_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_parses_known_values() {
        assert_eq!(IssueState::parse("open"), IssueState::Open);
        assert_eq!(IssueState::parse("closed"), IssueState::Closed);
    }

    #[test]
    fn state_preserves_unknown_values() {
        let state = IssueState::parse("wontfix");
        assert_eq!(state, IssueState::Other("wontfix".to_string()));
        assert_eq!(state.as_str(), "wontfix");
    }

    #[test]
    fn heading_includes_id() {
        let issue = Issue {
            id: 1347,
            repository: None,
            title: "Title".to_string(),
            state: IssueState::Open,
            labels: vec![],
            assignees: vec![],
            author: None,
            body: String::new(),
            html_url: None,
            created_at: None,
        };
        assert_eq!(issue.heading(), "Issue 1347");
    }
}
