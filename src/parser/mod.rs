//! Issue payload parser.
//!
//! Pure functions converting the raw JSON array returned by the issues
//! endpoint into validated [`Issue`] values. Parsing is tolerant at the
//! record level: the tracker omits fields freely, so every field defaults,
//! and a record that fails to decode is reported (and skipped by callers)
//! without poisoning the rest of the payload.

use crate::model::{Account, Issue, IssueState, Label, ParseError, Repository};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw JSON structure for one issue record.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawIssue {
    id: Option<u64>,
    repository: Option<RawRepository>,
    title: Option<String>,
    state: Option<String>,
    labels: Option<Vec<RawLabel>>,
    assignees: Option<Vec<RawAccount>>,
    user: Option<RawAccount>,
    body: Option<String>,
    html_url: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRepository {
    name: Option<String>,
    html_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLabel {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAccount {
    login: Option<String>,
    html_url: Option<String>,
}

/// Parse the full payload body.
///
/// Returns the successfully decoded issues and a separate list of
/// record-level errors, in payload order.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` if the body is not JSON at all, or
/// `ParseError::NotAnArray` if the top level is not an array. Record-level
/// failures are collected, not returned as `Err`.
pub fn parse_issues(body: &str) -> Result<(Vec<Issue>, Vec<ParseError>), ParseError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|err| ParseError::InvalidJson {
            reason: err.to_string(),
        })?;

    let records = match value {
        serde_json::Value::Array(records) => records,
        _ => return Err(ParseError::NotAnArray),
    };

    let mut issues = Vec::new();
    let mut errors = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<RawIssue>(record) {
            Ok(raw) => issues.push(convert(raw)),
            Err(err) => errors.push(ParseError::MalformedRecord {
                index,
                reason: err.to_string(),
            }),
        }
    }

    Ok((issues, errors))
}

/// Convert a raw record into the domain shape, defaulting absent fields.
fn convert(raw: RawIssue) -> Issue {
    Issue {
        id: raw.id.unwrap_or(0),
        repository: raw.repository.map(|repo| Repository {
            name: repo.name.unwrap_or_default(),
            html_url: repo.html_url,
        }),
        title: raw.title.unwrap_or_default(),
        state: IssueState::parse(&raw.state.unwrap_or_default()),
        labels: raw
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|label| Label {
                name: label.name.unwrap_or_default(),
            })
            .collect(),
        assignees: raw
            .assignees
            .unwrap_or_default()
            .into_iter()
            .map(convert_account)
            .collect(),
        author: raw.user.map(convert_account),
        body: raw.body.unwrap_or_default(),
        html_url: raw.html_url,
        created_at: raw.created_at,
    }
}

fn convert_account(raw: RawAccount) -> Account {
    Account {
        login: raw.login.unwrap_or_default(),
        html_url: raw.html_url,
    }
}
