//! Issue card widget.
//!
//! Maps one issue record to a bordered card: repository, title, status,
//! labels, author, assignees, markdown body and the "view more" URL. The
//! expensive content only renders once the card's lazy loader has mounted
//! it; until then a placeholder occupies the card's box so geometry
//! measurement keeps working.

use crate::lazy::{Dimensions, MountDecision, PlaceholderSizing};
use crate::model::{Issue, IssueState};
use crate::view::styles::CardStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to `width` display columns, appending an ellipsis when
/// anything was cut. Text that already fits, exactly or with room to spare,
/// passes through unchanged.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    // One column is reserved for the ellipsis.
    let budget = width.saturating_sub(1);
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// One issue card, rendered per its mount decision.
pub struct IssueCard<'a> {
    issue: &'a Issue,
    decision: MountDecision,
    selected: bool,
    styles: &'a CardStyles,
}

impl<'a> IssueCard<'a> {
    /// Create a card widget.
    pub fn new(
        issue: &'a Issue,
        decision: MountDecision,
        selected: bool,
        styles: &'a CardStyles,
    ) -> Self {
        Self {
            issue,
            decision,
            selected,
            styles,
        }
    }

    fn block(&self) -> Block<'a> {
        let border_style = if self.selected {
            self.styles.selected_border
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(self.issue.heading(), self.styles.heading))
    }

    fn state_style(&self) -> Style {
        match self.issue.state {
            IssueState::Open => self.styles.open,
            IssueState::Closed => self.styles.closed,
            IssueState::Other(_) => Style::default(),
        }
    }

    fn section(&self, caption: &str, value: String, value_style: Style) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{caption}: "), self.styles.caption),
            Span::styled(value, value_style),
        ])
    }

    /// Compose the mounted card content, bounded by the injected measured
    /// dimensions.
    fn content_lines(&self, dimensions: Dimensions, inner_width: usize) -> Vec<Line<'_>> {
        let issue = self.issue;
        let mut lines = Vec::new();

        if let Some(repo) = &issue.repository {
            lines.push(self.section("Repo", fit_width(&repo.name, inner_width), self.styles.link));
        }
        lines.push(self.section(
            "Title",
            fit_width(&issue.title, inner_width),
            Style::default(),
        ));
        lines.push(self.section(
            "Status",
            issue.state.as_str().to_string(),
            self.state_style(),
        ));
        if let Some(created) = issue.created_at {
            lines.push(self.section(
                "Created",
                created.format("%Y-%m-%d").to_string(),
                Style::default(),
            ));
        }
        for label in &issue.labels {
            lines.push(self.section("Label", fit_width(&label.name, inner_width), self.styles.label));
        }
        if let Some(author) = &issue.author {
            lines.push(self.section(
                "Assigned By",
                fit_width(&author.login, inner_width),
                self.styles.link,
            ));
        }
        for assignee in &issue.assignees {
            lines.push(self.section(
                "Assigned To",
                fit_width(&assignee.login, inner_width),
                self.styles.link,
            ));
        }

        if !issue.body.is_empty() {
            // The body gets whatever rows the measured height leaves over.
            let fixed = lines.len() + usize::from(issue.html_url.is_some()) + 2;
            let budget = usize::from(dimensions.height).saturating_sub(fixed);
            let body = tui_markdown::from_str(&issue.body);
            lines.extend(body.lines.into_iter().take(budget));
        }

        if let Some(url) = &issue.html_url {
            lines.push(self.section(
                "View More",
                fit_width(url, inner_width),
                self.styles.link,
            ));
        }

        lines
    }
}

impl Widget for IssueCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height == 0 {
            return;
        }

        match self.decision {
            MountDecision::Placeholder(sizing) => {
                let area = placeholder_area(area, sizing);
                let block = self.block();
                let inner = block.inner(area);
                block.render(area, buf);
                let placeholder =
                    Paragraph::new(Line::styled("…", self.styles.placeholder));
                placeholder.render(inner, buf);
            }
            MountDecision::Mount(dimensions) => {
                let block = self.block();
                let inner = block.inner(area);
                let lines = self.content_lines(dimensions, inner.width as usize);
                Paragraph::new(lines).block(block).render(area, buf);
            }
        }
    }
}

/// Placeholder layout policy: bounded sizing fills the parent up to the
/// configured maxima; otherwise the placeholder stretches edge-to-edge.
fn placeholder_area(area: Rect, sizing: PlaceholderSizing) -> Rect {
    match sizing {
        PlaceholderSizing::FillParent => area,
        PlaceholderSizing::Bounded {
            max_width,
            max_height,
        } => Rect {
            x: area.x,
            y: area.y,
            width: max_width.map_or(area.width, |max| area.width.min(max)),
            height: max_height.map_or(area.height, |max| area.height.min(max)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_passes_short_text_through() {
        assert_eq!(fit_width("short", 20), "short");
    }

    #[test]
    fn fit_width_truncates_with_ellipsis() {
        assert_eq!(fit_width("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn fit_width_keeps_exact_fit_intact() {
        assert_eq!(fit_width("abcde", 5), "abcde");
    }

    #[test]
    fn fit_width_truncates_one_column_over() {
        assert_eq!(fit_width("abcdef", 5), "abcd…");
    }

    #[test]
    fn fit_width_counts_wide_characters() {
        // CJK glyphs are two columns wide.
        let fitted = fit_width("日本語テキスト", 7);
        assert!(fitted.ends_with('…'));
        assert!(fitted.chars().count() < 8);
    }

    #[test]
    fn bounded_placeholder_is_clamped_to_maxima() {
        let area = Rect::new(0, 0, 80, 40);
        let clamped = placeholder_area(
            area,
            PlaceholderSizing::Bounded {
                max_width: Some(60),
                max_height: None,
            },
        );
        assert_eq!(clamped.width, 60);
        assert_eq!(clamped.height, 40);
    }

    #[test]
    fn fill_parent_placeholder_takes_the_whole_box() {
        let area = Rect::new(0, 0, 80, 40);
        assert_eq!(placeholder_area(area, PlaceholderSizing::FillParent), area);
    }

    #[test]
    fn bounded_maxima_larger_than_area_change_nothing() {
        let area = Rect::new(0, 0, 30, 10);
        let clamped = placeholder_area(
            area,
            PlaceholderSizing::Bounded {
                max_width: Some(100),
                max_height: Some(100),
            },
        );
        assert_eq!(clamped, area);
    }
}
