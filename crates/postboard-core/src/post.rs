//! This module defines the `Post` struct which is the heart of postboard.

use crate::{constant, Viewer};
use chrono::{DateTime, FixedOffset, Utc};
use std::fmt::{Display, Formatter};
use textwrap::core::display_width;
use textwrap::{self, wrap};

/// A user-authored forum submission. Owned by the remote API; the view
/// never mutates one. The wire format is the server's camelCase JSON.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    id: String,
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Post {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            user_id: user_id.into(),
            created_at,
            updated_at: created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the delete affordance should be shown to this viewer.
    pub fn is_owned_by(&self, viewer: &Viewer) -> bool {
        viewer.owns(&self.user_id)
    }

    /// The "Posted on" line, rendered in IST with a 12-hour clock the
    /// way the web UI formats it.
    pub fn posted_on(&self) -> String {
        format_ist(self.created_at)
    }
}

/// Format a timestamp for display in India Standard Time,
/// day/month/year with a 12-hour clock.
pub fn format_ist(ts: DateTime<Utc>) -> String {
    // The offset is a known-valid constant.
    let ist = FixedOffset::east_opt(constant::IST_OFFSET_SECS).unwrap();
    ts.with_timezone(&ist).format("%d/%m/%Y, %I:%M %P").to_string()
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let content_width = constant::CARD_WIDTH;
        writeln!(f, "+{:-<1$}+", "", content_width + 2)?;
        writeln!(f, "| {:^1$} |", self.title, content_width)?;
        writeln!(
            f,
            "| {:<1$} |",
            format!("Posted on {}", self.posted_on()),
            content_width
        )?;
        writeln!(f, "| {:<1$} |", "", content_width)?;
        let wrapping_config = textwrap::Options::new(content_width).break_words(true);
        for line in wrap(&self.content, wrapping_config) {
            let text_width = display_width(&line);
            let whitespace = content_width.saturating_sub(text_width);
            writeln!(f, "| {}{} |", line, " ".repeat(whitespace))?;
        }
        write!(f, "+{:-<1$}+", "", content_width + 2)
    }
}
