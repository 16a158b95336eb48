use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::FeedId;

pub type EntryId = i64;

/// An upstream entry as returned by the feed API.
///
/// Snapshot for one request only; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub feed_id: FeedId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub extracted_content_url: Option<String>,
}

impl Entry {
    pub fn new(id: EntryId, feed_id: FeedId) -> Self {
        Self {
            id,
            feed_id,
            title: None,
            url: None,
            author: None,
            summary: None,
            content: None,
            published: None,
            extracted_content_url: None,
        }
    }

    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("Untitled")
    }

    /// Stored content, empty when upstream sent none.
    pub fn raw_content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Publish time at the offset upstream wrote it with.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.published.as_deref()?).ok()
    }

    /// `YYYY-MM-DD` as written upstream, or an empty string when there is
    /// no publish date. The day is never shifted to another timezone.
    pub fn published_date(&self) -> String {
        if let Some(dt) = self.published_at() {
            return dt.format("%Y-%m-%d").to_string();
        }
        self.published
            .as_deref()
            .map(|p| p.chars().take(10).collect())
            .unwrap_or_default()
    }
}
