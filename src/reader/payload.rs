use serde::Serialize;

use crate::domain::{EntryId, FeedId};
use crate::reader::ArticleView;

/// Machine-readable view for API consumers such as e-ink readers.
#[derive(Debug, Clone, Serialize)]
pub struct ArticlePayload {
    pub total: usize,
    pub position: usize,
    pub feed_filter: Option<FeedId>,
    pub article: Option<ArticleSummary>,
    pub feeds: Vec<FeedSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary {
    pub id: EntryId,
    pub title: String,
    pub feed_id: FeedId,
    pub feed: String,
    /// `YYYY-MM-DD`, empty when unknown.
    pub date: String,
    pub url: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedSummary {
    pub id: FeedId,
    pub title: String,
}

/// Result of a mark-read or star request.
#[derive(Debug, Clone, Serialize)]
pub struct MutationPayload {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MutationPayload {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

impl From<&ArticleView> for ArticlePayload {
    fn from(view: &ArticleView) -> Self {
        let article = view.article.as_ref().map(|resolved| ArticleSummary {
            id: resolved.entry.id,
            title: resolved.entry.display_title().to_string(),
            feed_id: resolved.entry.feed_id,
            feed: resolved.feed_title.clone(),
            date: resolved.entry.published_date(),
            url: resolved.entry.url.clone().unwrap_or_default(),
            content: resolved.display_content.clone(),
        });

        let feeds = view
            .subscriptions
            .iter()
            .map(|s| FeedSummary {
                id: s.feed_id,
                title: s.title.clone(),
            })
            .collect();

        Self {
            total: view.total,
            position: view.position,
            feed_filter: view.feed_filter,
            article,
            feeds,
        }
    }
}
