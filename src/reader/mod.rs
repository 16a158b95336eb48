//! The reading-pane boundary.
//!
//! Every operation takes the client's navigation state as input and
//! re-derives everything else from the upstream API. Front ends (CLI, TUI)
//! hold the state and echo it back on the next call.

pub mod action;
pub mod payload;

pub use action::NavAction;
pub use payload::{ArticlePayload, ArticleSummary, FeedSummary, MutationPayload};

use std::sync::Arc;

use crate::app::Result;
use crate::domain::{EntryId, FeedId, NavigationState, ResolvedArticle, SubscriptionIndex};
use crate::extract::ContentFormat;
use crate::resolver::{ContentResolver, PositionNavigator, UnreadSetResolver};
use crate::upstream::FeedApi;

/// Everything a front end needs to draw one screen.
#[derive(Debug, Clone)]
pub struct ArticleView {
    pub total: usize,
    pub position: usize,
    pub feed_filter: Option<FeedId>,
    pub article: Option<ResolvedArticle>,
    pub subscriptions: SubscriptionIndex,
}

impl ArticleView {
    pub fn navigation(&self) -> NavigationState {
        NavigationState {
            position: self.position as i64,
            feed_filter: self.feed_filter,
            total: self.total,
        }
    }

    pub fn entry_id(&self) -> Option<EntryId> {
        self.article.as_ref().map(|a| a.entry.id)
    }
}

pub struct Reader {
    api: Arc<dyn FeedApi>,
    unread: UnreadSetResolver,
    content: ContentResolver,
}

impl Reader {
    pub fn new(api: Arc<dyn FeedApi>, unread: UnreadSetResolver, content: ContentResolver) -> Self {
        Self {
            api,
            unread,
            content,
        }
    }

    pub async fn subscriptions(&self) -> Result<SubscriptionIndex> {
        Ok(SubscriptionIndex::from_list(self.api.subscriptions().await?))
    }

    /// Resolve the article at `position` within the (optionally filtered)
    /// unread set.
    ///
    /// An empty unread set is a normal result with `total == 0`.
    pub async fn view(
        &self,
        feed_filter: Option<FeedId>,
        position: i64,
        format: ContentFormat,
    ) -> Result<ArticleView> {
        let subscriptions = self.subscriptions().await?;
        let ids = self.unread.resolve(self.api.as_ref(), feed_filter).await?;
        let selection = PositionNavigator::select(&ids, position);

        let article = match selection.entry_id {
            Some(entry_id) => {
                let entry = self.api.entry(entry_id).await?;
                let display_content = self.content.resolve(&entry, format).await;
                let feed_title = subscriptions.title_for(entry.feed_id).to_string();
                Some(ResolvedArticle {
                    entry,
                    display_content,
                    feed_title,
                })
            }
            None => None,
        };

        Ok(ArticleView {
            total: ids.len(),
            position: selection.position,
            feed_filter,
            article,
            subscriptions,
        })
    }

    pub async fn mark_read(&self, entry_id: EntryId) -> Result<()> {
        tracing::info!("Marking entry {} read", entry_id);
        self.api.mark_read(&[entry_id]).await
    }

    pub async fn star(&self, entry_id: EntryId) -> Result<()> {
        tracing::info!("Starring entry {}", entry_id);
        self.api.star(&[entry_id]).await
    }

    /// Apply a navigation action and return the state to request next.
    ///
    /// Mutating actions without an entry ID only move the position.
    pub async fn apply(
        &self,
        action: NavAction,
        state: NavigationState,
        entry_id: Option<EntryId>,
    ) -> Result<NavigationState> {
        match (action, entry_id) {
            (NavAction::MarkRead | NavAction::MarkReadNext, Some(id)) => self.mark_read(id).await?,
            (NavAction::Star, Some(id)) => self.star(id).await?,
            (a, None) if a.mutates() => {
                tracing::debug!("{:?} without an entry ID, ignoring", a);
            }
            _ => {}
        }

        let position = match action {
            NavAction::MarkRead | NavAction::MarkReadNext => {
                PositionNavigator::after_mark_read(state.position)
            }
            NavAction::Star => state.position,
            NavAction::Skip => PositionNavigator::skip(state.position),
            NavAction::Prev => PositionNavigator::prev(state.position),
        };

        Ok(state.with_position(position))
    }
}
