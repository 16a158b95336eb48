use std::collections::HashMap;

use crate::app::Result;
use crate::domain::{EntryId, FeedId};
use crate::upstream::FeedApi;

/// Maximum IDs per metadata request when filtering by feed.
pub const FILTER_BATCH_SIZE: usize = 100;

/// Maximum number of metadata requests per filter pass.
pub const FILTER_MAX_BATCHES: usize = 5;

/// Builds the ordered working set of unread entry IDs.
#[derive(Debug, Clone, Copy)]
pub struct UnreadSetResolver {
    batch_size: usize,
    max_batches: usize,
}

impl Default for UnreadSetResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl UnreadSetResolver {
    pub fn new() -> Self {
        Self::with_limits(FILTER_BATCH_SIZE, FILTER_MAX_BATCHES)
    }

    pub fn with_limits(batch_size: usize, max_batches: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            max_batches,
        }
    }

    /// Most IDs a filtered resolution will ever inspect.
    pub fn filter_window(&self) -> usize {
        self.batch_size * self.max_batches
    }

    /// Unread IDs, highest first, optionally narrowed to one feed.
    ///
    /// Filtering only looks at the newest [`filter_window`](Self::filter_window)
    /// IDs. Any upstream failure aborts the whole resolution.
    pub async fn resolve(&self, api: &dyn FeedApi, feed_filter: Option<FeedId>) -> Result<Vec<EntryId>> {
        let mut ids = api.unread_entry_ids().await?;
        sort_newest_first(&mut ids);
        tracing::debug!("{} unread entries upstream", ids.len());

        match feed_filter {
            None => Ok(ids),
            Some(feed_id) => self.narrow(api, &ids, feed_id).await,
        }
    }

    async fn narrow(&self, api: &dyn FeedApi, ids: &[EntryId], feed_id: FeedId) -> Result<Vec<EntryId>> {
        let window = &ids[..ids.len().min(self.filter_window())];
        let mut kept = Vec::new();

        for (n, batch) in window.chunks(self.batch_size).enumerate() {
            let feeds: HashMap<EntryId, FeedId> = api
                .entries(batch)
                .await?
                .into_iter()
                .map(|entry| (entry.id, entry.feed_id))
                .collect();

            // Walk the batch itself, not the response, so order follows the sorted IDs.
            let before = kept.len();
            kept.extend(
                batch
                    .iter()
                    .copied()
                    .filter(|id| feeds.get(id) == Some(&feed_id)),
            );
            tracing::debug!(
                "Filter batch {}: {} of {} entries in feed {}",
                n,
                kept.len() - before,
                batch.len(),
                feed_id
            );
        }

        Ok(kept)
    }
}

/// Descending by ID; higher IDs were added more recently.
pub fn sort_newest_first(ids: &mut [EntryId]) {
    ids.sort_unstable_by(|a, b| b.cmp(a));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FolioError;
    use crate::resolver::testing::FakeFeedApi;

    #[test]
    fn test_sort_newest_first() {
        let mut ids = vec![5, 3, 9, 1];
        sort_newest_first(&mut ids);
        assert_eq!(ids, vec![9, 5, 3, 1]);
    }

    #[tokio::test]
    async fn test_unfiltered_is_sorted_descending() {
        let api = FakeFeedApi::new().with_entries(&[(5, 1), (3, 1), (9, 2), (1, 3)]);
        let ids = UnreadSetResolver::new().resolve(&api, None).await.unwrap();
        assert_eq!(ids, vec![9, 5, 3, 1]);
        assert!(api.batch_requests().is_empty());
    }

    #[tokio::test]
    async fn test_filter_keeps_only_matching_feed() {
        let api = FakeFeedApi::new().with_entries(&[(10, 1), (20, 42), (30, 42), (40, 7)]);
        let ids = UnreadSetResolver::new()
            .resolve(&api, Some(42))
            .await
            .unwrap();
        assert_eq!(ids, vec![30, 20]);
    }

    #[tokio::test]
    async fn test_filter_preserves_order_when_upstream_shuffles() {
        let api = FakeFeedApi::new()
            .with_entries(&[(1, 42), (2, 7), (3, 42), (4, 42), (5, 7), (6, 42)])
            .reverse_batches();
        let ids = UnreadSetResolver::with_limits(2, 5)
            .resolve(&api, Some(42))
            .await
            .unwrap();
        assert_eq!(ids, vec![6, 4, 3, 1]);
    }

    #[tokio::test]
    async fn test_filter_window_is_capped() {
        let entries: Vec<(EntryId, FeedId)> = (1..=1234).map(|id| (id, 42)).collect();
        let api = FakeFeedApi::new().with_entries(&entries);
        let ids = UnreadSetResolver::new()
            .resolve(&api, Some(42))
            .await
            .unwrap();

        assert_eq!(ids.len(), 500);
        assert_eq!(ids.first(), Some(&1234));
        assert_eq!(ids.last(), Some(&735));

        let batches = api.batch_requests();
        assert_eq!(batches.len(), FILTER_MAX_BATCHES);
        assert!(batches.iter().all(|b| b.len() <= FILTER_BATCH_SIZE));
    }

    #[tokio::test]
    async fn test_filter_with_no_matches_is_empty() {
        let api = FakeFeedApi::new().with_entries(&[(1, 1), (2, 2)]);
        let ids = UnreadSetResolver::new()
            .resolve(&api, Some(99))
            .await
            .unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_empty_unread_set_makes_no_batch_requests() {
        let api = FakeFeedApi::new();
        let ids = UnreadSetResolver::new()
            .resolve(&api, Some(42))
            .await
            .unwrap();
        assert!(ids.is_empty());
        assert!(api.batch_requests().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let api = FakeFeedApi::new()
            .with_entries(&[(1, 42)])
            .failing_batches();
        let err = UnreadSetResolver::new()
            .resolve(&api, Some(42))
            .await
            .unwrap_err();
        assert!(matches!(err, FolioError::UpstreamStatus { status: 503, .. }));
    }
}
