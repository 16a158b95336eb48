use serde::{Deserialize, Serialize};

pub type FeedId = i64;

pub const UNKNOWN_FEED_TITLE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub feed_id: FeedId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
}

impl Subscription {
    pub fn new(feed_id: FeedId, title: impl Into<String>) -> Self {
        Self {
            feed_id,
            title: title.into(),
            site_url: None,
        }
    }
}

/// Subscriptions keyed by feed ID, in upstream order.
///
/// A feed ID listed twice keeps its first position but takes the title of
/// the last occurrence.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionIndex {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionIndex {
    pub fn from_list(list: Vec<Subscription>) -> Self {
        let mut subscriptions: Vec<Subscription> = Vec::with_capacity(list.len());
        for sub in list {
            match subscriptions.iter_mut().find(|s| s.feed_id == sub.feed_id) {
                Some(existing) => *existing = sub,
                None => subscriptions.push(sub),
            }
        }
        Self { subscriptions }
    }

    pub fn get(&self, feed_id: FeedId) -> Option<&Subscription> {
        self.subscriptions.iter().find(|s| s.feed_id == feed_id)
    }

    pub fn title_for(&self, feed_id: FeedId) -> &str {
        self.get(feed_id)
            .map(|s| s.title.as_str())
            .unwrap_or(UNKNOWN_FEED_TITLE)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subscription> {
        self.subscriptions.iter()
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn into_vec(self) -> Vec<Subscription> {
        self.subscriptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_lookup() {
        let index = SubscriptionIndex::from_list(vec![
            Subscription::new(1, "One"),
            Subscription::new(42, "Answers"),
        ]);
        assert_eq!(index.title_for(42), "Answers");
        assert_eq!(index.title_for(7), UNKNOWN_FEED_TITLE);
    }

    #[test]
    fn test_duplicate_feed_last_write_wins() {
        let index = SubscriptionIndex::from_list(vec![
            Subscription::new(1, "Old title"),
            Subscription::new(2, "Two"),
            Subscription::new(1, "New title"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.title_for(1), "New title");

        let order: Vec<FeedId> = index.iter().map(|s| s.feed_id).collect();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_deserialize_feedbin_subscription() {
        let json = r#"{
            "id": 525,
            "created_at": "2013-03-12T11:30:25.209432Z",
            "feed_id": 47,
            "title": "Daring Fireball",
            "feed_url": "http://daringfireball.net/index.xml",
            "site_url": "http://daringfireball.net/"
        }"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.feed_id, 47);
        assert_eq!(sub.title, "Daring Fireball");
        assert_eq!(sub.site_url.as_deref(), Some("http://daringfireball.net/"));
    }
}
