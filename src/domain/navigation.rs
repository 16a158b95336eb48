use serde::{Deserialize, Serialize};

use crate::domain::FeedId;

/// Client-held reading position, echoed back on every request.
///
/// `position` is whatever the client sent, so it may be negative or past
/// the end; resolution clamps it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub position: i64,
    pub feed_filter: Option<FeedId>,
    pub total: usize,
}

impl NavigationState {
    pub fn new(feed_filter: Option<FeedId>, position: i64) -> Self {
        Self {
            position,
            feed_filter,
            total: 0,
        }
    }

    pub fn with_position(self, position: i64) -> Self {
        Self { position, ..self }
    }
}
