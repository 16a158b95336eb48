use serde::{Deserialize, Serialize};

/// A navigation request from a client, applied against its echoed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Mark the current entry read and stay on the same ordinal.
    MarkRead,
    /// Same as `MarkRead`; the next entry slides into the current ordinal.
    MarkReadNext,
    /// Star the current entry, position unchanged.
    Star,
    /// Move forward without marking.
    Skip,
    /// Move back one, never below zero.
    Prev,
}

impl NavAction {
    /// Whether the action needs an entry ID to have any effect upstream.
    pub fn mutates(self) -> bool {
        matches!(self, Self::MarkRead | Self::MarkReadNext | Self::Star)
    }
}
