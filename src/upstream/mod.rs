//! The upstream feed API collaborator.
//!
//! [`FeedApi`] is the seam the resolvers talk to; [`FeedbinClient`] is the
//! HTTP implementation. Every call is a plain request/response with no retry
//! layer, and any failure is returned to the caller as-is.

pub mod config;
pub mod credentials;
pub mod feedbin;

pub use config::FeedbinConfig;
pub use credentials::{Credentials, CredentialsProvider};
pub use feedbin::FeedbinClient;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Entry, EntryId, Subscription};

#[async_trait]
pub trait FeedApi: Send + Sync {
    async fn subscriptions(&self) -> Result<Vec<Subscription>>;

    /// Every currently unread entry ID, in whatever order upstream returns them.
    async fn unread_entry_ids(&self) -> Result<Vec<EntryId>>;

    /// Entry metadata for a batch of IDs. Order of the result is unspecified.
    async fn entries(&self, ids: &[EntryId]) -> Result<Vec<Entry>>;

    async fn entry(&self, id: EntryId) -> Result<Entry>;

    /// Remove entries from the unread set.
    async fn mark_read(&self, ids: &[EntryId]) -> Result<()>;

    async fn star(&self, ids: &[EntryId]) -> Result<()>;
}
