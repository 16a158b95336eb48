use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::app::{FolioError, Result};
use crate::domain::{Entry, EntryId, FeedId, Subscription};
use crate::upstream::FeedApi;

/// In-memory upstream used by unit tests.
#[derive(Default)]
pub(crate) struct FakeFeedApi {
    subscriptions: Vec<Subscription>,
    entries: BTreeMap<EntryId, Entry>,
    unread: Mutex<BTreeSet<EntryId>>,
    starred: Mutex<Vec<EntryId>>,
    batches: Mutex<Vec<Vec<EntryId>>>,
    reverse_batches: bool,
    fail_batches: bool,
    fail_unread: AtomicBool,
}

impl FakeFeedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unread entries as `(entry_id, feed_id)` pairs.
    pub fn with_entries(mut self, entries: &[(EntryId, FeedId)]) -> Self {
        for &(id, feed_id) in entries {
            let mut entry = Entry::new(id, feed_id);
            entry.title = Some(format!("Entry {}", id));
            entry.content = Some(format!("<p>Body of entry {}</p>", id));
            self = self.with_entry(entry);
        }
        self
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.unread.get_mut().unwrap().insert(entry.id);
        self.entries.insert(entry.id, entry);
        self
    }

    pub fn with_subscriptions(mut self, subscriptions: Vec<Subscription>) -> Self {
        self.subscriptions = subscriptions;
        self
    }

    pub fn reverse_batches(mut self) -> Self {
        self.reverse_batches = true;
        self
    }

    pub fn failing_batches(mut self) -> Self {
        self.fail_batches = true;
        self
    }

    pub fn failing_unread(self) -> Self {
        self.set_unread_failing(true);
        self
    }

    /// Toggle `/unread_entries.json` outages between calls.
    pub fn set_unread_failing(&self, failing: bool) {
        self.fail_unread.store(failing, Ordering::SeqCst);
    }

    pub fn batch_requests(&self) -> Vec<Vec<EntryId>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn unread(&self) -> Vec<EntryId> {
        self.unread.lock().unwrap().iter().copied().collect()
    }

    pub fn starred(&self) -> Vec<EntryId> {
        self.starred.lock().unwrap().clone()
    }

    fn unavailable(endpoint: &str) -> FolioError {
        FolioError::UpstreamStatus {
            endpoint: endpoint.to_string(),
            status: 503,
        }
    }
}

#[async_trait]
impl FeedApi for FakeFeedApi {
    async fn subscriptions(&self) -> Result<Vec<Subscription>> {
        Ok(self.subscriptions.clone())
    }

    async fn unread_entry_ids(&self) -> Result<Vec<EntryId>> {
        if self.fail_unread.load(Ordering::SeqCst) {
            return Err(Self::unavailable("/unread_entries.json"));
        }
        // Ascending; resolvers must sort.
        Ok(self.unread())
    }

    async fn entries(&self, ids: &[EntryId]) -> Result<Vec<Entry>> {
        self.batches.lock().unwrap().push(ids.to_vec());
        if self.fail_batches {
            return Err(Self::unavailable("/entries.json"));
        }
        let mut found: Vec<Entry> = ids
            .iter()
            .filter_map(|id| self.entries.get(id).cloned())
            .collect();
        if self.reverse_batches {
            found.reverse();
        }
        Ok(found)
    }

    async fn entry(&self, id: EntryId) -> Result<Entry> {
        self.entries
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::unavailable("/entries/{id}.json"))
    }

    async fn mark_read(&self, ids: &[EntryId]) -> Result<()> {
        let mut unread = self.unread.lock().unwrap();
        for id in ids {
            unread.remove(id);
        }
        Ok(())
    }

    async fn star(&self, ids: &[EntryId]) -> Result<()> {
        self.starred.lock().unwrap().extend_from_slice(ids);
        Ok(())
    }
}
