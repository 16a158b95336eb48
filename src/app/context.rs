use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::reader::Reader;
use crate::resolver::{ContentResolver, UnreadSetResolver};
use crate::upstream::{Credentials, CredentialsProvider, FeedApi, FeedbinClient};

pub struct AppContext {
    pub config: Config,
    pub reader: Arc<Reader>,
}

impl AppContext {
    /// Resolve credentials and wire the Feedbin client into a [`Reader`].
    pub fn new(config: Config) -> Result<Self> {
        let credentials: Arc<dyn CredentialsProvider> =
            Arc::new(Credentials::resolve(&config.feedbin)?);
        tracing::debug!("Using Feedbin account {}", credentials.username());

        let api: Arc<dyn FeedApi> = Arc::new(FeedbinClient::new(&config.feedbin, credentials)?);
        Self::with_api(config, api)
    }

    /// Build around an existing upstream, e.g. a test double.
    pub fn with_api(config: Config, api: Arc<dyn FeedApi>) -> Result<Self> {
        let content = ContentResolver::from_config(&config.extractor)?;
        let reader = Arc::new(Reader::new(api, UnreadSetResolver::new(), content));

        Ok(Self { config, reader })
    }
}
