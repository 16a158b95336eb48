use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

use crate::app::{FolioError, Result};
use crate::domain::{Entry, EntryId, Subscription};
use crate::upstream::{CredentialsProvider, FeedApi, FeedbinConfig};

const JSON_UTF8: &str = "application/json; charset=utf-8";

pub struct FeedbinClient {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
}

impl FeedbinClient {
    pub fn new(config: &FeedbinConfig, credentials: Arc<dyn CredentialsProvider>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(self.credentials.username(), self.credentials.password())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, url: Url) -> Result<T> {
        let response = self.request(Method::GET, url).send().await?;
        let response = check_status(path, response)?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send_json(&self, method: Method, path: &str, body: serde_json::Value) -> Result<()> {
        let url = self.endpoint(path)?;
        let response = self
            .request(method.clone(), url)
            // Set first; `json` only fills in a bare `application/json`.
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::info!("{} {} with {} -> {}", method, path, body, status.as_u16());
        check_status(path, response)?;
        Ok(())
    }
}

fn check_status(path: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(FolioError::UpstreamStatus {
            endpoint: path.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}

fn join_ids(ids: &[EntryId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl FeedApi for FeedbinClient {
    async fn subscriptions(&self) -> Result<Vec<Subscription>> {
        let path = "/subscriptions.json";
        self.get_json(path, self.endpoint(path)?).await
    }

    async fn unread_entry_ids(&self) -> Result<Vec<EntryId>> {
        let path = "/unread_entries.json";
        self.get_json(path, self.endpoint(path)?).await
    }

    async fn entries(&self, ids: &[EntryId]) -> Result<Vec<Entry>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let path = "/entries.json";
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut().append_pair("ids", &join_ids(ids));
        self.get_json(path, url).await
    }

    async fn entry(&self, id: EntryId) -> Result<Entry> {
        let path = format!("/entries/{}.json", id);
        self.get_json(&path, self.endpoint(&path)?).await
    }

    async fn mark_read(&self, ids: &[EntryId]) -> Result<()> {
        self.send_json(
            Method::DELETE,
            "/unread_entries.json",
            json!({ "unread_entries": ids }),
        )
        .await
    }

    async fn star(&self, ids: &[EntryId]) -> Result<()> {
        self.send_json(
            Method::POST,
            "/starred_entries.json",
            json!({ "starred_entries": ids }),
        )
        .await
    }
}
