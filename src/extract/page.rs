use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{FolioError, Result};
use crate::extract::{ContentFormat, Extractor, ExtractorConfig, Readability};

/// Downloads an article page and runs [`Readability`] over it.
pub struct PageExtractor {
    client: Client,
    readability: Readability,
}

impl PageExtractor {
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.page_timeout())
            .gzip(true)
            .brotli(true);

        if let Some(ref ua) = config.user_agent {
            builder = builder.user_agent(ua.clone());
        }

        Ok(Self {
            client: builder.build()?,
            readability: Readability::new(config),
        })
    }

    async fn download(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FolioError::Extraction(format!("Failed to download {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Extraction(format!(
                "Download of {} returned {}",
                url,
                status.as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FolioError::Extraction(format!("Failed to read {}: {}", url, e)))
    }
}

#[async_trait]
impl Extractor for PageExtractor {
    async fn extract(&self, url: &str, format: ContentFormat) -> Result<Option<String>> {
        let url = Url::parse(url)?;
        let html = self.download(&url).await?;
        Ok(self.readability.extract(&html, Some(&url), format))
    }
}
