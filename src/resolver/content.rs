use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::app::{FolioError, Result};
use crate::domain::Entry;
use crate::extract::{strip_tags, ContentFormat, Extractor, ExtractorConfig, PageExtractor};

/// One step of the display-content chain.
///
/// `Ok(None)` and `Err(_)` both mean "unusable"; the resolver moves on to
/// the next source either way.
#[async_trait]
pub trait ContentSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, entry: &Entry, format: ContentFormat) -> Result<Option<String>>;
}

/// Server-side cleaned body behind `entry.extracted_content_url`.
pub struct PreExtractedSource {
    client: Client,
}

#[derive(Deserialize)]
struct ExtractedBody {
    content: Option<String>,
}

impl PreExtractedSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentSource for PreExtractedSource {
    fn name(&self) -> &'static str {
        "pre-extracted"
    }

    async fn attempt(&self, entry: &Entry, _format: ContentFormat) -> Result<Option<String>> {
        let Some(url) = entry
            .extracted_content_url
            .as_deref()
            .filter(|u| !u.is_empty())
        else {
            return Ok(None);
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FolioError::Extraction(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FolioError::Extraction(format!(
                "extracted content returned {}",
                response.status().as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FolioError::Extraction(e.to_string()))?;
        let parsed: ExtractedBody =
            serde_json::from_slice(&body).map_err(|e| FolioError::Extraction(e.to_string()))?;

        Ok(parsed.content)
    }
}

/// Local extraction run against the entry's own page.
pub struct GenericSource {
    extractor: Arc<dyn Extractor>,
}

impl GenericSource {
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        Self { extractor }
    }
}

#[async_trait]
impl ContentSource for GenericSource {
    fn name(&self) -> &'static str {
        "generic"
    }

    async fn attempt(&self, entry: &Entry, format: ContentFormat) -> Result<Option<String>> {
        match entry.url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => self.extractor.extract(url, format).await,
            None => Ok(None),
        }
    }
}

/// Chooses the body to display for an entry.
///
/// Sources are tried once each, in order; the first result whose trimmed
/// length reaches `min_length` wins. When none qualifies the entry's stored
/// content is used, tags stripped for [`ContentFormat::Text`].
pub struct ContentResolver {
    sources: Vec<Box<dyn ContentSource>>,
    min_length: usize,
}

impl ContentResolver {
    pub fn new(min_length: usize) -> Self {
        Self {
            sources: Vec::new(),
            min_length,
        }
    }

    /// Pre-extracted content first, then generic extraction when enabled.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        let mut resolver = Self::new(config.min_content_length)
            .with_source(PreExtractedSource::new(config.pre_extracted_timeout())?);

        if config.enabled {
            let extractor: Arc<dyn Extractor> = Arc::new(PageExtractor::new(config)?);
            resolver = resolver.with_source(GenericSource::new(extractor));
        }

        Ok(resolver)
    }

    pub fn with_source(mut self, source: impl ContentSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn is_usable(&self, content: &str) -> bool {
        content.trim().chars().count() >= self.min_length
    }

    pub async fn resolve(&self, entry: &Entry, format: ContentFormat) -> String {
        for source in &self.sources {
            match source.attempt(entry, format).await {
                Ok(Some(content)) if self.is_usable(&content) => {
                    tracing::debug!("Entry {}: using {} content", entry.id, source.name());
                    return content;
                }
                Ok(Some(content)) => {
                    tracing::debug!(
                        "Entry {}: {} content too short ({} chars)",
                        entry.id,
                        source.name(),
                        content.trim().chars().count()
                    );
                }
                Ok(None) => {
                    tracing::debug!("Entry {}: no {} content", entry.id, source.name());
                }
                Err(e) => {
                    tracing::debug!("Entry {}: {} content failed: {}", entry.id, source.name(), e);
                }
            }
        }

        tracing::debug!("Entry {}: falling back to stored content", entry.id);
        raw_fallback(entry, format)
    }
}

/// Stored content, verbatim for HTML and tag-stripped for text.
pub fn raw_fallback(entry: &Entry, format: ContentFormat) -> String {
    match format {
        ContentFormat::Html => entry.raw_content().to_string(),
        ContentFormat::Text => strip_tags(entry.raw_content()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticSource {
        name: &'static str,
        result: std::result::Result<Option<String>, String>,
        calls: Arc<AtomicUsize>,
    }

    impl StaticSource {
        fn new(name: &'static str, result: std::result::Result<Option<String>, String>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let source = Self {
                name,
                result,
                calls: calls.clone(),
            };
            (source, calls)
        }
    }

    #[async_trait]
    impl ContentSource for StaticSource {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn attempt(&self, _entry: &Entry, _format: ContentFormat) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone().map_err(FolioError::Extraction)
        }
    }

    fn entry_with_raw(raw: &str) -> Entry {
        let mut entry = Entry::new(1, 1);
        entry.content = Some(raw.to_string());
        entry
    }

    #[tokio::test]
    async fn test_long_pre_extracted_wins() {
        let pre = "p".repeat(100);
        let (first, _) = StaticSource::new("pre", Ok(Some(pre.clone())));
        let (second, second_calls) = StaticSource::new("generic", Ok(Some("g".repeat(5000))));
        let resolver = ContentResolver::new(100)
            .with_source(first)
            .with_source(second);

        let content = resolver
            .resolve(&entry_with_raw(&"r".repeat(9000)), ContentFormat::Html)
            .await;
        assert_eq!(content, pre);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_short_pre_extracted_falls_through_to_generic() {
        let generic = "g".repeat(150);
        let (first, _) = StaticSource::new("pre", Ok(Some("x".repeat(40))));
        let (second, _) = StaticSource::new("generic", Ok(Some(generic.clone())));
        let resolver = ContentResolver::new(100)
            .with_source(first)
            .with_source(second);

        let content = resolver.resolve(&entry_with_raw("raw"), ContentFormat::Html).await;
        assert_eq!(content, generic);
    }

    #[tokio::test]
    async fn test_both_unusable_uses_raw_content() {
        let raw = "<p>Stored <b>body</b></p>";
        let build = || {
            let (first, _) = StaticSource::new("pre", Ok(Some("x".repeat(40))));
            let (second, _) = StaticSource::new("generic", Ok(None));
            ContentResolver::new(100)
                .with_source(first)
                .with_source(second)
        };

        let html = build().resolve(&entry_with_raw(raw), ContentFormat::Html).await;
        assert_eq!(html, raw);

        let text = build().resolve(&entry_with_raw(raw), ContentFormat::Text).await;
        assert_eq!(text, "Stored body");
    }

    #[tokio::test]
    async fn test_errors_fall_through() {
        let generic = "g".repeat(120);
        let (first, first_calls) = StaticSource::new("pre", Err("timeout".into()));
        let (second, second_calls) = StaticSource::new("generic", Ok(Some(generic.clone())));
        let resolver = ContentResolver::new(100)
            .with_source(first)
            .with_source(second);

        let content = resolver.resolve(&entry_with_raw(""), ContentFormat::Text).await;
        assert_eq!(content, generic);
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_short_generic_is_unusable() {
        let (first, _) = StaticSource::new("pre", Ok(None));
        let (second, _) = StaticSource::new("generic", Ok(Some("short".into())));
        let resolver = ContentResolver::new(100)
            .with_source(first)
            .with_source(second);

        let content = resolver
            .resolve(&entry_with_raw("<i>fallback</i>"), ContentFormat::Text)
            .await;
        assert_eq!(content, "fallback");
    }

    #[tokio::test]
    async fn test_missing_raw_content_is_empty() {
        let resolver = ContentResolver::new(100);
        let entry = Entry::new(7, 1);
        assert_eq!(resolver.resolve(&entry, ContentFormat::Html).await, "");
        assert_eq!(resolver.resolve(&entry, ContentFormat::Text).await, "");
    }

    #[test]
    fn test_usability_uses_trimmed_length() {
        let resolver = ContentResolver::new(100);
        assert!(!resolver.is_usable(&format!("  {}  ", "a".repeat(99))));
        assert!(resolver.is_usable(&"a".repeat(100)));
    }

    #[tokio::test]
    async fn test_sources_skip_entries_without_urls() {
        struct Unreachable;

        #[async_trait]
        impl Extractor for Unreachable {
            async fn extract(&self, _url: &str, _format: ContentFormat) -> Result<Option<String>> {
                panic!("extractor should not run without a URL");
            }
        }

        let entry = Entry::new(1, 1);
        let generic = GenericSource::new(Arc::new(Unreachable));
        assert!(generic.attempt(&entry, ContentFormat::Html).await.unwrap().is_none());

        let pre = PreExtractedSource::new(Duration::from_secs(1)).unwrap();
        assert!(pre.attempt(&entry, ContentFormat::Html).await.unwrap().is_none());
    }
}
