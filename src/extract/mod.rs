//! Full-text content extraction.
//!
//! Feeds frequently ship only a teaser. This module turns an article's web
//! page into clean content, either as sanitized HTML or as plain text.
//!
//! # Architecture
//!
//! ```text
//! URL → PageExtractor (download) → Readability (boilerplate removal) → content
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use folio::extract::{ContentFormat, Extractor, ExtractorConfig, PageExtractor};
//!
//! let extractor = PageExtractor::new(&ExtractorConfig::default())?;
//! let body = extractor.extract("https://example.com/post", ContentFormat::Html).await?;
//! ```

mod config;
mod page;
mod readability;
mod render;
mod text;

pub use config::ExtractorConfig;
pub use page::PageExtractor;
pub use readability::Readability;
pub use text::{html_to_text, strip_tags};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app::Result;

/// Output shape requested from the extraction chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Markup for interactive reading, images kept.
    Html,
    /// Plain text for machine-readable consumers.
    Text,
}

/// Best-effort extraction of an article's main content from its URL.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// `Ok(None)` means the page had nothing worth keeping.
    async fn extract(&self, url: &str, format: ContentFormat) -> Result<Option<String>>;
}
