use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the content extraction chain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Run generic extraction against the entry's page (default: true)
    pub enabled: bool,

    /// Trimmed length below which extracted content counts as missing (default: 100)
    pub min_content_length: usize,

    /// Timeout for the pre-extracted content fetch in seconds (default: 10)
    pub pre_extracted_timeout_secs: u64,

    /// Timeout for downloading the article page in seconds (default: 15)
    pub page_timeout_secs: u64,

    /// Keep inline images when extracting HTML (default: true)
    pub include_images: bool,

    /// CSS selectors to try for article content extraction, in priority order
    pub content_selectors: Vec<String>,

    /// CSS selectors for elements to drop (ads, navigation, etc.)
    pub remove_selectors: Vec<String>,

    /// User agent string to use for page downloads
    pub user_agent: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_content_length: 100,
            pre_extracted_timeout_secs: 10,
            page_timeout_secs: 15,
            include_images: true,
            content_selectors: vec![
                // Common article content selectors in priority order
                "article".to_string(),
                "[itemprop=\"articleBody\"]".to_string(),
                "[role=\"main\"]".to_string(),
                "main".to_string(),
                ".post-content".to_string(),
                ".article-content".to_string(),
                ".entry-content".to_string(),
                ".content".to_string(),
                "#content".to_string(),
                ".post".to_string(),
                ".article".to_string(),
                ".blog-post".to_string(),
            ],
            remove_selectors: vec![
                "nav".to_string(),
                "header".to_string(),
                "footer".to_string(),
                "aside".to_string(),
                "form".to_string(),
                ".sidebar".to_string(),
                ".advertisement".to_string(),
                ".ad".to_string(),
                ".ads".to_string(),
                ".social-share".to_string(),
                ".comments".to_string(),
                ".related-posts".to_string(),
                "script".to_string(),
                "style".to_string(),
                "noscript".to_string(),
            ],
            user_agent: Some(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
            ),
        }
    }
}

impl ExtractorConfig {
    pub fn pre_extracted_timeout(&self) -> Duration {
        Duration::from_secs(self.pre_extracted_timeout_secs)
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }
}
