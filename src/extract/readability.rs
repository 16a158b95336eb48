use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::extract::render::Renderer;
use crate::extract::{ContentFormat, ExtractorConfig};

/// Local boilerplate removal: picks the main content container of a page
/// and serializes it without navigation, ads and scripts.
pub struct Readability {
    content_selectors: Vec<Selector>,
    remove_selectors: Vec<Selector>,
    body: Option<Selector>,
    min_content_length: usize,
    include_images: bool,
}

impl Readability {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            content_selectors: parse_selectors(&config.content_selectors),
            remove_selectors: parse_selectors(&config.remove_selectors),
            body: Selector::parse("body").ok(),
            min_content_length: config.min_content_length,
            include_images: config.include_images,
        }
    }

    /// Extract the main content of `html`.
    ///
    /// Returns `None` when nothing readable is left. Relative links and
    /// images are resolved against `base_url`.
    pub fn extract(&self, html: &str, base_url: Option<&Url>, format: ContentFormat) -> Option<String> {
        let doc = Html::parse_document(html);
        let root = self.find_content_root(&doc);

        let renderer = Renderer {
            remove: &self.remove_selectors,
            include_images: self.include_images && format == ContentFormat::Html,
            base_url,
        };

        let content = match format {
            ContentFormat::Html => renderer.html(root),
            ContentFormat::Text => renderer.text(root),
        };

        if content.trim().is_empty() {
            None
        } else {
            Some(content)
        }
    }

    /// First configured container with enough text, else `<body>`.
    fn find_content_root<'a>(&self, doc: &'a Html) -> ElementRef<'a> {
        let text_renderer = Renderer {
            remove: &self.remove_selectors,
            include_images: false,
            base_url: None,
        };

        for selector in &self.content_selectors {
            if let Some(element) = doc.select(selector).next() {
                let text_len = text_renderer.text(element).chars().count();
                if text_len >= self.min_content_length {
                    tracing::debug!("Content root matched {:?} ({} chars)", selector, text_len);
                    return element;
                }
            }
        }

        self.body
            .as_ref()
            .and_then(|body| doc.select(body).next())
            .unwrap_or_else(|| doc.root_element())
    }
}

fn parse_selectors(raw: &[String]) -> Vec<Selector> {
    raw.iter()
        .filter_map(|s| match Selector::parse(s) {
            Ok(selector) => Some(selector),
            Err(e) => {
                tracing::warn!("Ignoring invalid selector {:?}: {}", s, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_paragraph(word: &str) -> String {
        std::iter::repeat(word).take(40).collect::<Vec<_>>().join(" ")
    }

    fn page() -> String {
        format!(
            r#"<html><head><title>T</title><style>p {{ color: red }}</style></head>
            <body>
              <nav><a href="/">Home</a><a href="/archive">Archive</a></nav>
              <div class="sidebar">Subscribe to our newsletter</div>
              <article>
                <h1>Headline</h1>
                <p>{}</p>
                <img src="/img/chart.png" alt="Chart">
                <div class="social-share">Share this</div>
                <p>Closing thoughts.</p>
              </article>
              <footer>Copyright</footer>
            </body></html>"#,
            long_paragraph("lorem")
        )
    }

    #[test]
    fn test_extracts_article_text_without_boilerplate() {
        let readability = Readability::new(&ExtractorConfig::default());
        let text = readability
            .extract(&page(), None, ContentFormat::Text)
            .unwrap();

        assert!(text.starts_with("Headline\n\nlorem lorem"));
        assert!(text.ends_with("Closing thoughts."));
        assert!(!text.contains("Archive"));
        assert!(!text.contains("newsletter"));
        assert!(!text.contains("Share this"));
        assert!(!text.contains("Copyright"));
    }

    #[test]
    fn test_html_output_keeps_images_when_enabled() {
        let base = Url::parse("https://blog.example.com/2024/post").unwrap();
        let readability = Readability::new(&ExtractorConfig::default());
        let html = readability
            .extract(&page(), Some(&base), ContentFormat::Html)
            .unwrap();

        assert!(html.starts_with("<h1>Headline</h1>"));
        assert!(html.contains(r#"<img src="https://blog.example.com/img/chart.png" alt="Chart">"#));
        assert!(!html.contains("Share this"));
    }

    #[test]
    fn test_html_output_without_images() {
        let config = ExtractorConfig {
            include_images: false,
            ..Default::default()
        };
        let readability = Readability::new(&config);
        let html = readability
            .extract(&page(), None, ContentFormat::Html)
            .unwrap();
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_short_container_falls_back_to_body() {
        let html = r#"<html><body>
            <article>tiny</article>
            <div><p>Body level paragraph that still has the story.</p></div>
        </body></html>"#;
        let readability = Readability::new(&ExtractorConfig::default());
        let text = readability.extract(html, None, ContentFormat::Text).unwrap();
        assert!(text.contains("tiny"));
        assert!(text.contains("Body level paragraph"));
    }

    #[test]
    fn test_empty_page_yields_none() {
        let readability = Readability::new(&ExtractorConfig::default());
        let html = "<html><body><nav>Menu</nav><script>x()</script></body></html>";
        assert!(readability.extract(html, None, ContentFormat::Text).is_none());
    }

    #[test]
    fn test_invalid_selectors_are_ignored() {
        let config = ExtractorConfig {
            content_selectors: vec!["[[broken".into(), "article".into()],
            ..Default::default()
        };
        let readability = Readability::new(&config);
        assert_eq!(readability.content_selectors.len(), 1);
    }
}
