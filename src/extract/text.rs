use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::extract::render::Renderer;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

/// Remove every `<...>` tag, leaving text, whitespace and entities untouched.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Render an HTML fragment as readable plain text with paragraph breaks.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let renderer = Renderer {
        remove: &[],
        include_images: false,
        base_url: None,
    };
    renderer.text(fragment.root_element())
}
