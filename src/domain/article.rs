use serde::Serialize;

use crate::domain::Entry;

/// An entry together with the body chosen for display.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedArticle {
    pub entry: Entry,
    pub display_content: String,
    pub feed_title: String,
}
