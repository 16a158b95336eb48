//! Reading pane palette.

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

/// Colors for the feeds pane, the article pane and the status bar.
///
/// Values go through ratatui's own color parser, so any of `"light red"`,
/// `"LightRed"`, `"light-red"`, `"#ff8800"` or an indexed `"208"` work.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "color")]
    pub active_border: Color,
    #[serde(deserialize_with = "color")]
    pub inactive_border: Color,
    /// Highlighted feed row while the feeds pane has focus.
    #[serde(deserialize_with = "color")]
    pub selection_bg_active: Color,
    #[serde(deserialize_with = "color")]
    pub selection_fg_active: Color,
    #[serde(deserialize_with = "color")]
    pub selection_bg_inactive: Color,
    #[serde(deserialize_with = "color")]
    pub selection_fg_inactive: Color,
    #[serde(deserialize_with = "color")]
    pub article_title: Color,
    /// Feed title line under the article heading.
    #[serde(deserialize_with = "color")]
    pub metadata_feed: Color,
    #[serde(deserialize_with = "color")]
    pub metadata_author: Color,
    #[serde(deserialize_with = "color")]
    pub metadata_date: Color,
    #[serde(deserialize_with = "color")]
    pub metadata_link: Color,
    #[serde(deserialize_with = "color")]
    pub status_fg: Color,
    #[serde(deserialize_with = "color")]
    pub status_bg: Color,
    /// Upstream failures shown in the status bar.
    #[serde(deserialize_with = "color")]
    pub error: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            active_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            selection_bg_active: Color::Cyan,
            selection_fg_active: Color::Black,
            selection_bg_inactive: Color::DarkGray,
            selection_fg_inactive: Color::White,
            article_title: Color::White,
            metadata_feed: Color::Green,
            metadata_author: Color::Yellow,
            metadata_date: Color::Yellow,
            metadata_link: Color::Blue,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
            error: Color::LightRed,
        }
    }
}

fn color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse::<Color>()
        .map_err(|_| de::Error::custom(format!("unknown color {:?}", raw)))
}
