use ratatui::widgets::ListState;

use crate::domain::{EntryId, FeedId, NavigationState, ResolvedArticle, Subscription};
use crate::extract::html_to_text;
use crate::reader::ArticleView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Feeds,
    Article,
}

impl ActivePane {
    pub fn next(self) -> Self {
        match self {
            ActivePane::Feeds => ActivePane::Article,
            ActivePane::Article => ActivePane::Feeds,
        }
    }

    pub fn prev(self) -> Self {
        self.next()
    }
}

pub const PAGE_SIZE: u16 = 10;

/// Client-side state of the reading pane.
///
/// `nav` is the only navigation state there is; it is sent back to the
/// reader on every load.
pub struct TuiApp {
    pub active_pane: ActivePane,
    pub nav: NavigationState,
    pub feeds: Vec<Subscription>,
    /// 0 is "All feeds", `n` is `feeds[n - 1]`.
    pub feed_index: usize,
    pub feed_list_state: ListState,
    pub article: Option<ResolvedArticle>,
    pub article_text: String,
    pub scroll: u16,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub maximized: bool,
}

impl TuiApp {
    pub fn new(feed_filter: Option<FeedId>) -> Self {
        let mut feed_list_state = ListState::default();
        feed_list_state.select(Some(0));

        Self {
            active_pane: ActivePane::Article,
            nav: NavigationState::new(feed_filter, 0),
            feeds: Vec::new(),
            feed_index: 0,
            feed_list_state,
            article: None,
            article_text: String::new(),
            scroll: 0,
            should_quit: false,
            status_message: None,
            error: None,
            is_loading: false,
            maximized: false,
        }
    }

    /// Take over a freshly resolved view, adopting its clamped position.
    pub fn apply_view(&mut self, view: ArticleView) {
        let previous = self.current_entry_id();

        self.nav = view.navigation();
        self.feeds = view.subscriptions.into_vec();
        self.article_text = view
            .article
            .as_ref()
            .map(|a| html_to_text(&a.display_content))
            .unwrap_or_default();
        self.article = view.article;
        self.error = None;

        if self.current_entry_id() != previous {
            self.scroll = 0;
        }

        self.feed_index = match self.nav.feed_filter {
            Some(id) => self
                .feeds
                .iter()
                .position(|f| f.feed_id == id)
                .map(|i| i + 1)
                .unwrap_or(self.feed_index.min(self.feeds.len())),
            None => self.feed_index.min(self.feeds.len()),
        };
        self.feed_list_state.select(Some(self.feed_index));
    }

    pub fn current_entry_id(&self) -> Option<EntryId> {
        self.article.as_ref().map(|a| a.entry.id)
    }

    pub fn current_url(&self) -> Option<&str> {
        self.article
            .as_ref()
            .and_then(|a| a.entry.url.as_deref())
            .filter(|u| !u.is_empty())
    }

    /// Feed filter for the highlighted row of the feeds pane.
    pub fn highlighted_filter(&self) -> Option<FeedId> {
        self.feed_index
            .checked_sub(1)
            .and_then(|i| self.feeds.get(i))
            .map(|f| f.feed_id)
    }

    /// Focus the article pane and return the newest-entry state for the
    /// highlighted feed. `nav` moves once that view has loaded.
    pub fn select_highlighted_feed(&mut self) -> NavigationState {
        self.active_pane = ActivePane::Article;
        NavigationState::new(self.highlighted_filter(), 0)
    }

    pub fn move_up(&mut self) {
        match self.active_pane {
            ActivePane::Feeds => {
                if self.feed_index > 0 {
                    self.feed_index -= 1;
                    self.feed_list_state.select(Some(self.feed_index));
                }
            }
            ActivePane::Article => {
                self.scroll = self.scroll.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.active_pane {
            ActivePane::Feeds => {
                if self.feed_index < self.feeds.len() {
                    self.feed_index += 1;
                    self.feed_list_state.select(Some(self.feed_index));
                }
            }
            ActivePane::Article => {
                self.scroll = self.scroll.saturating_add(1);
            }
        }
    }

    pub fn page_down(&mut self) {
        match self.active_pane {
            ActivePane::Feeds => {
                self.feed_index = (self.feed_index + PAGE_SIZE as usize).min(self.feeds.len());
                self.feed_list_state.select(Some(self.feed_index));
            }
            ActivePane::Article => {
                self.scroll = self.scroll.saturating_add(PAGE_SIZE);
            }
        }
    }

    pub fn page_up(&mut self) {
        match self.active_pane {
            ActivePane::Feeds => {
                self.feed_index = self.feed_index.saturating_sub(PAGE_SIZE as usize);
                self.feed_list_state.select(Some(self.feed_index));
            }
            ActivePane::Article => {
                self.scroll = self.scroll.saturating_sub(PAGE_SIZE);
            }
        }
    }

    pub fn toggle_maximize(&mut self) {
        self.maximized = !self.maximized;
        if self.maximized {
            self.active_pane = ActivePane::Article;
        }
    }

    /// `position+1/total`, or `0/0` when nothing is unread.
    pub fn position_label(&self) -> String {
        if self.nav.total == 0 {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.nav.position + 1, self.nav.total)
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new(None)
    }
}
