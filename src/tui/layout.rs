use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::tui::app::{ActivePane, TuiApp};

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Panes
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    if app.maximized {
        render_article_pane(frame, app, rows[0], colors);
    } else {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25), // Feeds pane
                Constraint::Min(30),        // Article pane
            ])
            .split(rows[0]);

        render_feeds_pane(frame, app, panes[0], colors);
        render_article_pane(frame, app, panes[1], colors);
    }

    render_status_bar(frame, app, rows[1], colors);
}

fn border_style(active: bool, colors: &ColorConfig) -> Style {
    if active {
        Style::default().fg(colors.active_border)
    } else {
        Style::default().fg(colors.inactive_border)
    }
}

fn render_feeds_pane(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let is_active = app.active_pane == ActivePane::Feeds;
    let current = app.nav.feed_filter;

    let mut items = Vec::with_capacity(app.feeds.len() + 1);
    items.push(feed_item("All feeds", current.is_none()));
    items.extend(
        app.feeds
            .iter()
            .map(|feed| feed_item(&feed.title, current == Some(feed.feed_id))),
    );

    let highlight_style = if is_active {
        Style::default()
            .bg(colors.selection_bg_active)
            .fg(colors.selection_fg_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(colors.selection_bg_inactive)
            .fg(colors.selection_fg_inactive)
    };

    let block = Block::default()
        .title(format!(" Feeds ({}) ", app.feeds.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, colors));

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.feed_list_state);
}

fn feed_item(title: &str, current: bool) -> ListItem<'static> {
    let marker = if current { "● " } else { "  " };
    ListItem::new(format!("{}{}", marker, title))
}

fn render_article_pane(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let is_active = app.active_pane == ActivePane::Article;

    let content = match &app.article {
        Some(article) => {
            let entry = &article.entry;
            let mut lines = vec![
                Line::from(Span::styled(
                    entry.display_title().to_string(),
                    Style::default()
                        .fg(colors.article_title)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    article.feed_title.clone(),
                    Style::default().fg(colors.metadata_feed),
                )),
            ];

            if let Some(author) = entry.author.as_deref().filter(|a| !a.is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("By: {}", author),
                    Style::default().fg(colors.metadata_author),
                )));
            }
            let date = entry.published_date();
            if !date.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("Date: {}", date),
                    Style::default().fg(colors.metadata_date),
                )));
            }
            if let Some(link) = app.current_url() {
                lines.push(Line::from(Span::styled(
                    format!("Link: {}", link),
                    Style::default().fg(colors.metadata_link),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from("─".repeat(area.width.saturating_sub(2) as usize)));
            lines.push(Line::from(""));

            lines.extend(app.article_text.lines().map(|l| Line::from(l.to_string())));
            Text::from(lines)
        }
        None if app.is_loading => Text::from("Loading..."),
        None => Text::from("No unread articles"),
    };

    let block = Block::default()
        .title(format!(" Article [{}] ", app.position_label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, colors));

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let base = Style::default().fg(colors.status_fg).bg(colors.status_bg);

    let (status, style) = if let Some(ref err) = app.error {
        (format!("Error: {}", err), base.fg(colors.error))
    } else if app.is_loading {
        ("Loading...".to_string(), base)
    } else if let Some(ref msg) = app.status_message {
        (msg.clone(), base)
    } else if app.maximized {
        (
            format!("{}  j/k:Scroll  r:Read  n/p:Next/Prev  m:Exit maximize  q:Quit", app.position_label()),
            base,
        )
    } else {
        (
            format!(
                "{}  r:Read  s:Star  n/p:Next/Prev  j/k:Scroll  Tab:Pane  Enter:Filter  o:Open  R:Reload  m:Max  q:Quit",
                app.position_label()
            ),
            base,
        )
    };

    frame.render_widget(Paragraph::new(status).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entry, ResolvedArticle, Subscription, SubscriptionIndex};
    use crate::reader::ArticleView;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| render(frame, app, &ColorConfig::default()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_article_and_position() {
        let mut entry = Entry::new(9, 1);
        entry.title = Some("Newest story".into());
        let mut app = TuiApp::new(None);
        app.apply_view(ArticleView {
            total: 4,
            position: 0,
            feed_filter: None,
            article: Some(ResolvedArticle {
                entry,
                display_content: "<p>Story body</p>".into(),
                feed_title: "One".into(),
            }),
            subscriptions: SubscriptionIndex::from_list(vec![Subscription::new(1, "One")]),
        });

        let text = screen(&mut app);
        assert!(text.contains("All feeds"));
        assert!(text.contains("Newest story"));
        assert!(text.contains("Story body"));
        assert!(text.contains("1/4"));
    }

    #[test]
    fn test_renders_empty_state_and_error() {
        let mut app = TuiApp::new(None);
        app.set_error("Upstream feed API returned 503 for /unread_entries.json".into());

        let text = screen(&mut app);
        assert!(text.contains("No unread articles"));
        assert!(text.contains("Error: Upstream feed API returned 503"));
    }
}
