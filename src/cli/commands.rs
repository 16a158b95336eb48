use std::fmt::Write as _;

use crate::app::{AppContext, Result};
use crate::domain::{EntryId, FeedId};
use crate::extract::ContentFormat;
use crate::reader::{ArticlePayload, ArticleView, MutationPayload};

pub async fn view(
    ctx: &AppContext,
    feed: Option<FeedId>,
    pos: i64,
    json: bool,
    html: bool,
) -> Result<()> {
    let format = if html {
        ContentFormat::Html
    } else {
        ContentFormat::Text
    };
    let view = ctx.reader.view(feed, pos, format).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ArticlePayload::from(&view))?);
    } else {
        print!("{}", render_view(&view));
    }

    Ok(())
}

pub async fn list_feeds(ctx: &AppContext) -> Result<()> {
    let subscriptions = ctx.reader.subscriptions().await?;

    if subscriptions.is_empty() {
        println!("No subscriptions");
        return Ok(());
    }

    for sub in subscriptions.iter() {
        println!("{:>8}  {}", sub.feed_id, sub.title);
    }

    Ok(())
}

pub async fn mark_read(ctx: &AppContext, id: EntryId, json: bool) -> Result<()> {
    let result = ctx.reader.mark_read(id).await;
    report(result, json, || format!("Marked entry {} read", id))
}

pub async fn star(ctx: &AppContext, id: EntryId, json: bool) -> Result<()> {
    let result = ctx.reader.star(id).await;
    report(result, json, || format!("Starred entry {}", id))
}

fn report(result: Result<()>, json: bool, message: impl FnOnce() -> String) -> Result<()> {
    if json {
        let payload = match &result {
            Ok(()) => MutationPayload::ok(),
            Err(e) => MutationPayload::failed(e.to_string()),
        };
        println!("{}", serde_json::to_string(&payload)?);
    } else if result.is_ok() {
        println!("{}", message());
    }
    result
}

/// Human-readable rendering of one view.
pub fn render_view(view: &ArticleView) -> String {
    let mut out = String::new();

    let Some(article) = &view.article else {
        let _ = writeln!(out, "No unread articles");
        return out;
    };

    let entry = &article.entry;
    let _ = writeln!(out, "[{}/{}] {}", view.position + 1, view.total, entry.display_title());
    let _ = write!(out, "{}", article.feed_title);
    let date = entry.published_date();
    if !date.is_empty() {
        let _ = write!(out, " | {}", date);
    }
    if let Some(author) = entry.author.as_deref().filter(|a| !a.is_empty()) {
        let _ = write!(out, " | {}", author);
    }
    let _ = writeln!(out);
    if let Some(url) = entry.url.as_deref().filter(|u| !u.is_empty()) {
        let _ = writeln!(out, "{}", url);
    }
    let _ = writeln!(out, "id: {}", entry.id);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", article.display_content.trim());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entry, ResolvedArticle, SubscriptionIndex};

    fn view_with(article: Option<ResolvedArticle>, total: usize, position: usize) -> ArticleView {
        ArticleView {
            total,
            position,
            feed_filter: None,
            article,
            subscriptions: SubscriptionIndex::default(),
        }
    }

    #[test]
    fn test_render_empty_view() {
        assert_eq!(render_view(&view_with(None, 0, 0)), "No unread articles\n");
    }

    #[test]
    fn test_render_article_header() {
        let mut entry = Entry::new(77, 3);
        entry.title = Some("Hello".into());
        entry.author = Some("Ada".into());
        entry.url = Some("https://example.com/hello".into());
        entry.published = Some("2024-01-02T03:04:05Z".into());
        let article = ResolvedArticle {
            entry,
            display_content: "  Body text \n".into(),
            feed_title: "Example".into(),
        };

        let text = render_view(&view_with(Some(article), 5, 2));
        assert_eq!(
            text,
            "[3/5] Hello\nExample | 2024-01-02 | Ada\nhttps://example.com/hello\nid: 77\n\nBody text\n"
        );
    }

    #[test]
    fn test_report_passes_error_through() {
        let err = crate::app::FolioError::UpstreamStatus {
            endpoint: "/starred_entries.json".into(),
            status: 500,
        };
        assert!(report(Err(err), true, || String::new()).is_err());
        assert!(report(Ok(()), false, || "done".into()).is_ok());
    }
}
