pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::domain::{FeedId, NavigationState};
use crate::extract::ContentFormat;
use crate::reader::{NavAction, Reader};

use self::app::{ActivePane, TuiApp};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>, feed_filter: Option<FeedId>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, feed_filter).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>, feed_filter: Option<FeedId>) -> Result<()> {
    let mut tui_app = TuiApp::new(feed_filter);
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let colors = &ctx.config.colors;

    let initial = tui_app.nav;
    reload(terminal, &mut tui_app, &ctx, initial).await?;

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app, colors))?;

        let AppEvent::Key(key) = event_handler.next()? else {
            continue;
        };

        let action = ctx.config.keybindings.get_action(&key);
        if action != Action::None {
            tui_app.clear_status();
        }

        match action {
            Action::Quit => {
                tui_app.should_quit = true;
            }
            Action::ScrollUp => {
                tui_app.move_up();
            }
            Action::ScrollDown => {
                tui_app.move_down();
            }
            Action::PageDown => {
                tui_app.page_down();
            }
            Action::PageUp => {
                tui_app.page_up();
            }
            Action::ToggleMaximize => {
                tui_app.toggle_maximize();
            }
            Action::NextPane => {
                if !tui_app.maximized {
                    tui_app.active_pane = tui_app.active_pane.next();
                }
            }
            Action::PrevPane => {
                if !tui_app.maximized {
                    tui_app.active_pane = tui_app.active_pane.prev();
                }
            }
            Action::Select => {
                if tui_app.active_pane == ActivePane::Feeds {
                    let next = tui_app.select_highlighted_feed();
                    reload(terminal, &mut tui_app, &ctx, next).await?;
                }
            }
            Action::MarkRead => {
                step(terminal, &mut tui_app, &ctx, NavAction::MarkRead).await?;
            }
            Action::Star => {
                step(terminal, &mut tui_app, &ctx, NavAction::Star).await?;
            }
            Action::Skip => {
                step(terminal, &mut tui_app, &ctx, NavAction::Skip).await?;
            }
            Action::Prev => {
                step(terminal, &mut tui_app, &ctx, NavAction::Prev).await?;
            }
            Action::OpenInBrowser => match tui_app.current_url().map(str::to_string) {
                Some(url) => {
                    if let Err(e) = open::that(&url) {
                        tui_app.set_error(format!("Failed to open browser: {}", e));
                    }
                }
                None => tui_app.set_status("Article has no link".to_string()),
            },
            Action::Refresh => {
                let current = tui_app.nav;
                reload(terminal, &mut tui_app, &ctx, current).await?;
            }
            Action::None => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

async fn step(terminal: &mut Tui, tui_app: &mut TuiApp, ctx: &AppContext, action: NavAction) -> Result<()> {
    match navigate(tui_app, &ctx.reader, action).await {
        Some(next) => reload(terminal, tui_app, ctx, next).await,
        None => Ok(()),
    }
}

async fn reload(
    terminal: &mut Tui,
    tui_app: &mut TuiApp,
    ctx: &AppContext,
    nav: NavigationState,
) -> Result<()> {
    tui_app.is_loading = true;
    terminal.draw(|frame| layout::render(frame, tui_app, &ctx.config.colors))?;
    load(tui_app, &ctx.reader, nav).await;
    Ok(())
}

/// Send a navigation action for the current entry and return the state to
/// load next. `None` when there is nothing to reload.
///
/// Upstream failures end up in the status bar.
async fn navigate(tui_app: &mut TuiApp, reader: &Reader, action: NavAction) -> Option<NavigationState> {
    let entry_id = tui_app.current_entry_id();

    match reader.apply(action, tui_app.nav, entry_id).await {
        Ok(_) if action == NavAction::Star => {
            if let Some(id) = entry_id {
                tui_app.set_status(format!("Starred entry {}", id));
            }
            None
        }
        Ok(next) => Some(next),
        Err(e) => {
            tracing::warn!("{:?} failed: {}", action, e);
            tui_app.set_error(e.to_string());
            None
        }
    }
}

/// Fetch the view for `nav`. The pane keeps its current state on failure.
async fn load(tui_app: &mut TuiApp, reader: &Reader, nav: NavigationState) {
    let result = reader
        .view(nav.feed_filter, nav.position, ContentFormat::Html)
        .await;
    tui_app.is_loading = false;

    match result {
        Ok(view) => tui_app.apply_view(view),
        Err(e) => {
            tracing::warn!("Loading article failed: {}", e);
            tui_app.set_error(e.to_string());
        }
    }
}
