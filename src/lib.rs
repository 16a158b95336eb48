//! # Folio
//!
//! A one-article-at-a-time reading pane for a Feedbin account.
//!
//! ## Architecture
//!
//! Every screen is re-derived from Feedbin on demand; the client only holds
//! a position and an optional feed filter:
//!
//! ```text
//! unread IDs → UnreadSetResolver → PositionNavigator → ContentResolver → view
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export FEEDBIN_USER=you@example.com FEEDBIN_PASS=secret
//!
//! # Newest unread article as plain text
//! folio view
//!
//! # Second article of feed 42, machine-readable
//! folio view --feed 42 --pos 1 --json
//!
//! # Interactive reader
//! folio tui
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) resolves credentials and wires the
/// Feedbin client, unread-set resolver and content chain into a
/// [`Reader`](reader::Reader).
pub mod app;

/// Command-line interface using clap.
///
/// - `view [--feed ID] [--pos N] [--json] [--html]` - show one article
/// - `feeds` - list subscriptions
/// - `mark-read <ID>` / `star <ID>` - mutate one entry
/// - `tui [--feed ID]` - launch the TUI
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/folio/config.toml`, supporting:
/// - Feedbin connection settings
/// - Content extraction tuning
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Core domain models.
///
/// - [`Entry`](domain::Entry): one Feedbin entry
/// - [`Subscription`](domain::Subscription): a subscribed feed and its title
/// - [`NavigationState`](domain::NavigationState): client-held position and filter
pub mod domain;

/// Full-text content extraction on top of `scraper`.
pub mod extract;

/// The reading-pane boundary: view, mark read, star, navigate.
pub mod reader;

/// Unread-set resolution, position clamping and the display-content chain.
pub mod resolver;

/// Terminal user interface.
///
/// Two panes built with ratatui: feeds on the left, the current article
/// on the right. Keybindings: r marks read, s stars, n/p move, Enter
/// applies the highlighted feed filter, o opens in browser, q quits.
pub mod tui;

/// Feedbin API client.
pub mod upstream;
