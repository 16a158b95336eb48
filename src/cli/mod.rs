pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{EntryId, FeedId};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A one-article-at-a-time reader for Feedbin", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/folio/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one unread article
    View {
        /// Only consider entries from this feed
        #[arg(short, long)]
        feed: Option<FeedId>,

        /// Position within the unread list (clamped)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        pos: i64,

        /// Print the machine-readable payload
        #[arg(long)]
        json: bool,

        /// Keep article markup instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// List subscriptions
    Feeds,
    /// Mark an entry as read
    MarkRead {
        /// Entry ID
        id: EntryId,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Star an entry
    Star {
        /// Entry ID
        id: EntryId,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Launch the TUI
    Tui {
        /// Start with this feed selected
        #[arg(short, long)]
        feed: Option<FeedId>,
    },
}
