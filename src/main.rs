use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio::app::AppContext;
use folio::cli::{commands, Cli, Commands};
use folio::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout belongs to the TUI and to --json output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::View {
            feed,
            pos,
            json,
            html,
        } => {
            commands::view(&ctx, feed, pos, json, html).await?;
        }
        Commands::Feeds => {
            commands::list_feeds(&ctx).await?;
        }
        Commands::MarkRead { id, json } => {
            commands::mark_read(&ctx, id, json).await?;
        }
        Commands::Star { id, json } => {
            commands::star(&ctx, id, json).await?;
        }
        Commands::Tui { feed } => {
            folio::tui::run(Arc::new(ctx), feed).await?;
        }
    }

    Ok(())
}
