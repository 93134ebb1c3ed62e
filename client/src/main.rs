//! Graphgaze entry-point: fetch graph resources and write the composed page.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use client::domain::Dashboard;
use client::outbound::graph::{
    DEFAULT_API_VERSION, DEFAULT_BASE_URL, GraphApiConfig, GraphHttpSource,
};
use client::outbound::page::InMemoryPage;

/// `graphgaze` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "graphgaze",
    about = "Fetch a profile, posts, and photos from a social-graph API and render them as a page",
    version
)]
struct CliArgs {
    /// Access token sent with every request. Falls back to
    /// `GRAPHGAZE_ACCESS_TOKEN` when omitted.
    #[arg(long = "token", value_name = "token")]
    token: Option<String>,
    /// Base URL of the graph API. Falls back to `GRAPHGAZE_BASE_URL`.
    #[arg(long = "base-url", value_name = "url")]
    base_url: Option<String>,
    /// API version segment. Falls back to `GRAPHGAZE_API_VERSION`.
    #[arg(long = "api-version", value_name = "version")]
    api_version: Option<String>,
    /// Write the rendered page here instead of stdout.
    #[arg(long = "out", value_name = "path")]
    out: Option<PathBuf>,
    #[command(subcommand)]
    command: FetchCommand,
}

/// Which fetch action(s) to trigger.
#[derive(Debug, Clone, Copy, Subcommand)]
enum FetchCommand {
    /// Fetch and render the token owner's profile.
    Profile,
    /// Fetch and render the most recent posts.
    Posts,
    /// Fetch and render the most recent photos.
    Photos,
    /// Trigger all three fetches concurrently.
    Dashboard,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> color_eyre::Result<()> {
    let base_url = args
        .base_url
        .or_else(|| env::var("GRAPHGAZE_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
    let version = args
        .api_version
        .or_else(|| env::var("GRAPHGAZE_API_VERSION").ok())
        .unwrap_or_else(|| DEFAULT_API_VERSION.to_owned());
    let raw_token = args
        .token
        .or_else(|| env::var("GRAPHGAZE_ACCESS_TOKEN").ok())
        .unwrap_or_default();

    let config = GraphApiConfig {
        base_url: Url::parse(&base_url)?,
        version,
    };
    let source = Arc::new(GraphHttpSource::new(config)?);
    let page = Arc::new(InMemoryPage::new());
    // The input field trims on every edit; the actions read it back.
    page.set_token_input(&raw_token);
    let token = page.token_input();

    let dashboard = Dashboard::new(source, Arc::clone(&page));
    match args.command {
        FetchCommand::Profile => dashboard.fetch_profile(&token).await,
        FetchCommand::Posts => dashboard.fetch_posts(&token).await,
        FetchCommand::Photos => dashboard.fetch_photos(&token).await,
        FetchCommand::Dashboard => {
            tokio::join!(
                dashboard.fetch_profile(&token),
                dashboard.fetch_posts(&token),
                dashboard.fetch_photos(&token),
            );
        }
    }

    if let Some(message) = page.banner_message() {
        warn!(%message, "page finished with an error banner");
    }

    let document = page.to_document();
    match args.out {
        Some(path) => std::fs::write(path, document)?,
        None => io::stdout().write_all(document.as_bytes())?,
    }
    Ok(())
}
