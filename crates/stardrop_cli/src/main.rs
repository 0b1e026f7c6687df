//! Stardrop CLI - one-shot sync of GitHub stars into a Raindrop collection.

mod config;
mod progress;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stardrop::{GitHubClient, ProgressCallback, RaindropClient, SyncOptions, sync};

#[derive(Parser)]
#[command(name = "stardrop")]
#[command(version)]
#[command(about = "Sync GitHub stars to a Raindrop.io collection")]
#[command(
    long_about = "Stardrop mirrors the authenticated user's GitHub starred repositories \
into one Raindrop.io collection: new stars become bookmarks, bookmarks whose \
star was removed are deleted."
)]
#[command(after_long_help = r#"ENVIRONMENT VARIABLES
    GH_TOKEN                  GitHub personal access token (needs the starring read scope)
    RAINDROP_TOKEN            Raindrop.io API token
    RAINDROP_COLLECTION_ID    Numeric id of the target collection

A .env file in the current directory is honored.
"#)]
struct Cli {
    /// Compute and report the diff without creating or deleting bookmarks
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stardrop=info,stardrop_cli=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::error!(error = %err, "Sync failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;

    let github = GitHubClient::new(&config.gh_token)?;
    let raindrop = RaindropClient::new(&config.raindrop_token)?;

    let reporter = progress::LoggingReporter::new();
    let callback: ProgressCallback = Box::new(move |event| reporter.handle(event));

    let options = SyncOptions {
        dry_run: cli.dry_run,
    };
    let result = sync(
        &github,
        &raindrop,
        config.collection_id,
        &options,
        Some(&callback),
    )
    .await?;

    tracing::info!(
        stars = result.stars,
        raindrops = result.raindrops,
        created = result.created,
        deleted = result.deleted,
        dry_run = options.dry_run,
        "Done"
    );
    Ok(())
}
