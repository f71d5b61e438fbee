mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventregistry_lib::{EventRegistry, Settings};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "eventregistry")]
#[command(about = "Search news events and articles in Event Registry")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Settings file (JSON or TOML). Defaults to ./settings.json or ./settings.toml
    #[arg(long, global = true)]
    settings: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search events
    Events(commands::events::EventsArgs),
    /// Show one or more events by URI
    Event(commands::event::EventArgs),
    /// Search articles
    Articles(commands::articles::ArticlesArgs),
    /// Show an article by URI, id or URL
    Article(commands::article::ArticleArgs),
    /// Suggest concepts, sources, locations, categories or concept classes
    Suggest(commands::suggest::SuggestArgs),
    /// Recently added events or articles
    Recent(commands::recent::RecentArgs),
    /// Article and event counts
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("eventregistry=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let settings = Settings::load(cli.settings.as_deref())?;
    let session = EventRegistry::connect(&settings).await?;

    match &cli.command {
        Commands::Events(args) => commands::events::run(args, &session, &format).await?,
        Commands::Event(args) => commands::event::run(args, &session, &format).await?,
        Commands::Articles(args) => commands::articles::run(args, &session, &format).await?,
        Commands::Article(args) => commands::article::run(args, &session, &format).await?,
        Commands::Suggest(args) => commands::suggest::run(args, &session, &format).await?,
        Commands::Recent(args) => commands::recent::run(args, &session, &format).await?,
        Commands::Stats => commands::stats::run(&session, &format).await?,
    }

    Ok(())
}
