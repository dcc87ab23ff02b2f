/// Mixtape - play a song, keep the history, log what happened
use clap::{Parser, Subcommand};
use mixtape_cli::{commands, AppConfig, AppState};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mixtape")]
#[command(about = "Play songs and keep a history of what was played", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./mixtape.toml if present)
    #[arg(short, long, global = true, env = "MIXTAPE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a song and record it
    Play {
        /// Song title
        title: String,
    },
    /// Show playback history, newest first
    History,
    /// Delete all playback history
    ClearHistory,
    /// Show the activity log
    Logs,
    /// Delete the activity log
    ClearLogs,
    /// Create a table in the SQLite history database
    CreateTable {
        /// Table name
        #[arg(short, long)]
        table: String,
        /// Column as name:TYPE[:pk][:notnull] (repeatable)
        #[arg(short, long = "column", required = true)]
        columns: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mixtape=info,mixtape_cli=info,mixtape_storage=info,mixtape_playback=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let state = AppState::build(&config).await?;
    let service = &state.service;

    let lines = match cli.command {
        Commands::Play { title } => commands::play(service, &title).await,
        Commands::History => commands::history(service).await?,
        Commands::ClearHistory => commands::clear_history(service).await?,
        Commands::Logs => commands::logs(service).await?,
        Commands::ClearLogs => commands::clear_logs(service).await?,
        Commands::CreateTable { table, columns } => {
            commands::create_table(service, &table, &columns).await?
        }
    };

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
