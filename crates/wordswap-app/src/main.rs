use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordswap_config::Config;

pub mod controller;
pub mod events;
pub mod session;
pub mod state;
pub mod ui;
pub mod windows;


use self::controller::AppController;
use self::session::Session;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "wordswap", version, about = "Dictionary-driven word substitution")]
struct Cli {
    /// Config file holding the active and known dictionaries
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read commands and text from stdin (default)
    Interactive,
    /// Translate one sentence and print it
    Translate {
        text: String,
        /// Dictionary to use instead of the configured one
        #[arg(short, long)]
        dictionary: Option<PathBuf>,
    },
    /// Translate a text file line by line
    TranslateFile {
        source: PathBuf,
        dest: PathBuf,
        #[arg(short, long)]
        dictionary: Option<PathBuf>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr));

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        tracing::warn!("{}, using defaults", e);
        Config::new()
    });

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let state = Arc::new(AppState::new(config, cli.config));
            run(state).await
        }
        Command::Translate { text, dictionary } => {
            let session = one_shot_session(config, dictionary)?;
            println!("{}", session.translator.translate_sentence(&text).text);
            Ok(())
        }
        Command::TranslateFile {
            source,
            dest,
            dictionary,
        } => {
            let session = one_shot_session(config, dictionary)?;
            let lines = session.translator.translate_file(&source, &dest)?;
            tracing::info!("Wrote {} lines to {}", lines, dest.display());
            Ok(())
        }
    }
}

fn one_shot_session(mut config: Config, dictionary: Option<PathBuf>) -> anyhow::Result<Session> {
    if let Some(path) = dictionary {
        config.dictionary.file = path;
    }

    let mut session = Session::new(&config);
    session
        .dictionaries
        .reload()
        .context("could not load dictionary")?;
    Ok(session)
}

/// Run the interactive app until the UI or Ctrl+C asks to stop, then persist the config
pub async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state.clone());
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        result = signal::ctrl_c() => {
            match result {
                Ok(()) => tracing::info!("Shutdown requested"),
                Err(e) => tracing::error!("Failed to listen for ctrl+c: {e}"),
            }
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {e:#}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::debug!("Task ended with: {e:#}");
        }
    }

    state.save_config().await
}
