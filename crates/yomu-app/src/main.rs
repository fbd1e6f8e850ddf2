use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use yomu_config::{Config, Settings};
use yomu_core::{JsonFileStore, KeyValueStore, MemoryStore};
use yomu_lang_japanese::JapaneseProcessor;

pub mod client;
pub mod controller;
pub mod events;
pub mod io;
pub mod render;
pub mod state;

#[cfg(test)]
mod tests;

use self::client::LookupClient;
use self::controller::AppController;
use self::render::{render_history, render_lookup, render_settings};
use self::state::AppState;

#[derive(Parser)]
#[command(name = "yomu", about = "Look up kanji, hiragana and katakana readings and meanings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Directory for persisted history and settings
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Keep history and settings in memory only
    #[arg(long, global = true)]
    ephemeral: bool,
    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Look up text once and record it in history
    Lookup {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List past lookups, most recent first
    History {
        /// Remove all entries instead
        #[arg(long)]
        clear: bool,
    },
    /// Show settings, or change the given ones
    Settings {
        #[arg(long)]
        auto_hide: Option<bool>,
        #[arg(long)]
        show_readings: Option<bool>,
        #[arg(long)]
        show_meanings: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json);

    let mut config = Config::new();
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    let store: Arc<dyn KeyValueStore> = if cli.ephemeral {
        tracing::info!("Using in-memory storage");
        Arc::new(MemoryStore::new())
    } else {
        tracing::info!("Using storage at {}", config.storage.data_dir.display());
        Arc::new(JsonFileStore::new(&config.storage.data_dir))
    };

    let channel_capacity = config.channel_capacity;
    let state = Arc::new(AppState::new(config, store));
    let processor = Arc::new(JapaneseProcessor::new());

    let controller = AppController::new(state, channel_capacity);
    let mut tasks = controller.spawn_tasks(processor);
    let client = controller.client();

    let mut interrupted = false;
    let outcome = match cli.command {
        Some(command) => run_command(command, &client).await,
        None => {
            tokio::select! {
                result = io::watch_stdin(client.clone(), controller.cancel_token()) => result,
                _ = signal::ctrl_c() => {
                    tracing::info!("Shutdown requested");
                    interrupted = true;
                    Ok(())
                }
            }
        }
    };

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task exited with error: {e}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    // A pending blocking stdin read would otherwise hold the runtime open
    if interrupted {
        std::process::exit(0);
    }

    outcome
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

async fn run_command(command: Command, client: &LookupClient) -> anyhow::Result<()> {
    match command {
        Command::Lookup { text } => {
            let result = client.lookup(text.join(" ")).await?;
            let settings = client.settings().await?;
            if let Some(panel) = render_lookup(&result, &settings) {
                print!("{panel}");
            }
        }
        Command::History { clear: true } => {
            client.clear_history().await?;
            println!("History cleared.");
        }
        Command::History { clear: false } => {
            let entries = client.history().await?;
            print!("{}", render_history(&entries));
        }
        Command::Settings {
            auto_hide,
            show_readings,
            show_meanings,
        } => {
            let current = client.settings().await?;
            let settings = apply_overrides(current, auto_hide, show_readings, show_meanings);
            let settings = if settings != current {
                client.save_settings(settings).await?
            } else {
                current
            };
            print!("{}", render_settings(&settings));
        }
    }

    Ok(())
}

fn apply_overrides(
    mut settings: Settings,
    auto_hide: Option<bool>,
    show_readings: Option<bool>,
    show_meanings: Option<bool>,
) -> Settings {
    if let Some(value) = auto_hide {
        settings.auto_hide = value;
    }
    if let Some(value) = show_readings {
        settings.show_readings = value;
    }
    if let Some(value) = show_meanings {
        settings.show_meanings = value;
    }
    settings
}
