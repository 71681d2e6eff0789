//! folio - preview server and preference tooling for the site header

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli::ThemeCommand;
use folio_core::{HeaderConfig, JsonFilePreferenceStore};
use folio_types::ColorScheme;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Portfolio site header - preview server and tooling",
    long_about = "Serves the Trunk-built site header bundle and inspects its configuration.\n\
                  \n\
                  Examples:\n\
                    folio serve                      # Serve crates/folio-web/dist on :3333\n\
                    folio serve --port 8080          # Custom port\n\
                    folio links                      # Print the navigation table\n\
                    folio config --json              # Print resolved config as JSON\n\
                    folio theme toggle               # Flip the stored color scheme\n\
                  \n\
                  Environment Variables:\n\
                    FOLIO_CONFIG                     # Path to folio.toml\n\
                    FOLIO_NO_COLOR                   # Disable ANSI colors\n\
                    RUST_LOG                         # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to header config (folio.toml)
    #[arg(long, env = "FOLIO_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "FOLIO_NO_COLOR", global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the built bundle
    Serve {
        /// Port for the preview server
        #[arg(long, default_value = "3333")]
        port: u16,
        /// Trunk output directory
        #[arg(long, default_value = "crates/folio-web/dist")]
        dist: PathBuf,
    },
    /// Print the navigation targets
    Links {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved configuration
    Config {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Inspect or change the stored color scheme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum ThemeAction {
    /// Print the current scheme (default)
    Show,
    /// Flip between dark and light
    Toggle,
    /// Set an explicit scheme
    Set {
        /// dark | light
        scheme: ColorScheme,
    },
}

impl From<ThemeAction> for ThemeCommand {
    fn from(action: ThemeAction) -> Self {
        match action {
            ThemeAction::Show => ThemeCommand::Show,
            ThemeAction::Toggle => ThemeCommand::Toggle,
            ThemeAction::Set { scheme } => ThemeCommand::Set(scheme),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let config = HeaderConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load header config")?;

    match cli.command {
        Command::Serve { port, dist } => {
            folio_web::run(dist, port)
                .await
                .context("Preview server failed")?;
        }
        Command::Links { json } => {
            if json {
                println!("{}", cli::render_links_json(&config)?);
            } else {
                println!("{}", cli::render_links_table(&config, cli.no_color));
            }
        }
        Command::Config { json } => {
            println!("{}", cli::render_config(&config, json)?);
        }
        Command::Theme { action } => {
            let store = JsonFilePreferenceStore::in_config_dir(&config.storage_key)
                .context("Could not locate preference storage")?;
            tracing::debug!(path = %store.path().display(), "Using preference file");

            let command = action.map(ThemeCommand::from).unwrap_or(ThemeCommand::Show);
            let scheme = cli::run_theme(store, &config, command);
            println!("{}", scheme);
        }
    }

    Ok(())
}
