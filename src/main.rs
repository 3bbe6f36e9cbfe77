use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "flickerless")]
#[command(about = "Masks background-color flash between page navigations")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.flickerless/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a config file with the default settings
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Extract the background color from a document snapshot
    Extract {
        /// Path to a JSON document snapshot
        snapshot: PathBuf,
    },

    /// Run a scripted navigation scenario through the overlay engine
    Simulate {
        /// Path to a TOML scenario file
        scenario: PathBuf,

        /// Persist memoized colors to this JSON file instead of memory
        #[arg(long)]
        store: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(flickerless::Config::global_config_path);

    match cli.command {
        Commands::Init { force } => {
            cli::init::init_command(&config_path, force)?;
        }
        Commands::Extract { snapshot } => {
            cli::extract::extract_command(&snapshot)?;
        }
        Commands::Simulate { scenario, store } => {
            cli::simulate::simulate_command(&config_path, &scenario, store.as_deref()).await?;
        }
    }

    Ok(())
}
