//! Starpath CLI - Command line interface for the star graph

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, paths, pin, stars, walk};
use config::Config;
use output::OutputFormat;
use starpath_core::{load_catalog, Galaxy};

#[derive(Parser)]
#[command(name = "starpath")]
#[command(author, version, about = "Chart greedy routes through a star catalogue")]
pub struct Cli {
    /// Star catalogue (CSV)
    #[arg(short, long, env = "STARPATH_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format: table, json, csv
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stars, nearest first
    Stars,
    /// Build and list the paths between stars
    Paths,
    /// Walk from a star, always to the neighbour with the smallest radius
    Walk(walk::WalkArgs),
    /// Pin stars and list every pinned star
    Pin(pin::PinArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded galaxy
pub struct AppContext {
    pub galaxy: Galaxy,
    pub format: OutputFormat,
}

impl AppContext {
    /// Load the config file and the catalogue it points at
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        Self::new(cli, &Config::load())
    }

    pub fn new(cli: &Cli, config: &Config) -> anyhow::Result<Self> {
        let format = OutputFormat::parse(cli.format.as_deref().unwrap_or(config.format.as_str()))?;

        let Some(catalog) = cli.catalog.as_ref().or(config.catalog.as_ref()) else {
            anyhow::bail!(
                "No catalog given. Pass --catalog <FILE> or run `starpath config set catalog <FILE>`"
            );
        };
        tracing::debug!("Using catalog at: {:?}", catalog);

        let content = std::fs::read_to_string(catalog)
            .map_err(|e| anyhow::anyhow!("Cannot read catalog {}: {}", catalog.display(), e))?;
        let galaxy = load_catalog(&content, &config.layout)?;
        tracing::info!("Loaded {} stars from {}", galaxy.len(), catalog.display());

        Ok(Self { galaxy, format })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting starpath CLI");

    match &cli.command {
        Commands::Stars => stars::run(&cli, &mut AppContext::load(&cli)?)?,
        Commands::Paths => paths::run(&cli, &mut AppContext::load(&cli)?)?,
        Commands::Walk(args) => walk::run(args, &cli, &mut AppContext::load(&cli)?)?,
        Commands::Pin(args) => pin::run(args, &cli, &mut AppContext::load(&cli)?)?,
        Commands::Config(args) => commands::config::run(args)?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}
