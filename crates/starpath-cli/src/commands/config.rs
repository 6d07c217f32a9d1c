//! `starpath config` subcommands
//!
//! Unlike catalogue commands, these refuse to touch a config file that does
//! not parse: reading it would show defaults that are not on disk, and
//! writing it would replace the user's settings.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Subcommand};

use crate::config::{config_file_path, Config};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the value of one key
    Get {
        /// Key, e.g. `catalog` or `layout.radius`
        key: String,
    },
    /// Change one key and save
    Set {
        key: String,
        value: String,
    },
    /// Restore one key to its default and save
    Unset {
        key: String,
    },
    /// Show every key, marking the ones changed from the default
    List,
    /// Print where the config file lives
    Path,
    /// Write a config file with default values
    Init {
        /// Catalogue to record in the new file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs) -> anyhow::Result<()> {
    let path = config_file_path();

    match &args.command {
        ConfigCommands::Get { key } => {
            let config = open(&path)?;
            println!("{}", display_value(config.get(key)?));
        }
        ConfigCommands::Set { key, value } => {
            let mut config = open(&path)?;
            let before = display_value(config.get(key)?);
            config.set(key, value)?;
            config.save_to(&path)?;
            println!("{}: {} -> {}", key, before, display_value(config.get(key)?));
        }
        ConfigCommands::Unset { key } => {
            let mut config = open(&path)?;
            config.unset(key)?;
            config.save_to(&path)?;
            println!("{}: reset to {}", key, display_value(config.get(key)?));
        }
        ConfigCommands::List => list(&open(&path)?)?,
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { catalog, force } => init(&path, catalog.clone(), *force)?,
    }

    Ok(())
}

/// Load the config at `path`, failing on anything that does not parse
fn open(path: &Path) -> anyhow::Result<Config> {
    Config::load_from(path).with_context(|| {
        format!(
            "Cannot use config at {}. Fix it by hand or run `starpath config init --force`",
            path.display()
        )
    })
}

fn display_value(value: Option<String>) -> String {
    value.unwrap_or_else(|| "(not set)".to_string())
}

fn list(config: &Config) -> anyhow::Result<()> {
    let defaults = Config::default();
    let width = Config::keys().iter().map(|k| k.len()).max().unwrap_or(0);

    for key in Config::keys() {
        let value = config.get(key)?;
        let marker = if value == defaults.get(key)? { "" } else { "  *" };
        println!("{:<width$}  {}{}", key, display_value(value), marker, width = width);
    }

    Ok(())
}

fn init(path: &Path, catalog: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let config = Config {
        catalog,
        ..Config::default()
    };
    config.save_to(path)?;
    tracing::info!("Initialized config at {}", path.display());
    println!("{}", path.display());

    Ok(())
}
