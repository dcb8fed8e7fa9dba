use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use crate::config::AppConfig;
use crate::ingredient::NewIngredient;
use crate::remote::RemoteClient;

/// Larder - terminal ingredient list backed by a REST store
#[derive(Parser, Debug)]
#[command(name = "larder")]
#[command(about = "Manage an ingredient list kept in a remote JSON store")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the store base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Serve the collection from memory instead of the network
    #[arg(long, global = true)]
    pub offline: bool,

    /// Override the filter debounce in milliseconds
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the ingredients in the store
    List {
        /// Only show ingredients with exactly this title
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Add an ingredient
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        amount: String,
    },
    /// Remove an ingredient by id
    Remove {
        id: String,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

impl Cli {
    /// Path of the config file to read
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(AppConfig::default_path)
    }

    /// Apply command line overrides on top of the loaded file
    pub fn apply_overrides(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if self.offline {
            config.offline = true;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.debounce_ms = debounce_ms;
        }
        config.validate()?;
        Ok(())
    }

    /// INFO by default, DEBUG with `--debug`, whatever the output
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Whether the terminal UI should start
    pub fn is_interactive(&self) -> bool {
        self.command.is_none()
    }
}

/// Runs the headless subcommands
pub struct CliHandler {
    config: AppConfig,
    config_path: PathBuf,
}

impl CliHandler {
    pub fn new(config: AppConfig, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::List { filter } => self.handle_list(filter).await,
            Commands::Add { title, amount } => self.handle_add(title, amount).await,
            Commands::Remove { id } => self.handle_remove(&id).await,
            Commands::Config { init } => self.handle_config(init).await,
        }
    }

    fn client(&self) -> Result<RemoteClient> {
        Ok(RemoteClient::from_config(&self.config)?)
    }

    async fn handle_list(&self, filter: Option<String>) -> Result<()> {
        let client = self.client()?;
        let filter = filter.filter(|f| !f.is_empty());
        let ingredients = client
            .list(filter.as_deref())
            .await
            .map_err(|e| anyhow!("Failed to load ingredients: {}", e))?;

        if ingredients.is_empty() {
            println!("No ingredients.");
            return Ok(());
        }

        for ingredient in &ingredients {
            println!("{}\t{}", ingredient.id, ingredient);
        }
        Ok(())
    }

    async fn handle_add(&self, title: String, amount: String) -> Result<()> {
        let client = self.client()?;
        let ingredient = client
            .create(NewIngredient::new(title, amount))
            .await
            .map_err(|e| anyhow!("Failed to add ingredient: {}", e))?;
        println!("Added {} as {}", ingredient, ingredient.id);
        Ok(())
    }

    async fn handle_remove(&self, id: &str) -> Result<()> {
        let client = self.client()?;
        client
            .remove(id)
            .await
            .map_err(|e| anyhow!("Failed to remove ingredient {}: {}", id, e))?;
        println!("Removed {}", id);
        Ok(())
    }

    async fn handle_config(&self, init: bool) -> Result<()> {
        if init {
            if self.config_path.exists() {
                println!("Config already exists at {}", self.config_path.display());
            } else {
                AppConfig::default().save_to_file(&self.config_path).await?;
                println!("Wrote default config to {}", self.config_path.display());
            }
        }

        println!("# {}", self.config_path.display());
        print!("{}", toml::to_string_pretty(&self.config)?);
        Ok(())
    }
}
