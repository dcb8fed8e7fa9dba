use anyhow::Result;
use clap::Parser;
use larder::app::App;
use larder::cli::{Cli, CliHandler};
use larder::config::AppConfig;
use std::sync::Mutex;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal UI owns stdout, so interactive runs log to a file
    init_tracing(&cli)?;

    let config_path = cli.config_path();
    let mut config = AppConfig::load_from_file(&config_path).await?;
    cli.apply_overrides(&mut config)?;
    tracing::debug!("Loaded config from {}: {:?}", config_path.display(), config);

    match cli.command.clone() {
        Some(command) => {
            let handler = CliHandler::new(config, config_path);
            handler.handle_command(command).await
        }
        None => {
            let mut app = App::new(&config)?;
            app.run().await
        }
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let level = cli.log_level();

    if cli.is_interactive() {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("larder");
        std::fs::create_dir_all(&dir)?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("larder.log"))?;

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
