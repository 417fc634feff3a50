use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::ServerConfig;
use crate::router::create_router;
use crate::state::AppState;

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the Slack interactivity server
    Serve,
    /// Show gantry version
    Version,
}

pub async fn run_cli(cli: Cli) -> Result<(), anyhow::Error> {
    match cli.command {
        Commands::Serve => cmd_serve().await,
        Commands::Version => {
            println!("gantry {CLI_VERSION}");
            Ok(())
        }
    }
}

async fn cmd_serve() -> Result<(), anyhow::Error> {
    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();
    let state = AppState::from_config(&config).await;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "gantry listening");
    axum::serve(listener, app).await?;

    Ok(())
}
