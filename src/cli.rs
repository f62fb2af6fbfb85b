//! CLI argument definitions and command dispatch using clap
//!
//! Commands:
//! - client-api serve --config <path> [--host H] [--port P] [--database URL]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{AppConfig, ConfigError};
use crate::db::{self, DbError};
use crate::http_server::HttpServer;
use crate::queries::SqliteClientQueries;

/// Client API - a minimal client registry CRUD service
#[derive(Parser, Debug)]
#[command(name = "client-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port
        #[arg(long)]
        port: Option<u16>,

        /// Override the database URL
        #[arg(long)]
        database: Option<String>,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Db(#[from] DbError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse arguments and run the selected command.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().init();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            database,
        } => serve(config, host, port, database).await,
    }
}

async fn serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    database: Option<String>,
) -> Result<(), CliError> {
    let mut config = AppConfig::load(config_path.as_deref())?;

    // CLI flags take precedence over file and environment values.
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(url) = database {
        config.database.url = url;
    }

    let conn = db::connect_with_retry(&config.database).await?;
    let queries = Arc::new(SqliteClientQueries::new(conn));

    HttpServer::new(config, queries).start().await?;
    Ok(())
}
