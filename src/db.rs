//! SQLite connection bootstrap.
//!
//! Opens a file or in-memory database, configures connection pragmas, and
//! applies the `clients` schema idempotently. Connection establishment can
//! retry transient failures a fixed number of times with a capped backoff,
//! controlled entirely by configuration.

use std::time::Duration;

use rusqlite::Connection;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS clients (
    id        INTEGER PRIMARY KEY,
    client_no TEXT NOT NULL UNIQUE,
    name      TEXT NOT NULL,
    email     TEXT
)";

/// Open a database and make it ready for queries.
///
/// Accepts a filesystem path, `:memory:`, or a `sqlite://`-prefixed URL.
pub fn open(url: &str) -> DbResult<Connection> {
    let conn = if url == ":memory:" {
        Connection::open_in_memory()?
    } else {
        let path = url.strip_prefix("sqlite://").unwrap_or(url);
        Connection::open(path)?
    };

    bootstrap(&conn)?;
    Ok(conn)
}

fn bootstrap(conn: &Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute(SCHEMA_SQL, [])?;
    Ok(())
}

/// Open the configured database, retrying failed attempts.
///
/// Retries `connect_retries` times, doubling the delay between attempts up
/// to `max_retry_delay_secs`. This is the service's only retry behavior;
/// individual queries never retry.
pub async fn connect_with_retry(config: &DatabaseConfig) -> DbResult<Connection> {
    let mut attempt: u32 = 0;

    loop {
        match open(&config.url) {
            Ok(conn) => {
                info!(url = %config.url, "database connection established");
                return Ok(conn);
            }
            Err(err) if attempt < config.connect_retries => {
                let delay = backoff_delay(attempt, config.max_retry_delay_secs);
                warn!(
                    url = %config.url,
                    attempt = attempt + 1,
                    retries = config.connect_retries,
                    delay_secs = delay.as_secs(),
                    error = %err,
                    "database connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

fn backoff_delay(attempt: u32, ceiling_secs: u64) -> Duration {
    let exp = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
    Duration::from_secs(exp.min(ceiling_secs))
}
