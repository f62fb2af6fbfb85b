//! Client data-access contract and its SQLite implementation.
//!
//! `ClientQueries` is the narrow interface the transport layer is built
//! against; `SqliteClientQueries` is the concrete adapter executing
//! parameterized statements against the `clients` table.

use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;

use crate::model::Client;

const CLIENT_SELECT_SQL: &str = "SELECT id, client_no, name, email FROM clients";

pub type QueryResult<T> = Result<T, QueryError>;

/// Database-level query failure. No domain taxonomy: connectivity and
/// constraint violations alike surface through the same variant.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database connection unavailable")]
    ConnectionUnavailable,
}

/// Abstract interface for client persistence and lookup.
///
/// Injected into the transport layer as `Arc<dyn ClientQueries>` so the
/// HTTP handlers never see the concrete store.
pub trait ClientQueries: Send + Sync {
    fn get_client(&self, id: i64) -> QueryResult<Option<Client>>;
    fn get_client_by_no(&self, client_no: &str) -> QueryResult<Option<Client>>;
    fn list_all(&self) -> QueryResult<Vec<Client>>;
    fn insert_client(&self, client: &Client) -> QueryResult<bool>;
    fn update_client(&self, client: &Client) -> QueryResult<bool>;
    fn delete_client(&self, id: i64) -> QueryResult<bool>;
    fn delete_client_by_no(&self, client_no: &str) -> QueryResult<bool>;
    /// Liveness probe used by the health endpoint.
    fn ping(&self) -> QueryResult<()>;
}

/// SQLite-backed implementation of [`ClientQueries`].
///
/// The connection is checked out by one request at a time through the
/// mutex; no statement holds the guard across an await point.
pub struct SqliteClientQueries {
    conn: Mutex<Connection>,
}

impl SqliteClientQueries {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> QueryResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| QueryError::ConnectionUnavailable)
    }
}

impl ClientQueries for SqliteClientQueries {
    fn get_client(&self, id: i64) -> QueryResult<Option<Client>> {
        let conn = self.conn()?;
        let client = conn
            .query_row(
                &format!("{CLIENT_SELECT_SQL} WHERE id = ?1"),
                params![id],
                parse_client_row,
            )
            .optional()?;
        Ok(client)
    }

    fn get_client_by_no(&self, client_no: &str) -> QueryResult<Option<Client>> {
        let conn = self.conn()?;
        let client = conn
            .query_row(
                &format!("{CLIENT_SELECT_SQL} WHERE client_no = ?1"),
                params![client_no],
                parse_client_row,
            )
            .optional()?;
        Ok(client)
    }

    fn list_all(&self) -> QueryResult<Vec<Client>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{CLIENT_SELECT_SQL} ORDER BY id"))?;
        let mut rows = stmt.query([])?;
        let mut clients = Vec::new();

        while let Some(row) = rows.next()? {
            clients.push(parse_client_row(row)?);
        }

        Ok(clients)
    }

    fn insert_client(&self, client: &Client) -> QueryResult<bool> {
        let changed = self.conn()?.execute(
            "INSERT INTO clients (id, client_no, name, email)
             VALUES (?1, ?2, ?3, ?4)",
            params![client.id, client.client_no, client.name, client.email],
        )?;
        Ok(changed == 1)
    }

    fn update_client(&self, client: &Client) -> QueryResult<bool> {
        // Full-record replace keyed by id.
        let changed = self.conn()?.execute(
            "UPDATE clients
             SET client_no = ?1, name = ?2, email = ?3
             WHERE id = ?4",
            params![client.client_no, client.name, client.email, client.id],
        )?;
        Ok(changed > 0)
    }

    fn delete_client(&self, id: i64) -> QueryResult<bool> {
        let changed = self
            .conn()?
            .execute("DELETE FROM clients WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    fn delete_client_by_no(&self, client_no: &str) -> QueryResult<bool> {
        let changed = self
            .conn()?
            .execute("DELETE FROM clients WHERE client_no = ?1", params![client_no])?;
        Ok(changed > 0)
    }

    fn ping(&self) -> QueryResult<()> {
        self.conn()?
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }
}

fn parse_client_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get("id")?,
        client_no: row.get("client_no")?,
        name: row.get("name")?,
        email: row.get("email")?,
    })
}
