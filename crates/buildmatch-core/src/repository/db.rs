//! Database Connection and Setup
//!
//! One shared SQLite connection behind a tokio mutex, plus idempotent
//! migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, Role};

pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper. Starts empty until `init_db` fills it.
#[derive(Clone, Default)]
pub struct DbState {
    pub conn: SharedConnection,
}

impl DbState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle repositories hold on to
    pub fn shared(&self) -> SharedConnection {
        self.conn.clone()
    }

    pub async fn is_ready(&self) -> bool {
        self.conn.lock().await.is_some()
    }
}

/// Open (or create) the database at `db_path` and run migrations.
/// `:memory:` gives a throwaway database.
pub async fn init_db(db_path: &Path) -> Result<DbState, String> {
    let conn = if db_path.as_os_str() == ":memory:" {
        Connection::open_in_memory()
    } else {
        Connection::open(db_path)
    }
    .map_err(|e| format!("Failed to open db: {}", e))?;

    run_migrations(&conn)?;

    let state = DbState::new();
    *state.conn.lock().await = Some(conn);
    Ok(state)
}

pub(crate) fn internal(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

/// Parse a stored role column; unknown values surface as a conversion error
pub(crate) fn role_column(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Role> {
    let raw: String = row.get(index)?;
    raw.parse().map_err(|e: DomainError| {
        rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
    })
}

pub(crate) fn not_ready() -> DomainError {
    DomainError::Internal("Database not initialized".to_string())
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(mut rows) = stmt.query([]) else {
        return false;
    };
    while let Ok(Some(row)) = rows.next() {
        if let Ok(name) = row.get::<_, String>(1) {
            if name == column {
                return true;
            }
        }
    }
    false
}

fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS accounts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE COLLATE NOCASE,
            password_hash TEXT NOT NULL,
            salt TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'client',
            created_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS profiles (
            user_id INTEGER PRIMARY KEY REFERENCES accounts(id) ON DELETE CASCADE,
            full_name TEXT NOT NULL,
            phone_number TEXT,
            address TEXT,
            role TEXT NOT NULL DEFAULT 'client',
            email TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS vendor_profiles (
            user_id INTEGER PRIMARY KEY REFERENCES accounts(id) ON DELETE CASCADE,
            business_name TEXT NOT NULL,
            vat_id TEXT NOT NULL,
            business_address TEXT NOT NULL
        );",
    )
    .map_err(|e| e.to_string())?;

    // Email-change tracking arrived after the first profiles schema
    if !column_exists(conn, "profiles", "last_email_change") {
        conn.execute("ALTER TABLE profiles ADD COLUMN last_email_change INTEGER", [])
            .map_err(|e| format!("Failed to add last_email_change: {}", e))?;
    }
    if !column_exists(conn, "profiles", "email_change_count") {
        conn.execute(
            "ALTER TABLE profiles ADD COLUMN email_change_count INTEGER NOT NULL DEFAULT 0",
            [],
        )
        .map_err(|e| format!("Failed to add email_change_count: {}", e))?;
    }

    Ok(())
}
