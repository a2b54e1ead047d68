//! Account Repository
//!
//! Login records: email, salted password hash and role.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use super::db::{internal, not_ready, role_column, SharedConnection};
use super::profile_repo::{insert_profile, upsert_vendor_profile};
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Entity, Profile, Role, VendorProfile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: u32,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    pub role: Role,
    /// Unix millis
    pub created_at: i64,
}

impl Entity for Account {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

const ACCOUNT_COLUMNS: &str = "id, email, password_hash, salt, role, created_at";

fn row_to_account(row: &rusqlite::Row) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
        salt: row.get(3)?,
        role: role_column(row, 4)?,
        created_at: row.get(5)?,
    })
}

/// Map a UNIQUE violation on `email` to `Conflict`
pub(crate) fn email_conflict(e: rusqlite::Error) -> DomainError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _) if err.code == rusqlite::ErrorCode::ConstraintViolation => {
            DomainError::Conflict("An account with this email already exists".to_string())
        }
        _ => internal(e),
    }
}

pub(crate) fn insert_account(conn: &Connection, account: &Account) -> DomainResult<Account> {
    conn.execute(
        "INSERT INTO accounts (email, password_hash, salt, role, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            account.email.trim(),
            account.password_hash,
            account.salt,
            account.role.as_str(),
            account.created_at
        ],
    )
    .map_err(email_conflict)?;

    Ok(Account {
        id: conn.last_insert_rowid() as u32,
        email: account.email.trim().to_string(),
        ..account.clone()
    })
}

pub struct AccountRepository {
    conn: SharedConnection,
}

impl AccountRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Create the account together with its profile (and business profile
    /// for vendors) in one transaction. Either all rows land or none do.
    pub async fn register(
        &self,
        account: &Account,
        profile: &Profile,
        vendor: Option<&VendorProfile>,
    ) -> DomainResult<Account> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_ready)?;
        let tx = conn.transaction().map_err(internal)?;

        let created = insert_account(&tx, account)?;
        insert_profile(&tx, &Profile { user_id: created.id, ..profile.clone() })?;
        if let Some(vendor) = vendor {
            upsert_vendor_profile(&tx, &VendorProfile { user_id: created.id, ..vendor.clone() })?;
        }

        tx.commit().map_err(internal)?;
        Ok(created)
    }

    /// Case-insensitive lookup
    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        conn.query_row(
            &format!("SELECT {} FROM accounts WHERE email = ?1 COLLATE NOCASE", ACCOUNT_COLUMNS),
            params![email.trim()],
            row_to_account,
        )
        .optional()
        .map_err(internal)
    }
}

#[async_trait]
impl Repository<Account> for AccountRepository {
    async fn create(&self, account: &Account) -> DomainResult<Account> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;
        insert_account(conn, account)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Account>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        conn.query_row(
            &format!("SELECT {} FROM accounts WHERE id = ?1", ACCOUNT_COLUMNS),
            params![id],
            row_to_account,
        )
        .optional()
        .map_err(internal)
    }

    async fn list(&self) -> DomainResult<Vec<Account>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM accounts ORDER BY id", ACCOUNT_COLUMNS))
            .map_err(internal)?;
        let accounts = stmt
            .query_map([], row_to_account)
            .map_err(internal)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(internal)?;
        Ok(accounts)
    }

    async fn update(&self, account: &Account) -> DomainResult<Account> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        let changed = conn
            .execute(
                "UPDATE accounts SET email = ?1, password_hash = ?2, salt = ?3, role = ?4 WHERE id = ?5",
                params![
                    account.email.trim(),
                    account.password_hash,
                    account.salt,
                    account.role.as_str(),
                    account.id
                ],
            )
            .map_err(email_conflict)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Account {}", account.id)));
        }
        Ok(account.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        conn.execute("DELETE FROM accounts WHERE id = ?1", params![id])
            .map_err(internal)?;
        Ok(())
    }
}
