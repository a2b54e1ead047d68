//! Profile Repository
//!
//! Personal profiles (every account) and business profiles (vendors),
//! keyed by user id. Email edits go through the cooldown check and are
//! mirrored into `accounts` so sign-in follows the new address.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::account_repo::email_conflict;
use super::db::{internal, not_ready, role_column, SharedConnection};
use super::traits::Repository;
use crate::domain::{
    DomainError, DomainResult, Profile, ProfileUpdate, ProfileView, Role, VendorProfile,
    VendorProfileUpdate,
};

const PROFILE_COLUMNS: &str =
    "user_id, full_name, phone_number, address, role, email, last_email_change, email_change_count";

fn row_to_profile(row: &rusqlite::Row) -> rusqlite::Result<Profile> {
    let last_email_change: Option<i64> = row.get(6)?;
    Ok(Profile {
        user_id: row.get(0)?,
        full_name: row.get(1)?,
        phone_number: row.get(2)?,
        address: row.get(3)?,
        role: role_column(row, 4)?,
        email: row.get(5)?,
        last_email_change: last_email_change.and_then(DateTime::<Utc>::from_timestamp_millis),
        email_change_count: row.get(7)?,
    })
}

fn row_to_vendor_profile(row: &rusqlite::Row) -> rusqlite::Result<VendorProfile> {
    Ok(VendorProfile {
        user_id: row.get(0)?,
        business_name: row.get(1)?,
        vat_id: row.get(2)?,
        business_address: row.get(3)?,
    })
}

fn load_profile(conn: &Connection, user_id: u32) -> DomainResult<Option<Profile>> {
    conn.query_row(
        &format!("SELECT {} FROM profiles WHERE user_id = ?1", PROFILE_COLUMNS),
        params![user_id],
        row_to_profile,
    )
    .optional()
    .map_err(internal)
}

fn load_vendor_profile(conn: &Connection, user_id: u32) -> DomainResult<Option<VendorProfile>> {
    conn.query_row(
        "SELECT user_id, business_name, vat_id, business_address FROM vendor_profiles WHERE user_id = ?1",
        params![user_id],
        row_to_vendor_profile,
    )
    .optional()
    .map_err(internal)
}

fn write_profile(conn: &Connection, profile: &Profile) -> DomainResult<usize> {
    conn.execute(
        "UPDATE profiles SET full_name = ?1, phone_number = ?2, address = ?3, role = ?4, email = ?5,
            last_email_change = ?6, email_change_count = ?7
         WHERE user_id = ?8",
        params![
            profile.full_name,
            profile.phone_number,
            profile.address,
            profile.role.as_str(),
            profile.email,
            profile.last_email_change.map(|t| t.timestamp_millis()),
            profile.email_change_count,
            profile.user_id
        ],
    )
    .map_err(internal)
}

pub(crate) fn insert_profile(conn: &Connection, profile: &Profile) -> DomainResult<()> {
    conn.execute(
        &format!("INSERT INTO profiles ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)", PROFILE_COLUMNS),
        params![
            profile.user_id,
            profile.full_name.trim(),
            none_if_blank(&profile.phone_number),
            none_if_blank(&profile.address),
            profile.role.as_str(),
            profile.email.trim(),
            profile.last_email_change.map(|t| t.timestamp_millis()),
            profile.email_change_count
        ],
    )
    .map_err(internal)?;
    Ok(())
}

pub(crate) fn upsert_vendor_profile(conn: &Connection, vendor: &VendorProfile) -> DomainResult<()> {
    conn.execute(
        "INSERT INTO vendor_profiles (user_id, business_name, vat_id, business_address)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(user_id) DO UPDATE SET
            business_name = excluded.business_name,
            vat_id = excluded.vat_id,
            business_address = excluded.business_address",
        params![
            vendor.user_id,
            vendor.business_name.trim(),
            vendor.vat_id.trim(),
            vendor.business_address.trim()
        ],
    )
    .map_err(internal)?;
    Ok(())
}

/// Blank optional fields are stored as NULL
fn none_if_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub struct ProfileRepository {
    conn: SharedConnection,
}

impl ProfileRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    pub async fn get_vendor_profile(&self, user_id: u32) -> DomainResult<Option<VendorProfile>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;
        load_vendor_profile(conn, user_id)
    }

    /// Insert or replace the business profile
    pub async fn save_vendor_profile(&self, vendor: &VendorProfile) -> DomainResult<VendorProfile> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        upsert_vendor_profile(conn, vendor)?;
        load_vendor_profile(conn, vendor.user_id)?
            .ok_or_else(|| DomainError::NotFound(format!("Vendor profile {}", vendor.user_id)))
    }

    /// Everything the profile page shows
    pub async fn view(&self, user_id: u32, now: DateTime<Utc>, cooldown_days: i64) -> DomainResult<ProfileView> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        let profile = load_profile(conn, user_id)?
            .ok_or_else(|| DomainError::NotFound(format!("Profile {}", user_id)))?;
        let vendor_profile = match profile.role {
            Role::Vendor => load_vendor_profile(conn, user_id)?,
            Role::Client => None,
        };
        let can_change_email = profile.can_change_email(now, cooldown_days);
        Ok(ProfileView { profile, vendor_profile, can_change_email })
    }

    /// Apply a personal-profile edit. A changed email must respect the
    /// cooldown and stay unique across accounts.
    pub async fn apply_update(
        &self,
        user_id: u32,
        update: &ProfileUpdate,
        now: DateTime<Utc>,
        cooldown_days: i64,
    ) -> DomainResult<Profile> {
        update.validate()?;

        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_ready)?;
        // accounts.email and profiles.email change together or not at all
        let tx = conn.transaction().map_err(internal)?;

        let mut profile = load_profile(&tx, user_id)?
            .ok_or_else(|| DomainError::NotFound(format!("Profile {}", user_id)))?;

        let new_email = update.email.trim();
        if !new_email.eq_ignore_ascii_case(&profile.email) {
            if !profile.can_change_email(now, cooldown_days) {
                return Err(DomainError::Conflict(format!(
                    "Email can only be changed once every {} days",
                    cooldown_days
                )));
            }
            tx.execute(
                "UPDATE accounts SET email = ?1 WHERE id = ?2",
                params![new_email, user_id],
            )
            .map_err(email_conflict)?;

            profile.email = new_email.to_string();
            profile.last_email_change = Some(now);
            profile.email_change_count += 1;
            log::info!("user {} changed email ({} changes)", user_id, profile.email_change_count);
        }

        profile.full_name = update.full_name.trim().to_string();
        profile.phone_number = none_if_blank(&update.phone_number);
        profile.address = none_if_blank(&update.address);
        write_profile(&tx, &profile)?;
        tx.commit().map_err(internal)?;
        Ok(profile)
    }

    /// Business-profile edit, vendors only
    pub async fn apply_vendor_update(&self, user_id: u32, update: &VendorProfileUpdate) -> DomainResult<VendorProfile> {
        update.validate()?;

        let role = {
            let guard = self.conn.lock().await;
            let conn = guard.as_ref().ok_or_else(not_ready)?;
            load_profile(conn, user_id)?
                .ok_or_else(|| DomainError::NotFound(format!("Profile {}", user_id)))?
                .role
        };
        if role != Role::Vendor {
            return Err(DomainError::RoleMismatch { expected: Role::Vendor, actual: role });
        }

        self.save_vendor_profile(&VendorProfile {
            user_id,
            business_name: update.business_name.clone(),
            vat_id: update.vat_id.clone(),
            business_address: update.business_address.clone(),
        })
        .await
    }
}

#[async_trait]
impl Repository<Profile> for ProfileRepository {
    async fn create(&self, profile: &Profile) -> DomainResult<Profile> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        insert_profile(conn, profile)?;
        load_profile(conn, profile.user_id)?
            .ok_or_else(|| DomainError::Internal("Profile vanished after insert".to_string()))
    }

    async fn find_by_id(&self, user_id: u32) -> DomainResult<Option<Profile>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;
        load_profile(conn, user_id)
    }

    async fn list(&self) -> DomainResult<Vec<Profile>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM profiles ORDER BY user_id", PROFILE_COLUMNS))
            .map_err(internal)?;
        let profiles = stmt
            .query_map([], row_to_profile)
            .map_err(internal)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(internal)?;
        Ok(profiles)
    }

    async fn update(&self, profile: &Profile) -> DomainResult<Profile> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        if write_profile(conn, profile)? == 0 {
            return Err(DomainError::NotFound(format!("Profile {}", profile.user_id)));
        }
        Ok(profile.clone())
    }

    async fn delete(&self, user_id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        conn.execute("DELETE FROM vendor_profiles WHERE user_id = ?1", params![user_id])
            .map_err(internal)?;
        conn.execute("DELETE FROM profiles WHERE user_id = ?1", params![user_id])
            .map_err(internal)?;
        Ok(())
    }
}
