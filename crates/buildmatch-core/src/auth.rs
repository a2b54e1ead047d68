//! Identity Provider
//!
//! `AuthProvider` is the seam the backend talks to. `LocalAuthProvider`
//! keeps accounts in SQLite with salted blake3 password hashes and holds
//! at most one signed-in identity.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Profile, Role, SignUpRequest, VendorProfile};
use crate::repository::{Account, AccountRepository, DbState};
use crate::session::Identity;

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Create an account (and its profiles) and sign it in
    async fn sign_up(&self, request: &SignUpRequest) -> DomainResult<Identity>;

    /// Check credentials. With `expected_role` set, an account of the other
    /// role is signed out again and rejected with `RoleMismatch`.
    async fn sign_in(&self, email: &str, password: &str, expected_role: Option<Role>) -> DomainResult<Identity>;

    async fn sign_out(&self);

    async fn current_session(&self) -> Option<Identity>;

    async fn has_session(&self) -> bool {
        self.current_session().await.is_some()
    }

    async fn current_user_role(&self) -> Option<Role> {
        self.current_session().await.map(|identity| identity.role)
    }
}

const INVALID_CREDENTIALS: &str = "Invalid email or password";

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher.finalize().to_hex().to_string()
}

/// Compare through `blake3::Hash` so the check is constant-time
fn verify_password(account: &Account, password: &str) -> bool {
    match blake3::Hash::from_hex(&account.password_hash) {
        Ok(stored) => blake3::hash(format!("{}{}", account.salt, password).as_bytes()) == stored,
        Err(_) => false,
    }
}

pub struct LocalAuthProvider {
    accounts: AccountRepository,
    session: Mutex<Option<Identity>>,
    min_password_len: usize,
    salt_seq: AtomicU64,
}

impl LocalAuthProvider {
    pub fn new(db: &DbState, min_password_len: usize) -> Self {
        Self {
            accounts: AccountRepository::new(db.shared()),
            session: Mutex::new(None),
            min_password_len,
            salt_seq: AtomicU64::new(0),
        }
    }

    fn new_salt(&self, email: &str) -> String {
        let seq = self.salt_seq.fetch_add(1, Ordering::Relaxed);
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let mut hasher = blake3::Hasher::new();
        hasher.update(email.as_bytes());
        hasher.update(&nanos.to_le_bytes());
        hasher.update(&seq.to_le_bytes());
        hasher.finalize().to_hex()[..32].to_string()
    }

    async fn start_session(&self, identity: Identity) -> Identity {
        *self.session.lock().await = Some(identity.clone());
        identity
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn sign_up(&self, request: &SignUpRequest) -> DomainResult<Identity> {
        request.validate(self.min_password_len)?;

        let email = request.email.trim();
        if self.accounts.find_by_email(email).await?.is_some() {
            return Err(DomainError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }

        let salt = self.new_salt(email);
        let business = &request.business;
        let vendor = VendorProfile {
            user_id: 0,
            business_name: business.business_name.clone().unwrap_or_default(),
            vat_id: business.vat_id.clone().unwrap_or_default(),
            business_address: business.business_address.clone().unwrap_or_default(),
        };
        let account = self
            .accounts
            .register(
                &Account {
                    id: 0,
                    email: email.to_string(),
                    password_hash: hash_password(&salt, &request.password),
                    salt,
                    role: request.role,
                    created_at: Utc::now().timestamp_millis(),
                },
                &Profile {
                    user_id: 0,
                    full_name: request.full_name.trim().to_string(),
                    phone_number: request.phone_number.clone(),
                    address: None,
                    role: request.role,
                    email: email.to_string(),
                    last_email_change: None,
                    email_change_count: 0,
                },
                (request.role == Role::Vendor).then_some(&vendor),
            )
            .await?;

        log::info!("signed up user {} as {}", account.id, account.role.as_str());
        Ok(self
            .start_session(Identity {
                user_id: account.id,
                email: account.email,
                role: account.role,
            })
            .await)
    }

    async fn sign_in(&self, email: &str, password: &str, expected_role: Option<Role>) -> DomainResult<Identity> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .filter(|account| verify_password(account, password))
            .ok_or_else(|| DomainError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if let Some(expected) = expected_role {
            if expected != account.role {
                self.sign_out().await;
                log::warn!(
                    "user {} tried to sign in as {} but is a {}",
                    account.id,
                    expected.as_str(),
                    account.role.as_str()
                );
                return Err(DomainError::RoleMismatch { expected, actual: account.role });
            }
        }

        log::info!("user {} signed in", account.id);
        Ok(self
            .start_session(Identity {
                user_id: account.id,
                email: account.email,
                role: account.role,
            })
            .await)
    }

    async fn sign_out(&self) {
        self.session.lock().await.take();
    }

    async fn current_session(&self) -> Option<Identity> {
        self.session.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BusinessDetails;
    use crate::repository::{init_db, ProfileRepository, Repository};
    use std::path::PathBuf;

    async fn setup_with_db() -> (LocalAuthProvider, DbState) {
        let db = init_db(&PathBuf::from(":memory:")).await.expect("Failed to init test DB");
        (LocalAuthProvider::new(&db, 6), db)
    }

    async fn setup() -> LocalAuthProvider {
        setup_with_db().await.0
    }

    async fn exec(db: &DbState, sql: &str) {
        let guard = db.conn.lock().await;
        guard.as_ref().expect("db ready").execute_batch(sql).expect("sql runs");
    }

    fn request(email: &str, role: Role) -> SignUpRequest {
        SignUpRequest {
            email: email.into(),
            password: "hunter22".into(),
            full_name: "Sam Builder".into(),
            role,
            phone_number: Some("555-0100".into()),
            business: match role {
                Role::Vendor => BusinessDetails {
                    business_name: Some("Sam & Co".into()),
                    vat_id: Some("VAT-9".into()),
                    business_address: Some("9 Yard Rd".into()),
                },
                Role::Client => BusinessDetails::default(),
            },
        }
    }

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let auth = setup().await;
        let created = auth.sign_up(&request("sam@example.com", Role::Client)).await.unwrap();
        assert!(auth.has_session().await);

        auth.sign_out().await;
        assert!(!auth.has_session().await);

        let identity = auth
            .sign_in("SAM@example.com", "hunter22", Some(Role::Client))
            .await
            .unwrap();
        assert_eq!(identity, created);
        assert_eq!(auth.current_user_role().await, Some(Role::Client));
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let auth = setup().await;
        auth.sign_up(&request("sam@example.com", Role::Client)).await.unwrap();
        auth.sign_out().await;

        assert!(matches!(
            auth.sign_in("sam@example.com", "hunter23", None).await,
            Err(DomainError::Unauthorized(_))
        ));
        assert!(matches!(
            auth.sign_in("nobody@example.com", "hunter22", None).await,
            Err(DomainError::Unauthorized(_))
        ));
        assert!(!auth.has_session().await);
    }

    #[tokio::test]
    async fn test_role_mismatch_leaves_no_session() {
        let auth = setup().await;
        auth.sign_up(&request("v@example.com", Role::Vendor)).await.unwrap();

        let err = auth
            .sign_in("v@example.com", "hunter22", Some(Role::Client))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::RoleMismatch { expected: Role::Client, actual: Role::Vendor });
        assert!(err.to_string().contains("registered as a vendor"));
        assert!(!auth.has_session().await);
        assert_eq!(auth.current_user_role().await, None);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let auth = setup().await;
        auth.sign_up(&request("sam@example.com", Role::Client)).await.unwrap();
        assert!(matches!(
            auth.sign_up(&request("Sam@Example.com", Role::Vendor)).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_vendor_sign_up_stores_business_profile() {
        let (auth, db) = setup_with_db().await;
        let identity = auth.sign_up(&request("v@example.com", Role::Vendor)).await.unwrap();

        let profile = ProfileRepository::new(db.shared()).find_by_id(identity.user_id).await.unwrap();
        assert_eq!(profile.map(|p| p.full_name), Some("Sam Builder".to_string()));
        let vendor = ProfileRepository::new(db.shared())
            .get_vendor_profile(identity.user_id)
            .await
            .unwrap()
            .expect("vendor profile created");
        assert_eq!(vendor.business_name, "Sam & Co");
    }

    #[tokio::test]
    async fn test_failed_profile_write_rolls_back_account() {
        let (auth, db) = setup_with_db().await;
        exec(
            &db,
            "CREATE TRIGGER block_profiles BEFORE INSERT ON profiles
             BEGIN SELECT RAISE(ABORT, 'profiles unavailable'); END;",
        )
        .await;

        assert!(matches!(
            auth.sign_up(&request("sam@example.com", Role::Client)).await,
            Err(DomainError::Internal(_))
        ));
        assert!(auth.accounts.list().await.unwrap().is_empty());
        assert!(!auth.has_session().await);

        // The email is still free once profiles accept writes again
        exec(&db, "DROP TRIGGER block_profiles;").await;
        assert!(auth.sign_up(&request("sam@example.com", Role::Client)).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_request_creates_nothing() {
        let auth = setup().await;
        let mut bad = request("sam@example.com", Role::Client);
        bad.password = "123".into();
        assert!(matches!(auth.sign_up(&bad).await, Err(DomainError::InvalidInput(_))));
        assert!(auth.accounts.list().await.unwrap().is_empty());
    }

    #[test]
    fn test_password_hash_is_salted() {
        assert_ne!(hash_password("a", "pw"), hash_password("b", "pw"));
        let account = Account {
            id: 1,
            email: "x@y.z".into(),
            password_hash: hash_password("salt", "pw"),
            salt: "salt".into(),
            role: Role::Client,
            created_at: 0,
        };
        assert!(verify_password(&account, "pw"));
        assert!(!verify_password(&account, "pW"));
    }
}
