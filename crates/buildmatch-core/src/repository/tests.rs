//! Repository Integration Tests
//!
//! Account and profile repositories against in-memory SQLite.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Profile, ProfileUpdate, Role, VendorProfileUpdate};
    use crate::repository::{init_db, Account, AccountRepository, ProfileRepository, Repository};
    use chrono::{Duration, Utc};
    use std::path::PathBuf;

    async fn setup_test_db() -> (AccountRepository, ProfileRepository) {
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        (
            AccountRepository::new(db_state.shared()),
            ProfileRepository::new(db_state.shared()),
        )
    }

    async fn seed(accounts: &AccountRepository, profiles: &ProfileRepository, email: &str, role: Role) -> u32 {
        let account = accounts
            .create(&Account {
                id: 0,
                email: email.to_string(),
                password_hash: "00".repeat(32),
                salt: "salt".to_string(),
                role,
                created_at: 0,
            })
            .await
            .expect("Failed to create account");
        profiles
            .create(&Profile {
                user_id: account.id,
                full_name: "Test User".to_string(),
                phone_number: None,
                address: None,
                role,
                email: email.to_string(),
                last_email_change: None,
                email_change_count: 0,
            })
            .await
            .expect("Failed to create profile");
        account.id
    }

    fn edit(email: &str) -> ProfileUpdate {
        ProfileUpdate {
            full_name: "Renamed User".to_string(),
            phone_number: Some("  ".to_string()),
            address: Some("12 Elm St".to_string()),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_account() {
        let (accounts, _) = setup_test_db().await;
        let created = accounts
            .create(&Account {
                id: 0,
                email: " ana@example.com ".to_string(),
                password_hash: "ab".to_string(),
                salt: "s".to_string(),
                role: Role::Vendor,
                created_at: 42,
            })
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.email, "ana@example.com");

        let found = accounts.find_by_email("ANA@example.com").await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(accounts.find_by_id(created.id).await.unwrap(), Some(created));
        assert!(accounts.find_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_profile_update_and_email_cooldown() {
        let (accounts, profiles) = setup_test_db().await;
        let id = seed(&accounts, &profiles, "ana@example.com", Role::Client).await;
        let now = Utc::now();

        let updated = profiles.apply_update(id, &edit("ana.new@example.com"), now, 30).await.unwrap();
        assert_eq!(updated.full_name, "Renamed User");
        assert_eq!(updated.phone_number, None);
        assert_eq!(updated.address.as_deref(), Some("12 Elm St"));
        assert_eq!(updated.email_change_count, 1);
        assert!(updated.last_email_change.is_some());

        // sign-in follows the new address
        assert!(accounts.find_by_email("ana.new@example.com").await.unwrap().is_some());
        assert!(accounts.find_by_email("ana@example.com").await.unwrap().is_none());

        // second change inside the window is refused
        let later = now + Duration::days(5);
        assert!(matches!(
            profiles.apply_update(id, &edit("ana3@example.com"), later, 30).await,
            Err(DomainError::Conflict(_))
        ));
        // keeping the same email is always fine
        assert!(profiles.apply_update(id, &edit("ana.new@example.com"), later, 30).await.is_ok());

        let view = profiles.view(id, later, 30).await.unwrap();
        assert!(!view.can_change_email);
        assert!(view.vendor_profile.is_none());

        let after_window = now + Duration::days(31);
        let again = profiles.apply_update(id, &edit("ana3@example.com"), after_window, 30).await.unwrap();
        assert_eq!(again.email_change_count, 2);
    }

    #[tokio::test]
    async fn test_email_change_to_taken_address_conflicts() {
        let (accounts, profiles) = setup_test_db().await;
        let ana = seed(&accounts, &profiles, "ana@example.com", Role::Client).await;
        seed(&accounts, &profiles, "bob@example.com", Role::Client).await;

        assert!(matches!(
            profiles.apply_update(ana, &edit("bob@example.com"), Utc::now(), 30).await,
            Err(DomainError::Conflict(_))
        ));
        let profile = profiles.find_by_id(ana).await.unwrap().unwrap();
        assert_eq!(profile.email, "ana@example.com");
        assert_eq!(profile.email_change_count, 0);
    }

    #[tokio::test]
    async fn test_failed_profile_write_keeps_account_email() {
        let db = init_db(&PathBuf::from(":memory:")).await.unwrap();
        let accounts = AccountRepository::new(db.shared());
        let profiles = ProfileRepository::new(db.shared());
        let id = seed(&accounts, &profiles, "ana@example.com", Role::Client).await;

        db.conn
            .lock()
            .await
            .as_ref()
            .unwrap()
            .execute_batch(
                "CREATE TRIGGER block_profile_updates BEFORE UPDATE ON profiles
                 BEGIN SELECT RAISE(ABORT, 'profiles unavailable'); END;",
            )
            .unwrap();

        assert!(matches!(
            profiles.apply_update(id, &edit("ana.new@example.com"), Utc::now(), 30).await,
            Err(DomainError::Internal(_))
        ));
        // the accounts row was rolled back with the failed profile write
        assert!(accounts.find_by_email("ana@example.com").await.unwrap().is_some());
        assert!(accounts.find_by_email("ana.new@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_stored_role_is_an_error() {
        let db = init_db(&PathBuf::from(":memory:")).await.unwrap();
        db.conn
            .lock()
            .await
            .as_ref()
            .unwrap()
            .execute(
                "INSERT INTO accounts (email, password_hash, salt, role, created_at)
                 VALUES ('x@example.com', 'h', 's', 'admin', 0)",
                [],
            )
            .unwrap();

        let accounts = AccountRepository::new(db.shared());
        assert!(matches!(
            accounts.find_by_email("x@example.com").await,
            Err(DomainError::Internal(_))
        ));
    }

    #[tokio::test]
    async fn test_vendor_profile_updates() {
        let (accounts, profiles) = setup_test_db().await;
        let vendor = seed(&accounts, &profiles, "v@example.com", Role::Vendor).await;
        let client = seed(&accounts, &profiles, "c@example.com", Role::Client).await;

        let update = VendorProfileUpdate {
            business_name: "Stone & Beam".to_string(),
            vat_id: "VAT-1".to_string(),
            business_address: "1 Quarry Ln".to_string(),
        };
        let saved = profiles.apply_vendor_update(vendor, &update).await.unwrap();
        assert_eq!(saved.business_name, "Stone & Beam");

        let view = profiles.view(vendor, Utc::now(), 30).await.unwrap();
        assert_eq!(view.vendor_profile, Some(saved));

        assert!(matches!(
            profiles.apply_vendor_update(client, &update).await,
            Err(DomainError::RoleMismatch { expected: Role::Vendor, actual: Role::Client })
        ));
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let (accounts, profiles) = setup_test_db().await;
        let id = seed(&accounts, &profiles, "ana@example.com", Role::Client).await;
        assert_eq!(profiles.list().await.unwrap().len(), 1);

        profiles.delete(id).await.unwrap();
        assert!(profiles.find_by_id(id).await.unwrap().is_none());
        assert!(matches!(profiles.view(id, Utc::now(), 30).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buildmatch.db");
        {
            let db = init_db(&path).await.unwrap();
            let accounts = AccountRepository::new(db.shared());
            let profiles = ProfileRepository::new(db.shared());
            seed(&accounts, &profiles, "ana@example.com", Role::Client).await;
        }
        let db = init_db(&path).await.expect("second init succeeds");
        assert!(db.is_ready().await);
        let profiles = ProfileRepository::new(db.shared());
        assert_eq!(profiles.list().await.unwrap().len(), 1);
    }
}
