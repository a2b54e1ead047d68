//! Accounts, Roles and Profiles
//!
//! Field rules for sign-up and profile edits, plus the email-change
//! cooldown.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Account classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Seeks services
    #[default]
    Client,
    /// Offers services
    Vendor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Vendor => "vendor",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "vendor" => Ok(Role::Vendor),
            other => Err(DomainError::InvalidInput(format!("Unknown role '{}'", other))),
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn validate_email(email: &str) -> DomainResult<()> {
    if email_regex().is_match(email.trim()) {
        Ok(())
    } else {
        Err(DomainError::InvalidInput("Invalid email address".to_string()))
    }
}

pub fn validate_password(password: &str, min_len: usize) -> DomainResult<()> {
    if password.chars().count() >= min_len {
        Ok(())
    } else {
        Err(DomainError::InvalidInput(format!(
            "Password must be at least {} characters",
            min_len
        )))
    }
}

fn validate_full_name(full_name: &str) -> DomainResult<()> {
    if full_name.trim().chars().count() >= 2 {
        Ok(())
    } else {
        Err(DomainError::InvalidInput(
            "Full name must be at least 2 characters".to_string(),
        ))
    }
}

fn non_blank(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// Business details required from vendor accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BusinessDetails {
    pub business_name: Option<String>,
    pub vat_id: Option<String>,
    pub business_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub business: BusinessDetails,
}

impl SignUpRequest {
    pub fn validate(&self, min_password_len: usize) -> DomainResult<()> {
        validate_email(&self.email)?;
        validate_password(&self.password, min_password_len)?;
        validate_full_name(&self.full_name)?;

        if self.role == Role::Vendor {
            let b = &self.business;
            if !(non_blank(&b.business_name) && non_blank(&b.vat_id) && non_blank(&b.business_address)) {
                return Err(DomainError::InvalidInput(
                    "Business name, VAT ID, and business address are required for vendors".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Personal profile, one per account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: u32,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub role: Role,
    pub email: String,
    pub last_email_change: Option<DateTime<Utc>>,
    pub email_change_count: u32,
}

impl Profile {
    /// Email may change at most once per cooldown window
    pub fn can_change_email(&self, now: DateTime<Utc>, cooldown_days: i64) -> bool {
        match self.last_email_change {
            Some(last) => last < now - Duration::days(cooldown_days),
            None => true,
        }
    }
}

impl Entity for Profile {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.user_id
    }
}

/// Business profile, vendors only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub user_id: u32,
    pub business_name: String,
    pub vat_id: String,
    pub business_address: String,
}

impl Entity for VendorProfile {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.user_id
    }
}

/// Editable personal fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub email: String,
}

impl ProfileUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        validate_full_name(&self.full_name)?;
        validate_email(&self.email)
    }
}

/// Editable business fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProfileUpdate {
    pub business_name: String,
    pub vat_id: String,
    pub business_address: String,
}

impl VendorProfileUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        if self.business_name.trim().chars().count() < 2 {
            return Err(DomainError::InvalidInput("Business name is required".to_string()));
        }
        if self.vat_id.trim().is_empty() {
            return Err(DomainError::InvalidInput("VAT ID is required".to_string()));
        }
        if self.business_address.trim().is_empty() {
            return Err(DomainError::InvalidInput("Business address is required".to_string()));
        }
        Ok(())
    }
}

/// Profile page payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub profile: Profile,
    pub vendor_profile: Option<VendorProfile>,
    pub can_change_email: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_request() -> SignUpRequest {
        SignUpRequest {
            email: "ana@example.com".into(),
            password: "secret1".into(),
            full_name: "Ana".into(),
            role: Role::Client,
            phone_number: None,
            business: BusinessDetails::default(),
        }
    }

    #[test]
    fn test_client_signup_validation() {
        assert!(client_request().validate(6).is_ok());

        let bad_email = SignUpRequest { email: "ana@".into(), ..client_request() };
        assert!(bad_email.validate(6).is_err());

        let short_pw = SignUpRequest { password: "12345".into(), ..client_request() };
        assert!(short_pw.validate(6).is_err());

        let short_name = SignUpRequest { full_name: " A ".into(), ..client_request() };
        assert!(short_name.validate(6).is_err());
    }

    #[test]
    fn test_vendor_requires_business_details() {
        let mut vendor = SignUpRequest { role: Role::Vendor, ..client_request() };
        assert!(matches!(vendor.validate(6), Err(DomainError::InvalidInput(_))));

        vendor.business = BusinessDetails {
            business_name: Some("Acme Build".into()),
            vat_id: Some("DE123".into()),
            business_address: Some("1 Main St".into()),
        };
        assert!(vendor.validate(6).is_ok());
    }

    #[test]
    fn test_email_change_cooldown() {
        let now = Utc::now();
        let mut profile = Profile {
            user_id: 1,
            full_name: "Ana".into(),
            phone_number: None,
            address: None,
            role: Role::Client,
            email: "ana@example.com".into(),
            last_email_change: None,
            email_change_count: 0,
        };
        assert!(profile.can_change_email(now, 30));

        profile.last_email_change = Some(now - Duration::days(3));
        assert!(!profile.can_change_email(now, 30));

        profile.last_email_change = Some(now - Duration::days(31));
        assert!(profile.can_change_email(now, 30));
    }

    #[test]
    fn test_role_strings() {
        assert_eq!("vendor".parse::<Role>().unwrap(), Role::Vendor);
        assert_eq!("client".parse::<Role>().unwrap(), Role::Client);
        assert!(matches!("anything".parse::<Role>(), Err(DomainError::InvalidInput(_))));
        assert_eq!(Role::Vendor.as_str(), "vendor");
    }
}
