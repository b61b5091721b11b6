//! Vendor Model

use super::serde_helpers;
use crate::auth::Role;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Vendor ID type
pub type VendorId = RecordId;

/// Vendor account lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Suspended,
}

/// Seller account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<VendorId>,
    pub company_name: String,
    pub company_address: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub hash_pass: String,
    pub contact: String,
    pub role: Role,
    pub account_status: AccountStatus,
}

/// Profile update payload; only these fields may change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Vendor response shape without credentials, id rendered as "vendor:key"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub company_name: String,
    pub company_address: String,
    pub email: String,
    pub contact: String,
    pub role: Role,
    pub account_status: AccountStatus,
}

impl From<Vendor> for VendorInfo {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id.map(|id| id.to_string()),
            company_name: vendor.company_name,
            company_address: vendor.company_address,
            email: vendor.email,
            contact: vendor.contact,
            role: vendor.role,
            account_status: vendor.account_status,
        }
    }
}

impl Vendor {
    pub fn is_active(&self) -> bool {
        self.account_status == AccountStatus::Active
    }

    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}
