//! User Model

use super::serde_helpers;
use crate::auth::Role;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// User ID type
pub type UserId = RecordId;

const DEFAULT_PROFILE_PIC: &str = "/assets/default-avatar.png";

/// Buyer account. Admin accounts live in the same table with role `admin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub hash_pass: String,
    pub role: Role,
    #[serde(default = "default_profile_pic")]
    pub profile_pic: Option<String>,
}

fn default_profile_pic() -> Option<String> {
    Some(DEFAULT_PROFILE_PIC.to_string())
}

/// Profile update payload; only these fields may change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

/// User response shape without credentials, id rendered as "user:key"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub profile_pic: Option<String>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_string()),
            name: user.name,
            email: user.email,
            role: user.role,
            profile_pic: user.profile_pic,
        }
    }
}

impl User {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hash = User::hash_password("garden123").expect("hashing should succeed");

        let user = User {
            id: None,
            name: "john".into(),
            email: "john@example.com".into(),
            hash_pass: hash,
            role: Role::User,
            profile_pic: None,
        };

        assert!(user.verify_password("garden123").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }
}
