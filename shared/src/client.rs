//! Client-facing request and response DTOs
//!
//! Shared between the server and API consumers so both sides agree on the
//! wire format. Request bodies carry `validator` rules and are validated at
//! the boundary before any handler logic runs.

use serde::{Deserialize, Serialize};
use validator::Validate;

// =============================================================================
// Auth Requests
// =============================================================================

/// User signup payload (POST /auth/signup/user)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserSignupRequest {
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    #[validate(email, length(min = 6, max = 100))]
    pub email: String,
    #[validate(length(min = 4, max = 100))]
    pub password: String,
}

/// Login payload, shared by user and vendor login routes
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email, length(min = 6, max = 100))]
    pub email: String,
    #[validate(length(min = 4, max = 100))]
    pub password: String,
}

/// Vendor signup payload (POST /auth/signup/vendor)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VendorSignupRequest {
    #[validate(length(min = 3, max = 100))]
    pub company_name: String,
    #[validate(length(min = 3, max = 200))]
    pub company_address: String,
    #[validate(email, length(min = 6, max = 100))]
    pub email: String,
    #[validate(length(min = 4, max = 100))]
    pub password: String,
    /// Contact number, 11 digits starting with 03
    #[validate(regex(path = *CONTACT_RE))]
    pub contact: String,
}

static CONTACT_RE: std::sync::LazyLock<regex::Regex> =
    std::sync::LazyLock::new(|| regex::Regex::new(r"^03[0-9]{9}$").expect("valid contact regex"));

// =============================================================================
// Auth Responses
// =============================================================================

/// Identity summary returned alongside a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub id: String,
    /// Display name: user name or vendor company name
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Login / signup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: AccountInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_signup_validation() {
        let ok = UserSignupRequest {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password: "secret".into(),
        };
        assert!(ok.validate().is_ok());

        let bad_name = UserSignupRequest {
            name: "Al".into(),
            ..ok.clone()
        };
        assert!(bad_name.validate().is_err());

        let bad_email = UserSignupRequest {
            email: "not-an-email".into(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let bad_password = UserSignupRequest {
            password: "abc".into(),
            ..ok
        };
        assert!(bad_password.validate().is_err());
    }

    #[test]
    fn test_vendor_contact_validation() {
        let base = VendorSignupRequest {
            company_name: "GreenLeaf".into(),
            company_address: "12 Garden Road".into(),
            email: "sales@greenleaf.com".into(),
            password: "secret".into(),
            contact: "03001234567".into(),
        };
        assert!(base.validate().is_ok());

        let bad_contact = VendorSignupRequest {
            contact: "13001234567".into(),
            ..base
        };
        assert!(bad_contact.validate().is_err());
    }
}
