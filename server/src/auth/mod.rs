//! Authentication and authorization
//!
//! - [`JwtService`] - JWT token service
//! - [`CurrentUser`] - authenticated caller context
//! - [`require_auth`] - authentication middleware
//! - [`require_admin`] - admin role middleware

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, Role};
pub use middleware::{CurrentUserExt, require_admin, require_auth};
