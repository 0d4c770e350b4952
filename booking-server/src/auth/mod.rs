//! Authentication and authorization
//!
//! - [`JwtService`] - token issue / validation
//! - [`CurrentUser`] - request identity
//! - [`require_auth`] / [`require_admin`] - middleware
//! - [`policy`] - access guards
//! - [`TokenRevocations`] - logout registry

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod policy;
pub mod revocation;

pub use extractor::MaybeUser;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
pub use policy::{Access, AdminOnly, Guard, authorize};
pub use revocation::TokenRevocations;
