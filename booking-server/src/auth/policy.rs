//! Access guards
//!
//! Each guard is a small predicate over the request identity. Handlers and
//! middleware call [`authorize`] instead of inspecting roles inline, so a
//! denied check is always logged the same way.

use shared::{AppError, AppResult, ErrorCode};

use crate::auth::CurrentUser;
use crate::security_log;

/// Result of evaluating a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied(ErrorCode),
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }

    pub fn into_result(self) -> AppResult<()> {
        match self {
            Access::Granted => Ok(()),
            Access::Denied(code) => Err(AppError::new(code)),
        }
    }
}

/// A named access predicate
pub trait Guard {
    fn name(&self) -> &'static str;
    fn check(&self, user: &CurrentUser) -> Access;
}

/// Admin capability (`Admin` or `SuperAdmin`)
pub struct AdminOnly;

impl Guard for AdminOnly {
    fn name(&self) -> &'static str {
        "admin"
    }

    fn check(&self, user: &CurrentUser) -> Access {
        if user.role.is_admin() {
            Access::Granted
        } else {
            Access::Denied(ErrorCode::AdminRequired)
        }
    }
}

/// Evaluate a guard, logging denials
pub fn authorize(user: &CurrentUser, guard: &impl Guard) -> AppResult<()> {
    let access = guard.check(user);
    if let Access::Denied(code) = access {
        security_log!(
            WARN,
            "access_denied",
            user_id = %user.id,
            role = %user.role,
            guard = guard.name(),
            code = %code
        );
    }
    access.into_result()
}
