//! User Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::client::UserInfo;
use shared::models::Role;
use surrealdb::RecordId;

pub const TABLE: &str = "user";

/// Stored user account
///
/// The password hash is part of the stored document (and of exports) but
/// never of an API response; handlers convert to [`UserInfo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Lowercased, unique
    pub email: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub password_hash: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub contactno: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub gender: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub address: String,
}

/// Profile fields a user may change on their own account
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contactno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.contactno.is_none()
            && self.gender.is_none()
            && self.address.is_none()
    }
}

impl User {
    /// Verify password using argon2
    ///
    /// Documents carrying anything other than an argon2 PHC string never
    /// verify.
    pub fn verify_password(&self, password: &str) -> bool {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }

    /// Public view (no password hash)
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id_string(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role,
            contactno: self.contactno.clone(),
            address: self.address.clone(),
            gender: self.gender.clone(),
        }
    }
}
