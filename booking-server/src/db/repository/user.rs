//! User Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::user::TABLE;
use crate::db::models::{ProfileChanges, User};
use shared::models::Role;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM user ORDER BY email")
            .await?
            .take(0)?;
        Ok(users)
    }

    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<User>> {
        let user: Option<User> = self.base.db().select(id.clone()).await?;
        Ok(user)
    }

    /// Find by email, case-insensitively
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email = email.trim().to_lowercase();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a user; the email must not be taken
    pub async fn create(&self, mut user: User) -> RepoResult<User> {
        user.email = user.email.trim().to_lowercase();
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' is already registered",
                user.email
            )));
        }

        user.id = None;
        let created: Option<User> = self.base.db().create(TABLE).content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Apply profile changes to a user
    pub async fn update_profile(&self, id: &RecordId, mut changes: ProfileChanges) -> RepoResult<User> {
        if let Some(email) = changes.email.take() {
            let email = email.trim().to_lowercase();
            if let Some(existing) = self.find_by_email(&email).await?
                && existing.id.as_ref() != Some(id)
            {
                return Err(RepoError::Duplicate(format!(
                    "Email '{}' is already registered",
                    email
                )));
            }
            changes.email = Some(email);
        }

        if changes.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)));
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", id.clone()))
            .bind(("data", changes))
            .await?;
        let users: Vec<User> = result.take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }

    /// Set a user's role
    pub async fn set_role(&self, id: &RecordId, role: Role) -> RepoResult<User> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET role = $role RETURN AFTER")
            .bind(("thing", id.clone()))
            .bind(("role", role))
            .await?;
        let users: Vec<User> = result.take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }
}
