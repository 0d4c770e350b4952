//! Booking Repository
//!
//! Every single-booking query is scoped to its owner: a booking that exists
//! but belongs to someone else is indistinguishable from a missing one.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::booking::TABLE;
use crate::db::models::{Booking, BookingChanges};
use shared::models::PaymentStatus;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// A user's bookings, newest event date first
    pub async fn find_for_user(&self, user_id: &str) -> RepoResult<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query("SELECT * FROM booking WHERE user_id = $user_id ORDER BY event_date DESC")
            .bind(("user_id", user_id.to_string()))
            .await?
            .take(0)?;
        Ok(bookings)
    }

    pub async fn find_owned(&self, id: &RecordId, user_id: &str) -> RepoResult<Option<Booking>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing WHERE user_id = $user_id")
            .bind(("thing", id.clone()))
            .bind(("user_id", user_id.to_string()))
            .await?;
        let bookings: Vec<Booking> = result.take(0)?;
        Ok(bookings.into_iter().next())
    }

    pub async fn create(&self, mut booking: Booking) -> RepoResult<Booking> {
        booking.id = None;
        let created: Option<Booking> = self.base.db().create(TABLE).content(booking).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    pub async fn update_owned(
        &self,
        id: &RecordId,
        user_id: &str,
        changes: BookingChanges,
    ) -> RepoResult<Option<Booking>> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data WHERE user_id = $user_id RETURN AFTER")
            .bind(("thing", id.clone()))
            .bind(("data", changes))
            .bind(("user_id", user_id.to_string()))
            .await?;
        let bookings: Vec<Booking> = result.take(0)?;
        Ok(bookings.into_iter().next())
    }

    pub async fn set_payment_status(
        &self,
        id: &RecordId,
        user_id: &str,
        status: PaymentStatus,
    ) -> RepoResult<Option<Booking>> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET payment_status = $status WHERE user_id = $user_id RETURN AFTER")
            .bind(("thing", id.clone()))
            .bind(("status", u8::from(status)))
            .bind(("user_id", user_id.to_string()))
            .await?;
        let bookings: Vec<Booking> = result.take(0)?;
        Ok(bookings.into_iter().next())
    }

    /// Delete an owned booking; `false` when nothing matched
    pub async fn delete_owned(&self, id: &RecordId, user_id: &str) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("DELETE $thing WHERE user_id = $user_id RETURN BEFORE")
            .bind(("thing", id.clone()))
            .bind(("user_id", user_id.to_string()))
            .await?;
        let removed: Vec<Booking> = result.take(0)?;
        Ok(!removed.is_empty())
    }
}
