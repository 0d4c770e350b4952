//! Booking service
//!
//! Every operation receives the caller's [`CurrentUser`] and scopes its
//! store access to that user. A booking owned by someone else reads as
//! not found.

use std::collections::HashMap;

use chrono::Utc;
use serde::Serialize;
use shared::models::BookingRequest;
use shared::{AppError, AppResult, ErrorCode};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::pricing;
use crate::auth::CurrentUser;
use crate::db::models::{Booking, BookingChanges, CatalogRecord, Catering, Event, Hotel};
use crate::db::repository::{BookingRepository, CatalogRepository, parse_record_id};
use crate::utils::time::parse_event_date;

/// Booking plus the display names of its references
#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catername: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventname: Option<String>,
}

/// Catalog entries selectable in a booking form
#[derive(Debug, Clone, Serialize)]
pub struct BookingOptions {
    pub hotels: Vec<Hotel>,
    pub caterings: Vec<Catering>,
    pub events: Vec<Event>,
}

/// Parse a booking id from a path; anything unusable reads as not found
pub fn booking_id(raw: &str) -> AppResult<RecordId> {
    parse_record_id(crate::db::models::booking::TABLE, raw).map_err(|_| AppError::booking_not_found())
}

/// Canonical `table:key` form of a reference, or the trimmed raw text when
/// it cannot be parsed
fn normalize_ref(table: &str, raw: Option<&str>) -> Option<String> {
    let raw = raw.map(str::trim).filter(|r| !r.is_empty())?;
    Some(
        parse_record_id(table, raw)
            .map(|id| id.to_string())
            .unwrap_or_else(|_| raw.to_string()),
    )
}

fn names_by_id<T: CatalogRecord>(records: &[T]) -> HashMap<String, String> {
    records
        .iter()
        .filter_map(|r| Some((r.id()?.to_string(), r.name().to_string())))
        .collect()
}

#[derive(Clone)]
pub struct BookingService {
    bookings: BookingRepository,
    hotels: CatalogRepository<Hotel>,
    caterings: CatalogRepository<Catering>,
    events: CatalogRepository<Event>,
}

impl BookingService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            bookings: BookingRepository::new(db.clone()),
            hotels: CatalogRepository::new(db.clone()),
            caterings: CatalogRepository::new(db.clone()),
            events: CatalogRepository::new(db),
        }
    }

    /// The caller's bookings, newest event date first, with names attached
    pub async fn list(&self, user: &CurrentUser) -> AppResult<Vec<BookingView>> {
        let bookings = self.bookings.find_for_user(&user.id).await?;
        if bookings.is_empty() {
            return Ok(Vec::new());
        }

        let hotels = names_by_id(&self.hotels.find_all().await?);
        let caterings = names_by_id(&self.caterings.find_all().await?);
        let events = names_by_id(&self.events.find_all().await?);

        let lookup = |names: &HashMap<String, String>, table: &str, reference: Option<&str>| {
            normalize_ref(table, reference).and_then(|key| names.get(&key).cloned())
        };

        Ok(bookings
            .into_iter()
            .map(|booking| BookingView {
                hotel_name: lookup(&hotels, Hotel::TABLE, booking.hotel_id.as_deref()),
                catername: lookup(&caterings, Catering::TABLE, booking.catering_id.as_deref()),
                eventname: lookup(&events, Event::TABLE, booking.event_id.as_deref()),
                booking,
            })
            .collect())
    }

    pub async fn options(&self) -> AppResult<BookingOptions> {
        Ok(BookingOptions {
            hotels: self.hotels.find_all().await?,
            caterings: self.caterings.find_all().await?,
            events: self.events.find_all().await?,
        })
    }

    pub async fn create(&self, user: &CurrentUser, request: BookingRequest) -> AppResult<Booking> {
        let event_date = parse_event_date(&request.event_date)?;
        let hotel_id = normalize_ref(Hotel::TABLE, request.hotel_id.as_deref());
        let catering_id = normalize_ref(Catering::TABLE, request.catering_id.as_deref());
        let event_id = normalize_ref(Event::TABLE, request.event_id.as_deref());
        let amount = self.price(hotel_id.as_deref(), catering_id.as_deref()).await?;

        let booking = Booking {
            id: None,
            user_id: user.id.clone(),
            event_date,
            start_at: request.start_at,
            max_total_hour: request.max_total_hour,
            no_of_guest: request.no_of_guest,
            amount,
            photographer_name_desc: request.photographer_name_desc,
            dj_name_desc: request.dj_name_desc,
            makeupartist_name_desc: request.makeupartist_name_desc,
            decorator_name_desc: request.decorator_name_desc,
            current_date: shared::util::today_ymd(),
            accept_status: Default::default(),
            payment_status: Default::default(),
            hotel_id,
            catering_id,
            event_id,
            created_at: Utc::now().to_rfc3339(),
        };

        let created = self.bookings.create(booking).await?;
        tracing::info!(
            booking_id = %created.id_string(),
            user_id = %user.id,
            amount = created.amount,
            "Booking created"
        );
        Ok(created)
    }

    pub async fn get(&self, user: &CurrentUser, id: &str) -> AppResult<Booking> {
        let thing = booking_id(id)?;
        self.bookings
            .find_owned(&thing, &user.id)
            .await?
            .ok_or_else(AppError::booking_not_found)
    }

    /// One booking with reference names (status view)
    pub async fn view(&self, user: &CurrentUser, id: &str) -> AppResult<BookingView> {
        let booking = self.get(user, id).await?;
        self.describe(booking).await
    }

    /// Attach reference names to a booking
    pub async fn describe(&self, booking: Booking) -> AppResult<BookingView> {
        let hotel = self.hotels.resolve(booking.hotel_id.as_deref()).await?;
        let catering = self.caterings.resolve(booking.catering_id.as_deref()).await?;
        let event = self.events.resolve(booking.event_id.as_deref()).await?;

        Ok(BookingView {
            hotel_name: hotel.map(|h| h.hotel_name),
            catername: catering.map(|c| c.catername),
            eventname: event.map(|e| e.eventname),
            booking,
        })
    }

    /// Replace the mutable fields and re-derive the amount
    pub async fn update(
        &self,
        user: &CurrentUser,
        id: &str,
        request: BookingRequest,
    ) -> AppResult<Booking> {
        let thing = booking_id(id)?;
        let existing = self
            .bookings
            .find_owned(&thing, &user.id)
            .await?
            .ok_or_else(AppError::booking_not_found)?;
        if existing.payment_status.is_paid() {
            return Err(AppError::new(ErrorCode::BookingAlreadyPaid));
        }

        let event_date = parse_event_date(&request.event_date)?;
        let hotel_id = normalize_ref(Hotel::TABLE, request.hotel_id.as_deref());
        let catering_id = normalize_ref(Catering::TABLE, request.catering_id.as_deref());
        let event_id = normalize_ref(Event::TABLE, request.event_id.as_deref());
        let amount = self.price(hotel_id.as_deref(), catering_id.as_deref()).await?;

        let changes = BookingChanges {
            event_date,
            start_at: request.start_at,
            max_total_hour: request.max_total_hour,
            no_of_guest: request.no_of_guest,
            amount,
            photographer_name_desc: request.photographer_name_desc,
            dj_name_desc: request.dj_name_desc,
            makeupartist_name_desc: request.makeupartist_name_desc,
            decorator_name_desc: request.decorator_name_desc,
            hotel_id,
            catering_id,
            event_id,
        };

        let updated = self
            .bookings
            .update_owned(&thing, &user.id, changes)
            .await?
            .ok_or_else(AppError::booking_not_found)?;
        tracing::info!(booking_id = %thing, amount = updated.amount, "Booking updated");
        Ok(updated)
    }

    pub async fn delete(&self, user: &CurrentUser, id: &str) -> AppResult<()> {
        let thing = booking_id(id)?;
        if !self.bookings.delete_owned(&thing, &user.id).await? {
            return Err(AppError::booking_not_found());
        }
        tracing::info!(booking_id = %thing, user_id = %user.id, "Booking deleted");
        Ok(())
    }

    /// Amount for the referenced hotel and catering
    async fn price(&self, hotel_id: Option<&str>, catering_id: Option<&str>) -> AppResult<i64> {
        let hotel = self.hotels.resolve(hotel_id).await?;
        let catering = self.caterings.resolve(catering_id).await?;
        Ok(pricing::booking_amount(
            hotel.as_ref().map(|h| h.price.as_str()),
            catering.as_ref().map(|c| c.cater_price.as_str()),
        ))
    }
}
