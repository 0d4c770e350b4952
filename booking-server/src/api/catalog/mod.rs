//! Catalog API
//!
//! Hotels, vendors and events are readable by any signed-in user. The
//! catering list is public and tells the caller whether they may manage it.
//! Writes always require an admin.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;
use crate::db::models::{CatalogRecord, Catering, Event, Hotel, Vendor};

pub use handler::check_price;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/hotels", routes::<Hotel>())
        .nest("/api/vendors", routes::<Vendor>())
        .nest("/api/events", routes::<Event>())
        .nest("/api/caterings", catering_routes())
}

fn manage_routes<T: CatalogRecord>() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create::<T>))
        .route("/{id}", put(handler::update::<T>).delete(handler::delete::<T>))
        .layer(middleware::from_fn(require_admin))
}

fn routes<T: CatalogRecord>() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list::<T>))
        .route("/{id}", get(handler::get_by_id::<T>));

    read_routes.merge(manage_routes::<T>())
}

fn catering_routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list_caterings))
        .route("/{id}", get(handler::get_by_id::<Catering>));

    read_routes.merge(manage_routes::<Catering>())
}
