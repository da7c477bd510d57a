pub mod booking;
pub mod calendar;
pub mod health;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(booking::booking_page))
        .route("/api/counselors", get(booking::get_counselors))
        .route("/api/slots", get(booking::get_slots))
        .route(
            "/api/booking/counselor-change",
            post(booking::counselor_change),
        )
        .route("/api/booking/slot-change", post(booking::slot_change))
        .route("/api/booking/age-input", post(booking::age_input))
        .route("/api/booking/submit", post(booking::submit))
        .route("/api/booking/calendar", post(calendar::download_ics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
