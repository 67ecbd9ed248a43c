//! API routes for booking-server

pub mod bookings;
pub mod health;
pub mod slots;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/slots", get(slots::list_slots))
        .route("/bookings", post(bookings::create_booking))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
///
/// Absent input is the same validation error as malformed input.
pub(crate) fn parse_date(date: Option<&str>) -> Result<chrono::NaiveDate, ApiError> {
    date.and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .ok_or(ApiError::InvalidDateFormat)
}
