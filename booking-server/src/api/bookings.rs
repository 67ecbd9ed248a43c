//! Booking creation endpoint
//!
//! POST /bookings — reserve one (date, time) slot for an existing user.
//! Validation precedence is part of the contract: request shape first
//! (user id, then date, then time), then user existence, then slot
//! availability.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct BookingRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct BookingResponse {
    pub booking_id: String,
}

/// Parse a `user_<positive integer>` client identifier into the numeric id
fn parse_user_id(user_id: Option<&str>) -> Result<i32, ApiError> {
    user_id
        .and_then(|s| s.strip_prefix("user_"))
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<i32>().ok())
        .filter(|id| *id > 0)
        .ok_or(ApiError::InvalidUserId)
}

pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> ApiResult<BookingResponse> {
    let user_id = parse_user_id(req.user_id.as_deref())?;
    let date = super::parse_date(req.date.as_deref())?;
    let time = req
        .time
        .as_deref()
        .and_then(catalog::parse_slot)
        .ok_or(ApiError::ShopClosed)?;

    let user = db::users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    // Check-then-insert in one transaction; every error path drops the
    // transaction without commit, so no partial insert survives.
    let mut tx = state.pool.begin().await?;

    if db::bookings::exists_in_tx(&mut tx, date, time).await? {
        return Err(ApiError::SlotFull);
    }

    let booking_id = db::bookings::insert_in_tx(&mut tx, user.id, date, time)
        .await
        .map_err(|e| match &e {
            // Two transactions can both pass the check above under
            // read-committed isolation; the unique index decides the winner.
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => ApiError::SlotFull,
            _ => ApiError::from(e),
        })?;

    tx.commit().await?;

    tracing::info!(booking_id, user_id = user.id, %date, %time, "Booking created");

    Ok(Json(BookingResponse {
        booking_id: format!("booking_{booking_id}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_user_id_accepts_the_contract_shape() {
        assert_eq!(parse_user_id(Some("user_7")).unwrap(), 7);
        assert_eq!(parse_user_id(Some("user_123456")).unwrap(), 123456);
    }

    #[test]
    fn parse_user_id_rejects_everything_else() {
        for bad in [
            None,
            Some(""),
            Some("user_"),
            Some("user_abc"),
            Some("usr_7"),
            Some("7"),
            Some("user_0"),
            Some("user_-1"),
            Some("user_+1"),
            Some("user_7x"),
            Some("user_99999999999999999999"),
        ] {
            assert!(
                matches!(parse_user_id(bad), Err(ApiError::InvalidUserId)),
                "expected rejection for {bad:?}"
            );
        }
    }
}
