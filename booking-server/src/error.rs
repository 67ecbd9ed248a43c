//! Unified API error type
//!
//! Validation and business-rule failures map to 400 with their contract
//! message; store failures map to 500 carrying the underlying message.
//! Every error is logged before the response is written.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// `user_id` does not match `user_<positive integer>`
    #[error("Invalid user id")]
    InvalidUserId,
    /// `date` is absent or not an ISO calendar date
    #[error("Invalid date format")]
    InvalidDateFormat,
    /// `time` is not one of the shop's bookable hours
    #[error("Shop closed")]
    ShopClosed,
    /// The referenced user does not exist
    #[error("User not found")]
    UserNotFound,
    /// The (date, time) slot is already booked
    #[error("Slot full")]
    SlotFull,
    /// Unexpected store failure
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result alias for API handlers
pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        for err in [
            ApiError::InvalidUserId,
            ApiError::InvalidDateFormat,
            ApiError::ShopClosed,
            ApiError::UserNotFound,
            ApiError::SlotFull,
        ] {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn store_errors_map_to_500() {
        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_match_the_contract() {
        assert_eq!(ApiError::InvalidUserId.to_string(), "Invalid user id");
        assert_eq!(ApiError::InvalidDateFormat.to_string(), "Invalid date format");
        assert_eq!(ApiError::ShopClosed.to_string(), "Shop closed");
        assert_eq!(ApiError::UserNotFound.to_string(), "User not found");
        assert_eq!(ApiError::SlotFull.to_string(), "Slot full");
    }
}
