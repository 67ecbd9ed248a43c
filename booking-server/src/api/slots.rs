//! Slot availability endpoint

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::db;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub available_times: Vec<&'static str>,
}

pub async fn list_slots(
    State(state): State<AppState>,
    Query(query): Query<SlotsQuery>,
) -> ApiResult<SlotsResponse> {
    let date = super::parse_date(query.date.as_deref())?;

    let booked = db::bookings::times_for_date(&state.pool, date).await?;

    Ok(Json(SlotsResponse {
        available_times: catalog::available_times(&booked),
    }))
}
