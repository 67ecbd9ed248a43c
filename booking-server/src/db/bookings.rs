use chrono::{NaiveDate, NaiveTime};
use sqlx::{PgPool, Postgres, Transaction};

/// Booked times for a date, ascending
pub async fn times_for_date(
    pool: &PgPool,
    date: NaiveDate,
) -> Result<Vec<NaiveTime>, sqlx::Error> {
    sqlx::query_scalar("SELECT time FROM bookings WHERE date = $1 ORDER BY time")
        .bind(date)
        .fetch_all(pool)
        .await
}

/// Whether the slot is already booked, read inside the caller's transaction
pub async fn exists_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<bool, sqlx::Error> {
    let existing: Option<i32> =
        sqlx::query_scalar("SELECT id FROM bookings WHERE date = $1 AND time = $2")
            .bind(date)
            .bind(time)
            .fetch_optional(&mut **tx)
            .await?;
    Ok(existing.is_some())
}

/// Insert a booking row, returning the generated id
pub async fn insert_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    user_id: i32,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO bookings (user_id, date, time) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(user_id)
    .bind(date)
    .bind(time)
    .fetch_one(&mut **tx)
    .await
}

/// Count bookings recorded for a slot
pub async fn count_for_slot(
    pool: &PgPool,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<i64, sqlx::Error> {
    let row: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE date = $1 AND time = $2")
            .bind(date)
            .bind(time)
            .fetch_one(pool)
            .await?;
    Ok(row.0)
}
