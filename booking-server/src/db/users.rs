use sqlx::PgPool;

#[derive(sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT id, name FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a user, returning the generated id.
///
/// Users are only created by seeding; no endpoint exposes this.
pub async fn insert(pool: &PgPool, name: &str) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO users (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
}
