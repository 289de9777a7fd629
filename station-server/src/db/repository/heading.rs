//! Heading Repository

use super::{RepoError, RepoResult};
use shared::models::{Heading, HeadingCreate, HeadingUpdate};
use sqlx::SqlitePool;

const HEADING_COLUMNS: &str = "heading_id, heading_name, heading_details, \
    time_start, time_end, is_hidden, created_at, updated_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Heading>> {
    let sql = format!("SELECT {HEADING_COLUMNS} FROM heading ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, Heading>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Headings eligible for display: not hidden, and today falls inside the
/// display window (blank bounds are open-ended). Dates are ISO strings,
/// so lexicographic comparison is correct.
pub async fn find_visible(pool: &SqlitePool, today: &str) -> RepoResult<Vec<Heading>> {
    let sql = format!(
        "SELECT {HEADING_COLUMNS} FROM heading WHERE is_hidden = 0 \
         AND (time_start = '' OR time_start <= ?1) \
         AND (time_end = '' OR time_end >= ?1) \
         ORDER BY created_at DESC"
    );
    let rows = sqlx::query_as::<_, Heading>(&sql)
        .bind(today)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Heading>> {
    let sql = format!("SELECT {HEADING_COLUMNS} FROM heading WHERE heading_id = ?");
    let row = sqlx::query_as::<_, Heading>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: HeadingCreate, now: &str) -> RepoResult<Heading> {
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO heading (heading_id, heading_name, heading_details, \
         time_start, time_end, is_hidden, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.heading_name)
    .bind(&data.heading_details)
    .bind(&data.time_start)
    .bind(&data.time_end)
    .bind(data.is_hidden)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create heading".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: HeadingUpdate,
    now: &str,
) -> RepoResult<Heading> {
    let rows = sqlx::query(
        "UPDATE heading SET \
         heading_name = COALESCE(?1, heading_name), \
         heading_details = COALESCE(?2, heading_details), \
         time_start = COALESCE(?3, time_start), \
         time_end = COALESCE(?4, time_end), \
         is_hidden = COALESCE(?5, is_hidden), \
         updated_at = ?6 WHERE heading_id = ?7",
    )
    .bind(&data.heading_name)
    .bind(&data.heading_details)
    .bind(&data.time_start)
    .bind(&data.time_end)
    .bind(data.is_hidden)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Heading {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Heading {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM heading WHERE heading_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
