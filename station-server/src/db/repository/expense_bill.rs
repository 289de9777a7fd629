//! Expense Bill Repository

use super::{RepoError, RepoResult};
use shared::models::{ExpenseBill, ExpenseBillCreate};
use sqlx::SqlitePool;

const EXPENSE_COLUMNS: &str =
    "id, item_name, amount, note, date, created_by, created_at, updated_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ExpenseBill>> {
    let sql = format!("SELECT {EXPENSE_COLUMNS} FROM expense_bill ORDER BY id DESC");
    let rows = sqlx::query_as::<_, ExpenseBill>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ExpenseBill>> {
    let sql = format!("SELECT {EXPENSE_COLUMNS} FROM expense_bill WHERE id = ?");
    let row = sqlx::query_as::<_, ExpenseBill>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(
    pool: &SqlitePool,
    data: ExpenseBillCreate,
    created_by: &str,
    now: &str,
) -> RepoResult<ExpenseBill> {
    let result = sqlx::query(
        "INSERT INTO expense_bill (item_name, amount, note, date, created_by, \
         created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.item_name)
    .bind(data.amount.unwrap_or(0.0))
    .bind(&data.note)
    .bind(&data.date)
    .bind(created_by)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create expense bill".into()))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM expense_bill WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
