//! Bill Repository

use super::{RepoError, RepoResult};
use shared::models::{Bill, BillAdjustment};
use sqlx::SqlitePool;

const BILL_COLUMNS: &str = "id, bill_number, username, phone, \
    name1, amount1, name2, amount2, name3, amount3, name4, amount4, \
    tax1, tax2, tax3, tax4, taxgo1, taxgo2, taxgo3, taxgo4, \
    check1, check2, check3, check4, \
    extension1, extension2, extension3, extension4, \
    refer1, refer2, refer3, refer4, \
    typerefer1, typerefer2, typerefer3, typerefer4, \
    car_registration1, car_registration2, car_registration3, car_registration4, \
    payment_method, description, total, date, created_by, \
    adjustment_type, adjustment_note, adjustment_amount, \
    created_at, updated_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Bill>> {
    let sql = format!("SELECT {BILL_COLUMNS} FROM bill ORDER BY id DESC");
    let rows = sqlx::query_as::<_, Bill>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Bill>> {
    let sql = format!("SELECT {BILL_COLUMNS} FROM bill WHERE id = ?");
    let row = sqlx::query_as::<_, Bill>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Bills whose appointment date falls in the given month (`YYYY-MM`).
pub async fn find_by_month(pool: &SqlitePool, month: &str) -> RepoResult<Vec<Bill>> {
    let sql = format!(
        "SELECT {BILL_COLUMNS} FROM bill WHERE substr(date, 1, 7) = ? ORDER BY id ASC"
    );
    let rows = sqlx::query_as::<_, Bill>(&sql)
        .bind(month)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Compute the next bill number from the most recently created bill.
///
/// Numbers are `prefix/seq` with a 4-digit sequence; the sequence rolls
/// over to the next prefix after 9999.
pub async fn next_bill_number(pool: &SqlitePool) -> RepoResult<String> {
    let last: Option<String> =
        sqlx::query_scalar("SELECT bill_number FROM bill ORDER BY id DESC LIMIT 1")
            .fetch_optional(pool)
            .await?;
    Ok(next_number(last.as_deref()))
}

fn next_number(last: Option<&str>) -> String {
    let parsed = last.and_then(|s| {
        let (prefix, seq) = s.split_once('/')?;
        Some((prefix.parse::<i64>().ok()?, seq.parse::<i64>().ok()?))
    });
    let (prefix, seq) = match parsed {
        Some((prefix, seq)) if seq < 9999 => (prefix, seq + 1),
        Some((prefix, _)) => (prefix + 1, 1),
        None => (1, 1),
    };
    format!("{}/{:04}", prefix, seq)
}

pub async fn create(pool: &SqlitePool, bill: &Bill) -> RepoResult<Bill> {
    let result = sqlx::query(
        "INSERT INTO bill (bill_number, username, phone, \
         name1, amount1, name2, amount2, name3, amount3, name4, amount4, \
         tax1, tax2, tax3, tax4, taxgo1, taxgo2, taxgo3, taxgo4, \
         check1, check2, check3, check4, \
         extension1, extension2, extension3, extension4, \
         refer1, refer2, refer3, refer4, \
         typerefer1, typerefer2, typerefer3, typerefer4, \
         car_registration1, car_registration2, car_registration3, car_registration4, \
         payment_method, description, total, date, created_by, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, \
         ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&bill.bill_number)
    .bind(&bill.username)
    .bind(&bill.phone)
    .bind(&bill.name1)
    .bind(bill.amount1)
    .bind(&bill.name2)
    .bind(bill.amount2)
    .bind(&bill.name3)
    .bind(bill.amount3)
    .bind(&bill.name4)
    .bind(bill.amount4)
    .bind(bill.tax1)
    .bind(bill.tax2)
    .bind(bill.tax3)
    .bind(bill.tax4)
    .bind(bill.taxgo1)
    .bind(bill.taxgo2)
    .bind(bill.taxgo3)
    .bind(bill.taxgo4)
    .bind(bill.check1)
    .bind(bill.check2)
    .bind(bill.check3)
    .bind(bill.check4)
    .bind(&bill.extension1)
    .bind(bill.extension2)
    .bind(&bill.extension3)
    .bind(bill.extension4)
    .bind(&bill.refer1)
    .bind(&bill.refer2)
    .bind(&bill.refer3)
    .bind(&bill.refer4)
    .bind(&bill.typerefer1)
    .bind(&bill.typerefer2)
    .bind(&bill.typerefer3)
    .bind(&bill.typerefer4)
    .bind(&bill.car_registration1)
    .bind(&bill.car_registration2)
    .bind(&bill.car_registration3)
    .bind(&bill.car_registration4)
    .bind(bill.payment_method)
    .bind(&bill.description)
    .bind(bill.total)
    .bind(&bill.date)
    .bind(&bill.created_by)
    .bind(&bill.created_at)
    .bind(&bill.updated_at)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create bill".into()))
}

/// Record a post-creation correction on a bill. The stored total stays
/// untouched; the adjustment is shown alongside it.
pub async fn apply_adjustment(
    pool: &SqlitePool,
    id: i64,
    data: BillAdjustment,
    now: &str,
) -> RepoResult<Bill> {
    let rows = sqlx::query(
        "UPDATE bill SET adjustment_type = ?, adjustment_note = ?, \
         adjustment_amount = ?, updated_at = ? WHERE id = ?",
    )
    .bind(data.adjustment_type)
    .bind(&data.adjustment_note)
    .bind(data.adjustment_amount)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Bill {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Bill {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM bill WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::next_number;

    #[test]
    fn first_bill_starts_the_sequence() {
        assert_eq!(next_number(None), "1/0001");
    }

    #[test]
    fn sequence_increments_within_prefix() {
        assert_eq!(next_number(Some("1/0001")), "1/0002");
        assert_eq!(next_number(Some("3/0042")), "3/0043");
    }

    #[test]
    fn sequence_rolls_over_after_9999() {
        assert_eq!(next_number(Some("1/9999")), "2/0001");
    }

    #[test]
    fn garbage_restarts_the_sequence() {
        assert_eq!(next_number(Some("not-a-number")), "1/0001");
        assert_eq!(next_number(Some("5-0001")), "1/0001");
    }
}
