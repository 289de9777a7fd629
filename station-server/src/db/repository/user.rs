//! Staff Repository

use super::{RepoError, RepoResult};
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};
use shared::models::{User, UserCreate, UserUpdate};
use sqlx::SqlitePool;

const USER_COLUMNS: &str =
    "user_id, user_name, email, phone_number, password, role, created_at, updated_at";

/// Hash a password with argon2
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// Verify a password against the stored argon2 hash
pub fn verify_password(user: &User, password: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(&user.password)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM staff ORDER BY created_at ASC");
    let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM staff WHERE user_id = ?");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM staff WHERE email = ?");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    let id = shared::util::snowflake_id().to_string();
    let now = crate::utils::time::now_iso();
    let hash = hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;

    sqlx::query(
        "INSERT INTO staff (user_id, user_name, email, phone_number, password, role, \
         created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&data.user_name)
    .bind(&data.email)
    .bind(&data.phone_number)
    .bind(&hash)
    .bind(&data.role)
    .bind(&now)
    .bind(&now)
    .execute(pool)
    .await?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create staff account".into()))
}

pub async fn update(pool: &SqlitePool, id: &str, data: UserUpdate) -> RepoResult<User> {
    let now = crate::utils::time::now_iso();
    let hash = match &data.password {
        Some(password) => Some(
            hash_password(password)
                .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?,
        ),
        None => None,
    };

    let rows = sqlx::query(
        "UPDATE staff SET \
         user_name = COALESCE(?1, user_name), \
         email = COALESCE(?2, email), \
         phone_number = COALESCE(?3, phone_number), \
         password = COALESCE(?4, password), \
         role = COALESCE(?5, role), \
         updated_at = ?6 WHERE user_id = ?7",
    )
    .bind(&data.user_name)
    .bind(&data.email)
    .bind(&data.phone_number)
    .bind(&hash)
    .bind(&data.role)
    .bind(&now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Staff {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Staff {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM staff WHERE user_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("s3cret").unwrap();
        let user = User {
            user_id: "1".into(),
            user_name: "test".into(),
            email: "test@example.com".into(),
            phone_number: String::new(),
            password: hash,
            role: "user".into(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert!(verify_password(&user, "s3cret").unwrap());
        assert!(!verify_password(&user, "wrong").unwrap());
    }
}
