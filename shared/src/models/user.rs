//! Staff accounts.

use serde::{Deserialize, Serialize};

/// Staff account entity. Stored in the `staff` table; the password hash
/// never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing)]
    #[serde(default)]
    pub password: String,
    /// "admin" or "user"
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

/// Partial update - only supplied fields change; `password` is re-hashed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}
