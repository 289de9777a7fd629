//! Shop expense records (outgoing money, kept separate from bills).

use serde::{Deserialize, Serialize};

use super::serde_money;

/// Expense entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ExpenseBill {
    pub id: i64,
    pub item_name: String,
    pub amount: f64,
    pub note: String,
    /// Expense date (ISO `YYYY-MM-DD`)
    pub date: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseBillCreate {
    pub item_name: String,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub date: String,
}
