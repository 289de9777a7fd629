//! Announcement headings shown on the shop's front page.

use serde::{Deserialize, Serialize};

/// Heading entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Heading {
    pub heading_id: i64,
    pub heading_name: String,
    pub heading_details: String,
    /// Display window start (ISO `YYYY-MM-DD`, empty = always)
    pub time_start: String,
    /// Display window end (ISO `YYYY-MM-DD`, empty = always)
    pub time_end: String,
    pub is_hidden: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadingCreate {
    pub heading_name: String,
    #[serde(default)]
    pub heading_details: String,
    #[serde(default)]
    pub time_start: String,
    #[serde(default)]
    pub time_end: String,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Partial update - only supplied fields change
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadingUpdate {
    pub heading_name: Option<String>,
    pub heading_details: Option<String>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub is_hidden: Option<bool>,
}
