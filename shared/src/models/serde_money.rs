//! Serde helpers for nullable money fields.
//!
//! Bill payloads arrive from clients with numeric fields that may be a
//! JSON number, a numeric string ("1,234.50"), an empty string or null.
//! All four forms deserialize into `Option<f64>`; a string that does not
//! parse becomes `None` (it contributes 0 to the total either way).

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Parse a user-entered money string. Thousands separators and
/// surrounding whitespace are tolerated; anything unparseable is None.
pub fn parse_money(s: &str) -> Option<f64> {
    let cleaned = s.replace(',', "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Option<f64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null, a number, or a numeric string")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MoneyVisitor)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(v as f64))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(parse_money(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(parse_money(&v))
    }
}

/// Deserialize `Option<f64>` accepting number / string / null.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(MoneyVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "super::deserialize")]
        amount: Option<f64>,
    }

    fn parse(json: &str) -> Option<f64> {
        serde_json::from_str::<Payload>(json).unwrap().amount
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"amount": 500}"#), Some(500.0));
        assert_eq!(parse(r#"{"amount": 60.5}"#), Some(60.5));
        assert_eq!(parse(r#"{"amount": "1,234.50"}"#), Some(1234.5));
        assert_eq!(parse(r#"{"amount": " 200 "}"#), Some(200.0));
    }

    #[test]
    fn blank_null_and_garbage_become_none() {
        assert_eq!(parse(r#"{"amount": null}"#), None);
        assert_eq!(parse(r#"{"amount": ""}"#), None);
        assert_eq!(parse(r#"{"amount": "abc"}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn money_string_round_trips_through_coercion() {
        // "1,234.50" formatted back from 1234.5 must parse to the exact value
        assert_eq!(parse_money("1,234.50"), Some(1234.5));
    }
}
