//! Currency display formatting.

/// Format an amount for display: comma thousands separators, exactly
/// two decimal places. Absent and zero both render "0.00".
pub fn format_currency(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => return "0.00".to_string(),
    };

    let negative = v < 0.0;
    let rounded = (v.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as i64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as i64;

    let mut int_part = whole.to_string();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let offset = int_part.len() % 3;
    let digits: Vec<char> = int_part.drain(..).collect();
    for (i, d) in digits.iter().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{cents:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_none_render_flat_zero() {
        assert_eq!(format_currency(None), "0.00");
        assert_eq!(format_currency(Some(0.0)), "0.00");
    }

    #[test]
    fn groups_thousands_and_pads_decimals() {
        assert_eq!(format_currency(Some(60.0)), "60.00");
        assert_eq!(format_currency(Some(645.21)), "645.21");
        assert_eq!(format_currency(Some(1234.5)), "1,234.50");
        assert_eq!(format_currency(Some(1234567.89)), "1,234,567.89");
        assert_eq!(format_currency(Some(1000.0)), "1,000.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_before_grouping() {
        assert_eq!(format_currency(Some(-1234.5)), "-1,234.50");
    }
}
