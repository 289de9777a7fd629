//! Bill total calculation.
//!
//! The total is the plain sum of every chargeable numeric field on the
//! bill - service amounts, inspection fees, extension prices, registration
//! taxes, renewal deposits and numeric insurance type references - with
//! absent values counting as zero.

use crate::models::Bill;

/// Treat an absent value as zero. NaN from a bad upstream parse also
/// collapses to zero rather than poisoning the sum.
pub fn coerce_money(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Round half-away-from-zero to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn coerce_text_money(value: &str) -> f64 {
    crate::models::serde_money::parse_money(value).unwrap_or(0.0)
}

/// Sum the 22 chargeable fields of a bill and round to satang.
///
/// Insurance type references (`typerefer1..4`) are free-text on the wire
/// but historically carry premium amounts; numeric values are summed,
/// non-numeric text contributes zero.
pub fn calculate_total(bill: &Bill) -> f64 {
    let mut total = 0.0;

    for slot in bill.service_slots() {
        total += coerce_money(slot.amount);
    }
    for slot in bill.inspection_slots() {
        total += coerce_money(slot.check);
        total += coerce_money(slot.tax);
        total += coerce_money(slot.taxgo);
    }
    for pair in bill.extension_pairs() {
        total += coerce_money(pair.price);
    }
    for pair in bill.insurance_pairs() {
        total += coerce_text_money(pair.typerefer);
    }

    round2(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillCreate;

    fn bill_from(data: BillCreate) -> Bill {
        Bill::from_create(data, "1/0001".into(), "staff".into(), "t".into())
    }

    #[test]
    fn empty_bill_totals_zero() {
        let bill = bill_from(BillCreate::default());
        assert_eq!(calculate_total(&bill), 0.0);
    }

    #[test]
    fn sums_all_chargeable_fields() {
        let mut data = BillCreate::default();
        data.amount1 = Some(500.0);
        data.amount3 = Some(100.0);
        data.check1 = Some(60.0);
        data.check2 = Some(200.0);
        data.tax1 = Some(100.0);
        data.taxgo2 = Some(300.0);
        data.extension2 = Some(150.0);
        data.extension4 = Some(50.0);
        data.typerefer1 = "645.21".to_string();
        let bill = bill_from(data);
        assert_eq!(calculate_total(&bill), 2105.21);
    }

    #[test]
    fn non_numeric_typerefer_contributes_zero() {
        let mut data = BillCreate::default();
        data.amount1 = Some(500.0);
        data.typerefer1 = "ป1".to_string();
        data.typerefer2 = "1,000.00".to_string();
        let bill = bill_from(data);
        assert_eq!(calculate_total(&bill), 1500.0);
    }

    #[test]
    fn rounds_float_artifacts_to_satang() {
        let mut data = BillCreate::default();
        data.amount1 = Some(0.1);
        data.amount2 = Some(0.2);
        let bill = bill_from(data);
        assert_eq!(calculate_total(&bill), 0.3);
    }

    #[test]
    fn coerce_money_handles_nan() {
        assert_eq!(coerce_money(Some(f64::NAN)), 0.0);
        assert_eq!(coerce_money(None), 0.0);
        assert_eq!(coerce_money(Some(42.5)), 42.5);
    }
}
