//! Monthly report projection and CSV export
//!
//! One row per bill, with the per-slot values compacted (blank and zero
//! entries dropped) the way the shop's accountant reads the ledger.

use serde::Serialize;
use shared::billing::format_currency;
use shared::models::{Bill, PaymentMethod};

use crate::utils::time::format_thai_date;

/// One ledger row
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// Appointment date, Buddhist-era dd/mm/yyyy
    pub date: String,
    pub bill_number: String,
    pub issued_by: String,
    /// Non-blank vehicle plates
    pub plates: Vec<String>,
    /// Inspection fees (positive only, formatted)
    pub inspection_fees: Vec<String>,
    /// Compulsory-insurance amounts (positive only, formatted)
    pub compulsory_amounts: Vec<String>,
    /// Registration taxes (positive only, formatted)
    pub taxes: Vec<String>,
    /// Renewal deposits (positive only, formatted)
    pub renewals: Vec<String>,
    /// Add-on service labels (non-blank)
    pub extension_names: Vec<String>,
    /// Add-on service prices (positive only, formatted)
    pub extension_prices: Vec<String>,
    /// Insurance type references (non-blank)
    pub insurance_types: Vec<String>,
    pub cash: bool,
    pub transfer: bool,
    pub total: f64,
}

/// Full monthly report
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    /// Month key, `YYYY-MM`
    pub month: String,
    pub rows: Vec<ReportRow>,
    pub bill_count: usize,
    /// Grand total, formatted with thousands separators
    pub grand_total: String,
}

fn positive_amounts(values: &[Option<f64>]) -> Vec<String> {
    values
        .iter()
        .filter_map(|v| v.filter(|v| *v > 0.0))
        .map(|v| format_currency(Some(v)))
        .collect()
}

fn non_blank(values: &[&str]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
        .collect()
}

impl ReportRow {
    fn from_bill(bill: &Bill) -> Self {
        let transfer = matches!(
            bill.payment_method,
            PaymentMethod::Transfer | PaymentMethod::CreditCard
        );
        ReportRow {
            date: format_thai_date(&bill.date),
            bill_number: bill.bill_number.clone(),
            issued_by: bill.created_by.clone(),
            plates: bill.registrations().iter().map(|p| p.to_string()).collect(),
            inspection_fees: positive_amounts(&[
                bill.check1, bill.check2, bill.check3, bill.check4,
            ]),
            compulsory_amounts: positive_amounts(&[
                Some(bill.amount1),
                bill.amount2,
                bill.amount3,
                bill.amount4,
            ]),
            taxes: positive_amounts(&[bill.tax1, bill.tax2, bill.tax3, bill.tax4]),
            renewals: positive_amounts(&[bill.taxgo1, bill.taxgo2, bill.taxgo3, bill.taxgo4]),
            extension_names: non_blank(&[&bill.extension1, &bill.extension3]),
            extension_prices: positive_amounts(&[bill.extension2, bill.extension4]),
            insurance_types: non_blank(&[
                &bill.typerefer1,
                &bill.typerefer2,
                &bill.typerefer3,
                &bill.typerefer4,
            ]),
            cash: bill.payment_method.is_cash(),
            transfer,
            total: bill.total,
        }
    }
}

impl MonthlyReport {
    /// Build the report for one month from the month's bills.
    ///
    /// Rows sort by bill number (prefix, then sequence), falling back to
    /// creation time for anything unparseable.
    pub fn build(month: &str, mut bills: Vec<Bill>) -> Self {
        bills.sort_by(|a, b| {
            bill_number_key(&a.bill_number)
                .cmp(&bill_number_key(&b.bill_number))
                .then_with(|| a.created_at.cmp(&b.created_at))
        });

        let grand_total: f64 = bills.iter().map(|b| b.total).sum();
        let rows: Vec<ReportRow> = bills.iter().map(ReportRow::from_bill).collect();
        let bill_count = rows.len();

        MonthlyReport {
            month: month.to_string(),
            rows,
            bill_count,
            grand_total: format_currency(Some(shared::billing::round2(grand_total))),
        }
    }

    /// Render the report as CSV, multi-value cells joined with `; `.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(
            "date,bill_number,issued_by,plates,inspection_fees,compulsory_amounts,\
             taxes,renewals,extension_names,extension_prices,insurance_types,\
             cash,transfer,total\n",
        );
        for row in &self.rows {
            let cells = [
                row.date.clone(),
                row.bill_number.clone(),
                row.issued_by.clone(),
                row.plates.join("; "),
                row.inspection_fees.join("; "),
                row.compulsory_amounts.join("; "),
                row.taxes.join("; "),
                row.renewals.join("; "),
                row.extension_names.join("; "),
                row.extension_prices.join("; "),
                row.insurance_types.join("; "),
                if row.cash { "1" } else { "" }.to_string(),
                if row.transfer { "1" } else { "" }.to_string(),
                format!("{:.2}", row.total),
            ];
            let line: Vec<String> = cells.iter().map(|c| csv_quote(c)).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out.push_str(&format!(
            "total,,,,,,,,,,,,,{}\n",
            csv_quote(&self.grand_total)
        ));
        out
    }
}

/// Sort key for `prefix/seq` bill numbers; unparseable numbers sort last.
fn bill_number_key(bill_number: &str) -> (i64, i64) {
    bill_number
        .split_once('/')
        .and_then(|(prefix, seq)| {
            Some((prefix.parse::<i64>().ok()?, seq.parse::<i64>().ok()?))
        })
        .unwrap_or((i64::MAX, i64::MAX))
}

/// Quote a CSV cell when it contains a delimiter, quote or newline.
fn csv_quote(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::BillCreate;

    fn bill(number: &str, data: BillCreate) -> Bill {
        Bill::from_create(
            data,
            number.to_string(),
            "staff".to_string(),
            "2026-08-01T09:00:00Z".to_string(),
        )
    }

    fn sample(number: &str, amount: f64) -> Bill {
        let mut data = BillCreate::default();
        data.username = "ลูกค้า".to_string();
        data.name1 = "พรบ".to_string();
        data.amount1 = Some(amount);
        data.date = "2026-08-15".to_string();
        bill(number, data)
    }

    #[test]
    fn rows_sort_by_bill_number_not_insertion_order() {
        let report = MonthlyReport::build(
            "2026-08",
            vec![sample("1/0010", 100.0), sample("1/0002", 200.0)],
        );
        let numbers: Vec<&str> = report.rows.iter().map(|r| r.bill_number.as_str()).collect();
        assert_eq!(numbers, vec!["1/0002", "1/0010"]);
    }

    #[test]
    fn prefix_dominates_sequence_in_sorting() {
        let report = MonthlyReport::build(
            "2026-08",
            vec![sample("2/0001", 100.0), sample("1/9999", 200.0)],
        );
        let numbers: Vec<&str> = report.rows.iter().map(|r| r.bill_number.as_str()).collect();
        assert_eq!(numbers, vec!["1/9999", "2/0001"]);
    }

    #[test]
    fn zero_and_blank_values_are_dropped_from_rows() {
        let mut data = BillCreate::default();
        data.username = "ลูกค้า".to_string();
        data.name1 = "พรบ".to_string();
        data.amount1 = Some(500.0);
        data.check2 = Some(60.0);
        data.tax1 = Some(0.0);
        data.extension3 = "ฟิล์ม".to_string();
        data.date = "2026-08-15".to_string();
        let report = MonthlyReport::build("2026-08", vec![bill("1/0001", data)]);

        let row = &report.rows[0];
        assert_eq!(row.compulsory_amounts, vec!["500.00"]);
        assert_eq!(row.inspection_fees, vec!["60.00"]);
        assert!(row.taxes.is_empty());
        assert_eq!(row.extension_names, vec!["ฟิล์ม"]);
        assert_eq!(row.date, "15/08/2569");
    }

    #[test]
    fn credit_card_counts_as_transfer() {
        let mut data = BillCreate::default();
        data.username = "ลูกค้า".to_string();
        data.name1 = "พรบ".to_string();
        data.amount1 = Some(500.0);
        data.payment_method = shared::models::PaymentMethod::CreditCard;
        data.date = "2026-08-15".to_string();
        let report = MonthlyReport::build("2026-08", vec![bill("1/0001", data)]);
        assert!(!report.rows[0].cash);
        assert!(report.rows[0].transfer);
    }

    #[test]
    fn grand_total_sums_and_formats() {
        let report = MonthlyReport::build(
            "2026-08",
            vec![sample("1/0001", 1000.5), sample("1/0002", 234.0)],
        );
        assert_eq!(report.grand_total, "1,234.50");
        assert_eq!(report.bill_count, 2);
    }

    #[test]
    fn csv_quotes_cells_with_delimiters() {
        assert_eq!(csv_quote("plain"), "plain");
        assert_eq!(csv_quote("a,b"), "\"a,b\"");
        assert_eq!(csv_quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
