//! Printable-receipt projection.
//!
//! Pure read-only view of a [`Bill`]: per section, the ordered label/value
//! lines eligible for display. The 80mm printer driver and the on-screen
//! detail view both consume this shape; neither re-derives inclusion
//! rules from the raw record.

use serde::{Deserialize, Serialize};

use crate::billing::format_currency;
use crate::models::Bill;

/// One label/value line of a receipt section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub label: String,
    pub value: String,
}

impl ReceiptLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        ReceiptLine { label: label.into(), value: value.into() }
    }

    /// The row shown when a mandatory section has no eligible items.
    fn placeholder() -> Self {
        ReceiptLine::new("-", "")
    }
}

/// All display content for one receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub bill_number: String,
    pub customer: String,
    pub phone: String,
    pub registrations: Vec<String>,
    /// Appointment date, verbatim from the record
    pub date: String,
    pub description: String,
    pub payment_label: String,
    /// Compulsory-insurance service line-items (พ.ร.บ.)
    pub services: Vec<ReceiptLine>,
    /// Vehicle inspection fees
    pub inspections: Vec<ReceiptLine>,
    /// Registration tax and renewal deposit lines
    pub taxes: Vec<ReceiptLine>,
    /// Add-on service pairs; absent entirely when none
    pub extensions: Vec<ReceiptLine>,
    /// Insurance reference pairs
    pub insurance: Vec<ReceiptLine>,
    pub total: String,
}

impl Receipt {
    pub fn from_bill(bill: &Bill) -> Self {
        Receipt {
            bill_number: bill.bill_number.clone(),
            customer: bill.username.clone(),
            phone: bill.phone.clone(),
            registrations: bill.registrations().iter().map(|r| r.to_string()).collect(),
            date: bill.date.clone(),
            description: bill.description.clone(),
            payment_label: bill.payment_method.label_th().to_string(),
            services: service_lines(bill),
            inspections: inspection_lines(bill),
            taxes: tax_lines(bill),
            extensions: extension_lines(bill),
            insurance: insurance_lines(bill),
            total: format_currency(Some(bill.total)),
        }
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Service slots qualify with a non-empty name and a positive amount.
fn service_lines(bill: &Bill) -> Vec<ReceiptLine> {
    let mut lines: Vec<ReceiptLine> = bill
        .service_slots()
        .iter()
        .filter_map(|slot| {
            let amount = positive(slot.amount)?;
            if slot.name.is_empty() {
                return None;
            }
            Some(ReceiptLine::new(slot.name, format_currency(Some(amount))))
        })
        .collect();
    if lines.is_empty() {
        lines.push(ReceiptLine::placeholder());
    }
    lines
}

/// Inspection slots qualify on a positive fee alone; a blank plate
/// renders as "-".
fn inspection_lines(bill: &Bill) -> Vec<ReceiptLine> {
    let mut lines: Vec<ReceiptLine> = bill
        .inspection_slots()
        .iter()
        .filter_map(|slot| {
            let check = positive(slot.check)?;
            let plate = if slot.car_registration.trim().is_empty() {
                "-"
            } else {
                slot.car_registration
            };
            Some(ReceiptLine::new(plate, format_currency(Some(check))))
        })
        .collect();
    if lines.is_empty() {
        lines.push(ReceiptLine::placeholder());
    }
    lines
}

/// Each slot can emit a registration-tax line, a renewal-deposit line,
/// both, or neither.
fn tax_lines(bill: &Bill) -> Vec<ReceiptLine> {
    let mut lines = Vec::new();
    for slot in bill.inspection_slots() {
        let plate_suffix = if slot.car_registration.is_empty() {
            String::new()
        } else {
            format!(" {}", slot.car_registration)
        };
        if let Some(tax) = positive(slot.tax) {
            lines.push(ReceiptLine::new(
                format!("ค่าภาษีทะเบียน{plate_suffix}"),
                format_currency(Some(tax)),
            ));
        }
        if let Some(taxgo) = positive(slot.taxgo) {
            lines.push(ReceiptLine::new(
                format!("ค่าฝากต่อ{plate_suffix}"),
                format_currency(Some(taxgo)),
            ));
        }
    }
    if lines.is_empty() {
        lines.push(ReceiptLine::placeholder());
    }
    lines
}

/// Add-on labels are compacted (empty slots removed) and then paired
/// positionally two-at-a-time: first of the pair is the category, second
/// is shown in the value cell. An odd trailing label gets an empty value.
/// The compaction means a label in slot 3 shifts left when slot 1 is
/// blank; this matches the receipts the shop has always issued.
fn extension_lines(bill: &Bill) -> Vec<ReceiptLine> {
    let collected: Vec<&str> = bill
        .extension_pairs()
        .iter()
        .map(|pair| pair.label)
        .filter(|label| !label.is_empty())
        .collect();

    let mut lines = Vec::new();
    let mut i = 0;
    while i < collected.len() {
        let value = collected.get(i + 1).copied().unwrap_or("");
        lines.push(ReceiptLine::new(format!("บริการ {}", collected[i]), value));
        i += 2;
    }
    lines
}

/// Insurance pairs need both the reference and its type, verbatim.
fn insurance_lines(bill: &Bill) -> Vec<ReceiptLine> {
    let mut lines: Vec<ReceiptLine> = bill
        .insurance_pairs()
        .iter()
        .filter(|pair| !pair.refer.is_empty() && !pair.typerefer.is_empty())
        .map(|pair| ReceiptLine::new(pair.refer, pair.typerefer))
        .collect();
    if lines.is_empty() {
        lines.push(ReceiptLine::placeholder());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillCreate;

    fn bill_from(data: BillCreate) -> Bill {
        Bill::from_create(data, "2/0042".into(), "staff".into(), "t".into())
    }

    #[test]
    fn zero_amount_service_is_excluded() {
        let mut data = BillCreate::default();
        data.name1 = "พรบ".to_string();
        data.amount1 = Some(0.0);
        data.name2 = "พรบ รถยนต์".to_string();
        data.amount2 = Some(500.0);
        let lines = service_lines(&bill_from(data));
        assert_eq!(lines, vec![ReceiptLine::new("พรบ รถยนต์", "500.00")]);
    }

    #[test]
    fn empty_sections_render_one_placeholder_row() {
        let bill = bill_from(BillCreate::default());
        assert_eq!(service_lines(&bill), vec![ReceiptLine::placeholder()]);
        assert_eq!(inspection_lines(&bill), vec![ReceiptLine::placeholder()]);
        assert_eq!(tax_lines(&bill), vec![ReceiptLine::placeholder()]);
        assert_eq!(insurance_lines(&bill), vec![ReceiptLine::placeholder()]);
        assert!(extension_lines(&bill).is_empty());
    }

    #[test]
    fn inspection_without_plate_shows_dash() {
        let mut data = BillCreate::default();
        data.check1 = Some(60.0);
        data.check2 = Some(200.0);
        data.car_registration2 = "กข 1234".to_string();
        let lines = inspection_lines(&bill_from(data));
        assert_eq!(
            lines,
            vec![
                ReceiptLine::new("-", "60.00"),
                ReceiptLine::new("กข 1234", "200.00"),
            ]
        );
    }

    #[test]
    fn tax_and_renewal_lines_are_independent() {
        let mut data = BillCreate::default();
        data.car_registration1 = "กข 1234".to_string();
        data.tax1 = Some(100.0);
        data.taxgo1 = Some(300.0);
        data.taxgo2 = Some(200.0);
        let lines = tax_lines(&bill_from(data));
        assert_eq!(
            lines,
            vec![
                ReceiptLine::new("ค่าภาษีทะเบียน กข 1234", "100.00"),
                ReceiptLine::new("ค่าฝากต่อ กข 1234", "300.00"),
                ReceiptLine::new("ค่าฝากต่อ", "200.00"),
            ]
        );
    }

    #[test]
    fn insurance_requires_both_fields() {
        let mut data = BillCreate::default();
        data.refer1 = "ประกันA".to_string();
        data.refer2 = "ประกันB".to_string();
        data.typerefer2 = "ป1".to_string();
        let lines = insurance_lines(&bill_from(data));
        assert_eq!(lines, vec![ReceiptLine::new("ประกันB", "ป1")]);
    }

    #[test]
    fn extensions_pair_over_the_compacted_label_list() {
        let mut data = BillCreate::default();
        data.extension1 = "N1".to_string();
        data.extension3 = "กระจก".to_string();
        data.extension4 = Some(150.0);
        let lines = extension_lines(&bill_from(data));
        assert_eq!(lines, vec![ReceiptLine::new("บริการ N1", "กระจก")]);
    }

    #[test]
    fn lone_extension_label_gets_an_empty_value() {
        let mut data = BillCreate::default();
        data.extension3 = "ฟิล์ม".to_string();
        let lines = extension_lines(&bill_from(data));
        assert_eq!(lines, vec![ReceiptLine::new("บริการ ฟิล์ม", "")]);
    }

    #[test]
    fn receipt_carries_header_and_total() {
        let mut data = BillCreate::default();
        data.username = "สมชาย".to_string();
        data.name1 = "พรบ".to_string();
        data.amount1 = Some(1234.5);
        data.date = "2026-09-01".to_string();
        let receipt = Receipt::from_bill(&bill_from(data));
        assert_eq!(receipt.bill_number, "2/0042");
        assert_eq!(receipt.customer, "สมชาย");
        assert_eq!(receipt.payment_label, "เงินสด");
        assert_eq!(receipt.total, "1,234.50");
    }
}
