//! Bill Model
//!
//! A bill is one customer transaction: up to four service line-items
//! (พ.ร.บ.), four vehicle-inspection slots, four tax/renewal slots, two
//! extension pairs and four insurance reference pairs, all flattened
//! into one record as the API consumers expect it.
//!
//! The numbered wire fields (`name1`, `amount1`, ...) are fixed by the
//! API contract; code never reaches into them by constructed key -
//! the slot accessors below expose them as fixed-size arrays instead.

use serde::{Deserialize, Serialize};

use super::serde_money;

/// Payment method - closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Transfer,
    CreditCard,
}

impl PaymentMethod {
    /// Thai display label, as printed on the receipt
    pub fn label_th(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "เงินสด",
            PaymentMethod::Transfer => "โอนเงิน",
            PaymentMethod::CreditCard => "บัตรเครดิต",
        }
    }

    /// Monthly report splits payments into a cash column and a transfer
    /// column; card payments count as transfers there.
    pub fn is_cash(self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

/// Direction of a post-creation correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    Increase,
    Decrease,
}

/// One of the four service line-item slots
#[derive(Debug, Clone, Copy)]
pub struct ServiceSlot<'a> {
    pub name: &'a str,
    pub amount: Option<f64>,
}

/// One of the four inspection/tax slots (keyed by vehicle plate)
#[derive(Debug, Clone, Copy)]
pub struct InspectionSlot<'a> {
    pub car_registration: &'a str,
    pub check: Option<f64>,
    pub tax: Option<f64>,
    pub taxgo: Option<f64>,
}

/// One of the two extension (add-on service) pairs
#[derive(Debug, Clone, Copy)]
pub struct ExtensionPair<'a> {
    pub label: &'a str,
    pub price: Option<f64>,
}

/// One of the four insurance reference pairs
#[derive(Debug, Clone, Copy)]
pub struct InsurancePair<'a> {
    pub refer: &'a str,
    pub typerefer: &'a str,
}

/// Bill entity (persisted row / wire shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Bill {
    pub id: i64,
    pub bill_number: String,
    pub username: String,
    pub phone: String,

    // Service line-items (พ.ร.บ. etc.)
    pub name1: String,
    pub amount1: f64,
    pub name2: String,
    pub amount2: Option<f64>,
    pub name3: String,
    pub amount3: Option<f64>,
    pub name4: String,
    pub amount4: Option<f64>,

    // Registration tax / renewal deposit
    pub tax1: Option<f64>,
    pub tax2: Option<f64>,
    pub tax3: Option<f64>,
    pub tax4: Option<f64>,
    pub taxgo1: Option<f64>,
    pub taxgo2: Option<f64>,
    pub taxgo3: Option<f64>,
    pub taxgo4: Option<f64>,

    // Inspection fees
    pub check1: Option<f64>,
    pub check2: Option<f64>,
    pub check3: Option<f64>,
    pub check4: Option<f64>,

    // Extension services (label/price pairs)
    pub extension1: String,
    pub extension2: Option<f64>,
    pub extension3: String,
    pub extension4: Option<f64>,

    // Insurance references
    pub refer1: String,
    pub refer2: String,
    pub refer3: String,
    pub refer4: String,
    pub typerefer1: String,
    pub typerefer2: String,
    pub typerefer3: String,
    pub typerefer4: String,

    // Vehicle plates
    pub car_registration1: String,
    pub car_registration2: String,
    pub car_registration3: String,
    pub car_registration4: String,

    pub payment_method: PaymentMethod,
    pub description: String,

    /// Derived - always recomputed by the server, never client-set
    pub total: f64,

    /// Appointment date (ISO `YYYY-MM-DD`)
    pub date: String,
    pub created_by: String,

    // Post-creation correction (optional add-on)
    pub adjustment_type: Option<AdjustmentType>,
    pub adjustment_note: Option<String>,
    pub adjustment_amount: Option<f64>,

    pub created_at: String,
    pub updated_at: String,
}

impl Bill {
    /// The four service line-item slots, in order.
    pub fn service_slots(&self) -> [ServiceSlot<'_>; 4] {
        [
            ServiceSlot { name: &self.name1, amount: Some(self.amount1) },
            ServiceSlot { name: &self.name2, amount: self.amount2 },
            ServiceSlot { name: &self.name3, amount: self.amount3 },
            ServiceSlot { name: &self.name4, amount: self.amount4 },
        ]
    }

    /// The four inspection/tax slots, in order.
    pub fn inspection_slots(&self) -> [InspectionSlot<'_>; 4] {
        [
            InspectionSlot {
                car_registration: &self.car_registration1,
                check: self.check1,
                tax: self.tax1,
                taxgo: self.taxgo1,
            },
            InspectionSlot {
                car_registration: &self.car_registration2,
                check: self.check2,
                tax: self.tax2,
                taxgo: self.taxgo2,
            },
            InspectionSlot {
                car_registration: &self.car_registration3,
                check: self.check3,
                tax: self.tax3,
                taxgo: self.taxgo3,
            },
            InspectionSlot {
                car_registration: &self.car_registration4,
                check: self.check4,
                tax: self.tax4,
                taxgo: self.taxgo4,
            },
        ]
    }

    /// The two extension pairs, in order.
    pub fn extension_pairs(&self) -> [ExtensionPair<'_>; 2] {
        [
            ExtensionPair { label: &self.extension1, price: self.extension2 },
            ExtensionPair { label: &self.extension3, price: self.extension4 },
        ]
    }

    /// The four insurance reference pairs, in order.
    pub fn insurance_pairs(&self) -> [InsurancePair<'_>; 4] {
        [
            InsurancePair { refer: &self.refer1, typerefer: &self.typerefer1 },
            InsurancePair { refer: &self.refer2, typerefer: &self.typerefer2 },
            InsurancePair { refer: &self.refer3, typerefer: &self.typerefer3 },
            InsurancePair { refer: &self.refer4, typerefer: &self.typerefer4 },
        ]
    }

    /// All non-blank vehicle plates, in slot order.
    pub fn registrations(&self) -> Vec<&str> {
        [
            self.car_registration1.as_str(),
            self.car_registration2.as_str(),
            self.car_registration3.as_str(),
            self.car_registration4.as_str(),
        ]
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .collect()
    }

    /// Build a persisted record from a create payload. Nullable numeric
    /// fields are normalized to 0 at this point (they stay nullable only
    /// while the form is being edited); the total is recomputed from the
    /// normalized record.
    pub fn from_create(
        data: BillCreate,
        bill_number: String,
        created_by: String,
        now_iso: String,
    ) -> Self {
        let mut bill = Bill {
            id: 0,
            bill_number,
            username: data.username,
            phone: data.phone,
            name1: data.name1,
            amount1: data.amount1.unwrap_or(0.0),
            name2: data.name2,
            amount2: Some(data.amount2.unwrap_or(0.0)),
            name3: data.name3,
            amount3: Some(data.amount3.unwrap_or(0.0)),
            name4: data.name4,
            amount4: Some(data.amount4.unwrap_or(0.0)),
            tax1: Some(data.tax1.unwrap_or(0.0)),
            tax2: Some(data.tax2.unwrap_or(0.0)),
            tax3: Some(data.tax3.unwrap_or(0.0)),
            tax4: Some(data.tax4.unwrap_or(0.0)),
            taxgo1: Some(data.taxgo1.unwrap_or(0.0)),
            taxgo2: Some(data.taxgo2.unwrap_or(0.0)),
            taxgo3: Some(data.taxgo3.unwrap_or(0.0)),
            taxgo4: Some(data.taxgo4.unwrap_or(0.0)),
            check1: Some(data.check1.unwrap_or(0.0)),
            check2: Some(data.check2.unwrap_or(0.0)),
            check3: Some(data.check3.unwrap_or(0.0)),
            check4: Some(data.check4.unwrap_or(0.0)),
            extension1: data.extension1,
            extension2: Some(data.extension2.unwrap_or(0.0)),
            extension3: data.extension3,
            extension4: Some(data.extension4.unwrap_or(0.0)),
            refer1: data.refer1,
            refer2: data.refer2,
            refer3: data.refer3,
            refer4: data.refer4,
            typerefer1: data.typerefer1,
            typerefer2: data.typerefer2,
            typerefer3: data.typerefer3,
            typerefer4: data.typerefer4,
            car_registration1: data.car_registration1,
            car_registration2: data.car_registration2,
            car_registration3: data.car_registration3,
            car_registration4: data.car_registration4,
            payment_method: data.payment_method,
            description: data.description,
            total: 0.0,
            date: data.date,
            created_by,
            adjustment_type: None,
            adjustment_note: None,
            adjustment_amount: None,
            created_at: now_iso.clone(),
            updated_at: now_iso,
        };
        bill.total = crate::billing::calculate_total(&bill);
        bill
    }
}

/// Create-bill payload. Numeric fields tolerate number / numeric string /
/// "" / null on the wire (see [`serde_money`]); string fields default to
/// empty when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillCreate {
    pub username: String,
    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub name1: String,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub amount1: Option<f64>,
    #[serde(default)]
    pub name2: String,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub amount2: Option<f64>,
    #[serde(default)]
    pub name3: String,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub amount3: Option<f64>,
    #[serde(default)]
    pub name4: String,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub amount4: Option<f64>,

    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub tax1: Option<f64>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub tax2: Option<f64>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub tax3: Option<f64>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub tax4: Option<f64>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub taxgo1: Option<f64>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub taxgo2: Option<f64>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub taxgo3: Option<f64>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub taxgo4: Option<f64>,

    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub check1: Option<f64>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub check2: Option<f64>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub check3: Option<f64>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub check4: Option<f64>,

    #[serde(default)]
    pub extension1: String,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub extension2: Option<f64>,
    #[serde(default)]
    pub extension3: String,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub extension4: Option<f64>,

    #[serde(default)]
    pub refer1: String,
    #[serde(default)]
    pub refer2: String,
    #[serde(default)]
    pub refer3: String,
    #[serde(default)]
    pub refer4: String,
    #[serde(default)]
    pub typerefer1: String,
    #[serde(default)]
    pub typerefer2: String,
    #[serde(default)]
    pub typerefer3: String,
    #[serde(default)]
    pub typerefer4: String,

    #[serde(default)]
    pub car_registration1: String,
    #[serde(default)]
    pub car_registration2: String,
    #[serde(default)]
    pub car_registration3: String,
    #[serde(default)]
    pub car_registration4: String,

    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub description: String,

    /// Appointment date (ISO `YYYY-MM-DD`) - must be today or later
    #[serde(default)]
    pub date: String,
}

/// Adjustment payload - the only post-creation mutation of a bill
#[derive(Debug, Clone, Deserialize)]
pub struct BillAdjustment {
    pub adjustment_type: AdjustmentType,
    #[serde(default)]
    pub adjustment_note: Option<String>,
    #[serde(default, deserialize_with = "serde_money::deserialize")]
    pub adjustment_amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_create() -> BillCreate {
        BillCreate {
            username: "สมชาย".to_string(),
            name1: "พรบ".to_string(),
            amount1: Some(500.0),
            date: "2026-09-01".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn from_create_normalizes_nulls_to_zero_and_derives_total() {
        let mut data = minimal_create();
        data.check1 = Some(60.0);
        let bill = Bill::from_create(
            data,
            "1/0001".to_string(),
            "staff-1".to_string(),
            "2026-08-23T09:00:00Z".to_string(),
        );
        assert_eq!(bill.amount2, Some(0.0));
        assert_eq!(bill.tax4, Some(0.0));
        assert_eq!(bill.taxgo1, Some(0.0));
        assert_eq!(bill.total, 560.0);
    }

    #[test]
    fn create_payload_accepts_numeric_strings_and_nulls() {
        let json = r#"{
            "username": "สมหญิง",
            "name1": "พรบ",
            "amount1": "1,200.50",
            "amount2": null,
            "tax1": "",
            "check1": 60,
            "payment_method": "transfer",
            "date": "2026-09-01"
        }"#;
        let data: BillCreate = serde_json::from_str(json).unwrap();
        assert_eq!(data.amount1, Some(1200.5));
        assert_eq!(data.amount2, None);
        assert_eq!(data.tax1, None);
        assert_eq!(data.check1, Some(60.0));
        assert_eq!(data.payment_method, PaymentMethod::Transfer);
    }

    #[test]
    fn registrations_skips_blank_plates() {
        let mut data = minimal_create();
        data.car_registration2 = "กข 1234 สระแก้ว".to_string();
        data.car_registration4 = "  ".to_string();
        let bill = Bill::from_create(data, "1/0001".into(), "s".into(), "t".into());
        assert_eq!(bill.registrations(), vec!["กข 1234 สระแก้ว"]);
    }
}
