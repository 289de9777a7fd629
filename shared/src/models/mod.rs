//! Persisted entities and their create/update payloads.

pub mod bill;
pub mod expense_bill;
pub mod heading;
pub mod serde_money;
pub mod user;

pub use bill::{
    AdjustmentType, Bill, BillAdjustment, BillCreate, ExtensionPair, InspectionSlot,
    InsurancePair, PaymentMethod, ServiceSlot,
};
pub use expense_bill::{ExpenseBill, ExpenseBillCreate};
pub use heading::{Heading, HeadingCreate, HeadingUpdate};
pub use user::{User, UserCreate, UserUpdate};
