//! Shared domain types for the inspection-station service.
//!
//! Everything in this crate is pure data and pure computation - no I/O:
//!
//! - [`models`] - bill, heading, staff-account and expense-bill records
//!   plus their create/update payloads
//! - [`billing`] - total calculation, inspection tariff lookup and
//!   currency formatting
//! - [`receipt`] - the printable-receipt section projection
//! - [`client`] - request/response DTOs shared with API consumers

pub mod billing;
pub mod client;
pub mod models;
pub mod receipt;
pub mod util;

pub use models::{Bill, BillAdjustment, BillCreate, ExpenseBill, Heading, PaymentMethod, User};
pub use receipt::{Receipt, ReceiptLine};
