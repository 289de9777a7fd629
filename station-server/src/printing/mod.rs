//! Printing module - receipt rendering for the shop's thermal printer

mod renderer;

pub use renderer::ReceiptRenderer;
