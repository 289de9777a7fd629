//! # receipt-printer
//!
//! ESC/POS thermal printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building
//! - TIS-620 (WINDOWS-874) encoding for Thai-market printers
//! - Network printing (TCP port 9100)
//!
//! Business logic (WHAT to print) stays in application code:
//! - Receipt rendering → station-server
//!
//! ## Example
//!
//! ```ignore
//! use receipt_printer::{EscPosBuilder, NetworkPrinter, Printer};
//!
//! // Build ESC/POS content
//! let mut builder = EscPosBuilder::new(48);
//! builder.center();
//! builder.double_size();
//! builder.line("สถานตรวจสภาพรถคลองหาด");
//! builder.reset_size();
//! builder.sep_double();
//! builder.left();
//! builder.line_lr("พรบ", "500.00");
//! builder.cut_feed(3);
//!
//! // Send to network printer
//! let printer = NetworkPrinter::new("192.168.1.100", 9100)?;
//! printer.print(&builder.build()).await?;
//! ```

mod encoding;
mod error;
mod escpos;
mod printer;

// Re-exports
pub use encoding::{convert_to_thai, pad_thai, thai_width, truncate_thai};
pub use error::{PrintError, PrintResult};
pub use escpos::EscPosBuilder;
pub use printer::{NetworkPrinter, Printer};
