//! Receipt rendering - turns a [`Receipt`] projection into ESC/POS bytes
//! for the shop's 80mm thermal printer.

use receipt_printer::EscPosBuilder;
use shared::receipt::{Receipt, ReceiptLine};

use crate::utils::time::format_thai_date;

/// Shop header, fixed on every receipt
const SHOP_NAME: &str = "สถานตรวจสภาพรถคลองหาด";
const SHOP_PHONE: &str = "Tel: 083-066-2661, 081-715-8683";
const FOOTER: &str = "ขอบคุณที่ใช้บริการ";

/// Renders receipts at a fixed column width (80mm paper = 48 columns)
pub struct ReceiptRenderer {
    width: usize,
}

impl ReceiptRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Build the full ESC/POS byte stream for one receipt
    pub fn render(&self, receipt: &Receipt) -> Vec<u8> {
        let mut b = EscPosBuilder::new(self.width);

        self.render_header(&mut b, receipt);
        self.render_sections(&mut b, receipt);
        self.render_footer(&mut b, receipt);

        b.cut_feed(3);
        b.build()
    }

    fn render_header(&self, b: &mut EscPosBuilder, receipt: &Receipt) {
        b.center();
        b.double_height();
        b.line(SHOP_NAME);
        b.reset_size();
        b.line(SHOP_PHONE);
        b.left();
        b.sep_double();

        let bill_number = if receipt.bill_number.is_empty() {
            "-"
        } else {
            &receipt.bill_number
        };
        b.line_lr("เลขที่บิล", bill_number);
        if !receipt.date.is_empty() {
            b.line_lr("วันที่นัด", &format_thai_date(&receipt.date));
        }

        let customer = if receipt.customer.is_empty() {
            "-"
        } else {
            &receipt.customer
        };
        b.line_lr("ลูกค้า", customer);
        if !receipt.phone.is_empty() {
            b.line_lr("โทร", &receipt.phone);
        }
        if !receipt.registrations.is_empty() {
            b.line_lr("ทะเบียน", &receipt.registrations.join(", "));
        }
    }

    fn render_sections(&self, b: &mut EscPosBuilder, receipt: &Receipt) {
        self.render_section(b, "รายการบริการ พ.ร.บ.", &receipt.services);
        self.render_section(b, "รายการตรวจสภาพ", &receipt.inspections);
        self.render_section(b, "ภาษีและฝากต่อ", &receipt.taxes);
        // Extensions are omitted entirely when empty
        if !receipt.extensions.is_empty() {
            self.render_section(b, "บริการเสริม", &receipt.extensions);
        }
        self.render_section(b, "ประกัน", &receipt.insurance);
    }

    fn render_section(&self, b: &mut EscPosBuilder, title: &str, lines: &[ReceiptLine]) {
        b.sep_single();
        b.bold();
        b.line(title);
        b.bold_off();
        for line in lines {
            b.line_lr(&line.label, &line.value);
        }
    }

    fn render_footer(&self, b: &mut EscPosBuilder, receipt: &Receipt) {
        b.sep_double();
        b.bold();
        b.double_height();
        b.line_lr("รวมทั้งสิ้น", &receipt.total);
        b.reset_size();
        b.bold_off();
        b.line_lr("ชำระโดย", &receipt.payment_label);
        if !receipt.description.is_empty() {
            b.line(&receipt.description);
        }
        b.newline();
        b.center();
        b.line(FOOTER);
        b.left();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Bill, BillCreate};

    fn sample_receipt() -> Receipt {
        let mut data = BillCreate::default();
        data.username = "สมชาย".to_string();
        data.phone = "081-234-5678".to_string();
        data.name1 = "พรบ รถยนต์".to_string();
        data.amount1 = Some(645.21);
        data.check1 = Some(200.0);
        data.car_registration1 = "กข 1234 สระแก้ว".to_string();
        data.date = "2026-09-01".to_string();
        let bill = Bill::from_create(data, "2/0042".into(), "staff".into(), "t".into());
        Receipt::from_bill(&bill)
    }

    #[test]
    fn rendered_receipt_contains_header_items_and_footer() {
        let renderer = ReceiptRenderer::new(48);
        let receipt = sample_receipt();
        // build_raw path is not exposed here; decode the TIS-620 bytes back
        let bytes = renderer.render(&receipt);
        let (decoded, _, _) = encoding_rs::WINDOWS_874.decode(&bytes);

        assert!(decoded.contains(SHOP_NAME));
        assert!(decoded.contains("2/0042"));
        assert!(decoded.contains("645.21"));
        assert!(decoded.contains("กข 1234 สระแก้ว"));
        // Buddhist-era date
        assert!(decoded.contains("01/09/2569"));
        assert!(decoded.contains(FOOTER));
    }

    #[test]
    fn ends_with_feed_and_cut() {
        let renderer = ReceiptRenderer::new(48);
        let bytes = renderer.render(&sample_receipt());
        assert_eq!(&bytes[bytes.len() - 4..], &[0x1D, 0x56, 0x42, 3]);
    }
}
