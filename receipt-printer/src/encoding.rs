//! Thai (TIS-620 / WINDOWS-874) encoding utilities for thermal printers
//!
//! Thai-market ESC/POS printers expect TIS-620 single-byte text, selected
//! with `ESC t` (we use Thai Character Code 11, page 21, the layout every
//! Thai-market Epson clone ships). WINDOWS-874 is a strict superset of
//! TIS-620 for the Thai block, so encoding_rs's WINDOWS-874 encoder
//! produces the right bytes.
//!
//! Column math is not byte math here: Thai combining marks (upper/lower
//! vowels and tone marks) occupy zero columns on the printer's cell grid.

use tracing::instrument;

/// Code page byte for `ESC t` - Thai Character Code 11
const THAI_CODE_PAGE: u8 = 21;

/// True for Thai characters that render above or below the base cell
/// and therefore take no column of their own.
fn is_combining(c: char) -> bool {
    matches!(c,
        '\u{0E31}'                  // mai han-akat
        | '\u{0E34}'..='\u{0E3A}'   // upper/lower vowels
        | '\u{0E47}'..='\u{0E4E}'   // tone marks et al.
    )
}

/// Column width of a string on the printer's cell grid.
///
/// Every printable character is one column except Thai combining marks,
/// which are zero.
pub fn thai_width(s: &str) -> usize {
    s.chars().filter(|c| !is_combining(*c)).count()
}

/// Truncate a string to fit within a column width.
///
/// Combining marks ride along with their base character for free.
pub fn truncate_thai(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for c in s.chars() {
        let char_cols = if is_combining(c) { 0 } else { 1 };
        if width + char_cols > max_width {
            break;
        }
        result.push(c);
        width += char_cols;
    }
    result
}

/// Pad a string to a specific column width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_thai(s: &str, width: usize, align_right: bool) -> String {
    let current_width = thai_width(s);
    if current_width >= width {
        return truncate_thai(s, width);
    }
    let spaces = width - current_width;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Convert mixed UTF-8 content (with ESC/POS commands) to TIS-620
///
/// ASCII bytes (0x00-0x7F) pass through exactly as is, which protects
/// ESC/POS commands from being corrupted. Only bytes >= 0x80 are treated
/// as UTF-8 sequences and re-encoded.
///
/// Also re-selects the Thai code page after any INIT command (ESC @),
/// since INIT resets the printer to its default page.
#[instrument(skip(bytes))]
pub fn convert_to_thai(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() * 2);

    // Select Thai code page at the start (ESC t n)
    result.extend_from_slice(&[0x1B, 0x74, THAI_CODE_PAGE]);

    let mut buffer = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        // INIT (ESC @) resets the code page; re-select after it
        if b == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == 0x40 {
            flush_buffer(&mut buffer, &mut result);

            result.push(0x1B);
            result.push(0x40);
            result.extend_from_slice(&[0x1B, 0x74, THAI_CODE_PAGE]);

            i += 2;
            continue;
        }

        if b < 128 {
            // ASCII byte (command or ASCII text)
            flush_buffer(&mut buffer, &mut result);
            result.push(b);
        } else {
            // Part of a UTF-8 Thai sequence
            buffer.push(b);
        }
        i += 1;
    }

    flush_buffer(&mut buffer, &mut result);
    result
}

/// Flush the non-ASCII buffer, converting UTF-8 to WINDOWS-874 bytes
fn flush_buffer(buffer: &mut Vec<u8>, result: &mut Vec<u8>) {
    if buffer.is_empty() {
        return;
    }

    let s = String::from_utf8_lossy(buffer);
    let (encoded, _, _) = encoding_rs::WINDOWS_874.encode(&s);
    result.extend_from_slice(&encoded);
    buffer.clear();
}
