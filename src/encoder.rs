//! # Command Encoder
//!
//! The printer-facing operation surface. Every function takes the sink as
//! an explicit `&mut` parameter, builds the complete byte sequence for its
//! command, and only then writes it. Parameter errors therefore leave the
//! sink untouched; transport errors are returned as-is and never retried.
//!
//! ```
//! use escpos_serial::encoder;
//! use escpos_serial::protocol::barcode::qr::QrErrorLevel;
//!
//! let mut out: Vec<u8> = Vec::new();
//! encoder::init(&mut out)?;
//! encoder::set_bold(&mut out, true)?;
//! encoder::print_text(&mut out, "TOTAL 12.50")?;
//! encoder::print_qr(&mut out, b"https://example.com", QrErrorLevel::M, 6)?;
//! encoder::feed_and_cut(&mut out, 4)?;
//! # Ok::<(), escpos_serial::EscPosError>(())
//! ```
//!
//! The encoder keeps no state. Style setters are not cached, so calling
//! `set_bold(true)` twice sends the command twice.

use crate::error::EscPosError;
use crate::protocol::barcode::{
    barcode1d::{self, HriFont, HriPosition, Symbology},
    pdf417::{self, Pdf417Type},
    qr::{self, QrErrorLevel},
};
use crate::protocol::commands::{self, LF};
use crate::protocol::glyph;
use crate::protocol::text::{self, Justification};
use crate::sink::Sink;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// BASIC TEXT AND CONTROL
// ============================================================================

/// Reset the printer to firmware defaults (ESC @).
pub fn init<S: Sink + ?Sized>(sink: &mut S) -> Result<(), EscPosError> {
    sink.write_bytes(&commands::init())
}

/// Write `text` followed by a line feed.
///
/// Text bytes are produced by the sink's own text encoding.
pub fn print_text<S: Sink + ?Sized>(sink: &mut S, text: &str) -> Result<(), EscPosError> {
    sink.write_text(text)?;
    sink.write_byte(LF)
}

/// Advance `lines` blank lines (ESC d n).
pub fn feed<S: Sink + ?Sized>(sink: &mut S, lines: u8) -> Result<(), EscPosError> {
    sink.write_bytes(&commands::feed(lines))
}

/// Write `text`, then feed `lines`.
///
/// Unlike [`print_text`], no LF follows the text: `ESC d` prints the
/// buffered line itself.
pub fn print_and_feed<S: Sink + ?Sized>(
    sink: &mut S,
    text: &str,
    lines: u8,
) -> Result<(), EscPosError> {
    sink.write_text(text)?;
    sink.write_bytes(&commands::feed(lines))
}

/// Write `text` into the line buffer without printing it.
pub fn store_text<S: Sink + ?Sized>(sink: &mut S, text: &str) -> Result<(), EscPosError> {
    sink.write_text(text)
}

/// Write a single raw byte into the line buffer (e.g. a code page glyph).
pub fn store_byte<S: Sink + ?Sized>(sink: &mut S, byte: u8) -> Result<(), EscPosError> {
    sink.write_byte(byte)
}

/// Print whatever is in the line buffer (LF).
pub fn print_storage<S: Sink + ?Sized>(sink: &mut S) -> Result<(), EscPosError> {
    sink.write_byte(LF)
}

/// Inverse off, bold off, underline 0, justification left.
pub fn reset_to_default<S: Sink + ?Sized>(sink: &mut S) -> Result<(), EscPosError> {
    sink.write_bytes(&text::reset_to_default())
}

/// Print "Hello World" after a reset and feed 6 lines.
pub fn hello<S: Sink + ?Sized>(sink: &mut S) -> Result<(), EscPosError> {
    sink.write_bytes(&commands::hello())
}

// ============================================================================
// STYLE
// ============================================================================

pub fn set_bold<S: Sink + ?Sized>(sink: &mut S, enabled: bool) -> Result<(), EscPosError> {
    sink.write_bytes(&text::bold(enabled))
}

/// White-on-black printing (GS B n).
pub fn set_inverse<S: Sink + ?Sized>(sink: &mut S, enabled: bool) -> Result<(), EscPosError> {
    sink.write_bytes(&text::inverse(enabled))
}

/// Underline level 0, 1 or 2 (ESC - n). Other levels are rejected.
pub fn set_underline<S: Sink + ?Sized>(sink: &mut S, level: u8) -> Result<(), EscPosError> {
    let cmd = text::underline(level)?;
    sink.write_bytes(&cmd)
}

pub fn set_justification<S: Sink + ?Sized>(
    sink: &mut S,
    justification: Justification,
) -> Result<(), EscPosError> {
    sink.write_bytes(&text::justification(justification))
}

/// Line spacing in firmware motion units (ESC 3 n).
pub fn set_line_spacing<S: Sink + ?Sized>(sink: &mut S, units: u8) -> Result<(), EscPosError> {
    sink.write_bytes(&text::line_spacing(units))
}

// ============================================================================
// BARCODES
// ============================================================================

/// Print a QR code: store, error correction, module size (1-16), print.
pub fn print_qr<S: Sink + ?Sized>(
    sink: &mut S,
    data: &[u8],
    level: QrErrorLevel,
    module_size: u8,
) -> Result<(), EscPosError> {
    let cmd = qr::generate(data, level, module_size)?;
    sink.write_bytes(&cmd)
}

/// Print a 1D barcode.
///
/// The data length byte is derived from `data`; data must be 1-255 bytes.
pub fn print_barcode<S: Sink + ?Sized>(
    sink: &mut S,
    data: &[u8],
    symbology: Symbology,
    height: u8,
    width: u8,
    font: HriFont,
    position: HriPosition,
) -> Result<(), EscPosError> {
    let cmd = barcode1d::generate(data, symbology, height, width, font, position)?;
    sink.write_bytes(&cmd)
}

/// Print a PDF417 symbol.
///
/// `row_height` is the vertical module size (2-8), `module_width` the
/// horizontal one (1-4).
#[allow(clippy::too_many_arguments)]
pub fn print_pdf417<S: Sink + ?Sized>(
    sink: &mut S,
    data: &[u8],
    kind: Pdf417Type,
    row_height: u8,
    module_width: u8,
    columns: u8,
    rows: u8,
    error_level: u8,
) -> Result<(), EscPosError> {
    let cmd = pdf417::generate(
        data,
        kind,
        row_height,
        module_width,
        columns,
        rows,
        error_level,
    )?;
    sink.write_bytes(&cmd)
}

// ============================================================================
// GLYPHS
// ============================================================================

/// Send a column bit image (ESC *) in mode 0, 1, 32 or 33.
pub fn store_custom_char<S: Sink + ?Sized>(
    sink: &mut S,
    columns: &[u8],
    mode: u8,
) -> Result<(), EscPosError> {
    let cmd = glyph::store_custom_char(columns, mode)?;
    sink.write_bytes(&cmd)
}

// ============================================================================
// PHYSICAL ACTIONS
// ============================================================================

/// Full cut (GS V 48 0).
pub fn cut<S: Sink + ?Sized>(sink: &mut S) -> Result<(), EscPosError> {
    sink.write_bytes(&commands::cut())
}

pub fn feed_and_cut<S: Sink + ?Sized>(sink: &mut S, lines: u8) -> Result<(), EscPosError> {
    sink.write_bytes(&commands::feed_and_cut(lines))
}

/// Sound the buzzer with the single built-in profile.
pub fn beep<S: Sink + ?Sized>(sink: &mut S) -> Result<(), EscPosError> {
    sink.write_bytes(&commands::beep())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_text_appends_line_feed() {
        let mut out = Vec::new();
        print_text(&mut out, "Hi").unwrap();
        assert_eq!(out, vec![b'H', b'i', 0x0A]);
    }

    #[test]
    fn test_print_and_feed_has_no_line_feed() {
        let mut out = Vec::new();
        print_and_feed(&mut out, "Hi", 3).unwrap();
        assert_eq!(out, vec![b'H', b'i', 0x1B, b'd', 3]);
    }

    #[test]
    fn test_store_and_print_storage() {
        let mut out = Vec::new();
        store_byte(&mut out, 178).unwrap();
        store_text(&mut out, "ok").unwrap();
        print_storage(&mut out).unwrap();
        assert_eq!(out, vec![178, b'o', b'k', 0x0A]);
    }

    #[test]
    fn test_rejected_underline_writes_nothing() {
        let mut out = vec![0xEE];
        assert!(set_underline(&mut out, 3).is_err());
        assert_eq!(out, vec![0xEE]);
    }

    #[test]
    fn test_rejected_qr_writes_nothing() {
        let mut out = Vec::new();
        assert!(print_qr(&mut out, b"ABC", QrErrorLevel::H, 17).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_setters_are_not_cached() {
        let mut out = Vec::new();
        set_bold(&mut out, true).unwrap();
        set_bold(&mut out, true).unwrap();
        assert_eq!(out, vec![0x1B, b'E', 1, 0x1B, b'E', 1]);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
