//! # ESC/POS Protocol Implementation
//!
//! Pure command builders: each function returns the exact byte sequence
//! for one ESC/POS command and never writes anywhere.
//!
//! ## Module Structure
//!
//! - [`commands`]: Initialization, feed, cut, buzzer
//! - [`text`]: Bold, inverse, underline, justification, line spacing
//! - [`barcode`]: 1D barcodes, QR codes and PDF417
//! - [`glyph`]: Custom glyph storage
//! - [`cp437`]: Text encoding for the printer's default code page
//!
//! ## Usage Example
//!
//! ```
//! use escpos_serial::protocol::{barcode::qr, commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::justification(text::Justification::Center));
//! data.extend(text::bold(true));
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold(false));
//! data.extend(qr::generate(b"https://example.com", qr::QrErrorLevel::M, 6)?);
//! data.extend(commands::feed_and_cut(4));
//! # Ok::<(), escpos_serial::EscPosError>(())
//! ```

pub mod barcode;
pub mod commands;
pub mod cp437;
pub mod glyph;
pub mod text;
