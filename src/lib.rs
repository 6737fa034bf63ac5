//! # escpos-serial - ESC/POS Command Encoder
//!
//! escpos-serial turns printer operations (print text, cut, set a style,
//! print a barcode or QR code) into the exact ESC/POS byte sequences a
//! thermal receipt printer expects, and writes them to a serial port.
//!
//! - **Protocol implementation**: pure ESC/POS command builders
//! - **Encoder**: one function per printer operation, parameterized by sink
//! - **Validation**: out-of-range parameters are rejected before any byte is written
//! - **Transport**: raw-mode serial TTY
//!
//! ## Quick Start
//!
//! ```no_run
//! use escpos_serial::{
//!     encoder,
//!     protocol::barcode::qr::QrErrorLevel,
//!     protocol::text::Justification,
//!     PrinterConfig, SerialTransport,
//! };
//!
//! let mut printer = SerialTransport::open(&PrinterConfig::GENERIC_SERIAL)?;
//!
//! encoder::init(&mut printer)?;
//! encoder::set_justification(&mut printer, Justification::Center)?;
//! encoder::set_bold(&mut printer, true)?;
//! encoder::print_text(&mut printer, "RECEIPT")?;
//! encoder::reset_to_default(&mut printer)?;
//! encoder::print_qr(&mut printer, b"https://example.com", QrErrorLevel::M, 6)?;
//! encoder::feed_and_cut(&mut printer, 4)?;
//!
//! # Ok::<(), escpos_serial::EscPosError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`encoder`] | Operations written to a [`Sink`] |
//! | [`command`] | Command values and JSON print jobs |
//! | [`sink`] | The `Sink` trait and text encodings |
//! | [`transport`] | Serial port backend |
//! | [`printer`] | Printer connection settings |
//! | [`params`] | Parameter range checks |
//! | [`error`] | Error types |
//!
//! ## Threading
//!
//! Everything is synchronous. Encoder calls take the sink by `&mut`; callers
//! sharing one printer between threads must serialize whole calls.

pub mod command;
pub mod encoder;
pub mod error;
pub mod params;
pub mod printer;
pub mod protocol;
pub mod sampler;
pub mod sink;
pub mod transport;

// Re-exports for convenience
pub use command::{Command, Job};
pub use error::EscPosError;
pub use printer::PrinterConfig;
pub use sink::{Sink, TextEncoding, WriteSink};
pub use transport::SerialTransport;
