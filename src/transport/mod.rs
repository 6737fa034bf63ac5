//! # Printer Transport Layer
//!
//! Byte transports that implement [`Sink`](crate::sink::Sink). The encoder
//! only ever borrows them.
//!
//! ## Available Transports
//!
//! - [`serial`]: raw-mode TTY (USB-serial adapters, RS-232, `/dev/rfcomm*`)

pub mod serial;

pub use serial::SerialTransport;
