//! # Printer Module
//!
//! Connection settings for serial printers.
//!
//! ## Modules
//!
//! - [`config`]: Device, line speed, text encoding and write chunking

pub mod config;

pub use config::PrinterConfig;
