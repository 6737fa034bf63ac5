//! # Printer Configuration
//!
//! Connection settings for a serial ESC/POS printer. These are transport
//! concerns: the encoder never reads them.
//!
//! ## Usage
//!
//! ```
//! use escpos_serial::printer::PrinterConfig;
//!
//! let config = PrinterConfig::GENERIC_SERIAL;
//! println!("{} at {} baud", config.device, config.baud_rate);
//! ```
//!
//! A configuration can also be loaded from JSON; missing fields fall back to
//! [`PrinterConfig::GENERIC_SERIAL`]:
//!
//! ```
//! use escpos_serial::printer::PrinterConfig;
//!
//! let config = PrinterConfig::from_json(r#"{"device": "/dev/ttyS0", "baud_rate": 19200}"#)?;
//! assert_eq!(config.baud_rate, 19200);
//! # Ok::<(), escpos_serial::EscPosError>(())
//! ```

use std::borrow::Cow;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::EscPosError;
use crate::sink::TextEncoding;

/// # Printer Configuration
///
/// | Field | Meaning |
/// |-------|---------|
/// | `device` | TTY path |
/// | `baud_rate` | line speed |
/// | `encoding` | how text is converted to bytes |
/// | `chunk_size` | largest single write, in bytes |
/// | `chunk_delay_ms` | pause between chunks of a large write |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Printer model or label
    pub name: Cow<'static, str>,

    /// Serial device path
    pub device: Cow<'static, str>,

    /// Line speed in baud
    pub baud_rate: u32,

    /// Text encoding applied by the transport
    pub encoding: TextEncoding,

    /// Maximum bytes per write call
    pub chunk_size: usize,

    /// Delay between chunks, in milliseconds
    pub chunk_delay_ms: u64,
}

impl PrinterConfig {
    /// # Generic Serial Printer
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Device | /dev/ttyUSB0 |
    /// | Speed | 9600 baud, 8N1 |
    /// | Text | CP437 |
    /// | Chunks | 4096 bytes, no delay |
    pub const GENERIC_SERIAL: Self = Self {
        name: Cow::Borrowed("Generic ESC/POS (serial)"),
        device: Cow::Borrowed("/dev/ttyUSB0"),
        baud_rate: 9600,
        encoding: TextEncoding::Cp437,
        chunk_size: 4096,
        chunk_delay_ms: 0,
    };

    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, EscPosError> {
        serde_json::from_str(json).map_err(|e| EscPosError::Config(e.to_string()))
    }

    /// Load a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EscPosError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    #[inline]
    pub fn chunk_delay(&self) -> Duration {
        Duration::from_millis(self.chunk_delay_ms)
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::GENERIC_SERIAL
    }
}
