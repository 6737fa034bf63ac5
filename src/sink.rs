//! # Output Sinks
//!
//! A [`Sink`] is the byte-accepting end of the printer connection. The
//! encoder borrows one for the duration of each call and never opens,
//! configures or closes it.
//!
//! | Sink | Use |
//! |------|-----|
//! | `Vec<u8>` | capture bytes in memory (tests, hex dumps, files) |
//! | [`WriteSink`] | any `std::io::Write` with a chosen [`TextEncoding`] |
//! | [`SerialTransport`](crate::transport::SerialTransport) | a raw-mode TTY |
//!
//! ## Concurrency
//!
//! Sinks are driven through `&mut`, so one sink cannot be written from two
//! threads at once without the caller wrapping it in a lock. A caller that
//! does share a sink must hold the lock for a whole encoder call; otherwise
//! the bytes of concurrent commands interleave.

use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::EscPosError;
use crate::protocol::cp437;

/// Byte-accepting endpoint for encoded commands.
///
/// Only [`write_bytes`](Sink::write_bytes) is required. The default
/// [`write_text`](Sink::write_text) sends the UTF-8 bytes unchanged.
pub trait Sink {
    /// Write a run of raw bytes.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), EscPosError>;

    /// Write one raw byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), EscPosError> {
        self.write_bytes(&[byte])
    }

    /// Write text, encoded the way this sink is configured to encode it.
    fn write_text(&mut self, text: &str) -> Result<(), EscPosError> {
        self.write_bytes(text.as_bytes())
    }
}

impl Sink for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), EscPosError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), EscPosError> {
        (**self).write_bytes(bytes)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), EscPosError> {
        (**self).write_byte(byte)
    }

    fn write_text(&mut self, text: &str) -> Result<(), EscPosError> {
        (**self).write_text(text)
    }
}

// ============================================================================
// TEXT ENCODING
// ============================================================================

/// How text is turned into bytes before it reaches the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// UTF-8 bytes, unchanged
    Utf8,
    /// 7-bit ASCII; anything else becomes `?`
    Ascii,
    /// Code page 437, the power-on default of most ESC/POS printers
    #[default]
    Cp437,
}

impl TextEncoding {
    /// Encode `text` for the printer.
    ///
    /// ```
    /// use escpos_serial::sink::TextEncoding;
    ///
    /// assert_eq!(TextEncoding::Cp437.encode("Año").as_ref(), &[0x41, 0xA4, 0x6F]);
    /// assert_eq!(TextEncoding::Ascii.encode("Año").as_ref(), b"A?o");
    /// ```
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        match self {
            Self::Utf8 => Cow::Borrowed(text.as_bytes()),
            Self::Ascii if text.is_ascii() => Cow::Borrowed(text.as_bytes()),
            Self::Ascii => Cow::Owned(
                text.chars()
                    .map(|ch| if ch.is_ascii() { ch as u8 } else { b'?' })
                    .collect(),
            ),
            Self::Cp437 => Cow::Owned(cp437::encode(text)),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "ascii" => Ok(Self::Ascii),
            "cp437" => Ok(Self::Cp437),
            other => Err(format!(
                "unknown text encoding '{other}' (expected utf8, ascii or cp437)"
            )),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Utf8 => "utf8",
            Self::Ascii => "ascii",
            Self::Cp437 => "cp437",
        })
    }
}

// ============================================================================
// WRITE ADAPTER
// ============================================================================

/// Adapts any [`std::io::Write`] into a [`Sink`].
///
/// ```
/// use escpos_serial::sink::{Sink, TextEncoding, WriteSink};
///
/// let mut sink = WriteSink::new(Vec::new(), TextEncoding::Cp437);
/// sink.write_text("°C")?;
/// assert_eq!(sink.into_inner(), vec![0xF8, b'C']);
/// # Ok::<(), escpos_serial::EscPosError>(())
/// ```
pub struct WriteSink<W: Write> {
    inner: W,
    encoding: TextEncoding,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W, encoding: TextEncoding) -> Self {
        Self { inner, encoding }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), EscPosError> {
        self.inner
            .flush()
            .map_err(|e| EscPosError::Transport(format!("Flush failed: {}", e)))
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), EscPosError> {
        self.inner
            .write_all(bytes)
            .map_err(|e| EscPosError::Transport(format!("Write failed: {}", e)))
    }

    fn write_text(&mut self, text: &str) -> Result<(), EscPosError> {
        let bytes = self.encoding.encode(text);
        self.write_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_vec_sink() {
        let mut out = Vec::new();
        out.write_byte(0x1B).unwrap();
        out.write_bytes(b"@").unwrap();
        out.write_text("hi").unwrap();
        assert_eq!(out, vec![0x1B, 0x40, b'h', b'i']);
    }

    #[test]
    fn test_mut_ref_sink_delegates() {
        fn emit<S: Sink>(mut sink: S) {
            sink.write_text("ok").unwrap();
        }

        let mut out = Vec::new();
        emit(&mut out);
        assert_eq!(out, b"ok");
    }

    #[test]
    fn test_encodings() {
        assert_eq!(TextEncoding::Utf8.encode("é").as_ref(), "é".as_bytes());
        assert_eq!(TextEncoding::Ascii.encode("é!").as_ref(), b"?!");
        assert_eq!(TextEncoding::Cp437.encode("é").as_ref(), &[0x82]);
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("UTF-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("ascii".parse::<TextEncoding>().unwrap(), TextEncoding::Ascii);
        assert_eq!("cp437".parse::<TextEncoding>().unwrap(), TextEncoding::Cp437);
        assert!("latin1".parse::<TextEncoding>().is_err());
        assert_eq!(TextEncoding::Cp437.to_string(), "cp437");
    }

    #[test]
    fn test_write_sink_uses_encoding_for_text_only() {
        let mut sink = WriteSink::new(Vec::new(), TextEncoding::Ascii);
        sink.write_text("ñ").unwrap();
        sink.write_byte(0xA4).unwrap();
        assert_eq!(sink.into_inner(), vec![b'?', 0xA4]);
    }

    #[test]
    fn test_write_sink_maps_io_errors() {
        let mut sink = WriteSink::new(BrokenPipe, TextEncoding::Utf8);
        let err = sink.write_bytes(&[0x1B, 0x40]).unwrap_err();
        assert!(matches!(err, EscPosError::Transport(ref msg) if msg.contains("device unplugged")));
    }
}
