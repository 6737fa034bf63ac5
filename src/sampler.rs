//! # Sample Sheet
//!
//! Prints one line per supported style so a printer's behavior can be
//! checked at a glance. Each line's text names the call that styled it.

use crate::encoder::{self, VERSION};
use crate::error::EscPosError;
use crate::protocol::barcode::qr::QrErrorLevel;
use crate::protocol::text::Justification;
use crate::sink::Sink;

/// URL encoded in the sample QR code.
pub const SAMPLE_QR: &str = "https://example.com/escpos-serial";

/// CP437 shade glyphs, darkest first.
const SHADES: [u8; 3] = [178, 177, 176];

/// Write the sample sheet to `sink`.
pub fn print_sampler<S: Sink + ?Sized>(sink: &mut S) -> Result<(), EscPosError> {
    encoder::reset_to_default(sink)?;
    encoder::init(sink)?;

    for shade in SHADES {
        encoder::store_byte(sink, shade)?;
    }
    encoder::store_text(sink, "Hello World")?;
    encoder::print_storage(sink)?;

    encoder::print_text(sink, "print_text()")?;

    encoder::set_bold(sink, true)?;
    encoder::print_text(sink, "set_bold(true)")?;
    encoder::set_bold(sink, false)?;

    encoder::set_underline(sink, 1)?;
    encoder::print_text(sink, "set_underline(1)")?;
    encoder::set_underline(sink, 2)?;
    encoder::print_text(sink, "set_underline(2)")?;
    encoder::set_underline(sink, 0)?;

    encoder::set_inverse(sink, true)?;
    encoder::print_text(sink, "set_inverse(true)")?;
    encoder::set_inverse(sink, false)?;

    encoder::set_justification(sink, Justification::Left)?;
    encoder::print_text(sink, "set_justification(Left)\n(default)")?;
    encoder::set_justification(sink, Justification::Center)?;
    encoder::print_text(sink, "set_justification(Center)")?;
    encoder::set_justification(sink, Justification::Right)?;
    encoder::print_text(sink, "set_justification(Right)")?;

    encoder::set_justification(sink, Justification::Center)?;
    encoder::print_qr(sink, SAMPLE_QR.as_bytes(), QrErrorLevel::H, 8)?;
    encoder::print_and_feed(sink, &format!("\nescpos-serial {}", VERSION), 4)?;

    encoder::reset_to_default(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{barcode::qr, commands, text};

    fn sampler_bytes() -> Vec<u8> {
        let mut out = Vec::new();
        print_sampler(&mut out).unwrap();
        out
    }

    #[test]
    fn test_starts_with_reset_then_init() {
        let out = sampler_bytes();
        let reset = text::reset_to_default();
        assert_eq!(&out[..reset.len()], reset.as_slice());
        assert_eq!(&out[reset.len()..reset.len() + 2], commands::init().as_slice());
        assert_eq!(&out[reset.len() + 2..reset.len() + 5], &SHADES);
    }

    #[test]
    fn test_ends_with_feed_and_reset() {
        let out = sampler_bytes();
        let mut tail = commands::feed(4);
        tail.extend(text::reset_to_default());
        assert!(out.ends_with(&tail));
    }

    #[test]
    fn test_contains_qr_code() {
        let out = sampler_bytes();
        let symbol = qr::generate(SAMPLE_QR.as_bytes(), QrErrorLevel::H, 8).unwrap();
        assert!(out.windows(symbol.len()).any(|w| w == symbol.as_slice()));
    }
}
