//! # ESC/POS Text Styling Commands
//!
//! Stateless style setters. The printer firmware holds each setting until it
//! is changed again or the printer is reset with `ESC @`; the host keeps no
//! record of the current style.
//!
//! | Style | Command | Parameter |
//! |-------|---------|-----------|
//! | Bold | ESC E n | 0 = off, 1 = on |
//! | Inverse | GS B n | 0 = off, 1 = on |
//! | Underline | ESC - n | 0 = none, 1 = 1-dot, 2 = 2-dot |
//! | Justification | ESC a n | 0 = left, 1 = center, 2 = right |
//! | Line spacing | ESC 3 n | n motion units (0-255) |
//!
//! ## Text Alignment
//!
//! ```text
//! Left (default)    |LEFT TEXT
//! Center            |  CENTER TEXT
//! Right             |      RIGHT TEXT
//! ```

use super::commands::{ESC, GS};
use crate::error::EscPosError;
use crate::params;

// ============================================================================
// EMPHASIS AND INVERSE
// ============================================================================

/// # Set Bold (ESC E n)
///
/// ## Example
///
/// ```
/// use escpos_serial::protocol::text;
///
/// assert_eq!(text::bold(true), vec![0x1B, b'E', 1]);
/// assert_eq!(text::bold(false), vec![0x1B, b'E', 0]);
/// ```
#[inline]
pub fn bold(enabled: bool) -> Vec<u8> {
    vec![ESC, b'E', enabled as u8]
}

/// # Set White-on-Black Printing (GS B n)
#[inline]
pub fn inverse(enabled: bool) -> Vec<u8> {
    vec![GS, b'B', enabled as u8]
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// # Set Underline (ESC - n)
///
/// ## Parameters
///
/// - `0`: no underline
/// - `1`: single weight (1-dot) underline
/// - `2`: double weight (2-dot) underline
///
/// Any other value is rejected with [`EscPosError::ParameterOutOfRange`].
///
/// ## Example
///
/// ```
/// use escpos_serial::protocol::text;
///
/// assert_eq!(text::underline(2).unwrap(), vec![0x1B, b'-', 2]);
/// assert!(text::underline(3).is_err());
/// ```
pub fn underline(level: u8) -> Result<Vec<u8>, EscPosError> {
    let n = params::check_range("ESC -", "level", level, 0..=2, "0..=2")?;
    Ok(vec![ESC, b'-', n])
}

// ============================================================================
// JUSTIFICATION
// ============================================================================

/// Line justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl TryFrom<u8> for Justification {
    type Error = EscPosError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match params::check_range("ESC a", "justification", value, 0..=2, "0..=2")? {
            0 => Ok(Self::Left),
            1 => Ok(Self::Center),
            _ => Ok(Self::Right),
        }
    }
}

/// # Set Justification (ESC a n)
///
/// Takes effect at the start of the next line.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC a n  |
/// | Hex     | 1B 61 n  |
/// | Decimal | 27 97 n  |
pub fn justification(justification: Justification) -> Vec<u8> {
    vec![ESC, b'a', justification as u8]
}

// ============================================================================
// LINE SPACING
// ============================================================================

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the line spacing to `n` vertical motion units. The size of one unit
/// is defined by the printer firmware.
#[inline]
pub fn line_spacing(units: u8) -> Vec<u8> {
    vec![ESC, b'3', units]
}

// ============================================================================
// RESET
// ============================================================================

/// Turn every style this library sets back off.
///
/// Emits, in order: inverse off, bold off, underline 0, justification left.
/// This is a convenience sequence, not a firmware reset; use
/// [`init`](super::commands::init) for that.
pub fn reset_to_default() -> Vec<u8> {
    let mut out = inverse(false);
    out.extend(bold(false));
    out.extend([ESC, b'-', 0]);
    out.extend(justification(Justification::Left));
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(bold(true), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold(false), vec![0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(inverse(true), vec![0x1D, 0x42, 0x01]);
        assert_eq!(inverse(false), vec![0x1D, 0x42, 0x00]);
    }

    #[test]
    fn test_underline_valid_levels() {
        for level in 0..=2 {
            assert_eq!(underline(level).unwrap(), vec![0x1B, 0x2D, level]);
        }
    }

    #[test]
    fn test_underline_rejects_out_of_range() {
        for level in [3, 48, 255] {
            assert!(matches!(
                underline(level),
                Err(EscPosError::ParameterOutOfRange { value, .. }) if value == level as usize
            ));
        }
    }

    #[test]
    fn test_justification() {
        assert_eq!(justification(Justification::Left), vec![0x1B, 0x61, 0]);
        assert_eq!(justification(Justification::Center), vec![0x1B, 0x61, 1]);
        assert_eq!(justification(Justification::Right), vec![0x1B, 0x61, 2]);
    }

    #[test]
    fn test_justification_try_from() {
        assert_eq!(Justification::try_from(1).unwrap(), Justification::Center);
        assert_eq!(Justification::try_from(2).unwrap(), Justification::Right);
        assert!(Justification::try_from(3).is_err());
    }

    #[test]
    fn test_line_spacing() {
        assert_eq!(line_spacing(30), vec![0x1B, 0x33, 30]);
    }

    #[test]
    fn test_reset_to_default_order() {
        assert_eq!(
            reset_to_default(),
            vec![
                0x1D, 0x42, 0x00, // inverse off
                0x1B, 0x45, 0x00, // bold off
                0x1B, 0x2D, 0x00, // underline 0
                0x1B, 0x61, 0x00, // left
            ]
        );
    }
}
