//! # Parameter Validation
//!
//! Every range-constrained command parameter passes through [`check_range`]
//! or [`check_one_of`] before the command is encoded. A failed check returns
//! [`EscPosError::ParameterOutOfRange`] and no bytes are produced, so an
//! invalid value can never reach the printer.
//!
//! Length fields are derived from the actual payload with [`derive_len`],
//! never accepted from the caller.

use std::ops::RangeInclusive;

use crate::error::EscPosError;

/// Check that `value` lies within `range`.
///
/// ```
/// use escpos_serial::params::check_range;
///
/// assert_eq!(check_range("GS w", "width", 3, 2..=6, "2..=6").unwrap(), 3);
/// assert!(check_range("GS w", "width", 7, 2..=6, "2..=6").is_err());
/// ```
pub fn check_range(
    command: &'static str,
    parameter: &'static str,
    value: u8,
    range: RangeInclusive<u8>,
    expected: &'static str,
) -> Result<u8, EscPosError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(EscPosError::ParameterOutOfRange {
            command,
            parameter,
            value: value as usize,
            expected,
        })
    }
}

/// Check that `value` is one of `allowed`.
pub fn check_one_of(
    command: &'static str,
    parameter: &'static str,
    value: u8,
    allowed: &[u8],
    expected: &'static str,
) -> Result<u8, EscPosError> {
    if allowed.contains(&value) {
        Ok(value)
    } else {
        Err(EscPosError::ParameterOutOfRange {
            command,
            parameter,
            value: value as usize,
            expected,
        })
    }
}

/// Derive a single-byte length field from a payload.
///
/// Fails with [`EscPosError::LengthMismatch`] when the payload is longer
/// than `max` (at most 255), instead of truncating it.
pub fn derive_len(command: &'static str, payload: &[u8], max: usize) -> Result<u8, EscPosError> {
    let max = max.min(u8::MAX as usize);
    if payload.len() > max {
        return Err(EscPosError::LengthMismatch {
            command,
            length: payload.len(),
            max,
        });
    }
    Ok(payload.len() as u8)
}
