//! # Custom Glyph Storage (ESC *)
//!
//! Sends a column-oriented bit image: each byte is one vertical slice of
//! 8 dots, and 24-dot modes use three consecutive bytes per column.
//!
//! | Mode | Dots per column | Density |
//! |------|-----------------|---------|
//! | 0 | 8 | single |
//! | 1 | 8 | double |
//! | 32 | 24 | single |
//! | 33 | 24 | double |

use super::commands::{ESC, NUL};
use crate::error::EscPosError;
use crate::params;

/// Modes accepted by [`store_custom_char`].
pub const MODES: [u8; 4] = [0, 1, 32, 33];

/// Bytes per column for a given mode.
fn bytes_per_column(mode: u8) -> usize {
    if mode >= 32 { 3 } else { 1 }
}

/// # Store Custom Character (ESC * m nL nH d1...dk)
///
/// `nL` is the column count derived from `columns`: its length for the
/// 8-dot modes, its length / 3 for the 24-dot modes. `nH` is always 0.
///
/// ## Errors
///
/// - `mode` not in {0, 1, 32, 33}: `ParameterOutOfRange`
/// - 24-dot mode with a byte count that is not a multiple of 3:
///   `ParameterOutOfRange`
/// - more than 255 columns: `LengthMismatch`
///
/// ## Example
///
/// ```
/// use escpos_serial::protocol::glyph;
///
/// let cmd = glyph::store_custom_char(&[0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00], 33).unwrap();
/// assert_eq!(&cmd[..5], &[0x1B, b'*', 33, 2, 0]);
/// ```
pub fn store_custom_char(columns: &[u8], mode: u8) -> Result<Vec<u8>, EscPosError> {
    let mode = params::check_one_of("ESC *", "mode", mode, &MODES, "0, 1, 32 or 33")?;

    let per_column = bytes_per_column(mode);
    if columns.len() % per_column != 0 {
        return Err(EscPosError::ParameterOutOfRange {
            command: "ESC *",
            parameter: "column byte count",
            value: columns.len(),
            expected: "a multiple of 3 for 24-dot modes",
        });
    }

    let count = columns.len() / per_column;
    if count > u8::MAX as usize {
        return Err(EscPosError::LengthMismatch {
            command: "ESC *",
            length: count,
            max: u8::MAX as usize,
        });
    }

    let mut cmd = Vec::with_capacity(5 + columns.len());
    cmd.extend_from_slice(&[ESC, b'*', mode, count as u8, NUL]);
    cmd.extend_from_slice(columns);
    Ok(cmd)
}
