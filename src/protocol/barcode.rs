//! # ESC/POS Barcode Commands
//!
//! This module implements 1D barcodes and the two 2D symbologies.
//!
//! ## Supported Barcode Types
//!
//! | Type | Commands | Notes |
//! |------|----------|-------|
//! | 1D (UPC, EAN, Code39, ...) | GS H, GS f, GS h, GS w, GS k | length-prefixed data |
//! | QR Code | GS ( k, cn = 49 | store, error level, module size, print |
//! | PDF417 | GS ( k, cn = 48 | store, size, error level, type, print |
//!
//! ## QR Code Usage
//!
//! ```
//! use escpos_serial::protocol::barcode::qr::{self, QrErrorLevel};
//!
//! let cmd = qr::generate(b"https://example.com", QrErrorLevel::M, 6).unwrap();
//! assert_eq!(&cmd[..3], &[0x1D, b'(', b'k']);
//! ```
//!
//! ## 1D Barcode Usage
//!
//! ```
//! use escpos_serial::protocol::barcode::barcode1d::{self, HriFont, HriPosition, Symbology};
//!
//! let cmd = barcode1d::generate(
//!     b"HELLO123",
//!     Symbology::Code39,
//!     80,
//!     3,
//!     HriFont::A,
//!     HriPosition::Below,
//! )
//! .unwrap();
//! ```
//!
//! Every builder validates its parameters first and returns
//! [`EscPosError`](crate::EscPosError) instead of emitting a command the
//! firmware would misinterpret.

use super::commands::GS;

// ============================================================================
// GS ( k FRAMING
// ============================================================================

/// Framing shared by the `GS ( k` 2D symbol commands.
///
/// ```text
/// GS ( k pL pH cn fn [payload...]
/// ```
///
/// `pL` counts every byte after `pL pH`: `cn`, `fn` and the payload.
/// `pH` is always 0, so a single sub-command carries at most 253 payload
/// bytes. Longer payloads fail with `LengthMismatch` rather than being
/// split across `pH`.
pub mod framing {
    use super::GS;
    use crate::error::EscPosError;
    use crate::params;

    /// Largest value `pL` may take with `pH` fixed at 0.
    pub const MAX_BODY: usize = u8::MAX as usize;

    /// Build one `GS ( k` sub-command.
    ///
    /// ```
    /// use escpos_serial::protocol::barcode::framing::gs_k;
    ///
    /// assert_eq!(
    ///     gs_k(49, 81, &[48]).unwrap(),
    ///     vec![0x1D, b'(', b'k', 3, 0, 49, 81, 48]
    /// );
    /// ```
    pub fn gs_k(cn: u8, function: u8, payload: &[u8]) -> Result<Vec<u8>, EscPosError> {
        let mut body = Vec::with_capacity(2 + payload.len());
        body.push(cn);
        body.push(function);
        body.extend_from_slice(payload);

        let p_l = params::derive_len("GS ( k", &body, MAX_BODY)?;

        let mut cmd = Vec::with_capacity(5 + body.len());
        cmd.extend_from_slice(&[GS, b'(', b'k', p_l, 0]);
        cmd.extend(body);
        Ok(cmd)
    }
}

// ============================================================================
// 1D BARCODE COMMANDS (GS H / GS f / GS h / GS w / GS k)
// ============================================================================

/// 1D Barcode command builders
///
/// A 1D barcode is printed by four setting commands followed by the
/// `GS k` trigger. The firmware applies each setting independently, so the
/// settings must precede the trigger.
pub mod barcode1d {
    use super::GS;
    use crate::error::EscPosError;
    use crate::params;

    /// Barcode symbology (the `m` byte of `GS k m n d1...dn`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum Symbology {
        /// UPC-A (11-12 digits)
        UpcA = 65,
        /// UPC-E
        UpcE = 66,
        /// JAN13 / EAN-13
        Ean13 = 67,
        /// JAN8 / EAN-8
        Ean8 = 68,
        /// CODE39
        Code39 = 69,
        /// ITF (Interleaved 2 of 5, even digit count)
        Itf = 70,
        /// CODABAR (NW-7)
        Codabar = 71,
        /// CODE93
        Code93 = 72,
        /// CODE128
        Code128 = 73,
    }

    impl TryFrom<u8> for Symbology {
        type Error = EscPosError;

        fn try_from(value: u8) -> Result<Self, Self::Error> {
            let m = params::check_range("GS k", "symbology", value, 65..=73, "65..=73")?;
            Ok(match m {
                65 => Self::UpcA,
                66 => Self::UpcE,
                67 => Self::Ean13,
                68 => Self::Ean8,
                69 => Self::Code39,
                70 => Self::Itf,
                71 => Self::Codabar,
                72 => Self::Code93,
                _ => Self::Code128,
            })
        }
    }

    /// HRI (Human Readable Interpretation) position
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum HriPosition {
        /// Not printed
        None = 0,
        /// Above the barcode
        Above = 1,
        /// Below the barcode
        #[default]
        Below = 2,
        /// Above and below
        Both = 3,
    }

    impl TryFrom<u8> for HriPosition {
        type Error = EscPosError;

        fn try_from(value: u8) -> Result<Self, Self::Error> {
            Ok(match params::check_range("GS H", "position", value, 0..=3, "0..=3")? {
                0 => Self::None,
                1 => Self::Above,
                2 => Self::Below,
                _ => Self::Both,
            })
        }
    }

    /// HRI font
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum HriFont {
        #[default]
        A = 0,
        B = 1,
    }

    impl TryFrom<u8> for HriFont {
        type Error = EscPosError;

        fn try_from(value: u8) -> Result<Self, Self::Error> {
            Ok(match params::check_range("GS f", "font", value, 0..=1, "0 or 1")? {
                0 => Self::A,
                _ => Self::B,
            })
        }
    }

    /// Largest data length the single `n` byte can describe.
    pub const MAX_DATA_LEN: usize = 255;

    /// # Select HRI Position (GS H n)
    #[inline]
    pub fn hri_position(position: HriPosition) -> Vec<u8> {
        vec![GS, b'H', position as u8]
    }

    /// # Select HRI Font (GS f n)
    #[inline]
    pub fn hri_font(font: HriFont) -> Vec<u8> {
        vec![GS, b'f', font as u8]
    }

    /// # Set Barcode Height (GS h n)
    ///
    /// Height in dots, 1-255.
    pub fn height(dots: u8) -> Result<Vec<u8>, EscPosError> {
        let n = params::check_range("GS h", "height", dots, 1..=255, "1..=255")?;
        Ok(vec![GS, b'h', n])
    }

    /// # Set Module Width (GS w n)
    ///
    /// Narrowest bar width in dots, 2-6. Wide values may push the symbol
    /// past the paper edge, in which case the printer skips it.
    pub fn width(dots: u8) -> Result<Vec<u8>, EscPosError> {
        let n = params::check_range("GS w", "width", dots, 2..=6, "2..=6")?;
        Ok(vec![GS, b'w', n])
    }

    /// # Print Barcode (GS k m n d1...dn)
    ///
    /// `n` is always derived from `data`; it cannot be supplied separately.
    ///
    /// ## Errors
    ///
    /// - empty `data`: `ParameterOutOfRange`
    /// - more than 255 bytes: `LengthMismatch`
    pub fn print(symbology: Symbology, data: &[u8]) -> Result<Vec<u8>, EscPosError> {
        if data.is_empty() {
            return Err(EscPosError::ParameterOutOfRange {
                command: "GS k",
                parameter: "data length",
                value: 0,
                expected: "1..=255",
            });
        }
        let n = params::derive_len("GS k", data, MAX_DATA_LEN)?;

        let mut cmd = Vec::with_capacity(4 + data.len());
        cmd.extend_from_slice(&[GS, b'k', symbology as u8, n]);
        cmd.extend_from_slice(data);
        Ok(cmd)
    }

    /// # Complete 1D Barcode
    ///
    /// Emits, in order: `GS H`, `GS f`, `GS h`, `GS w`, `GS k`.
    ///
    /// ## Example
    ///
    /// ```
    /// use escpos_serial::protocol::barcode::barcode1d::{self, HriFont, HriPosition, Symbology};
    ///
    /// let cmd = barcode1d::generate(b"12345", Symbology::Code128, 100, 2, HriFont::A, HriPosition::None)
    ///     .unwrap();
    /// assert_eq!(&cmd[12..], &[0x1D, b'k', 73, 5, b'1', b'2', b'3', b'4', b'5']);
    /// ```
    pub fn generate(
        data: &[u8],
        symbology: Symbology,
        height_dots: u8,
        width_dots: u8,
        font: HriFont,
        position: HriPosition,
    ) -> Result<Vec<u8>, EscPosError> {
        let height_cmd = height(height_dots)?;
        let width_cmd = width(width_dots)?;
        let trigger = print(symbology, data)?;

        let mut cmd = hri_position(position);
        cmd.extend(hri_font(font));
        cmd.extend(height_cmd);
        cmd.extend(width_cmd);
        cmd.extend(trigger);
        Ok(cmd)
    }
}

// ============================================================================
// QR CODE COMMANDS (GS ( k, cn = 49)
// ============================================================================

/// QR Code command builders
///
/// A QR symbol is stored in the printer's symbol buffer, configured, then
/// printed:
///
/// | Step | fn | Payload |
/// |------|----|---------|
/// | Store data | 80 | 48, data... |
/// | Error correction | 69 | level (48-51) |
/// | Module size | 67 | dots (1-16) |
/// | Print | 81 | 48 |
pub mod qr {
    use super::framing::{self, MAX_BODY};
    use crate::error::EscPosError;
    use crate::params;

    /// Symbology selector for QR within the `GS ( k` family
    pub const CN: u8 = 49;

    /// Largest data length a single store command can carry.
    pub const MAX_DATA_LEN: usize = MAX_BODY - 3;

    /// QR error correction level
    ///
    /// | Level | Recovery |
    /// |-------|----------|
    /// | L | ~7% |
    /// | M | ~15% |
    /// | Q | ~25% |
    /// | H | ~30% |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[repr(u8)]
    pub enum QrErrorLevel {
        L = 48,
        #[default]
        M = 49,
        Q = 50,
        H = 51,
    }

    impl TryFrom<u8> for QrErrorLevel {
        type Error = EscPosError;

        fn try_from(value: u8) -> Result<Self, Self::Error> {
            let n = params::check_range("GS ( k", "QR error correction", value, 48..=51, "48..=51")?;
            Ok(match n {
                48 => Self::L,
                49 => Self::M,
                50 => Self::Q,
                _ => Self::H,
            })
        }
    }

    /// # Store QR Data (fn 80)
    pub fn store_data(data: &[u8]) -> Result<Vec<u8>, EscPosError> {
        if data.is_empty() {
            return Err(EscPosError::ParameterOutOfRange {
                command: "GS ( k",
                parameter: "QR data length",
                value: 0,
                expected: "1..=252",
            });
        }
        let mut payload = Vec::with_capacity(1 + data.len());
        payload.push(48);
        payload.extend_from_slice(data);
        framing::gs_k(CN, 80, &payload)
    }

    /// # Set Error Correction Level (fn 69)
    pub fn set_error_correction(level: QrErrorLevel) -> Result<Vec<u8>, EscPosError> {
        framing::gs_k(CN, 69, &[level as u8])
    }

    /// # Set Module Size (fn 67)
    ///
    /// Size of one QR module in dots (1-16). Large symbols at big module
    /// sizes may not fit the paper and will not print.
    pub fn set_module_size(dots: u8) -> Result<Vec<u8>, EscPosError> {
        let n = params::check_range("GS ( k", "QR module size", dots, 1..=16, "1..=16")?;
        framing::gs_k(CN, 67, &[n])
    }

    /// # Print Stored Symbol (fn 81)
    pub fn print() -> Result<Vec<u8>, EscPosError> {
        framing::gs_k(CN, 81, &[48])
    }

    /// # Complete QR Code
    ///
    /// Store, error correction, module size, print; in that order.
    ///
    /// ```
    /// use escpos_serial::protocol::barcode::qr::{self, QrErrorLevel};
    ///
    /// let cmd = qr::generate(b"ABC", QrErrorLevel::M, 8).unwrap();
    /// assert_eq!(&cmd[..11], &[0x1D, b'(', b'k', 6, 0, 49, 80, 48, b'A', b'B', b'C']);
    /// ```
    pub fn generate(
        data: &[u8],
        level: QrErrorLevel,
        module_size: u8,
    ) -> Result<Vec<u8>, EscPosError> {
        let mut cmd = store_data(data)?;
        cmd.extend(set_error_correction(level)?);
        cmd.extend(set_module_size(module_size)?);
        cmd.extend(print()?);
        Ok(cmd)
    }
}

// ============================================================================
// PDF417 COMMANDS (GS ( k, cn = 48)
// ============================================================================

/// PDF417 command builders
///
/// Same framing as QR with `cn = 48`:
///
/// | fn | Function | Range |
/// |----|----------|-------|
/// | 80 | Store data | 1-252 bytes |
/// | 65 | Columns | 0 (auto), 1-30 |
/// | 66 | Rows | 0 (auto), 3-90 |
/// | 67 | Module width | 1-4 dots |
/// | 68 | Row height | 2-8 × module width |
/// | 69 | Error level | 48-56 (levels 0-8) |
/// | 70 | Type | 0 standard, 1 truncated |
/// | 81 | Print | - |
pub mod pdf417 {
    use super::framing::{self, MAX_BODY};
    use crate::error::EscPosError;
    use crate::params;

    /// Symbology selector for PDF417 within the `GS ( k` family
    pub const CN: u8 = 48;

    /// Largest data length a single store command can carry.
    pub const MAX_DATA_LEN: usize = MAX_BODY - 3;

    /// PDF417 symbol type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum Pdf417Type {
        #[default]
        Standard = 0,
        Truncated = 1,
    }

    impl TryFrom<u8> for Pdf417Type {
        type Error = EscPosError;

        fn try_from(value: u8) -> Result<Self, Self::Error> {
            Ok(match params::check_range("GS ( k", "PDF417 type", value, 0..=1, "0 or 1")? {
                0 => Self::Standard,
                _ => Self::Truncated,
            })
        }
    }

    /// # Store PDF417 Data (fn 80)
    pub fn store_data(data: &[u8]) -> Result<Vec<u8>, EscPosError> {
        if data.is_empty() {
            return Err(EscPosError::ParameterOutOfRange {
                command: "GS ( k",
                parameter: "PDF417 data length",
                value: 0,
                expected: "1..=252",
            });
        }
        let mut payload = Vec::with_capacity(1 + data.len());
        payload.push(48);
        payload.extend_from_slice(data);
        framing::gs_k(CN, 80, &payload)
    }

    /// # Set Column Count (fn 65)
    pub fn set_columns(columns: u8) -> Result<Vec<u8>, EscPosError> {
        let n = params::check_range("GS ( k", "PDF417 columns", columns, 0..=30, "0..=30")?;
        framing::gs_k(CN, 65, &[n])
    }

    /// # Set Row Count (fn 66)
    ///
    /// 0 lets the printer choose.
    pub fn set_rows(rows: u8) -> Result<Vec<u8>, EscPosError> {
        if rows != 0 {
            params::check_range("GS ( k", "PDF417 rows", rows, 3..=90, "0 or 3..=90")?;
        }
        framing::gs_k(CN, 66, &[rows])
    }

    /// # Set Module Width (fn 67)
    pub fn set_module_width(dots: u8) -> Result<Vec<u8>, EscPosError> {
        let n = params::check_range("GS ( k", "PDF417 module width", dots, 1..=4, "1..=4")?;
        framing::gs_k(CN, 67, &[n])
    }

    /// # Set Row Height (fn 68)
    pub fn set_row_height(dots: u8) -> Result<Vec<u8>, EscPosError> {
        let n = params::check_range("GS ( k", "PDF417 row height", dots, 2..=8, "2..=8")?;
        framing::gs_k(CN, 68, &[n])
    }

    /// # Set Error Correction Level (fn 69)
    ///
    /// `m = 48` selects level-based correction; `level` is 48-56 for levels 0-8.
    pub fn set_error_level(level: u8) -> Result<Vec<u8>, EscPosError> {
        let n = params::check_range("GS ( k", "PDF417 error level", level, 48..=56, "48..=56")?;
        framing::gs_k(CN, 69, &[48, n])
    }

    /// # Select Symbol Type (fn 70)
    pub fn set_type(kind: Pdf417Type) -> Result<Vec<u8>, EscPosError> {
        framing::gs_k(CN, 70, &[kind as u8])
    }

    /// # Print Stored Symbol (fn 81)
    pub fn print() -> Result<Vec<u8>, EscPosError> {
        framing::gs_k(CN, 81, &[48])
    }

    /// # Complete PDF417 Symbol
    ///
    /// Emits store, columns, rows, module width, row height, error level,
    /// type and print, in that order.
    pub fn generate(
        data: &[u8],
        kind: Pdf417Type,
        row_height: u8,
        module_width: u8,
        columns: u8,
        rows: u8,
        error_level: u8,
    ) -> Result<Vec<u8>, EscPosError> {
        let mut cmd = store_data(data)?;
        cmd.extend(set_columns(columns)?);
        cmd.extend(set_rows(rows)?);
        cmd.extend(set_module_width(module_width)?);
        cmd.extend(set_row_height(row_height)?);
        cmd.extend(set_error_level(error_level)?);
        cmd.extend(set_type(kind)?);
        cmd.extend(print()?);
        Ok(cmd)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EscPosError;

    mod framing_tests {
        use super::*;

        #[test]
        fn test_length_counts_cn_fn_and_payload() {
            let cmd = framing::gs_k(48, 69, &[48, 50]).unwrap();
            assert_eq!(cmd, vec![0x1D, 0x28, 0x6B, 4, 0, 48, 69, 48, 50]);
        }

        #[test]
        fn test_maximum_payload() {
            let cmd = framing::gs_k(49, 80, &[0x41; 253]).unwrap();
            assert_eq!(cmd[3], 255);
            assert_eq!(cmd[4], 0);
            assert_eq!(cmd.len(), 5 + 255);
        }

        #[test]
        fn test_oversized_payload() {
            assert!(matches!(
                framing::gs_k(49, 80, &[0x41; 254]),
                Err(EscPosError::LengthMismatch { length: 256, max: 255, .. })
            ));
        }
    }

    mod barcode1d_tests {
        use super::barcode1d::*;
        use super::*;

        #[test]
        fn test_setting_commands() {
            assert_eq!(hri_position(HriPosition::Both), vec![0x1D, b'H', 3]);
            assert_eq!(hri_font(HriFont::B), vec![0x1D, b'f', 1]);
            assert_eq!(height(162).unwrap(), vec![0x1D, b'h', 162]);
            assert_eq!(width(6).unwrap(), vec![0x1D, b'w', 6]);
        }

        #[test]
        fn test_height_and_width_ranges() {
            assert!(height(0).is_err());
            assert!(height(1).is_ok());
            assert!(width(1).is_err());
            assert!(width(7).is_err());
        }

        #[test]
        fn test_generate_order() {
            let cmd = generate(
                b"HELLO",
                Symbology::Code39,
                80,
                3,
                HriFont::A,
                HriPosition::Below,
            )
            .unwrap();
            assert_eq!(
                cmd,
                vec![
                    0x1D, b'H', 2, //
                    0x1D, b'f', 0, //
                    0x1D, b'h', 80, //
                    0x1D, b'w', 3, //
                    0x1D, b'k', 69, 5, b'H', b'E', b'L', b'L', b'O',
                ]
            );
        }

        #[test]
        fn test_length_byte_matches_data() {
            for len in [1usize, 12, 128, 255] {
                let data = vec![b'7'; len];
                let cmd = print(Symbology::Code128, &data).unwrap();
                assert_eq!(cmd[3] as usize, len);
                assert_eq!(cmd.len(), 4 + len);
            }
        }

        #[test]
        fn test_empty_data_rejected() {
            assert!(matches!(
                print(Symbology::Ean13, b""),
                Err(EscPosError::ParameterOutOfRange { .. })
            ));
        }

        #[test]
        fn test_oversized_data_rejected() {
            assert!(matches!(
                print(Symbology::Code128, &[b'1'; 256]),
                Err(EscPosError::LengthMismatch { length: 256, .. })
            ));
        }

        #[test]
        fn test_symbology_try_from() {
            assert_eq!(Symbology::try_from(65).unwrap(), Symbology::UpcA);
            assert_eq!(Symbology::try_from(73).unwrap(), Symbology::Code128);
            assert!(Symbology::try_from(64).is_err());
            assert!(Symbology::try_from(74).is_err());
            assert!(Symbology::try_from(4).is_err());
        }

        #[test]
        fn test_hri_try_from() {
            assert_eq!(HriPosition::try_from(0).unwrap(), HriPosition::None);
            assert!(HriPosition::try_from(4).is_err());
            assert_eq!(HriFont::try_from(1).unwrap(), HriFont::B);
            assert!(HriFont::try_from(2).is_err());
        }
    }

    mod qr_tests {
        use super::qr::*;
        use super::*;

        #[test]
        fn test_store_data() {
            assert_eq!(
                store_data(b"ABC").unwrap(),
                vec![0x1D, b'(', b'k', 6, 0, 49, 80, 48, b'A', b'B', b'C']
            );
        }

        #[test]
        fn test_generate_abc() {
            let mut expected = vec![0x1D, b'(', b'k', 6, 0, 49, 80, 48, b'A', b'B', b'C'];
            expected.extend([0x1D, b'(', b'k', 3, 0, 49, 69, 49]);
            expected.extend([0x1D, b'(', b'k', 3, 0, 49, 67, 8]);
            expected.extend([0x1D, b'(', b'k', 3, 0, 49, 81, 48]);
            assert_eq!(generate(b"ABC", QrErrorLevel::M, 8).unwrap(), expected);
        }

        #[test]
        fn test_error_levels() {
            for (level, byte) in [
                (QrErrorLevel::L, 48),
                (QrErrorLevel::M, 49),
                (QrErrorLevel::Q, 50),
                (QrErrorLevel::H, 51),
            ] {
                assert_eq!(set_error_correction(level).unwrap()[7], byte);
                assert_eq!(QrErrorLevel::try_from(byte).unwrap(), level);
            }
            assert!(QrErrorLevel::try_from(47).is_err());
            assert!(QrErrorLevel::try_from(52).is_err());
        }

        #[test]
        fn test_module_size_range() {
            assert!(set_module_size(0).is_err());
            assert_eq!(set_module_size(1).unwrap()[7], 1);
            assert_eq!(set_module_size(16).unwrap()[7], 16);
            assert!(set_module_size(17).is_err());
        }

        #[test]
        fn test_data_limits() {
            assert!(store_data(b"").is_err());
            assert!(store_data(&[b'x'; MAX_DATA_LEN]).is_ok());
            assert!(matches!(
                store_data(&[b'x'; MAX_DATA_LEN + 1]),
                Err(EscPosError::LengthMismatch { .. })
            ));
        }
    }

    mod pdf417_tests {
        use super::pdf417::*;
        use super::*;

        #[test]
        fn test_store_data_length() {
            assert_eq!(
                store_data(b"PDF").unwrap(),
                vec![0x1D, b'(', b'k', 6, 0, 48, 80, 48, b'P', b'D', b'F']
            );
        }

        #[test]
        fn test_generate() {
            let cmd = generate(b"HI", Pdf417Type::Truncated, 3, 2, 0, 0, 49).unwrap();
            let mut expected = vec![0x1D, b'(', b'k', 5, 0, 48, 80, 48, b'H', b'I'];
            expected.extend([0x1D, b'(', b'k', 3, 0, 48, 65, 0]);
            expected.extend([0x1D, b'(', b'k', 3, 0, 48, 66, 0]);
            expected.extend([0x1D, b'(', b'k', 3, 0, 48, 67, 2]);
            expected.extend([0x1D, b'(', b'k', 3, 0, 48, 68, 3]);
            expected.extend([0x1D, b'(', b'k', 4, 0, 48, 69, 48, 49]);
            expected.extend([0x1D, b'(', b'k', 3, 0, 48, 70, 1]);
            expected.extend([0x1D, b'(', b'k', 3, 0, 48, 81, 48]);
            assert_eq!(cmd, expected);
        }

        #[test]
        fn test_rows() {
            assert!(set_rows(0).is_ok());
            assert!(set_rows(1).is_err());
            assert!(set_rows(2).is_err());
            assert!(set_rows(3).is_ok());
            assert!(set_rows(90).is_ok());
            assert!(set_rows(91).is_err());
        }

        #[test]
        fn test_ranges() {
            assert!(set_columns(30).is_ok());
            assert!(set_columns(31).is_err());
            assert!(set_module_width(0).is_err());
            assert!(set_module_width(4).is_ok());
            assert!(set_module_width(5).is_err());
            assert!(set_row_height(1).is_err());
            assert!(set_row_height(8).is_ok());
            assert!(set_row_height(9).is_err());
            assert!(set_error_level(47).is_err());
            assert!(set_error_level(56).is_ok());
            assert!(set_error_level(57).is_err());
            assert!(Pdf417Type::try_from(2).is_err());
        }
    }
}
