//! # ESC/POS Basic Commands
//!
//! Initialization, text output, paper feed, cutting and the buzzer.
//!
//! ## Escape Sequence Structure
//!
//! Commands are either plain control bytes (`LF`) or prefix sequences:
//! - `ESC x ...` (0x1B) for most print and style commands
//! - `GS x ...` (0x1D) for cutter, barcode and extended functions
//!
//! Every builder here returns the complete byte sequence for one command.
//! None of them touch a sink; see [`crate::encoder`] for that.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for the cutter (`GS V`), inverse printing (`GS B`), 1D barcodes
/// (`GS H`, `GS f`, `GS h`, `GS w`, `GS k`) and the `GS ( k` 2D symbol family.
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// NUL - used as a fixed zero parameter
pub const NUL: u8 = 0x00;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets every mode to the firmware defaults.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use escpos_serial::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the line buffer, then advances the paper `n` lines (0-255).
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC d n   |
/// | Hex     | 1B 64 n   |
/// | Decimal | 27 100 n  |
///
/// ## Example
///
/// ```
/// use escpos_serial::protocol::commands;
///
/// assert_eq!(commands::feed(5), vec![0x1B, b'd', 5]);
/// ```
#[inline]
pub fn feed(lines: u8) -> Vec<u8> {
    vec![ESC, b'd', lines]
}

// ============================================================================
// CUTTER AND BUZZER
// ============================================================================

/// # Full Cut (GS V 48 0)
///
/// Cuts the paper completely at the current position. Only the full cut is
/// exposed; the partial-cut function is not used by this library.
///
/// ## Protocol Details
///
/// | Format  | Bytes       |
/// |---------|-------------|
/// | ASCII   | GS V 0 NUL  |
/// | Hex     | 1D 56 30 00 |
/// | Decimal | 29 86 48 0  |
#[inline]
pub fn cut() -> Vec<u8> {
    vec![GS, b'V', 48, NUL]
}

/// Feed `lines` lines, then cut.
///
/// The result is exactly `feed(lines)` followed by `cut()`.
pub fn feed_and_cut(lines: u8) -> Vec<u8> {
    let mut out = feed(lines);
    out.extend(cut());
    out
}

/// Payload of the single beep profile: pL=4 pH=0 fn=48 m=55 (buzzer) n1=3 n2=15.
const BEEP_PAYLOAD: [u8; 6] = [4, 0, 48, 55, 3, 15];

/// # Sound the Buzzer (ESC ( A)
///
/// Emits one fixed tone profile. No other profiles are offered because
/// their behavior on real hardware is undocumented.
///
/// ## Protocol Details
///
/// | Format  | Bytes                         |
/// |---------|-------------------------------|
/// | ASCII   | ESC ( A 4 0 0 7 3 15          |
/// | Hex     | 1B 28 41 04 00 30 37 03 0F    |
pub fn beep() -> Vec<u8> {
    let mut out = vec![ESC, b'(', b'A'];
    out.extend_from_slice(&BEEP_PAYLOAD);
    out
}

/// The original library's smoke test: initialize, "Hello World", feed 6 lines.
pub fn hello() -> Vec<u8> {
    let mut out = init();
    out.extend_from_slice(b"Hello World");
    out.extend(feed(6));
    out
}

// ============================================================================
// TESTS
// ============================================================================
