//! # Error Types
//!
//! This module defines error types used throughout the escpos-serial library.

use thiserror::Error;

/// Main error type for escpos-serial operations
#[derive(Debug, Error)]
pub enum EscPosError {
    /// A caller-supplied value is outside the range the command accepts.
    ///
    /// Raised before any byte of the command reaches the sink.
    #[error("{command}: {parameter} = {value} is out of range (expected {expected})")]
    ParameterOutOfRange {
        command: &'static str,
        parameter: &'static str,
        value: usize,
        expected: &'static str,
    },

    /// A derived length field does not fit the single-byte encoding.
    #[error("{command}: length {length} exceeds the maximum of {max}")]
    LengthMismatch {
        command: &'static str,
        length: usize,
        max: usize,
    },

    /// Transport-level errors (connection, write failure)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Print job document could not be parsed
    #[error("Job error: {0}")]
    Job(String),

    /// Printer configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
