//! # Commands and Print Jobs
//!
//! [`Command`] is one logical printer instruction with its raw parameters.
//! Values are transient: they are built (usually by deserializing a JSON
//! job), written once, and dropped. Range checks happen at write time, so
//! a job file with an out-of-range value fails on that command without any
//! of its bytes reaching the sink.
//!
//! ## JSON Job Format
//!
//! ```json
//! {
//!   "commands": [
//!     { "type": "init" },
//!     { "type": "set_justification", "value": 1 },
//!     { "type": "print_text", "text": "Hello" },
//!     { "type": "print_qr", "data": "https://example.com", "error_level": 49, "module_size": 6 },
//!     { "type": "feed_and_cut", "lines": 4 }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::encoder;
use crate::error::EscPosError;
use crate::protocol::barcode::{
    barcode1d::{HriFont, HriPosition, Symbology},
    pdf417::Pdf417Type,
    qr::QrErrorLevel,
};
use crate::protocol::text::Justification;
use crate::sink::Sink;

fn default_hri_position() -> u8 {
    HriPosition::Below as u8
}

fn default_barcode_height() -> u8 {
    162
}

fn default_barcode_width() -> u8 {
    3
}

fn default_qr_level() -> u8 {
    QrErrorLevel::M as u8
}

fn default_module_size() -> u8 {
    6
}

fn default_row_height() -> u8 {
    3
}

fn default_module_width() -> u8 {
    2
}

fn default_pdf417_level() -> u8 {
    49
}

/// A single logical printer instruction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Init,
    PrintText {
        text: String,
    },
    Feed {
        lines: u8,
    },
    PrintAndFeed {
        text: String,
        lines: u8,
    },
    StoreText {
        text: String,
    },
    StoreByte {
        value: u8,
    },
    PrintStorage,
    ResetToDefault,
    SetBold {
        enabled: bool,
    },
    SetInverse {
        enabled: bool,
    },
    SetUnderline {
        level: u8,
    },
    SetJustification {
        value: u8,
    },
    SetLineSpacing {
        units: u8,
    },
    PrintQr {
        data: String,
        #[serde(default = "default_qr_level")]
        error_level: u8,
        #[serde(default = "default_module_size")]
        module_size: u8,
    },
    PrintBarcode {
        data: String,
        symbology: u8,
        #[serde(default = "default_barcode_height")]
        height: u8,
        #[serde(default = "default_barcode_width")]
        width: u8,
        #[serde(default)]
        font: u8,
        #[serde(default = "default_hri_position")]
        hri_position: u8,
    },
    #[serde(rename = "print_pdf417")]
    PrintPdf417 {
        data: String,
        #[serde(default)]
        kind: u8,
        #[serde(default = "default_row_height")]
        row_height: u8,
        #[serde(default = "default_module_width")]
        module_width: u8,
        #[serde(default)]
        columns: u8,
        #[serde(default)]
        rows: u8,
        #[serde(default = "default_pdf417_level")]
        error_level: u8,
    },
    StoreCustomChar {
        columns: Vec<u8>,
        mode: u8,
    },
    Cut,
    FeedAndCut {
        lines: u8,
    },
    Beep,
    Hello,
}

impl Command {
    /// Short name used in logs and hex dumps.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::PrintText { .. } => "print_text",
            Self::Feed { .. } => "feed",
            Self::PrintAndFeed { .. } => "print_and_feed",
            Self::StoreText { .. } => "store_text",
            Self::StoreByte { .. } => "store_byte",
            Self::PrintStorage => "print_storage",
            Self::ResetToDefault => "reset_to_default",
            Self::SetBold { .. } => "set_bold",
            Self::SetInverse { .. } => "set_inverse",
            Self::SetUnderline { .. } => "set_underline",
            Self::SetJustification { .. } => "set_justification",
            Self::SetLineSpacing { .. } => "set_line_spacing",
            Self::PrintQr { .. } => "print_qr",
            Self::PrintBarcode { .. } => "print_barcode",
            Self::PrintPdf417 { .. } => "print_pdf417",
            Self::StoreCustomChar { .. } => "store_custom_char",
            Self::Cut => "cut",
            Self::FeedAndCut { .. } => "feed_and_cut",
            Self::Beep => "beep",
            Self::Hello => "hello",
        }
    }

    /// Validate and write this command to `sink`.
    pub fn write_to<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), EscPosError> {
        match self {
            Self::Init => encoder::init(sink),
            Self::PrintText { text } => encoder::print_text(sink, text),
            Self::Feed { lines } => encoder::feed(sink, *lines),
            Self::PrintAndFeed { text, lines } => encoder::print_and_feed(sink, text, *lines),
            Self::StoreText { text } => encoder::store_text(sink, text),
            Self::StoreByte { value } => encoder::store_byte(sink, *value),
            Self::PrintStorage => encoder::print_storage(sink),
            Self::ResetToDefault => encoder::reset_to_default(sink),
            Self::SetBold { enabled } => encoder::set_bold(sink, *enabled),
            Self::SetInverse { enabled } => encoder::set_inverse(sink, *enabled),
            Self::SetUnderline { level } => encoder::set_underline(sink, *level),
            Self::SetJustification { value } => {
                encoder::set_justification(sink, Justification::try_from(*value)?)
            }
            Self::SetLineSpacing { units } => encoder::set_line_spacing(sink, *units),
            Self::PrintQr {
                data,
                error_level,
                module_size,
            } => encoder::print_qr(
                sink,
                data.as_bytes(),
                QrErrorLevel::try_from(*error_level)?,
                *module_size,
            ),
            Self::PrintBarcode {
                data,
                symbology,
                height,
                width,
                font,
                hri_position,
            } => encoder::print_barcode(
                sink,
                data.as_bytes(),
                Symbology::try_from(*symbology)?,
                *height,
                *width,
                HriFont::try_from(*font)?,
                HriPosition::try_from(*hri_position)?,
            ),
            Self::PrintPdf417 {
                data,
                kind,
                row_height,
                module_width,
                columns,
                rows,
                error_level,
            } => encoder::print_pdf417(
                sink,
                data.as_bytes(),
                Pdf417Type::try_from(*kind)?,
                *row_height,
                *module_width,
                *columns,
                *rows,
                *error_level,
            ),
            Self::StoreCustomChar { columns, mode } => {
                encoder::store_custom_char(sink, columns, *mode)
            }
            Self::Cut => encoder::cut(sink),
            Self::FeedAndCut { lines } => encoder::feed_and_cut(sink, *lines),
            Self::Beep => encoder::beep(sink),
            Self::Hello => encoder::hello(sink),
        }
    }
}

/// An ordered list of commands, usually loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Job {
    pub commands: Vec<Command>,
}

impl Job {
    /// Parse a JSON job document.
    pub fn from_json(json: &str) -> Result<Self, EscPosError> {
        serde_json::from_str(json).map_err(|e| EscPosError::Job(e.to_string()))
    }

    /// Write every command in order, stopping at the first error.
    ///
    /// Commands before the failing one stay written; the failing command
    /// itself writes nothing if its parameters are invalid.
    pub fn write_to<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<(), EscPosError> {
        for (index, command) in self.commands.iter().enumerate() {
            tracing::debug!(index, command = command.name(), "writing command");
            command.write_to(sink)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit_and_struct_variants() {
        let job = Job::from_json(
            r#"{"commands": [
                {"type": "init"},
                {"type": "set_bold", "enabled": true},
                {"type": "print_text", "text": "Hi"},
                {"type": "feed_and_cut", "lines": 2}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            job.commands,
            vec![
                Command::Init,
                Command::SetBold { enabled: true },
                Command::PrintText {
                    text: "Hi".to_string()
                },
                Command::FeedAndCut { lines: 2 },
            ]
        );
    }

    #[test]
    fn test_defaults() {
        let job = Job::from_json(
            r#"{"commands": [
                {"type": "print_qr", "data": "x"},
                {"type": "print_barcode", "data": "123", "symbology": 73},
                {"type": "print_pdf417", "data": "p"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            job.commands[0],
            Command::PrintQr {
                data: "x".to_string(),
                error_level: 49,
                module_size: 6
            }
        );
        assert_eq!(
            job.commands[1],
            Command::PrintBarcode {
                data: "123".to_string(),
                symbology: 73,
                height: 162,
                width: 3,
                font: 0,
                hri_position: 2
            }
        );
        assert!(matches!(
            job.commands[2],
            Command::PrintPdf417 { kind: 0, row_height: 3, module_width: 2, error_level: 49, .. }
        ));
    }

    #[test]
    fn test_bad_json_is_job_error() {
        assert!(matches!(
            Job::from_json(r#"{"commands": [{"type": "explode"}]}"#),
            Err(EscPosError::Job(_))
        ));
        assert!(matches!(
            Job::from_json(r#"{"commands": [{"type": "feed", "lines": 300}]}"#),
            Err(EscPosError::Job(_))
        ));
    }

    #[test]
    fn test_write_matches_encoder() {
        let mut from_command = Vec::new();
        Command::PrintQr {
            data: "ABC".to_string(),
            error_level: 49,
            module_size: 8,
        }
        .write_to(&mut from_command)
        .unwrap();

        let mut from_encoder = Vec::new();
        encoder::print_qr(&mut from_encoder, b"ABC", QrErrorLevel::M, 8).unwrap();

        assert_eq!(from_command, from_encoder);
    }

    #[test]
    fn test_invalid_enum_values_rejected_at_write() {
        let cases = [
            Command::SetJustification { value: 3 },
            Command::PrintQr {
                data: "x".to_string(),
                error_level: 52,
                module_size: 4,
            },
            Command::PrintBarcode {
                data: "1".to_string(),
                symbology: 0,
                height: 50,
                width: 2,
                font: 0,
                hri_position: 0,
            },
            Command::PrintBarcode {
                data: "1".to_string(),
                symbology: 65,
                height: 50,
                width: 2,
                font: 0,
                hri_position: 4,
            },
        ];
        for command in cases {
            let mut out = Vec::new();
            assert!(
                matches!(command.write_to(&mut out), Err(EscPosError::ParameterOutOfRange { .. })),
                "{} accepted an invalid value",
                command.name()
            );
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_job_stops_at_first_error() {
        let job = Job {
            commands: vec![
                Command::Init,
                Command::SetUnderline { level: 9 },
                Command::Cut,
            ],
        };
        let mut out = Vec::new();
        assert!(job.write_to(&mut out).is_err());
        assert_eq!(out, vec![0x1B, 0x40]);
    }
}
