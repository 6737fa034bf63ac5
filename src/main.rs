//! # escpos CLI
//!
//! Command-line interface for serial ESC/POS printers.
//!
//! ## Usage
//!
//! ```bash
//! # Print the sample sheet
//! escpos sampler --device /dev/ttyUSB0
//!
//! # Run a JSON print job
//! escpos print job.json --baud 19200
//!
//! # Encode a job to a file instead of a device
//! escpos print job.json --output job.bin
//!
//! # Show the bytes each command of a job produces
//! escpos hex job.json
//!
//! # Print one line and cut
//! escpos text "Hello" --feed 4 --cut
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use escpos_serial::{
    EscPosError, Job, PrinterConfig, SerialTransport, Sink, TextEncoding, WriteSink, encoder,
    sampler,
};

/// escpos - ESC/POS thermal printer utility
#[derive(Parser, Debug)]
#[command(name = "escpos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where encoded bytes go.
#[derive(Args, Debug)]
struct Output {
    /// Printer configuration file (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Printer device path
    #[arg(long)]
    device: Option<String>,

    /// Line speed in baud
    #[arg(long)]
    baud: Option<u32>,

    /// Text encoding: utf8, ascii or cp437
    #[arg(long)]
    encoding: Option<TextEncoding>,

    /// Write the encoded bytes to a file instead of the printer
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the sample sheet
    Sampler {
        #[command(flatten)]
        output: Output,
    },

    /// Run a JSON print job
    Print {
        /// Job file
        job: PathBuf,

        #[command(flatten)]
        output: Output,
    },

    /// Encode a JSON print job and show each command's bytes as hex
    Hex {
        /// Job file
        job: PathBuf,

        /// Text encoding: utf8, ascii or cp437
        #[arg(long, default_value = "cp437")]
        encoding: TextEncoding,
    },

    /// Print a single line of text
    Text {
        /// Text to print
        text: String,

        /// Lines to feed afterwards
        #[arg(long, default_value = "0")]
        feed: u8,

        /// Cut the paper afterwards
        #[arg(long)]
        cut: bool,

        #[command(flatten)]
        output: Output,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), EscPosError> {
    match command {
        Commands::Sampler { output } => {
            println!("Printing sample sheet...");
            with_sink(&output, |sink| sampler::print_sampler(sink))?;
            println!("Printed successfully!");
        }

        Commands::Print { job, output } => {
            let job = load_job(&job)?;
            println!("Printing job ({} commands)...", job.commands.len());
            with_sink(&output, |sink| job.write_to(sink))?;
            println!("Printed successfully!");
        }

        Commands::Hex { job, encoding } => {
            let job = load_job(&job)?;
            for command in &job.commands {
                let mut sink = WriteSink::new(Vec::new(), encoding);
                command.write_to(&mut sink)?;
                println!("{:<18} {}", command.name(), to_hex(sink.get_ref()));
            }
        }

        Commands::Text {
            text,
            feed,
            cut,
            output,
        } => {
            with_sink(&output, |sink| {
                encoder::print_text(sink, &text)?;
                if feed > 0 {
                    encoder::feed(sink, feed)?;
                }
                if cut {
                    encoder::cut(sink)?;
                }
                Ok(())
            })?;
        }
    }

    Ok(())
}

/// Resolve the printer configuration from the config file and CLI overrides.
fn resolve_config(output: &Output) -> Result<PrinterConfig, EscPosError> {
    let mut config = match &output.config {
        Some(path) => PrinterConfig::load(path)?,
        None => PrinterConfig::default(),
    };
    if let Some(device) = &output.device {
        config.device = device.clone().into();
    }
    if let Some(baud) = output.baud {
        config.baud_rate = baud;
    }
    if let Some(encoding) = output.encoding {
        config.encoding = encoding;
    }
    Ok(config)
}

/// Run `write` against the selected output: a file or the serial device.
fn with_sink<F>(output: &Output, write: F) -> Result<(), EscPosError>
where
    F: FnOnce(&mut dyn Sink) -> Result<(), EscPosError>,
{
    let config = resolve_config(output)?;

    match &output.output {
        Some(path) => {
            let mut sink = WriteSink::new(Vec::new(), config.encoding);
            write(&mut sink)?;
            let bytes = sink.into_inner();
            fs::write(path, &bytes)?;
            info!(path = %path.display(), bytes = bytes.len(), "wrote encoded output");
            println!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut transport = SerialTransport::open(&config)?;
            write(&mut transport)?;
            transport.flush()?;
        }
    }

    Ok(())
}

fn load_job(path: &Path) -> Result<Job, EscPosError> {
    let json = fs::read_to_string(path)?;
    Job::from_json(&json)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
