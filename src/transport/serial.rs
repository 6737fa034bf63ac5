//! # Serial Transport
//!
//! Writes encoded commands to a serial printer through its TTY device.
//!
//! ## TTY Configuration
//!
//! The device is opened write-only and switched to raw mode so command bytes
//! pass through unmodified:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL off
//! - **No software flow control**: IXON, IXOFF, IXANY off (0x11 and 0x13
//!   occur in barcode and glyph data)
//! - **No output processing**: OPOST off (no LF to CR LF translation)
//! - **8N1**: CS8, no parity
//! - **Non-canonical, no echo**: ICANON, ECHO, ECHONL, ISIG, IEXTEN off
//! - **Line speed**: the configured baud rate, input and output
//!
//! ## Chunked Writes
//!
//! Writes larger than the configured chunk size are split, with an optional
//! delay between chunks for printers with small receive buffers.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::EscPosError;
use crate::printer::PrinterConfig;
use crate::sink::{Sink, TextEncoding};

/// # Serial Printer Transport
///
/// ## Example
///
/// ```no_run
/// use escpos_serial::{encoder, PrinterConfig, SerialTransport};
///
/// let mut printer = SerialTransport::open(&PrinterConfig::GENERIC_SERIAL)?;
/// encoder::init(&mut printer)?;
/// encoder::print_text(&mut printer, "Hello")?;
/// encoder::feed_and_cut(&mut printer, 4)?;
/// # Ok::<(), escpos_serial::EscPosError>(())
/// ```
pub struct SerialTransport {
    file: File,
    encoding: TextEncoding,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl SerialTransport {
    /// Open and configure the device named in `config`.
    ///
    /// ## Errors
    ///
    /// Returns `Transport` if the device cannot be opened (missing, or the
    /// user is not in the `dialout` group), if the baud rate is not a
    /// standard speed, or if TTY configuration fails.
    pub fn open(config: &PrinterConfig) -> Result<Self, EscPosError> {
        let path = Path::new(&*config.device);

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            EscPosError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(&file, config.baud_rate)?;

        info!(
            device = %path.display(),
            baud = config.baud_rate,
            encoding = %config.encoding,
            "opened serial printer"
        );

        Ok(Self::from_file(file, config))
    }

    /// Wrap an already-open file without touching its TTY settings.
    ///
    /// Useful for pipes, spool files and devices configured elsewhere.
    pub fn from_file(file: File, config: &PrinterConfig) -> Self {
        Self {
            file,
            encoding: config.encoding,
            chunk_size: config.chunk_size.max(1),
            chunk_delay: config.chunk_delay(),
        }
    }

    /// Set the chunk size for large writes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    /// Flush buffered bytes to the device.
    pub fn flush(&mut self) -> Result<(), EscPosError> {
        self.file
            .flush()
            .map_err(|e| EscPosError::Transport(format!("Flush failed: {}", e)))
    }

    fn write_chunked(&mut self, data: &[u8]) -> Result<(), EscPosError> {
        if data.is_empty() {
            return Ok(());
        }

        if data.len() <= self.chunk_size {
            return self
                .file
                .write_all(data)
                .map_err(|e| EscPosError::Transport(format!("Write failed: {}", e)));
        }

        let chunks = data.len().div_ceil(self.chunk_size);
        debug!(bytes = data.len(), chunks, "chunked write");

        for (i, chunk) in data.chunks(self.chunk_size).enumerate() {
            self.file
                .write_all(chunk)
                .map_err(|e| EscPosError::Transport(format!("Write failed: {}", e)))?;

            if i + 1 < chunks && !self.chunk_delay.is_zero() {
                thread::sleep(self.chunk_delay);
            }
        }

        Ok(())
    }
}

impl Sink for SerialTransport {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), EscPosError> {
        debug!(bytes = bytes.len(), "serial write");
        self.write_chunked(bytes)
    }

    fn write_text(&mut self, text: &str) -> Result<(), EscPosError> {
        let bytes = self.encoding.encode(text);
        self.write_bytes(&bytes)
    }
}

/// Map a numeric baud rate to its termios speed constant.
#[cfg(unix)]
fn speed_constant(baud: u32) -> Option<libc::speed_t> {
    let speed = match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        230400 => libc::B230400,
        _ => return None,
    };
    Some(speed)
}

/// Put the TTY behind `file` into raw 8N1 mode at `baud`.
#[cfg(unix)]
fn configure_tty_raw(file: &File, baud: u32) -> Result<(), EscPosError> {
    use std::io;
    use std::mem::MaybeUninit;
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    let speed = speed_constant(baud)
        .ok_or_else(|| EscPosError::Transport(format!("Unsupported baud rate: {}", baud)))?;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(EscPosError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB);
    termios.c_cflag |= libc::CS8 | libc::CLOCAL;

    let speed_ok = unsafe {
        libc::cfsetispeed(&mut termios, speed) == 0 && libc::cfsetospeed(&mut termios, speed) == 0
    };
    if !speed_ok {
        return Err(EscPosError::Transport(format!(
            "cfsetspeed({}) failed: {}",
            baud,
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(EscPosError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_tty_raw(_file: &File, _baud: u32) -> Result<(), EscPosError> {
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
