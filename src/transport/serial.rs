//! # Character-Device Transport
//!
//! Sends data to a printer exposed as a character device: USB printer
//! class (`/dev/usb/lp0`), a serial adapter (`/dev/ttyUSB0`), or a
//! Bluetooth RFCOMM binding (`/dev/rfcomm0`).
//!
//! ## Device Setup (Linux)
//!
//! USB ESC/POS printers usually appear via the `usblp` kernel driver:
//!
//! ```bash
//! $ dmesg | grep usblp
//! # usblp0: USB Bidirectional printer dev 5
//!
//! # Write access typically requires the lp group
//! $ sudo usermod -a -G lp $USER
//! ```
//!
//! ## Chunked Writes
//!
//! Large jobs are written in chunks with a small delay between them.
//! Receipt printers have small input buffers (often 4KB), and raw device
//! writes can outrun the mechanism; the delay lets the printer drain
//! between chunks.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::debug;

use super::Transport;
use crate::error::BoletaError;

/// Default USB printer device path
pub const DEFAULT_DEVICE: &str = "/dev/usb/lp0";

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Serial Printer Transport
///
/// Manages a connection to a printer character device.
///
/// ## Example
///
/// ```no_run
/// use boleta::transport::{SerialTransport, Transport};
/// use boleta::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/usb/lp0")?;
///
/// // Send initialization
/// transport.write_all(&commands::init())?;
///
/// // Send more data...
///
/// # Ok::<(), boleta::BoletaError>(())
/// ```
#[derive(Debug)]
pub struct SerialTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl SerialTransport {
    /// Open a printer character device.
    ///
    /// ## Parameters
    ///
    /// - `device`: Path to the device node (e.g. "/dev/usb/lp0")
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the lp or dialout group)
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, BoletaError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            BoletaError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Open with the default device path (/dev/usb/lp0)
    pub fn open_default() -> Result<Self, BoletaError> {
        Self::open(DEFAULT_DEVICE)
    }

    /// Set the chunk size for large writes.
    ///
    /// Larger chunks are faster but may overflow the printer's input
    /// buffer. Default is 4096 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks.
    ///
    /// Longer delays give the printer more time to process data.
    /// Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }
}

impl Transport for SerialTransport {
    /// Write data to the printer.
    ///
    /// Small writes are sent directly. Large writes are automatically
    /// chunked to avoid overflowing the printer's input buffer.
    fn write_all(&mut self, data: &[u8]) -> Result<(), BoletaError> {
        if data.is_empty() {
            return Ok(());
        }

        if data.len() <= self.chunk_size {
            self.file
                .write_all(data)
                .map_err(|e| BoletaError::Transport(format!("Write failed: {}", e)))?;
        } else {
            debug!(
                len = data.len(),
                chunk_size = self.chunk_size,
                "chunking large write"
            );
            for chunk in data.chunks(self.chunk_size) {
                self.file
                    .write_all(chunk)
                    .map_err(|e| BoletaError::Transport(format!("Write failed: {}", e)))?;

                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<(), BoletaError> {
        self.file
            .flush()
            .map_err(|e| BoletaError::Transport(format!("Flush failed: {}", e)))
    }
}
