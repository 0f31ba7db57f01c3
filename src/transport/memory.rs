//! # In-Memory Transport
//!
//! A transport that appends everything to a growable buffer instead of a
//! device. Used for tests (assert on the exact byte stream a print job
//! produces) and for building a job offline before handing it to a real
//! transport in one piece.

use super::Transport;
use crate::error::BoletaError;

/// # Capture Transport
///
/// Collects written bytes in memory, preserving order.
///
/// ## Example
///
/// ```
/// use boleta::transport::{MemoryTransport, Transport};
///
/// let mut transport = MemoryTransport::new();
/// transport.write_all(&[0x1B, 0x40])?;
/// transport.write_all(b"hello")?;
/// assert_eq!(transport.data(), b"\x1b\x40hello");
/// # Ok::<(), boleta::BoletaError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    buf: Vec<u8>,
}

impl MemoryTransport {
    /// Create an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in write order.
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the transport and take the captured bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Discard everything captured so far.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl Transport for MemoryTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), BoletaError> {
        self.buf.extend_from_slice(data);
        Ok(())
    }
}
