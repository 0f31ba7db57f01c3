//! # Printer Transport Layer
//!
//! This module provides communication backends for sending data to
//! printers.
//!
//! A transport is an append-only ordered byte sink: bytes are written in
//! call order, never reordered, and never read back. Everything above this
//! layer (transcoding, command building) is transport-agnostic.
//!
//! ## Available Transports
//!
//! - [`memory`]: In-memory capture, for tests and byte-stream inspection
//! - [`serial`]: Character-device transport (USB, serial, RFCOMM bindings)
//!
//! ## Future Transports
//!
//! - Network (TCP/IP port 9100)
//! - CUPS raw queues

pub mod memory;
pub mod serial;

pub use memory::MemoryTransport;
pub use serial::SerialTransport;

use crate::error::BoletaError;

/// An append-only, order-preserving byte sink.
///
/// Implementations must deliver bytes in the order written and must not
/// drop or reorder data between calls; printers interpret the stream
/// positionally and a single lost byte desynchronizes every command that
/// follows.
pub trait Transport {
    /// Append `data` to the sink in its entirety.
    fn write_all(&mut self, data: &[u8]) -> Result<(), BoletaError>;

    /// Push any buffered bytes toward the device.
    fn flush(&mut self) -> Result<(), BoletaError> {
        Ok(())
    }
}
