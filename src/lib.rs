//! # Boleta - ESC/POS Receipt Printer Library
//!
//! Boleta is a Rust library for printing on Epson-compatible thermal
//! receipt printers. It provides:
//!
//! - **Text transcoding**: Unicode → single-byte code pages with minimal
//!   table switching
//! - **Protocol implementation**: ESC/POS command builders
//! - **Code page tables**: CP437, CP850, CP858, CP865, CP866,
//!   Windows-1252, half-width Katakana
//! - **Transport**: character-device and in-memory backends
//!
//! ## Quick Start
//!
//! ```
//! use boleta::{Printer, transport::MemoryTransport};
//!
//! // Open a connection (MemoryTransport captures bytes; use
//! // SerialTransport for a real device)
//! let mut printer = Printer::new(MemoryTransport::new())?;
//!
//! // Accented text is transcoded automatically: a code-page-select
//! // command is inserted before the first accented character, and only
//! // when the required table actually changes.
//! printer.text("Crème brûlée  € 4,50\n")?;
//! printer.feed(3)?;
//! printer.cut()?;
//!
//! // The captured bytes are the complete ESC/POS job
//! let bytes = printer.into_transport().into_inner();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]); // ESC @ init preamble
//! # Ok::<(), boleta::BoletaError>(())
//! ```
//!
//! ## The Transcoding Problem
//!
//! Receipt printers have no notion of Unicode. Bytes 0x00–0x7F are ASCII;
//! bytes 0x80–0xFF render through one of a fixed set of printer-resident
//! character tables, exactly one of which is active at a time (`ESC t n`
//! switches). Printing "Quizdeltagerne spiste jordbær…" therefore means
//! choosing tables, emitting switch commands, and falling back to `?` for
//! characters no table knows, while switching as rarely as possible,
//! because every switch costs bytes and a hardware mode change. The
//! [`encoder`] module implements exactly that.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`codepage`] | Code page tables and the per-printer registry |
//! | [`encoder`] | Stateful Unicode → byte-stream transcoder |
//! | [`protocol`] | ESC/POS command builders |
//! | [`printer`] | High-level printer facade |
//! | [`transport`] | Communication backends |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Any printer speaking the common ESC/POS subset should work: Epson
//! TM-T20/T88 series and the many compatible models. Printers whose
//! firmware assigns non-Epson code page selectors need a custom
//! [`CodePageRegistry`].
//!
//! ## What Boleta Does Not Do
//!
//! - Double-byte character modes (kanji, GBK): single-byte tables only
//! - Right-to-left scripts: would need reordering logic that does not
//!   belong in a byte transcoder
//! - Filtering control bytes from [`Printer::text_raw`] input: raw means
//!   raw

pub mod codepage;
pub mod encoder;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use codepage::{CodePage, CodePageRegistry};
pub use encoder::TextEncoder;
pub use error::BoletaError;
pub use printer::Printer;
