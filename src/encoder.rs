//! # Stateful Text Transcoding
//!
//! This module converts Unicode text into the byte stream an ESC/POS
//! printer actually consumes: single-byte character codes interleaved with
//! `ESC t n` table-switch commands.
//!
//! ## Why State Matters
//!
//! The printer is stateful hardware: it holds exactly one active character
//! table at a time, and every switch costs three bytes on the wire plus a
//! mode change in the mechanism. [`TextEncoder`] mirrors that state (the
//! selector of the table it believes is active) so that:
//!
//! - ASCII never triggers a switch: bytes 0x00–0x7F render identically on
//!   every table, which is what lets mixed ASCII/accented text avoid
//!   thrashing between tables.
//! - A character the active table can render never triggers a switch, even
//!   when an earlier-priority table could also render it.
//! - The state survives across `encode` calls, so a caller printing one
//!   long document in many small pieces pays for each table change once.
//!
//! ## Placeholder Substitution
//!
//! A character no registered table covers becomes a single `?` byte:
//! lossy by design, never an error. Output stays one byte per input
//! character (plus switch commands), so surrounding text is never
//! corrupted by unencodable input.
//!
//! ## Example
//!
//! ```
//! use boleta::{CodePageRegistry, TextEncoder};
//!
//! let registry = CodePageRegistry::epson();
//! let mut encoder = TextEncoder::new();
//!
//! // ASCII passes through untouched
//! assert_eq!(encoder.encode("total:", &registry), b"total:");
//!
//! // First accented character selects CP437 (ESC t 0), then encodes
//! assert_eq!(encoder.encode("é", &registry), vec![0x1B, 0x74, 0, 0x82]);
//!
//! // Same table, no further switch
//! assert_eq!(encoder.encode("é", &registry), vec![0x82]);
//! ```

use tracing::{debug, warn};

use crate::codepage::CodePageRegistry;
use crate::protocol::commands;

/// Byte substituted for characters no registered code page can render
pub const PLACEHOLDER: u8 = b'?';

/// # Stateful Unicode → ESC/POS Transcoder
///
/// Holds one piece of state: the selector of the character table the
/// printer is believed to have active, or `None` when unknown (fresh
/// encoder, or after `ESC @` reset the hardware).
///
/// One encoder mirrors one printer connection. The state is deliberately
/// unsynchronized: an encoder must not be shared between threads without
/// external exclusion, exactly like the printer it mirrors. The registry,
/// by contrast, is read-only and freely shared.
#[derive(Debug, Clone, Default)]
pub struct TextEncoder {
    current: Option<u8>,
}

impl TextEncoder {
    /// Create an encoder with no known active table.
    ///
    /// The first non-ASCII character encoded will always emit a switch
    /// command, even if the printer happens to already be on a suitable
    /// table; "unknown" is the only safe assumption after power-on.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Selector of the table this encoder believes is active, if any.
    pub fn current_code_page(&self) -> Option<u8> {
        self.current
    }

    /// Forget the active table.
    ///
    /// Must be called whenever the printer state is reset out-of-band,
    /// most commonly by sending `ESC @` (see
    /// [`commands::init`]), which reverts the hardware to its default
    /// table.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Transcode `text` into character bytes interleaved with the
    /// table-switch commands needed to render them.
    ///
    /// Per character, in input order:
    ///
    /// 1. ASCII (`< 0x80`): emitted verbatim, state untouched.
    /// 2. Renderable on the active table: emitted as that table's byte,
    ///    no switch (staying put always beats switching).
    /// 3. Renderable on some table: `ESC t n` for the first such table in
    ///    registry order, state updated, then the byte.
    /// 4. Renderable nowhere: a single [`PLACEHOLDER`] byte, no switch,
    ///    state untouched.
    ///
    /// The operation is total: every Unicode scalar value produces exactly
    /// one output byte (plus at most one switch command), and `encode`
    /// never fails. Control characters embedded in `text` are passed
    /// through like any other ASCII byte; filtering them is the caller's
    /// decision, not this encoder's.
    pub fn encode(&mut self, text: &str, registry: &CodePageRegistry) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len());

        for ch in text.chars() {
            if (ch as u32) < 0x80 {
                out.push(ch as u8);
                continue;
            }

            // Prefer the active table over any earlier-priority one.
            if let Some(id) = self.current {
                if let Some(byte) = registry.page_by_id(id).and_then(|p| p.encode(ch)) {
                    out.push(byte);
                    continue;
                }
            }

            match registry.find_page_for(ch) {
                Some(page) => {
                    // find_page_for only returns pages that encode ch, so
                    // the lookup cannot come back empty here.
                    if let Some(byte) = page.encode(ch) {
                        debug!(
                            page = page.name(),
                            selector = page.id(),
                            "switching code page"
                        );
                        out.extend_from_slice(&commands::select_code_page(page.id()));
                        self.current = Some(page.id());
                        out.push(byte);
                    }
                }
                None => {
                    warn!(
                        ch = %ch.escape_unicode(),
                        "no code page covers character, substituting '?'"
                    );
                    out.push(PLACEHOLDER);
                }
            }
        }

        out
    }
}
