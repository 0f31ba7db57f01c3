//! # Character Code Pages
//!
//! ESC/POS printers are byte-oriented: byte values 0x00–0x7F always render
//! as ASCII, while 0x80–0xFF render through a printer-resident *character
//! code table* selected with `ESC t n`. Only one table is active at a time.
//!
//! This module models those tables and the ordered set of them a printer
//! supports:
//!
//! - [`CodePage`]: one table, carrying its `ESC t` selector value, a
//!   human-readable name, and a partial Unicode → byte glyph mapping.
//! - [`CodePageRegistry`]: the ordered, immutable collection the transcoder
//!   queries. Registry order is the priority order used to pick a table for
//!   a character that the active table cannot render.
//!
//! ## Selector Values Are Firmware Constants
//!
//! The `id` sent in `ESC t n` is assigned by the printer firmware, not by
//! this library. The built-in set ([`CodePageRegistry::epson`]) uses the
//! Epson assignments; printers from other vendors may number the same
//! tables differently, in which case a custom registry must be built from
//! the printer's documentation. A wrong selector silently prints wrong
//! glyphs; there is no error signal on the wire.
//!
//! ## Example
//!
//! ```
//! use boleta::codepage::{CodePage, CodePageRegistry};
//!
//! let registry = CodePageRegistry::epson();
//!
//! // 'é' is on the first page, CP437
//! let page = registry.find_page_for('é').unwrap();
//! assert_eq!(page.id(), 0);
//! assert_eq!(page.encode('é'), Some(0x82));
//!
//! // 'ø' is not in CP437; the first page that covers it is CP850
//! assert_eq!(registry.find_page_for('ø').unwrap().id(), 2);
//!
//! // No registered table covers Thai
//! assert!(registry.find_page_for('ฃ').is_none());
//! ```

use std::fmt;

use crate::error::BoletaError;

mod tables;

// ============================================================================
// CODE PAGE
// ============================================================================

/// # Character Code Page
///
/// One printer character table: the selector value sent in `ESC t n`, a
/// name for diagnostics, and the glyph table mapping Unicode scalar values
/// to bytes in 0x80–0xFF.
///
/// Code pages are plain static data (`Copy`, no allocation) and are
/// constructed once; the transcoder only ever reads them.
///
/// ## ASCII Passthrough
///
/// Every table renders bytes 0x00–0x7F as ASCII, so [`CodePage::encode`]
/// answers the ASCII range itself and the glyph tables only ever list
/// entries for 0x80 and above.
#[derive(Clone, Copy)]
pub struct CodePage {
    id: u8,
    name: &'static str,
    table: fn(char) -> Option<u8>,
}

impl CodePage {
    /// Create a code page from a selector value, a name, and a glyph table.
    ///
    /// The glyph table must only return bytes in 0x80–0xFF; the ASCII range
    /// is handled by [`CodePage::encode`] before the table is consulted.
    pub const fn new(id: u8, name: &'static str, table: fn(char) -> Option<u8>) -> Self {
        Self { id, name, table }
    }

    /// The selector value sent in the `ESC t n` table-switch command.
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Human-readable table name, for diagnostics and logging only.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Encode one character as a single byte under this table.
    ///
    /// - ASCII (U+0000–U+007F): the code point itself, on every table
    /// - Mapped glyphs: the table byte (0x80–0xFF)
    /// - Anything else: `None`
    pub fn encode(&self, ch: char) -> Option<u8> {
        if (ch as u32) < 0x80 {
            Some(ch as u8)
        } else {
            (self.table)(ch)
        }
    }

    /// Whether this table can render `ch` at all.
    #[inline]
    pub fn can_encode(&self, ch: char) -> bool {
        self.encode(ch).is_some()
    }

    // ------------------------------------------------------------------
    // Built-in tables (Epson selector assignments)
    // ------------------------------------------------------------------

    /// Code Page 437 (US English, box drawing), Epson selector 0. The
    /// power-on default on most hardware.
    pub const CP437: Self = Self::new(0, "CP437", tables::cp437);

    /// JIS X 0201 half-width katakana, Epson selector 1.
    pub const KATAKANA: Self = Self::new(1, "Katakana", tables::katakana);

    /// Code Page 850 (Western European "Multilingual"), Epson selector 2.
    pub const CP850: Self = Self::new(2, "CP850", tables::cp850);

    /// Code Page 865 (Nordic), Epson selector 5.
    pub const CP865: Self = Self::new(5, "CP865", tables::cp865);

    /// Windows-1252 (Western European plus typographic extras), Epson
    /// selector 16.
    pub const CP1252: Self = Self::new(16, "Windows-1252", tables::cp1252);

    /// Code Page 866 (Cyrillic), Epson selector 17.
    pub const CP866: Self = Self::new(17, "CP866", tables::cp866);

    /// Code Page 858 (CP850 with the euro sign), Epson selector 19.
    pub const CP858: Self = Self::new(19, "CP858", tables::cp858);
}

impl fmt::Debug for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodePage")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

// ============================================================================
// CODE PAGE REGISTRY
// ============================================================================

/// # Code Page Registry
///
/// The ordered set of code pages available on one printer. The order is
/// meaningful: when the transcoder must switch tables, it picks the
/// *first* page in registry order that can render the character at hand.
///
/// A registry is immutable after construction and can be shared read-only
/// between any number of transcoders (one per printer connection).
#[derive(Debug, Clone)]
pub struct CodePageRegistry {
    pages: Vec<CodePage>,
}

impl CodePageRegistry {
    /// Build a registry from an ordered list of code pages.
    ///
    /// ## Errors
    ///
    /// Returns [`BoletaError::Config`] if the list is empty or two pages
    /// share a selector value. Both indicate a configuration defect, not a
    /// runtime condition, so construction fails fast rather than letting a
    /// broken table set reach the wire.
    pub fn new(pages: Vec<CodePage>) -> Result<Self, BoletaError> {
        if pages.is_empty() {
            return Err(BoletaError::Config(
                "code page registry must contain at least one page".into(),
            ));
        }
        for (i, page) in pages.iter().enumerate() {
            if pages[..i].iter().any(|p| p.id() == page.id()) {
                return Err(BoletaError::Config(format!(
                    "duplicate code page selector {} ({})",
                    page.id(),
                    page.name()
                )));
            }
        }
        Ok(Self { pages })
    }

    /// The code page set of a stock Epson ESC/POS printer, in selector
    /// order: CP437, Katakana, CP850, CP865, Windows-1252, CP866, CP858.
    pub fn epson() -> Self {
        Self::new(vec![
            CodePage::CP437,
            CodePage::KATAKANA,
            CodePage::CP850,
            CodePage::CP865,
            CodePage::CP1252,
            CodePage::CP866,
            CodePage::CP858,
        ])
        .expect("built-in Epson code page set is valid")
    }

    /// The registered pages, in priority order.
    pub fn pages(&self) -> &[CodePage] {
        &self.pages
    }

    /// First page in registry order that can render `ch`.
    ///
    /// Every page trivially qualifies for ASCII (`ch < 0x80`); preferring
    /// the *currently active* page for such characters is the transcoder's
    /// job, not the registry's.
    pub fn find_page_for(&self, ch: char) -> Option<&CodePage> {
        self.pages.iter().find(|p| p.can_encode(ch))
    }

    /// Look up a page by its selector value.
    pub fn page_by_id(&self, id: u8) -> Option<&CodePage> {
        self.pages.iter().find(|p| p.id() == id)
    }
}

impl Default for CodePageRegistry {
    fn default() -> Self {
        Self::epson()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ascii_encodes_on_every_page() {
        for page in CodePageRegistry::epson().pages() {
            assert_eq!(page.encode('A'), Some(0x41), "page {}", page.name());
            assert_eq!(page.encode('\n'), Some(0x0A), "page {}", page.name());
            assert_eq!(page.encode('\x1B'), Some(0x1B), "page {}", page.name());
        }
    }

    #[test]
    fn test_cp437_glyphs() {
        assert_eq!(CodePage::CP437.encode('é'), Some(0x82));
        assert_eq!(CodePage::CP437.encode('æ'), Some(0x91));
        assert_eq!(CodePage::CP437.encode('ß'), Some(0xE1));
        assert_eq!(CodePage::CP437.encode('½'), Some(0xAB));
        assert_eq!(CodePage::CP437.encode('═'), Some(0xCD));
        // No ø in CP437 (that's what CP850/CP865 are for)
        assert_eq!(CodePage::CP437.encode('ø'), None);
    }

    #[test]
    fn test_katakana_glyphs() {
        assert_eq!(CodePage::KATAKANA.encode('｡'), Some(0xA1));
        assert_eq!(CodePage::KATAKANA.encode('ｱ'), Some(0xB1));
        assert_eq!(CodePage::KATAKANA.encode('ﾝ'), Some(0xDD));
        assert_eq!(CodePage::KATAKANA.encode('ﾟ'), Some(0xDF));
        // Full-width kana are out of range
        assert_eq!(CodePage::KATAKANA.encode('ア'), None);
    }

    #[test]
    fn test_cp850_glyphs() {
        assert_eq!(CodePage::CP850.encode('ø'), Some(0x9B));
        assert_eq!(CodePage::CP850.encode('Ø'), Some(0x9D));
        assert_eq!(CodePage::CP850.encode('Á'), Some(0xB5));
        assert_eq!(CodePage::CP850.encode('ı'), Some(0xD5));
        assert_eq!(CodePage::CP850.encode('þ'), Some(0xE7));
        // CP850 dropped CP437's Greek block
        assert_eq!(CodePage::CP850.encode('Γ'), None);
    }

    #[test]
    fn test_cp865_is_cp437_with_nordic_substitutions() {
        assert_eq!(CodePage::CP865.encode('ø'), Some(0x9B));
        assert_eq!(CodePage::CP865.encode('Ø'), Some(0x9D));
        assert_eq!(CodePage::CP865.encode('¤'), Some(0xAF));
        // The three displaced CP437 glyphs
        assert_eq!(CodePage::CP865.encode('¢'), None);
        assert_eq!(CodePage::CP865.encode('¥'), None);
        assert_eq!(CodePage::CP865.encode('»'), None);
        // Everything else falls through to CP437
        assert_eq!(CodePage::CP865.encode('æ'), Some(0x91));
        assert_eq!(CodePage::CP865.encode('å'), Some(0x86));
    }

    #[test]
    fn test_cp1252_glyphs() {
        assert_eq!(CodePage::CP1252.encode('€'), Some(0x80));
        assert_eq!(CodePage::CP1252.encode('œ'), Some(0x9C));
        assert_eq!(CodePage::CP1252.encode('Š'), Some(0x8A));
        // Latin-1 identity region: byte == code point
        assert_eq!(CodePage::CP1252.encode('é'), Some(0xE9));
        assert_eq!(CodePage::CP1252.encode('ÿ'), Some(0xFF));
        assert_eq!(CodePage::CP1252.encode('°'), Some(0xB0));
    }

    #[test]
    fn test_cp866_glyphs() {
        assert_eq!(CodePage::CP866.encode('А'), Some(0x80));
        assert_eq!(CodePage::CP866.encode('Я'), Some(0x9F));
        assert_eq!(CodePage::CP866.encode('а'), Some(0xA0));
        assert_eq!(CodePage::CP866.encode('п'), Some(0xAF));
        assert_eq!(CodePage::CP866.encode('р'), Some(0xE0));
        assert_eq!(CodePage::CP866.encode('я'), Some(0xEF));
        assert_eq!(CodePage::CP866.encode('Ё'), Some(0xF0));
        assert_eq!(CodePage::CP866.encode('№'), Some(0xFC));
        // Greek is not Cyrillic
        assert_eq!(CodePage::CP866.encode('Ω'), None);
    }

    #[test]
    fn test_cp858_trades_dotless_i_for_euro() {
        assert_eq!(CodePage::CP858.encode('€'), Some(0xD5));
        assert_eq!(CodePage::CP858.encode('ı'), None);
        // Everything else falls through to CP850
        assert_eq!(CodePage::CP858.encode('ø'), Some(0x9B));
        assert_eq!(CodePage::CP850.encode('€'), None);
    }

    #[test]
    fn test_registry_rejects_empty_set() {
        let err = CodePageRegistry::new(vec![]).unwrap_err();
        assert!(matches!(err, BoletaError::Config(_)));
    }

    #[test]
    fn test_registry_rejects_duplicate_selectors() {
        let dup = CodePage::new(0, "CP437 again", |_| None);
        let err = CodePageRegistry::new(vec![CodePage::CP437, dup]).unwrap_err();
        assert!(matches!(err, BoletaError::Config(_)));
    }

    #[test]
    fn test_find_page_for_respects_registry_order() {
        let registry = CodePageRegistry::epson();
        // 'é' is on CP437, CP850, CP865, CP1252, CP858; first wins
        assert_eq!(registry.find_page_for('é').unwrap().id(), 0);
        // 'ø' first appears on CP850
        assert_eq!(registry.find_page_for('ø').unwrap().id(), 2);
        // '€' first appears on Windows-1252, ahead of CP858
        assert_eq!(registry.find_page_for('€').unwrap().id(), 16);
        // Cyrillic only on CP866
        assert_eq!(registry.find_page_for('ж').unwrap().id(), 17);
        // ASCII qualifies everywhere; first page wins
        assert_eq!(registry.find_page_for('A').unwrap().id(), 0);
    }

    #[test]
    fn test_find_page_for_unmapped_scripts() {
        let registry = CodePageRegistry::epson();
        assert!(registry.find_page_for('ฃ').is_none()); // Thai
        assert!(registry.find_page_for('א').is_none()); // Hebrew
        assert!(registry.find_page_for('中').is_none()); // CJK
        assert!(registry.find_page_for('😀').is_none());
    }

    #[test]
    fn test_page_by_id() {
        let registry = CodePageRegistry::epson();
        assert_eq!(registry.page_by_id(0).unwrap().name(), "CP437");
        assert_eq!(registry.page_by_id(17).unwrap().name(), "CP866");
        assert!(registry.page_by_id(99).is_none());
    }
}
