//! # ESC/POS Protocol Commands
//!
//! This module implements the core command set of the ESC/POS protocol used
//! by Epson-compatible thermal receipt printers.
//!
//! ## Protocol Overview
//!
//! ESC/POS commands are byte sequences starting with escape characters. The
//! protocol supports:
//!
//! - **Text printing**: Various fonts, sizes, alignments, and styles
//! - **Character tables**: Single-byte code page selection
//! - **Paper control**: Feeding, cutting
//! - **Peripherals**: Cash drawer kick pulse
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `HT`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC d n`, `ESC t n`, `GS V m n`
//!
//! ## Reference
//!
//! Based on the "ESC/POS Application Programming Guide"
//! by Seiko Epson Corp.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Prefix for the later command groups (cutter, character size, barcodes):
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount.
pub const LF: u8 = 0x0A;

/// HT (Horizontal Tab) - Advance to next tab position
pub const HT: u8 = 0x09;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. This should be called
/// at the start of each print job to ensure consistent behavior.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Text formatting (bold, underline, invert) disabled
/// - Character size reset to 1x1
/// - Alignment reset to left
/// - **The active character code page reverts to the printer default**
///
/// The last point matters for text transcoding: any software mirror of the
/// printer's active code page must be cleared whenever this command is sent
/// (see [`crate::TextEncoder::reset`]).
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands;
///
/// let init = commands::init();
/// assert_eq!(init, vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CHARACTER TABLE SELECTION
// ============================================================================

/// # Select Character Code Table (ESC t n)
///
/// Selects which single-byte character table the printer uses to render
/// byte values 0x80–0xFF. Bytes 0x00–0x7F are plain ASCII on every table.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC t n |
/// | Hex     | 1B 74 n |
/// | Decimal | 27 116 n |
///
/// ## Common Table Assignments (Epson)
///
/// | n | Code Page | Characters |
/// |---|-----------|------------|
/// | 0 | CP437 | US English, box drawing (default) |
/// | 1 | Katakana | Japanese half-width |
/// | 2 | CP850 | Western European |
/// | 5 | CP865 | Nordic |
/// | 16 | Windows-1252 | Western European + typography |
/// | 17 | CP866 | Cyrillic |
/// | 19 | CP858 | Western European + Euro |
///
/// Selector values are printer-firmware constants: sending the wrong `n`
/// silently renders wrong glyphs with no error signal, so the values must
/// come from the printer's documentation (see [`crate::codepage`]).
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands;
///
/// let cmd = commands::select_code_page(16);
/// assert_eq!(cmd, vec![0x1B, 0x74, 16]);
/// ```
#[inline]
pub fn select_code_page(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the data in the line buffer and feeds n lines forward.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC d n   |
/// | Hex     | 1B 64 n   |
/// | Decimal | 27 100 n  |
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands;
///
/// // Feed 4 lines
/// let cmd = commands::feed(4);
/// assert_eq!(cmd, vec![0x1B, 0x64, 4]);
/// ```
#[inline]
pub fn feed(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Print and Feed Paper (ESC J n)
///
/// Prints the line buffer and feeds paper by n motion units (typically
/// n/180 inch on Epson hardware). Finer-grained than [`feed`].
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC J n   |
/// | Hex     | 1B 4A n   |
/// | Decimal | 27 74 n   |
#[inline]
pub fn feed_units(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Full Cut at Current Position (GS V 0)
///
/// Performs a full cut at the current paper position without feeding.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 0   |
/// | Hex     | 1D 56 00 |
/// | Decimal | 29 86 0  |
///
/// ## Behavior
///
/// Cuts at the current position, which on most mechanisms is several
/// millimeters above the last printed line. Use [`cut_feed`] to feed the
/// printed content past the blade first.
#[inline]
pub fn cut_full() -> Vec<u8> {
    vec![GS, b'V', 0]
}

/// # Partial Cut at Current Position (GS V 1)
///
/// Performs a partial cut (leaves small uncut portion) at current position.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 1   |
/// | Hex     | 1D 56 01 |
/// | Decimal | 29 86 1  |
///
/// ## Behavior
///
/// Partial cuts leave a small "hinge" connecting the receipt to the roll,
/// making it easy to tear off while preventing the receipt from falling.
#[inline]
pub fn cut_partial() -> Vec<u8> {
    vec![GS, b'V', 1]
}

/// # Feed n Lines, Then Full Cut (GS V 66 n)
///
/// Function B of the cut command: feeds paper so the printed content is
/// past the cutter, then performs a full cut. The most common way to end a
/// receipt.
///
/// ## Protocol Details
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | GS V B n   |
/// | Hex     | 1D 56 42 n |
/// | Decimal | 29 86 66 n |
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands;
///
/// // End of receipt: feed 3 lines and cut
/// let cmd = commands::cut_feed(3);
/// assert_eq!(cmd, vec![0x1D, 0x56, 0x42, 3]);
/// ```
#[inline]
pub fn cut_feed(n: u8) -> Vec<u8> {
    vec![GS, b'V', 66, n]
}

// ============================================================================
// CASH DRAWER
// ============================================================================

/// # Generate Drawer Kick Pulse (ESC p m t1 t2)
///
/// Sends an open pulse to the cash drawer connected to the printer's
/// drawer kick-out connector.
///
/// ## Protocol Details
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC p m t1 t2  |
/// | Hex     | 1B 70 m t1 t2  |
/// | Decimal | 27 112 m t1 t2 |
///
/// ## Parameters
///
/// - `pin`: Connector pin (0 = pin 2, 1 = pin 5)
/// - `on_time` / `off_time`: Pulse timing in units of 2 ms
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands;
///
/// // 120ms on, 240ms off, pin 2
/// let cmd = commands::pulse(0, 60, 120);
/// assert_eq!(cmd, vec![0x1B, 0x70, 0, 60, 120]);
/// ```
#[inline]
pub fn pulse(pin: u8, on_time: u8, off_time: u8) -> Vec<u8> {
    vec![ESC, b'p', pin, on_time, off_time]
}

// ============================================================================
// TESTS
// ============================================================================
