//! # ESC/POS Text Styling Commands
//!
//! This module implements text formatting commands for Epson-compatible
//! receipt printers.
//!
//! ## Text Styling Overview
//!
//! ESC/POS supports various text effects that can be combined:
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Bold | ESC E n | **Emphasized** text |
//! | Underline | ESC - n | Underlined text |
//! | Double-strike | ESC G n | Darker text (second pass) |
//! | Invert | GS B n | White on black |
//! | Size | GS ! n | 1x–8x width/height |
//! | Upside Down | ESC { n | 180° rotation |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use super::commands::{ESC, GS};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text justification options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Justification (ESC a n)
///
/// Sets the alignment for subsequent text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Behavior
///
/// - Affects all subsequent text until changed
/// - Takes effect at start of next line
/// - Reset by ESC @ (initialize)
///
/// ## Example
///
/// ```
/// use boleta::protocol::text::{justify, Justification};
///
/// let center = justify(Justification::Center);
/// assert_eq!(center, vec![0x1B, 0x61, 0x01]);
/// ```
pub fn justify(justification: Justification) -> Vec<u8> {
    vec![ESC, b'a', justification as u8]
}

/// Convenience function for left justification
#[inline]
pub fn justify_left() -> Vec<u8> {
    justify(Justification::Left)
}

/// Convenience function for center justification
#[inline]
pub fn justify_center() -> Vec<u8> {
    justify(Justification::Center)
}

/// Convenience function for right justification
#[inline]
pub fn justify_right() -> Vec<u8> {
    justify(Justification::Right)
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A: 12×24 dots, 48 columns on 80mm paper
    #[default]
    A = 0,
    /// Font B: 9×17 dots, 64 columns on 80mm paper
    B = 1,
}

/// # Select Font (ESC M n)
///
/// Selects the character font for subsequent text.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC M n |
/// | Hex     | 1B 4D n |
/// | Decimal | 27 77 n |
///
/// ## Example
///
/// ```
/// use boleta::protocol::text::{font, Font};
///
/// let font_b = font(Font::B);
/// assert_eq!(font_b, vec![0x1B, 0x4D, 0x01]);
/// ```
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

// ============================================================================
// TEXT EMPHASIS (BOLD)
// ============================================================================

/// # Enable Bold/Emphasis (ESC E 1)
///
/// Turns on emphasized (bold) printing for subsequent text.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E 1 |
/// | Hex     | 1B 45 01 |
/// | Decimal | 27 69 1 |
///
/// ## Effect
///
/// Text is printed with thicker strokes. On thermal printers, this
/// typically means more heat applied.
///
/// ## Example
///
/// ```
/// use boleta::protocol::text::{bold_on, bold_off};
///
/// let mut data = Vec::new();
/// data.extend(bold_on());
/// data.extend(b"IMPORTANT");
/// data.extend(bold_off());
/// ```
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E', 1]
}

/// Disable bold/emphasis (ESC E 0)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'E', 0]
}

// ============================================================================
// DOUBLE-STRIKE
// ============================================================================

/// # Enable Double-Strike (ESC G 1)
///
/// Prints each line twice for a darker result. Visually close to bold on
/// most thermal mechanisms; kept separate because some impact printers
/// render them differently.
#[inline]
pub fn double_strike_on() -> Vec<u8> {
    vec![ESC, b'G', 1]
}

/// Disable double-strike (ESC G 0)
#[inline]
pub fn double_strike_off() -> Vec<u8> {
    vec![ESC, b'G', 0]
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// # Set Underline Mode (ESC - n)
///
/// Enables or disables underline for subsequent text.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC - n |
/// | Hex     | 1B 2D n |
/// | Decimal | 27 45 n |
///
/// ## Parameters
///
/// - `n = 0`: Underline OFF
/// - `n = 1`: Underline ON (1 dot thick)
/// - `n = 2`: Underline ON (2 dots thick)
///
/// ## Note
///
/// Underline does not affect horizontal tabs or upside-down text.
///
/// ## Example
///
/// ```
/// use boleta::protocol::text::{underline_on, underline_off};
///
/// let mut data = Vec::new();
/// data.extend(underline_on());
/// data.extend(b"underlined text");
/// data.extend(underline_off());
/// ```
#[inline]
pub fn underline_on() -> Vec<u8> {
    vec![ESC, b'-', 1]
}

/// Disable underline
#[inline]
pub fn underline_off() -> Vec<u8> {
    vec![ESC, b'-', 0]
}

// ============================================================================
// INVERT (WHITE ON BLACK)
// ============================================================================

/// # Enable Inverted Printing (GS B 1)
///
/// Prints white text on a black background.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS B 1 |
/// | Hex     | 1D 42 01 |
/// | Decimal | 29 66 1 |
///
/// ## Notes
///
/// - Uses more thermal paper (prints the background)
/// - Good for headers and emphasis
///
/// ## Example
///
/// ```
/// use boleta::protocol::text::{invert_on, invert_off};
///
/// let mut data = Vec::new();
/// data.extend(invert_on());
/// data.extend(b" SALE! ");
/// data.extend(invert_off());
/// ```
#[inline]
pub fn invert_on() -> Vec<u8> {
    vec![GS, b'B', 1]
}

/// Disable inverted printing (GS B 0)
#[inline]
pub fn invert_off() -> Vec<u8> {
    vec![GS, b'B', 0]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Set Character Size (GS ! n)
///
/// Sets horizontal and vertical character magnification.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
/// | Decimal | 29 33 n |
///
/// ## Parameters
///
/// `n` packs both magnifications into one byte:
/// - Bits 4–6: width multiplier minus one (0–7 = 1x to 8x)
/// - Bits 0–2: height multiplier minus one (0–7 = 1x to 8x)
///
/// ## Example
///
/// ```
/// use boleta::protocol::text::size;
///
/// // Double width and height (2x2)
/// let big = size(2, 2);
/// assert_eq!(big, vec![0x1D, 0x21, 0x11]);
///
/// // Triple height, normal width
/// let tall = size(1, 3);
/// assert_eq!(tall, vec![0x1D, 0x21, 0x02]);
/// ```
pub fn size(width_mult: u8, height_mult: u8) -> Vec<u8> {
    let w = width_mult.clamp(1, 8) - 1;
    let h = height_mult.clamp(1, 8) - 1;
    vec![GS, b'!', (w << 4) | h]
}

/// Reset to normal size (1x1)
#[inline]
pub fn size_normal() -> Vec<u8> {
    size(1, 1)
}

/// Double size (2x2)
#[inline]
pub fn size_double() -> Vec<u8> {
    size(2, 2)
}

// ============================================================================
// UPSIDE-DOWN MODE
// ============================================================================

/// # Enable Upside-Down Mode (ESC { 1)
///
/// Prints subsequent lines rotated 180 degrees.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC { 1 |
/// | Hex     | 1B 7B 01 |
/// | Decimal | 27 123 1 |
///
/// ## Use Cases
///
/// - Receipts mounted facing the customer
/// - Tear-off stubs
#[inline]
pub fn upside_down_on() -> Vec<u8> {
    vec![ESC, b'{', 1]
}

/// Disable upside-down mode (ESC { 0)
#[inline]
pub fn upside_down_off() -> Vec<u8> {
    vec![ESC, b'{', 0]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify() {
        assert_eq!(justify(Justification::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(justify(Justification::Center), vec![0x1B, 0x61, 0x01]);
        assert_eq!(justify(Justification::Right), vec![0x1B, 0x61, 0x02]);
    }

    #[test]
    fn test_font() {
        assert_eq!(font(Font::A), vec![0x1B, 0x4D, 0x00]);
        assert_eq!(font(Font::B), vec![0x1B, 0x4D, 0x01]);
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold_on(), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold_off(), vec![0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_double_strike() {
        assert_eq!(double_strike_on(), vec![0x1B, 0x47, 0x01]);
        assert_eq!(double_strike_off(), vec![0x1B, 0x47, 0x00]);
    }

    #[test]
    fn test_underline() {
        assert_eq!(underline_on(), vec![0x1B, 0x2D, 0x01]);
        assert_eq!(underline_off(), vec![0x1B, 0x2D, 0x00]);
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert_on(), vec![0x1D, 0x42, 0x01]);
        assert_eq!(invert_off(), vec![0x1D, 0x42, 0x00]);
    }

    #[test]
    fn test_size() {
        assert_eq!(size(1, 1), vec![0x1D, 0x21, 0x00]);
        assert_eq!(size(2, 2), vec![0x1D, 0x21, 0x11]);
        assert_eq!(size(8, 8), vec![0x1D, 0x21, 0x77]);
        // Should clamp to 1..=8
        assert_eq!(size(0, 20), vec![0x1D, 0x21, 0x07]);
    }

    #[test]
    fn test_upside_down() {
        assert_eq!(upside_down_on(), vec![0x1B, 0x7B, 0x01]);
        assert_eq!(upside_down_off(), vec![0x1B, 0x7B, 0x00]);
    }
}
