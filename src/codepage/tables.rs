//! # Code Page Glyph Tables
//!
//! Unicode-to-byte tables for the character code pages shipped with
//! Epson-compatible printers. Each function maps a Unicode scalar value to
//! the byte (0x80-0xFF) that renders the same glyph when that table is
//! active, or `None` when the table has no such glyph.
//!
//! The ASCII range never appears here: byte values 0x00-0x7F render
//! identically on every table, and [`CodePage::encode`] handles them before
//! consulting these functions.
//!
//! Table data follows the published IBM/Microsoft code page definitions;
//! a wrong byte here prints a wrong glyph on paper with no error signal,
//! which is why each arm carries its code point for auditability.
//!
//! [`CodePage::encode`]: super::CodePage::encode

/// Map a Unicode code point to its CP437 byte value (0x80-0xFF).
///
/// Returns `None` if the character has no CP437 representation.
/// Reference: IBM Code Page 437 character set.
pub(crate) fn cp437(ch: char) -> Option<u8> {
    let byte = match ch {
        // 0x80-0x9F: Accented Latin, currency
        'Ç' => 0x80, // U+00C7
        'ü' => 0x81, // U+00FC
        'é' => 0x82, // U+00E9
        'â' => 0x83, // U+00E2
        'ä' => 0x84, // U+00E4
        'à' => 0x85, // U+00E0
        'å' => 0x86, // U+00E5
        'ç' => 0x87, // U+00E7
        'ê' => 0x88, // U+00EA
        'ë' => 0x89, // U+00EB
        'è' => 0x8A, // U+00E8
        'ï' => 0x8B, // U+00EF
        'î' => 0x8C, // U+00EE
        'ì' => 0x8D, // U+00EC
        'Ä' => 0x8E, // U+00C4
        'Å' => 0x8F, // U+00C5
        'É' => 0x90, // U+00C9
        'æ' => 0x91, // U+00E6
        'Æ' => 0x92, // U+00C6
        'ô' => 0x93, // U+00F4
        'ö' => 0x94, // U+00F6
        'ò' => 0x95, // U+00F2
        'û' => 0x96, // U+00FB
        'ù' => 0x97, // U+00F9
        'ÿ' => 0x98, // U+00FF
        'Ö' => 0x99, // U+00D6
        'Ü' => 0x9A, // U+00DC
        '¢' => 0x9B, // U+00A2
        '£' => 0x9C, // U+00A3
        '¥' => 0x9D, // U+00A5
        '₧' => 0x9E, // U+20A7
        'ƒ' => 0x9F, // U+0192

        // 0xA0-0xAF: Spanish, fractions, punctuation
        'á' => 0xA0, // U+00E1
        'í' => 0xA1, // U+00ED
        'ó' => 0xA2, // U+00F3
        'ú' => 0xA3, // U+00FA
        'ñ' => 0xA4, // U+00F1
        'Ñ' => 0xA5, // U+00D1
        'ª' => 0xA6, // U+00AA
        'º' => 0xA7, // U+00BA
        '¿' => 0xA8, // U+00BF
        '⌐' => 0xA9, // U+2310
        '¬' => 0xAA, // U+00AC
        '½' => 0xAB, // U+00BD
        '¼' => 0xAC, // U+00BC
        '¡' => 0xAD, // U+00A1
        '«' => 0xAE, // U+00AB
        '»' => 0xAF, // U+00BB

        // 0xB0-0xDF: Shade blocks, box drawing, block elements
        '░' => 0xB0, // U+2591
        '▒' => 0xB1, // U+2592
        '▓' => 0xB2, // U+2593
        '│' => 0xB3, // U+2502
        '┤' => 0xB4, // U+2524
        '╡' => 0xB5, // U+2561
        '╢' => 0xB6, // U+2562
        '╖' => 0xB7, // U+2556
        '╕' => 0xB8, // U+2555
        '╣' => 0xB9, // U+2563
        '║' => 0xBA, // U+2551
        '╗' => 0xBB, // U+2557
        '╝' => 0xBC, // U+255D
        '╜' => 0xBD, // U+255C
        '╛' => 0xBE, // U+255B
        '┐' => 0xBF, // U+2510
        '└' => 0xC0, // U+2514
        '┴' => 0xC1, // U+2534
        '┬' => 0xC2, // U+252C
        '├' => 0xC3, // U+251C
        '─' => 0xC4, // U+2500
        '┼' => 0xC5, // U+253C
        '╞' => 0xC6, // U+255E
        '╟' => 0xC7, // U+255F
        '╚' => 0xC8, // U+255A
        '╔' => 0xC9, // U+2554
        '╩' => 0xCA, // U+2569
        '╦' => 0xCB, // U+2566
        '╠' => 0xCC, // U+2560
        '═' => 0xCD, // U+2550
        '╬' => 0xCE, // U+256C
        '╧' => 0xCF, // U+2567
        '╨' => 0xD0, // U+2568
        '╤' => 0xD1, // U+2564
        '╥' => 0xD2, // U+2565
        '╙' => 0xD3, // U+2559
        '╘' => 0xD4, // U+2558
        '╒' => 0xD5, // U+2552
        '╓' => 0xD6, // U+2553
        '╫' => 0xD7, // U+256B
        '╪' => 0xD8, // U+256A
        '┘' => 0xD9, // U+2518
        '┌' => 0xDA, // U+250C
        '█' => 0xDB, // U+2588
        '▄' => 0xDC, // U+2584
        '▌' => 0xDD, // U+258C
        '▐' => 0xDE, // U+2590
        '▀' => 0xDF, // U+2580

        // 0xE0-0xFF: Greek letters and math symbols
        'α' => 0xE0, // U+03B1
        'ß' => 0xE1, // U+00DF
        'Γ' => 0xE2, // U+0393
        'π' => 0xE3, // U+03C0
        'Σ' => 0xE4, // U+03A3
        'σ' => 0xE5, // U+03C3
        'µ' => 0xE6, // U+00B5
        'τ' => 0xE7, // U+03C4
        'Φ' => 0xE8, // U+03A6
        'Θ' => 0xE9, // U+0398
        'Ω' => 0xEA, // U+03A9
        'δ' => 0xEB, // U+03B4
        '∞' => 0xEC, // U+221E
        'φ' => 0xED, // U+03C6
        'ε' => 0xEE, // U+03B5
        '∩' => 0xEF, // U+2229
        '≡' => 0xF0, // U+2261
        '±' => 0xF1, // U+00B1
        '≥' => 0xF2, // U+2265
        '≤' => 0xF3, // U+2264
        '⌠' => 0xF4, // U+2320
        '⌡' => 0xF5, // U+2321
        '÷' => 0xF6, // U+00F7
        '≈' => 0xF7, // U+2248
        '°' => 0xF8, // U+00B0
        '∙' => 0xF9, // U+2219
        '·' => 0xFA, // U+00B7
        '√' => 0xFB, // U+221A
        'ⁿ' => 0xFC, // U+207F
        '²' => 0xFD, // U+00B2
        '■' => 0xFE, // U+25A0
        '\u{00A0}' => 0xFF, // U+00A0

        _ => return None,
    };
    Some(byte)
}

/// Map a Unicode code point to its JIS X 0201 katakana byte value.
///
/// The half-width katakana block U+FF61-U+FF9F maps one-to-one onto bytes
/// 0xA1-0xDF. Full-width kana are a different Unicode block and are NOT
/// covered; they would need a double-byte kanji mode this library does not
/// implement.
pub(crate) fn katakana(ch: char) -> Option<u8> {
    match ch {
        c @ '\u{FF61}'..='\u{FF9F}' => Some((c as u32 - 0xFF61 + 0xA1) as u8),
        _ => None,
    }
}

/// Map a Unicode code point to its CP850 byte value (0x80-0xFF).
///
/// CP850 "Multilingual" trades most of CP437's Greek, math, and double-line
/// box glyphs for the accented capitals Western European languages need.
pub(crate) fn cp850(ch: char) -> Option<u8> {
    let byte = match ch {
        // 0x80-0x9F: Accented Latin, currency
        'Ç' => 0x80, // U+00C7
        'ü' => 0x81, // U+00FC
        'é' => 0x82, // U+00E9
        'â' => 0x83, // U+00E2
        'ä' => 0x84, // U+00E4
        'à' => 0x85, // U+00E0
        'å' => 0x86, // U+00E5
        'ç' => 0x87, // U+00E7
        'ê' => 0x88, // U+00EA
        'ë' => 0x89, // U+00EB
        'è' => 0x8A, // U+00E8
        'ï' => 0x8B, // U+00EF
        'î' => 0x8C, // U+00EE
        'ì' => 0x8D, // U+00EC
        'Ä' => 0x8E, // U+00C4
        'Å' => 0x8F, // U+00C5
        'É' => 0x90, // U+00C9
        'æ' => 0x91, // U+00E6
        'Æ' => 0x92, // U+00C6
        'ô' => 0x93, // U+00F4
        'ö' => 0x94, // U+00F6
        'ò' => 0x95, // U+00F2
        'û' => 0x96, // U+00FB
        'ù' => 0x97, // U+00F9
        'ÿ' => 0x98, // U+00FF
        'Ö' => 0x99, // U+00D6
        'Ü' => 0x9A, // U+00DC
        'ø' => 0x9B, // U+00F8
        '£' => 0x9C, // U+00A3
        'Ø' => 0x9D, // U+00D8
        '×' => 0x9E, // U+00D7
        'ƒ' => 0x9F, // U+0192

        // 0xA0-0xAF: Spanish, quotes, registered sign
        'á' => 0xA0, // U+00E1
        'í' => 0xA1, // U+00ED
        'ó' => 0xA2, // U+00F3
        'ú' => 0xA3, // U+00FA
        'ñ' => 0xA4, // U+00F1
        'Ñ' => 0xA5, // U+00D1
        'ª' => 0xA6, // U+00AA
        'º' => 0xA7, // U+00BA
        '¿' => 0xA8, // U+00BF
        '®' => 0xA9, // U+00AE
        '¬' => 0xAA, // U+00AC
        '½' => 0xAB, // U+00BD
        '¼' => 0xAC, // U+00BC
        '¡' => 0xAD, // U+00A1
        '«' => 0xAE, // U+00AB
        '»' => 0xAF, // U+00BB

        // 0xB0-0xCF: Shades and box drawing, accented capitals interleaved
        '░' => 0xB0, // U+2591
        '▒' => 0xB1, // U+2592
        '▓' => 0xB2, // U+2593
        '│' => 0xB3, // U+2502
        '┤' => 0xB4, // U+2524
        'Á' => 0xB5, // U+00C1
        'Â' => 0xB6, // U+00C2
        'À' => 0xB7, // U+00C0
        '©' => 0xB8, // U+00A9
        '╣' => 0xB9, // U+2563
        '║' => 0xBA, // U+2551
        '╗' => 0xBB, // U+2557
        '╝' => 0xBC, // U+255D
        '¢' => 0xBD, // U+00A2
        '¥' => 0xBE, // U+00A5
        '┐' => 0xBF, // U+2510
        '└' => 0xC0, // U+2514
        '┴' => 0xC1, // U+2534
        '┬' => 0xC2, // U+252C
        '├' => 0xC3, // U+251C
        '─' => 0xC4, // U+2500
        '┼' => 0xC5, // U+253C
        'ã' => 0xC6, // U+00E3
        'Ã' => 0xC7, // U+00C3
        '╚' => 0xC8, // U+255A
        '╔' => 0xC9, // U+2554
        '╩' => 0xCA, // U+2569
        '╦' => 0xCB, // U+2566
        '╠' => 0xCC, // U+2560
        '═' => 0xCD, // U+2550
        '╬' => 0xCE, // U+256C
        '¤' => 0xCF, // U+00A4

        // 0xD0-0xDF: Icelandic, more accented capitals
        'ð' => 0xD0, // U+00F0
        'Ð' => 0xD1, // U+00D0
        'Ê' => 0xD2, // U+00CA
        'Ë' => 0xD3, // U+00CB
        'È' => 0xD4, // U+00C8
        'ı' => 0xD5, // U+0131
        'Í' => 0xD6, // U+00CD
        'Î' => 0xD7, // U+00CE
        'Ï' => 0xD8, // U+00CF
        '┘' => 0xD9, // U+2518
        '┌' => 0xDA, // U+250C
        '█' => 0xDB, // U+2588
        '▄' => 0xDC, // U+2584
        '¦' => 0xDD, // U+00A6
        'Ì' => 0xDE, // U+00CC
        '▀' => 0xDF, // U+2580

        // 0xE0-0xFF: Accented capitals, punctuation, superscripts
        'Ó' => 0xE0, // U+00D3
        'ß' => 0xE1, // U+00DF
        'Ô' => 0xE2, // U+00D4
        'Ò' => 0xE3, // U+00D2
        'õ' => 0xE4, // U+00F5
        'Õ' => 0xE5, // U+00D5
        'µ' => 0xE6, // U+00B5
        'þ' => 0xE7, // U+00FE
        'Þ' => 0xE8, // U+00DE
        'Ú' => 0xE9, // U+00DA
        'Û' => 0xEA, // U+00DB
        'Ù' => 0xEB, // U+00D9
        'ý' => 0xEC, // U+00FD
        'Ý' => 0xED, // U+00DD
        '¯' => 0xEE, // U+00AF
        '´' => 0xEF, // U+00B4
        '\u{00AD}' => 0xF0, // U+00AD
        '±' => 0xF1, // U+00B1
        '‗' => 0xF2, // U+2017
        '¾' => 0xF3, // U+00BE
        '¶' => 0xF4, // U+00B6
        '§' => 0xF5, // U+00A7
        '÷' => 0xF6, // U+00F7
        '¸' => 0xF7, // U+00B8
        '°' => 0xF8, // U+00B0
        '¨' => 0xF9, // U+00A8
        '·' => 0xFA, // U+00B7
        '¹' => 0xFB, // U+00B9
        '³' => 0xFC, // U+00B3
        '²' => 0xFD, // U+00B2
        '■' => 0xFE, // U+25A0
        '\u{00A0}' => 0xFF, // U+00A0

        _ => return None,
    };
    Some(byte)
}

/// Map a Unicode code point to its CP865 byte value (0x80-0xFF).
///
/// CP865 "Nordic" is CP437 with three substitutions: the cent, yen, and
/// right-guillemet positions hold ø, Ø, and ¤ instead.
pub(crate) fn cp865(ch: char) -> Option<u8> {
    match ch {
        'ø' => Some(0x9B), // U+00F8
        'Ø' => Some(0x9D), // U+00D8
        '¤' => Some(0xAF), // U+00A4
        '¢' | '¥' | '»' => None,
        _ => cp437(ch),
    }
}

/// Map a Unicode code point to its Windows-1252 byte value (0x80-0xFF).
///
/// 0xA0-0xFF is identical to ISO-8859-1, so the byte value equals the code
/// point there. 0x80-0x9F holds typographic extras (curly quotes, dashes,
/// the euro sign); five positions in that range are unassigned.
pub(crate) fn cp1252(ch: char) -> Option<u8> {
    let byte = match ch {
        // 0x80-0x9F: Typographic extensions
        '€' => 0x80, // U+20AC
        '‚' => 0x82, // U+201A
        'ƒ' => 0x83, // U+0192
        '„' => 0x84, // U+201E
        '…' => 0x85, // U+2026
        '†' => 0x86, // U+2020
        '‡' => 0x87, // U+2021
        'ˆ' => 0x88, // U+02C6
        '‰' => 0x89, // U+2030
        'Š' => 0x8A, // U+0160
        '‹' => 0x8B, // U+2039
        'Œ' => 0x8C, // U+0152
        'Ž' => 0x8E, // U+017D
        '‘' => 0x91, // U+2018
        '’' => 0x92, // U+2019
        '“' => 0x93, // U+201C
        '”' => 0x94, // U+201D
        '•' => 0x95, // U+2022
        '–' => 0x96, // U+2013
        '—' => 0x97, // U+2014
        '˜' => 0x98, // U+02DC
        '™' => 0x99, // U+2122
        'š' => 0x9A, // U+0161
        '›' => 0x9B, // U+203A
        'œ' => 0x9C, // U+0153
        'ž' => 0x9E, // U+017E
        'Ÿ' => 0x9F, // U+0178

        // 0xA0-0xFF: Latin-1 identity region
        c @ '\u{00A0}'..='\u{00FF}' => c as u8,

        _ => return None,
    };
    Some(byte)
}

/// Map a Unicode code point to its CP866 byte value (0x80-0xFF).
///
/// The Cyrillic alphabet occupies three contiguous runs, so those map as
/// ranges. The box-drawing region 0xB0-0xDF is byte-for-byte the same as
/// CP437.
pub(crate) fn cp866(ch: char) -> Option<u8> {
    let byte = match ch {
        // Contiguous Cyrillic runs
        c @ 'А'..='Я' => (c as u32 - 0x0410 + 0x80) as u8,
        c @ 'а'..='п' => (c as u32 - 0x0430 + 0xA0) as u8,
        c @ 'р'..='я' => (c as u32 - 0x0440 + 0xE0) as u8,

        // 0xB0-0xDF: Shade blocks, box drawing, block elements (as CP437)
        '░' => 0xB0, // U+2591
        '▒' => 0xB1, // U+2592
        '▓' => 0xB2, // U+2593
        '│' => 0xB3, // U+2502
        '┤' => 0xB4, // U+2524
        '╡' => 0xB5, // U+2561
        '╢' => 0xB6, // U+2562
        '╖' => 0xB7, // U+2556
        '╕' => 0xB8, // U+2555
        '╣' => 0xB9, // U+2563
        '║' => 0xBA, // U+2551
        '╗' => 0xBB, // U+2557
        '╝' => 0xBC, // U+255D
        '╜' => 0xBD, // U+255C
        '╛' => 0xBE, // U+255B
        '┐' => 0xBF, // U+2510
        '└' => 0xC0, // U+2514
        '┴' => 0xC1, // U+2534
        '┬' => 0xC2, // U+252C
        '├' => 0xC3, // U+251C
        '─' => 0xC4, // U+2500
        '┼' => 0xC5, // U+253C
        '╞' => 0xC6, // U+255E
        '╟' => 0xC7, // U+255F
        '╚' => 0xC8, // U+255A
        '╔' => 0xC9, // U+2554
        '╩' => 0xCA, // U+2569
        '╦' => 0xCB, // U+2566
        '╠' => 0xCC, // U+2560
        '═' => 0xCD, // U+2550
        '╬' => 0xCE, // U+256C
        '╧' => 0xCF, // U+2567
        '╨' => 0xD0, // U+2568
        '╤' => 0xD1, // U+2564
        '╥' => 0xD2, // U+2565
        '╙' => 0xD3, // U+2559
        '╘' => 0xD4, // U+2558
        '╒' => 0xD5, // U+2552
        '╓' => 0xD6, // U+2553
        '╫' => 0xD7, // U+256B
        '╪' => 0xD8, // U+256A
        '┘' => 0xD9, // U+2518
        '┌' => 0xDA, // U+250C
        '█' => 0xDB, // U+2588
        '▄' => 0xDC, // U+2584
        '▌' => 0xDD, // U+258C
        '▐' => 0xDE, // U+2590
        '▀' => 0xDF, // U+2580

        // 0xF0-0xFF: Non-Russian Cyrillic, math, section marks
        'Ё' => 0xF0, // U+0401
        'ё' => 0xF1, // U+0451
        'Є' => 0xF2, // U+0404
        'є' => 0xF3, // U+0454
        'Ї' => 0xF4, // U+0407
        'ї' => 0xF5, // U+0457
        'Ў' => 0xF6, // U+040E
        'ў' => 0xF7, // U+045E
        '°' => 0xF8, // U+00B0
        '∙' => 0xF9, // U+2219
        '·' => 0xFA, // U+00B7
        '√' => 0xFB, // U+221A
        '№' => 0xFC, // U+2116
        '¤' => 0xFD, // U+00A4
        '■' => 0xFE, // U+25A0
        '\u{00A0}' => 0xFF, // U+00A0

        _ => return None,
    };
    Some(byte)
}

/// Map a Unicode code point to its CP858 byte value (0x80-0xFF).
///
/// CP858 is CP850 with a single substitution: position 0xD5 holds the euro
/// sign instead of the dotless i.
pub(crate) fn cp858(ch: char) -> Option<u8> {
    match ch {
        '€' => Some(0xD5), // U+20AC
        'ı' => None,
        _ => cp850(ch),
    }
}
