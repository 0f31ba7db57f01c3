//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! used by Epson-compatible thermal receipt printers (TM-T20, TM-T88,
//! TM-U220, and countless no-name clones).
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, cut, feed, code page select)
//! - [`text`]: Text styling (alignment, fonts, bold, underline, etc.)
//!
//! ## Usage Example
//!
//! ```
//! use boleta::protocol::{commands, text};
//!
//! // Build a simple print sequence
//! let mut data = Vec::new();
//!
//! // Initialize printer
//! data.extend(commands::init());
//!
//! // Set text style
//! data.extend(text::justify_center());
//! data.extend(text::bold_on());
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold_off());
//! data.extend(text::justify_left());
//!
//! // Feed and cut
//! data.extend(commands::feed(4));
//! data.extend(commands::cut_partial());
//!
//! // Send `data` to printer via transport...
//! ```
//!
//! ## Protocol Reference
//!
//! This implementation is based on the "ESC/POS Application Programming
//! Guide" by Seiko Epson Corp. Command support varies between printer
//! generations; everything here is in the common subset.

pub mod commands;
pub mod text;
