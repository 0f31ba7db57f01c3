//! # Printer Facade
//!
//! This module ties the pieces together: one [`Printer`] owns one
//! transport, the code page registry for that printer model, and the
//! stateful text encoder mirroring the hardware's active table.
//!
//! The division of labor:
//!
//! - [`crate::protocol`] knows the command bytes
//! - [`crate::codepage`] knows the glyph tables
//! - [`crate::encoder`] knows when to switch tables
//! - [`Printer`] sequences all of it onto one connection
//!
//! ## Example
//!
//! ```
//! use boleta::{Printer, transport::MemoryTransport};
//! use boleta::protocol::text::Justification;
//!
//! let mut printer = Printer::new(MemoryTransport::new())?;
//!
//! printer.justify(Justification::Center)?;
//! printer.bold(true)?;
//! printer.text("CAFÉ BOLETA\n")?;
//! printer.bold(false)?;
//! printer.justify(Justification::Left)?;
//! printer.text("1x cortado      € 2,50\n")?;
//! printer.feed(3)?;
//! printer.cut()?;
//!
//! let bytes = printer.into_transport().into_inner();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]); // starts with ESC @
//! # Ok::<(), boleta::BoletaError>(())
//! ```

use crate::codepage::CodePageRegistry;
use crate::encoder::TextEncoder;
use crate::error::BoletaError;
use crate::protocol::text::Justification;
use crate::protocol::{commands, text};
use crate::transport::Transport;

/// # ESC/POS Printer
///
/// A connected printer: transport + code page registry + encoder state.
///
/// One `Printer` per physical connection. The registry is immutable and
/// could be shared between printers of the same model; the encoder state
/// is private to this connection and is what makes concurrent use of a
/// single `Printer` meaningless (the hardware has exactly one active
/// table).
#[derive(Debug)]
pub struct Printer<T: Transport> {
    transport: T,
    registry: CodePageRegistry,
    encoder: TextEncoder,
}

impl<T: Transport> Printer<T> {
    /// Connect with the stock Epson code page set.
    ///
    /// Sends `ESC @` so the hardware and the encoder start from the same
    /// known state.
    pub fn new(transport: T) -> Result<Self, BoletaError> {
        Self::with_registry(transport, CodePageRegistry::epson())
    }

    /// Connect with a custom code page registry.
    ///
    /// Use this for printers whose firmware assigns different selector
    /// values, or to restrict/reorder the tables the transcoder may pick.
    pub fn with_registry(
        mut transport: T,
        registry: CodePageRegistry,
    ) -> Result<Self, BoletaError> {
        transport.write_all(&commands::init())?;
        Ok(Self {
            transport,
            registry,
            encoder: TextEncoder::new(),
        })
    }

    /// Re-initialize the printer (ESC @).
    ///
    /// `ESC @` reverts the hardware to its default character table, so the
    /// encoder's mirror of the active table is cleared along with it. The
    /// next non-ASCII character will re-select a table explicitly.
    pub fn initialize(&mut self) -> Result<(), BoletaError> {
        self.encoder.reset();
        self.transport.write_all(&commands::init())
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Print Unicode text.
    ///
    /// Text is transcoded through the code page registry: characters the
    /// active table renders go out as single bytes, table switches are
    /// inserted only when needed, and characters no table covers print as
    /// `?`. Line breaks are plain `\n` bytes; the printer prints the line
    /// buffer on LF.
    pub fn text(&mut self, text: &str) -> Result<(), BoletaError> {
        let bytes = self.encoder.encode(text, &self.registry);
        self.transport.write_all(&bytes)
    }

    /// Send pre-encoded bytes unmodified.
    ///
    /// Bypasses transcoding entirely: nothing is re-encoded, no table
    /// switches are inserted, and the encoder's state is untouched. Meant
    /// for command sequences the caller builds directly (e.g. from
    /// [`crate::protocol`]).
    ///
    /// Note that this performs **no filtering whatsoever**: control bytes
    /// below 0x20 go to the printer exactly as given, including any the
    /// caller did not intend. Stripping non-printable bytes from raw input
    /// is not implemented.
    pub fn text_raw(&mut self, bytes: &[u8]) -> Result<(), BoletaError> {
        self.transport.write_all(bytes)
    }

    // ------------------------------------------------------------------
    // Styling
    // ------------------------------------------------------------------

    /// Set text justification (takes effect at the start of a line).
    pub fn justify(&mut self, justification: Justification) -> Result<(), BoletaError> {
        self.transport.write_all(&text::justify(justification))
    }

    /// Enable or disable bold printing.
    pub fn bold(&mut self, enabled: bool) -> Result<(), BoletaError> {
        self.transport.write_all(&if enabled {
            text::bold_on()
        } else {
            text::bold_off()
        })
    }

    /// Enable or disable underline.
    pub fn underline(&mut self, enabled: bool) -> Result<(), BoletaError> {
        self.transport.write_all(&if enabled {
            text::underline_on()
        } else {
            text::underline_off()
        })
    }

    /// Set character magnification (1–8 in each axis).
    pub fn size(&mut self, width_mult: u8, height_mult: u8) -> Result<(), BoletaError> {
        self.transport
            .write_all(&text::size(width_mult, height_mult))
    }

    // ------------------------------------------------------------------
    // Paper handling and peripherals
    // ------------------------------------------------------------------

    /// Print the line buffer and feed `n` lines.
    pub fn feed(&mut self, n: u8) -> Result<(), BoletaError> {
        self.transport.write_all(&commands::feed(n))
    }

    /// Feed to the cutter and perform a full cut.
    pub fn cut(&mut self) -> Result<(), BoletaError> {
        self.transport.write_all(&commands::cut_feed(3))
    }

    /// Partial cut at the current position (leaves a paper hinge).
    pub fn cut_partial(&mut self) -> Result<(), BoletaError> {
        self.transport.write_all(&commands::cut_partial())
    }

    /// Kick the cash drawer on the given connector pin (0 or 1).
    pub fn pulse(&mut self, pin: u8) -> Result<(), BoletaError> {
        self.transport.write_all(&commands::pulse(pin, 60, 120))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The code page registry this printer transcodes against.
    pub fn registry(&self) -> &CodePageRegistry {
        &self.registry
    }

    /// Selector of the table the encoder believes is active, if any.
    pub fn current_code_page(&self) -> Option<u8> {
        self.encoder.current_code_page()
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Consume the printer and recover the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}
