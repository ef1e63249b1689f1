//! ESC/POS command emitter
//!
//! Writes printer control sequences and UTF-8 text onto a byte sink.
//! Every directive is one complete, atomic byte sequence; a write failure
//! propagates immediately and the emitter performs no recovery.

use crate::error::PrintResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// ESC/POS directive emitter over an output sink
///
/// The sink is owned exclusively by one print job for the duration of a
/// render call. Text is written as raw UTF-8; printers configured for a
/// different code page must be handled by the transport layer.
pub struct CommandEmitter<W: Write> {
    sink: W,
}

impl<W: Write> CommandEmitter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Reset the printer to its power-on defaults (ESC @)
    pub fn init(&mut self) -> PrintResult<()> {
        self.sink.write_all(&[0x1B, 0x40])?;
        Ok(())
    }

    // === Alignment ===

    /// Select justification (ESC a n)
    pub fn align(&mut self, alignment: Alignment) -> PrintResult<()> {
        let n = match alignment {
            Alignment::Left => 0x00,
            Alignment::Center => 0x01,
            Alignment::Right => 0x02,
        };
        self.sink.write_all(&[0x1B, 0x61, n])?;
        Ok(())
    }

    // === Text Style ===

    /// Enable emphasis (ESC E 1)
    pub fn bold_on(&mut self) -> PrintResult<()> {
        self.sink.write_all(&[0x1B, 0x45, 0x01])?;
        Ok(())
    }

    /// Disable emphasis (ESC E 0)
    pub fn bold_off(&mut self) -> PrintResult<()> {
        self.sink.write_all(&[0x1B, 0x45, 0x00])?;
        Ok(())
    }

    /// Double-height characters (ESC ! 16)
    pub fn double_height_on(&mut self) -> PrintResult<()> {
        self.sink.write_all(&[0x1B, 0x21, 0x10])?;
        Ok(())
    }

    /// Reset character size to normal (ESC ! 0)
    pub fn size_reset(&mut self) -> PrintResult<()> {
        self.sink.write_all(&[0x1B, 0x21, 0x00])?;
        Ok(())
    }

    // === Text Output ===

    /// Write raw UTF-8 text without a line feed
    pub fn write_text(&mut self, text: &str) -> PrintResult<()> {
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write a UTF-8 text line terminated by a feed
    pub fn write_line(&mut self, text: &str) -> PrintResult<()> {
        self.sink.write_all(text.as_bytes())?;
        self.feed_line()?;
        Ok(())
    }

    // === Paper Control ===

    /// Print buffered data and advance one line (LF)
    pub fn feed_line(&mut self) -> PrintResult<()> {
        self.sink.write_all(&[0x0A])?;
        Ok(())
    }

    /// Feed to the cut position, then cut (GS V 66 0)
    pub fn cut(&mut self) -> PrintResult<()> {
        self.sink.write_all(&[0x1D, 0x56, 0x42, 0x00])?;
        Ok(())
    }

    /// Consume the emitter and return the sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}
