//! Frontends receive finished plot specs.
//!
//! Rendering belongs to the engine behind a [`Frontend`]. The crate ships a
//! [`JsonFrontend`] that writes specs out as JSON, which is what the demo
//! binary and the tests use.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::Result;

/// Something that can display (or export) a plot spec.
pub trait Frontend {
    /// Display one plot spec.
    fn show(&mut self, spec: &Value) -> Result<()>;
}

/// Writes every spec it is shown as JSON.
///
/// Pretty mode separates specs by a blank line; compact mode writes one spec
/// per line.
#[derive(Debug)]
pub struct JsonFrontend<W: Write> {
    writer: W,
    pretty: bool,
    shown: usize,
}

impl JsonFrontend<Stdout> {
    /// Frontend writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl JsonFrontend<BufWriter<File>> {
    /// Frontend writing to a new file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        log::info!("writing plot specs to {}", path.as_ref().display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonFrontend<W> {
    /// Wrap a writer. Output is pretty-printed by default.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            shown: 0,
        }
    }

    /// Enable or disable pretty printing.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Number of specs written so far.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Frontend for JsonFrontend<W> {
    fn show(&mut self, spec: &Value) -> Result<()> {
        if self.pretty {
            if self.shown > 0 {
                writeln!(self.writer)?;
            }
            serde_json::to_writer_pretty(&mut self.writer, spec)?;
        } else {
            serde_json::to_writer(&mut self.writer, spec)?;
        }
        writeln!(self.writer)?;
        self.shown += 1;
        log::debug!("plot spec #{} written", self.shown);
        Ok(())
    }
}
