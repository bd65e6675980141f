use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::clients::errors::Result;

/// Writes records as JSON Lines: one UTF-8 JSON object per line, non-ASCII
/// preserved as-is.
///
/// The file is truncated on open and held for the whole run; rows are written
/// as they arrive, so a crash keeps everything flushed so far.
pub struct JsonlWriter {
    inner: BufWriter<File>,
}

impl JsonlWriter {
    /// Open `path` for writing, replacing any previous content.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        debug!("Opened output file {}", path.display());
        Ok(JsonlWriter {
            inner: BufWriter::new(file),
        })
    }

    /// Serialize one record and write it as a single line.
    pub fn append<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.inner, record)?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }
}
