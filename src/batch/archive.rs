use crate::foundation::error::{AdsmithError, AdsmithResult};
use std::io::{Cursor, Seek, Write};

/// Sink contract for a batch's encoded outputs.
///
/// `add_file` is called in generation order between one `begin` and one `finish`. Any error is
/// fatal for the batch.
pub trait ArchiveSink {
    /// Called once before any file, with the number of tuples the batch will attempt.
    fn begin(&mut self, expected: usize) -> AdsmithResult<()>;
    fn add_file(&mut self, name: &str, bytes: &[u8]) -> AdsmithResult<()>;
    /// Called once after the last file.
    fn finish(&mut self) -> AdsmithResult<()>;
}

/// Deflate-compressed zip written to any seekable writer.
pub struct ZipArchiveSink<W: Write + Seek> {
    writer: Option<zip::ZipWriter<W>>,
    finished: Option<W>,
    entries: usize,
}

impl<W: Write + Seek> std::fmt::Debug for ZipArchiveSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipArchiveSink")
            .field("entries", &self.entries)
            .field("finished", &self.finished.is_some())
            .finish()
    }
}

impl ZipArchiveSink<Cursor<Vec<u8>>> {
    pub fn in_memory() -> Self {
        Self::new(Cursor::new(Vec::new()))
    }

    /// Archive bytes; only available after [`ArchiveSink::finish`].
    pub fn into_bytes(self) -> AdsmithResult<Vec<u8>> {
        self.into_inner().map(Cursor::into_inner)
    }
}

impl<W: Write + Seek> ZipArchiveSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: Some(zip::ZipWriter::new(out)),
            finished: None,
            entries: 0,
        }
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn into_inner(self) -> AdsmithResult<W> {
        self.finished
            .ok_or_else(|| AdsmithError::archive("archive was not finalized"))
    }

    fn writer(&mut self) -> AdsmithResult<&mut zip::ZipWriter<W>> {
        self.writer
            .as_mut()
            .ok_or_else(|| AdsmithError::archive("archive is already finalized"))
    }
}

impl<W: Write + Seek> ArchiveSink for ZipArchiveSink<W> {
    fn begin(&mut self, _expected: usize) -> AdsmithResult<()> {
        self.writer().map(|_| ())
    }

    fn add_file(&mut self, name: &str, bytes: &[u8]) -> AdsmithResult<()> {
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        let writer = self.writer()?;
        writer
            .start_file(name, options)
            .map_err(|e| AdsmithError::archive(format!("start entry '{name}': {e}")))?;
        writer
            .write_all(bytes)
            .map_err(|e| AdsmithError::archive(format!("write entry '{name}': {e}")))?;
        self.entries += 1;
        Ok(())
    }

    fn finish(&mut self) -> AdsmithResult<()> {
        let writer = self
            .writer
            .take()
            .ok_or_else(|| AdsmithError::archive("archive is already finalized"))?;
        let out = writer
            .finish()
            .map_err(|e| AdsmithError::archive(format!("finalize zip: {e}")))?;
        self.finished = Some(out);
        Ok(())
    }
}

/// In-memory sink for tests and previews; keeps entries in order.
#[derive(Clone, Debug, Default)]
pub struct InMemoryArchive {
    expected: Option<usize>,
    finished: bool,
    pub(crate) files: Vec<(String, Vec<u8>)>,
}

impl InMemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expected(&self) -> Option<usize> {
        self.expected
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }

    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(|(n, _)| n.as_str()).collect()
    }
}

impl ArchiveSink for InMemoryArchive {
    fn begin(&mut self, expected: usize) -> AdsmithResult<()> {
        self.expected = Some(expected);
        self.finished = false;
        self.files.clear();
        Ok(())
    }

    fn add_file(&mut self, name: &str, bytes: &[u8]) -> AdsmithResult<()> {
        self.files.push((name.to_string(), bytes.to_vec()));
        Ok(())
    }

    fn finish(&mut self) -> AdsmithResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/archive.rs"]
mod tests;
