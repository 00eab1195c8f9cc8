use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::backend::PdfBackend;
use crate::error::ExtractError;

/// Appended after every page, including the last one.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Page texts concatenated in document order, each followed by [`PAGE_SEPARATOR`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    text: String,
    page_lengths: Vec<usize>,
}

impl ExtractedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = Self::new();
        for page in pages {
            text.push_page(page.as_ref());
        }
        text
    }

    /// Append one page verbatim. Empty pages still add the separator.
    pub fn push_page(&mut self, page: &str) {
        self.text.push_str(page);
        self.text.push_str(PAGE_SEPARATOR);
        self.page_lengths.push(page.chars().count());
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn page_count(&self) -> usize {
        self.page_lengths.len()
    }

    /// Character count of each page's text, separator excluded.
    pub fn page_lengths(&self) -> &[usize] {
        &self.page_lengths
    }

    /// Length of the accumulated text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Outcome of a successful [`Extractor::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub pages: usize,
    pub bytes_written: usize,
}

/// Drives a [`PdfBackend`] over one input file.
pub struct Extractor<'a> {
    backend: &'a dyn PdfBackend,
}

impl<'a> Extractor<'a> {
    pub fn new(backend: &'a dyn PdfBackend) -> Self {
        Self { backend }
    }

    /// Read `input` and collect every page's text in order.
    ///
    /// Any page failure aborts the whole extraction; nothing is written.
    pub fn extract(&self, input: &Path) -> Result<ExtractedText, ExtractError> {
        let data = std::fs::read(input).map_err(|source| ExtractError::NotFound {
            path: input.to_path_buf(),
            source,
        })?;

        let document = self
            .backend
            .open(&data)
            .map_err(|e| ExtractError::open(input, e))?;
        let total = document.page_count();
        tracing::debug!(
            path = %input.display(),
            backend = self.backend.name(),
            pages = total,
            "opened document"
        );

        let mut text = ExtractedText::new();
        for index in 0..total {
            let page = document
                .page_text(index)
                .map_err(|e| ExtractError::page(input, index, e))?;
            text.push_page(&page);
            tracing::trace!(
                page = index + 1,
                chars = text.page_lengths()[index],
                "extracted page"
            );
        }
        Ok(text)
    }

    /// Extract `input` and overwrite `output` with the result.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary, ExtractError> {
        let text = self.extract(input)?;
        let bytes_written = write_output(output, &text)?;
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            pages = text.page_count(),
            bytes = bytes_written,
            "extraction complete"
        );
        Ok(RunSummary {
            pages: text.page_count(),
            bytes_written,
        })
    }
}

/// Create or truncate `path` and write `text` to it as UTF-8.
pub fn write_output(path: &Path, text: &ExtractedText) -> Result<usize, ExtractError> {
    let write_failed = |source| ExtractError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_str().as_bytes())
        .map_err(write_failed)?;
    writer.flush().map_err(write_failed)?;
    Ok(text.len())
}
