use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
}

/// Trait for PDF text extraction backends.
///
/// Implementors wrap a PDF library; the page ordering, separator and
/// output handling live in [`crate::Extractor`].
pub trait PdfBackend: Send + Sync {
    /// Short name used in log fields.
    fn name(&self) -> &'static str;

    /// Parse the raw bytes of a PDF file into a page-addressable document.
    fn open(&self, data: &[u8]) -> Result<Box<dyn PdfDocument>, BackendError>;
}

/// An opened document. Pages are addressed by 0-based index in document order.
pub trait PdfDocument {
    fn page_count(&self) -> usize;

    /// Best-effort plain text of one page, exactly as the engine renders it.
    fn page_text(&self, index: usize) -> Result<String, BackendError>;
}
