//! Mock PDF backend for testing.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, PdfBackend, PdfDocument};

/// A configurable mock response for one page of a [`MockBackend`] document.
#[derive(Clone, Debug)]
pub enum MockPage {
    Text(String),
    /// Simulate an engine failure on this page.
    Error(String),
}

/// A hand-rolled mock implementing [`PdfBackend`] for tests.
///
/// Ignores the input bytes and serves a fixed page list. Supports:
/// - A failing `open()` via [`failing_open()`](MockBackend::failing_open).
/// - Per-page failures via [`MockPage::Error`].
/// - Call counting via [`open_count()`](MockBackend::open_count).
pub struct MockBackend {
    pages: Vec<MockPage>,
    open_error: Option<String>,
    open_count: AtomicUsize,
    last_input_len: Mutex<usize>,
}

impl MockBackend {
    /// Create a mock whose documents contain `pages`, in order.
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_pages(pages.into_iter().map(|p| MockPage::Text(p.into())).collect())
    }

    pub fn with_pages(pages: Vec<MockPage>) -> Self {
        Self {
            pages,
            open_error: None,
            open_count: AtomicUsize::new(0),
            last_input_len: Mutex::new(0),
        }
    }

    /// Create a mock whose `open()` always fails with `message`.
    pub fn failing_open(message: impl Into<String>) -> Self {
        let mut mock = Self::with_pages(Vec::new());
        mock.open_error = Some(message.into());
        mock
    }

    /// How many times `open()` has been called.
    pub fn open_count(&self) -> usize {
        self.open_count.load(Ordering::SeqCst)
    }

    /// Byte length of the data passed to the most recent `open()`.
    pub fn last_input_len(&self) -> usize {
        *self.last_input_len.lock().unwrap()
    }
}

impl PdfBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn open(&self, data: &[u8]) -> Result<Box<dyn PdfDocument>, BackendError> {
        self.open_count.fetch_add(1, Ordering::SeqCst);
        *self.last_input_len.lock().unwrap() = data.len();

        if let Some(ref msg) = self.open_error {
            return Err(BackendError::OpenError(msg.clone()));
        }
        Ok(Box::new(MockDocument {
            pages: self.pages.clone(),
        }))
    }
}

struct MockDocument {
    pages: Vec<MockPage>,
}

impl PdfDocument for MockDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        match self.pages.get(index) {
            Some(MockPage::Text(text)) => Ok(text.clone()),
            Some(MockPage::Error(msg)) => Err(BackendError::ExtractionError(msg.clone())),
            None => Err(BackendError::ExtractionError(format!(
                "page index {index} out of range"
            ))),
        }
    }
}
