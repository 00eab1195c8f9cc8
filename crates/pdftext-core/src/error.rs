use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::backend::BackendError;

/// Coarse classification of an [`ExtractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file is missing or cannot be read.
    NotFound,
    /// The input could not be parsed as a PDF, or a page failed to extract.
    MalformedDocument,
    /// The output file could not be created or written.
    WriteFailed,
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("cannot read {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed PDF {}: {reason}", path.display())]
    MalformedDocument {
        path: PathBuf,
        /// 1-based page number when a single page failed.
        page: Option<usize>,
        reason: String,
    },
    #[error("cannot write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::NotFound { .. } => ErrorKind::NotFound,
            ExtractError::MalformedDocument { .. } => ErrorKind::MalformedDocument,
            ExtractError::WriteFailed { .. } => ErrorKind::WriteFailed,
        }
    }

    pub(crate) fn open(path: &Path, err: BackendError) -> Self {
        ExtractError::MalformedDocument {
            path: path.to_path_buf(),
            page: None,
            reason: err.to_string(),
        }
    }

    pub(crate) fn page(path: &Path, index: usize, err: BackendError) -> Self {
        ExtractError::MalformedDocument {
            path: path.to_path_buf(),
            page: Some(index + 1),
            reason: format!("page {}: {}", index + 1, err),
        }
    }
}
