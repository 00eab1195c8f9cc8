use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod backend;
pub mod config_file;
pub mod error;
pub mod extractor;
#[cfg(feature = "fixtures")]
pub mod fixture;
pub mod mock;

pub use backend::{BackendError, PdfBackend, PdfDocument};
pub use config_file::{ConfigFile, ConfigFileError, PathsConfig};
pub use error::{ErrorKind, ExtractError};
pub use extractor::{ExtractedText, Extractor, PAGE_SEPARATOR, RunSummary, write_output};

/// Environment variable naming the input PDF.
pub const INPUT_ENV: &str = "PDFTEXT_INPUT";
/// Environment variable naming the output text file.
pub const OUTPUT_ENV: &str = "PDFTEXT_OUTPUT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no input PDF given (pass a path, set PDFTEXT_INPUT, or set paths.input_path)")]
    MissingInput,
}

/// Resolved paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    /// Resolve paths with precedence: explicit argument > environment > config file.
    ///
    /// Without an output path from any source, the input path with a `.txt`
    /// extension is used; see [`default_output_path`].
    pub fn resolve<E>(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        env: E,
        file: &ConfigFile,
    ) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let paths = file.paths.as_ref();

        let input_path = input
            .or_else(|| env(INPUT_ENV).map(PathBuf::from))
            .or_else(|| paths.and_then(|p| p.input_path.clone()).map(PathBuf::from))
            .ok_or(ConfigError::MissingInput)?;

        let output_path = output
            .or_else(|| env(OUTPUT_ENV).map(PathBuf::from))
            .or_else(|| paths.and_then(|p| p.output_path.clone()).map(PathBuf::from))
            .unwrap_or_else(|| default_output_path(&input_path));

        Ok(Self {
            input_path,
            output_path,
        })
    }
}

/// `input` with its extension replaced by `.txt`, or with `.txt` appended
/// when that replacement would name the input itself (`scan.txt` gives
/// `scan.txt.txt`).
pub fn default_output_path(input: &Path) -> PathBuf {
    let candidate = input.with_extension("txt");
    if candidate != input {
        return candidate;
    }
    let mut appended = input.as_os_str().to_os_string();
    appended.push(".txt");
    PathBuf::from(appended)
}

/// Extract `input` with `backend` and overwrite `output` with the page texts.
///
/// Pipeline:
/// 1. Read the input bytes and open them as a document
/// 2. Extract every page's text in order, appending a blank-line separator
/// 3. Only when every page succeeded, create or truncate `output` and write it
pub fn run(
    input: &Path,
    output: &Path,
    backend: &dyn PdfBackend,
) -> Result<RunSummary, ExtractError> {
    Extractor::new(backend).run(input, output)
}
