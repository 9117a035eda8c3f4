//! Tree walker
//!
//! Mirrors an input directory tree into an output tree: every directory is
//! recreated under the output root, and every regular file is scanned for
//! tokens and rewritten as a one-token-per-line listing with the configured
//! extension.
//!
//! The walker is plumbing around the scanner. It holds no state across
//! files; each file is read whole, tokenized, and written before the next
//! one is touched. Any I/O failure aborts the whole run.

use jsift_config::JsiftConfig;
use jsift_tokenizer::{SourceLoader, Token};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Errors that can occur while mirroring a tree
#[derive(Debug)]
pub enum WalkError {
    /// An input file could not be read
    Read { path: PathBuf, message: String },
    /// An output file could not be created or written
    Write { path: PathBuf, message: String },
    /// A mirrored directory could not be created
    CreateDir { path: PathBuf, message: String },
    /// Directory traversal failed
    Walk(String),
}

impl std::fmt::Display for WalkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkError::Read { path, message } => {
                write!(
                    f,
                    "The input file path below couldn't be opened:\n{}\n{}",
                    path.display(),
                    message
                )
            }
            WalkError::Write { path, message } => {
                write!(
                    f,
                    "The output file path below couldn't be written:\n{}\n{}",
                    path.display(),
                    message
                )
            }
            WalkError::CreateDir { path, message } => {
                write!(
                    f,
                    "The output directory below couldn't be created:\n{}\n{}",
                    path.display(),
                    message
                )
            }
            WalkError::Walk(msg) => write!(f, "Directory traversal failed: {}", msg),
        }
    }
}

impl std::error::Error for WalkError {}

impl From<walkdir::Error> for WalkError {
    fn from(err: walkdir::Error) -> Self {
        WalkError::Walk(err.to_string())
    }
}

/// Resolved walk settings: the two tree roots and the output extension.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub output_extension: String,
}

impl WalkOptions {
    pub fn from_config(config: &JsiftConfig) -> Self {
        WalkOptions {
            input_root: PathBuf::from(&config.walk.input_dir),
            output_root: PathBuf::from(&config.walk.output_dir),
            output_extension: config.walk.output_extension.clone(),
        }
    }
}

/// Counters reported in the completion notice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub files: usize,
    pub directories: usize,
    pub tokens: usize,
}

/// Walks the input tree and writes the mirrored listings.
pub struct TreeWalker {
    options: WalkOptions,
}

impl TreeWalker {
    pub fn new(options: WalkOptions) -> Self {
        TreeWalker { options }
    }

    /// Process the whole input tree. Fail-fast: the first I/O error aborts
    /// the run and is reported with the offending path.
    pub fn run(&self) -> Result<WalkSummary, WalkError> {
        let mut summary = WalkSummary::default();

        // Directories are yielded before their contents, so a file's
        // mirrored parent always exists by the time the file is written.
        for entry in WalkDir::new(&self.options.input_root) {
            let entry = entry?;
            let mirrored = self.mirrored_path(entry.path())?;

            if entry.file_type().is_dir() {
                fs::create_dir_all(&mirrored).map_err(|err| WalkError::CreateDir {
                    path: mirrored.clone(),
                    message: err.to_string(),
                })?;
                summary.directories += 1;
            } else if entry.file_type().is_file() {
                let loader =
                    SourceLoader::from_path(entry.path()).map_err(|err| WalkError::Read {
                        path: entry.path().to_path_buf(),
                        message: err.to_string(),
                    })?;
                let tokens = loader.tokenize();

                let mut target = mirrored;
                target.set_extension(&self.options.output_extension);
                write_listing(&target, &tokens)?;

                summary.files += 1;
                summary.tokens += tokens.len();
            }
            // Symlinks and other special entries are skipped.
        }

        Ok(summary)
    }

    /// Mirror an input path under the output root.
    fn mirrored_path(&self, path: &Path) -> Result<PathBuf, WalkError> {
        let relative = path.strip_prefix(&self.options.input_root).map_err(|_| {
            WalkError::Walk(format!(
                "entry {} is not under the input root {}",
                path.display(),
                self.options.input_root.display()
            ))
        })?;
        Ok(self.options.output_root.join(relative))
    }
}

/// Write one token per line, in source order.
fn write_listing(path: &Path, tokens: &[Token]) -> Result<(), WalkError> {
    let write_error = |err: std::io::Error| WalkError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for token in tokens {
        writeln!(writer, "{}", token).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}
