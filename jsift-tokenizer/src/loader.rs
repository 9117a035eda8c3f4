//! Source loading utilities
//!
//! This module provides `SourceLoader` - a small wrapper for loading source
//! text from files or strings and running the scanner on it. This is used by
//! both production code and tests.
//!
//! # Example
//!
//! ```rust
//! use jsift_tokenizer::loader::SourceLoader;
//!
//! let loader = SourceLoader::from_string(r#"{"id": 33}"#);
//! let tokens = loader.tokenize();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::scanner;
use crate::token::Token;
use std::fs;
use std::path::Path;

/// Error that can occur when loading sources
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading a file
    Io(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// Loads source text and runs the scanner over it.
///
/// The scanner only classifies ASCII quote, digit, and dot characters, so
/// the loader stays encoding-agnostic beyond UTF-8 well-formedness: bytes
/// that don't decode are replaced rather than failing the whole file.
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let bytes = fs::read(path)?;
        Ok(SourceLoader {
            source: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// Extract the token sequence from the loaded source
    pub fn tokenize(&self) -> Vec<Token> {
        scanner::tokenize(&self.source)
    }

    /// The raw source text
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{number, quoted};
    use std::path::PathBuf;

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_from_string() {
        let loader = SourceLoader::from_string("{\"id\": 33}");
        assert_eq!(loader.source(), "{\"id\": 33}");
    }

    #[test]
    fn test_from_path() {
        let loader = SourceLoader::from_path(fixture_path("recipe.json")).unwrap();
        assert!(!loader.source().is_empty());
    }

    #[test]
    fn test_from_path_nonexistent() {
        let result = SourceLoader::from_path("nonexistent.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_tokenize() {
        let loader = SourceLoader::from_string(r#"{"id": 33}"#);
        assert_eq!(loader.tokenize(), vec![quoted("id"), number("33")]);
    }

    #[test]
    fn test_loader_is_reusable() {
        let loader = SourceLoader::from_string(r#""a" 1"#);

        let first = loader.tokenize();
        let second = loader.tokenize();
        assert_eq!(first, second);
    }
}
