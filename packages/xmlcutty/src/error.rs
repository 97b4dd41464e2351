//! Error types for xmlcutty.
//!
//! Every error is fatal: the run is a single pass over a stream, so there is
//! nothing to retry and nothing to roll back.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extractor.
#[derive(Debug, Error)]
pub enum CuttyError {
    /// The named input file could not be opened.
    #[error("Cannot open input {}: {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The XML tokenizer hit an unrecoverable failure.
    #[error("XML decoding failed at byte {position}: {source}")]
    Decode {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// Input ended while a matched element was still open.
    #[error("Unexpected end of input inside <{element}> (byte {position})")]
    UnexpectedEof { element: String, position: u64 },

    /// The `--regexpath` value is not a valid regular expression.
    #[error("Invalid path pattern: {0}")]
    PatternCompile(#[from] regex::Error),

    /// The exact path selector is unusable.
    #[error("Invalid path selector: '{0}'. Expected an absolute path like /records/record")]
    InvalidSelector(String),

    /// IO error while copying or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for xmlcutty operations.
pub type Result<T> = std::result::Result<T, CuttyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_open_display() {
        let err = CuttyError::InputOpen {
            path: PathBuf::from("/missing/file.xml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot open input /missing/file.xml: not found"
        );
    }

    #[test]
    fn test_unexpected_eof_display() {
        let err = CuttyError::UnexpectedEof {
            element: "record".to_string(),
            position: 42,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected end of input inside <record> (byte 42)"
        );
    }

    #[test]
    fn test_pattern_compile_from_regex() {
        let err: CuttyError = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid path pattern:"));
    }

    #[test]
    fn test_invalid_selector_display() {
        let err = CuttyError::InvalidSelector(String::new());
        assert!(err.to_string().contains("/records/record"));
    }
}
