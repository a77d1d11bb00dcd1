//! Validation of command-line values before any file is touched.

use std::fs::File;
use std::path::PathBuf;

use crate::output::delimiter::OutputDelimiter;

/// Argument validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty delimiter provided")]
    EmptyDelimiter,
    #[error("Invalid delimiter '{0}': expected a single ASCII character or '\\t'")]
    InvalidDelimiter(String),
    #[error("Invalid percent identity '{0}': expected a finite number")]
    InvalidPctid(String),
    #[error("Input '{0}' is a directory, not a file")]
    NotAFile(String),
    #[error("Can't open '{path}': {reason}")]
    UnreadableInput { path: String, reason: String },
}

/// Check that an input path names a readable file
///
/// # Errors
///
/// Returns `ValidationError::NotAFile` for a directory, or
/// `ValidationError::UnreadableInput` if the file cannot be opened.
pub fn parse_input_path(s: &str) -> Result<PathBuf, ValidationError> {
    let path = PathBuf::from(s);
    if path.is_dir() {
        return Err(ValidationError::NotAFile(s.to_string()));
    }

    File::open(&path).map_err(|e| ValidationError::UnreadableInput {
        path: s.to_string(),
        reason: e.to_string(),
    })?;
    Ok(path)
}

/// Parse a field delimiter argument into the byte the csv writer expects
///
/// Accepts one ASCII character, or `\t` / `tab` for a tab. Newlines and
/// double quotes are rejected since they cannot separate fields.
///
/// # Errors
///
/// Returns `ValidationError::EmptyDelimiter` for an empty string or
/// `ValidationError::InvalidDelimiter` for anything else not accepted above.
///
/// # Examples
///
/// ```
/// use blastomatic::utils::validation::parse_delimiter;
///
/// assert_eq!(parse_delimiter(";"), Ok(b';'));
/// assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
/// assert!(parse_delimiter("::").is_err());
/// ```
pub fn parse_delimiter(s: &str) -> Result<u8, ValidationError> {
    match s {
        "" => Err(ValidationError::EmptyDelimiter),
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() && !matches!(*b, b'\n' | b'\r' | b'"') => Ok(*b),
            _ => Err(ValidationError::InvalidDelimiter(s.to_string())),
        },
    }
}

/// Parse the report delimiter argument; an empty value means guess from the file name
///
/// # Errors
///
/// Returns `ValidationError::InvalidDelimiter` for anything [`parse_delimiter`] rejects.
pub fn parse_output_delimiter(s: &str) -> Result<OutputDelimiter, ValidationError> {
    if s.is_empty() {
        Ok(OutputDelimiter::Guess)
    } else {
        parse_delimiter(s).map(OutputDelimiter::Explicit)
    }
}

/// Parse the minimum percent identity
///
/// # Errors
///
/// Returns `ValidationError::InvalidPctid` unless `s` is a finite number.
pub fn parse_pctid(s: &str) -> Result<f64, ValidationError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidPctid(s.to_string()))
}
