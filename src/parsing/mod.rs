//! Loaders for the two inputs of the annotation pipeline.
//!
//! - **BLAST hits**: header-free, tab-separated `-outfmt 6` rows with exactly
//!   12 columns (see [`crate::core::hit::HIT_COLUMNS`])
//! - **Annotations**: a delimited table with a header row that must contain a
//!   `centroid` column; `genus` and `species` are read when present
//!
//! Files ending in `.gz` are decompressed transparently.
//!
//! ## Example
//!
//! ```rust,no_run
//! use blastomatic::parsing::{annotations, hits};
//! use std::path::Path;
//!
//! let hits = hits::parse_hits_file(Path::new("hits.tsv")).unwrap();
//! let table = annotations::parse_annotations_file(Path::new("centroids.csv"), b',').unwrap();
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

pub mod annotations;
pub mod hits;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line} has {found} fields, expected 12")]
    FieldCount { line: usize, found: usize },

    #[error("Invalid {column} on line {line}: '{value}'")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("Annotation file is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Malformed annotation file: {0}")]
    Csv(#[from] csv::Error),
}

/// Open a file for reading, gunzipping it when the name ends in `.gz`
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>, ParseError> {
    let file = File::open(path)?;
    let gzipped = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

    if gzipped {
        Ok(Box::new(GzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
