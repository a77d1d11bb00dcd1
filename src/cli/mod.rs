//! Command-line interface for blastomatic.
//!
//! ## Usage
//!
//! ```text
//! # Annotate hits, writing out.csv
//! blastomatic -b hits.tsv -a centroids.csv
//!
//! # Keep hits at 97% identity or better, tab-separated report
//! blastomatic -b hits.tsv -a centroids.csv -p 97 -o annotated.tsv
//!
//! # Explicit delimiter, regardless of the output extension
//! blastomatic -b hits.tsv.gz -a centroids.csv -o annotated.txt -d ';'
//! ```

use std::path::PathBuf;

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser};

use crate::annotate::join::DEFAULT_MIN_PIDENT;
use crate::output::OutputDelimiter;
use crate::utils::validation::{
    parse_delimiter, parse_input_path, parse_output_delimiter, parse_pctid,
};

pub mod annotate;

/// Report path used when `--outfile` is not given
pub const DEFAULT_OUTFILE: &str = "out.csv";

#[derive(Parser, Debug)]
#[command(name = "blastomatic")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Annotate BLAST output")]
#[command(
    long_about = "blastomatic joins BLAST tabular hits (-outfmt 6) to an annotation table on the hit's subject id and the table's centroid column.\n\nEach hit at or above the identity threshold is written once per matching annotation row, with its genus and species (NA when empty)."
)]
pub struct Cli {
    /// BLAST output (-outfmt 6), optionally gzipped
    #[arg(
        short = 'b',
        long = "blasthits",
        value_name = "FILE",
        value_parser = parse_input_path
    )]
    pub hits: PathBuf,

    /// Annotation file with a header containing centroid, genus and species
    #[arg(short, long, value_name = "FILE", value_parser = parse_input_path)]
    pub annotations: PathBuf,

    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTFILE)]
    pub outfile: PathBuf,

    /// Output field delimiter [default: ',' for .csv output, tab otherwise]
    #[arg(short, long, value_name = "DELIM", value_parser = parse_output_delimiter)]
    pub delimiter: Option<OutputDelimiter>,

    /// Field delimiter of the annotation file
    #[arg(long, value_name = "DELIM", default_value = ",", value_parser = parse_delimiter)]
    pub annotations_delimiter: u8,

    /// Minimum percent identity
    #[arg(
        short,
        long,
        value_name = "PCTID",
        default_value_t = DEFAULT_MIN_PIDENT,
        value_parser = parse_pctid,
        allow_negative_numbers = true
    )]
    pub pctid: f64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse the command line, exiting with usage text on any argument error
#[must_use]
pub fn parse_args() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| with_usage(err).exit())
}

/// Re-render a rejected argument value with the usage line
///
/// clap prints usage for missing arguments but not for values refused by a
/// value parser, such as an input file that cannot be opened.
#[must_use]
pub fn with_usage(err: clap::Error) -> clap::Error {
    if err.kind() != ErrorKind::ValueValidation {
        return err;
    }

    let (Some(arg), Some(value)) = (
        err.get(ContextKind::InvalidArg),
        err.get(ContextKind::InvalidValue),
    ) else {
        return err;
    };
    let reason = std::error::Error::source(&err)
        .map(ToString::to_string)
        .unwrap_or_default();

    Cli::command().error(
        ErrorKind::ValueValidation,
        format!("invalid value '{value}' for '{arg}': {reason}"),
    )
}
