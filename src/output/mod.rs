//! Writing the annotated report.
//!
//! The report always has the header `sseqid, pident, genus, species` and one
//! line per record. The delimiter is chosen by the caller, or guessed from the
//! output file extension with [`delimiter::guess_delimiter`] when
//! [`OutputDelimiter::Guess`] is requested.

pub mod delimiter;
pub mod writer;

pub use delimiter::{guess_delimiter, OutputDelimiter};
pub use writer::{write_records, write_report, WriteError};
