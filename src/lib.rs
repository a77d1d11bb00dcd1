//! # blastomatic
//!
//! A library for annotating BLAST hits with taxonomy.
//!
//! Similarity searches against a clustered reference database report each hit
//! by the subject sequence id, which is the cluster's centroid. `blastomatic`
//! joins those hits to a table describing each centroid and writes a flat
//! report of subject id, percent identity, genus and species.
//!
//! ## Features
//!
//! - **Identity filter**: Keep hits at or above a minimum percent identity
//! - **Fan-out join**: A centroid listed several times yields one record per row
//! - **Missing taxonomy**: Empty or absent genus/species are reported as `NA`
//! - **Gzip input**: `.gz` inputs are decompressed on the fly
//! - **Atomic output**: The report is replaced only after a complete write
//!
//! ## Example
//!
//! ```rust
//! use blastomatic::{annotate_hits, AnnotateConfig};
//! use blastomatic::parsing::annotations::parse_annotations_text;
//! use blastomatic::parsing::hits::parse_hits_text;
//!
//! let hits = parse_hits_text("Q1\tCEN1\t98.5\t100\t1\t0\t1\t100\t1\t100\t1e-50\t200\n").unwrap();
//! let table = parse_annotations_text("centroid,genus,species\nCEN1,Vibrio,cholerae\n", b',').unwrap();
//!
//! let result = annotate_hits(&hits, &table, &AnnotateConfig::default());
//! assert_eq!(result.records[0].genus, "Vibrio");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Hit, annotation and report record types
//! - [`parsing`]: Loaders for BLAST tabular output and annotation tables
//! - [`annotate`]: Centroid index and the filter/join pass
//! - [`output`]: Report writer and delimiter selection
//! - [`cli`]: Command-line interface implementation

pub mod annotate;
pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use annotate::{annotate_hits, AnnotateConfig, AnnotationIndex, JoinStats};
pub use crate::core::annotation::{AnnotationRecord, AnnotationTable};
pub use crate::core::hit::HitRecord;
pub use crate::core::output::OutputRecord;
