//! Joining BLAST hits to centroid annotations.
//!
//! - [`AnnotationIndex`]: centroid id -> annotation rows, built once per run
//! - [`annotate_hits`]: threshold filter plus fan-out join
//!
//! ## Join rules
//!
//! 1. Hits with `pident < min_pident` are skipped (the bound is inclusive)
//! 2. Each remaining hit is matched to *every* annotation row whose `centroid`
//!    equals its `sseqid` (exact, case-sensitive)
//! 3. One [`OutputRecord`](crate::core::output::OutputRecord) is emitted per
//!    match; empty or absent genus/species become `NA`
//! 4. Hits without a matching row are dropped
//!
//! ## Example
//!
//! ```rust,no_run
//! use blastomatic::annotate::{annotate_hits, AnnotateConfig};
//! use blastomatic::parsing::{annotations, hits};
//! use std::path::Path;
//!
//! let hits = hits::parse_hits_file(Path::new("hits.tsv")).unwrap();
//! let table = annotations::parse_annotations_file(Path::new("centroids.csv"), b',').unwrap();
//!
//! let result = annotate_hits(&hits, &table, &AnnotateConfig { min_pident: 97.0 });
//! println!("{} records", result.records.len());
//! ```

pub mod index;
pub mod join;

pub use index::AnnotationIndex;
pub use join::{annotate_hits, annotate_with_index, AnnotateConfig, Annotated, JoinStats};
