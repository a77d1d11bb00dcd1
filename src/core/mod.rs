//! Core record types.
//!
//! - [`HitRecord`](hit::HitRecord): One row of BLAST `-outfmt 6` output
//! - [`AnnotationRecord`](annotation::AnnotationRecord): One row of the annotation table
//! - [`OutputRecord`](output::OutputRecord): One line of the report
//!
//! All records are built once while loading and never modified afterwards.
//!
//! ## Join key
//!
//! | Hit column | Annotation column |
//! |------------|-------------------|
//! | sseqid     | centroid          |
//!
//! Matching is exact string equality; ids are not trimmed or case-folded.

pub mod annotation;
pub mod hit;
pub mod output;
