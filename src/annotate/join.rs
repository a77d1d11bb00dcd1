use tracing::debug;

use crate::annotate::index::AnnotationIndex;
use crate::core::annotation::AnnotationTable;
use crate::core::hit::HitRecord;
use crate::core::output::OutputRecord;

/// Default minimum percent identity; keeps every hit
pub const DEFAULT_MIN_PIDENT: f64 = 0.0;

/// Configuration for the annotation join
#[derive(Debug, Clone)]
pub struct AnnotateConfig {
    /// Inclusive lower bound on percent identity
    pub min_pident: f64,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            min_pident: DEFAULT_MIN_PIDENT,
        }
    }
}

/// Counts gathered while joining hits to annotations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub hits_total: usize,
    pub hits_below_threshold: usize,
    /// Hits that passed the threshold but had no annotation row
    pub hits_unannotated: usize,
    pub records: usize,
}

/// Result of annotating a set of hits
#[derive(Debug, Clone)]
pub struct Annotated {
    pub records: Vec<OutputRecord>,
    pub stats: JoinStats,
}

/// Join hits to annotations, keeping hits at or above `config.min_pident`
///
/// Emits one record per (hit, annotation) pair whose centroid equals the hit's
/// subject id, in hit order and then annotation file order. Hits without a
/// matching annotation produce nothing.
#[must_use]
pub fn annotate_hits(
    hits: &[HitRecord],
    annotations: &AnnotationTable,
    config: &AnnotateConfig,
) -> Annotated {
    let index = AnnotationIndex::new(annotations);
    debug!(
        "Indexed {} annotation rows under {} centroids",
        annotations.len(),
        index.len()
    );

    annotate_with_index(hits, &index, config)
}

/// Same as [`annotate_hits`] with a prebuilt index
#[must_use]
pub fn annotate_with_index(
    hits: &[HitRecord],
    index: &AnnotationIndex<'_>,
    config: &AnnotateConfig,
) -> Annotated {
    let mut records = Vec::new();
    let mut stats = JoinStats {
        hits_total: hits.len(),
        ..JoinStats::default()
    };

    for hit in hits {
        if !hit.passes(config.min_pident) {
            stats.hits_below_threshold += 1;
            continue;
        }

        let before = records.len();
        records.extend(
            index
                .lookup(&hit.subject_id)
                .map(|annotation| OutputRecord::from_pair(hit, annotation)),
        );

        if records.len() == before {
            stats.hits_unannotated += 1;
        }
    }

    stats.records = records.len();
    debug!(
        "{} of {} hits below pident {}, {} without annotation, {} records",
        stats.hits_below_threshold,
        stats.hits_total,
        config.min_pident,
        stats.hits_unannotated,
        stats.records
    );

    Annotated { records, stats }
}
