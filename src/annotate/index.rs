use std::collections::HashMap;

use crate::core::annotation::{AnnotationRecord, AnnotationTable};

/// Lookup from centroid id to every annotation row carrying it
///
/// Rows for a centroid are kept in file order, so a lookup yields the same
/// sequence a linear scan of the table would.
#[derive(Debug)]
pub struct AnnotationIndex<'a> {
    records: &'a [AnnotationRecord],

    /// Index: centroid -> indices into `records`
    centroid_to_rows: HashMap<&'a str, Vec<usize>>,
}

impl<'a> AnnotationIndex<'a> {
    pub fn new(table: &'a AnnotationTable) -> Self {
        Self::from_records(&table.records)
    }

    pub fn from_records(records: &'a [AnnotationRecord]) -> Self {
        let mut centroid_to_rows: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            centroid_to_rows
                .entry(record.centroid.as_str())
                .or_default()
                .push(idx);
        }

        Self {
            records,
            centroid_to_rows,
        }
    }

    /// All rows whose centroid equals `subject_id` exactly
    pub fn lookup<'s>(
        &'s self,
        subject_id: &str,
    ) -> impl Iterator<Item = &'a AnnotationRecord> + 's {
        let records = self.records;
        self.centroid_to_rows
            .get(subject_id)
            .into_iter()
            .flatten()
            .map(move |&idx| &records[idx])
    }

    /// Number of distinct centroids
    #[must_use]
    pub fn len(&self) -> usize {
        self.centroid_to_rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centroid_to_rows.is_empty()
    }
}
