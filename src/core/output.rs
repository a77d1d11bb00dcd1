use serde::Serialize;

use crate::core::annotation::AnnotationRecord;
use crate::core::hit::HitRecord;

/// Placeholder written for an empty or absent genus/species
pub const MISSING_VALUE: &str = "NA";

/// Header row of the report, independent of the delimiter
pub const OUTPUT_COLUMNS: [&str; 4] = ["sseqid", "pident", "genus", "species"];

/// One line of the annotated report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "sseqid")]
    pub subject_id: String,

    /// Percent identity, as text from the hits file
    #[serde(rename = "pident")]
    pub percent_identity: String,

    pub genus: String,
    pub species: String,
}

impl OutputRecord {
    /// Build the report line for one (hit, annotation) pair
    #[must_use]
    pub fn from_pair(hit: &HitRecord, annotation: &AnnotationRecord) -> Self {
        Self {
            subject_id: hit.subject_id.clone(),
            percent_identity: hit.percent_identity_text.clone(),
            genus: or_missing(annotation.genus.as_deref()),
            species: or_missing(annotation.species.as_deref()),
        }
    }
}

fn or_missing(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit() -> HitRecord {
        HitRecord {
            query_id: "Q1".to_string(),
            subject_id: "CEN1".to_string(),
            percent_identity: 98.5,
            percent_identity_text: "98.50".to_string(),
            alignment_length: 100,
            mismatches: 1,
            gap_opens: 0,
            query_start: 1,
            query_end: 100,
            subject_start: 1,
            subject_end: 100,
            e_value: 1e-50,
            bit_score: 200.0,
        }
    }

    #[test]
    fn test_from_pair_keeps_pident_text() {
        let annotation = AnnotationRecord::new("CEN1").with_taxonomy(Some("Vibrio"), Some("cholerae"));
        let record = OutputRecord::from_pair(&hit(), &annotation);

        assert_eq!(record.subject_id, "CEN1");
        assert_eq!(record.percent_identity, "98.50");
        assert_eq!(record.genus, "Vibrio");
        assert_eq!(record.species, "cholerae");
    }

    #[test]
    fn test_missing_taxonomy_becomes_na() {
        let mut annotation = AnnotationRecord::new("CEN1");
        annotation.species = Some(String::new());
        let record = OutputRecord::from_pair(&hit(), &annotation);

        assert_eq!(record.genus, MISSING_VALUE);
        assert_eq!(record.species, MISSING_VALUE);
    }
}
