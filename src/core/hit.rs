/// Column names of BLAST `-outfmt 6`, in file order
pub const HIT_COLUMNS: [&str; 12] = [
    "qseqid", "sseqid", "pident", "length", "mismatch", "gapopen", "qstart", "qend", "sstart",
    "send", "evalue", "bitscore",
];

/// A single row of BLAST tabular (`-outfmt 6`) output
#[derive(Debug, Clone, PartialEq)]
pub struct HitRecord {
    /// Query sequence id (qseqid)
    pub query_id: String,

    /// Subject sequence id (sseqid), joined against annotation centroids
    pub subject_id: String,

    /// Percent identity (pident)
    pub percent_identity: f64,

    /// pident exactly as it appeared in the input, used when writing
    pub percent_identity_text: String,

    pub alignment_length: u64,
    pub mismatches: u64,
    pub gap_opens: u64,
    pub query_start: u64,
    pub query_end: u64,
    pub subject_start: u64,
    pub subject_end: u64,
    pub e_value: f64,
    pub bit_score: f64,
}

impl HitRecord {
    /// Whether this hit's percent identity meets an inclusive lower bound
    #[must_use]
    pub fn passes(&self, min_pident: f64) -> bool {
        self.percent_identity >= min_pident
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(pident: f64) -> HitRecord {
        HitRecord {
            query_id: "Q1".to_string(),
            subject_id: "CEN1".to_string(),
            percent_identity: pident,
            percent_identity_text: pident.to_string(),
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
    fn test_passes_is_inclusive() {
        assert!(hit(99.0).passes(99.0));
        assert!(hit(99.5).passes(99.0));
        assert!(!hit(98.9).passes(99.0));
    }

    #[test]
    fn test_default_threshold_passes_zero_identity() {
        assert!(hit(0.0).passes(0.0));
    }
}
