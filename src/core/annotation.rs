/// Column holding the join key in the annotation table
pub const CENTROID_COLUMN: &str = "centroid";
pub const GENUS_COLUMN: &str = "genus";
pub const SPECIES_COLUMN: &str = "species";

/// One row of the annotation table
///
/// `genus` and `species` are `None` when the column is missing from the
/// header, the row ends before it, or the cell is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    pub centroid: String,
    pub genus: Option<String>,
    pub species: Option<String>,

    /// Every cell of the row in header order
    pub values: Vec<String>,
}

impl AnnotationRecord {
    pub fn new(centroid: impl Into<String>) -> Self {
        Self {
            centroid: centroid.into(),
            genus: None,
            species: None,
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_taxonomy(mut self, genus: Option<&str>, species: Option<&str>) -> Self {
        self.genus = present(genus);
        self.species = present(species);
        self
    }
}

/// Treat only empty or absent cells as missing
pub(crate) fn present(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// The annotation table: the header plus all rows in file order
#[derive(Debug, Clone, Default)]
pub struct AnnotationTable {
    pub headers: Vec<String>,
    pub records: Vec<AnnotationRecord>,
}

impl AnnotationTable {
    #[must_use]
    pub fn new(headers: Vec<String>, records: Vec<AnnotationRecord>) -> Self {
        Self { headers, records }
    }

    /// Look up a cell of `record` by column name
    #[must_use]
    pub fn value<'a>(&self, record: &'a AnnotationRecord, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        record.values.get(idx).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
