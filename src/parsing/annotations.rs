use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::annotation::{
    present, AnnotationRecord, AnnotationTable, CENTROID_COLUMN, GENUS_COLUMN, SPECIES_COLUMN,
};
use crate::parsing::{open_input, ParseError};

/// Parse an annotation table (optionally gzipped) with the given field delimiter
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::MissingColumn`
/// if the header has no `centroid` column, or `ParseError::Csv` for malformed text.
pub fn parse_annotations_file(path: &Path, delimiter: u8) -> Result<AnnotationTable, ParseError> {
    let table = parse_annotations_reader(open_input(path)?, delimiter)?;
    debug!(
        "Parsed {} annotation rows from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parse annotation text with the given field delimiter
///
/// # Errors
///
/// See [`parse_annotations_reader`].
pub fn parse_annotations_text(text: &str, delimiter: u8) -> Result<AnnotationTable, ParseError> {
    parse_annotations_reader(text.as_bytes(), delimiter)
}

/// Parse an annotation table from any reader
///
/// The first row is the header. Rows may be shorter or longer than the header;
/// a cell past the end of a short row is treated as absent.
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if the header has no `centroid` column,
/// or `ParseError::Csv` if the text cannot be read as delimited records.
pub fn parse_annotations_reader<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<AnnotationTable, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let centroid_idx = column(CENTROID_COLUMN)
        .ok_or_else(|| ParseError::MissingColumn(CENTROID_COLUMN.to_string()))?;
    let genus_idx = column(GENUS_COLUMN);
    let species_idx = column(SPECIES_COLUMN);

    for (name, idx) in [(GENUS_COLUMN, genus_idx), (SPECIES_COLUMN, species_idx)] {
        if idx.is_none() {
            warn!("Annotation file has no '{name}' column; every {name} will be NA");
        }
    }

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i));

        records.push(AnnotationRecord {
            centroid: row.get(centroid_idx).unwrap_or_default().to_string(),
            genus: present(cell(genus_idx)),
            species: present(cell(species_idx)),
            values: row.iter().map(str::to_string).collect(),
        });
    }

    Ok(AnnotationTable::new(headers, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_annotations_text() {
        let csv = "centroid,genus,species,domain\nCEN1,Vibrio,cholerae,Bacteria\nCEN2,Homo,sapiens,Eukaryota\n";
        let table = parse_annotations_text(csv, b',').unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.headers, vec!["centroid", "genus", "species", "domain"]);
        assert_eq!(table.records[0].centroid, "CEN1");
        assert_eq!(table.records[0].genus.as_deref(), Some("Vibrio"));
        assert_eq!(table.records[1].species.as_deref(), Some("sapiens"));
        assert_eq!(table.value(&table.records[1], "domain"), Some("Eukaryota"));
    }

    #[test]
    fn test_parse_annotations_column_order_is_free() {
        let tsv = "species\tcentroid\tgenus\ncholerae\tCEN1\tVibrio\n";
        let table = parse_annotations_text(tsv, b'\t').unwrap();

        assert_eq!(table.records[0].centroid, "CEN1");
        assert_eq!(table.records[0].genus.as_deref(), Some("Vibrio"));
        assert_eq!(table.records[0].species.as_deref(), Some("cholerae"));
    }

    #[test]
    fn test_parse_annotations_empty_and_short_rows() {
        let csv = "centroid,genus,species\nCEN1,Vibrio,\nCEN2\n";
        let table = parse_annotations_text(csv, b',').unwrap();

        assert_eq!(table.records[0].genus.as_deref(), Some("Vibrio"));
        assert_eq!(table.records[0].species, None);
        assert_eq!(table.records[1].centroid, "CEN2");
        assert_eq!(table.records[1].genus, None);
        assert_eq!(table.records[1].species, None);
    }

    #[test]
    fn test_parse_annotations_without_taxonomy_columns() {
        let table = parse_annotations_text("centroid,size\nCEN1,12\n", b',').unwrap();
        assert_eq!(table.records[0].genus, None);
        assert_eq!(table.records[0].species, None);
    }

    #[test]
    fn test_parse_annotations_missing_centroid() {
        let result = parse_annotations_text("seq_id,genus,species\nCEN1,Vibrio,cholerae\n", b',');
        match result {
            Err(ParseError::MissingColumn(column)) => assert_eq!(column, "centroid"),
            other => panic!("expected MissingColumn error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_annotations_quoted_fields() {
        let csv = "centroid,genus,species\nCEN1,\"Vibrio\",\"cholerae, strain O1\"\n";
        let table = parse_annotations_text(csv, b',').unwrap();
        assert_eq!(
            table.records[0].species.as_deref(),
            Some("cholerae, strain O1")
        );
    }
}
