use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::core::hit::{HitRecord, HIT_COLUMNS};
use crate::parsing::{open_input, ParseError};

/// Parse a BLAST `-outfmt 6` file (optionally gzipped)
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_hits_file(path: &Path) -> Result<Vec<HitRecord>, ParseError> {
    let mut content = String::new();
    open_input(path)?.read_to_string(&mut content)?;
    let hits = parse_hits_text(&content)?;
    debug!("Parsed {} hits from {}", hits.len(), path.display());
    Ok(hits)
}

/// Parse BLAST tabular text: no header, 12 tab-separated columns per line
///
/// Empty lines are skipped; a line holding only whitespace is still parsed.
///
/// # Errors
///
/// Returns `ParseError::FieldCount` if a line does not have exactly 12 fields,
/// or `ParseError::InvalidNumber` if a numeric column does not parse.
pub fn parse_hits_text(text: &str) -> Result<Vec<HitRecord>, ParseError> {
    let mut hits = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != HIT_COLUMNS.len() {
            return Err(ParseError::FieldCount {
                line: line_num,
                found: fields.len(),
            });
        }

        let num = |idx: usize| -> Result<u64, ParseError> { parse_field(&fields, idx, line_num) };
        let float = |idx: usize| -> Result<f64, ParseError> { parse_field(&fields, idx, line_num) };

        hits.push(HitRecord {
            query_id: fields[0].to_string(),
            subject_id: fields[1].to_string(),
            percent_identity: float(2)?,
            percent_identity_text: fields[2].trim().to_string(),
            alignment_length: num(3)?,
            mismatches: num(4)?,
            gap_opens: num(5)?,
            query_start: num(6)?,
            query_end: num(7)?,
            subject_start: num(8)?,
            subject_end: num(9)?,
            e_value: float(10)?,
            bit_score: float(11)?,
        });
    }

    Ok(hits)
}

fn parse_field<T: FromStr>(fields: &[&str], idx: usize, line: usize) -> Result<T, ParseError> {
    let raw = fields[idx].trim();
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        column: HIT_COLUMNS[idx],
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIT: &str = "Q1\tCEN1\t98.5\t100\t1\t0\t1\t100\t1\t100\t1e-50\t200";

    #[test]
    fn test_parse_hits_text() {
        let text = format!("{HIT}\nQ2\tCEN2\t87.25\t90\t10\t2\t5\t94\t300\t210\t3.2e-20\t150.5\n");
        let hits = parse_hits_text(&text).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].query_id, "Q1");
        assert_eq!(hits[0].subject_id, "CEN1");
        assert!((hits[0].percent_identity - 98.5).abs() < f64::EPSILON);
        assert_eq!(hits[0].percent_identity_text, "98.5");
        assert_eq!(hits[0].alignment_length, 100);
        assert!((hits[0].e_value - 1e-50).abs() < f64::EPSILON);
        assert!((hits[0].bit_score - 200.0).abs() < f64::EPSILON);
        assert_eq!(hits[1].subject_start, 300);
        assert_eq!(hits[1].subject_end, 210);
        assert_eq!(hits[1].percent_identity_text, "87.25");
    }

    #[test]
    fn test_parse_hits_skips_blank_lines() {
        let text = format!("\n{HIT}\n\n{HIT}\r\n");
        assert_eq!(parse_hits_text(&text).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_hits_whitespace_line_is_an_error() {
        let text = format!("{HIT}\n\t\t\t\t\t\t\t\t\t\t\t\n");
        match parse_hits_text(&text) {
            Err(ParseError::InvalidNumber { line, column, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(column, "pident");
            }
            other => panic!("expected InvalidNumber error, got {other:?}"),
        }

        let spaces = format!("{HIT}\n   \n");
        assert!(matches!(
            parse_hits_text(&spaces),
            Err(ParseError::FieldCount { line: 2, found: 1 })
        ));
    }

    #[test]
    fn test_parse_hits_empty_input() {
        assert!(parse_hits_text("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_hits_wrong_field_count() {
        let text = format!("{HIT}\nQ2\tCEN2\t99.0\n");
        match parse_hits_text(&text) {
            Err(ParseError::FieldCount { line, found }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected FieldCount error, got {other:?}"),
        }

        let extra = format!("{HIT}\textra");
        assert!(matches!(
            parse_hits_text(&extra),
            Err(ParseError::FieldCount { found: 13, .. })
        ));
    }

    #[test]
    fn test_parse_hits_non_numeric_field() {
        let text = "Q1\tCEN1\thigh\t100\t1\t0\t1\t100\t1\t100\t1e-50\t200";
        match parse_hits_text(text) {
            Err(ParseError::InvalidNumber {
                line,
                column,
                value,
            }) => {
                assert_eq!(line, 1);
                assert_eq!(column, "pident");
                assert_eq!(value, "high");
            }
            other => panic!("expected InvalidNumber error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_hits_fractional_length_rejected() {
        let text = "Q1\tCEN1\t98.5\t100.5\t1\t0\t1\t100\t1\t100\t1e-50\t200";
        assert!(matches!(
            parse_hits_text(text),
            Err(ParseError::InvalidNumber {
                column: "length",
                ..
            })
        ));
    }
}
