use std::path::Path;

/// How the report delimiter is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputDelimiter {
    /// Guess from the output file extension
    #[default]
    Guess,
    Explicit(u8),
}

impl OutputDelimiter {
    /// The delimiter byte to write `path` with
    #[must_use]
    pub fn resolve(self, path: &Path) -> u8 {
        match self {
            Self::Guess => guess_delimiter(path),
            Self::Explicit(delimiter) => delimiter,
        }
    }
}

/// Pick the report delimiter from the output file name
///
/// `.csv` (any case) means comma; every other extension, or none, means tab.
/// A trailing `.gz` is not looked through.
///
/// # Examples
///
/// ```
/// use blastomatic::output::delimiter::guess_delimiter;
/// use std::path::Path;
///
/// assert_eq!(guess_delimiter(Path::new("out.csv")), b',');
/// assert_eq!(guess_delimiter(Path::new("out.tsv")), b'\t');
/// ```
#[must_use]
pub fn guess_delimiter(path: &Path) -> u8 {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("csv") => b',',
        _ => b'\t',
    }
}
