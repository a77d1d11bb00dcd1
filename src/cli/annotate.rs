use anyhow::Context;
use tracing::{debug, info};

use crate::annotate::{annotate_hits, AnnotateConfig};
use crate::cli::Cli;
use crate::output::write_report;
use crate::parsing::annotations::parse_annotations_file;
use crate::parsing::hits::parse_hits_file;
use crate::utils::format::format_count;

/// Load both inputs, join them and write the report
///
/// Nothing is written unless both inputs load cleanly.
///
/// # Errors
///
/// Returns an error if either input cannot be read or parsed, or the report
/// cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let hits = parse_hits_file(&cli.hits)
        .with_context(|| format!("Failed to load BLAST hits from {}", cli.hits.display()))?;

    let annotations = parse_annotations_file(&cli.annotations, cli.annotations_delimiter)
        .with_context(|| {
            format!(
                "Failed to load annotations from {}",
                cli.annotations.display()
            )
        })?;

    info!(
        "Loaded {} hits and {} annotation rows",
        hits.len(),
        annotations.len()
    );

    let config = AnnotateConfig {
        min_pident: cli.pctid,
    };
    let result = annotate_hits(&hits, &annotations, &config);

    let delimiter = cli.delimiter.unwrap_or_default().resolve(&cli.outfile);
    debug!("Writing with delimiter {:?}", char::from(delimiter));

    write_report(&cli.outfile, &result.records, delimiter)
        .with_context(|| format!("Failed to write {}", cli.outfile.display()))?;

    println!(
        "Exported {} to \"{}\".",
        format_count(result.records.len()),
        cli.outfile.display()
    );

    Ok(())
}
