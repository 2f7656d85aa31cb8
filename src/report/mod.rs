//! Rendering of per-codon change reports.
//!
//! Two formats are supported, selected by the report path's extension:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.json` | Pretty-printed JSON array, one object per codon |
//! | anything else | Tab-separated table with a header row |
//!
//! In the TSV form `aa_changed` is written as `0`/`1` and `diff_positions`
//! as a comma-joined list (empty when the codon is unchanged).

use std::path::Path;

use crate::core::types::{CodonChange, RecodeResult};

/// Header row of the TSV report
pub const TSV_HEADER: &str =
    "index\traw_codon\tnew_codon\traw_aa\ttarget_aa\taa_changed\tdistance\tdiff_positions\tdecision";

/// On-disk report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Tsv,
}

impl ReportFormat {
    /// `.json` (any case) selects JSON; everything else is TSV
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Tsv,
        }
    }
}

/// Render the change records as a TSV table, header included.
#[must_use]
pub fn render_tsv(changes: &[CodonChange]) -> String {
    let mut out = String::with_capacity((changes.len() + 1) * 48);
    out.push_str(TSV_HEADER);
    out.push('\n');

    for change in changes {
        let diffs = change
            .diff_positions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            change.index,
            change.raw_codon,
            change.new_codon,
            change.raw_aa,
            change.target_aa,
            u8::from(change.aa_changed),
            change.distance,
            diffs,
            change.decision,
        ));
    }

    out
}

/// Render the change records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(changes: &[CodonChange]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(changes)
}

/// Write the change report to `path` in the format implied by its extension.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_report(path: &Path, changes: &[CodonChange]) -> std::io::Result<()> {
    let contents = match ReportFormat::from_path(path) {
        ReportFormat::Json => render_json(changes)?,
        ReportFormat::Tsv => render_tsv(changes),
    };
    std::fs::write(path, contents)
}

/// Human-readable summary line for a recode run
#[must_use]
pub fn summary_line(result: &RecodeResult) -> String {
    format!(
        "Codons changed: {} / {}; Nucleotide changes: {}",
        result.aa_changed_count(),
        result.len(),
        result.total_distance()
    )
}
