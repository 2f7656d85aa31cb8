//! Recode command - rewrite DNA so it translates to a target protein.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{read_sequence_arg, OutputFormat};
use crate::core::types::{RecodeResult, TieBreakMode};
use crate::recoding::{recode_with_config, translate_sequence, RecodeConfig};
use crate::report::{render_tsv, summary_line, write_report};

/// Arguments for the recode command
#[derive(Args)]
pub struct RecodeArgs {
    /// DNA sequence (A/C/G/T)
    #[arg(long, conflicts_with = "dna_file", required_unless_present = "dna_file")]
    pub dna: Option<String>,

    /// File containing the DNA sequence (raw text or FASTA, optionally gzipped)
    #[arg(long)]
    pub dna_file: Option<PathBuf>,

    /// Target amino-acid sequence (use '_' or '*' for stop)
    #[arg(long, conflicts_with = "aa_file", required_unless_present = "aa_file")]
    pub aa: Option<String>,

    /// File containing the target amino-acid sequence
    #[arg(long)]
    pub aa_file: Option<PathBuf>,

    /// Tie-break strategy when several codons are equally close
    #[arg(long, value_enum, default_value = "wobble")]
    pub tie_break: TieBreakMode,

    /// Allow stop codons before the end of the target sequence
    #[arg(long)]
    pub allow_internal_stop: bool,

    /// Write a per-codon report (JSON if the path ends in .json, otherwise TSV)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print only the recoded sequence
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the recode command
///
/// # Errors
///
/// Returns an error if inputs cannot be read, fail validation, or the report
/// cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RecodeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let dna = read_sequence_arg(args.dna.as_deref(), args.dna_file.as_deref(), "DNA")?;
    let target = read_sequence_arg(args.aa.as_deref(), args.aa_file.as_deref(), "amino-acid")?;

    let config = RecodeConfig {
        tie_break: args.tie_break,
        forbid_internal_stop: !args.allow_internal_stop,
    };

    if verbose {
        eprintln!(
            "Recoding {} nt against {} target residues (tie-break: {})",
            dna.len(),
            target.chars().count(),
            config.tie_break
        );
    }

    let result = recode_with_config(&target, &dna, &config)?;

    match format {
        OutputFormat::Text => print_text_result(&dna, &result, args.quiet)?,
        OutputFormat::Json => print_json_result(&result)?,
        OutputFormat::Tsv => print!("{}", render_tsv(&result.changes)),
    }

    if let Some(path) = &args.report {
        write_report(path, &result.changes)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        if verbose {
            eprintln!("Wrote report for {} codons to {}", result.len(), path.display());
        }
    }

    Ok(())
}

fn print_text_result(dna: &str, result: &RecodeResult, quiet: bool) -> anyhow::Result<()> {
    println!("{}", result.sequence);
    if !quiet {
        println!("AA(before): {}", translate_sequence(dna)?);
        println!("AA(after) : {}", translate_sequence(&result.sequence)?);
        println!("{}", summary_line(result));
    }
    Ok(())
}

fn print_json_result(result: &RecodeResult) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "sequence": result.sequence,
        "codons_changed": result.aa_changed_count(),
        "codons_total": result.len(),
        "nucleotide_changes": result.total_distance(),
        "changes": result.changes,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
