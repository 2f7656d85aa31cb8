//! Command-line interface for codon-recoder.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **recode**: Recode DNA so it translates to a target amino-acid sequence
//! - **translate**: Translate DNA with the standard genetic code
//!
//! ## Usage
//!
//! ```text
//! # Recode inline sequences
//! codon-recoder recode --dna ATGAAAACG --aa MNT
//!
//! # Read sequences from FASTA files and write a per-codon report
//! codon-recoder recode --dna-file gene.fa --aa-file target.faa --report changes.tsv
//!
//! # Prefer the most common codon when candidates tie
//! codon-recoder recode --dna ATGAAAACG --aa MNT --tie-break freq
//!
//! # JSON output for scripting
//! codon-recoder --format json recode --dna ATGAAAACG --aa MNT
//! ```

use std::path::Path;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use crate::parsing::fasta::read_sequence_file;
use crate::parsing::text::normalize_sequence_text;

pub mod recode;
pub mod translate;

#[derive(Parser)]
#[command(name = "codon-recoder")]
#[command(version)]
#[command(about = "Recode DNA to match a target amino-acid sequence with minimal nucleotide changes")]
#[command(
    long_about = "codon-recoder rewrites a DNA sequence so that it translates to a given amino-acid sequence.\n\nEach codon is replaced independently by the synonymous codon with the fewest nucleotide differences. Ties are broken by:\n- A third-position (wobble) substitution\n- The most common codon for the amino acid\n- Lexicographic order"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recode DNA to encode a target amino-acid sequence
    Recode(recode::RecodeArgs),

    /// Translate DNA into amino acids
    Translate(translate::TranslateArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Resolve a sequence given inline or by file path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or no sequence is present.
pub fn read_sequence_arg(
    inline: Option<&str>,
    file: Option<&Path>,
    what: &str,
) -> anyhow::Result<String> {
    let sequence = match (inline, file) {
        (Some(text), _) => normalize_sequence_text(text),
        (None, Some(path)) => read_sequence_file(path)
            .with_context(|| format!("Failed to read {what} sequence from {}", path.display()))?,
        (None, None) => String::new(),
    };

    if sequence.is_empty() {
        bail!("No {what} sequence provided");
    }
    Ok(sequence)
}
