//! Translate command - print the protein encoded by a DNA sequence.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_sequence_arg, OutputFormat};
use crate::core::genetic_code::translate_codon;
use crate::recoding::translate_sequence;
use crate::utils::validation::check_codons;

/// Arguments for the translate command
#[derive(Args)]
pub struct TranslateArgs {
    /// DNA sequence (A/C/G/T)
    #[arg(long, conflicts_with = "dna_file", required_unless_present = "dna_file")]
    pub dna: Option<String>,

    /// File containing the DNA sequence (raw text or FASTA, optionally gzipped)
    #[arg(long)]
    pub dna_file: Option<PathBuf>,
}

/// Execute the translate command
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid DNA.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TranslateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let dna = read_sequence_arg(args.dna.as_deref(), args.dna_file.as_deref(), "DNA")?;
    let protein = translate_sequence(&dna)?;

    if verbose {
        eprintln!("Translated {} codons", protein.chars().count());
    }

    match format {
        OutputFormat::Text => println!("{protein}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "dna": dna,
                "protein": protein,
                "codons": protein.chars().count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("index\tcodon\tamino_acid");
            // Already validated by translate_sequence
            for (index, codon) in check_codons(&dna)?.into_iter().enumerate() {
                println!("{index}\t{codon}\t{}", translate_codon(codon));
            }
        }
    }

    Ok(())
}
