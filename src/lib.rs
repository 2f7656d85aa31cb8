//! # codon-recoder
//!
//! A library for recoding DNA so that it encodes a chosen amino-acid sequence.
//!
//! When introducing point mutations into a coding sequence, there are usually
//! several codons that produce the desired amino acid. Picking the one closest
//! to the original codon keeps the edit count low and leaves the rest of the
//! sequence untouched.
//!
//! `codon-recoder` walks the sequence codon by codon and, wherever the target
//! amino acid differs from the one encoded, substitutes the synonymous codon
//! with the smallest Hamming distance to the original.
//!
//! ## Features
//!
//! - **Minimal edits**: Each codon is replaced by a closest synonymous codon
//! - **Deterministic tie-breaking**: Wobble-position changes, then the most
//!   common codon, then lexicographic order
//! - **Per-codon report**: Every position records what changed and why
//! - **Stop handling**: Internal stops are rejected unless explicitly allowed
//!
//! ## Example
//!
//! ```rust
//! use codon_recoder::{recode, translate_sequence, Decision, TieBreakMode};
//!
//! // ATG AAA ACG encodes M K T; ask for M N T instead
//! let result = recode("MNT", "ATGAAAACG", TieBreakMode::Wobble, true).unwrap();
//!
//! assert_eq!(translate_sequence(&result.sequence).unwrap(), "MNT");
//! assert_eq!(result.total_distance(), 1);
//! assert_eq!(result.changes[1].decision, Decision::TieBreakWobble);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Genetic code tables, distance functions and value types
//! - [`recoding`]: Codon selection and whole-sequence recoding
//! - [`parsing`]: Reading sequences from text and FASTA files
//! - [`report`]: JSON and TSV rendering of change reports
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod recoding;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::genetic_code::translate;
pub use crate::core::types::*;
pub use recoding::{
    choose_codon, recode, recode_sequence, recode_with_config, translate_sequence, RecodeConfig,
};
pub use utils::validation::RecodeError;
