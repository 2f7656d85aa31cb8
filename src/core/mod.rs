//! Core data types and tables for codon recoding.
//!
//! - [`genetic_code`]: the standard genetic code, synonymous codon lookup and
//!   the preferred codon per amino acid
//! - [`distance`]: Hamming distance and differing positions between codons
//! - [`types`]: [`Codon`](types::Codon), [`TieBreakMode`](types::TieBreakMode),
//!   [`Decision`](types::Decision) and the per-codon [`CodonChange`](types::CodonChange) record
//!
//! ## Codon Layout
//!
//! | Position | Name | Notes |
//! |----------|------|-------|
//! | 0 | first | |
//! | 1 | second | |
//! | 2 | wobble | most synonymous substitutions happen here |

pub mod distance;
pub mod genetic_code;
pub mod types;
