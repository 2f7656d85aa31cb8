//! Input acquisition for DNA and amino-acid sequences.
//!
//! Sequences can be given as raw text or in FASTA form:
//!
//! - **Inline text / plain files**: header lines starting with `>` are dropped,
//!   the remaining lines are concatenated and all whitespace is removed
//! - **FASTA files** (`.fa`, `.fasta`, `.fna`, `.faa`, `.ffn`) starting with a
//!   `>` header: read with noodles, every record's sequence is concatenated in
//!   file order. Headerless content in such files is read as raw text
//! - Any of the above may be gzip or bgzip compressed (`.gz`, `.bgz`)
//!
//! All returned sequences are uppercase. Symbol validation happens later, in
//! the recoder.
//!
//! ## Example
//!
//! ```rust
//! use codon_recoder::parsing::text::normalize_sequence_text;
//!
//! let seq = normalize_sequence_text(">my gene\natg aaa\nacg\n");
//! assert_eq!(seq, "ATGAAAACG");
//! ```

pub mod fasta;
pub mod text;

/// Errors raised while reading sequence input
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),
}
