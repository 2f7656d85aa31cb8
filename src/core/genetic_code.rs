//! The standard genetic code.
//!
//! Codons are enumerated lexicographically (`AAA`, `AAC`, ..., `TTT`), so the
//! forward table is a 64-byte string indexed by [`Codon::index`]. The inverse
//! mapping (amino acid to synonymous codons) is derived from it on demand and
//! always yields codons in lexicographic order.
//!
//! Stop is represented by the pseudo amino acid [`STOP`] (`_`); `*` is accepted
//! as an alias wherever user input is normalized.

use crate::core::types::Codon;
use crate::utils::validation::RecodeError;

/// Symbol for a stop codon
pub const STOP: char = '_';

/// Alternative stop symbol accepted in target sequences
pub const STOP_ALIAS: char = '*';

/// Every recognized amino-acid symbol, including stop
pub const AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY_";

/// Amino acid for each codon, indexed by lexicographic codon position
const CODE: &[u8; 64] = b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV_Y_YSSSS_CWCLFLF";

/// Translate a codon string, accepting lowercase input.
///
/// # Errors
///
/// Returns `RecodeError::InvalidCodon` if the input is not three characters
/// from {A, C, G, T}.
pub fn translate(codon: &str) -> Result<char, RecodeError> {
    let codon: Codon = codon.parse()?;
    Ok(translate_codon(codon))
}

/// Translate an already-validated codon.
#[must_use]
pub fn translate_codon(codon: Codon) -> char {
    char::from(CODE[codon.index()])
}

/// Whether `symbol` is a recognized amino acid or the stop symbol.
#[must_use]
pub fn is_amino_acid(symbol: char) -> bool {
    AMINO_ACIDS.contains(symbol)
}

/// Map `*` to `_`; everything else is returned unchanged.
#[must_use]
pub fn normalize_stop(symbol: char) -> char {
    if symbol == STOP_ALIAS {
        STOP
    } else {
        symbol
    }
}

/// All codons encoding `amino_acid`, in lexicographic order.
///
/// Unknown symbols yield an empty iterator.
pub fn synonymous_codons(amino_acid: char) -> impl Iterator<Item = Codon> {
    Codon::all().filter(move |codon| translate_codon(*codon) == amino_acid)
}

/// The most common codon for `amino_acid`, used to break ties.
#[must_use]
pub fn preferred_codon(amino_acid: char) -> Option<Codon> {
    let bases = match amino_acid {
        STOP => b"TAA",
        'A' => b"GCG",
        'C' => b"TGC",
        'D' => b"GAT",
        'E' => b"GAA",
        'F' => b"TTT",
        'G' => b"GGC",
        'H' => b"CAT",
        'I' => b"ATT",
        'K' => b"AAA",
        'L' => b"CTG",
        'M' => b"ATG",
        'N' => b"AAC",
        'P' => b"CCG",
        'Q' => b"CAG",
        'R' => b"CGT",
        'S' => b"AGC",
        'T' => b"ACC",
        'V' => b"GTG",
        'W' => b"TGG",
        'Y' => b"TAT",
        _ => return None,
    };
    Some(Codon::from_bases_unchecked(*bases))
}
