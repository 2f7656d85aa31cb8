//! Centralized validation for recoding inputs.
//!
//! Every check here runs before any codon is chosen, so a failure aborts the
//! whole operation without producing partial output.

use std::collections::BTreeSet;

use crate::core::genetic_code::{is_amino_acid, STOP};
use crate::core::types::{Codon, NUCLEOTIDES};

/// Validation error types for recoding inputs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecodeError {
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid DNA length {0}: must be a positive multiple of 3")]
    InvalidLength(usize),

    #[error("DNA contains invalid bases {bases:?} (first at position {position})")]
    InvalidBase { bases: Vec<char>, position: usize },

    #[error("Invalid codon '{0}' for the standard genetic code")]
    InvalidCodon(String),

    #[error("Target contains invalid amino-acid symbols {symbols:?}")]
    InvalidAminoAcid { symbols: Vec<char> },

    #[error("Internal stop at position {position} is forbidden (use --allow-internal-stop to permit)")]
    InternalStopForbidden { position: usize },

    #[error("Unknown tie-break mode '{0}' (expected wobble, freq or lex)")]
    InvalidTieBreakMode(String),
}

/// Check that a DNA sequence of `length` symbols splits into whole codons.
///
/// Returns the codon count.
///
/// # Errors
///
/// Returns `RecodeError::InvalidLength` if `length` is zero or not a multiple of 3.
pub fn check_dna_length(length: usize) -> Result<usize, RecodeError> {
    if length == 0 || length % 3 != 0 {
        return Err(RecodeError::InvalidLength(length));
    }
    Ok(length / 3)
}

/// Check that the target has one amino acid per codon.
///
/// # Errors
///
/// Returns `RecodeError::LengthMismatch` if the counts differ.
pub fn check_target_length(codon_count: usize, target_length: usize) -> Result<(), RecodeError> {
    if codon_count != target_length {
        return Err(RecodeError::LengthMismatch {
            expected: codon_count,
            actual: target_length,
        });
    }
    Ok(())
}

/// Check that every character of an uppercase DNA sequence is A, C, G or T.
///
/// # Errors
///
/// Returns `RecodeError::InvalidBase` listing the distinct offending
/// characters and the position of the first one.
pub fn check_bases(dna: &str) -> Result<(), RecodeError> {
    let is_base = |c: char| c.is_ascii() && NUCLEOTIDES.contains(&(c as u8));
    let Some(position) = dna.chars().position(|c| !is_base(c)) else {
        return Ok(());
    };
    let bases: BTreeSet<char> = dna.chars().filter(|c| !is_base(*c)).collect();
    Err(RecodeError::InvalidBase {
        bases: bases.into_iter().collect(),
        position,
    })
}

/// Split a DNA sequence into codons, rejecting any window that is not a codon.
///
/// # Errors
///
/// Returns `RecodeError::InvalidCodon` for the first unrecognized window.
pub fn check_codons(dna: &str) -> Result<Vec<Codon>, RecodeError> {
    dna.as_bytes()
        .chunks(3)
        .map(|window| {
            Codon::from_bytes(window)
                .ok_or_else(|| RecodeError::InvalidCodon(String::from_utf8_lossy(window).into_owned()))
        })
        .collect()
}

/// Check that every symbol of a normalized target is an amino acid or stop.
///
/// # Errors
///
/// Returns `RecodeError::InvalidAminoAcid` listing the distinct offending symbols.
pub fn check_amino_acids(target: &[char]) -> Result<(), RecodeError> {
    let symbols: BTreeSet<char> = target.iter().copied().filter(|c| !is_amino_acid(*c)).collect();
    if symbols.is_empty() {
        Ok(())
    } else {
        Err(RecodeError::InvalidAminoAcid {
            symbols: symbols.into_iter().collect(),
        })
    }
}

/// Check that stop appears, if at all, only as the final symbol.
///
/// # Errors
///
/// Returns `RecodeError::InternalStopForbidden` with the first internal stop position.
pub fn check_internal_stop(target: &[char]) -> Result<(), RecodeError> {
    let Some((_, internal)) = target.split_last() else {
        return Ok(());
    };
    match internal.iter().position(|&c| c == STOP) {
        Some(position) => Err(RecodeError::InternalStopForbidden { position }),
        None => Ok(()),
    }
}
