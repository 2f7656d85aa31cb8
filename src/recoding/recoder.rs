use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::genetic_code::{normalize_stop, translate_codon};
use crate::core::types::{Codon, CodonChange, RecodeResult, TieBreakMode};
use crate::recoding::selector::choose_codon;
use crate::utils::validation::{
    check_amino_acids, check_bases, check_codons, check_dna_length, check_internal_stop,
    check_target_length, RecodeError,
};

/// Configuration for a recode run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecodeConfig {
    /// Strategy for equally close synonymous codons
    pub tie_break: TieBreakMode,
    /// Reject targets with a stop anywhere but the last position
    pub forbid_internal_stop: bool,
}

impl Default for RecodeConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreakMode::Wobble,
            forbid_internal_stop: true,
        }
    }
}

/// Recode `dna` so that it translates to `target` with minimal nucleotide edits.
///
/// Both inputs are uppercased and `*` in the target is read as stop (`_`).
///
/// # Errors
///
/// Returns the first validation failure: `InvalidLength`, `LengthMismatch`,
/// `InvalidBase`, `InvalidCodon`, `InvalidAminoAcid`, or
/// `InternalStopForbidden` when `forbid_internal_stop` is set.
pub fn recode(
    target: &str,
    dna: &str,
    tie_break: TieBreakMode,
    forbid_internal_stop: bool,
) -> Result<RecodeResult, RecodeError> {
    recode_with_config(
        target,
        dna,
        &RecodeConfig {
            tie_break,
            forbid_internal_stop,
        },
    )
}

/// Recode with an explicit [`RecodeConfig`].
///
/// # Errors
///
/// See [`recode`].
pub fn recode_with_config(
    target: &str,
    dna: &str,
    config: &RecodeConfig,
) -> Result<RecodeResult, RecodeError> {
    let dna = dna.to_uppercase();
    let target: Vec<char> = target.to_uppercase().chars().map(normalize_stop).collect();

    let codons = validate_inputs(&target, &dna, config)?;

    let changes = codons
        .into_iter()
        .zip(target)
        .enumerate()
        .map(|(index, (reference, target_aa))| {
            recode_position(index, reference, target_aa, config.tie_break)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let sequence: String = changes.iter().map(|c| c.new_codon.to_string()).collect();
    let result = RecodeResult { sequence, changes };

    debug!(
        "Recoded {} codons: {} amino acids changed, {} nucleotide edits",
        result.len(),
        result.aa_changed_count(),
        result.total_distance()
    );

    Ok(result)
}

/// Recode with the default configuration, returning only the new sequence.
///
/// # Errors
///
/// See [`recode`].
pub fn recode_sequence(target: &str, dna: &str) -> Result<String, RecodeError> {
    recode_with_config(target, dna, &RecodeConfig::default()).map(|result| result.sequence)
}

/// Build the change record for a single codon position.
///
/// Depends only on its arguments, so positions can be evaluated in any order.
///
/// # Errors
///
/// Returns `RecodeError::InvalidAminoAcid` if `target_aa` is not recognized.
pub fn recode_position(
    index: usize,
    reference: Codon,
    target_aa: char,
    tie_break: TieBreakMode,
) -> Result<CodonChange, RecodeError> {
    let selection = choose_codon(target_aa, reference, tie_break)?;
    let raw_aa = translate_codon(reference);

    if raw_aa != target_aa {
        debug!(
            "Codon {index}: {reference} ({raw_aa}) -> {} ({target_aa}), {} edit(s), {}",
            selection.codon, selection.distance, selection.decision
        );
    }

    Ok(CodonChange {
        index,
        raw_codon: reference,
        new_codon: selection.codon,
        raw_aa,
        target_aa,
        aa_changed: raw_aa != target_aa,
        distance: selection.distance,
        diff_positions: selection.diff_positions,
        decision: selection.decision,
    })
}

/// Translate a DNA sequence with the standard genetic code.
///
/// An empty sequence translates to an empty string.
///
/// # Errors
///
/// Returns `InvalidLength` if the length is not a multiple of 3, `InvalidBase`
/// for characters outside {A, C, G, T}, or `InvalidCodon`.
pub fn translate_sequence(dna: &str) -> Result<String, RecodeError> {
    let dna = dna.to_uppercase();
    if dna.is_empty() {
        return Ok(String::new());
    }
    check_dna_length(dna.chars().count())?;
    check_bases(&dna)?;
    Ok(check_codons(&dna)?
        .into_iter()
        .map(translate_codon)
        .collect())
}

/// Run every input check in order and split the DNA into codons.
fn validate_inputs(
    target: &[char],
    dna: &str,
    config: &RecodeConfig,
) -> Result<Vec<Codon>, RecodeError> {
    let codon_count = check_dna_length(dna.chars().count())?;
    check_target_length(codon_count, target.len())?;
    check_bases(dna)?;
    let codons = check_codons(dna)?;
    check_amino_acids(target)?;
    if config.forbid_internal_stop {
        check_internal_stop(target)?;
    }
    Ok(codons)
}
