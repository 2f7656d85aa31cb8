use std::cmp::Ordering;

use crate::core::distance::{diff_positions, hamming_distance};
use crate::core::genetic_code::{preferred_codon, synonymous_codons, translate_codon};
use crate::core::types::{Codon, Decision, TieBreakMode};
use crate::utils::validation::RecodeError;

/// Position within a codon most tolerant of synonymous substitution
pub const WOBBLE_POSITION: usize = 2;

/// The codon picked for one position and how it was picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub codon: Codon,
    pub decision: Decision,
    pub distance: usize,
    pub diff_positions: Vec<usize>,
}

/// Choose the codon for `target` closest to `reference`.
///
/// If `reference` already encodes `target` it is kept as-is, even when another
/// synonym looks closer. Otherwise the synonymous codons at minimal Hamming
/// distance are collected and, if more than one remains, narrowed down by
/// `mode`:
///
/// - `Wobble`: a candidate differing only at the third position, then
///   the preferred codon, then the lexicographically smallest
/// - `Freq`: the preferred codon, then the lexicographically smallest
/// - `Lex`: the lexicographically smallest
///
/// # Errors
///
/// Returns `RecodeError::InvalidAminoAcid` if `target` has no codons.
pub fn choose_codon(
    target: char,
    reference: Codon,
    mode: TieBreakMode,
) -> Result<Selection, RecodeError> {
    if translate_codon(reference) == target {
        return Ok(Selection {
            codon: reference,
            decision: Decision::Same,
            distance: 0,
            diff_positions: Vec::new(),
        });
    }

    // Candidates arrive in lexicographic order, so `tied` stays sorted
    let mut best = usize::MAX;
    let mut tied: Vec<Codon> = Vec::new();
    for candidate in synonymous_codons(target) {
        let distance = hamming_distance(candidate, reference)?;
        match distance.cmp(&best) {
            Ordering::Less => {
                best = distance;
                tied.clear();
                tied.push(candidate);
            }
            Ordering::Equal => tied.push(candidate),
            Ordering::Greater => {}
        }
    }

    let (codon, decision) = match tied.as_slice() {
        [] => {
            return Err(RecodeError::InvalidAminoAcid {
                symbols: vec![target],
            })
        }
        [only] => (*only, Decision::MinDistance),
        [first, ..] => break_tie(&tied, *first, target, reference, mode),
    };

    Ok(Selection {
        codon,
        decision,
        distance: best,
        diff_positions: diff_positions(codon, reference)?,
    })
}

fn break_tie(
    tied: &[Codon],
    smallest: Codon,
    target: char,
    reference: Codon,
    mode: TieBreakMode,
) -> (Codon, Decision) {
    if mode == TieBreakMode::Wobble {
        if let Some(codon) = tied.iter().find(|c| is_wobble_only(**c, reference)) {
            return (*codon, Decision::TieBreakWobble);
        }
    }

    if matches!(mode, TieBreakMode::Wobble | TieBreakMode::Freq) {
        if let Some(codon) = preferred_codon(target).filter(|p| tied.contains(p)) {
            return (codon, Decision::TieBreakFreq);
        }
    }

    (smallest, Decision::TieBreakLex)
}

/// True if `candidate` differs from `reference` at the wobble position only
fn is_wobble_only(candidate: Codon, reference: Codon) -> bool {
    let (a, b) = (candidate.bases(), reference.bases());
    (0..3).all(|i| (a[i] != b[i]) == (i == WOBBLE_POSITION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(s: &str) -> Codon {
        s.parse().unwrap()
    }

    fn choose(target: char, reference: &str, mode: TieBreakMode) -> Selection {
        choose_codon(target, codon(reference), mode).unwrap()
    }

    #[test]
    fn test_same_amino_acid_keeps_reference() {
        let selection = choose('K', "AAG", TieBreakMode::Wobble);
        assert_eq!(selection.codon, codon("AAG"));
        assert_eq!(selection.decision, Decision::Same);
        assert_eq!(selection.distance, 0);
        assert!(selection.diff_positions.is_empty());
    }

    #[test]
    fn test_single_minimum_is_min_distance() {
        // ATG (M) -> W: only TGG exists
        let selection = choose('W', "ATG", TieBreakMode::Wobble);
        assert_eq!(selection.codon, codon("TGG"));
        assert_eq!(selection.decision, Decision::MinDistance);
        assert_eq!(selection.distance, 2);
        assert_eq!(selection.diff_positions, vec![0, 1]);

        // AAA (K) -> Q: CAA is the unique distance-1 candidate
        let selection = choose('Q', "AAA", TieBreakMode::Lex);
        assert_eq!(selection.codon, codon("CAA"));
        assert_eq!(selection.decision, Decision::MinDistance);
        assert_eq!(selection.diff_positions, vec![0]);
    }

    #[test]
    fn test_wobble_prefers_third_position_change() {
        // AAA (K) -> N: AAC and AAT both differ only at the wobble position
        let selection = choose('N', "AAA", TieBreakMode::Wobble);
        assert_eq!(selection.codon, codon("AAC"));
        assert_eq!(selection.decision, Decision::TieBreakWobble);
        assert_eq!(selection.distance, 1);
        assert_eq!(selection.diff_positions, vec![WOBBLE_POSITION]);
    }

    #[test]
    fn test_wobble_falls_back_to_preferred_codon() {
        // GGG (G) -> Y: TAC and TAT tie at distance 3, neither is wobble-only.
        // TAT is preferred for Y.
        let selection = choose('Y', "GGG", TieBreakMode::Wobble);
        assert_eq!(selection.codon, codon("TAT"));
        assert_eq!(selection.decision, Decision::TieBreakFreq);
        assert_eq!(selection.distance, 3);
        assert_eq!(selection.diff_positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_wobble_falls_back_to_lex_without_preferred() {
        // TGG (W) -> R: AGG and CGG tie at distance 1 on the first base;
        // preferred CGT is not tied
        let selection = choose('R', "TGG", TieBreakMode::Wobble);
        assert_eq!(selection.codon, codon("AGG"));
        assert_eq!(selection.decision, Decision::TieBreakLex);
        assert_eq!(selection.distance, 1);
        assert_eq!(selection.diff_positions, vec![0]);
    }

    #[test]
    fn test_freq_skips_wobble_check() {
        // AAA (K) -> N: preferred AAC is tied with AAT
        let selection = choose('N', "AAA", TieBreakMode::Freq);
        assert_eq!(selection.codon, codon("AAC"));
        assert_eq!(selection.decision, Decision::TieBreakFreq);

        // GGG (G) -> Y: TAC and TAT tie; preferred TAT wins under freq
        let selection = choose('Y', "GGG", TieBreakMode::Freq);
        assert_eq!(selection.codon, codon("TAT"));
        assert_eq!(selection.decision, Decision::TieBreakFreq);
        assert_eq!(selection.distance, 3);
    }

    #[test]
    fn test_freq_falls_back_to_lex() {
        let selection = choose('R', "TGG", TieBreakMode::Freq);
        assert_eq!(selection.codon, codon("AGG"));
        assert_eq!(selection.decision, Decision::TieBreakLex);
    }

    #[test]
    fn test_lex_mode_takes_smallest() {
        let selection = choose('Y', "GGG", TieBreakMode::Lex);
        assert_eq!(selection.codon, codon("TAC"));
        assert_eq!(selection.decision, Decision::TieBreakLex);

        let selection = choose('N', "AAA", TieBreakMode::Lex);
        assert_eq!(selection.codon, codon("AAC"));
        assert_eq!(selection.decision, Decision::TieBreakLex);
    }

    #[test]
    fn test_wobble_and_freq_on_wobble_only_ties() {
        // GAT (D) -> E: GAA and GAG are both wobble-only. Preferred is GAA,
        // which is also the smallest, so both modes land on GAA.
        let wobble = choose('E', "GAT", TieBreakMode::Wobble);
        let freq = choose('E', "GAT", TieBreakMode::Freq);
        assert_eq!(wobble.codon, codon("GAA"));
        assert_eq!(wobble.decision, Decision::TieBreakWobble);
        assert_eq!(freq.codon, codon("GAA"));
        assert_eq!(freq.decision, Decision::TieBreakFreq);

        // CAA (Q) -> H: CAC and CAT tie as wobble-only; wobble takes CAC,
        // freq takes the preferred CAT.
        let wobble = choose('H', "CAA", TieBreakMode::Wobble);
        let freq = choose('H', "CAA", TieBreakMode::Freq);
        assert_eq!(wobble.codon, codon("CAC"));
        assert_eq!(freq.codon, codon("CAT"));
    }

    #[test]
    fn test_stop_is_a_valid_target() {
        // ACG (T) -> stop: TAG(2) TAA(3) TGA(3)
        let selection = choose('_', "ACG", TieBreakMode::Wobble);
        assert_eq!(selection.codon, codon("TAG"));
        assert_eq!(selection.decision, Decision::MinDistance);
        assert_eq!(selection.distance, 2);
    }

    #[test]
    fn test_unknown_amino_acid_is_rejected() {
        let err = choose_codon('Z', codon("ATG"), TieBreakMode::Wobble).unwrap_err();
        assert_eq!(
            err,
            RecodeError::InvalidAminoAcid {
                symbols: vec!['Z']
            }
        );
    }

    #[test]
    fn test_is_wobble_only() {
        assert!(is_wobble_only(codon("AAC"), codon("AAA")));
        assert!(!is_wobble_only(codon("AAA"), codon("AAA")));
        assert!(!is_wobble_only(codon("CAC"), codon("AAA")));
        assert!(!is_wobble_only(codon("ACC"), codon("AAA")));
    }
}
