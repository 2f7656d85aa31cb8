//! Nucleotide distance between equal-length sequences.

use crate::utils::validation::RecodeError;

/// Count positions where `a` and `b` differ.
///
/// # Errors
///
/// Returns `RecodeError::LengthMismatch` if the inputs have different lengths.
pub fn hamming_distance(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Result<usize, RecodeError> {
    let (a, b) = check_lengths(a.as_ref(), b.as_ref())?;
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

/// 0-based positions where `a` and `b` differ, in ascending order.
///
/// # Errors
///
/// Returns `RecodeError::LengthMismatch` if the inputs have different lengths.
pub fn diff_positions(
    a: impl AsRef<[u8]>,
    b: impl AsRef<[u8]>,
) -> Result<Vec<usize>, RecodeError> {
    let (a, b) = check_lengths(a.as_ref(), b.as_ref())?;
    Ok(a.iter()
        .zip(b)
        .enumerate()
        .filter_map(|(i, (x, y))| (x != y).then_some(i))
        .collect())
}

fn check_lengths<'a>(a: &'a [u8], b: &'a [u8]) -> Result<(&'a [u8], &'a [u8]), RecodeError> {
    if a.len() == b.len() {
        Ok((a, b))
    } else {
        Err(RecodeError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Codon;

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance("AAA", "AAA").unwrap(), 0);
        assert_eq!(hamming_distance("AAA", "AAC").unwrap(), 1);
        assert_eq!(hamming_distance("AAA", "CCC").unwrap(), 3);
        assert_eq!(hamming_distance("", "").unwrap(), 0);
        assert_eq!(hamming_distance("ACGTACGT", "ACGAACGA").unwrap(), 2);
    }

    #[test]
    fn test_hamming_distance_length_mismatch() {
        let err = hamming_distance("AAA", "AA").unwrap_err();
        assert_eq!(
            err,
            RecodeError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_diff_positions() {
        assert!(diff_positions("ATG", "ATG").unwrap().is_empty());
        assert_eq!(diff_positions("AAA", "AAC").unwrap(), vec![2]);
        assert_eq!(diff_positions("AAA", "CAT").unwrap(), vec![0, 2]);
        assert!(diff_positions("AAA", "AAAA").is_err());
    }

    #[test]
    fn test_works_on_codons() {
        let a: Codon = "TTA".parse().unwrap();
        let b: Codon = "CTG".parse().unwrap();
        assert_eq!(hamming_distance(a, b).unwrap(), 2);
        assert_eq!(diff_positions(a, b).unwrap(), vec![0, 2]);
    }
}
