use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::utils::validation::RecodeError;

/// A single nucleotide triplet over the alphabet {A, C, G, T}
///
/// Ordering is lexicographic on the bases, which is the order the
/// genetic code table enumerates codons in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codon([u8; 3]);

/// Nucleotides in lexicographic order; a codon's table index is its base-4 value
pub const NUCLEOTIDES: [u8; 4] = *b"ACGT";

impl Codon {
    /// Build a codon from raw bases without validation. Callers must pass
    /// uppercase ACGT bytes.
    pub(crate) const fn from_bases_unchecked(bases: [u8; 3]) -> Self {
        Self(bases)
    }

    /// Build a codon from exactly three uppercase ACGT bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match *bytes {
            [a, b, c] if [a, b, c].iter().all(|base| NUCLEOTIDES.contains(base)) => {
                Some(Self([a, b, c]))
            }
            _ => None,
        }
    }

    /// Codon at position `index` (0..64) of the lexicographic enumeration.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 64 {
            return None;
        }
        Some(Self([
            NUCLEOTIDES[index >> 4],
            NUCLEOTIDES[(index >> 2) & 0b11],
            NUCLEOTIDES[index & 0b11],
        ]))
    }

    /// Position of this codon in the lexicographic enumeration (0..64).
    #[must_use]
    pub fn index(&self) -> usize {
        self.0.iter().fold(0, |acc, base| {
            let rank = match base {
                b'A' => 0,
                b'C' => 1,
                b'G' => 2,
                _ => 3,
            };
            (acc << 2) | rank
        })
    }

    #[must_use]
    pub fn bases(&self) -> [u8; 3] {
        self.0
    }

    /// Iterate over all 64 codons in lexicographic order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..64).filter_map(Self::from_index)
    }
}

impl AsRef<[u8]> for Codon {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in self.0 {
            write!(f, "{}", char::from(base))?;
        }
        Ok(())
    }
}

impl FromStr for Codon {
    type Err = RecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.to_ascii_uppercase().as_bytes())
            .ok_or_else(|| RecodeError::InvalidCodon(s.to_string()))
    }
}

impl Serialize for Codon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Strategy for choosing among equally close synonymous codons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakMode {
    /// Prefer a candidate differing only at the third codon position,
    /// then the preferred codon, then the lexicographically smallest
    #[default]
    Wobble,
    /// Prefer the amino acid's preferred codon, then the lexicographically smallest
    Freq,
    /// Always take the lexicographically smallest candidate
    Lex,
}

impl fmt::Display for TieBreakMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wobble => write!(f, "wobble"),
            Self::Freq => write!(f, "freq"),
            Self::Lex => write!(f, "lex"),
        }
    }
}

impl FromStr for TieBreakMode {
    type Err = RecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wobble" => Ok(Self::Wobble),
            "freq" => Ok(Self::Freq),
            "lex" => Ok(Self::Lex),
            _ => Err(RecodeError::InvalidTieBreakMode(s.to_string())),
        }
    }
}

/// How the codon at a position was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Reference codon already encodes the target amino acid
    Same,
    /// A single synonymous codon had the minimal distance
    MinDistance,
    /// Tie resolved by a third-position-only substitution
    TieBreakWobble,
    /// Tie resolved by the preferred codon table
    TieBreakFreq,
    /// Tie resolved lexicographically
    TieBreakLex,
}

impl Decision {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::MinDistance => "min_distance",
            Self::TieBreakWobble => "tie_break_wobble",
            Self::TieBreakFreq => "tie_break_freq",
            Self::TieBreakLex => "tie_break_lex",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of what happened at one codon position during recoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodonChange {
    /// 0-based codon index in the sequence
    pub index: usize,
    pub raw_codon: Codon,
    pub new_codon: Codon,
    pub raw_aa: char,
    pub target_aa: char,
    pub aa_changed: bool,
    /// Number of nucleotides edited (0-3)
    pub distance: usize,
    /// 0-based positions within the codon that were edited
    pub diff_positions: Vec<usize>,
    pub decision: Decision,
}

/// Output of a recode run: the new sequence plus one record per codon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecodeResult {
    pub sequence: String,
    pub changes: Vec<CodonChange>,
}

impl RecodeResult {
    /// Number of codon positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of positions whose amino acid changed
    #[must_use]
    pub fn aa_changed_count(&self) -> usize {
        self.changes.iter().filter(|c| c.aa_changed).count()
    }

    /// Total nucleotide edits across all positions
    #[must_use]
    pub fn total_distance(&self) -> usize {
        self.changes.iter().map(|c| c.distance).sum()
    }
}
