//! Line-oriented normalization for raw or FASTA-like sequence text.

/// Strip `>` header lines, join the remaining lines and drop whitespace.
///
/// The result is uppercase. Header lines are recognized after trimming, so
/// indented headers are dropped too.
#[must_use]
pub fn normalize_sequence_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('>'))
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_sequence() {
        assert_eq!(normalize_sequence_text("ATGAAAACG"), "ATGAAAACG");
        assert_eq!(normalize_sequence_text("  atg aaa\tacg \n"), "ATGAAAACG");
    }

    #[test]
    fn test_fasta_headers_are_dropped() {
        let text = ">seq1 description\nATGAAA\n\nACG\n>seq2\nTGG\n";
        assert_eq!(normalize_sequence_text(text), "ATGAAAACGTGG");
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(normalize_sequence_text(">h\r\nMK\r\nT*\r\n"), "MKT*");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_sequence_text(""), "");
        assert_eq!(normalize_sequence_text(">only a header\n"), "");
    }
}
