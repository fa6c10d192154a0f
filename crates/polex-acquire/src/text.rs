//! Text normalization helpers

/// Clean extracted text: collapse intra-line whitespace and drop blank
/// lines
pub fn clean_text(text: &str) -> String {
    let mut cleaned_lines = Vec::new();

    for line in text.lines() {
        let cleaned: Vec<&str> = line.split_whitespace().collect();
        if !cleaned.is_empty() {
            cleaned_lines.push(cleaned.join(" "));
        }
    }

    cleaned_lines.join("\n")
}

/// Stripped character length, the measure used for all fallback decisions
pub(crate) fn stripped_len(text: &str) -> usize {
    text.trim().chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        let input = "Policy   Number:\t POL123\n\n\n  Insurer  Name \n";
        assert_eq!(clean_text(input), "Policy Number: POL123\nInsurer Name");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n \t \n"), "");
    }

    #[test]
    fn test_stripped_len_counts_characters() {
        assert_eq!(stripped_len("  abc  "), 3);
        // Han characters count as one each, not by byte length
        assert_eq!(stripped_len("受保人"), 3);
        assert_eq!(stripped_len(""), 0);
    }
}
