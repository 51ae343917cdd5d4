//! Answer matching for typed responses.

use serde::{Deserialize, Serialize};

/// Result of comparing a typed answer to the expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized expected answer (for display).
    pub expected_normalized: String,
}

/// Compare a typed answer to the expected answer.
///
/// Both sides are trimmed and case-folded, then compared for exact equality.
pub fn compare_answers(typed: &str, expected: &str) -> MatchResult {
    let typed_normalized = normalize_answer(typed);
    let expected_normalized = normalize_answer(expected);

    MatchResult {
        is_correct: typed_normalized == expected_normalized,
        typed_normalized,
        expected_normalized,
    }
}

/// Trim and case-fold an answer.
pub fn normalize_answer(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Case-insensitive text equality, ignoring surrounding whitespace.
pub fn same_text(a: &str, b: &str) -> bool {
    normalize_answer(a) == normalize_answer(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let result = compare_answers("hello", "hello");
        assert!(result.is_correct);
    }

    #[test]
    fn test_case_folding() {
        assert!(compare_answers("Hello", "hello").is_correct);
        assert!(compare_answers("THANK YOU", "thank you").is_correct);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let result = compare_answers("  good night \n", "good night");
        assert!(result.is_correct);
        assert_eq!(result.typed_normalized, "good night");
    }

    #[test]
    fn test_no_partial_credit() {
        assert!(!compare_answers("helo", "hello").is_correct);
        assert!(!compare_answers("good  night", "good night").is_correct);
        assert!(!compare_answers("", "hello").is_correct);
    }

    #[test]
    fn test_non_latin_answers() {
        assert!(compare_answers(" ありがとう ", "ありがとう").is_correct);
        assert!(!compare_answers("ありがと", "ありがとう").is_correct);
    }

    #[test]
    fn test_same_text() {
        assert!(same_text("Yes", "yes "));
        assert!(!same_text("yes", "no"));
    }
}
