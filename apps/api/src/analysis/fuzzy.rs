//! Fuzzy skill matching, computed locally without the model.
//!
//! Used by the score audit to check that every skill the model reports as matched
//! actually resembles something on the resume side.

use strsim::normalized_levenshtein;

/// Minimum partial ratio (0 – 100) for two skills to count as the same.
pub const DEFAULT_MATCH_THRESHOLD: u32 = 80;

const BULLET_CHARS: [char; 2] = ['-', '•'];

/// Strips bullet characters, lowercases and trims.
pub fn normalize(skill: &str) -> String {
    skill
        .chars()
        .filter(|c| !BULLET_CHARS.contains(c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Best similarity (0 – 100) of the shorter string against any equal-length
/// window of the longer one.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return if long.is_empty() { 100 } else { 0 };
    }

    let needle: String = short.iter().collect();
    let best = long
        .windows(short.len())
        .map(|window| normalized_levenshtein(&needle, &window.iter().collect::<String>()))
        .fold(0.0_f64, f64::max);

    (best * 100.0).round() as u32
}

/// True if `skill` fuzzy-matches any entry of `skills` at or above `threshold`.
pub fn fuzzy_match<S: AsRef<str>>(skill: &str, skills: &[S], threshold: u32) -> bool {
    let needle = normalize(skill);
    skills
        .iter()
        .any(|s| partial_ratio(&needle, &normalize(s.as_ref())) >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_bullets_and_case() {
        assert_eq!(normalize("  • Python "), "python");
        assert_eq!(normalize("- AWS Lambda"), "aws lambda");
        assert_eq!(normalize("CI-CD"), "cicd");
    }

    #[test]
    fn test_partial_ratio_substring_is_perfect() {
        assert_eq!(partial_ratio("python", "python 3"), 100);
        assert_eq!(partial_ratio("python 3", "python"), 100);
    }

    #[test]
    fn test_partial_ratio_empty_inputs() {
        assert_eq!(partial_ratio("", ""), 100);
        assert_eq!(partial_ratio("", "rust"), 0);
    }

    #[test]
    fn test_partial_ratio_unrelated_is_low() {
        assert!(partial_ratio("docker", "kubernetes") < DEFAULT_MATCH_THRESHOLD);
    }

    #[test]
    fn test_partial_ratio_tolerates_typo() {
        assert!(partial_ratio("kubernetes", "kubernets cluster") >= DEFAULT_MATCH_THRESHOLD);
    }

    #[test]
    fn test_fuzzy_match_against_list() {
        let resume = ["- Python 3", "• Docker", "AWS"];
        assert!(fuzzy_match("Python", &resume, DEFAULT_MATCH_THRESHOLD));
        assert!(fuzzy_match("docker", &resume, DEFAULT_MATCH_THRESHOLD));
        assert!(!fuzzy_match("Kubernetes", &resume, DEFAULT_MATCH_THRESHOLD));
        assert!(!fuzzy_match("Python", &[] as &[&str], DEFAULT_MATCH_THRESHOLD));
    }

    #[test]
    fn test_fuzzy_match_prefix_quirk() {
        // Partial ratio scores a short skill inside a longer one as a full match.
        assert!(fuzzy_match("Java", &["JavaScript"], DEFAULT_MATCH_THRESHOLD));
    }
}
