//! Reference strings for sequence detection.

/// A fixed set of lowercase reference strings. Any window of a reference
/// string, forward or reversed, counts as a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceCatalog {
    patterns: &'static [&'static str],
}

impl SequenceCatalog {
    /// Alphabet, QWERTY rows and digits.
    pub const STANDARD: SequenceCatalog = SequenceCatalog::new(&[
        "abcdefghijklmnopqrstuvwxyz",
        "qwertyuiopasdfghjklzxcvbnm",
        "0123456789",
    ]);

    /// Patterns must already be lowercase.
    pub const fn new(patterns: &'static [&'static str]) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &'static [&'static str] {
        self.patterns
    }

    /// Returns `true` on the first `window`-length slice of any pattern
    /// that occurs in the lowercased password, forward or reversed.
    pub fn contains_sequence(&self, password: &str, window: usize) -> bool {
        if window == 0 || password.chars().count() < window {
            return false;
        }

        let pw: Vec<char> = password.to_lowercase().chars().collect();
        self.patterns.iter().any(|pattern| {
            let chars: Vec<char> = pattern.chars().collect();
            chars.windows(window).any(|w| {
                pw.windows(window).any(|p| p == w || p.iter().eq(w.iter().rev()))
            })
        })
    }
}

impl Default for SequenceCatalog {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_patterns() {
        let patterns = SequenceCatalog::STANDARD.patterns();
        assert_eq!(patterns.len(), 3);
        assert!(patterns.contains(&"0123456789"));
        assert!(patterns.iter().all(|p| *p == p.to_lowercase()));
        assert_eq!(SequenceCatalog::default(), SequenceCatalog::STANDARD);
    }

    #[test]
    fn test_lowercasing_changes_length() {
        // 'İ' lowercases to two codepoints
        assert!(SequenceCatalog::STANDARD.contains_sequence("İabcd", 4));
        assert!(!SequenceCatalog::STANDARD.contains_sequence("ÄÖÜßİıǅ", 4));
    }

    #[test]
    fn test_standard_catalog_alphabet() {
        assert!(SequenceCatalog::STANDARD.contains_sequence("Xa1bcde!", 4));
        assert!(!SequenceCatalog::STANDARD.contains_sequence("Xa1bzde!", 4));
    }

    #[test]
    fn test_standard_catalog_reversed_digits() {
        assert!(SequenceCatalog::STANDARD.contains_sequence("pin4321", 4));
    }

    #[test]
    fn test_standard_catalog_keyboard_case_insensitive() {
        assert!(SequenceCatalog::STANDARD.contains_sequence("xxQWERxx", 4));
        assert!(SequenceCatalog::STANDARD.contains_sequence("xxREWQxx", 4));
    }

    #[test]
    fn test_three_char_run_below_window() {
        assert!(!SequenceCatalog::STANDARD.contains_sequence("abc-123-qwe", 4));
        assert!(SequenceCatalog::STANDARD.contains_sequence("abc-123-qwe", 3));
    }

    #[test]
    fn test_password_shorter_than_window() {
        assert!(!SequenceCatalog::STANDARD.contains_sequence("abc", 4));
        assert!(!SequenceCatalog::STANDARD.contains_sequence("", 4));
    }

    #[test]
    fn test_window_longer_than_patterns() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789";
        assert!(!SequenceCatalog::STANDARD.contains_sequence(long, 27));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = SequenceCatalog::new(&["azerty"]);
        assert!(catalog.contains_sequence("my-AZER-pass", 4));
        assert!(!catalog.contains_sequence("my-abcd-pass", 4));
    }
}
