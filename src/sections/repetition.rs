//! Repetition section - detects runs of one repeated character.

use super::SectionResult;
use crate::catalog::SequenceCatalog;
use crate::policy::PasswordPolicy;
use crate::violation::Violation;
use secrecy::{ExposeSecret, SecretString};

/// Length of the longest run of identical adjacent characters.
///
/// Empty and single-character inputs report 1.
pub fn longest_run(password: &str) -> usize {
    let mut max_run = 1;
    let mut run = 1;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            max_run = max_run.max(run);
        } else {
            run = 1;
        }
        prev = Some(c);
    }
    max_run
}

/// Flags runs strictly longer than `max_repetition`.
pub fn repetition_section(
    password: &SecretString,
    policy: &PasswordPolicy,
    _catalog: &SequenceCatalog,
) -> SectionResult {
    if longest_run(password.expose_secret()) > policy.max_repetition {
        return vec![Violation::Repetition {
            max: policy.max_repetition,
        }];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str, policy: &PasswordPolicy) -> SectionResult {
        let pwd = SecretString::new(pwd.to_string().into());
        repetition_section(&pwd, policy, &SequenceCatalog::STANDARD)
    }

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_run(""), 1);
        assert_eq!(longest_run("a"), 1);
        assert_eq!(longest_run("abab"), 1);
        assert_eq!(longest_run("aabbbba"), 4);
        assert_eq!(longest_run("xyzzz"), 3);
        assert_eq!(longest_run("ééé!"), 3);
    }

    #[test]
    fn test_repetition_section_run_of_four() {
        assert_eq!(
            check("Aa1!aaaa", &PasswordPolicy::default()),
            vec![Violation::Repetition { max: 3 }]
        );
    }

    #[test]
    fn test_repetition_section_run_of_three() {
        assert!(check("Aa1!aaa", &PasswordPolicy::default()).is_empty());
    }

    #[test]
    fn test_repetition_section_is_case_sensitive() {
        assert!(check("aAaA", &PasswordPolicy::default()).is_empty());
    }

    #[test]
    fn test_repetition_section_zero_limit_flags_everything() {
        let policy = PasswordPolicy::default().with_max_repetition(0);
        assert_eq!(check("", &policy).len(), 1);
        assert_eq!(check("x", &policy).len(), 1);
    }
}
