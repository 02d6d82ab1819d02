//! Blacklist section - checks if password is in the configured blacklist.

use super::SectionResult;
use crate::catalog::SequenceCatalog;
use crate::policy::PasswordPolicy;
use crate::violation::Violation;
use secrecy::{ExposeSecret, SecretString};

/// Flags a case-insensitive exact match against the policy blacklist.
/// Passes when no blacklist is configured.
pub fn blacklist_section(
    password: &SecretString,
    policy: &PasswordPolicy,
    _catalog: &SequenceCatalog,
) -> SectionResult {
    match &policy.blacklist {
        Some(blacklist) if blacklist.contains(password.expose_secret()) => {
            vec![Violation::Blacklisted]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blacklist::Blacklist;

    fn policy_with(entries: &[&str]) -> PasswordPolicy {
        PasswordPolicy::default().with_blacklist(Blacklist::new(entries))
    }

    fn check(pwd: &str, policy: &PasswordPolicy) -> SectionResult {
        let pwd = SecretString::new(pwd.to_string().into());
        blacklist_section(&pwd, policy, &SequenceCatalog::STANDARD)
    }

    #[test]
    fn test_blacklist_section_common_password() {
        let policy = policy_with(&["password", "123456", "qwerty"]);
        assert_eq!(check("password", &policy), vec![Violation::Blacklisted]);
    }

    #[test]
    fn test_blacklist_section_ignores_case() {
        let policy = policy_with(&["Summer2024!"]);
        assert_eq!(check("SUMMER2024!", &policy), vec![Violation::Blacklisted]);
    }

    #[test]
    fn test_blacklist_section_substring_is_not_a_match() {
        let policy = policy_with(&["password"]);
        assert!(check("password1", &policy).is_empty());
    }

    #[test]
    fn test_blacklist_section_strong_password() {
        let policy = policy_with(&["password", "123456", "qwerty"]);
        assert!(check("CorrectHorseBatteryStaple!123", &policy).is_empty());
    }

    #[test]
    fn test_blacklist_section_without_blacklist() {
        assert!(check("password", &PasswordPolicy::default()).is_empty());
    }
}
