//! Sequence section - detects alphabet, keyboard and digit runs.

use super::SectionResult;
use crate::catalog::SequenceCatalog;
use crate::policy::PasswordPolicy;
use crate::violation::Violation;
use secrecy::{ExposeSecret, SecretString};

/// Flags the password once if any catalog window of `sequence_length`
/// characters appears in it, forward or reversed, ignoring case.
pub fn sequence_section(
    password: &SecretString,
    policy: &PasswordPolicy,
    catalog: &SequenceCatalog,
) -> SectionResult {
    if catalog.contains_sequence(password.expose_secret(), policy.sequence_length) {
        return vec![Violation::Sequence];
    }
    Vec::new()
}
