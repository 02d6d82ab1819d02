//! Length section - checks password length bounds.

use super::SectionResult;
use crate::catalog::SequenceCatalog;
use crate::policy::PasswordPolicy;
use crate::violation::Violation;
use secrecy::{ExposeSecret, SecretString};

/// Checks that the password length, in codepoints, is within the policy bounds.
pub fn length_section(
    password: &SecretString,
    policy: &PasswordPolicy,
    _catalog: &SequenceCatalog,
) -> SectionResult {
    let len = password.expose_secret().chars().count();
    if len < policy.min_length || len > policy.max_length {
        return vec![Violation::Length {
            min: policy.min_length,
            max: policy.max_length,
        }];
    }
    Vec::new()
}
