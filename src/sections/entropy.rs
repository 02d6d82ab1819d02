//! Entropy section - Shannon entropy over the character distribution.

use super::SectionResult;
use crate::catalog::SequenceCatalog;
use crate::policy::PasswordPolicy;
use crate::violation::Violation;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

/// Shannon entropy in bits of the per-codepoint frequency distribution.
///
/// Returns 0.0 for the empty string.
pub fn shannon_entropy(password: &str) -> f64 {
    let mut freq: HashMap<char, usize> = HashMap::new();
    let mut len = 0usize;
    for c in password.chars() {
        *freq.entry(c).or_insert(0) += 1;
        len += 1;
    }
    if len == 0 {
        return 0.0;
    }

    let len = len as f64;
    freq.values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Flags passwords whose entropy is below `entropy_threshold`.
pub fn entropy_section(
    password: &SecretString,
    policy: &PasswordPolicy,
    _catalog: &SequenceCatalog,
) -> SectionResult {
    if shannon_entropy(password.expose_secret()) < policy.entropy_threshold {
        return vec![Violation::LowEntropy {
            threshold: policy.entropy_threshold,
        }];
    }
    Vec::new()
}
