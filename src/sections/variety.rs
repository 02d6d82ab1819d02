//! Character variety section - checks for uppercase, lowercase, digits, special chars.

use super::SectionResult;
use crate::catalog::SequenceCatalog;
use crate::policy::PasswordPolicy;
use crate::violation::{CharClass, Violation};
use secrecy::{ExposeSecret, SecretString};

/// Per-class character counts. Every codepoint lands in exactly one class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClassCounts {
    pub upper: usize,
    pub lower: usize,
    pub digit: usize,
    pub special: usize,
}

impl CharClassCounts {
    pub fn of(password: &str) -> Self {
        let mut counts = Self::default();
        for c in password.chars() {
            match CharClass::of(c) {
                CharClass::Upper => counts.upper += 1,
                CharClass::Lower => counts.lower += 1,
                CharClass::Digit => counts.digit += 1,
                CharClass::Special => counts.special += 1,
            }
        }
        counts
    }

    pub fn get(&self, class: CharClass) -> usize {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digit,
            CharClass::Special => self.special,
        }
    }
}

fn required(policy: &PasswordPolicy, class: CharClass) -> bool {
    match class {
        CharClass::Upper => policy.require_upper,
        CharClass::Lower => policy.require_lower,
        CharClass::Digit => policy.require_digit,
        CharClass::Special => policy.require_special,
    }
}

/// Emits one violation per required class that does not appear in the password.
pub fn character_variety_section(
    password: &SecretString,
    policy: &PasswordPolicy,
    _catalog: &SequenceCatalog,
) -> SectionResult {
    let counts = CharClassCounts::of(password.expose_secret());
    CharClass::ALL
        .into_iter()
        .filter(|&class| required(policy, class) && counts.get(class) == 0)
        .map(Violation::MissingClass)
        .collect()
}
