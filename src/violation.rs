//! Violation types produced by the policy checks.

use std::fmt;
use thiserror::Error;

/// Character classes a policy can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    /// Emission order used by the class check.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Classifies a single codepoint. Anything that is not an ASCII letter
    /// or digit is `Special`, including non-ASCII letters.
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            CharClass::Upper
        } else if c.is_ascii_lowercase() {
            CharClass::Lower
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Special
        }
    }

    fn describe(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase letter",
            CharClass::Lower => "lowercase letter",
            CharClass::Digit => "digit",
            CharClass::Special => "special character",
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Length { min: usize, max: usize },
    MissingClass(CharClass),
    Sequence,
    Repetition { max: usize },
    Blacklisted,
    LowEntropy { threshold: f64 },
}

impl Violation {
    /// Stable identifier of the rule that produced this violation.
    pub fn rule(&self) -> &'static str {
        match self {
            Violation::Length { .. } => "length",
            Violation::MissingClass(CharClass::Upper) => "upper",
            Violation::MissingClass(CharClass::Lower) => "lower",
            Violation::MissingClass(CharClass::Digit) => "digit",
            Violation::MissingClass(CharClass::Special) => "special",
            Violation::Sequence => "sequence",
            Violation::Repetition { .. } => "repetition",
            Violation::Blacklisted => "blacklist",
            Violation::LowEntropy { .. } => "entropy",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Length { min, max } => write!(
                f,
                "Password length must be between {} and {} characters",
                min, max
            ),
            Violation::MissingClass(class) => {
                write!(f, "Password must contain at least one {}", class.describe())
            }
            Violation::Sequence => write!(f, "Password contains a sequential pattern"),
            Violation::Repetition { max } => write!(
                f,
                "Password repeats a character more than {} times in a row",
                max
            ),
            Violation::Blacklisted => write!(f, "Password is in the list of common passwords"),
            Violation::LowEntropy { threshold } => {
                write!(f, "Password entropy is below {} bits", threshold)
            }
        }
    }
}

/// Returned by `validate` when at least one rule fails.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", join_messages(.violations))]
pub struct PasswordPolicyViolation {
    pub violations: Vec<Violation>,
}

impl PasswordPolicyViolation {
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
