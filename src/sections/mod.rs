//! Password policy sections
//!
//! Each section checks one rule and never looks at another section's output.

mod blacklist;
mod entropy;
mod length;
mod repetition;
mod sequence;
mod variety;

use crate::catalog::SequenceCatalog;
use crate::policy::PasswordPolicy;
use crate::violation::Violation;
use secrecy::SecretString;

pub use blacklist::blacklist_section;
pub use entropy::{entropy_section, shannon_entropy};
pub use length::length_section;
pub use repetition::{longest_run, repetition_section};
pub use sequence::sequence_section;
pub use variety::{CharClassCounts, character_variety_section};

/// Violations emitted by one section, empty when the section passes.
pub type SectionResult = Vec<Violation>;

/// Signature shared by every section.
pub type Section = fn(&SecretString, &PasswordPolicy, &SequenceCatalog) -> SectionResult;

/// Sections in emission order.
pub const SECTIONS: [(&str, Section); 6] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("sequence", sequence_section),
    ("repetition", repetition_section),
    ("blacklist", blacklist_section),
    ("entropy", entropy_section),
];
