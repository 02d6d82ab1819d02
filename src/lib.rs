//! Password policy evaluation library
//!
//! Checks a candidate password against a configurable policy and returns
//! every rule it breaks: length bounds, required character classes,
//! keyboard/alphabet/digit sequences, repeated characters, a blacklist
//! and a Shannon entropy floor.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable report delivery over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! [`PasswordPolicy::from_env`] reads `PWD_MIN_LENGTH`, `PWD_MAX_LENGTH`,
//! `PWD_RECOMMENDED_LENGTH`, `PWD_REQUIRE_{UPPER,LOWER,DIGIT,SPECIAL}`,
//! `PWD_MAX_REPETITION`, `PWD_SEQUENCE_LENGTH`, `PWD_ENTROPY_THRESHOLD`
//! and `PWD_BLACKLIST_PATH`.
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{Blacklist, PasswordPolicy, PasswordPolicyEvaluator};
//! use secrecy::SecretString;
//!
//! let policy = PasswordPolicy::default().with_blacklist(Blacklist::new(["password"]));
//! let evaluator = PasswordPolicyEvaluator::new(policy).expect("valid policy");
//!
//! let password = SecretString::new("Tr0ub4dor&3xK!".to_string().into());
//! assert!(evaluator.check(&password).is_empty());
//!
//! let weak = SecretString::new("aaaa".to_string().into());
//! if let Err(err) = evaluator.validate(&weak) {
//!     for message in err.messages() {
//!         println!("{}", message);
//!     }
//! }
//! ```

mod blacklist;
mod catalog;
mod evaluator;
mod policy;
mod sections;
mod violation;

// Public API
pub use blacklist::{BLACKLIST_PATH_VAR, Blacklist, BlacklistError, get_blacklist_path};
pub use catalog::SequenceCatalog;
pub use evaluator::{PasswordPolicyEvaluator, PasswordReport};
pub use policy::{ConfigError, PasswordPolicy, PolicyError};
pub use sections::{CharClassCounts, longest_run, shannon_entropy};
pub use violation::{CharClass, PasswordPolicyViolation, Violation};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, check_password_tx};
