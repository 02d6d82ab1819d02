//! Password policy configuration.

use crate::blacklist::{BLACKLIST_PATH_VAR, Blacklist, BlacklistError};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 128;
pub const DEFAULT_RECOMMENDED_LENGTH: usize = 12;
pub const DEFAULT_MAX_REPETITION: usize = 3;
pub const DEFAULT_SEQUENCE_LENGTH: usize = 4;
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 3.5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    #[error("min_length ({min}) is greater than max_length ({max})")]
    LengthBounds { min: usize, max: usize },
    #[error("recommended_length ({recommended}) is greater than max_length ({max})")]
    RecommendedLength { recommended: usize, max: usize },
    #[error("sequence_length must be at least 1")]
    SequenceLength,
    #[error("entropy_threshold must be a finite, non-negative number, got {0}")]
    EntropyThreshold(f64),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error(transparent)]
    Blacklist(#[from] BlacklistError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Thresholds and requirement flags shared by every check.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    /// Advisory only, reported by `evaluate` and never a violation.
    pub recommended_length: usize,
    pub require_upper: bool,
    pub require_lower: bool,
    pub require_digit: bool,
    pub require_special: bool,
    /// Longest allowed run of one character; longer runs fail.
    pub max_repetition: usize,
    /// Window length used for sequence detection.
    pub sequence_length: usize,
    /// Minimum Shannon entropy in bits.
    pub entropy_threshold: f64,
    pub blacklist: Option<Blacklist>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            recommended_length: DEFAULT_RECOMMENDED_LENGTH,
            require_upper: true,
            require_lower: true,
            require_digit: true,
            require_special: true,
            max_repetition: DEFAULT_MAX_REPETITION,
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            entropy_threshold: DEFAULT_ENTROPY_THRESHOLD,
            blacklist: None,
        }
    }
}

impl PasswordPolicy {
    pub fn with_length(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn with_recommended_length(mut self, recommended: usize) -> Self {
        self.recommended_length = recommended;
        self
    }

    /// Sets the upper, lower, digit and special requirements in that order.
    pub fn with_classes(mut self, upper: bool, lower: bool, digit: bool, special: bool) -> Self {
        self.require_upper = upper;
        self.require_lower = lower;
        self.require_digit = digit;
        self.require_special = special;
        self
    }

    pub fn with_max_repetition(mut self, max: usize) -> Self {
        self.max_repetition = max;
        self
    }

    pub fn with_sequence_length(mut self, len: usize) -> Self {
        self.sequence_length = len;
        self
    }

    pub fn with_entropy_threshold(mut self, bits: f64) -> Self {
        self.entropy_threshold = bits;
        self
    }

    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = Some(blacklist);
        self
    }

    /// Checks that the thresholds are consistent with each other.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.min_length > self.max_length {
            return Err(PolicyError::LengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        // A recommended length below the minimum is met by every in-bounds password.
        if self.recommended_length > self.max_length {
            return Err(PolicyError::RecommendedLength {
                recommended: self.recommended_length,
                max: self.max_length,
            });
        }
        if self.sequence_length == 0 {
            return Err(PolicyError::SequenceLength);
        }
        if !self.entropy_threshold.is_finite() || self.entropy_threshold < 0.0 {
            return Err(PolicyError::EntropyThreshold(self.entropy_threshold));
        }
        Ok(())
    }

    /// Builds a policy from the defaults, overridden by environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_MIN_LENGTH`, `PWD_MAX_LENGTH`, `PWD_RECOMMENDED_LENGTH`
    /// - `PWD_REQUIRE_UPPER`, `PWD_REQUIRE_LOWER`, `PWD_REQUIRE_DIGIT`, `PWD_REQUIRE_SPECIAL`
    /// - `PWD_MAX_REPETITION`, `PWD_SEQUENCE_LENGTH`, `PWD_ENTROPY_THRESHOLD`
    /// - `PWD_BLACKLIST_PATH`: blacklist file, loaded only when set
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mut policy = Self {
            min_length: env_parse("PWD_MIN_LENGTH", defaults.min_length)?,
            max_length: env_parse("PWD_MAX_LENGTH", defaults.max_length)?,
            recommended_length: env_parse("PWD_RECOMMENDED_LENGTH", defaults.recommended_length)?,
            require_upper: env_flag("PWD_REQUIRE_UPPER", defaults.require_upper)?,
            require_lower: env_flag("PWD_REQUIRE_LOWER", defaults.require_lower)?,
            require_digit: env_flag("PWD_REQUIRE_DIGIT", defaults.require_digit)?,
            require_special: env_flag("PWD_REQUIRE_SPECIAL", defaults.require_special)?,
            max_repetition: env_parse("PWD_MAX_REPETITION", defaults.max_repetition)?,
            sequence_length: env_parse("PWD_SEQUENCE_LENGTH", defaults.sequence_length)?,
            entropy_threshold: env_parse("PWD_ENTROPY_THRESHOLD", defaults.entropy_threshold)?,
            blacklist: None,
        };

        if std::env::var_os(BLACKLIST_PATH_VAR).is_some() {
            policy.blacklist = Some(Blacklist::from_env()?);
        }

        policy.validate()?;
        Ok(policy)
    }
}

fn env_parse<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(default),
    }
}

fn env_flag(var: &'static str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(var) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue { var, value }),
        },
        Err(_) => Ok(default),
    }
}
