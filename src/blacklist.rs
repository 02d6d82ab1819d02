//! Blacklist of disallowed passwords.
//!
//! Entries are stored lowercased and matched case-insensitively.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BLACKLIST_PATH_VAR: &str = "PWD_BLACKLIST_PATH";
const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// An immutable set of disallowed passwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

impl Blacklist {
    /// Builds a blacklist from the given entries. Blank entries are skipped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads the blacklist from the path returned by [`get_blacklist_path`].
    pub fn from_env() -> Result<Self, BlacklistError> {
        Self::from_path(get_blacklist_path())
    }

    /// Loads a blacklist file with one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: {} {:?}", e, path);
            BlacklistError::ReadError(e)
        })?;
        let blacklist = Self::new(content.lines());

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Returns `true` if the password matches an entry, ignoring case.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
