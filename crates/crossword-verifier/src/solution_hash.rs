use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::SeedPhrase;

const HASH_HEX_LEN: usize = 64;

/// A SHA-256 digest encoded as 64 lowercase hex digits.
///
/// Comparison is plain string equality; the encoding is validated on
/// construction so a hash written in upper case is rejected instead of
/// silently never matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct SolutionHash(String);

impl SolutionHash {
    /// Hashes a seed phrase.
    #[must_use]
    pub fn of(phrase: &SeedPhrase) -> Self {
        let digest = Sha256::digest(phrase.as_str().as_bytes());
        Self(format!("{digest:x}"))
    }

    /// Returns the hex encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SolutionHash {
    type Err = SolutionHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HASH_HEX_LEN {
            return Err(SolutionHashError::InvalidLength { len: s.len() });
        }
        if let Some(ch) = s
            .chars()
            .find(|ch| !matches!(ch, '0'..='9' | 'a'..='f'))
        {
            return Err(SolutionHashError::InvalidDigit { ch });
        }
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<String> for SolutionHash {
    type Error = SolutionHashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SolutionHash> for String {
    fn from(hash: SolutionHash) -> Self {
        hash.0
    }
}

/// Errors for a malformed solution hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolutionHashError {
    /// The hash is not 64 characters long.
    #[display("solution hash must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// The length of the rejected string.
        len: usize,
    },
    /// The hash contains something other than lowercase hex digits.
    #[display("solution hash must be lowercase hex, found {ch:?}")]
    InvalidDigit {
        /// The first offending character.
        ch: char,
    },
}
