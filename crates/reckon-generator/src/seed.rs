use std::{
    fmt::{self, Display},
    str::FromStr,
};

use hex::{FromHex as _, FromHexError};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal characters.
///
/// # Examples
///
/// ```
/// use reckon_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily-2026-10-19");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>()?, seed);
/// # Ok::<(), reckon_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from a phrase with SHA-256.
    ///
    /// Anyone with the same phrase gets the same puzzle, which makes short
    /// phrases usable as share codes.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Error returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bytes = <[u8; 32]>::from_hex(s).map_err(|e| match e {
            FromHexError::InvalidHexCharacter { c, .. } => ParseSeedError::InvalidDigit { ch: c },
            FromHexError::OddLength | FromHexError::InvalidStringLength => {
                ParseSeedError::InvalidLength { len: s.len() }
            }
        })?;
        Ok(Self(bytes))
    }
}
