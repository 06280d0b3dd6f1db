//! Reproducible generation seeds.

use std::{
    error::Error,
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated puzzle.
///
/// Seeds display as 64 lowercase hex characters and parse back from the same
/// form, so a puzzle can be reproduced from its printed seed. Gameplay uses
/// [`PuzzleSeed::random`]; tests and sharing use fixed seeds or
/// [`PuzzleSeed::from_phrase`].
///
/// # Examples
///
/// ```
/// use kaidoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily #42");
/// let round_trip: PuzzleSeed = seed.to_string().parse().unwrap();
/// assert_eq!(round_trip, seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// The same phrase always yields the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the PRNG that drives one generation run.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSeedError {
    /// The input does not contain exactly 64 characters.
    InvalidLength(usize),
    /// The input contains a non-hex character.
    InvalidCharacter(char),
}

impl Display for ParseSeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected 64 hex characters, found {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "invalid hex character: {ch:?}")
            }
        }
    }
}

impl Error for ParseSeedError {}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != 64 {
            return Err(ParseSeedError::InvalidLength(count));
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks(2)) {
            for &ch in pair {
                let digit = (ch as char)
                    .to_digit(16)
                    .ok_or(ParseSeedError::InvalidCharacter(ch as char))?;
                #[expect(clippy::cast_possible_truncation)]
                {
                    *byte = (*byte << 4) | digit as u8;
                }
            }
        }
        Ok(Self(bytes))
    }
}
