//! Reproducible shuffle seeding.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`ShuffleSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// Seeds are exactly 64 hex characters (32 bytes).
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// A character outside `[0-9a-fA-F]` was found.
    #[display("seed contains a non-hex character")]
    InvalidHexDigit,
}

/// A 32-byte seed for the shuffle RNG.
///
/// Seeds round-trip through a 64-character lowercase hex string, so a
/// shuffle can be reproduced from a logged or user-supplied seed. A seed can
/// also be derived from an arbitrary phrase by hashing it.
///
/// # Examples
///
/// ```
/// use tessella_engine::ShuffleSeed;
///
/// let seed: ShuffleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
///
/// // Same seed, same shuffle order.
/// let mut a = seed.rng();
/// let mut b = seed.rng();
/// assert_eq!(rand::RngExt::random::<u64>(&mut a), rand::RngExt::random::<u64>(&mut b));
/// # Ok::<(), tessella_engine::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed([u8; 32]);

impl ShuffleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh random seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic shuffle RNG for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ShuffleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0_u8; 32];
        for (byte, chunk) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let chunk = std::str::from_utf8(chunk).map_err(|_| SeedParseError::InvalidHexDigit)?;
            *byte = u8::from_str_radix(chunk, 16).map_err(|_| SeedParseError::InvalidHexDigit)?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_hex_round_trip() {
        let seed: ShuffleSeed = HEX.parse().unwrap();
        assert_eq!(seed.to_string(), HEX);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<ShuffleSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("g{}", &HEX[1..]);
        assert_eq!(
            bad.parse::<ShuffleSeed>(),
            Err(SeedParseError::InvalidHexDigit)
        );
    }

    #[test]
    fn test_phrase_is_deterministic() {
        let a = ShuffleSeed::from_phrase("ahri classic");
        let b = ShuffleSeed::from_phrase("ahri classic");
        assert_eq!(a, b);
        assert_ne!(a, ShuffleSeed::from_phrase("ahri foxfire"));
    }
}
