use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed identifying a scramble.
///
/// Seeds are written as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use rubik_scrambler::ScrambleSeed;
///
/// let seed = ScrambleSeed::from_phrase("my scramble");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<ScrambleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrambleSeed([u8; 32]);

impl ScrambleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the seed.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from the SHA-256 digest of `phrase`.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }
}

impl Display for ScrambleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors from parsing a [`ScrambleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScrambleSeedParseError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hexadecimal digits, got {len} characters")]
    InvalidLength {
        /// The number of characters found.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hexadecimal digit {found:?} at index {index}")]
    InvalidDigit {
        /// Index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

impl FromStr for ScrambleSeed {
    type Err = ScrambleSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ScrambleSeedParseError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        for (index, found) in s.chars().enumerate() {
            let digit = found
                .to_digit(16)
                .ok_or(ScrambleSeedParseError::InvalidDigit { index, found })?;
            #[expect(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            let byte = &mut bytes[index / 2];
            *byte = (*byte << 4) | digit;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_display_is_lowercase_hex() {
        let mut bytes = [0; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let text = ScrambleSeed::from_bytes(bytes).to_string();
        assert!(text.starts_with("ab00"));
        assert!(text.ends_with("0001"));
        assert_eq!(text.len(), 64);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let lower = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
        let upper = lower.to_ascii_uppercase();
        assert_eq!(
            lower.parse::<ScrambleSeed>(),
            upper.parse::<ScrambleSeed>()
        );
        assert_eq!(lower.parse::<ScrambleSeed>().unwrap().to_string(), lower);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<ScrambleSeed>(),
            Err(ScrambleSeedParseError::InvalidLength { len: 3 })
        );
        let mut text = "0".repeat(64);
        text.replace_range(10..11, "g");
        assert_eq!(
            text.parse::<ScrambleSeed>(),
            Err(ScrambleSeedParseError::InvalidDigit {
                index: 10,
                found: 'g'
            })
        );
    }

    #[test]
    fn test_from_phrase() {
        assert_eq!(
            ScrambleSeed::from_phrase("").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            ScrambleSeed::from_phrase("cube"),
            ScrambleSeed::from_phrase("cube")
        );
        assert_ne!(
            ScrambleSeed::from_phrase("cube"),
            ScrambleSeed::from_phrase("Cube")
        );
    }

    proptest! {
        #[test]
        fn test_display_parse_roundtrip(bytes in any::<[u8; 32]>()) {
            let seed = ScrambleSeed::from_bytes(bytes);
            prop_assert_eq!(seed.to_string().parse::<ScrambleSeed>(), Ok(seed));
        }
    }
}
