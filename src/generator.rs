//! Password generation.
//!
//! This module holds the only algorithmic part of pwforge. It performs no
//! I/O: given a length and a random source it returns a `Password` that
//! contains at least one character of every `CharacterClass`.
//!
//! Generation happens in three steps:
//! - one character is drawn from each class
//! - the remainder is drawn from the pool of all classes
//! - the sequence is shuffled (Fisher–Yates) so the guaranteed characters
//!   do not sit at fixed positions

use std::fmt;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use zeroize::Zeroizing;

use crate::charset::{self, CharacterClass};
use crate::error::GenerationError;

/// Shortest length that can hold one character of every class.
pub const MIN_LENGTH: usize = CharacterClass::ALL.len();

/// Longest password pwforge will build.
pub const MAX_LENGTH: usize = 4096;

/// A generated password.
///
/// The backing buffer is wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether at least one character of `class` is present.
    pub fn contains_class(&self, class: CharacterClass) -> bool {
        self.0.chars().any(|c| CharacterClass::of(c) == Some(class))
    }
}

// Never leak the secret through debug output
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a requested length without generating anything.
pub fn validate_length(length: usize) -> Result<(), GenerationError> {
    if length < MIN_LENGTH {
        return Err(GenerationError::InvalidLength {
            length,
            min: MIN_LENGTH,
        });
    }
    if length > MAX_LENGTH {
        return Err(GenerationError::TooLong {
            length,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

/// Generate a password of exactly `length` characters using the OS RNG.
///
/// # Errors
///
/// Returns `GenerationError::InvalidLength` if `length` is below
/// [`MIN_LENGTH`], or `GenerationError::TooLong` above [`MAX_LENGTH`].
pub fn generate(length: usize) -> Result<Password, GenerationError> {
    generate_with(length, &mut OsRng)
}

/// Generate a password drawing randomness from `rng`.
pub fn generate_with<R: Rng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<Password, GenerationError> {
    validate_length(length)?;

    let mut chars = Zeroizing::new(Vec::with_capacity(length));
    for class in CharacterClass::ALL {
        chars.push(class.pick(rng));
    }
    while chars.len() < length {
        chars.push(charset::pick_from(charset::POOL, rng));
    }
    chars.shuffle(rng);

    let mut out = String::with_capacity(length);
    out.extend(chars.iter().map(|&b| b as char));

    tracing::debug!(length, "generated password");
    Ok(Password(Zeroizing::new(out)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn exact_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in MIN_LENGTH..=128 {
            let pwd = generate_with(length, &mut rng).unwrap();
            assert_eq!(pwd.len(), length);
            assert_eq!(pwd.as_str().chars().count(), length);
        }
    }

    #[test]
    fn every_class_present() {
        let mut rng = StdRng::seed_from_u64(11);
        for length in [4, 5, 8, 16, 32, 100] {
            for _ in 0..50 {
                let pwd = generate_with(length, &mut rng).unwrap();
                for class in CharacterClass::ALL {
                    assert!(pwd.contains_class(class), "{class:?} missing at length {length}");
                }
            }
        }
    }

    #[test]
    fn only_pool_characters() {
        let pwd = generate(256).unwrap();
        assert!(pwd.as_str().bytes().all(|b| charset::POOL.contains(&b)));
    }

    #[test]
    fn rejects_short_lengths() {
        for length in 0..MIN_LENGTH {
            assert_eq!(
                generate(length),
                Err(GenerationError::InvalidLength { length, min: 4 })
            );
        }
    }

    #[test]
    fn rejects_oversized_lengths() {
        for length in [MAX_LENGTH + 1, 1 << 40, usize::MAX] {
            assert_eq!(
                generate(length),
                Err(GenerationError::TooLong { length, max: MAX_LENGTH })
            );
        }
        assert_eq!(generate(MAX_LENGTH).unwrap().len(), MAX_LENGTH);
    }

    #[test]
    fn length_four_has_one_of_each() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let pwd = generate_with(4, &mut rng).unwrap();
            let mut classes: Vec<CharacterClass> = pwd
                .as_str()
                .chars()
                .map(|c| CharacterClass::of(c).unwrap())
                .collect();
            classes.sort_by_key(|c| CharacterClass::ALL.iter().position(|a| a == c));
            assert_eq!(classes, CharacterClass::ALL);
        }
    }

    #[test]
    fn guaranteed_characters_are_shuffled() {
        // Without the shuffle the first character would always be lowercase
        let mut rng = StdRng::seed_from_u64(42);
        let mut first = std::collections::HashSet::new();
        for _ in 0..500 {
            let pwd = generate_with(4, &mut rng).unwrap();
            first.insert(CharacterClass::of(pwd.as_str().chars().next().unwrap()));
        }
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn debug_is_redacted() {
        let pwd = generate(12).unwrap();
        let shown = format!("{pwd:?}");
        assert!(!shown.contains(pwd.as_str()));
        assert!(shown.contains("REDACTED"));
        assert_eq!(pwd.to_string(), pwd.as_str());
    }
}
