//! Character classes used to build passwords.
//!
//! A password is composed from four fixed classes. Each class is an
//! immutable ASCII byte set; the pool is their union in class order.

use rand::Rng;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Union of every class, in `CharacterClass::ALL` order.
pub const POOL: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
                          ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                          0123456789\
                          !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// The characters belonging to this class.
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Classify a character, or `None` if it is outside every class.
    pub fn of(c: char) -> Option<CharacterClass> {
        if !c.is_ascii() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|class| class.chars().contains(&(c as u8)))
    }

    /// Pick one character of this class uniformly at random.
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> u8 {
        pick_from(self.chars(), rng)
    }
}

/// Uniform choice from a non-empty byte set.
pub(crate) fn pick_from<R: Rng + ?Sized>(set: &[u8], rng: &mut R) -> u8 {
    set[rng.gen_range(0..set.len())]
}
