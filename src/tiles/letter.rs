use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// One of the 26 letters `A..Z`.
///
/// Letters are stored as an index `0..26`, so they can be used directly
/// as position in a [`LetterSet`](crate::LetterSet) or a count table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    pub(crate) fn from_index(index: usize) -> Letter {
        debug_assert!(index < Self::COUNT);
        Letter(index as u8)
    }

    /// Position of the letter in the alphabet, `A` is 0.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The uppercase character for this letter
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Vowels are A, E, I, O, U and Y.
    pub fn is_vowel(self) -> bool {
        matches!(self.to_char(), 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
    }

    /// Iterate over all letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT as u8).map(Letter)
    }

    /// Convert `word` to letters, ignoring case.
    /// ## Errors
    /// If `word` contains a character that is not a letter.
    pub fn parse_word(word: &str) -> Result<Vec<Letter>, Error> {
        word.chars().map(Letter::try_from).collect()
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Letter(upper as u8 - b'A'))
        } else {
            Err(Error::InvalidLetter(c))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
