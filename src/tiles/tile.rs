use super::Letter;
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A tile on the board: a regular letter, or a blank played as a letter.
///
/// In text form a blank is written as the lowercase letter it stands for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tile {
    Letter(Letter),
    BlankAs(Letter),
}

impl Tile {
    /// The letter this tile reads as
    pub fn letter(self) -> Letter {
        match self {
            Tile::Letter(letter) | Tile::BlankAs(letter) => letter,
        }
    }

    /// Check if tile is a blank
    pub fn is_blank(self) -> bool {
        matches!(self, Tile::BlankAs(_))
    }

    /// Uppercase for a regular tile, lowercase for a blank
    pub fn to_char(self) -> char {
        match self {
            Tile::Letter(letter) => letter.to_char(),
            Tile::BlankAs(letter) => letter.to_char().to_ascii_lowercase(),
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let letter = Letter::try_from(c)?;
        if c.is_ascii_lowercase() {
            Ok(Tile::BlankAs(letter))
        } else {
            Ok(Tile::Letter(letter))
        }
    }
}

impl From<Letter> for Tile {
    fn from(letter: Letter) -> Self {
        Tile::Letter(letter)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
