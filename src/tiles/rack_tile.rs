use super::{Letter, Tile};
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A tile in the rack or the bag: a letter or an unassigned blank (`?`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RackTile {
    Letter(Letter),
    Blank,
}

impl Default for RackTile {
    fn default() -> Self {
        RackTile::Blank
    }
}

impl RackTile {
    /// Index in a count table: 0..26 for letters, 26 for the blank.
    pub(crate) fn index(self) -> usize {
        match self {
            RackTile::Letter(letter) => letter.index(),
            RackTile::Blank => Letter::COUNT,
        }
    }

    pub(crate) fn from_index(index: usize) -> RackTile {
        if index < Letter::COUNT {
            RackTile::Letter(Letter::from_index(index))
        } else {
            RackTile::Blank
        }
    }

    pub fn is_blank(self) -> bool {
        self == RackTile::Blank
    }

    /// Uppercase letter, or `?` for a blank
    pub fn to_char(self) -> char {
        match self {
            RackTile::Letter(letter) => letter.to_char(),
            RackTile::Blank => '?',
        }
    }
}

impl TryFrom<char> for RackTile {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '?' => Ok(RackTile::Blank),
            _ => Ok(RackTile::Letter(Letter::try_from(c)?)),
        }
    }
}

/// The rack tile that was used to play `tile`.
impl From<Tile> for RackTile {
    fn from(tile: Tile) -> Self {
        match tile {
            Tile::Letter(letter) => RackTile::Letter(letter),
            Tile::BlankAs(_) => RackTile::Blank,
        }
    }
}

impl From<Letter> for RackTile {
    fn from(letter: Letter) -> Self {
        RackTile::Letter(letter)
    }
}

impl fmt::Display for RackTile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rack_tile() -> Result<(), Error> {
        assert_eq!(RackTile::try_from('?')?, RackTile::Blank);
        let tile = RackTile::try_from('e')?;
        assert_eq!(tile.to_char(), 'E');
        assert_eq!(RackTile::from_index(tile.index()), tile);
        assert_eq!(RackTile::from_index(RackTile::Blank.index()), RackTile::Blank);
        assert_eq!(RackTile::from(Tile::try_from('x')?), RackTile::Blank);
        assert!(RackTile::try_from('*').is_err());
        Ok(())
    }
}
