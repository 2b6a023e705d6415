use crate::tiles::{Letter, RackTile};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use tinyvec::ArrayVec;

/// Maximum number of tiles in a rack
pub const MAX_TILES: usize = 7;

/// Up to the 15th move a rack needs 2 vowels and 2 consonants, after that 1 of each.
const EARLY_GAME_MOVES: usize = 15;

/// The tiles in a rack, in alphabetical order with blanks last
pub type RackTiles = ArrayVec<[RackTile; MAX_TILES]>;

/// Minimum number of vowels, and of consonants, a rack must have at `move_count`.
pub(crate) fn min_vowels_consonants(move_count: usize) -> usize {
    if move_count <= EARLY_GAME_MOVES {
        2
    } else {
        1
    }
}

/// A multiset of at most 7 tiles: letters and blanks.
///
/// A `Rack` is `Copy`, so move generation can take a snapshot for every branch
/// it explores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rack {
    counts: [u8; Letter::COUNT + 1],
    len: u8,
}

impl Rack {
    pub fn new() -> Rack {
        Rack::default()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_TILES
    }

    /// Number of copies of `tile` in the rack
    pub fn count(&self, tile: RackTile) -> usize {
        self.counts[tile.index()] as usize
    }

    pub fn has(&self, tile: RackTile) -> bool {
        self.counts[tile.index()] > 0
    }

    /// Remove one copy of `tile`. Return false if it is not in the rack.
    pub fn remove(&mut self, tile: RackTile) -> bool {
        let n = &mut self.counts[tile.index()];
        if *n == 0 {
            return false;
        }
        *n -= 1;
        self.len -= 1;
        true
    }

    /// Add `tile`. Return false if the rack is already full.
    pub fn add(&mut self, tile: RackTile) -> bool {
        if self.is_full() {
            return false;
        }
        self.counts[tile.index()] += 1;
        self.len += 1;
        true
    }

    pub fn clear(&mut self) {
        *self = Rack::new();
    }

    /// The tiles in the rack
    pub fn tiles(&self) -> RackTiles {
        let mut tiles = RackTiles::new();
        for (i, &n) in self.counts.iter().enumerate() {
            for _ in 0..n {
                tiles.push(RackTile::from_index(i));
            }
        }
        tiles
    }

    /// Number of vowels, not counting blanks
    pub fn vowel_count(&self) -> usize {
        self.count_letters(|letter| letter.is_vowel())
    }

    /// Number of consonants, not counting blanks
    pub fn consonant_count(&self) -> usize {
        self.count_letters(|letter| !letter.is_vowel())
    }

    fn count_letters<F: Fn(Letter) -> bool>(&self, f: F) -> usize {
        Letter::all()
            .filter(|&letter| f(letter))
            .map(|letter| self.count(RackTile::Letter(letter)))
            .sum()
    }

    /// Check the vowel/consonant balance of the rack for the move with number
    /// `move_count`. A blank counts both as vowel and as consonant.
    pub fn is_valid(&self, move_count: usize) -> bool {
        let blanks = self.count(RackTile::Blank);
        let min = min_vowels_consonants(move_count);
        self.vowel_count() + blanks >= min && self.consonant_count() + blanks >= min
    }
}

/// Create a rack from a string like `"TEONAE?"`. Letters are case-insensitive,
/// `?` is a blank.
impl TryFrom<&str> for Rack {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let len = s.chars().count();
        if len > MAX_TILES {
            return Err(Error::RackTooLarge(len));
        }
        let mut rack = Rack::new();
        for c in s.chars() {
            rack.add(RackTile::try_from(c)?);
        }
        Ok(rack)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.tiles().iter().map(|t| t.to_char()).collect();
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    fn tile(c: char) -> RackTile {
        RackTile::try_from(c).unwrap()
    }

    #[test]
    fn test_rack() -> Result<()> {
        let mut rack = Rack::try_from("teonae?")?;
        assert_eq!(rack.len(), 7);
        assert!(rack.is_full());
        assert_eq!(rack.count(tile('E')), 2);
        assert_eq!(rack.count(RackTile::Blank), 1);
        assert_eq!(rack.to_string(), "AEENOT?");
        assert!(!rack.add(tile('S')));
        assert!(rack.remove(tile('E')));
        assert!(rack.remove(tile('E')));
        assert!(!rack.remove(tile('E')));
        assert!(!rack.has(tile('E')));
        assert_eq!(rack.len(), 5);
        assert!(rack.add(tile('S')));
        assert_eq!(rack.tiles().len(), 6);
        rack.clear();
        assert!(rack.is_empty());
        Ok(())
    }

    #[test]
    fn test_rack_errors() {
        assert!(matches!(
            Rack::try_from("ABCDEFGH"),
            Err(Error::RackTooLarge(8))
        ));
        assert!(matches!(Rack::try_from("AB*"), Err(Error::InvalidLetter('*'))));
    }

    #[test]
    fn test_snapshot() -> Result<()> {
        let rack = Rack::try_from("CAT")?;
        let mut branch = rack;
        branch.remove(tile('C'));
        assert_eq!(rack.len(), 3);
        assert_eq!(branch.len(), 2);
        Ok(())
    }

    #[test]
    fn test_is_valid() -> Result<()> {
        assert!(Rack::try_from("AEBCD")?.is_valid(1));
        assert!(!Rack::try_from("ABCDF")?.is_valid(1));
        assert!(Rack::try_from("ABCDF")?.is_valid(16));
        assert!(!Rack::try_from("BCDFG")?.is_valid(16));
        // a blank counts as vowel and as consonant
        assert!(Rack::try_from("A?BCD")?.is_valid(1));
        assert!(Rack::try_from("??")?.is_valid(1));
        assert!(Rack::try_from("YB?")?.is_valid(20));
        Ok(())
    }
}
