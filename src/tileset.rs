use crate::tiles::{Letter, RackTile};
use std::convert::TryFrom;

/// label, count, points
type TileInfo = (char, u32, u32);

/// French tile distribution, indexed by letter.
const FRENCH: &[TileInfo] = &[
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 3, 2),
    ('E', 15, 1),
    ('F', 2, 4),
    ('G', 2, 2),
    ('H', 2, 4),
    ('I', 8, 1),
    ('J', 1, 8),
    ('K', 1, 10),
    ('L', 5, 1),
    ('M', 3, 2),
    ('N', 6, 1),
    ('O', 6, 1),
    ('P', 2, 3),
    ('Q', 1, 8),
    ('R', 6, 1),
    ('S', 6, 1),
    ('T', 6, 1),
    ('U', 6, 1),
    ('V', 2, 4),
    ('W', 1, 10),
    ('X', 1, 10),
    ('Y', 1, 10),
    ('Z', 1, 10),
];

const FRENCH_BLANKS: u32 = 2;

/// The tiles of the game: how many of each there are, and what they are worth.
/// Blanks are worth 0 points.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: &'static [TileInfo],
    blanks: u32,
}

impl Default for TileSet {
    fn default() -> Self {
        Self::french()
    }
}

impl TileSet {
    /// The french distribution: 102 tiles including 2 blanks.
    pub fn french() -> TileSet {
        TileSet {
            tiles: FRENCH,
            blanks: FRENCH_BLANKS,
        }
    }

    /// Return the points for letter
    pub fn points(&self, letter: Letter) -> u32 {
        self.tiles.get(letter.index()).map_or(0, |tile| tile.2)
    }

    /// Points for a character, ignoring case. A blank (`?`) or any other
    /// character is worth 0.
    pub fn letter_value(&self, c: char) -> u32 {
        Letter::try_from(c).map_or(0, |letter| self.points(letter))
    }

    /// Return the number of tiles of this kind in the tileset
    pub fn count(&self, tile: RackTile) -> u32 {
        match tile {
            RackTile::Letter(letter) => self.tiles.get(letter.index()).map_or(0, |tile| tile.1),
            RackTile::Blank => self.blanks,
        }
    }

    /// Iterate over all (tile, count) pairs
    pub fn counts(&self) -> impl Iterator<Item = (RackTile, u32)> + '_ {
        Letter::all()
            .map(RackTile::Letter)
            .chain(std::iter::once(RackTile::Blank))
            .map(move |tile| (tile, self.count(tile)))
    }

    /// Total number of tiles
    pub fn total(&self) -> u32 {
        self.counts().map(|(_, n)| n).sum()
    }
}
