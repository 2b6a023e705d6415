use crate::rack::min_vowels_consonants;
use crate::tiles::RackTile;
use crate::tileset::TileSet;
use multiset::HashMultiSet;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// The bag with the tiles that have not been drawn yet, in shuffled order.
///
/// The order only depends on the seed, so two bags with the same seed give the
/// same draws.
#[derive(Debug, Clone)]
pub struct TileBag {
    tiles: Vec<RackTile>,
    tileset: TileSet,
    rng: StdRng,
    seed: u64,
}

impl TileBag {
    /// A full bag with the french distribution, shuffled with `seed`.
    pub fn new(seed: u64) -> TileBag {
        TileBag::from_tileset(TileSet::french(), seed)
    }

    /// A full bag shuffled with a random seed
    pub fn with_random_seed() -> TileBag {
        TileBag::new(rand::random())
    }

    pub fn from_tileset(tileset: TileSet, seed: u64) -> TileBag {
        let mut bag = TileBag {
            tiles: Vec::new(),
            tileset,
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        bag.reset();
        bag
    }

    /// Put all tiles back, and shuffle them in the initial order for our seed.
    pub fn reset(&mut self) {
        self.tiles.clear();
        for (tile, count) in self.tileset.counts() {
            for _ in 0..count {
                self.tiles.push(tile);
            }
        }
        self.rng = StdRng::seed_from_u64(self.seed);
        self.tiles.shuffle(&mut self.rng);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of tiles left
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw one tile, None if the bag is empty.
    pub fn draw(&mut self) -> Option<RackTile> {
        self.tiles.pop()
    }

    /// Draw `n` tiles, or all remaining tiles if there are less than `n`.
    pub fn draw_tiles(&mut self, n: usize) -> Vec<RackTile> {
        let n = n.min(self.tiles.len());
        let mut drawn = self.tiles.split_off(self.tiles.len() - n);
        drawn.reverse();
        drawn
    }

    /// Put tiles back in the bag, and shuffle.
    pub fn return_tiles<I: IntoIterator<Item = RackTile>>(&mut self, tiles: I) {
        self.tiles.extend(tiles);
        self.tiles.shuffle(&mut self.rng);
    }

    /// Number of copies of `tile` in the bag
    pub fn count(&self, tile: RackTile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Number of vowels, not counting blanks
    pub fn vowel_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| matches!(t, RackTile::Letter(letter) if letter.is_vowel()))
            .count()
    }

    /// Number of consonants, not counting blanks
    pub fn consonant_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| matches!(t, RackTile::Letter(letter) if !letter.is_vowel()))
            .count()
    }

    pub fn has_vowels(&self) -> bool {
        self.vowel_count() > 0
    }

    pub fn has_consonants(&self) -> bool {
        self.consonant_count() > 0
    }

    /// Check if there are enough vowels and consonants left to draw a valid
    /// rack for move number `move_count`. Blanks count as both.
    pub fn can_make_valid_rack(&self, move_count: usize) -> bool {
        let blanks = self.count(RackTile::Blank);
        let min = min_vowels_consonants(move_count);
        self.vowel_count() + blanks >= min && self.consonant_count() + blanks >= min
    }

    /// The remaining tiles as a multiset
    pub fn tally(&self) -> HashMultiSet<RackTile> {
        let mut tally = HashMultiSet::new();
        for &tile in &self.tiles {
            tally.insert(tile);
        }
        tally
    }
}
