use crate::board::Board;
use crate::moves::{Move, TilePlacement, BINGO_TILES};
use crate::tiles::Tile;
use crate::tileset::TileSet;

/// Bonus for playing all 7 tiles of the rack
pub const BINGO_BONUS: u32 = 50;

/// Scores moves with the letter values of a [`TileSet`](crate::TileSet).
///
/// Letter and word premiums only count for tiles placed in the move being
/// scored. Blanks are worth 0 points, also when they are already on the board.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    tileset: TileSet,
}

impl Scorer {
    pub fn new() -> Scorer {
        Scorer::default()
    }

    pub fn with_tileset(tileset: TileSet) -> Scorer {
        Scorer { tileset }
    }

    /// Value of a letter, ignoring case. `?` is worth 0.
    pub fn letter_value(&self, c: char) -> u32 {
        self.tileset.letter_value(c)
    }

    pub fn tile_value(&self, tile: Tile) -> u32 {
        match tile {
            Tile::Letter(letter) => self.tileset.points(letter),
            Tile::BlankAs(_) => 0,
        }
    }

    /// Points for `mv` played on `board`, where `board` does not yet hold the
    /// new tiles: main word, plus every cross-word, plus the bingo bonus.
    ///
    /// ## Examples
    /// ```
    /// # use scradle::{Board, Direction, Move, Scorer, Tile, TilePlacement, Error};
    /// # use std::convert::TryFrom;
    /// let placements = "CAT"
    ///     .chars()
    ///     .enumerate()
    ///     .map(|(i, c)| Ok(TilePlacement::new(7, 7 + i, Tile::try_from(c)?)))
    ///     .collect::<Result<Vec<_>, Error>>()?;
    /// let mv = Move::new(Direction::Horizontal, placements);
    /// // C=3, A=1, T=1 on the 2x word center square
    /// assert_eq!(Scorer::new().score_move(&Board::new(), &mv), 10);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn score_move(&self, board: &Board, mv: &Move) -> u32 {
        let mut score = self.score_main_word(board, mv) + self.score_cross_words(board, mv);
        if mv.tiles_used() == BINGO_TILES {
            score += BINGO_BONUS;
        }
        score
    }

    fn score_main_word(&self, board: &Board, mv: &Move) -> u32 {
        let (line, start) = mv.direction.line_index(mv.row, mv.col);
        let mut word_points = 0;
        let mut word_multiplier = 1;
        for (i, c) in mv.word.chars().enumerate() {
            let (row, col) = mv.direction.square(line, start + i);
            let placement = mv
                .placements
                .iter()
                .find(|p| p.row == row && p.col == col);
            match placement {
                Some(p) if p.from_rack => {
                    let premium = board.premium_at(row, col);
                    word_points += self.tile_value(p.tile) * premium.letter_multiplier();
                    word_multiplier *= premium.word_multiplier();
                }
                _ => {
                    word_points += match (board.tile_at(row, col), placement) {
                        (Some(tile), _) => self.tile_value(tile),
                        (None, Some(p)) => self.tile_value(p.tile),
                        (None, None) => self.letter_value(c),
                    };
                }
            }
        }
        word_points * word_multiplier
    }

    fn score_cross_words(&self, board: &Board, mv: &Move) -> u32 {
        mv.tiles_from_rack()
            .map(|p| self.score_cross_word(board, mv, p))
            .sum()
    }

    /// Score of the perpendicular word through new tile `p`, 0 if there is none.
    fn score_cross_word(&self, board: &Board, mv: &Move, p: &TilePlacement) -> u32 {
        let perpendicular = mv.direction.perpendicular();
        let (start, end) = board.run_through(p.row, p.col, perpendicular);
        if start == end {
            return 0;
        }
        let (line, index) = perpendicular.line_index(p.row, p.col);
        let premium = board.premium_at(p.row, p.col);
        let mut word_points = self.tile_value(p.tile) * premium.letter_multiplier();
        for i in (start..=end).filter(|&i| i != index) {
            let (row, col) = perpendicular.square(line, i);
            word_points += board.tile_at(row, col).map_or(0, |tile| self.tile_value(tile));
        }
        word_points * premium.word_multiplier()
    }
}

/// Score `mv` on `board` with the french letter values.
pub fn score_move(board: &Board, mv: &Move) -> u32 {
    Scorer::new().score_move(board, mv)
}
