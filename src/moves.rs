//! Moves: where tiles go, and what word they make.
use crate::board::Board;
use crate::dawg::Dawg;
use crate::grid::N;
use crate::tiles::{Letter, Tile};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tiles in a full rack. Playing them all is a bingo.
pub const BINGO_TILES: usize = 7;

/// The direction in which a word is read.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Both directions, horizontal first
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Square at `index` on `line`: for horizontal words the line is a row.
    pub(crate) fn square(self, line: usize, index: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (line, index),
            Direction::Vertical => (index, line),
        }
    }

    /// Inverse of [`square`](Self::square): (line, index) of a square.
    pub(crate) fn line_index(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, col),
            Direction::Vertical => (col, row),
        }
    }

    /// The next square in this direction, or None past the board edge.
    pub fn next(self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (line, index) = self.line_index(row, col);
        if index + 1 < N {
            Some(self.square(line, index + 1))
        } else {
            None
        }
    }

    /// The previous square in this direction, or None before the board edge.
    pub fn prev(self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (line, index) = self.line_index(row, col);
        if index > 0 {
            Some(self.square(line, index - 1))
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "H"),
            Direction::Vertical => write!(f, "V"),
        }
    }
}

/// One square of a move: a tile already on the board, or a new tile from the rack.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TilePlacement {
    pub row: usize,
    pub col: usize,
    pub tile: Tile,
    pub from_rack: bool,
}

impl TilePlacement {
    /// A new tile from the rack
    pub fn new(row: usize, col: usize, tile: Tile) -> TilePlacement {
        TilePlacement {
            row,
            col,
            tile,
            from_rack: true,
        }
    }

    /// A tile that is already on the board
    pub fn existing(row: usize, col: usize, tile: Tile) -> TilePlacement {
        TilePlacement {
            row,
            col,
            tile,
            from_rack: false,
        }
    }

    pub fn letter(&self) -> Letter {
        self.tile.letter()
    }

    pub fn is_blank(&self) -> bool {
        self.tile.is_blank()
    }
}

/// A word on the board: start square, direction, the complete word
/// (including letters already on the board), all its squares, and the score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub word: String,
    pub placements: Vec<TilePlacement>,
    /// 0 until scored
    pub score: u32,
}

impl Move {
    /// Create an unscored move from the placements of every square of the word, in order.
    pub fn new(direction: Direction, placements: Vec<TilePlacement>) -> Move {
        let (row, col) = placements.first().map_or((0, 0), |p| (p.row, p.col));
        let word = placements.iter().map(|p| p.letter().to_char()).collect();
        Move {
            row,
            col,
            direction,
            word,
            placements,
            score: 0,
        }
    }

    /// Return the move with `score` assigned
    #[must_use]
    pub fn with_score(mut self, score: u32) -> Move {
        self.score = score;
        self
    }

    /// The new tiles of this move
    pub fn tiles_from_rack(&self) -> impl Iterator<Item = &TilePlacement> {
        self.placements.iter().filter(|p| p.from_rack)
    }

    /// Number of tiles played from the rack
    pub fn tiles_used(&self) -> usize {
        self.tiles_from_rack().count()
    }

    pub fn is_bingo(&self) -> bool {
        self.tiles_used() == BINGO_TILES
    }

    /// Position in board notation: row letter and column number for a
    /// horizontal word (`H4`), column number and row letter for a vertical word (`4H`).
    pub fn position(&self) -> String {
        let row = (b'A' + self.row as u8) as char;
        let col = self.col + 1;
        match self.direction {
            Direction::Horizontal => format!("{}{}", row, col),
            Direction::Vertical => format!("{}{}", col, row),
        }
    }
}

/// `QUARRE at 15H [42 pts]`, with ` [BINGO]` appended for a bingo.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {} [{} pts]", self.word, self.position(), self.score)?;
        if self.is_bingo() {
            write!(f, " [BINGO]")?;
        }
        Ok(())
    }
}

/// An unvalidated candidate move: new tiles in one direction, possibly
/// with gaps where the board already holds a tile.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMove {
    pub direction: Direction,
    pub placements: Vec<TilePlacement>,
}

impl RawMove {
    pub fn new(direction: Direction, placements: Vec<TilePlacement>) -> RawMove {
        RawMove {
            direction,
            placements,
        }
    }

    fn new_tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        self.placements
            .iter()
            .find(|p| p.from_rack && p.row == row && p.col == col)
            .map(|p| p.tile)
    }

    /// Tile at square with this move applied
    fn tile_at(&self, board: &Board, row: usize, col: usize) -> Option<Tile> {
        board.tile_at(row, col).or_else(|| self.new_tile_at(row, col))
    }

    /// All squares of the contiguous word through (row, col) in `direction`,
    /// with this move applied.
    fn word_through(
        &self,
        board: &Board,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Vec<TilePlacement> {
        let (line, index) = direction.line_index(row, col);
        let occupied = |i: usize| {
            let (r, c) = direction.square(line, i);
            self.tile_at(board, r, c).is_some()
        };
        let mut start = index;
        while start > 0 && occupied(start - 1) {
            start -= 1;
        }
        let mut word = Vec::new();
        for i in start..N {
            let (r, c) = direction.square(line, i);
            match (board.tile_at(r, c), self.new_tile_at(r, c)) {
                (Some(tile), _) => word.push(TilePlacement::existing(r, c, tile)),
                (None, Some(tile)) => word.push(TilePlacement::new(r, c, tile)),
                (None, None) => break,
            }
        }
        word
    }

    /// Check that the new tiles are on empty squares of the board, all on one
    /// line in our direction, without duplicates.
    fn is_well_formed(&self, board: &Board) -> bool {
        let new_tiles: Vec<&TilePlacement> =
            self.placements.iter().filter(|p| p.from_rack).collect();
        let first = match new_tiles.first() {
            Some(p) => p,
            None => return false,
        };
        let (line, _) = self.direction.line_index(first.row, first.col);
        new_tiles.iter().enumerate().all(|(i, p)| {
            board.in_bounds(p.row, p.col)
                && board.tile_at(p.row, p.col).is_none()
                && self.direction.line_index(p.row, p.col).0 == line
                && new_tiles[..i].iter().all(|q| (q.row, q.col) != (p.row, p.col))
        })
    }

    /// The main word formed by this move, or None if the new tiles are not
    /// in one contiguous run.
    pub fn main_word(&self, board: &Board) -> Option<Vec<TilePlacement>> {
        if !self.is_well_formed(board) {
            return None;
        }
        let first = self.placements.iter().find(|p| p.from_rack)?;
        let word = self.word_through(board, first.row, first.col, self.direction);
        let placed = word.iter().filter(|p| p.from_rack).count();
        let total = self.placements.iter().filter(|p| p.from_rack).count();
        if placed == total {
            Some(word)
        } else {
            None
        }
    }

    /// The perpendicular words formed by the new tiles.
    pub fn cross_words(&self, board: &Board) -> Vec<Vec<TilePlacement>> {
        let perpendicular = self.direction.perpendicular();
        self.placements
            .iter()
            .filter(|p| p.from_rack)
            .map(|p| self.word_through(board, p.row, p.col, perpendicular))
            .filter(|word| word.len() > 1)
            .collect()
    }

    /// Validate the candidate against `board` and `dawg`: the new tiles must form a
    /// contiguous word of at least 2 letters that connects to the tiles on the board
    /// (or covers the center square on an empty board), and the main word and
    /// every cross-word must be in the dictionary.
    pub fn validate(&self, board: &Board, dawg: &Dawg) -> Option<Move> {
        let word = self.main_word(board)?;
        if word.len() < 2 {
            return None;
        }
        let cross_words = self.cross_words(board);
        let connected = if board.is_board_empty() {
            word.iter()
                .any(|p| board.is_center(p.row, p.col))
        } else {
            word.iter().any(|p| !p.from_rack) || !cross_words.is_empty()
        };
        if !connected {
            return None;
        }
        let spell = |w: &[TilePlacement]| -> String { w.iter().map(|p| p.letter().to_char()).collect() };
        if !dawg.contains(&spell(&word)) {
            return None;
        }
        if cross_words.iter().any(|w| !dawg.contains(&spell(w))) {
            return None;
        }
        Some(Move::new(self.direction, word))
    }
}
