use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

pub(crate) const N: usize = 15;
const Q: usize = 1 + N / 2;

/// A premium square: letter or word multiplier, applied only to a tile
/// placed on it in the current turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Premium {
    NoPremium,
    LetterPremium(u32),
    WordPremium(u32),
}

use Premium::{LetterPremium, NoPremium, WordPremium};

const TW: Premium = WordPremium(3);
const DW: Premium = WordPremium(2);
const TL: Premium = LetterPremium(3);
const DL: Premium = LetterPremium(2);
const NP: Premium = NoPremium;

const DEFAULT_QUARTER_BOARD: [[Premium; Q]; Q] = [
    [TW, NP, NP, DL, NP, NP, NP, TW],
    [NP, DW, NP, NP, NP, TL, NP, NP],
    [NP, NP, DW, NP, NP, NP, DL, NP],
    [DL, NP, NP, DW, NP, NP, NP, DL],
    [NP, NP, NP, NP, DW, NP, NP, NP],
    [NP, TL, NP, NP, NP, TL, NP, NP],
    [NP, NP, DL, NP, NP, NP, DL, NP],
    [TW, NP, NP, DL, NP, NP, NP, DW],
];

impl Premium {
    /// Factor for the letter placed on this square
    pub fn letter_multiplier(self) -> u32 {
        match self {
            LetterPremium(n) => n,
            _ => 1,
        }
    }

    /// Factor for the whole word when a tile is placed on this square
    pub fn word_multiplier(self) -> u32 {
        match self {
            WordPremium(n) => n,
            _ => 1,
        }
    }
}

impl Default for Premium {
    fn default() -> Self {
        NoPremium
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoPremium => write!(f, "--"),
            LetterPremium(n) => write!(f, "{}l", n),
            WordPremium(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Premium {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoPremium),
            "2l" => Ok(LetterPremium(2)),
            "3l" => Ok(LetterPremium(3)),
            "2w" => Ok(WordPremium(2)),
            "3w" => Ok(WordPremium(3)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = [[Premium; N]; N];

/// Board grid, consisting of 15x15 (normal or premium) squares.
///
/// A premium square has a 2x or 3x letter premium, or a 2x or 3x word premium.
/// The center square at (7,7) is a 2x word square and must be covered in the first turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Grid {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The standard scrabble grid
    fn default() -> Self {
        Grid::expand_quarter_board(&DEFAULT_QUARTER_BOARD)
    }
}

impl Grid {
    /// Create a new empty grid 15x15 squares with no premium.
    pub fn empty() -> Grid {
        Grid([[NoPremium; N]; N])
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[[Premium; Q]; Q]) -> Grid {
        let mut board = Grid::empty();
        for (i, row) in qb.iter().enumerate() {
            for (j, &val) in row.iter().enumerate() {
                board[i][j] = val;
                board[N - i - 1][j] = val;
                board[i][N - j - 1] = val;
                board[N - i - 1][N - j - 1] = val;
            }
        }
        board
    }

    /// Get grid squares as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Premium::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings
    /// Parameter `grid` must have 15 rows, each row consisting of 15 elements joined by spaces.
    /// Elements are `--`, `2l`, `3l`, `2w` or `3w`.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a `Premium`.
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut board = Grid::empty();
        for (i, row) in grid.iter().enumerate() {
            let cells: Vec<&str> = row.as_ref().split_whitespace().collect();
            if cells.len() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    cells.len(),
                ));
            }
            for (j, &cell) in cells.iter().enumerate() {
                board[i][j] = cell.parse()?;
            }
        }
        Ok(board)
    }
}
