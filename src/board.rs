use crate::grid::{Grid, Premium, N};
use crate::moves::{Direction, Move};
use crate::tiles::{Letter, Tile};
use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Row and column of the center square
pub const CENTER: usize = N / 2;

type State = [[Option<Tile>; N]; N];

/// The state of a scrabble board: a [`Grid`](crate::Grid) of premium squares,
/// and the tiles that have been played on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: Grid,
    state: State,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".", blanks as lowercase letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

/// Parse a board from text: one row per line, leading and trailing whitespace
/// and blank lines are ignored. Within a row "." (or space) is an empty square,
/// an uppercase letter a tile, a lowercase letter a blank.
/// Rows shorter than 15 squares are padded with empty squares.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<String> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| format!("{:.<width$}", line, width = N))
            .collect();
        Board::from_strings(&rows)
    }
}

impl Board {
    /// Create a new empty board with the standard grid.
    ///
    /// ## Examples
    ///```
    /// use scradle::Board;
    /// let board = Board::new();
    /// assert!(board.is_board_empty());
    ///```
    #[must_use]
    pub fn new() -> Board {
        Board {
            grid: Grid::default(),
            state: [[None; N]; N],
        }
    }

    /// Replace the grid, and return the modified board.
    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Board {
        self.grid = grid;
        self
    }

    /// Parse board state from a list of strings.
    /// The list must contain 15 rows of 15 characters.
    /// ## Errors
    /// If the list of strings has wrong dimensions or contains invalid characters.
    ///
    /// ## Examples
    /// ```
    /// # use scradle::{Board, Error};
    /// let mut rows = vec!["..............."; 15];
    /// rows[7] = "...MOrGUE......";
    /// let board = Board::from_strings(&rows)?;
    /// assert_eq!(board.tile_at(7, 5).map(|t| t.is_blank()), Some(true));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut board = Board::new();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != N {
                return Err(Error::InvalidRowLength(String::from(row), len));
            }
            for (j, c) in row.chars().enumerate() {
                board.state[i][j] = match c {
                    '.' | ' ' => None,
                    _ => Some(Tile::try_from(c)?),
                };
            }
        }
        Ok(board)
    }

    /// Set board tiles from list of strings, keeping the grid.
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.state = Board::from_strings(rows)?.state;
        Ok(self)
    }

    /// Get board state as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.state
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Tile::to_char))
                    .collect()
            })
            .collect()
    }

    /// Return the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < N && col < N
    }

    /// Return tile at row, col or None if empty square or outside grid.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        if self.in_bounds(row, col) {
            self.state[row][col]
        } else {
            None
        }
    }

    /// Return the letter at row, col or None.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<Letter> {
        self.tile_at(row, col).map(Tile::letter)
    }

    /// Check if the square at row, col is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.state[row][col].is_none()
    }

    /// Check if the square at row, col is occupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.tile_at(row, col).is_some()
    }

    /// Premium of the square at row, col. Squares outside the board have no premium.
    pub fn premium_at(&self, row: usize, col: usize) -> Premium {
        if self.in_bounds(row, col) {
            self.grid[row][col]
        } else {
            Premium::NoPremium
        }
    }

    pub fn is_board_empty(&self) -> bool {
        self.state.iter().flatten().all(Option::is_none)
    }

    pub fn is_center(&self, row: usize, col: usize) -> bool {
        row == CENTER && col == CENTER
    }

    pub fn is_center_occupied(&self) -> bool {
        self.is_occupied(CENTER, CENTER)
    }

    /// Check if one of the four orthogonal neighbours of row, col is occupied.
    pub fn has_neighbor(&self, row: usize, col: usize) -> bool {
        Direction::ALL.iter().any(|&d| {
            d.prev(row, col)
                .into_iter()
                .chain(d.next(row, col))
                .any(|(r, c)| self.is_occupied(r, c))
        })
    }

    /// An anchor is an empty square next to a tile, or the center square
    /// of an empty board.
    pub fn is_anchor(&self, row: usize, col: usize) -> bool {
        if !self.is_empty(row, col) {
            return false;
        }
        if self.is_board_empty() {
            return self.is_center(row, col);
        }
        self.has_neighbor(row, col)
    }

    /// Start and end index (inclusive) along `direction` of the run of occupied
    /// squares through row, col. The square row, col itself counts as occupied.
    pub fn run_through(&self, row: usize, col: usize, direction: Direction) -> (usize, usize) {
        let (line, index) = direction.line_index(row, col);
        let occupied = |i: usize| {
            let (r, c) = direction.square(line, i);
            self.is_occupied(r, c)
        };
        let mut start = index;
        while start > 0 && occupied(start - 1) {
            start -= 1;
        }
        let mut end = index;
        while end + 1 < N && occupied(end + 1) {
            end += 1;
        }
        (start, end)
    }

    /// Put `tile` on an empty square.
    /// ## Errors
    /// If the square is outside the board or already occupied.
    pub fn set_tile(&mut self, row: usize, col: usize, tile: Tile) -> Result<(), Error> {
        if !self.in_bounds(row, col) {
            return Err(Error::TilePlacementError { row, col });
        }
        if self.state[row][col].is_some() {
            return Err(Error::TileReplaceError { row, col });
        }
        self.state[row][col] = Some(tile);
        Ok(())
    }

    /// Take the tile from a square, returning it.
    pub fn remove_tile(&mut self, row: usize, col: usize) -> Option<Tile> {
        if self.in_bounds(row, col) {
            self.state[row][col].take()
        } else {
            None
        }
    }

    /// Play the new tiles of `mv` on the board.
    /// The board is not modified if any of the tiles can not be placed.
    /// ## Errors
    /// - If a tile is placed outside the board.
    /// - If a tile is placed on an occupied square.
    pub fn place(&mut self, mv: &Move) -> Result<(), Error> {
        for p in mv.tiles_from_rack() {
            if !self.in_bounds(p.row, p.col) {
                return Err(Error::TilePlacementError {
                    row: p.row,
                    col: p.col,
                });
            }
            if self.state[p.row][p.col].is_some() {
                return Err(Error::TileReplaceError {
                    row: p.row,
                    col: p.col,
                });
            }
        }
        for p in mv.tiles_from_rack() {
            self.state[p.row][p.col] = Some(p.tile);
        }
        Ok(())
    }

    /// Iterate over all tiles on the board with their position
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.state.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(j, cell)| cell.map(|tile| (i, j, tile)))
        })
    }
}
