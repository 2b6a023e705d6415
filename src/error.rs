use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Character is not a letter A-Z (or a blank where a rack tile is expected)
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// A rack holds at most 7 tiles
    #[error("Rack with {0} tiles, expect at most 7")]
    RackTooLarge(usize),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing premium square
    #[error("Invalid grid premium square: \"{0}\"")]
    GridParseError(String),

    /// Attempt to place a tile outside the board
    #[error("Tile at row={row}, col={col} does not fit")]
    TilePlacementError { row: usize, col: usize },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: usize, col: usize },

    /// A move uses a tile that is not on the rack
    #[error("Tile '{0}' is not on the rack")]
    TileNotInRack(char),
}
