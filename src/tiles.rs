//! Basic types for working with scrabble tiles.
mod letter;
mod rack_tile;
mod tile;

pub use letter::Letter;
pub use rack_tile::RackTile;
pub use tile::Tile;
