//! A scrabble library for Rust.
//! <br>
//! This crate finds every legal move for a board and a rack, scores them with
//! the french letter values and the standard premium squares, and selects the
//! best ones. On top of that it can play complete duplicate games, where every
//! turn the highest scoring move is played, and simulate many of them in
//! parallel with the `rayon` crate.
//!
//! The dictionary is a trie of uppercase words, loaded from a file with one
//! word per line. Move generation walks the trie along the board, so only
//! prefixes of dictionary words are ever tried.
//!
//! # Basic usage
//!  ```
//! # use std::convert::TryFrom;
//! use scradle::{Board, Dawg, MoveGenerator, Rack};
//!
//! let dawg = Dawg::from_words(&["RUST", "REST", "US", "UT"])?;
//! let mut board = Board::new();
//! let rack = Rack::try_from("RUSTE")?;
//! let moves = MoveGenerator::new(&board, &rack, &dawg).top_moves(3);
//! for mv in &moves {
//!     println!("{}", mv);
//! }
//! board.place(&moves[0])?;
//! println!("{}", board);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Games
//! ```
//! use scradle::{Dawg, DuplicateGame};
//!
//! let dawg = Dawg::from_words(&["LA", "LE", "ET", "TE", "ES", "SE"])?;
//! let mut game = DuplicateGame::new(&dawg, 42);
//! let state = game.play_game()?;
//! println!("{}", state);
//! # Ok::<(), anyhow::Error>(())
//! ```
mod anchor;
mod board;
mod crosscheck;
mod dawg;
mod error;
mod game;
mod grid;
mod labelset;
#[cfg(feature = "cli")]
pub mod logging;
mod movegen;
mod moves;
mod rack;
mod scorer;
pub mod simulate;
mod tilebag;
mod tiles;
mod tileset;

pub use anchor::{find_anchors, Anchor};
pub use board::{Board, CENTER};
pub use crosscheck::{cross_check, CrossChecks};
pub use dawg::{Dawg, DawgNode};
pub use error::Error;
pub use game::{DuplicateGame, GameState};
pub use grid::{Grid, Premium};
pub use labelset::LetterSet;
pub use movegen::{best_moves, generate_moves, top_moves, MoveGenerator};
pub use moves::{Direction, Move, RawMove, TilePlacement, BINGO_TILES};
pub use rack::{Rack, RackTiles, MAX_TILES};
pub use scorer::{score_move, Scorer, BINGO_BONUS};
pub use simulate::{simulate_games, GameStats};
pub use tilebag::TileBag;
pub use tiles::{Letter, RackTile, Tile};
pub use tileset::TileSet;
