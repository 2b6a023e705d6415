//! Playing a game: the board, the rack and the bag, and a duplicate game that
//! always plays the best move.
use crate::board::Board;
use crate::dawg::Dawg;
use crate::movegen::MoveGenerator;
use crate::moves::Move;
use crate::rack::{Rack, MAX_TILES};
use crate::tilebag::TileBag;
use crate::tiles::RackTile;
use crate::Error;
use log::{debug, info, warn};
use std::fmt;

/// Give up finding a balanced rack after this many redraws
const MAX_REDRAWS: usize = 100;

/// A move with the rack and bag as they were before it was played.
#[derive(Debug, Clone)]
struct Turn {
    mv: Move,
    rack: Rack,
    bag: TileBag,
}

/// The state of a single player game.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rack: Rack,
    bag: TileBag,
    total_score: u32,
    bingo_count: usize,
    history: Vec<Turn>,
}

impl GameState {
    /// An empty board and rack, and a full bag shuffled with `seed`.
    pub fn new(seed: u64) -> GameState {
        GameState {
            board: Board::new(),
            rack: Rack::new(),
            bag: TileBag::new(seed),
            total_score: 0,
            bingo_count: 0,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    pub fn seed(&self) -> u64 {
        self.bag.seed()
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn bingo_count(&self) -> usize {
        self.bingo_count
    }

    /// Number of moves played
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The moves played, in order
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.history.iter().map(|turn| &turn.mv)
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|turn| &turn.mv)
    }

    /// Play `mv`: put its new tiles on the board, take them from the rack and
    /// add its score. The rack is not refilled.
    /// ## Errors
    /// If a new tile is not on the rack, or can not be placed on the board.
    /// The state is not modified on error.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), Error> {
        let mut rack = self.rack;
        for p in mv.tiles_from_rack() {
            if !rack.remove(RackTile::from(p.tile)) {
                return Err(Error::TileNotInRack(p.tile.to_char()));
            }
        }
        self.board.place(&mv)?;
        let turn_rack = std::mem::replace(&mut self.rack, rack);
        self.total_score += mv.score;
        if mv.is_bingo() {
            self.bingo_count += 1;
        }
        self.history.push(Turn {
            mv,
            rack: turn_rack,
            bag: self.bag.clone(),
        });
        Ok(())
    }

    /// Take back the last move, and the refill that followed it.
    /// Return the move, or None if no move was played.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let turn = self.history.pop()?;
        for p in turn.mv.tiles_from_rack() {
            self.board.remove_tile(p.row, p.col);
        }
        self.rack = turn.rack;
        self.bag = turn.bag;
        self.total_score -= turn.mv.score;
        if turn.mv.is_bingo() {
            self.bingo_count -= 1;
        }
        Some(turn.mv)
    }

    /// Fill the rack up to 7 tiles. If the rack does not have enough vowels
    /// and consonants, and the bag can still make a valid rack, all tiles go
    /// back to the bag and a new rack is drawn.
    pub fn refill_rack(&mut self) {
        self.fill_rack();
        let move_count = self.move_count();
        let mut redraws = 0;
        while !self.rack.is_valid(move_count) && self.bag.can_make_valid_rack(move_count) {
            if redraws == MAX_REDRAWS {
                warn!(
                    "No valid rack after {} redraws, keep {} (seed {})",
                    redraws,
                    self.rack,
                    self.seed()
                );
                break;
            }
            self.bag.return_tiles(self.rack.tiles());
            self.rack.clear();
            self.fill_rack();
            redraws += 1;
        }
    }

    fn fill_rack(&mut self) {
        let n = MAX_TILES - self.rack.len();
        for tile in self.bag.draw_tiles(n) {
            self.rack.add(tile);
        }
    }

    /// The game is over when no vowel or no consonant is left, in the bag
    /// and the rack together. Blanks are not counted.
    pub fn is_game_over(&self) -> bool {
        let vowels = self.bag.vowel_count() + self.rack.vowel_count();
        let consonants = self.bag.consonant_count() + self.rack.consonant_count();
        vowels == 0 || consonants == 0
    }

    /// Start again with an empty board and rack, and the bag in its initial order.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.rack.clear();
        self.bag.reset();
        self.total_score = 0;
        self.bingo_count = 0;
        self.history.clear();
    }
}

/// Summary of the game followed by the board
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Seed: {}", self.seed())?;
        writeln!(f, "Score: {}", self.total_score)?;
        writeln!(f, "Moves: {}", self.move_count())?;
        writeln!(f, "Bingos: {}", self.bingo_count)?;
        write!(f, "{}", self.board)
    }
}

/// A duplicate game: in every turn the highest scoring move is played.
///
/// Among equal scores the first move in generation order wins, so a game only
/// depends on the dictionary and the seed.
///
/// ## Examples
/// ```
/// # use scradle::{Dawg, DuplicateGame, Error};
/// let dawg = Dawg::from_words(&["LA", "LE", "ET", "TE", "ES", "SE", "TA", "SA"])?;
/// let mut game = DuplicateGame::new(&dawg, 42);
/// let state = game.play_game()?;
/// assert_eq!(state.total_score(), state.moves().map(|mv| mv.score).sum::<u32>());
/// # Ok::<(), Error>(())
/// ```
pub struct DuplicateGame<'a> {
    dawg: &'a Dawg,
    state: GameState,
}

impl<'a> DuplicateGame<'a> {
    pub fn new(dawg: &'a Dawg, seed: u64) -> DuplicateGame<'a> {
        DuplicateGame {
            dawg,
            state: GameState::new(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Reset the game and draw the first rack.
    pub fn start(&mut self) {
        self.state.reset();
        self.state.refill_rack();
    }

    /// Play a complete game from the start, until the game is over or no move
    /// can be found.
    /// ## Errors
    /// If a generated move can not be applied.
    pub fn play_game(&mut self) -> Result<&GameState, Error> {
        self.start();
        while self.play_next_move()? {}
        info!(
            "Game {} finished: {} points in {} moves, {} bingos",
            self.state.seed(),
            self.state.total_score(),
            self.state.move_count(),
            self.state.bingo_count()
        );
        Ok(&self.state)
    }

    /// Play the best move for the current rack and refill the rack.
    /// Return false if the game is over or there is no move.
    /// ## Errors
    /// If a generated move can not be applied.
    pub fn play_next_move(&mut self) -> Result<bool, Error> {
        if self.should_terminate() {
            return Ok(false);
        }
        let best = self.best_move();
        let mv = match best {
            Some(mv) => mv,
            None => {
                debug!("No move for rack {}", self.state.rack());
                return Ok(false);
            }
        };
        debug!(
            "Move {}: {} with rack {}",
            self.state.move_count() + 1,
            mv,
            self.state.rack()
        );
        self.state.apply_move(mv)?;
        self.state.refill_rack();
        Ok(true)
    }

    /// The game ends when it is over, or when the rack is empty
    pub fn should_terminate(&self) -> bool {
        self.state.is_game_over() || self.state.rack().is_empty()
    }

    fn best_move(&self) -> Option<Move> {
        MoveGenerator::new(self.state.board(), self.state.rack(), self.dawg)
            .best_moves()
            .into_iter()
            .next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{Direction, TilePlacement};
    use crate::tiles::Tile;
    use std::convert::TryFrom;

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &[
        "AA", "AH", "AI", "AN", "AS", "AU", "AY", "BA", "BE", "BI", "BU", "CA", "CE", "CI", "DA",
        "DE", "DO", "DU", "EH", "EN", "ES", "ET", "EU", "EX", "FA", "FI", "GO", "HA", "HE", "HI",
        "HO", "IF", "IL", "IN", "JE", "KA", "LA", "LE", "LI", "LU", "MA", "ME", "MI", "MU", "NA",
        "NE", "NI", "NO", "NU", "OC", "OH", "ON", "OR", "OS", "OU", "PI", "PU", "QI", "RA", "RE",
        "RU", "SA", "SE", "SI", "SU", "TA", "TE", "TU", "UN", "US", "UT", "VA", "VE", "VU", "XI",
        "ZA", "ZE", "CAT", "CAR", "LES", "DES", "TES", "MER", "RUE", "SUR", "OUI",
    ];

    fn cat_move(score: u32) -> Result<Move> {
        let placements = "CAT"
            .chars()
            .enumerate()
            .map(|(i, c)| Ok(TilePlacement::new(7, 7 + i, Tile::try_from(c)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Move::new(Direction::Horizontal, placements).with_score(score))
    }

    #[test]
    fn test_new() {
        let state = GameState::new(42);
        assert_eq!(state.seed(), 42);
        assert_eq!(state.total_score(), 0);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.bingo_count(), 0);
        assert!(state.board().is_board_empty());
        assert!(state.rack().is_empty());
        assert_eq!(state.bag().len(), 102);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_refill_rack() -> Result<()> {
        let mut state = GameState::new(42);
        state.refill_rack();
        assert_eq!(state.rack().len(), 7);
        assert_eq!(state.bag().len(), 95);
        assert!(state.rack().is_valid(0));

        let mut rack = *state.rack();
        for tile in rack.tiles().into_iter().take(3) {
            rack.remove(tile);
        }
        state.rack = rack;
        state.refill_rack();
        assert_eq!(state.rack().len(), 7);
        assert_eq!(state.bag().len(), 92);
        Ok(())
    }

    #[test]
    fn test_refill_gives_valid_racks() {
        for seed in 0..20 {
            let mut state = GameState::new(seed);
            state.refill_rack();
            assert!(state.rack().is_valid(0), "seed {}: {}", seed, state.rack());
            assert_eq!(state.rack().len() + state.bag().len(), 102);
        }
    }

    #[test]
    fn test_apply_move() -> Result<()> {
        let mut state = GameState::new(1);
        state.rack = Rack::try_from("CATE")?;
        state.apply_move(cat_move(15)?)?;
        assert_eq!(state.total_score(), 15);
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.bingo_count(), 0);
        assert_eq!(state.rack().to_string(), "E");
        assert_eq!(state.board().to_strings()[7], ".......CAT.....");
        assert_eq!(state.last_move().map(|mv| mv.word.as_str()), Some("CAT"));
        Ok(())
    }

    #[test]
    fn test_apply_move_errors() -> Result<()> {
        let mut state = GameState::new(1);
        state.rack = Rack::try_from("CA")?;
        assert!(matches!(
            state.apply_move(cat_move(10)?),
            Err(Error::TileNotInRack('T'))
        ));
        assert_eq!(state.rack().len(), 2);
        assert!(state.board().is_board_empty());

        state.rack = Rack::try_from("CATCAT")?;
        state.apply_move(cat_move(10)?)?;
        assert!(matches!(
            state.apply_move(cat_move(10)?),
            Err(Error::TileReplaceError { row: 7, col: 7 })
        ));
        assert_eq!(state.rack().to_string(), "ACT");
        assert_eq!(state.total_score(), 10);
        Ok(())
    }

    #[test]
    fn test_blank_leaves_rack() -> Result<()> {
        let mut state = GameState::new(1);
        state.rack = Rack::try_from("C?T")?;
        let placements = vec![
            TilePlacement::new(7, 7, Tile::try_from('C')?),
            TilePlacement::new(7, 8, Tile::try_from('a')?),
            TilePlacement::new(7, 9, Tile::try_from('T')?),
        ];
        state.apply_move(Move::new(Direction::Horizontal, placements).with_score(8))?;
        assert!(state.rack().is_empty());
        assert_eq!(state.board().to_strings()[7], ".......CaT.....");
        Ok(())
    }

    #[test]
    fn test_bingo_count() -> Result<()> {
        let mut state = GameState::new(1);
        state.rack = Rack::try_from("ENTAMEE")?;
        let placements = "ENTAMEE"
            .chars()
            .enumerate()
            .map(|(i, c)| Ok(TilePlacement::new(7, 3 + i, Tile::try_from(c)?)))
            .collect::<Result<Vec<_>>>()?;
        state.apply_move(Move::new(Direction::Horizontal, placements).with_score(100))?;
        assert_eq!(state.total_score(), 100);
        assert_eq!(state.bingo_count(), 1);
        Ok(())
    }

    #[test]
    fn test_undo() -> Result<()> {
        let mut state = GameState::new(3);
        assert_eq!(state.undo_last_move(), None);
        state.refill_rack();
        state.rack = Rack::try_from("CATSEAU")?;
        let (rack, bag_len) = (*state.rack(), state.bag().len());
        state.apply_move(cat_move(10)?)?;
        state.refill_rack();
        assert_eq!(state.rack().len(), 7);
        assert_eq!(state.bag().len(), bag_len - 3);

        let mv = state.undo_last_move();
        assert_eq!(mv.map(|mv| mv.word), Some("CAT".to_string()));
        assert_eq!(*state.rack(), rack);
        assert_eq!(state.bag().len(), bag_len);
        assert!(state.board().is_board_empty());
        assert_eq!(state.total_score(), 0);
        assert_eq!(state.move_count(), 0);
        Ok(())
    }

    #[test]
    fn test_history() -> Result<()> {
        let mut state = GameState::new(5);
        state.rack = Rack::try_from("CATSE")?;
        state.apply_move(cat_move(10)?)?;
        let placements = vec![
            TilePlacement::existing(7, 9, Tile::try_from('T')?),
            TilePlacement::new(8, 9, Tile::try_from('E')?),
            TilePlacement::new(9, 9, Tile::try_from('S')?),
        ];
        state.apply_move(Move::new(Direction::Vertical, placements).with_score(15))?;
        let scores: Vec<u32> = state.moves().map(|mv| mv.score).collect();
        assert_eq!(scores, vec![10, 15]);
        assert_eq!(state.total_score(), 25);
        assert!(state.rack().is_empty());
        Ok(())
    }

    #[test]
    fn test_game_over() {
        let mut state = GameState::new(9);
        assert!(!state.is_game_over());
        state.bag.draw_tiles(102);
        assert!(state.is_game_over());
        state.rack.add(RackTile::Blank);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_reset() -> Result<()> {
        let mut state = GameState::new(11);
        state.refill_rack();
        let first_rack = *state.rack();
        state.rack = Rack::try_from("CAT")?;
        state.apply_move(cat_move(20)?)?;
        assert_eq!(state.total_score(), 20);
        state.reset();
        assert_eq!(state.total_score(), 0);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.bingo_count(), 0);
        assert!(state.board().is_board_empty());
        assert!(state.rack().is_empty());
        assert_eq!(state.bag().len(), 102);
        state.refill_rack();
        assert_eq!(*state.rack(), first_rack);
        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        let mut state = GameState::new(8);
        state.rack = Rack::try_from("CAT")?;
        state.apply_move(cat_move(10)?)?;
        let s = state.to_string();
        assert!(s.starts_with("Seed: 8\nScore: 10\nMoves: 1\nBingos: 0\n"));
        assert!(s.contains(".......CAT....."));
        Ok(())
    }

    #[test]
    fn test_duplicate_new() -> Result<()> {
        let dawg = Dawg::from_words(WORDS)?;
        let game = DuplicateGame::new(&dawg, 42);
        assert_eq!(game.state().seed(), 42);
        assert_eq!(game.state().move_count(), 0);
        // nothing to play before the first rack is drawn
        assert!(game.should_terminate());
        Ok(())
    }

    #[test]
    fn test_duplicate_next_move() -> Result<()> {
        let dawg = Dawg::from_words(WORDS)?;
        let mut game = DuplicateGame::new(&dawg, 42);
        game.start();
        if game.play_next_move()? {
            let state = game.state();
            assert_eq!(state.move_count(), 1);
            assert!(state.total_score() > 0);
            assert!(state.board().is_center_occupied());
            assert!(state.rack().is_full() || state.bag().is_empty());
        }
        Ok(())
    }

    #[test]
    fn test_duplicate_game() -> Result<()> {
        let dawg = Dawg::from_words(WORDS)?;
        let mut game = DuplicateGame::new(&dawg, 7);
        let state = game.play_game()?;
        let total: u32 = state.moves().map(|mv| mv.score).sum();
        assert_eq!(state.total_score(), total);
        for mv in state.moves() {
            assert!(dawg.contains(&mv.word), "{}", mv);
        }
        let tiles_on_board = state.board().tiles().count();
        let tiles_played: usize = state.moves().map(|mv| mv.tiles_used()).sum();
        assert_eq!(tiles_on_board, tiles_played);
        assert_eq!(
            tiles_on_board + state.rack().len() + state.bag().len(),
            102
        );
        Ok(())
    }

    #[test]
    fn test_duplicate_deterministic() -> Result<()> {
        let dawg = Dawg::from_words(WORDS)?;
        let mut game1 = DuplicateGame::new(&dawg, 12345);
        let mut game2 = DuplicateGame::new(&dawg, 12345);
        let state1 = game1.play_game()?.clone();
        let state2 = game2.play_game()?;
        assert_eq!(state1.total_score(), state2.total_score());
        assert_eq!(state1.move_count(), state2.move_count());
        assert_eq!(state1.bingo_count(), state2.bingo_count());
        let moves1: Vec<&Move> = state1.moves().collect();
        let moves2: Vec<&Move> = state2.moves().collect();
        assert_eq!(moves1, moves2);

        // a second game with the same object replays the same moves
        let replay = game1.play_game()?;
        assert_eq!(replay.total_score(), state1.total_score());
        Ok(())
    }
}
