//! Move generation: anchors, cross-checks and a guided walk of the dictionary.
//!
//! For every anchor the generator first chooses a left part: the tiles already
//! on the board in front of the anchor, or up to `max_left` tiles from the rack.
//! It then extends the word to the right through the anchor, placing rack tiles
//! on empty squares and reading tiles already on the board. Only letters that
//! continue a dictionary prefix and pass the cross-check of their square are
//! tried, so every move found forms dictionary words only.
use crate::anchor::{self, Anchor};
use crate::board::Board;
use crate::crosscheck::CrossChecks;
use crate::dawg::{Dawg, DawgNode};
use crate::moves::{Direction, Move, TilePlacement};
use crate::rack::Rack;
use crate::scorer::Scorer;
use crate::tiles::{Letter, RackTile, Tile};
use log::debug;
use std::collections::hash_map::{Entry, HashMap};

type Square = (usize, usize);

/// Generates the moves for one position: a board, a rack and a dictionary.
/// Neither the board nor the rack is modified.
///
/// ## Examples
/// ```
/// # use scradle::{Board, Dawg, MoveGenerator, Rack, Error};
/// # use std::convert::TryFrom;
/// let dawg = Dawg::from_words(&["CAT", "AT"])?;
/// let board = Board::new();
/// let rack = Rack::try_from("CAT")?;
/// let generator = MoveGenerator::new(&board, &rack, &dawg);
/// let best = generator.best_moves();
/// assert_eq!(best.len(), 6);
/// assert_eq!(best[0].to_string(), "CAT at H8 [10 pts]");
/// # Ok::<(), Error>(())
/// ```
pub struct MoveGenerator<'a> {
    board: &'a Board,
    rack: &'a Rack,
    dawg: &'a Dawg,
    scorer: Scorer,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(board: &'a Board, rack: &'a Rack, dawg: &'a Dawg) -> MoveGenerator<'a> {
        MoveGenerator {
            board,
            rack,
            dawg,
            scorer: Scorer::new(),
        }
    }

    /// Use `scorer` to rank moves
    #[must_use]
    pub fn with_scorer(mut self, scorer: Scorer) -> MoveGenerator<'a> {
        self.scorer = scorer;
        self
    }

    /// All valid moves, scored, horizontal first.
    ///
    /// A word is returned once for every start square and direction. When it
    /// can be made with different tiles, for example with a blank or with the
    /// regular letter, the highest scoring variant is kept; among equal scores
    /// the one found first.
    pub fn generate_moves(&self) -> Vec<Move> {
        let mut moves = self.generate(Direction::Horizontal);
        moves.extend(self.generate(Direction::Vertical));
        debug!("{} moves for rack {}", moves.len(), self.rack);
        moves
    }

    pub fn generate_horizontal(&self) -> Vec<Move> {
        self.generate(Direction::Horizontal)
    }

    pub fn generate_vertical(&self) -> Vec<Move> {
        self.generate(Direction::Vertical)
    }

    /// The anchors for words in `direction`
    pub fn find_anchors(&self, direction: Direction) -> Vec<Anchor> {
        let cross_checks = CrossChecks::compute(self.board, self.dawg, direction);
        anchor::find_anchors(self.board, &cross_checks)
    }

    /// All moves with the highest score, in generation order.
    /// Empty if there is no valid move.
    pub fn best_moves(&self) -> Vec<Move> {
        let moves = self.generate_moves();
        let best = match moves.iter().map(|mv| mv.score).max() {
            Some(best) => best,
            None => return moves,
        };
        moves.into_iter().filter(|mv| mv.score == best).collect()
    }

    /// The `n` highest scoring moves, best first. Moves with equal score
    /// keep their generation order.
    pub fn top_moves(&self, n: usize) -> Vec<Move> {
        let mut moves = self.generate_moves();
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        moves.truncate(n);
        moves
    }

    fn generate(&self, direction: Direction) -> Vec<Move> {
        if self.rack.is_empty() {
            return Vec::new();
        }
        let cross_checks = CrossChecks::compute(self.board, self.dawg, direction);
        let mut candidates = Vec::new();
        for anchor in anchor::find_anchors(self.board, &cross_checks) {
            if anchor.cross_check.is_empty() {
                continue;
            }
            let mut search = Search {
                board: self.board,
                cross_checks: &cross_checks,
                direction: anchor.direction,
                anchor: (anchor.row, anchor.col),
                moves: &mut candidates,
            };
            search.extend_left(self.dawg.root(), &anchor, *self.rack);
        }
        self.keep_best_variants(candidates)
    }

    /// Score the candidates of one direction, and keep one move per start
    /// square and word.
    fn keep_best_variants(&self, candidates: Vec<Move>) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(candidates.len());
        let mut seen: HashMap<(usize, usize, String), usize> = HashMap::new();
        for mv in candidates {
            let score = self.scorer.score_move(self.board, &mv);
            let mv = mv.with_score(score);
            match seen.entry((mv.row, mv.col, mv.word.clone())) {
                Entry::Occupied(entry) => {
                    let kept = &mut moves[*entry.get()];
                    if mv.score > kept.score {
                        *kept = mv;
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(moves.len());
                    moves.push(mv);
                }
            }
        }
        moves
    }
}

/// The search from one anchor
struct Search<'a, 'm> {
    board: &'a Board,
    cross_checks: &'a CrossChecks,
    direction: Direction,
    anchor: Square,
    moves: &'m mut Vec<Move>,
}

impl<'a, 'm> Search<'a, 'm> {
    /// Choose the part of the word before the anchor, then extend right.
    fn extend_left(&mut self, root: &'a DawgNode, anchor: &Anchor, rack: Rack) {
        let (board, direction) = (self.board, self.direction);
        let (line, index) = direction.line_index(anchor.row, anchor.col);
        let occupied = |i: usize| {
            let (r, c) = direction.square(line, i);
            board.tile_at(r, c).map(|tile| TilePlacement::existing(r, c, tile))
        };
        if index > 0 && occupied(index - 1).is_some() {
            // the word must start with the tiles in front of the anchor
            let mut start = index - 1;
            while start > 0 && occupied(start - 1).is_some() {
                start -= 1;
            }
            let mut word: Vec<TilePlacement> = (start..index).filter_map(occupied).collect();
            if let Some(node) = root.follow(word.iter().map(TilePlacement::letter)) {
                self.extend_right(node, &mut word, Some(self.anchor), rack);
            }
            return;
        }
        let limit = anchor.max_left.min(rack.len().saturating_sub(1));
        let mut prefix = Vec::with_capacity(limit);
        self.left_part(root, &mut prefix, rack, limit);
    }

    /// Try every left part of at most `limit` rack tiles that is a dictionary prefix.
    fn left_part(&mut self, node: &'a DawgNode, prefix: &mut Vec<Tile>, rack: Rack, limit: usize) {
        self.start_at_anchor(node, prefix, rack);
        if limit == 0 {
            return;
        }
        for (letter, child) in node.children() {
            for tile in playable(&rack, letter) {
                let mut rest = rack;
                rest.remove(RackTile::from(tile));
                prefix.push(tile);
                self.left_part(child, prefix, rest, limit - 1);
                prefix.pop();
            }
        }
    }

    /// Lay the left part on the squares directly before the anchor and extend right.
    fn start_at_anchor(&mut self, node: &'a DawgNode, prefix: &[Tile], rack: Rack) {
        let (line, index) = self.direction.line_index(self.anchor.0, self.anchor.1);
        let start = index - prefix.len();
        let mut word: Vec<TilePlacement> = prefix
            .iter()
            .enumerate()
            .map(|(i, &tile)| {
                let (r, c) = self.direction.square(line, start + i);
                TilePlacement::new(r, c, tile)
            })
            .collect();
        self.extend_right(node, &mut word, Some(self.anchor), rack);
    }

    /// Extend `word` at `square`. `None` is past the board edge.
    fn extend_right(
        &mut self,
        node: &'a DawgNode,
        word: &mut Vec<TilePlacement>,
        square: Option<Square>,
        rack: Rack,
    ) {
        let (row, col) = match square {
            Some(square) => square,
            None => {
                self.record(node, word);
                return;
            }
        };
        if let Some(tile) = self.board.tile_at(row, col) {
            if let Some(child) = node.child(tile.letter()) {
                word.push(TilePlacement::existing(row, col, tile));
                self.extend_right(child, word, self.direction.next(row, col), rack);
                word.pop();
            }
            return;
        }
        self.record(node, word);
        let allowed = self.cross_checks.get(row, col);
        let next = self.direction.next(row, col);
        for (letter, child) in node.children() {
            if !allowed.contains(letter) {
                continue;
            }
            for tile in playable(&rack, letter) {
                let mut rest = rack;
                rest.remove(RackTile::from(tile));
                word.push(TilePlacement::new(row, col, tile));
                self.extend_right(child, word, next, rest);
                word.pop();
            }
        }
    }

    /// Emit the word if it is complete and covers the anchor. The word ends
    /// before an empty square or at the board edge.
    fn record(&mut self, node: &DawgNode, word: &[TilePlacement]) {
        let covers_anchor = word
            .iter()
            .any(|p| (p.row, p.col) == self.anchor);
        if node.is_word() && covers_anchor && word.len() >= 2 {
            self.moves.push(Move::new(self.direction, word.to_vec()));
        }
    }
}

/// The tiles in `rack` that can be played as `letter`: the letter itself, a blank, or both.
fn playable(rack: &Rack, letter: Letter) -> impl Iterator<Item = Tile> {
    let regular = if rack.has(RackTile::Letter(letter)) {
        Some(Tile::Letter(letter))
    } else {
        None
    };
    let blank = if rack.has(RackTile::Blank) {
        Some(Tile::BlankAs(letter))
    } else {
        None
    };
    regular.into_iter().chain(blank)
}

/// All valid moves for `rack` on `board`, scored, one per start, direction and word.
pub fn generate_moves(board: &Board, rack: &Rack, dawg: &Dawg) -> Vec<Move> {
    MoveGenerator::new(board, rack, dawg).generate_moves()
}

/// All moves with the highest score.
pub fn best_moves(board: &Board, rack: &Rack, dawg: &Dawg) -> Vec<Move> {
    MoveGenerator::new(board, rack, dawg).best_moves()
}

/// The `n` highest scoring moves, best first.
pub fn top_moves(board: &Board, rack: &Rack, dawg: &Dawg, n: usize) -> Vec<Move> {
    MoveGenerator::new(board, rack, dawg).top_moves(n)
}
