//! Cross-checks: which letters may go on an empty square, given the tiles
//! above and below it (or left and right of it).
use crate::board::Board;
use crate::dawg::Dawg;
use crate::grid::N;
use crate::labelset::LetterSet;
use crate::moves::Direction;

/// Letters allowed on an empty square for a word in `direction`.
///
/// If the square has no occupied neighbour in the perpendicular direction every
/// letter is allowed. Otherwise only the letters that complete the perpendicular
/// fragment to a word in `dawg`.
pub fn cross_check(
    board: &Board,
    dawg: &Dawg,
    row: usize,
    col: usize,
    direction: Direction,
) -> LetterSet {
    let perpendicular = direction.perpendicular();
    let (start, end) = board.run_through(row, col, perpendicular);
    if start == end {
        return LetterSet::ALL;
    }
    let (line, index) = perpendicular.line_index(row, col);
    let letter_at = |i: usize| {
        let (r, c) = perpendicular.square(line, i);
        board.letter_at(r, c)
    };
    let prefix = dawg.root().follow((start..index).filter_map(letter_at));
    let node = match prefix {
        Some(node) => node,
        None => return LetterSet::new(),
    };
    node.children()
        .filter(|(_, child)| {
            child
                .follow((index + 1..=end).filter_map(letter_at))
                .map_or(false, |n| n.is_word())
        })
        .map(|(letter, _)| letter)
        .collect()
}

/// The cross-check sets of all empty squares for words in one direction.
/// Occupied squares have an empty set.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossChecks {
    direction: Direction,
    sets: [[LetterSet; N]; N],
}

impl CrossChecks {
    /// Compute the cross-checks for the current state of `board`.
    pub fn compute(board: &Board, dawg: &Dawg, direction: Direction) -> CrossChecks {
        let mut sets = [[LetterSet::new(); N]; N];
        for (row, line) in sets.iter_mut().enumerate() {
            for (col, set) in line.iter_mut().enumerate() {
                if board.is_empty(row, col) {
                    *set = cross_check(board, dawg, row, col, direction);
                }
            }
        }
        CrossChecks { direction, sets }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Letters allowed at row, col
    pub fn get(&self, row: usize, col: usize) -> LetterSet {
        self.sets[row][col]
    }
}
