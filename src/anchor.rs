//! Anchors: the empty squares where a new word can be hooked onto the board.
use crate::board::{Board, CENTER};
use crate::crosscheck::CrossChecks;
use crate::grid::N;
use crate::labelset::LetterSet;
use crate::moves::Direction;

/// An empty square next to a tile (or the center of an empty board),
/// where a word in `direction` must put a new tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    /// Number of empty non-anchor squares directly before the anchor.
    /// 0 if the square before the anchor holds a tile.
    pub max_left: usize,
    /// Letters allowed on the anchor square
    pub cross_check: LetterSet,
}

/// Find all anchors for words in the direction of `cross_checks`, in board order.
pub fn find_anchors(board: &Board, cross_checks: &CrossChecks) -> Vec<Anchor> {
    let direction = cross_checks.direction();
    if board.is_board_empty() {
        let (_, index) = direction.line_index(CENTER, CENTER);
        return vec![Anchor {
            row: CENTER,
            col: CENTER,
            direction,
            max_left: index,
            cross_check: cross_checks.get(CENTER, CENTER),
        }];
    }
    let mut is_anchor = [[false; N]; N];
    for (row, line) in is_anchor.iter_mut().enumerate() {
        for (col, square) in line.iter_mut().enumerate() {
            *square = board.is_empty(row, col) && board.has_neighbor(row, col);
        }
    }
    let mut anchors = Vec::new();
    for row in 0..N {
        for col in 0..N {
            if is_anchor[row][col] {
                anchors.push(Anchor {
                    row,
                    col,
                    direction,
                    max_left: left_limit(board, &is_anchor, row, col, direction),
                    cross_check: cross_checks.get(row, col),
                });
            }
        }
    }
    anchors
}

/// Walk back from the anchor over empty squares, stopping before a tile,
/// another anchor or the board edge.
fn left_limit(
    board: &Board,
    is_anchor: &[[bool; N]; N],
    row: usize,
    col: usize,
    direction: Direction,
) -> usize {
    let (line, index) = direction.line_index(row, col);
    (0..index)
        .rev()
        .map(|i| direction.square(line, i))
        .take_while(|&(r, c)| board.is_empty(r, c) && !is_anchor[r][c])
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dawg::Dawg;
    use crate::Error;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_empty_board() -> Result<()> {
        let board = Board::new();
        let dawg = Dawg::from_words(&["CAT"])?;
        for &direction in &Direction::ALL {
            let cross_checks = CrossChecks::compute(&board, &dawg, direction);
            let anchors = find_anchors(&board, &cross_checks);
            assert_eq!(anchors.len(), 1);
            let anchor = anchors[0];
            assert_eq!((anchor.row, anchor.col), (CENTER, CENTER));
            assert_eq!(anchor.max_left, 7);
            assert_eq!(anchor.cross_check, LetterSet::ALL);
        }
        Ok(())
    }

    #[test]
    fn test_anchors() -> Result<()> {
        let mut rows = vec!["..............."; 15];
        rows[7] = ".......ON......";
        let board = Board::from_strings(&rows)?;
        let dawg = Dawg::from_words(&["ON", "NO", "JURON"])?;
        let cross_checks = CrossChecks::compute(&board, &dawg, Direction::Horizontal);
        let anchors = find_anchors(&board, &cross_checks);
        let squares: Vec<(usize, usize, usize)> =
            anchors.iter().map(|a| (a.row, a.col, a.max_left)).collect();
        assert_eq!(
            squares,
            vec![(6, 7, 7), (6, 8, 0), (7, 6, 6), (7, 9, 0), (8, 7, 7), (8, 8, 0)]
        );
        // above O: ?O
        assert_eq!(anchors[0].cross_check.to_string(), "N");
        let cross_checks = CrossChecks::compute(&board, &dawg, Direction::Vertical);
        let anchors = find_anchors(&board, &cross_checks);
        let left_of_on = anchors
            .iter()
            .find(|a| (a.row, a.col) == (7, 6))
            .map(|a| a.max_left);
        assert_eq!(left_of_on, Some(7));
        Ok(())
    }
}
