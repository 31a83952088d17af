//! Liberty detection for strings of same-token stones.
//!
//! A string is a maximal set of same-token stones connected orthogonally.
//! A string whose stones touch no empty point has no liberties, and in NoGo
//! its owner has lost.
//!
//! Both searches use an explicit stack and a visited buffer sized to the
//! board, so loops in a string are walked once and large strings do not
//! deepen the call stack.

use crate::board::{Board, Point, Token};

/// Does the string containing `(row, col)` touch at least one empty point?
///
/// Returns as soon as the first liberty is found. `(row, col)` must hold a
/// stone; an empty point has no string and reports `false`.
pub fn has_liberty(board: &Board, row: usize, col: usize) -> bool {
    let Some(token) = board.get(row, col) else {
        return false;
    };
    let mut visited = vec![false; board.height() * board.width()];
    flood(board, (row, col), token, &mut visited, true)
}

/// Find a string of `token` stones with no liberties anywhere on the board.
///
/// Each string is flooded once and every stone it covers is skipped
/// afterwards, so the scan is linear in the board area. Returns a point of
/// the first dead string in row-major order.
pub fn find_dead_group(board: &Board, token: Token) -> Option<Point> {
    let width = board.width();
    let mut seen = vec![false; board.height() * width];
    for (row, col) in board.stones(token) {
        if !seen[row * width + col] && !flood(board, (row, col), token, &mut seen, false) {
            return Some((row, col));
        }
    }
    None
}

/// Walk the `token` string from `start`, marking its stones in `visited`.
///
/// Reports whether the string touches an empty point. With `stop_at_liberty`
/// the walk ends at the first one; otherwise the whole string is marked.
fn flood(
    board: &Board,
    start: Point,
    token: Token,
    visited: &mut [bool],
    stop_at_liberty: bool,
) -> bool {
    let width = board.width();
    let mut stack = vec![start];
    visited[start.0 * width + start.1] = true;
    let mut alive = false;

    while let Some((r, c)) = stack.pop() {
        for (nr, nc) in board.neighbors(r, c) {
            match board.get(nr, nc) {
                None if stop_at_liberty => return true,
                None => alive = true,
                Some(t) if t == token && !visited[nr * width + nc] => {
                    visited[nr * width + nc] = true;
                    stack.push((nr, nc));
                }
                _ => {}
            }
        }
    }
    alive
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_isolated_stone_has_liberty() {
        let b = board(&["....", ".O..", "....", "...."]);
        assert!(has_liberty(&b, 1, 1));
        assert_eq!(find_dead_group(&b, Token::O), None);
    }

    #[test]
    fn test_surrounded_stone() {
        let b = board(&[".X..", "XOX.", ".X..", "...."]);
        assert!(!has_liberty(&b, 1, 1));
        assert_eq!(find_dead_group(&b, Token::O), Some((1, 1)));
        // The surrounding stones all still breathe.
        assert_eq!(find_dead_group(&b, Token::X), None);
    }

    #[test]
    fn test_corner_stone_uses_board_edge() {
        let b = board(&["OX..", "X...", "....", "...."]);
        assert!(!has_liberty(&b, 0, 0));

        let b = board(&["OX..", "....", "....", "...."]);
        assert!(has_liberty(&b, 0, 0));
    }

    #[test]
    fn test_diagonal_empty_is_not_a_liberty() {
        // (1,1) has empty diagonals at (0,0), (0,2), (2,0) and (2,2).
        let b = board(&[".X.X", "XOX.", ".X..", "...."]);
        assert!(!has_liberty(&b, 1, 1));
    }

    #[test]
    fn test_snake_with_single_liberty() {
        let mut b = board(&[
            "OOOOX", //
            "XXXOX", //
            "OOOOX", //
            "OXXXX", //
            ".X...",
        ]);
        for (row, col) in b.stones(Token::O).collect::<Vec<_>>() {
            assert!(has_liberty(&b, row, col), "({row}, {col}) reaches (4,0)");
        }
        b.place(4, 0, Token::X);
        for (row, col) in b.stones(Token::O).collect::<Vec<_>>() {
            assert!(!has_liberty(&b, row, col));
        }
        assert_eq!(find_dead_group(&b, Token::O), Some((0, 0)));
    }

    #[test]
    fn test_closed_ring_terminates() {
        // A ring of O around a single X, itself enclosed by X.
        let mut b = board(&[
            "XXXXX", //
            "XOOOX", //
            "XOXOX", //
            "XOOOX", //
            "XXXX.",
        ]);
        assert!(!has_liberty(&b, 1, 1));
        assert!(!has_liberty(&b, 2, 2));
        assert_eq!(find_dead_group(&b, Token::O), Some((1, 1)));

        b = board(&[
            "XXXXX", //
            "XOOO.", //
            "XOXOX", //
            "XOOOX", //
            "XXXXX",
        ]);
        assert!(has_liberty(&b, 3, 1));
        assert_eq!(find_dead_group(&b, Token::O), None);
    }

    #[test]
    fn test_dead_string_after_live_strings() {
        // The live string winds past the dead stone at (3,4) in row order.
        let b = board(&[
            "OOOO.", //
            "XXXOX", //
            "OOOOX", //
            "OXXXO", //
            "OX.XX",
        ]);
        assert!(has_liberty(&b, 0, 0));
        assert!(has_liberty(&b, 4, 0));
        assert_eq!(find_dead_group(&b, Token::O), Some((3, 4)));
        assert_eq!(find_dead_group(&b, Token::X), Some((1, 0)));
    }

    #[test]
    fn test_empty_point_reports_no_liberty() {
        let b = board(&["....", "....", "....", "...."]);
        assert!(!has_liberty(&b, 2, 2));
    }

    #[test]
    fn test_full_board_group() {
        let rows: Vec<String> = (0..6).map(|_| "O".repeat(6)).collect();
        let mut b = Board::from_rows(&rows).unwrap();
        assert!(!has_liberty(&b, 0, 0));

        let mut rows = rows;
        rows[5].replace_range(5..6, ".");
        b = Board::from_rows(&rows).unwrap();
        assert!(has_liberty(&b, 0, 0));
    }
}
