//! Four-in-a-row detection.
//!
//! A sequence is [`SERIES_LEN`] cells starting at some slot and stepping in one
//! of the four [`Direction`]s. It wins for a player if every coordinate lies on
//! the board and every cell belongs to that player.

use tracing::instrument;

use crate::board::{Cell, Gameboard, Position};
use crate::player::Player;

/// Number of pieces in a row to win the game.
pub const SERIES_LEN: usize = 4;

/// Directions a winning series can run in, as `(row, column)` steps.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    /// `(0, +1)`
    Horizontal,
    /// `(+1, 0)`
    Vertical,
    /// `(+1, +1)`, i.e. `\`
    DiagonalDownRight,
    /// `(+1, -1)`, i.e. `/`
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalDownRight,
        Self::DiagonalDownLeft,
    ];

    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalDownRight => (1, 1),
            Self::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Returns whether the series starting at `(row, column)` in `direction`
/// consists of `player`'s pieces only. Series leaving the board never win.
fn is_winning_series(
    board: &Gameboard,
    player: Player,
    row: isize,
    column: isize,
    direction: Direction,
) -> bool {
    let (d_row, d_col) = direction.step();
    (0..SERIES_LEN as isize).all(|k| {
        let (Ok(r), Ok(c)) = (
            usize::try_from(row + k * d_row),
            usize::try_from(column + k * d_col),
        ) else {
            return false;
        };
        board.get(r, c) == Some(Cell::Occupied(player))
    })
}

/// Scans every series on the board.
fn check_whole_board(board: &Gameboard, player: Player) -> bool {
    (0..board.height() as isize).any(|row| {
        (0..board.width() as isize).any(|column| {
            Direction::ALL
                .into_iter()
                .any(|direction| is_winning_series(board, player, row, column, direction))
        })
    })
}

/// Scans only the series passing through `origin`: for each direction, the
/// series whose start is `k` steps behind `origin` for `k` in `0..SERIES_LEN`.
fn check_through(board: &Gameboard, player: Player, origin: Position) -> bool {
    let (row, column) = (origin.row as isize, origin.column as isize);
    Direction::ALL.into_iter().any(|direction| {
        let (d_row, d_col) = direction.step();
        (0..SERIES_LEN as isize).any(|k| {
            is_winning_series(board, player, row - k * d_row, column - k * d_col, direction)
        })
    })
}

/// Check if `player` has four in a row.
///
/// With an `origin`, only lines through that slot are inspected; a four in a
/// row elsewhere on the board is not reported. This matches the whole-board
/// scan as long as `origin` is the most recent placement and no win existed
/// before it. Use `None` or [`find_winner`] to inspect arbitrary positions.
#[must_use]
#[instrument(level = "trace", skip(board), ret)]
pub fn check_win(board: &Gameboard, player: Player, origin: Option<Position>) -> bool {
    match origin {
        Some(origin) => check_through(board, player, origin),
        None => check_whole_board(board, player),
    }
}

/// Returns the player owning a four in a row anywhere on the board.
///
/// Player 1 is reported if, in a position that cannot arise from play, both
/// players have one.
#[must_use]
pub fn find_winner(board: &Gameboard) -> Option<Player> {
    [Player::Player1, Player::Player2]
        .into_iter()
        .find(|&player| check_whole_board(board, player))
}

/// Tie predicate: no free slot is left.
#[must_use]
pub fn is_full(board: &Gameboard) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_win_everywhere(board: &Gameboard, player: Player, line: [Position; 4]) {
        assert!(check_win(board, player, None));
        for origin in line {
            assert!(
                check_win(board, player, Some(origin)),
                "origin {origin} should see the win"
            );
        }
        assert!(!check_win(board, player.opponent(), None));
    }

    #[test]
    fn find_winner_horizontally() {
        let board = Gameboard::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX....",
            "OOO....",
        ]);
        assert!(!check_win(&board, Player::Player1, None));
        assert!(!check_win(&board, Player::Player1, Some(Position::new(4, 2))));
        assert!(!check_win(&board, Player::Player2, None));

        let board = Gameboard::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "...XXXX",
            "...OOOX",
        ]);
        assert_win_everywhere(
            &board,
            Player::Player1,
            [4, 5, 6, 3].map(|c| Position::new(4, c)),
        );
        assert_eq!(find_winner(&board), Some(Player::Player1));
    }

    #[test]
    fn find_winner_vertically() {
        let board = Gameboard::from_rows(&[
            ".......",
            ".......",
            ".....O.",
            ".....O.",
            ".....O.",
            "X....O.",
        ]);
        assert_win_everywhere(
            &board,
            Player::Player2,
            [2, 3, 4, 5].map(|r| Position::new(r, 5)),
        );
        assert_eq!(find_winner(&board), Some(Player::Player2));
    }

    #[test]
    fn find_winner_diagonally_down_right() {
        // (0,0), (1,1), (2,2), (3,3) with supporting pieces beneath
        let board = Gameboard::from_rows(&[
            "X......",
            "OX.....",
            "OOX....",
            "XOOX...",
            "OXXX...",
            "XOOX...",
        ]);
        assert_win_everywhere(
            &board,
            Player::Player1,
            [0, 1, 2, 3].map(|i| Position::new(i, i)),
        );
    }

    #[test]
    fn find_winner_diagonally_down_left() {
        let board = Gameboard::from_rows(&[
            ".......",
            ".......",
            "......O",
            ".....OX",
            "....OXX",
            "...OXXO",
        ]);
        assert_win_everywhere(
            &board,
            Player::Player2,
            [(2, 6), (3, 5), (4, 4), (5, 3)].map(|(r, c)| Position::new(r, c)),
        );
    }

    #[test]
    fn three_in_a_row_does_not_win() {
        let board = Gameboard::from_rows(&[
            ".......",
            ".......",
            "...X...",
            "..XO...",
            ".XOO...",
            "XOOOX..",
        ]);
        // diagonal of four for X, but the other lines are three at most
        assert!(check_win(&board, Player::Player1, None));
        assert!(!check_win(&board, Player::Player2, None));
        assert!(!check_win(&board, Player::Player2, Some(Position::new(5, 3))));
        assert!(!check_win(&board, Player::Player2, Some(Position::new(3, 3))));
    }

    #[test]
    fn broken_series_does_not_win() {
        // interrupted by the opponent
        let board = Gameboard::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXOXX..",
        ]);
        assert!(!check_win(&board, Player::Player1, None));
        assert!(!check_win(&board, Player::Player1, Some(Position::new(5, 4))));

        // interrupted by an empty slot
        let board = Gameboard::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XX.XX..",
        ]);
        assert!(!check_win(&board, Player::Player1, None));
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn series_do_not_wrap_around_the_edges() {
        let board = Gameboard::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".....XX",
            "XX.....",
        ]);
        assert!(!check_win(&board, Player::Player1, None));
        assert!(!check_win(&board, Player::Player1, Some(Position::new(4, 6))));
        assert!(!check_win(&board, Player::Player1, Some(Position::new(5, 0))));
    }

    #[test]
    fn smallest_boards() {
        let board = Gameboard::from_rows(&[
            "...O", //
            "..OX",
            ".OXX",
            "OXXX",
        ]);
        assert!(check_win(&board, Player::Player2, None));
        assert!(check_win(&board, Player::Player2, Some(Position::new(0, 3))));
        assert!(!check_win(&board, Player::Player1, None));

        // too small for any series
        let board = Gameboard::from_rows(&[
            "XXX", //
            "XXX",
            "XXX",
        ]);
        assert!(!check_win(&board, Player::Player1, None));
        assert!(!check_win(&board, Player::Player1, Some(Position::new(1, 1))));
    }

    #[test]
    fn origin_only_sees_lines_through_it() {
        let board = Gameboard::from_rows(&[
            ".......",
            ".......",
            "X......",
            "X......",
            "X......",
            "X....X.",
        ]);
        assert!(!check_win(&board, Player::Player1, Some(Position::new(5, 5))));
        assert!(check_win(&board, Player::Player1, None));
        assert_eq!(find_winner(&board), Some(Player::Player1));
    }

    #[test]
    fn queries_are_idempotent() {
        let board = Gameboard::from_rows(&[
            ".......",
            ".......",
            ".......",
            "X......",
            "X..O...",
            "X..O...",
        ]);
        let origin = Some(Position::new(3, 0));
        let first = check_win(&board, Player::Player1, origin);
        for _ in 0..3 {
            assert_eq!(check_win(&board, Player::Player1, origin), first);
            assert_eq!(check_win(&board, Player::Player1, None), first);
        }
        assert!(!first);
    }

    #[test]
    fn empty_board() {
        let board = Gameboard::default();
        assert!(!check_win(&board, Player::Player1, None));
        assert!(!check_win(&board, Player::Player2, None));
        assert_eq!(find_winner(&board), None);
        assert!(!is_full(&board));
    }
}
