use super::board::Board;
use super::error::GameError;
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub index: usize,
    pub score: i32,
}

/// Picks the move maximizing the minimax score for `searching_mark`.
///
/// Ties go to the lowest index, so the same board always yields the same move.
pub fn best_move(board: &Board, searching_mark: Mark, opponent_mark: Mark) -> Result<usize, GameError> {
    let scored = score_moves(board, searching_mark, opponent_mark)?;

    let mut best: Option<ScoredMove> = None;
    for candidate in scored {
        if best.is_none_or(|current| candidate.score > current.score) {
            best = Some(candidate);
        }
    }

    best.map(|m| m.index).ok_or(GameError::InvalidState)
}

/// Scores every legal move for `searching_mark`, in ascending index order.
///
/// A win scores `10 - depth`, a loss `depth - 10` and a draw `0`, where depth
/// counts plies from the current position.
pub fn score_moves(
    board: &Board,
    searching_mark: Mark,
    opponent_mark: Mark,
) -> Result<Vec<ScoredMove>, GameError> {
    if searching_mark == opponent_mark {
        return Err(GameError::InvalidState);
    }
    if evaluate(board) != Outcome::InProgress {
        return Err(GameError::InvalidState);
    }

    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(GameError::InvalidState);
    }

    let search = Search {
        searching_mark,
        opponent_mark,
    };
    let mut board = *board;

    let scored = available_moves
        .into_iter()
        .map(|index| {
            board.place(index, searching_mark);
            let score = search.minimax(&mut board, 1, false);
            board.clear(index);
            ScoredMove { index, score }
        })
        .collect();

    Ok(scored)
}

struct Search {
    searching_mark: Mark,
    opponent_mark: Mark,
}

impl Search {
    fn minimax(&self, board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
        match evaluate(board) {
            Outcome::Win(mark) if mark == self.searching_mark => return WIN_SCORE - depth,
            Outcome::Win(_) => return depth - WIN_SCORE,
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        let ply_mark = if is_maximizing {
            self.searching_mark
        } else {
            self.opponent_mark
        };

        let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
        for index in 0..board.cells().len() {
            if !board.is_empty_at(index) {
                continue;
            }

            board.place(index, ply_mark);
            let eval = self.minimax(board, depth + 1, !is_maximizing);
            board.clear(index);

            best = if is_maximizing {
                best.max(eval)
            } else {
                best.min(eval)
            };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::board::board_from_str;
    use super::super::types::Cell;

    fn play_optimal_game(mut board: Board, mut to_move: Mark) -> Board {
        while evaluate(&board) == Outcome::InProgress {
            let index = best_move(&board, to_move, to_move.other()).unwrap();
            assert!(board.is_empty_at(index), "search picked occupied cell {}", index);
            board.place(index, to_move);
            to_move = to_move.other();
        }
        board
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board_from_str("XX. ... ...");
        assert_eq!(best_move(&board, Mark::X, Mark::O), Ok(2));
    }

    #[test]
    fn test_blocks_opponent_row() {
        let board = board_from_str("OO. .X. ...");
        assert_eq!(best_move(&board, Mark::X, Mark::O), Ok(2));
    }

    #[test]
    fn test_blocks_column_threat_as_o() {
        let board = board_from_str("X.. X.. ..O");
        assert_eq!(best_move(&board, Mark::O, Mark::X), Ok(6));
    }

    #[test]
    fn test_prefers_win_over_block() {
        let board = board_from_str("XX. OO. ...");
        assert_eq!(best_move(&board, Mark::X, Mark::O), Ok(2));
        assert_eq!(best_move(&board, Mark::O, Mark::X), Ok(5));
    }

    #[test]
    fn test_immediate_win_scores_higher_than_delayed_win() {
        let board = board_from_str("XX. ... ...");
        let scored = score_moves(&board, Mark::X, Mark::O).unwrap();

        let immediate = scored.iter().find(|m| m.index == 2).unwrap();
        assert_eq!(immediate.score, WIN_SCORE - 1);
        for other in scored.iter().filter(|m| m.index != 2) {
            assert!(other.score <= WIN_SCORE - 3, "move {:?} should not beat the immediate win", other);
        }
    }

    #[test]
    fn test_unstoppable_double_threat_scores_earliest_loss() {
        // O threatens both 2 and 6, so every reply loses on the next ply.
        let board = board_from_str("OO. O.X .X.");
        let scored = score_moves(&board, Mark::X, Mark::O).unwrap();
        assert_eq!(scored.len(), 4);
        assert!(scored.iter().all(|m| m.score == 2 - WIN_SCORE));
    }

    #[test]
    fn test_delays_loss_when_possible() {
        // X to move must block at 2; any other move loses at depth 2.
        let board = board_from_str("OO. X.. ...");
        let scored = score_moves(&board, Mark::X, Mark::O).unwrap();
        let block = scored.iter().find(|m| m.index == 2).unwrap();
        assert!(block.score > 2 - WIN_SCORE);
        for other in scored.iter().filter(|m| m.index != 2) {
            assert_eq!(other.score, 2 - WIN_SCORE);
        }
    }

    #[test]
    fn test_score_moves_lists_every_empty_cell_in_order() {
        let board = board_from_str("X.O .X. ...");
        let scored = score_moves(&board, Mark::O, Mark::X).unwrap();
        let indices: Vec<usize> = scored.iter().map(|m| m.index).collect();
        assert_eq!(indices, board.available_moves());
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let boards = [
            "X.. ... ...",
            ".X. ... ...",
            "X.. .O. ...",
            "XO. .X. ..O",
            "XOX OX. ...",
            "XOX OXO O..",
        ];
        for layout in boards {
            let board = board_from_str(layout);
            for mark in [Mark::X, Mark::O] {
                if evaluate(&board) != Outcome::InProgress {
                    continue;
                }
                let index = best_move(&board, mark, mark.other()).unwrap();
                assert_eq!(board.cell(index), Some(Cell::Empty), "layout {}", layout);
            }
        }
    }

    #[test]
    fn test_optimal_play_from_empty_board_draws() {
        let end = play_optimal_game(Board::new(), Mark::X);
        assert_eq!(evaluate(&end), Outcome::Draw);
        assert!(end.is_full());
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = board_from_str("X.. ... ...");
        let first = best_move(&board, Mark::O, Mark::X).unwrap();
        for _ in 0..3 {
            assert_eq!(best_move(&board, Mark::O, Mark::X).unwrap(), first);
        }
        // O must answer a corner opening in the centre to avoid a forced loss.
        assert_eq!(first, 4);
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let board = board_from_str("X.. .O. ..X");
        let copy = board;
        best_move(&board, Mark::O, Mark::X).unwrap();
        assert_eq!(board, copy);
    }

    #[test]
    fn test_terminal_board_is_invalid_state() {
        let won = board_from_str("XXX OO. ...");
        assert_eq!(best_move(&won, Mark::O, Mark::X), Err(GameError::InvalidState));

        let full = board_from_str("XOX XOO OXX");
        assert_eq!(best_move(&full, Mark::X, Mark::O), Err(GameError::InvalidState));
        assert_eq!(score_moves(&full, Mark::X, Mark::O), Err(GameError::InvalidState));
    }

    #[test]
    fn test_same_marks_is_invalid_state() {
        assert_eq!(best_move(&Board::new(), Mark::X, Mark::X), Err(GameError::InvalidState));
    }
}
