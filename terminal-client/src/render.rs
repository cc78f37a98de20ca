use tictactoe_engine::tally::Tallies;
use tictactoe_engine::tictactoe::{Cell, GameError, GameMode, Mark, Outcome, Session};

pub fn render_board(session: &Session) -> String {
    let cells = session.board().cells();
    let rows: Vec<String> = cells
        .chunks(3)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Marked(mark) => format!(" {} ", mark.symbol()),
                    Cell::Empty => format!(" {} ", row * 3 + col + 1),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn render_turn(session: &Session) -> String {
    let mark = session.to_move();
    match session.mode() {
        GameMode::HumanVsHuman => format!("Player {}'s turn", mark.symbol()),
        GameMode::HumanVsSearch { search_mark } if search_mark == mark => {
            format!("Search's turn ({})", mark.symbol())
        }
        GameMode::HumanVsSearch { .. } => format!("Your turn ({})", mark.symbol()),
    }
}

pub fn render_outcome(session: &Session) -> Option<String> {
    match session.outcome() {
        Outcome::InProgress => None,
        Outcome::Draw => Some("It's a draw!".to_string()),
        Outcome::Win(mark) => {
            let line = session
                .winning_line()
                .map(|line| {
                    let [a, b, c] = line.indices();
                    format!(" (cells {}-{}-{})", a + 1, b + 1, c + 1)
                })
                .unwrap_or_default();
            Some(format!("Player {} wins!{}", mark.symbol(), line))
        }
    }
}

pub fn render_tallies(tallies: &Tallies) -> String {
    format!(
        "{} wins: {} | {} wins: {} | Draws: {}",
        Mark::X.symbol(),
        tallies.x_wins,
        Mark::O.symbol(),
        tallies.o_wins,
        tallies.draws
    )
}

/// Player-facing text for a rejected move; cells are numbered from 1.
pub fn describe_error(error: GameError) -> String {
    match error {
        GameError::CellOccupied { index } => format!("Cell {} is already taken", index + 1),
        GameError::GameOver => "The game is over. Type 'new' to play again.".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let session = Session::new(GameMode::HumanVsHuman);
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&session), expected);
    }

    #[test]
    fn test_marks_replace_numbers() {
        let mut session = Session::new(GameMode::HumanVsHuman);
        session.apply_move(0).unwrap();
        session.apply_move(4).unwrap();
        let board = render_board(&session);
        assert!(board.starts_with(" X | 2 | 3 "));
        assert!(board.contains(" 4 | O | 6 "));
    }

    #[test]
    fn test_turn_text_depends_on_mode() {
        let session = Session::new(GameMode::HumanVsSearch { search_mark: Mark::O });
        assert_eq!(render_turn(&session), "Your turn (X)");

        let session = Session::new(GameMode::HumanVsSearch { search_mark: Mark::X });
        assert_eq!(render_turn(&session), "Search's turn (X)");

        let session = Session::new(GameMode::HumanVsHuman);
        assert_eq!(render_turn(&session), "Player X's turn");
    }

    #[test]
    fn test_outcome_mentions_winning_cells() {
        let mut session = Session::new(GameMode::HumanVsHuman);
        assert_eq!(render_outcome(&session), None);
        for index in [0, 3, 1, 4, 2] {
            session.apply_move(index).unwrap();
        }
        assert_eq!(
            render_outcome(&session),
            Some("Player X wins! (cells 1-2-3)".to_string())
        );
    }

    #[test]
    fn test_tallies_line() {
        let tallies = Tallies { x_wins: 2, o_wins: 1, draws: 3 };
        assert_eq!(render_tallies(&tallies), "X wins: 2 | O wins: 1 | Draws: 3");
    }
}
