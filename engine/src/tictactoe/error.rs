#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Search was asked for a move on a terminal or full board.
    InvalidState,
    CellOccupied { index: usize },
    GameOver,
    /// Opponent move requested outside vs-search mode or out of turn.
    ModeMismatch,
    OutOfBounds { index: usize },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidState => write!(f, "Board has no move to search"),
            GameError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::ModeMismatch => write!(f, "Not the search opponent's turn"),
            GameError::OutOfBounds { index } => write!(f, "Cell {} is out of bounds", index),
        }
    }
}

impl std::error::Error for GameError {}
