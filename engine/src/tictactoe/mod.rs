mod board;
mod bot_controller;
mod error;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{ScoredMove, best_move, score_moves};
pub use error::GameError;
pub use session::Session;
pub use settings::{FirstPlayerMode, SessionSettings};
pub use types::{Cell, GameMode, Mark, Outcome, WIN_LINES, WinLine};
pub use win_detector::{evaluate, winning_line};
