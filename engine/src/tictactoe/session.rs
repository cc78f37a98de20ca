use crate::log;
use crate::tally::Tallies;
use super::board::{BOARD_SIZE, Board};
use super::bot_controller::best_move;
use super::error::GameError;
use super::types::{GameMode, Mark, Outcome, WinLine};
use super::win_detector::{evaluate, winning_line};

/// One table of play: the current board, whose turn it is, and the running
/// tallies that survive `new_game`.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    to_move: Mark,
    mode: GameMode,
    outcome: Outcome,
    tallies: Tallies,
    last_move: Option<usize>,
}

impl Session {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            mode,
            outcome: Outcome::InProgress,
            tallies: Tallies::default(),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn tallies(&self) -> Tallies {
        self.tallies
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        match self.outcome {
            Outcome::Win(_) => winning_line(&self.board),
            _ => None,
        }
    }

    pub fn is_search_turn(&self) -> bool {
        !self.is_terminal() && self.mode.search_mark() == Some(self.to_move)
    }

    pub fn apply_move(&mut self, index: usize) -> Result<(), GameError> {
        if index >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { index });
        }

        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        if !self.board.is_empty_at(index) {
            return Err(GameError::CellOccupied { index });
        }

        self.board.place(index, self.to_move);
        self.last_move = Some(index);
        self.outcome = evaluate(&self.board);

        match self.outcome {
            Outcome::InProgress => self.to_move = self.to_move.other(),
            Outcome::Win(mark) => {
                self.tallies.record_win(mark);
                log!("Game over: {:?} wins, tallies {:?}", mark, self.tallies);
            }
            Outcome::Draw => {
                self.tallies.record_draw();
                log!("Game over: draw, tallies {:?}", self.tallies);
            }
        }

        Ok(())
    }

    /// Lets the search opponent play its move and returns the chosen index.
    pub fn request_opponent_move(&mut self) -> Result<usize, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let search_mark = self.mode.search_mark().ok_or(GameError::ModeMismatch)?;
        if search_mark != self.to_move {
            return Err(GameError::ModeMismatch);
        }

        let index = best_move(&self.board, search_mark, search_mark.other())?;
        self.apply_move(index)?;
        Ok(index)
    }

    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.to_move = Mark::X;
        self.outcome = Outcome::InProgress;
        self.last_move = None;
    }

    pub fn reset_tallies(&mut self) {
        self.tallies = Tallies::default();
    }

    /// Seeds tallies loaded from a store, e.g. at startup.
    pub fn restore_tallies(&mut self, tallies: Tallies) {
        self.tallies = tallies;
    }

    /// Switching modes abandons the current game.
    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log!("Mode changed from {:?} to {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.new_game();
    }
}
