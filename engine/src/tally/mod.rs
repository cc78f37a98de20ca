mod tally_store;

use serde::{Deserialize, Serialize};

use crate::tictactoe::Mark;

pub use tally_store::{FileTallyStore, MemoryTallyStore, TALLY_KEY, TallyStore, TallyStoreError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tallies {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tallies {
    /// Counters come from persisted files, so they saturate instead of overflowing.
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins = self.x_wins.saturating_add(1),
            Mark::O => self.o_wins = self.o_wins.saturating_add(1),
        }
    }

    pub fn record_draw(&mut self) {
        self.draws = self.draws.saturating_add(1);
    }
}
