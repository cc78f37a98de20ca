use serde::{Deserialize, Serialize};

use crate::SessionRng;
use super::types::{GameMode, Mark};

/// Who plays X, and therefore moves first, against the search opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Human,
    Search,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub versus_search: bool,
    pub first_player: FirstPlayerMode,
}

impl SessionSettings {
    pub fn resolve_mode(&self, rng: &mut SessionRng) -> GameMode {
        if !self.versus_search {
            return GameMode::HumanVsHuman;
        }

        let search_moves_first = match self.first_player {
            FirstPlayerMode::Human => false,
            FirstPlayerMode::Search => true,
            FirstPlayerMode::Random => rng.random_bool(),
        };

        let search_mark = if search_moves_first { Mark::X } else { Mark::O };
        GameMode::HumanVsSearch { search_mark }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            versus_search: true,
            first_player: FirstPlayerMode::Human,
        }
    }
}
