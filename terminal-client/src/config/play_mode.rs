use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    HumanVsHuman,
    HumanVsSearch,
}

impl PlayMode {
    pub fn is_versus_search(self) -> bool {
        self == PlayMode::HumanVsSearch
    }
}
