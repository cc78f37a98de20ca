pub mod config;
pub mod logger;
pub mod session_rng;
pub mod tally;
pub mod tictactoe;
pub mod version;

pub use session_rng::SessionRng;
