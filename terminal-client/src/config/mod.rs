mod config;
mod play_mode;

pub use config::{Config, get_config_manager};
pub use play_mode::PlayMode;
