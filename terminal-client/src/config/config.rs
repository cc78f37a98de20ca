use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::tictactoe::{FirstPlayerMode, SessionSettings};

use super::PlayMode;

const CONFIG_FILE_NAME: &str = "tictactoe_terminal_config.yaml";
const MAX_SEARCH_DELAY_MS: u64 = 5000;

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub play_mode: PlayMode,
    pub first_player: FirstPlayerMode,
    /// Pause before the search opponent commits its move, for pacing only.
    #[serde(default)]
    pub search_delay_ms: u64,
    pub tally_file: String,
}

impl Config {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            versus_search: self.play_mode.is_versus_search(),
            first_player: self.first_player,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.search_delay_ms > MAX_SEARCH_DELAY_MS {
            return Err(format!(
                "search_delay_ms must not exceed {}",
                MAX_SEARCH_DELAY_MS
            ));
        }
        if self.tally_file.trim().is_empty() {
            return Err("tally_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            play_mode: PlayMode::HumanVsSearch,
            first_player: FirstPlayerMode::Human,
            search_delay_ms: 500,
            tally_file: "tictactoe_tallies.yaml".to_string(),
        }
    }
}
