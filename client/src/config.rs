use common::config::{Validate, load_yaml_config};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn load_config(path_override: Option<&str>) -> Result<ClientConfig, String> {
    match path_override {
        Some(path) => load_yaml_config(path),
        None => load_yaml_config(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub show_instructions: bool,
    pub empty_cell_glyph: char,
    pub log_final_board: bool,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.empty_cell_glyph == 'X' || self.empty_cell_glyph == 'O' {
            return Err("empty_cell_glyph must not collide with a player mark".to_string());
        }
        if self.empty_cell_glyph.is_ascii_digit() {
            return Err("empty_cell_glyph must not be a digit".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            show_instructions: true,
            empty_cell_glyph: '.',
            log_final_board: false,
        }
    }
}
