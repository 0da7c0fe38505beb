//! Host configuration: board size and presentation timings.
//!
//! Read once at startup from `~/.snake/config.json`. Every field is optional in
//! the file; missing fields take their defaults. Nothing is ever written back.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed settings for one run of the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board rows
    pub rows: i16,
    /// Board columns
    pub cols: i16,
    /// Milliseconds between engine ticks
    pub tick_interval_ms: u64,
    /// First number shown by the pre-game countdown
    pub countdown_from: u8,
    /// Milliseconds each countdown number stays up
    pub countdown_step_ms: u64,
    /// Milliseconds between revealing dead-snake segments
    pub reveal_delay_ms: u64,
    /// Milliseconds to hold the dead snake before prompting for a new game
    pub game_over_pause_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval_ms: TICK_INTERVAL_MS,
            countdown_from: COUNTDOWN_FROM,
            countdown_step_ms: COUNTDOWN_STEP_MS,
            reveal_delay_ms: REVEAL_DELAY_MS,
            game_over_pause_ms: GAME_OVER_PAUSE_MS,
        }
    }
}

impl GameConfig {
    /// Load `~/.snake/config.json`, falling back to defaults when it does not exist.
    pub fn load() -> io::Result<Self> {
        let path = default_config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a config file at an explicit path.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine or the frame loop cannot run with.
    pub fn validate(&self) -> io::Result<()> {
        check_board_dimension("rows", self.rows)?;
        check_board_dimension("cols", self.cols)?;
        check_positive("tick_interval_ms", self.tick_interval_ms)?;
        check_positive("countdown_step_ms", self.countdown_step_ms)?;
        check_positive("reveal_delay_ms", self.reveal_delay_ms)?;
        check_positive("game_over_pause_ms", self.game_over_pause_ms)?;
        if self.countdown_from > MAX_COUNTDOWN_FROM {
            return Err(invalid(format!(
                "countdown_from must be at most {}, got {}",
                MAX_COUNTDOWN_FROM, self.countdown_from
            )));
        }
        Ok(())
    }
}

/// Path of the user config file (~/.snake/config.json).
pub fn default_config_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn check_board_dimension(field: &str, value: i16) -> io::Result<()> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&value) {
        return Err(invalid(format!(
            "{} must be between {} and {}, got {}",
            field, MIN_BOARD_SIZE, MAX_BOARD_SIZE, value
        )));
    }
    Ok(())
}

fn check_positive(field: &str, value: u64) -> io::Result<()> {
    if value == 0 {
        return Err(invalid(format!("{} must be greater than zero", field)));
    }
    Ok(())
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
