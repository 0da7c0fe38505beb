// Board defaults (square cells render best with rows == cols)
pub const DEFAULT_ROWS: i16 = 15;
pub const DEFAULT_COLS: i16 = 15;
pub const MIN_BOARD_SIZE: i16 = 2;
pub const MAX_BOARD_SIZE: i16 = 64;

// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 500;
pub const COUNTDOWN_FROM: u8 = 3;
pub const COUNTDOWN_STEP_MS: u64 = 500;
pub const MAX_COUNTDOWN_FROM: u8 = 9;
pub const REVEAL_DELAY_MS: u64 = 50;
pub const GAME_OVER_PAUSE_MS: u64 = 1000;

// Frame loop constants
pub const FRAME_POLL_MS: u64 = 16;
pub const MAX_FRAME_DT_MS: u64 = 1000;

// Config file location (~/.snake/config.json)
pub const CONFIG_DIR_NAME: &str = ".snake";
pub const CONFIG_FILE_NAME: &str = "config.json";
