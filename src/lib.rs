//! Grid Snake - a browser snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake state, tick rules)
//! - `game`: Fixed-interval scheduling and the Idle/Running/GameOver lifecycle
//! - `input`: Keyboard and touch mapping to direction requests
//! - `settings`: Session configuration, persisted to LocalStorage
//! - `highscores`: Local top-10 leaderboard
//! - `audio`: Procedural Web Audio effects (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game;
pub mod highscores;
pub mod input;
pub mod settings;
pub mod sim;

pub use game::{FrameControl, SnakeLoop};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Pixels per grid cell
    pub const CELL_SIZE_PX: u32 = 50;
    /// Milliseconds between logical snake moves (5 Hz)
    pub const MOVE_INTERVAL_MS: f64 = 200.0;
    /// Smallest board dimension in cells; surfaces smaller than this are
    /// clamped rather than producing a degenerate grid
    pub const MIN_GRID_CELLS: i32 = 3;
}
