//! Chase Arcade - dodge the enemy, grab the collectibles
//!
//! Core modules:
//! - `sim`: Game session, state machine, collisions and movement (no rendering)
//! - `frame`: Per-frame driver that orders updates and draw calls
//! - `renderer`: Drawing surface abstraction (2D canvas on the web)
//! - `audio`: Background music and death cue routing
//! - `settings`: Player preferences

pub mod audio;
pub mod frame;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use frame::{FrameOutcome, run_frame};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size (16:9)
    pub const PLAYFIELD_WIDTH: f32 = 1280.0;
    pub const PLAYFIELD_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 100.0;
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 50.0;
    /// Pixels per frame while the player drops off screen
    pub const PLAYER_FALL_SPEED: f32 = 10.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 50.0;
    /// Enemy speed at the start of a run (pixels per frame)
    pub const ENEMY_BASE_SPEED: f32 = 2.0;
    /// Enemy speed gained per second of run time
    pub const ENEMY_SPEED_RAMP: f32 = 0.1;

    /// Collectible edge length (square)
    pub const COLLECTIBLE_SIZE: f32 = 70.0;

    /// Pause after the hit before the player starts falling
    pub const DEATH_PAUSE_MS: f64 = 1000.0;
    /// Pause after the player leaves the screen before the game over banner
    pub const GAME_OVER_DELAY_MS: f64 = 500.0;
    /// How long the game over banner stays up
    pub const GAME_OVER_DISPLAY_MS: f64 = 1000.0;
}

/// Playfield bounds as a size vector
#[inline]
pub fn playfield() -> Vec2 {
    Vec2::new(consts::PLAYFIELD_WIDTH, consts::PLAYFIELD_HEIGHT)
}
