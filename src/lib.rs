//! Ledge Hopper - a side-view platform game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `input`: Held-key sampling fed by host keyboard events
//! - `render`: Canvas-2D frame drawing (wasm32 only)
//! - `score`: HTTP client for the remote leaderboard service

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod score;
pub mod sim;

pub use input::KeyMap;
pub use score::{ScoreClient, ScoreServiceError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playfield dimensions (CSS pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player box size
    pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);
    /// Spawn point, returned to on life loss and restart
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(50.0, 450.0);
    /// Horizontal run speed (pixels per step)
    pub const RUN_SPEED: f32 = 5.0;
    /// Jump impulse; negative y is up in canvas coordinates
    pub const JUMP_SPEED: f32 = -15.0;
    /// Downward acceleration applied every step
    pub const GRAVITY: f32 = 0.8;

    /// Enemy patrol speed (pixels per step)
    pub const ENEMY_SPEED: f32 = 2.0;

    pub const STARTING_LIVES: u8 = 3;
}
