//! Game state and entity records

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; latched until an explicit restart
    GameOver,
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub airborne: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: PLAYER_SPAWN,
            vel: Vec2::ZERO,
            airborne: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: PLAYER_SIZE,
        }
    }

    /// Return to the spawn point after losing a life. Velocity and the
    /// airborne flag carry over; the next platform contact settles them.
    pub fn respawn(&mut self) {
        self.pos = PLAYER_SPAWN;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    /// Direction sign, +1 (right) or -1 (left)
    pub dir: f32,
    /// Patrol bounds on x; direction flips when either is reached
    pub patrol_min: f32,
    pub patrol_max: f32,
}

impl Enemy {
    /// Advance one patrol step, reversing at the patrol bounds.
    pub fn advance(&mut self) {
        self.rect.pos.x += ENEMY_SPEED * self.dir;
        if self.rect.pos.x <= self.patrol_min || self.rect.pos.x >= self.patrol_max {
            self.dir = -self.dir;
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
    pub player: Player,
    /// Static level geometry, in draw/collision order
    pub platforms: Vec<Rect>,
    pub enemies: Vec<Enemy>,
}

impl GameState {
    /// Create a fresh session with the fixed level layout.
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::Playing,
            player: Player::new(),
            platforms: vec![
                Rect::new(0.0, 500.0, 800.0, 100.0), // ground
                Rect::new(300.0, 400.0, 200.0, 20.0),
                Rect::new(100.0, 300.0, 200.0, 20.0),
                Rect::new(500.0, 200.0, 200.0, 20.0),
            ],
            enemies: vec![Enemy {
                rect: Rect::new(300.0, 370.0, 32.0, 32.0),
                dir: 1.0,
                patrol_min: 300.0,
                patrol_max: 500.0,
            }],
        }
    }

    /// Begin a new run after game over. Score, lives, the player's position,
    /// and the phase reset; enemies keep their patrol progress.
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.player.respawn();
        self.phase = GamePhase::Playing;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
