//! Canvas-2D render step
//!
//! Draws one frame from the current simulation state: clear, platforms,
//! player, enemies. Owns nothing beyond the injected 2D context and never
//! mutates game state.

use web_sys::CanvasRenderingContext2d;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{GameState, Rect};

const PLATFORM_COLOR: &str = "#4CAF50";
const PLAYER_COLOR: &str = "#FF0000";
const ENEMY_COLOR: &str = "#0000FF";

/// Draws frames onto a canvas 2D context owned by the host page.
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Render one frame of the current state.
    pub fn draw(&self, state: &GameState) {
        self.ctx
            .clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);

        self.ctx.set_fill_style_str(PLATFORM_COLOR);
        for platform in &state.platforms {
            self.fill_rect(platform);
        }

        self.ctx.set_fill_style_str(PLAYER_COLOR);
        self.fill_rect(&state.player.bounds());

        self.ctx.set_fill_style_str(ENEMY_COLOR);
        for enemy in &state.enemies {
            self.fill_rect(&enemy.rect);
        }
    }

    fn fill_rect(&self, rect: &Rect) {
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }
}
