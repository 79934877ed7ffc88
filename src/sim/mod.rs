//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed time unit per step call, no delta time
//! - Stable iteration order (layout order for platforms, spawn order for enemies)
//! - No rendering, platform, or network dependencies

pub mod rect;
pub mod state;
pub mod step;

pub use rect::Rect;
pub use state::{Enemy, GamePhase, GameState, Player};
pub use step::{StepInput, step};
