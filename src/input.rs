//! Held-key input sampling
//!
//! The host delivers key-down/key-up events asynchronously; the simulation
//! reads the current held set synchronously at the start of each frame. All
//! access happens on the browser's single event-loop thread, so updates are
//! always fully applied before the next step runs and no locking is needed.

use std::collections::HashSet;

use crate::sim::StepInput;

/// Key names as delivered by `KeyboardEvent.key`
pub const KEY_LEFT: &str = "ArrowLeft";
pub const KEY_RIGHT: &str = "ArrowRight";
pub const KEY_JUMP: &str = " ";

/// The set of currently-held keys, keyed by the DOM key name.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    held: HashSet<String>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Snapshot the movement keys for one simulation step.
    pub fn sample(&self) -> StepInput {
        StepInput {
            left: self.is_held(KEY_LEFT),
            right: self.is_held(KEY_RIGHT),
            jump: self.is_held(KEY_JUMP),
        }
    }
}
