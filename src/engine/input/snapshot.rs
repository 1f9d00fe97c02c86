// Per-frame input state
//
// Frame protocol: feed `press`/`release` for every device event, then call
// `update` exactly once before the simulation step. The simulation only
// reads the snapshot.

use super::button::Button;
use std::collections::HashSet;

/// Queryable pressed-state for one frame, with edge detection.
#[derive(Debug, Default)]
pub struct InputSnapshot {
    /// Buttons currently held
    pressed: HashSet<Button>,

    /// Buttons that went down this frame
    just_pressed: HashSet<Button>,

    /// Buttons that went up this frame
    just_released: HashSet<Button>,

    /// Held state of the previous frame
    previous_pressed: HashSet<Button>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a button is currently held
    pub fn is_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    /// Check if a button went down this frame
    #[allow(dead_code)]
    pub fn just_pressed(&self, button: Button) -> bool {
        self.just_pressed.contains(&button)
    }

    /// Check if a button went up this frame
    pub fn just_released(&self, button: Button) -> bool {
        self.just_released.contains(&button)
    }

    /// Check if a button has been held for more than one frame
    #[allow(dead_code)]
    pub fn is_held(&self, button: Button) -> bool {
        self.pressed.contains(&button) && self.previous_pressed.contains(&button)
    }

    /// Horizontal axis as Right-pressed minus Left-pressed (-1, 0 or 1)
    pub fn horizontal_axis(&self) -> i32 {
        let right = self.is_pressed(Button::Right) as i32;
        let left = self.is_pressed(Button::Left) as i32;
        right - left
    }

    /// Register a button going down
    pub fn press(&mut self, button: Button) {
        if self.pressed.insert(button) {
            self.just_pressed.insert(button);
        }
    }

    /// Register a button going up
    pub fn release(&mut self, button: Button) {
        if self.pressed.remove(&button) {
            self.just_released.insert(button);
        }
    }

    /// Roll the snapshot over to a new frame.
    /// Call once per frame after all device events are processed.
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed = self.pressed.clone();
    }

    /// Drop all state (e.g. on focus loss)
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed.clear();
    }
}
