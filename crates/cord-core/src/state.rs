//! Mutable widget state.
//!
//! Every field here is written only from effect handlers, which the
//! animation engine runs one at a time, so plain ownership is enough.

use crate::constants::ANGER_BROWS_FROM;
use glam::Vec2;

/// The committed light switch position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub is_on: bool,
}

impl ToggleState {
    /// Flip and return the new value.
    pub fn flip(&mut self) -> bool {
        self.is_on = !self.is_on;
        self.is_on
    }
}

/// Cumulative count of completed reactions. Never decreases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoodState {
    anger_level: u32,
}

impl MoodState {
    pub fn new(anger_level: u32) -> Self {
        Self { anger_level }
    }

    pub fn read(&self) -> u32 {
        self.anger_level
    }

    pub fn increment(&mut self) {
        self.anger_level += 1;
    }
}

/// Visual end of the draggable cord.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TugPoint {
    pub position: Vec2,
}

impl TugPoint {
    pub fn at(position: Vec2) -> Self {
        Self { position }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub toggle: ToggleState,
    pub mood: MoodState,
    pub brows_revealed: bool,
}

impl AppState {
    /// Bump the mood after a finished reaction. Returns true the first time
    /// the brows should be shown.
    pub fn commit_trigger(&mut self) -> bool {
        self.mood.increment();
        if self.mood.read() >= ANGER_BROWS_FROM && !self.brows_revealed {
            self.brows_revealed = true;
            return true;
        }
        false
    }
}
