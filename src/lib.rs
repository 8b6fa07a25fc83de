//! Pixel Warrior - A two-player local fighting game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (fighters, combat, animation, rounds)
//! - `character`: Character roster and sprite/cue data
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (audio, HUD)
//! - `audio`: Cue routing to an audio backend
//! - `renderer`: Pure draw models (sprite frames, HUD, parallax)

pub mod audio;
pub mod character;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use character::CharacterData;
pub use error::{CharacterError, ConfigError};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz frame limit)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window / arena dimensions
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 540.0;

    /// Player one spawn (top-left of bounding box), facing right
    pub const P1_SPAWN_X: f32 = 100.0;
    pub const P1_SPAWN_Y: f32 = 290.0;
    /// Player two spawn, facing left
    pub const P2_SPAWN_X: f32 = 800.0;
    pub const P2_SPAWN_Y: f32 = 290.0;
}

/// Default arena size as a vector
#[inline]
pub fn default_arena() -> Vec2 {
    Vec2::new(consts::ARENA_WIDTH, consts::ARENA_HEIGHT)
}
