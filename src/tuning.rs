//! Data-driven game balance
//!
//! Every gameplay constant lives here so a match can be rebalanced from a
//! JSON file without touching the simulation. Defaults match the shipped game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Gameplay constants shared by both fighters and the round orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Fighter body ===
    /// Bounding box width
    pub body_width: f32,
    /// Bounding box height
    pub body_height: f32,
    /// Starting (and maximum) health
    pub max_health: u32,

    // === Physics (per frame) ===
    /// Horizontal speed while a direction is held
    pub run_speed: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_velocity: f32,
    /// Ground line distance above the arena bottom (HUD margin)
    pub ground_margin: f32,

    // === Combat ===
    /// Attack hitbox width as a multiple of body width
    pub attack_reach: f32,
    /// Health removed by a connecting attack
    pub attack_damage: u32,
    /// Frames before another attack may start, armed when an attack clip ends
    pub attack_cooldown_frames: u32,

    // === Animation ===
    /// Seconds between animation frame advances
    pub frame_interval: f32,

    // === Rounds ===
    /// Intro countdown start value
    pub intro_count: u32,
    /// Seconds per intro countdown step
    pub intro_step: f32,
    /// Seconds between a round ending and the reset
    pub round_over_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            body_width: 120.0,
            body_height: 180.0,
            max_health: 100,

            run_speed: 5.0,
            gravity: 2.0,
            jump_velocity: -30.0,
            ground_margin: 70.0,

            attack_reach: 1.5,
            attack_damage: 10,
            attack_cooldown_frames: 25,

            frame_interval: 0.070,

            intro_count: 4,
            intro_step: 1.0,
            round_over_delay: 2.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        positive("body_width", self.body_width)?;
        positive("body_height", self.body_height)?;
        positive("run_speed", self.run_speed)?;
        positive("gravity", self.gravity)?;
        positive("attack_reach", self.attack_reach)?;
        positive("frame_interval", self.frame_interval)?;
        positive("intro_step", self.intro_step)?;
        positive("round_over_delay", self.round_over_delay)?;

        if !self.ground_margin.is_finite() || self.ground_margin < 0.0 {
            return Err(invalid("ground_margin", "must be finite and >= 0"));
        }
        if !self.jump_velocity.is_finite() || self.jump_velocity >= 0.0 {
            return Err(invalid("jump_velocity", "must be negative (upward)"));
        }
        if self.max_health == 0 {
            return Err(invalid("max_health", "must be > 0"));
        }
        if self.attack_damage == 0 {
            return Err(invalid("attack_damage", "must be > 0"));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be finite and > 0, got {value}")))
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
