//! Character roster
//!
//! A character is pure data: which sprite sheet to sample, how many frames
//! each action row holds, and which sounds its attacks make. Records are
//! immutable for a fighter's lifetime.

use glam::Vec2;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::CharacterError;
use crate::sim::Action;

/// Number of rows on a character sprite sheet
pub const SHEET_ROWS: usize = 8;

/// Static description of one playable character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterData {
    /// Display name (also used in error messages)
    pub name: String,
    /// Sprite sheet asset id
    pub spritesheet: String,
    /// Frame count per sheet row, in `Action` order
    pub animation_steps: [u32; SHEET_ROWS],
    /// Square tile size on the sheet (pixels)
    pub size: u32,
    /// Render scale applied to a tile
    pub scale: f32,
    /// Render offset of the sprite relative to the bounding box
    pub offset: Vec2,
    /// Cue played when an attack connects
    pub attack_sound: String,
    /// Cue played on every attack swing
    pub miss_sound: String,
}

impl CharacterData {
    /// Frame count of the clip for an action
    pub fn frame_count(&self, action: Action) -> u32 {
        self.animation_steps[action.index()]
    }

    /// Check that a fighter can be built from this record
    pub fn validate(&self) -> Result<(), CharacterError> {
        for action in Action::ALL {
            if self.frame_count(action) == 0 {
                return Err(CharacterError::EmptyClip {
                    name: self.name.clone(),
                    row: action.index(),
                });
            }
        }
        if self.size == 0 {
            return Err(CharacterError::InvalidTileSize {
                name: self.name.clone(),
                size: self.size,
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(CharacterError::InvalidScale {
                name: self.name.clone(),
                scale: self.scale,
            });
        }
        for (what, id) in [
            ("spritesheet", &self.spritesheet),
            ("attack sound", &self.attack_sound),
            ("miss sound", &self.miss_sound),
        ] {
            if id.trim().is_empty() {
                return Err(CharacterError::MissingAsset {
                    name: self.name.clone(),
                    what,
                });
            }
        }
        Ok(())
    }
}

fn melee(name: &str, sheet: &str, steps: [u32; SHEET_ROWS], offset_x: f32) -> CharacterData {
    CharacterData {
        name: name.to_string(),
        spritesheet: format!("Good Fighter/{sheet}"),
        animation_steps: steps,
        size: 180,
        scale: 3.0,
        offset: Vec2::new(offset_x, 150.0),
        attack_sound: "music/swordattack.wav".to_string(),
        miss_sound: "music/swordmissattack.flac".to_string(),
    }
}

/// The built-in characters
pub fn roster() -> Vec<CharacterData> {
    vec![
        melee("Knight", "knight moves.png", [11, 8, 3, 7, 7, 4, 11, 3], 220.0),
        melee("Martial I", "martial 1 moves.png", [8, 8, 2, 6, 6, 4, 6, 2], 232.0),
        melee("Martial II", "martial 2 moves.png", [4, 8, 2, 4, 4, 3, 7, 2], 220.0),
        melee("Martial III", "martial 3 moves.png", [10, 8, 3, 7, 9, 3, 11, 3], 220.0),
        CharacterData {
            name: "Wizard".to_string(),
            spritesheet: "Good Fighter/wiz 2 moves.png".to_string(),
            animation_steps: [6, 8, 2, 8, 8, 5, 7, 2],
            size: 180,
            scale: 2.0,
            offset: Vec2::new(120.0, 129.0),
            attack_sound: "music/fireattack.wav".to_string(),
            miss_sound: "music/firemissattack.wav".to_string(),
        },
    ]
}

/// Pick two distinct characters from a roster, reproducible by seed
pub fn pick_pair(
    roster: &[CharacterData],
    seed: u64,
) -> Result<(CharacterData, CharacterData), CharacterError> {
    if roster.len() < 2 {
        return Err(CharacterError::RosterTooSmall(roster.len()));
    }
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut ids: Vec<usize> = (0..roster.len()).collect();
    ids.shuffle(&mut rng);

    let p1 = roster[ids[0]].clone();
    let p2 = roster[ids[1]].clone();
    p1.validate()?;
    p2.validate()?;
    log::info!("Selected characters: {} vs {}", p1.name, p2.name);
    Ok((p1, p2))
}
