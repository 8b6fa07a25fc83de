//! Sprite sheet sampling for fighters
//!
//! Sheets are laid out one row per action, one column per frame, with square
//! tiles. The sprite is centered on the bounding box and mirrored when the
//! fighter faces left.

use glam::{UVec2, Vec2};

use crate::sim::Fighter;

/// Source rectangle on a sprite sheet (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub origin: UVec2,
    pub size: UVec2,
}

/// Everything needed to draw one fighter
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteFrame {
    /// Sprite sheet asset id
    pub sheet: String,
    pub source: TileRect,
    /// World position of the sprite's center
    pub center: Vec2,
    /// Per-axis scale; negative x mirrors the sprite
    pub scale: Vec2,
}

/// Tile for a given sheet row and column
pub fn tile(size: u32, row: usize, column: u32) -> TileRect {
    TileRect {
        origin: UVec2::new(column * size, row as u32 * size),
        size: UVec2::splat(size),
    }
}

/// Sprite for a fighter's current action and frame
pub fn sprite_frame(fighter: &Fighter) -> SpriteFrame {
    let character = fighter.character();
    let animation = fighter.animation();
    let scale = character.scale;
    let x_scale = if fighter.facing().is_flipped() {
        -scale
    } else {
        scale
    };

    SpriteFrame {
        sheet: character.spritesheet.clone(),
        source: tile(
            character.size,
            animation.action().index(),
            animation.frame_index(),
        ),
        center: fighter.body().center(),
        scale: Vec2::new(x_scale, scale),
    }
}
