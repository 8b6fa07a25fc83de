//! Draw models
//!
//! Pure functions that turn match state into what a renderer needs: sprite
//! sheet sub-rectangles and transforms, HUD elements and background offsets.
//! Nothing here touches a graphics API.

pub mod hud;
pub mod parallax;
pub mod sprite;

pub use hud::{HealthBar, HudModel, ScoreText, hitbox_overlay};
pub use parallax::{background_scroll, layer_offset, scroll_for};
pub use sprite::{SpriteFrame, TileRect, sprite_frame};
