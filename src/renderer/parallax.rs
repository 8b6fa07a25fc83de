//! Background parallax offsets
//!
//! Layers are ordered back to front; each nearer layer scrolls faster. A layer
//! is drawn twice, at its offset and one width to the right, so the seam never
//! shows.

use crate::settings::Settings;
use crate::sim::{MatchState, PlayerSlot};

/// Speed factor of the farthest layer
pub const BASE_LAYER_SPEED: f32 = 0.5;
/// Extra speed per nearer layer
pub const LAYER_SPEED_STEP: f32 = 0.2;

/// Scroll amount follows the fighters' average position
pub fn scroll_for(p1_left: f32, p2_left: f32) -> f32 {
    (p1_left + p2_left) / 20.0
}

/// Scroll for the current match; frozen at zero under reduced motion
pub fn background_scroll(state: &MatchState, settings: &Settings) -> f32 {
    if !settings.parallax_enabled() {
        return 0.0;
    }
    scroll_for(
        state.fighter(PlayerSlot::One).body().left,
        state.fighter(PlayerSlot::Two).body().left,
    )
}

/// Horizontal draw offset of layer `index`, wrapped into `(-width, 0]`
pub fn layer_offset(scroll: f32, index: usize, width: f32) -> f32 {
    let speed = BASE_LAYER_SPEED + LAYER_SPEED_STEP * index as f32;
    let x = -scroll * speed;
    if width <= 0.0 {
        return x;
    }
    let wrapped = x.rem_euclid(width);
    if wrapped == 0.0 { 0.0 } else { wrapped - width }
}
