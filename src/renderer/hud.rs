//! HUD overlay model
//!
//! Health bars, round scores, the intro countdown digit and the victory
//! banner, laid out for the default 1000x540 window.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{Fighter, MatchState, PlayerSlot, Rect, RoundPhase, attack_hitbox};

/// Full-health bar size
pub const HEALTH_BAR_SIZE: Vec2 = Vec2::new(300.0, 30.0);
/// Top-left corners of the health bars
pub const HEALTH_BAR_ORIGINS: [Vec2; 2] = [Vec2::new(70.0, 25.0), Vec2::new(630.0, 25.0)];
/// Score text anchors
pub const SCORE_POSITIONS: [Vec2; 2] = [Vec2::new(7.0, 92.0), Vec2::new(900.0, 92.0)];
/// Score text size in points
pub const SCORE_FONT_SIZE: u32 = 30;

/// Colors for HUD elements
pub mod colors {
    pub const HEALTH_BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HEALTH_FILL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const SCORE_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BODY_OUTLINE: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const HITBOX_OUTLINE: [f32; 4] = [1.0, 0.8, 0.2, 1.0];
}

/// One health bar: white background with a red fill from the left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthBar {
    pub origin: Vec2,
    pub size: Vec2,
    /// Fill fraction, 0.0 - 1.0
    pub fill: f32,
}

impl HealthBar {
    fn for_fighter(fighter: &Fighter, max_health: u32) -> Self {
        let fill = fighter.health() as f32 / max_health as f32;
        Self {
            origin: HEALTH_BAR_ORIGINS[fighter.slot().index()],
            size: HEALTH_BAR_SIZE,
            fill: fill.clamp(0.0, 1.0),
        }
    }

    /// Width of the red part
    pub fn fill_width(&self) -> f32 {
        self.size.x * self.fill
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreText {
    pub value: u32,
    pub position: Vec2,
}

/// Everything drawn over the arena
#[derive(Debug, Clone, PartialEq)]
pub struct HudModel {
    pub health_bars: [HealthBar; 2],
    pub scores: [ScoreText; 2],
    /// Countdown digit while the intro is running (never the initial value)
    pub countdown: Option<u32>,
    /// Sole survivor of a finished round
    pub victory: Option<PlayerSlot>,
}

impl HudModel {
    pub fn new(state: &MatchState) -> Self {
        let max_health = state.tuning.max_health;
        let round = &state.round;

        let countdown = (round.phase == RoundPhase::Intro
            && round.intro_counter > 0
            && round.intro_counter < state.tuning.intro_count)
            .then_some(round.intro_counter);

        let victory = if round.is_round_over() {
            let alive: Vec<PlayerSlot> = PlayerSlot::ALL
                .into_iter()
                .filter(|slot| state.fighter(*slot).is_alive())
                .collect();
            match alive.as_slice() {
                [winner] => Some(*winner),
                _ => None,
            }
        } else {
            None
        };

        Self {
            health_bars: PlayerSlot::ALL
                .map(|slot| HealthBar::for_fighter(state.fighter(slot), max_health)),
            scores: PlayerSlot::ALL.map(|slot| ScoreText {
                value: round.score_of(slot),
                position: SCORE_POSITIONS[slot.index()],
            }),
            countdown,
            victory,
        }
    }
}

/// Debug outlines: every body, plus the hitbox of any fighter mid-swing
pub fn hitbox_overlay(state: &MatchState, settings: &Settings) -> Vec<(Rect, [f32; 4])> {
    if !settings.show_hitboxes {
        return Vec::new();
    }
    let mut outlines = Vec::with_capacity(4);
    for fighter in &state.fighters {
        outlines.push((fighter.body(), colors::BODY_OUTLINE));
        if fighter.combat().attacking.is_some() {
            let hitbox = attack_hitbox(&fighter.body(), fighter.facing(), state.tuning.attack_reach);
            outlines.push((hitbox, colors::HITBOX_OUTLINE));
        }
    }
    outlines
}
