//! Attack hitboxes and hit resolution
//!
//! A swing never writes into the opponent directly. Resolution produces an
//! `ApplyDamage` message that the caller hands to the target, so each fighter
//! stays the only writer of its own state.

use serde::{Deserialize, Serialize};

use super::fighter::Facing;
use super::rect::Rect;
use super::state::PlayerSlot;

/// Damage to be applied to the opponent of `source`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyDamage {
    pub amount: u32,
    pub source: PlayerSlot,
}

/// Result of a swing that actually started
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackOutcome {
    /// Hitbox the swing was tested with
    pub hitbox: Rect,
    /// Present only when the hitbox overlapped the target
    pub damage: Option<ApplyDamage>,
}

impl AttackOutcome {
    pub fn connected(&self) -> bool {
        self.damage.is_some()
    }
}

/// Hitbox for an attacker's body.
///
/// Width is `reach` body widths, height matches the body. The box starts at
/// the body's horizontal center and extends in the facing direction, so a
/// 1.5 reach covers half the body plus one body width in front.
pub fn attack_hitbox(body: &Rect, facing: Facing, reach: f32) -> Rect {
    let width = body.width * reach;
    let center_x = body.left + body.width * 0.5;
    let left = match facing {
        Facing::Right => center_x,
        Facing::Left => center_x - width,
    };
    Rect::new(left, body.top, width, body.height)
}

/// Test a swing against the target's body
pub fn resolve_attack(
    source: PlayerSlot,
    body: &Rect,
    facing: Facing,
    target: &Rect,
    reach: f32,
    damage: u32,
) -> AttackOutcome {
    let hitbox = attack_hitbox(body, facing, reach);
    let damage = hitbox.intersects(target).then_some(ApplyDamage {
        amount: damage,
        source,
    });
    AttackOutcome { hitbox, damage }
}
