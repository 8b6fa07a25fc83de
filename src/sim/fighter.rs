//! A single combatant
//!
//! Owns position, vertical velocity, combat flags and animation state. The
//! only way another fighter affects it is through `apply_damage`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::{ActionInputs, AnimationState, AttackKind, ClipEnd, derive_action};
use super::combat::{ApplyDamage, AttackOutcome, resolve_attack};
use super::rect::Rect;
use super::state::PlayerSlot;
use super::tick::FighterIntent;
use crate::character::CharacterData;
use crate::error::CharacterError;
use crate::tuning::Tuning;

/// Direction a fighter faces; derived each frame from the opponent's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Sprites are drawn facing right; left means mirrored
    pub fn is_flipped(self) -> bool {
        self == Facing::Left
    }
}

/// Start-of-round placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    /// Top-left corner of the bounding box
    pub position: Vec2,
    pub facing: Facing,
}

impl Spawn {
    pub fn new(position: Vec2, facing: Facing) -> Self {
        Self { position, facing }
    }
}

/// Health and attack bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatState {
    /// Set while an attack clip plays, holding the attack that started it
    pub attacking: Option<AttackKind>,
    /// Frames until another attack may start
    pub attack_cooldown: u32,
    /// Set by a landed hit, cleared when the hit reaction finishes
    pub hit: bool,
    pub health: u32,
    pub alive: bool,
}

impl CombatState {
    fn fresh(max_health: u32) -> Self {
        Self {
            attacking: None,
            attack_cooldown: 0,
            hit: false,
            health: max_health,
            alive: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    slot: PlayerSlot,
    character: CharacterData,
    tuning: Tuning,
    body: Rect,
    vel_y: f32,
    facing: Facing,
    running: bool,
    airborne: bool,
    combat: CombatState,
    animation: AnimationState,
}

impl Fighter {
    /// Build a fighter at its spawn. Fails if the character record is unusable.
    pub fn new(
        slot: PlayerSlot,
        spawn: Spawn,
        character: CharacterData,
        tuning: Tuning,
    ) -> Result<Self, CharacterError> {
        character.validate()?;
        let mut fighter = Self {
            slot,
            character,
            tuning,
            body: Rect::default(),
            vel_y: 0.0,
            facing: spawn.facing,
            running: false,
            airborne: false,
            combat: CombatState::fresh(tuning.max_health),
            animation: AnimationState::default(),
        };
        fighter.reset(spawn);
        Ok(fighter)
    }

    /// Re-initialize all mutable state for a new round
    pub fn reset(&mut self, spawn: Spawn) {
        self.body = Rect::new(
            spawn.position.x,
            spawn.position.y,
            self.tuning.body_width,
            self.tuning.body_height,
        );
        self.facing = spawn.facing;
        self.vel_y = 0.0;
        self.running = false;
        self.airborne = false;
        self.combat = CombatState::fresh(self.tuning.max_health);
        self.animation = AnimationState::default();
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    pub fn character(&self) -> &CharacterData {
        &self.character
    }

    pub fn body(&self) -> Rect {
        self.body
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn vel_y(&self) -> f32 {
        self.vel_y
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn combat(&self) -> &CombatState {
        &self.combat
    }

    pub fn health(&self) -> u32 {
        self.combat.health
    }

    pub fn is_alive(&self) -> bool {
        self.combat.alive
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Physics and input for one frame.
    ///
    /// With `controls_locked`, while attacking, or when dead, intent is ignored
    /// and only gravity, arena clamping and facing apply. Returns the outcome
    /// of an attack started this frame; any damage in it is for `opponent`.
    pub fn move_step(
        &mut self,
        intent: &FighterIntent,
        arena: Vec2,
        opponent: &Fighter,
        controls_locked: bool,
    ) -> Option<AttackOutcome> {
        let mut dx = 0.0;
        let mut outcome = None;
        self.running = false;

        if self.combat.attacking.is_none() && self.combat.alive && !controls_locked {
            // Independent checks: right wins when both are held
            if intent.move_left {
                dx = -self.tuning.run_speed;
                self.running = true;
            }
            if intent.move_right {
                dx = self.tuning.run_speed;
                self.running = true;
            }
            if intent.jump && !self.airborne {
                self.vel_y = self.tuning.jump_velocity;
                self.airborne = true;
            }
            if let Some(kind) = intent.attack_kind() {
                outcome = self.attack(kind, opponent);
            }
        }

        self.vel_y += self.tuning.gravity;
        let mut dy = self.vel_y;

        if self.body.left + dx < 0.0 {
            dx = -self.body.left;
        }
        if self.body.right() + dx > arena.x {
            dx = arena.x - self.body.right();
        }
        let ground = arena.y - self.tuning.ground_margin;
        if self.body.bottom() + dy > ground {
            self.vel_y = 0.0;
            self.airborne = false;
            dy = ground - self.body.bottom();
        }

        self.facing = if opponent.body.left > self.body.left {
            Facing::Right
        } else {
            Facing::Left
        };

        self.combat.attack_cooldown = self.combat.attack_cooldown.saturating_sub(1);
        self.body.translate(Vec2::new(dx, dy));
        outcome
    }

    /// Start a swing at `opponent` unless the cooldown is still running.
    ///
    /// Does not arm the cooldown; that happens when the attack clip ends.
    pub fn attack(&mut self, kind: AttackKind, opponent: &Fighter) -> Option<AttackOutcome> {
        if self.combat.attack_cooldown != 0 {
            return None;
        }
        self.combat.attacking = Some(kind);
        let outcome = resolve_attack(
            self.slot,
            &self.body,
            self.facing,
            &opponent.body,
            self.tuning.attack_reach,
            self.tuning.attack_damage,
        );
        if outcome.connected() {
            log::debug!("{:?} hit {:?}", self.slot, opponent.slot);
        }
        Some(outcome)
    }

    /// Take a landed hit
    pub fn apply_damage(&mut self, damage: ApplyDamage) {
        debug_assert_ne!(damage.source, self.slot, "fighter cannot damage itself");
        self.combat.health = self.combat.health.saturating_sub(damage.amount);
        self.combat.hit = true;
    }

    /// Death check and animation for one frame
    pub fn update(&mut self, dt: f32) {
        if self.combat.health == 0 {
            self.combat.alive = false;
        }

        let action = derive_action(&ActionInputs {
            dead: !self.combat.alive,
            hit: self.combat.hit,
            attack: self.combat.attacking,
            airborne: self.airborne,
            running: self.running,
        });
        let frame_count = self.character.frame_count(action);

        match self.animation.advance(
            action,
            dt,
            self.tuning.frame_interval,
            frame_count,
            !self.combat.alive,
        ) {
            Some(ClipEnd::AttackFinished) => {
                self.combat.attacking = None;
                self.combat.attack_cooldown = self.tuning.attack_cooldown_frames;
            }
            Some(ClipEnd::HitFinished) => {
                self.combat.hit = false;
                self.combat.attacking = None;
            }
            Some(ClipEnd::Frozen | ClipEnd::Looped) | None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::roster;
    use crate::sim::Action;
    use proptest::prelude::*;

    const ARENA: Vec2 = Vec2::new(1000.0, 540.0);
    /// Exceeds the frame interval, so every same-action update advances one frame
    const DT: f32 = 0.1;

    fn fighter_at(slot: PlayerSlot, x: f32, facing: Facing) -> Fighter {
        Fighter::new(
            slot,
            Spawn::new(Vec2::new(x, 290.0), facing),
            roster()[0].clone(),
            Tuning::default(),
        )
        .unwrap()
    }

    fn pair(p1_x: f32, p2_x: f32) -> (Fighter, Fighter) {
        (
            fighter_at(PlayerSlot::One, p1_x, Facing::Right),
            fighter_at(PlayerSlot::Two, p2_x, Facing::Left),
        )
    }

    fn attack_intent() -> FighterIntent {
        FighterIntent {
            attack_primary: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_standing_on_ground_stays_put() {
        let (mut p1, p2) = pair(100.0, 800.0);
        p1.move_step(&FighterIntent::default(), ARENA, &p2, false);
        assert_eq!(p1.body().top, 290.0);
        assert_eq!(p1.vel_y(), 0.0);
        assert!(!p1.is_airborne());
    }

    #[test]
    fn test_right_overrides_left() {
        let (mut p1, p2) = pair(100.0, 800.0);
        let intent = FighterIntent {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        p1.move_step(&intent, ARENA, &p2, false);
        assert_eq!(p1.body().left, 105.0);
        assert!(p1.is_running());
    }

    #[test]
    fn test_clamped_at_left_edge() {
        let (mut p1, p2) = pair(5.0, 800.0);
        let left = FighterIntent {
            move_left: true,
            ..Default::default()
        };
        p1.move_step(&left, ARENA, &p2, false);
        assert_eq!(p1.body().left, 0.0);
        p1.move_step(&left, ARENA, &p2, false);
        assert_eq!(p1.body().left, 0.0);
    }

    #[test]
    fn test_clamped_at_right_edge() {
        let (p1, mut p2) = pair(100.0, 877.0);
        let right = FighterIntent {
            move_right: true,
            ..Default::default()
        };
        p2.move_step(&right, ARENA, &p1, false);
        assert_eq!(p2.body().right(), 1000.0);
    }

    #[test]
    fn test_jump_arc_and_landing() {
        let (mut p1, p2) = pair(100.0, 800.0);
        let jump = FighterIntent {
            jump: true,
            ..Default::default()
        };
        p1.move_step(&jump, ARENA, &p2, false);
        assert!(p1.is_airborne());
        assert_eq!(p1.vel_y(), -28.0);
        assert_eq!(p1.body().top, 262.0);

        // Holding jump mid-air does not re-trigger
        p1.move_step(&jump, ARENA, &p2, false);
        assert_eq!(p1.vel_y(), -26.0);

        for _ in 0..40 {
            p1.move_step(&FighterIntent::default(), ARENA, &p2, false);
        }
        assert!(!p1.is_airborne());
        assert_eq!(p1.body().bottom(), 470.0);
        assert_eq!(p1.vel_y(), 0.0);
    }

    #[test]
    fn test_locked_controls_ignore_intent_but_apply_gravity() {
        let (mut p1, p2) = pair(100.0, 800.0);
        p1.reset(Spawn::new(Vec2::new(100.0, 100.0), Facing::Right));
        let intent = FighterIntent {
            move_right: true,
            jump: true,
            attack_primary: true,
            ..Default::default()
        };
        let outcome = p1.move_step(&intent, ARENA, &p2, true);
        assert!(outcome.is_none());
        assert_eq!(p1.body().left, 100.0);
        assert_eq!(p1.body().top, 102.0);
        assert_eq!(p1.combat().attacking, None);
    }

    #[test]
    fn test_facing_follows_opponent() {
        let (mut p1, p2) = pair(900.0, 300.0);
        assert_eq!(p1.facing(), Facing::Right);
        p1.move_step(&FighterIntent::default(), ARENA, &p2, false);
        assert_eq!(p1.facing(), Facing::Left);
    }

    #[test]
    fn test_attack_connects_and_reports_damage() {
        let (mut p1, mut p2) = pair(100.0, 250.0);
        let outcome = p1.move_step(&attack_intent(), ARENA, &p2, false).unwrap();
        assert_eq!(outcome.hitbox, Rect::new(160.0, 290.0, 180.0, 180.0));
        let damage = outcome.damage.unwrap();
        assert_eq!(p2.health(), 100);
        p2.apply_damage(damage);
        assert_eq!(p2.health(), 90);
        assert!(p2.combat().hit);
        assert_eq!(p1.combat().attacking, Some(AttackKind::Primary));
        // Cooldown is not armed by starting the attack
        assert_eq!(p1.combat().attack_cooldown, 0);
    }

    #[test]
    fn test_attack_miss_has_no_damage() {
        let (mut p1, p2) = pair(100.0, 800.0);
        let outcome = p1.move_step(&attack_intent(), ARENA, &p2, false).unwrap();
        assert!(!outcome.connected());
        assert!(p1.combat().attacking.is_some());
    }

    #[test]
    fn test_attacking_blocks_movement_and_new_swings() {
        let (mut p1, p2) = pair(100.0, 800.0);
        p1.move_step(&attack_intent(), ARENA, &p2, false);
        let intent = FighterIntent {
            move_right: true,
            attack_secondary: true,
            ..Default::default()
        };
        assert!(p1.move_step(&intent, ARENA, &p2, false).is_none());
        assert_eq!(p1.body().left, 100.0);
        assert_eq!(p1.combat().attacking, Some(AttackKind::Primary));
    }

    #[test]
    fn test_secondary_attack_animation() {
        let (mut p1, p2) = pair(100.0, 800.0);
        let intent = FighterIntent {
            attack_secondary: true,
            ..Default::default()
        };
        p1.move_step(&intent, ARENA, &p2, false);
        p1.update(DT);
        assert_eq!(p1.animation().action(), Action::Attack2);
    }

    #[test]
    fn test_cooldown_arms_when_attack_clip_ends() {
        let (mut p1, p2) = pair(100.0, 800.0);
        p1.move_step(&attack_intent(), ARENA, &p2, false);
        let frames = p1.character().frame_count(Action::Attack1);

        // First update switches to the attack clip, then one frame per update
        p1.update(DT);
        assert_eq!(p1.animation().action(), Action::Attack1);
        for _ in 0..frames - 1 {
            p1.update(DT);
            assert_eq!(p1.combat().attack_cooldown, 0);
            assert!(p1.combat().attacking.is_some());
        }
        p1.update(DT);
        assert_eq!(p1.combat().attacking, None);
        assert_eq!(p1.combat().attack_cooldown, 25);

        // Cooldown counts down one per move and gates new swings
        p1.move_step(&FighterIntent::default(), ARENA, &p2, false);
        assert_eq!(p1.combat().attack_cooldown, 24);
        assert!(p1.move_step(&attack_intent(), ARENA, &p2, false).is_none());
        assert_eq!(p1.combat().attacking, None);
    }

    #[test]
    fn test_attack_on_cooldown_leaves_opponent_alone() {
        let (mut p1, mut p2) = pair(100.0, 250.0);
        p1.combat.attack_cooldown = 3;
        assert!(p1.attack(AttackKind::Primary, &p2).is_none());
        assert_eq!(p1.combat().attacking, None);
        p2.update(DT);
        assert_eq!(p2.health(), 100);
        assert!(!p2.combat().hit);
    }

    #[test]
    fn test_hit_interrupts_attack_animation() {
        let (mut p1, mut p2) = pair(100.0, 250.0);
        p2.move_step(&attack_intent(), ARENA, &p1, false);
        p2.update(DT);
        let damage = p1.move_step(&attack_intent(), ARENA, &p2, false).unwrap().damage.unwrap();
        p2.apply_damage(damage);
        p2.update(DT);
        assert_eq!(p2.animation().action(), Action::Hit);

        let frames = p2.character().frame_count(Action::Hit);
        for _ in 0..frames {
            p2.update(DT);
        }
        assert!(!p2.combat().hit);
        assert_eq!(p2.combat().attacking, None);
        // Interrupted swing does not arm the cooldown
        assert_eq!(p2.combat().attack_cooldown, 0);
    }

    #[test]
    fn test_death_has_priority_and_freezes() {
        let (mut p1, _) = pair(100.0, 800.0);
        for _ in 0..10 {
            p1.apply_damage(ApplyDamage {
                amount: 10,
                source: PlayerSlot::Two,
            });
        }
        assert_eq!(p1.health(), 0);
        assert!(p1.combat().hit);
        p1.update(DT);
        assert!(!p1.is_alive());
        assert_eq!(p1.animation().action(), Action::Death);

        let frames = p1.character().frame_count(Action::Death);
        for _ in 0..frames * 2 {
            p1.update(DT);
        }
        assert_eq!(p1.animation().action(), Action::Death);
        assert_eq!(p1.animation().frame_index(), frames - 1);
    }

    #[test]
    fn test_dead_fighter_ignores_intent() {
        let (mut p1, p2) = pair(100.0, 250.0);
        p1.apply_damage(ApplyDamage {
            amount: 500,
            source: PlayerSlot::Two,
        });
        p1.update(DT);
        assert!(p1.move_step(&attack_intent(), ARENA, &p2, false).is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (mut p1, p2) = pair(100.0, 250.0);
        let jump_attack = FighterIntent {
            jump: true,
            move_right: true,
            ..Default::default()
        };
        p1.move_step(&jump_attack, ARENA, &p2, false);
        p1.apply_damage(ApplyDamage {
            amount: 30,
            source: PlayerSlot::Two,
        });
        p1.update(DT);

        let spawn = Spawn::new(Vec2::new(100.0, 290.0), Facing::Right);
        p1.reset(spawn);
        let first = p1.clone();
        p1.reset(spawn);

        assert_eq!(p1.body(), first.body());
        assert_eq!(p1.combat(), first.combat());
        assert_eq!(p1.animation(), first.animation());
        assert_eq!(p1.health(), 100);
        assert_eq!(p1.animation().action(), Action::Idle);
        assert_eq!(p1.vel_y(), 0.0);
    }

    fn intent_strategy() -> impl Strategy<Value = FighterIntent> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(move_left, move_right, jump, attack_primary, attack_secondary)| FighterIntent {
                move_left,
                move_right,
                jump,
                attack_primary,
                attack_secondary,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_fighters_stay_in_arena_and_health_never_rises(
            script in prop::collection::vec((intent_strategy(), intent_strategy()), 1..300),
            dt in 0.005f32..0.2,
        ) {
            let (mut p1, mut p2) = pair(100.0, 800.0);
            for (i1, i2) in &script {
                let h1 = p1.health();
                let h2 = p2.health();
                if let Some(damage) = p1.move_step(i1, ARENA, &p2, false).and_then(|o| o.damage) {
                    p2.apply_damage(damage);
                }
                if let Some(damage) = p2.move_step(i2, ARENA, &p1, false).and_then(|o| o.damage) {
                    p1.apply_damage(damage);
                }
                p1.update(dt);
                p2.update(dt);

                for f in [&p1, &p2] {
                    prop_assert!(f.body().left >= 0.0);
                    prop_assert!(f.body().right() <= ARENA.x);
                    prop_assert!(f.body().bottom() <= ARENA.y - 70.0);
                    prop_assert!(f.health() <= 100);
                    prop_assert_eq!(f.is_alive(), f.health() > 0);
                }
                prop_assert!(p1.health() <= h1);
                prop_assert!(p2.health() <= h2);
            }
        }
    }
}
