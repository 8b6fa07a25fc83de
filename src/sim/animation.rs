//! Animation state derivation and frame advance
//!
//! The displayed action is derived every frame from the fighter's physical and
//! combat flags by a ranked rule list: the first rule that matches wins. The
//! frame index advances on a fixed wall-time cadence, and what happens at the
//! end of a clip feeds back into combat state (attacks end, cooldown arms).

use serde::{Deserialize, Serialize};

/// Discrete animation category, in sprite sheet row order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    Idle,
    Run,
    Jump,
    Attack1,
    Attack2,
    Hit,
    Death,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Idle,
        Action::Run,
        Action::Jump,
        Action::Attack1,
        Action::Attack2,
        Action::Hit,
        Action::Death,
    ];

    /// Sprite sheet row
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_attack(self) -> bool {
        matches!(self, Action::Attack1 | Action::Attack2)
    }
}

/// Which attack button started the current swing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackKind {
    Primary,
    Secondary,
}

impl AttackKind {
    pub fn action(self) -> Action {
        match self {
            AttackKind::Primary => Action::Attack1,
            AttackKind::Secondary => Action::Attack2,
        }
    }
}

/// The flags an action is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionInputs {
    pub dead: bool,
    pub hit: bool,
    /// Set while an attack clip is playing
    pub attack: Option<AttackKind>,
    pub airborne: bool,
    pub running: bool,
}

/// One ranked rule: returns an action if it applies
pub type ActionRule = fn(&ActionInputs) -> Option<Action>;

/// Highest priority first. A hit fighter shows Hit even mid-attack.
pub const ACTION_RULES: [ActionRule; 6] = [
    death_rule,
    hit_rule,
    attack_rule,
    jump_rule,
    run_rule,
    idle_rule,
];

fn death_rule(s: &ActionInputs) -> Option<Action> {
    s.dead.then_some(Action::Death)
}

fn hit_rule(s: &ActionInputs) -> Option<Action> {
    s.hit.then_some(Action::Hit)
}

fn attack_rule(s: &ActionInputs) -> Option<Action> {
    s.attack.map(AttackKind::action)
}

fn jump_rule(s: &ActionInputs) -> Option<Action> {
    s.airborne.then_some(Action::Jump)
}

fn run_rule(s: &ActionInputs) -> Option<Action> {
    s.running.then_some(Action::Run)
}

fn idle_rule(_: &ActionInputs) -> Option<Action> {
    Some(Action::Idle)
}

/// Evaluate the ranked rules
pub fn derive_action(inputs: &ActionInputs) -> Action {
    ACTION_RULES
        .iter()
        .find_map(|rule| rule(inputs))
        .unwrap_or(Action::Idle)
}

/// What happened when a clip ran past its last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipEnd {
    /// Dead fighter: held on the last frame
    Frozen,
    /// Attack clip finished; the swing is over
    AttackFinished,
    /// Hit reaction finished
    HitFinished,
    /// Any other clip wrapped around
    Looped,
}

/// Current clip and position within it
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationState {
    action: Action,
    frame_index: u32,
    /// Seconds since the last frame advance (or action change)
    frame_timer: f32,
}

impl AnimationState {
    pub fn action(&self) -> Action {
        self.action
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn frame_timer(&self) -> f32 {
        self.frame_timer
    }

    /// Advance by `dt` seconds while showing `action`.
    ///
    /// Switching to a different action restarts the clip and does not advance
    /// this call; re-entering the same action keeps the frame. At most one
    /// frame is advanced per call no matter how large `dt` is.
    pub fn advance(
        &mut self,
        action: Action,
        dt: f32,
        interval: f32,
        frame_count: u32,
        dead: bool,
    ) -> Option<ClipEnd> {
        if action != self.action {
            self.action = action;
            self.frame_index = 0;
            self.frame_timer = 0.0;
            return None;
        }

        self.frame_timer += dt;
        if self.frame_timer <= interval {
            return None;
        }
        self.frame_timer = 0.0;
        self.frame_index += 1;
        if self.frame_index < frame_count {
            return None;
        }

        if dead {
            self.frame_index = frame_count.saturating_sub(1);
            return Some(ClipEnd::Frozen);
        }
        self.frame_index = 0;
        Some(match action {
            a if a.is_attack() => ClipEnd::AttackFinished,
            Action::Hit => ClipEnd::HitFinished,
            _ => ClipEnd::Looped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: f32 = 0.070;

    #[test]
    fn test_priority_death_over_hit() {
        let inputs = ActionInputs {
            dead: true,
            hit: true,
            attack: Some(AttackKind::Primary),
            airborne: true,
            running: true,
        };
        assert_eq!(derive_action(&inputs), Action::Death);
    }

    #[test]
    fn test_priority_hit_over_attack() {
        let inputs = ActionInputs {
            hit: true,
            attack: Some(AttackKind::Secondary),
            ..Default::default()
        };
        assert_eq!(derive_action(&inputs), Action::Hit);
    }

    #[test]
    fn test_priority_ladder() {
        let attack = ActionInputs {
            attack: Some(AttackKind::Secondary),
            airborne: true,
            running: true,
            ..Default::default()
        };
        assert_eq!(derive_action(&attack), Action::Attack2);

        let jump = ActionInputs {
            airborne: true,
            running: true,
            ..Default::default()
        };
        assert_eq!(derive_action(&jump), Action::Jump);

        let run = ActionInputs {
            running: true,
            ..Default::default()
        };
        assert_eq!(derive_action(&run), Action::Run);
        assert_eq!(derive_action(&ActionInputs::default()), Action::Idle);
    }

    #[test]
    fn test_transition_resets_frame() {
        let mut anim = AnimationState::default();
        anim.advance(Action::Idle, 0.1, INTERVAL, 5, false);
        anim.advance(Action::Idle, 0.1, INTERVAL, 5, false);
        assert_eq!(anim.frame_index(), 2);

        assert_eq!(anim.advance(Action::Run, 0.1, INTERVAL, 8, false), None);
        assert_eq!(anim.action(), Action::Run);
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.frame_timer(), 0.0);
    }

    #[test]
    fn test_same_action_keeps_frame() {
        let mut anim = AnimationState::default();
        anim.advance(Action::Idle, 0.1, INTERVAL, 5, false);
        anim.advance(Action::Idle, 0.03, INTERVAL, 5, false);
        assert_eq!(anim.frame_index(), 1);
        assert!(anim.frame_timer() > 0.0);
    }

    #[test]
    fn test_at_most_one_frame_per_call() {
        let mut anim = AnimationState::default();
        anim.advance(Action::Idle, 10.0, INTERVAL, 5, false);
        assert_eq!(anim.frame_index(), 1);
    }

    #[test]
    fn test_interval_must_be_exceeded() {
        let mut anim = AnimationState::default();
        anim.advance(Action::Idle, 0.05, INTERVAL, 5, false);
        assert_eq!(anim.frame_index(), 0);
        anim.advance(Action::Idle, 0.05, INTERVAL, 5, false);
        assert_eq!(anim.frame_index(), 1);
        assert_eq!(anim.frame_timer(), 0.0);
    }

    #[test]
    fn test_clip_end_policies() {
        let mut anim = AnimationState::default();
        anim.advance(Action::Attack1, 0.1, INTERVAL, 2, false);
        assert_eq!(anim.advance(Action::Attack1, 0.1, INTERVAL, 2, false), None);
        assert_eq!(
            anim.advance(Action::Attack1, 0.1, INTERVAL, 2, false),
            Some(ClipEnd::AttackFinished)
        );
        assert_eq!(anim.frame_index(), 0);

        anim.advance(Action::Hit, 0.1, INTERVAL, 1, false);
        assert_eq!(
            anim.advance(Action::Hit, 0.1, INTERVAL, 1, false),
            Some(ClipEnd::HitFinished)
        );

        anim.advance(Action::Run, 0.1, INTERVAL, 1, false);
        assert_eq!(
            anim.advance(Action::Run, 0.1, INTERVAL, 1, false),
            Some(ClipEnd::Looped)
        );
    }

    #[test]
    fn test_death_freezes_on_last_frame() {
        let mut anim = AnimationState::default();
        anim.advance(Action::Death, 0.1, INTERVAL, 3, true);
        for _ in 0..10 {
            anim.advance(Action::Death, 0.1, INTERVAL, 3, true);
        }
        assert_eq!(anim.frame_index(), 2);
    }
}
