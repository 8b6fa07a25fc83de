//! Per-frame simulation tick
//!
//! Runs the round cycle: intro countdown, combat, round-over pause, reset.
//! Each tick is strictly sequential: player one moves and its swing is
//! applied before player two moves, then both animate, then the round is
//! checked.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::AttackKind;
use super::fighter::Fighter;
use super::state::{GameEvent, MatchState, PlayerSlot, RoundPhase};

/// Slack for timers accumulated from non-representable steps (60 * 1/60 < 1.0)
const TIMER_EPSILON: f32 = 1e-4;

/// Decoded input for one fighter for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterIntent {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub attack_primary: bool,
    pub attack_secondary: bool,
}

impl FighterIntent {
    /// Attack requested this frame; primary wins when both are held
    pub fn attack_kind(&self) -> Option<AttackKind> {
        if self.attack_primary {
            Some(AttackKind::Primary)
        } else if self.attack_secondary {
            Some(AttackKind::Secondary)
        } else {
            None
        }
    }
}

/// Input commands for a single tick, indexed by `PlayerSlot::index`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub players: [FighterIntent; 2],
}

impl TickInput {
    pub fn new(p1: FighterIntent, p2: FighterIntent) -> Self {
        Self { players: [p1, p2] }
    }

    pub fn intent(&self, slot: PlayerSlot) -> &FighterIntent {
        &self.players[slot.index()]
    }
}

/// Advance the match by one frame of `dt` seconds
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    // Decided before the intro advances, so the frame the countdown ends is
    // still locked
    let locked = state.round.controls_locked();
    if state.round.phase == RoundPhase::Intro {
        advance_intro(state, dt);
    }

    let arena = state.arena;
    let [p1, p2] = &mut state.fighters;
    step_fighter(p1, p2, input.intent(PlayerSlot::One), arena, locked, &mut state.events);
    step_fighter(p2, p1, input.intent(PlayerSlot::Two), arena, locked, &mut state.events);

    p1.update(dt);
    p2.update(dt);

    if state.round.is_round_over() {
        state.round.round_over_elapsed += dt;
        if state.round.round_over_elapsed + TIMER_EPSILON >= state.tuning.round_over_delay {
            state.reset_round();
        }
    } else {
        check_round_over(state);
    }
}

/// Move one fighter and apply any damage its swing dealt to the other
fn step_fighter(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    intent: &FighterIntent,
    arena: Vec2,
    locked: bool,
    events: &mut Vec<GameEvent>,
) {
    let Some(outcome) = attacker.move_step(intent, arena, defender, locked) else {
        return;
    };
    events.push(GameEvent::Swing {
        attacker: attacker.slot(),
    });
    if let Some(damage) = outcome.damage {
        defender.apply_damage(damage);
        events.push(GameEvent::Hit {
            attacker: attacker.slot(),
            amount: damage.amount,
            target_health: defender.health(),
        });
    }
}

fn advance_intro(state: &mut MatchState, dt: f32) {
    let round = &mut state.round;
    round.intro_timer += dt;
    if round.intro_timer + TIMER_EPSILON < state.tuning.intro_step {
        return;
    }
    if round.intro_counter == state.tuning.intro_count {
        state.events.push(GameEvent::IntroStarted);
    }
    round.intro_counter = round.intro_counter.saturating_sub(1);
    // Carry the remainder so steps stay on a fixed cadence
    round.intro_timer = (round.intro_timer - state.tuning.intro_step).max(0.0);
    if round.intro_counter == 0 {
        round.phase = RoundPhase::Active;
        log::info!("Round {} fight!", round.round);
        state.events.push(GameEvent::RoundStarted { round: round.round });
    }
}

/// Score every death and enter the round-over pause
fn check_round_over(state: &mut MatchState) {
    let winners: Vec<PlayerSlot> = PlayerSlot::ALL
        .into_iter()
        .filter(|slot| !state.fighter(*slot).is_alive())
        .map(PlayerSlot::opponent)
        .collect();
    if winners.is_empty() {
        return;
    }

    for winner in &winners {
        state.round.score[winner.index()] += 1;
    }
    state.round.phase = RoundPhase::RoundOver;
    state.round.round_over_elapsed = 0.0;
    log::info!(
        "Round {} over, winners {:?}, score {} - {}",
        state.round.round,
        winners,
        state.round.score[0],
        state.round.score[1]
    );
    state.events.push(GameEvent::RoundOver { winners });
}
