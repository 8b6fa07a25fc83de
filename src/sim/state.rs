//! Match state and core simulation types
//!
//! Everything a renderer or audio layer needs to read after a tick lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::fighter::{Facing, Fighter, Spawn};
use crate::character::CharacterData;
use crate::consts::*;
use crate::error::CharacterError;
use crate::tuning::Tuning;

/// Which side of the keyboard a fighter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub fn opponent(self) -> PlayerSlot {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

/// Current phase of the round cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Countdown running, controls locked
    Intro,
    /// Fighting
    Active,
    /// A fighter died; waiting to reset
    RoundOver,
}

/// Round bookkeeping owned by the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// Countdown value, decremented once per intro step
    pub intro_counter: u32,
    /// Seconds since the last countdown step
    pub intro_timer: f32,
    /// Seconds since the round ended
    pub round_over_elapsed: f32,
    /// Rounds won, indexed by `PlayerSlot::index`
    pub score: [u32; 2],
    /// 1-based round number
    pub round: u32,
}

impl RoundState {
    pub fn new(intro_count: u32) -> Self {
        let mut round = Self {
            phase: RoundPhase::Intro,
            intro_counter: 0,
            intro_timer: 0.0,
            round_over_elapsed: 0.0,
            score: [0, 0],
            round: 1,
        };
        round.start_intro(intro_count);
        round
    }

    /// Enter the intro countdown (a zero count skips straight to combat)
    pub fn start_intro(&mut self, intro_count: u32) {
        self.intro_counter = intro_count;
        self.intro_timer = 0.0;
        self.round_over_elapsed = 0.0;
        self.phase = if intro_count == 0 {
            RoundPhase::Active
        } else {
            RoundPhase::Intro
        };
    }

    pub fn is_round_over(&self) -> bool {
        self.phase == RoundPhase::RoundOver
    }

    /// Movement and attack intent are ignored outside `Active`
    pub fn controls_locked(&self) -> bool {
        self.phase != RoundPhase::Active
    }

    pub fn score_of(&self, slot: PlayerSlot) -> u32 {
        self.score[slot.index()]
    }
}

/// Something that happened during a tick, for audio and UI layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First countdown step of a round
    IntroStarted,
    /// Countdown finished, fighting begins
    RoundStarted { round: u32 },
    /// A fighter started an attack (plays whether or not it lands)
    Swing { attacker: PlayerSlot },
    /// An attack connected
    Hit {
        attacker: PlayerSlot,
        amount: u32,
        target_health: u32,
    },
    /// One or both fighters died; `winners` got a point each
    RoundOver { winners: Vec<PlayerSlot> },
    /// Fighters were put back at their spawns
    RoundReset { round: u32 },
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Fighters indexed by `PlayerSlot::index`
    pub fighters: [Fighter; 2],
    pub round: RoundState,
    /// Arena (window) size; fighters are clamped inside it
    pub arena: Vec2,
    /// Where each fighter starts every round
    pub spawns: [Spawn; 2],
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl MatchState {
    /// Create a match on the default arena with the default spawns
    pub fn new(
        p1: CharacterData,
        p2: CharacterData,
        tuning: Tuning,
    ) -> Result<Self, CharacterError> {
        Self::with_arena(p1, p2, tuning, crate::default_arena())
    }

    pub fn with_arena(
        p1: CharacterData,
        p2: CharacterData,
        tuning: Tuning,
        arena: Vec2,
    ) -> Result<Self, CharacterError> {
        let spawns = [
            Spawn::new(Vec2::new(P1_SPAWN_X, P1_SPAWN_Y), Facing::Right),
            Spawn::new(Vec2::new(P2_SPAWN_X, P2_SPAWN_Y), Facing::Left),
        ];
        let fighters = [
            Fighter::new(PlayerSlot::One, spawns[0], p1, tuning)?,
            Fighter::new(PlayerSlot::Two, spawns[1], p2, tuning)?,
        ];
        Ok(Self {
            fighters,
            round: RoundState::new(tuning.intro_count),
            arena,
            spawns,
            tuning,
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    pub fn fighter(&self, slot: PlayerSlot) -> &Fighter {
        &self.fighters[slot.index()]
    }

    /// Put both fighters back at their spawns and restart the intro
    pub fn reset_round(&mut self) {
        for (fighter, spawn) in self.fighters.iter_mut().zip(self.spawns) {
            fighter.reset(spawn);
        }
        self.round.round += 1;
        self.round.start_intro(self.tuning.intro_count);
        log::info!(
            "Round {} (score {} - {})",
            self.round.round,
            self.round.score[0],
            self.round.score[1]
        );
        self.events.push(GameEvent::RoundReset {
            round: self.round.round,
        });
    }
}
