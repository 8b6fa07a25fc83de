//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the `dt` handed to `tick`
//! - Player one is always processed before player two
//! - No rendering, audio or platform dependencies

pub mod animation;
pub mod combat;
pub mod fighter;
pub mod rect;
pub mod state;
pub mod tick;

pub use animation::{Action, ActionInputs, AnimationState, AttackKind, ClipEnd, derive_action};
pub use combat::{ApplyDamage, AttackOutcome, attack_hitbox, resolve_attack};
pub use fighter::{CombatState, Facing, Fighter, Spawn};
pub use rect::Rect;
pub use state::{GameEvent, MatchState, PlayerSlot, RoundPhase, RoundState};
pub use tick::{FighterIntent, TickInput, tick};
