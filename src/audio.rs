//! Audio cue routing
//!
//! The simulation only reports events. This module turns them into concrete
//! asset ids (per character for attacks) and hands them to whatever backend
//! actually plays sound.

use crate::settings::Settings;
use crate::sim::{GameEvent, MatchState, PlayerSlot};

/// Shared intro countdown sound
pub const INTRO_SOUND: &str = "music/321fight.mp3";
/// Looping background track
pub const MUSIC_TRACK: &str = "music/bgmusic.mp3";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// An attack started (plays on hits and misses alike)
    Swing(PlayerSlot),
    /// An attack connected
    Hit(PlayerSlot),
    /// "3, 2, 1, fight"
    Intro,
}

impl SoundEffect {
    /// Sound for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::IntroStarted => Some(SoundEffect::Intro),
            GameEvent::Swing { attacker } => Some(SoundEffect::Swing(*attacker)),
            GameEvent::Hit { attacker, .. } => Some(SoundEffect::Hit(*attacker)),
            GameEvent::RoundStarted { .. }
            | GameEvent::RoundOver { .. }
            | GameEvent::RoundReset { .. } => None,
        }
    }
}

/// Something that can play an asset
pub trait AudioBackend {
    /// Fire-and-forget a sound effect
    fn play(&mut self, asset: &str, volume: f32);
    /// Start a looping track
    fn play_music(&mut self, asset: &str, volume: f32);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, asset: &str, volume: f32) {
        log::debug!("sfx {asset} @ {volume:.2}");
    }

    fn play_music(&mut self, asset: &str, volume: f32) {
        log::debug!("music {asset} @ {volume:.2}");
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    sfx_volume: f32,
    music_volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        Self {
            sfx_volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
        }
    }

    /// Pick up changed volumes / mute
    pub fn apply_settings(&mut self, settings: &Settings) {
        *self = Self::new(settings);
    }

    /// Asset id for an effect; attack sounds come from the attacker's character
    pub fn asset_for<'a>(&self, effect: SoundEffect, state: &'a MatchState) -> &'a str {
        match effect {
            SoundEffect::Swing(slot) => state.fighter(slot).character().miss_sound.as_str(),
            SoundEffect::Hit(slot) => state.fighter(slot).character().attack_sound.as_str(),
            SoundEffect::Intro => INTRO_SOUND,
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect, state: &MatchState, backend: &mut dyn AudioBackend) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        backend.play(self.asset_for(effect, state), self.sfx_volume);
    }

    /// Play every sound produced by the most recent tick, in order
    pub fn play_events(&self, state: &MatchState, backend: &mut dyn AudioBackend) {
        for effect in state.events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect, state, backend);
        }
    }

    pub fn start_music(&self, backend: &mut dyn AudioBackend) {
        if self.music_volume > 0.0 {
            backend.play_music(MUSIC_TRACK, self.music_volume);
        }
    }
}
