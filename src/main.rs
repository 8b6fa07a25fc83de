//! Pixel Warrior entry point
//!
//! Headless native host: picks two characters, then plays a scripted demo
//! match through the fixed-timestep loop, logging round results and audio
//! cues. A windowed frontend drives the same `Game` with real input.
//!
//! Usage: `pixel-warrior [seed] [tuning.json] [settings.json]`

use std::process::ExitCode;

use pixel_warrior::audio::{AudioManager, LogBackend};
use pixel_warrior::character::{pick_pair, roster};
use pixel_warrior::consts::*;
use pixel_warrior::renderer::HudModel;
use pixel_warrior::sim::{FighterIntent, MatchState, RoundPhase, TickInput, tick};
use pixel_warrior::{Settings, Tuning};

/// Length of the demo in simulated seconds
const DEMO_SECONDS: f32 = 60.0;
/// Stop once this many rounds have been decided
const DEMO_ROUNDS: u32 = 3;

/// Game instance holding all state
struct Game {
    state: MatchState,
    audio: AudioManager,
    backend: LogBackend,
    accumulator: f32,
    input: TickInput,
    last_phase: RoundPhase,
}

impl Game {
    fn new(state: MatchState, settings: &Settings) -> Self {
        let last_phase = state.round.phase;
        Self {
            state,
            audio: AudioManager::new(settings),
            backend: LogBackend,
            accumulator: 0.0,
            input: TickInput::default(),
            last_phase,
        }
    }

    /// Run simulation ticks for `dt` seconds of wall time
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.audio.play_events(&self.state, &mut self.backend);
            self.accumulator -= SIM_DT;
            substeps += 1;

            let phase = self.state.round.phase;
            if phase != self.last_phase {
                log::debug!("Phase {:?} -> {:?}", self.last_phase, phase);
                if phase == RoundPhase::RoundOver {
                    let hud = HudModel::new(&self.state);
                    match hud.victory {
                        Some(winner) => log::info!("{winner:?} wins the round"),
                        None => log::info!("Double knockout"),
                    }
                }
                self.last_phase = phase;
            }
        }
    }

    /// Both fighters walk in and trade blows
    fn scripted_input(&self) -> TickInput {
        let p1 = FighterIntent {
            move_right: true,
            attack_primary: true,
            ..Default::default()
        };
        let p2 = FighterIntent {
            move_left: true,
            attack_secondary: true,
            // Hop now and then so the jump path runs too
            jump: self.state.time_ticks % 180 == 0,
            ..Default::default()
        };
        TickInput::new(p1, p2)
    }

    fn rounds_decided(&self) -> u32 {
        self.state.round.score.iter().sum()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse::<u64>()?,
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs(),
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    log::info!("Pixel Warrior (headless) starting, seed {seed}");
    let (p1, p2) = pick_pair(&roster(), seed)?;
    let state = MatchState::new(p1, p2, tuning)?;
    let mut game = Game::new(state, &settings);
    game.audio.start_music(&mut game.backend);

    let mut elapsed = 0.0;
    while elapsed < DEMO_SECONDS && game.rounds_decided() < DEMO_ROUNDS {
        game.input = game.scripted_input();
        game.update(SIM_DT);
        elapsed += SIM_DT;
    }

    let score = game.state.round.score;
    log::info!(
        "Demo finished after {} ticks: {} - {}",
        game.state.time_ticks,
        score[0],
        score[1]
    );
    println!("{} - {}", score[0], score[1]);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("pixel-warrior: {e}");
            ExitCode::FAILURE
        }
    }
}
