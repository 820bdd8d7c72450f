//! Round controller: owns the live round and walks it through its phases.
//!
//! ```text
//! Running ──terminal──▶ Ending ──delay──▶ AwaitingRestartChoice ──confirm──▶ Running
//!    │                    │                        │
//!    └────────────────────┴──── quit ──────────────┴──decline/quit──▶ Exit
//! ```
use rand::Rng;

use crate::compute::{evaluate_terminal, init_round, tick};
use crate::config::GameConfig;
use crate::entities::RoundState;
use crate::input::{FrameInput, RestartChoice};

pub use crate::entities::Outcome;

pub const RESTART_PROMPT: &str = "Play again? (Y/N)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// End message on screen; simulation paused.
    Ending { outcome: Outcome, ticks_left: u32 },
    AwaitingRestartChoice { outcome: Outcome },
    Exit,
}

impl Phase {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Ending { outcome, .. } | Phase::AwaitingRestartChoice { outcome } => {
                Some(*outcome)
            }
            Phase::Running | Phase::Exit => None,
        }
    }
}

pub struct Game<R: Rng> {
    config: GameConfig,
    round: RoundState,
    phase: Phase,
    rng: R,
    rounds_played: u32,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        let round = init_round(&config);
        log::info!("round 1 started");
        Self {
            config,
            round,
            phase: Phase::Running,
            rng,
            rounds_played: 1,
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Direct access for setting up specific situations.
    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Exit
    }

    /// Advance by one frame of input and return the resulting phase.
    pub fn update(&mut self, input: &FrameInput) -> Phase {
        if input.quit_requested {
            if self.phase != Phase::Exit {
                log::info!("quit requested");
            }
            self.phase = Phase::Exit;
            return self.phase;
        }

        let phase = self.phase;
        self.phase = match phase {
            Phase::Running => self.run_tick(input),
            Phase::Ending {
                outcome,
                ticks_left,
            } => {
                if ticks_left <= 1 {
                    Phase::AwaitingRestartChoice { outcome }
                } else {
                    Phase::Ending {
                        outcome,
                        ticks_left: ticks_left - 1,
                    }
                }
            }
            Phase::AwaitingRestartChoice { outcome } => match input.choice {
                Some(RestartChoice::Confirm) => {
                    self.restart();
                    Phase::Running
                }
                Some(RestartChoice::Decline) => {
                    log::info!("restart declined");
                    Phase::Exit
                }
                None => Phase::AwaitingRestartChoice { outcome },
            },
            Phase::Exit => Phase::Exit,
        };
        self.phase
    }

    fn run_tick(&mut self, input: &FrameInput) -> Phase {
        self.round = tick(&self.round, &input.held, &mut self.rng);
        match evaluate_terminal(&self.round, self.config.win_score) {
            Some(outcome) => {
                log::info!(
                    "round {} over: {} (score={}, lives={}, tick={})",
                    self.rounds_played,
                    outcome.message(),
                    self.round.score(),
                    self.round.lives(),
                    self.round.tick
                );
                Phase::Ending {
                    outcome,
                    ticks_left: self.config.ending_delay_ticks,
                }
            }
            None => Phase::Running,
        }
    }

    /// Swap in a brand-new round; nothing from the old one carries over.
    fn restart(&mut self) {
        self.round = init_round(&self.config);
        self.rounds_played += 1;
        log::info!("round {} started", self.rounds_played);
    }
}
