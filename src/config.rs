//! Game constants and the configuration context handed to the round
//! controller and renderer.

use std::path::PathBuf;

// ── Arena & timing ───────────────────────────────────────────────────────────

pub const ARENA_WIDTH: i32 = 800;
pub const ARENA_HEIGHT: i32 = 600;
/// Simulation ticks per second; one tick per rendered frame.
pub const TICK_RATE: u32 = 60;
/// Ticks the end-of-round message stays up before the restart prompt (3 s).
pub const ENDING_DELAY_TICKS: u32 = 3 * TICK_RATE;

// ── Rules ────────────────────────────────────────────────────────────────────

pub const WIN_SCORE: u32 = 100;
/// Ticks between opponent spawns (0.5 s).
pub const SPAWN_INTERVAL: u32 = 30;
pub const PLAYER_LIVES: u32 = 3;
pub const OPPONENT_LIVES: u32 = 1;

// ── Actors ───────────────────────────────────────────────────────────────────

pub const PLAYER_SPEED: i32 = 5;
pub const OPPONENT_SPEED: i32 = 3;
pub const SHOT_SPEED: i32 = 5;

pub const ACTOR_WIDTH: i32 = 50;
pub const ACTOR_HEIGHT: i32 = 50;
pub const SHOT_WIDTH: i32 = 5;
pub const SHOT_HEIGHT: i32 = 10;

pub const PLAYER_START_X: i32 = ARENA_WIDTH / 2;
pub const PLAYER_START_Y: i32 = ARENA_HEIGHT - 60;

// ── Plumbing ─────────────────────────────────────────────────────────────────

pub const CAPTION: &str = "Arena Shooter";
pub const DEFAULT_BACKGROUND: &str = "space_background.txt";
const BACKGROUND_ENV: &str = "SHOOTER_BACKGROUND";
const LOG_ENV: &str = "SHOOTER_LOG";

/// Process-wide settings, owned by the frame driver and passed by reference.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub arena_width: i32,
    pub arena_height: i32,
    pub tick_rate: u32,
    pub spawn_interval: u32,
    pub win_score: u32,
    pub ending_delay_ticks: u32,
    pub background_path: PathBuf,
    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            tick_rate: TICK_RATE,
            spawn_interval: SPAWN_INTERVAL,
            win_score: WIN_SCORE,
            ending_delay_ticks: ENDING_DELAY_TICKS,
            background_path: PathBuf::from(DEFAULT_BACKGROUND),
            log_path: std::env::temp_dir().join("arena_shooter.log"),
        }
    }
}

impl GameConfig {
    /// Defaults, with the asset and log paths overridable from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = std::env::var_os(BACKGROUND_ENV) {
            config.background_path = PathBuf::from(path);
        }
        if let Some(path) = std::env::var_os(LOG_ENV) {
            config.log_path = PathBuf::from(path);
        }
        config
    }
}
