//! Arena Shooter - a fixed-tick arcade shooter.
//!
//! Core modules:
//! - `entities`: pure data (actors, sprites, round state)
//! - `collision`: AABB overlap test
//! - `compute`: per-tick simulation steps
//! - `round`: round controller and its phase state machine
//! - `input`: key events -> per-frame input snapshots
//! - `assets`: background loading with a flat-fill fallback

pub mod assets;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod round;

pub use config::GameConfig;
pub use round::{Game, Outcome, Phase};
