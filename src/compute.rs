//! Per-tick game logic.
//!
//! `tick` takes an immutable reference to the current `RoundState` and
//! returns a brand-new one. The individual steps it chains are public and
//! mutate a state in place so each can be driven on its own. Side effects
//! are limited to the injected RNG.

use rand::Rng;

use crate::collision::collides;
use crate::config::{GameConfig, ACTOR_WIDTH, PLAYER_START_X, PLAYER_START_Y};
use crate::entities::{Arena, Entity, Opponent, Outcome, Player, RoundState};
use crate::input::HeldKeys;

/// What one collision pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub shots_landed: u32,
    pub opponents_destroyed: u32,
    pub player_contacts: u32,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh round: full lives, zero score, no opponents or shots, counter at 0.
pub fn init_round(config: &GameConfig) -> RoundState {
    RoundState {
        player: Player::new(PLAYER_START_X, PLAYER_START_Y),
        opponents: Vec::new(),
        shots: Vec::new(),
        spawn_interval: config.spawn_interval,
        spawn_counter: 0,
        tick: 0,
        arena: Arena {
            width: config.arena_width,
            height: config.arena_height,
        },
    }
}

// ── Tick steps ───────────────────────────────────────────────────────────────

/// Count one tick. When the counter reaches the interval an opponent appears
/// at y = 0 and a random x that keeps it fully on screen, and the counter
/// resets. Returns whether a spawn happened.
pub fn advance_spawner(state: &mut RoundState, rng: &mut impl Rng) -> bool {
    state.spawn_counter += 1;
    if state.spawn_counter < state.spawn_interval {
        return false;
    }
    let max_x = (state.arena.width - ACTOR_WIDTH).max(0);
    let x = rng.gen_range(0..=max_x);
    state.opponents.push(Opponent::new(x, 0));
    state.spawn_counter = 0;
    log::debug!("tick {}: opponent spawned at x={}", state.tick, x);
    true
}

/// Apply every actor's motion rule once.
pub fn advance_actors(state: &mut RoundState, keys: &HeldKeys) {
    let arena = state.arena;
    state.player.advance(keys, arena);
    for shot in &mut state.shots {
        shot.advance(keys, arena);
    }
    for opponent in &mut state.opponents {
        opponent.advance(keys, arena);
    }
}

/// Add the player's shot for this tick, if fire is held.
pub fn fire(state: &mut RoundState, keys: &HeldKeys) {
    if let Some(shot) = state.player.shoot(keys) {
        state.shots.push(shot);
    }
}

/// Shots against opponents, then opponents against the player.
///
/// Removals are collected by index during each sweep and applied once it has
/// finished, so nothing is skipped. A shot hits at most one opponent per tick
/// (the first in collection order not already destroyed this pass).
pub fn resolve_collisions(state: &mut RoundState) -> CollisionReport {
    let mut report = CollisionReport::default();

    // ── Shots ↔ opponents ────────────────────────────────────────────────────
    let mut spent_shots: Vec<usize> = Vec::new();
    let mut destroyed: Vec<usize> = Vec::new();

    for (si, shot) in state.shots.iter().enumerate() {
        let target = state
            .opponents
            .iter()
            .enumerate()
            .find(|(oi, opponent)| !destroyed.contains(oi) && collides(shot, *opponent))
            .map(|(oi, _)| oi);

        let Some(oi) = target else { continue };
        spent_shots.push(si);
        state.player.score += 1;
        report.shots_landed += 1;

        let opponent = &mut state.opponents[oi];
        opponent.lives = opponent.lives.saturating_sub(1);
        if opponent.lives == 0 {
            destroyed.push(oi);
            report.opponents_destroyed += 1;
        }
    }

    // ── Opponents ↔ player ───────────────────────────────────────────────────
    for (oi, opponent) in state.opponents.iter().enumerate() {
        if destroyed.contains(&oi) || !collides(opponent, &state.player) {
            continue;
        }
        // The opponent is consumed; the player only loses a life.
        state.player.lives = state.player.lives.saturating_sub(1);
        destroyed.push(oi);
        report.player_contacts += 1;
    }

    state.shots = without(std::mem::take(&mut state.shots), &spent_shots);
    state.opponents = without(std::mem::take(&mut state.opponents), &destroyed);

    if report != CollisionReport::default() {
        log::debug!(
            "tick {}: {} hit(s), {} contact(s), score={} lives={}",
            state.tick,
            report.shots_landed,
            report.player_contacts,
            state.score(),
            state.lives()
        );
    }
    report
}

/// Drop shots above the top edge and opponents at or past the bottom edge.
pub fn prune_spent(state: &mut RoundState) {
    let bottom = state.arena.height;
    state.shots.retain(|shot| shot.body.y >= 0);
    state.opponents.retain(|opponent| opponent.body.y < bottom);
}

/// Loss is evaluated first and win second, so a win in the same tick as the
/// last life being lost wins.
pub fn evaluate_terminal(state: &RoundState, win_score: u32) -> Option<Outcome> {
    let mut outcome = None;
    if state.lives() == 0 {
        outcome = Some(Outcome::Defeat);
    }
    if state.score() >= win_score {
        outcome = Some(Outcome::Victory);
    }
    outcome
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one tick: spawn, move, fire, collide, prune.
/// Terminal conditions are left to the caller (`evaluate_terminal`).
pub fn tick(state: &RoundState, keys: &HeldKeys, rng: &mut impl Rng) -> RoundState {
    let mut next = state.clone();
    next.tick += 1;

    advance_spawner(&mut next, rng);
    advance_actors(&mut next, keys);
    fire(&mut next, keys);
    resolve_collisions(&mut next);
    prune_spent(&mut next);

    next
}

fn without<T>(items: Vec<T>, removed: &[usize]) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !removed.contains(i))
        .map(|(_, item)| item)
        .collect()
}
