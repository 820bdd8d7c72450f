use arena_shooter::compute::*;
use arena_shooter::config::*;
use arena_shooter::entities::*;
use arena_shooter::input::HeldKeys;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> RoundState {
    init_round(&GameConfig::default())
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn idle() -> HeldKeys {
    HeldKeys::default()
}

fn firing() -> HeldKeys {
    HeldKeys {
        fire: true,
        ..HeldKeys::default()
    }
}

// ── init_round ────────────────────────────────────────────────────────────────

#[test]
fn init_round_player_position() {
    let s = make_state();
    assert_eq!(s.player.body.x, 400); // width / 2
    assert_eq!(s.player.body.y, 540); // height - 60
    assert_eq!(s.lives(), 3);
}

#[test]
fn init_round_empty_collections() {
    let s = make_state();
    assert!(s.opponents.is_empty());
    assert!(s.shots.is_empty());
    assert_eq!(s.score(), 0);
    assert_eq!(s.spawn_counter, 0);
    assert_eq!(s.spawn_interval, SPAWN_INTERVAL);
    assert_eq!(s.tick, 0);
    assert_eq!(s.arena, Arena { width: 800, height: 600 });
}

// ── advance_spawner ───────────────────────────────────────────────────────────

#[test]
fn spawner_counts_up_without_spawning() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    for expected in 1..SPAWN_INTERVAL {
        assert!(!advance_spawner(&mut s, &mut rng));
        assert_eq!(s.spawn_counter, expected);
    }
    assert!(s.opponents.is_empty());
}

#[test]
fn spawner_fires_on_interval_and_resets() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    s.spawn_counter = SPAWN_INTERVAL - 1;
    assert!(advance_spawner(&mut s, &mut rng));
    assert_eq!(s.spawn_counter, 0);
    assert_eq!(s.opponents.len(), 1);

    let o = &s.opponents[0];
    assert_eq!(o.body.y, 0);
    assert!(o.body.x >= 0 && o.body.x <= ARENA_WIDTH - ACTOR_WIDTH);
}

#[test]
fn exactly_one_spawn_per_interval_of_ticks() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    for _ in 0..SPAWN_INTERVAL * 4 {
        s = tick(&s, &idle(), &mut rng);
    }
    // Opponents fall 3/tick, so none can have left the arena yet.
    assert_eq!(s.opponents.len(), 4);
}

// ── fire ──────────────────────────────────────────────────────────────────────

#[test]
fn fire_adds_shot_only_while_held() {
    let mut s = make_state();
    fire(&mut s, &idle());
    assert!(s.shots.is_empty());
    fire(&mut s, &firing());
    assert_eq!(s.shots.len(), 1);
}

#[test]
fn holding_fire_shoots_every_tick() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    for _ in 0..5 {
        s = tick(&s, &firing(), &mut rng);
    }
    assert_eq!(s.shots.len(), 5);
}

// ── resolve_collisions ────────────────────────────────────────────────────────

#[test]
fn shot_on_opponent_removes_both_and_scores() {
    let mut s = make_state();
    s.opponents.push(Opponent::new(100, 100));
    s.shots.push(Shot::new(110, 110));

    let report = resolve_collisions(&mut s);

    assert!(s.opponents.is_empty());
    assert!(s.shots.is_empty());
    assert_eq!(s.score(), 1);
    assert_eq!(report.shots_landed, 1);
    assert_eq!(report.opponents_destroyed, 1);
}

#[test]
fn one_shot_destroys_at_most_one_opponent() {
    let mut s = make_state();
    s.opponents.push(Opponent::new(100, 100));
    s.opponents.push(Opponent::new(100, 100));
    s.shots.push(Shot::new(110, 110));

    resolve_collisions(&mut s);

    assert_eq!(s.opponents.len(), 1);
    assert_eq!(s.score(), 1);
}

#[test]
fn two_shots_on_stacked_opponents_destroy_both() {
    let mut s = make_state();
    s.opponents.push(Opponent::new(100, 100));
    s.opponents.push(Opponent::new(100, 100));
    s.shots.push(Shot::new(110, 110));
    s.shots.push(Shot::new(120, 110));

    resolve_collisions(&mut s);

    assert!(s.opponents.is_empty());
    assert!(s.shots.is_empty());
    assert_eq!(s.score(), 2);
}

#[test]
fn adjacent_hits_in_one_sweep_skip_nothing() {
    let mut s = make_state();
    for x in [0, 100, 200, 300] {
        s.opponents.push(Opponent::new(x, 100));
        s.shots.push(Shot::new(x + 10, 110));
    }
    resolve_collisions(&mut s);
    assert!(s.opponents.is_empty());
    assert!(s.shots.is_empty());
    assert_eq!(s.score(), 4);
}

#[test]
fn missed_shot_survives() {
    let mut s = make_state();
    s.opponents.push(Opponent::new(100, 100));
    s.shots.push(Shot::new(300, 110));
    resolve_collisions(&mut s);
    assert_eq!(s.opponents.len(), 1);
    assert_eq!(s.shots.len(), 1);
    assert_eq!(s.score(), 0);
}

#[test]
fn opponent_touching_player_costs_a_life() {
    let mut s = make_state();
    let (px, py) = (s.player.body.x, s.player.body.y);
    s.opponents.push(Opponent::new(px + 10, py - 10));

    let report = resolve_collisions(&mut s);

    assert_eq!(s.lives(), 2);
    assert!(s.opponents.is_empty());
    assert_eq!((s.player.body.x, s.player.body.y), (px, py));
    assert_eq!(report.player_contacts, 1);
}

#[test]
fn every_touching_opponent_costs_a_life() {
    let mut s = make_state();
    let (px, py) = (s.player.body.x, s.player.body.y);
    s.opponents.push(Opponent::new(px, py));
    s.opponents.push(Opponent::new(px + 5, py));
    resolve_collisions(&mut s);
    assert_eq!(s.lives(), 1);
    assert!(s.opponents.is_empty());
}

#[test]
fn opponent_shot_down_cannot_also_hit_player() {
    let mut s = make_state();
    let (px, py) = (s.player.body.x, s.player.body.y);
    s.opponents.push(Opponent::new(px, py - 20));
    s.shots.push(Shot::new(px + 20, py - 10));

    resolve_collisions(&mut s);

    assert_eq!(s.score(), 1);
    assert_eq!(s.lives(), 3);
}

#[test]
fn score_and_life_change_in_the_same_pass() {
    let mut s = make_state();
    let (px, py) = (s.player.body.x, s.player.body.y);
    // One opponent shot down far away, another ramming the player.
    s.opponents.push(Opponent::new(0, 0));
    s.shots.push(Shot::new(10, 10));
    s.opponents.push(Opponent::new(px, py));

    resolve_collisions(&mut s);

    assert_eq!(s.score(), 1);
    assert_eq!(s.lives(), 2);
    assert!(s.opponents.is_empty());
}

#[test]
fn lives_never_go_below_zero() {
    let mut s = make_state();
    s.player.lives = 0;
    let (px, py) = (s.player.body.x, s.player.body.y);
    s.opponents.push(Opponent::new(px, py));
    resolve_collisions(&mut s);
    assert_eq!(s.lives(), 0);
}

// ── prune_spent ───────────────────────────────────────────────────────────────

#[test]
fn shot_above_top_is_pruned() {
    let mut s = make_state();
    s.shots.push(Shot::new(100, -1));
    s.shots.push(Shot::new(100, 0));
    prune_spent(&mut s);
    assert_eq!(s.shots.len(), 1);
    assert_eq!(s.shots[0].body.y, 0);
}

#[test]
fn opponent_at_bottom_is_pruned() {
    let mut s = make_state();
    s.opponents.push(Opponent::new(100, ARENA_HEIGHT));
    s.opponents.push(Opponent::new(200, ARENA_HEIGHT - 1));
    prune_spent(&mut s);
    assert_eq!(s.opponents.len(), 1);
    assert_eq!(s.opponents[0].body.x, 200);
}

#[test]
fn shot_leaving_the_top_is_gone_after_its_tick() {
    let mut s = make_state();
    s.shots.push(Shot::new(10, 4));
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert!(s2.shots.is_empty());
}

// ── evaluate_terminal ─────────────────────────────────────────────────────────

#[test]
fn no_terminal_mid_round() {
    let s = make_state();
    assert_eq!(evaluate_terminal(&s, WIN_SCORE), None);
}

#[test]
fn zero_lives_is_defeat() {
    let mut s = make_state();
    s.player.lives = 0;
    assert_eq!(evaluate_terminal(&s, WIN_SCORE), Some(Outcome::Defeat));
}

#[test]
fn reaching_win_score_is_victory() {
    let mut s = make_state();
    s.player.score = WIN_SCORE - 1;
    assert_eq!(evaluate_terminal(&s, WIN_SCORE), None);
    s.player.score = WIN_SCORE;
    assert_eq!(evaluate_terminal(&s, WIN_SCORE), Some(Outcome::Victory));
}

#[test]
fn win_supersedes_loss_in_the_same_tick() {
    let mut s = make_state();
    s.player.lives = 0;
    s.player.score = WIN_SCORE;
    assert_eq!(evaluate_terminal(&s, WIN_SCORE), Some(Outcome::Victory));
}

// ── tick ──────────────────────────────────────────────────────────────────────

#[test]
fn tick_does_not_mutate_original() {
    let s = make_state();
    let _s2 = tick(&s, &firing(), &mut seeded_rng());
    assert_eq!(s, make_state());
}

#[test]
fn fresh_round_single_shot_no_score() {
    let s = make_state();
    let s2 = tick(&s, &firing(), &mut seeded_rng());
    assert_eq!(s2.shots.len(), 1);
    assert_eq!(s2.score(), 0);
    assert_eq!(s2.tick, 1);

    let s3 = tick(&s2, &idle(), &mut seeded_rng());
    assert_eq!(s3.shots.len(), 1);
    assert_eq!(s3.shots[0].body.y, s2.shots[0].body.y - SHOT_SPEED);
}

#[test]
fn tick_moves_then_resolves() {
    let mut s = make_state();
    // After this tick the opponent is at y=103 and the shot at y=145:
    // opponent spans 103..153, shot 145..155, so they overlap.
    s.opponents.push(Opponent::new(100, 100));
    s.shots.push(Shot::new(110, 150));
    let s2 = tick(&s, &idle(), &mut seeded_rng());
    assert!(s2.opponents.is_empty());
    assert!(s2.shots.is_empty());
    assert_eq!(s2.score(), 1);
}
