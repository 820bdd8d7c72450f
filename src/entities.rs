//! All game entity types: plain data plus each kind's motion rule.

use crate::config::{
    ACTOR_HEIGHT, ACTOR_WIDTH, OPPONENT_LIVES, OPPONENT_SPEED, PLAYER_LIVES, PLAYER_SPEED,
    SHOT_HEIGHT, SHOT_SPEED, SHOT_WIDTH,
};
use crate::input::HeldKeys;

// ── Visuals ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const RED: Rgb = Rgb(255, 0, 0);

/// Visual handle: a flat-colour surface owned by the entity it was built for.
/// The owner's bounding box is the sprite's size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub width: i32,
    pub height: i32,
    pub color: Rgb,
}

impl Sprite {
    pub const fn filled(width: i32, height: i32, color: Rgb) -> Self {
        Self { width, height, color }
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

/// Position plus visual. `y` may go negative while an actor leaves the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    pub x: i32,
    pub y: i32,
    pub sprite: Sprite,
}

impl Body {
    pub fn new(x: i32, y: i32, sprite: Sprite) -> Self {
        Self { x, y, sprite }
    }

    pub fn width(&self) -> i32 {
        self.sprite.width
    }

    pub fn height(&self) -> i32 {
        self.sprite.height
    }
}

// ── Entity capability ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorKind {
    Player,
    Opponent,
    Shot,
}

/// Anything that occupies arena space and can move.
pub trait Entity {
    fn body(&self) -> &Body;

    fn kind(&self) -> ActorKind;

    /// Apply one tick of this kind's motion rule. Only `self` is mutated.
    fn advance(&mut self, _keys: &HeldKeys, _arena: Arena) {}
}

// ── Player, opponent, shot ────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub body: Body,
    pub lives: u32,
    pub score: u32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            body: Body::new(x, y, Sprite::filled(ACTOR_WIDTH, ACTOR_HEIGHT, GREEN)),
            lives: PLAYER_LIVES,
            score: 0,
        }
    }

    /// A new shot at the ship's horizontal centre and top edge while fire is held.
    pub fn shoot(&self, keys: &HeldKeys) -> Option<Shot> {
        keys.fire
            .then(|| Shot::new(self.body.x + self.body.width() / 2, self.body.y))
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Player
    }

    /// Each held direction moves one step; every axis is clamped so the whole
    /// box stays inside the arena.
    fn advance(&mut self, keys: &HeldKeys, arena: Arena) {
        let max_x = arena.width - self.body.width();
        let max_y = arena.height - self.body.height();
        let b = &mut self.body;
        if keys.left {
            b.x = (b.x - PLAYER_SPEED).max(0);
        }
        if keys.right {
            b.x = (b.x + PLAYER_SPEED).min(max_x);
        }
        if keys.up {
            b.y = (b.y - PLAYER_SPEED).max(0);
        }
        if keys.down {
            b.y = (b.y + PLAYER_SPEED).min(max_y);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opponent {
    pub body: Body,
    pub lives: u32,
}

impl Opponent {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            body: Body::new(x, y, Sprite::filled(ACTOR_WIDTH, ACTOR_HEIGHT, RED)),
            lives: OPPONENT_LIVES,
        }
    }
}

impl Entity for Opponent {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Opponent
    }

    // Never clamped: leaving the bottom edge is what gets it pruned.
    fn advance(&mut self, _keys: &HeldKeys, _arena: Arena) {
        self.body.y += OPPONENT_SPEED;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shot {
    pub body: Body,
}

impl Shot {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            body: Body::new(x, y, Sprite::filled(SHOT_WIDTH, SHOT_HEIGHT, WHITE)),
        }
    }
}

impl Entity for Shot {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Shot
    }

    fn advance(&mut self, _keys: &HeldKeys, _arena: Arena) {
        self.body.y -= SHOT_SPEED;
    }
}

// ── Round ─────────────────────────────────────────────────────────────────────

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Defeat,
    Victory,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Defeat => "GAME OVER",
            Outcome::Victory => "YOU WIN",
        }
    }
}

/// Everything one round owns. Cloneable so a tick can produce a fresh copy
/// and a restart can swap in a brand-new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    /// Also carries the round's score and remaining lives.
    pub player: Player,
    pub opponents: Vec<Opponent>,
    pub shots: Vec<Shot>,
    pub spawn_interval: u32,
    pub spawn_counter: u32,
    pub tick: u64,
    pub arena: Arena,
}

impl RoundState {
    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }

    /// Every live actor in draw order: player, opponents, then shots.
    pub fn actors(&self) -> impl Iterator<Item = &dyn Entity> + '_ {
        std::iter::once(&self.player as &dyn Entity)
            .chain(self.opponents.iter().map(|o| o as &dyn Entity))
            .chain(self.shots.iter().map(|s| s as &dyn Entity))
    }
}
