//! Rendering layer: all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game. No game logic is performed; this module only translates state into
//! terminal commands, scaling the logical arena onto the terminal grid.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use rand::Rng;

use arena_shooter::assets::Background;
use arena_shooter::entities::{ActorKind, Arena, Body, Rgb};
use arena_shooter::round::{Game, Phase, RESTART_PROMPT};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_ART: Color = Color::DarkGrey;
const C_HUD: Color = Color::White;
const C_MESSAGE: Color = Color::White;
const C_PROMPT: Color = Color::Grey;

// ── Arena → terminal mapping ──────────────────────────────────────────────────

/// The terminal grid the arena is stretched onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    arena: Arena,
}

/// Screen rectangle in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, arena: Arena) -> Self {
        Self { cols, rows, arena }
    }

    fn col(&self, x: i32) -> i64 {
        x as i64 * self.cols as i64 / self.arena.width.max(1) as i64
    }

    fn row(&self, y: i32) -> i64 {
        y as i64 * self.rows as i64 / self.arena.height.max(1) as i64
    }

    /// Cells covered by `body`, clipped to the screen. Every on-screen body
    /// covers at least one cell; `None` when it is entirely off-screen.
    pub fn cells(&self, body: &Body) -> Option<CellRect> {
        let c0 = self.col(body.x);
        let c1 = self.col(body.x + body.width()).max(c0 + 1);
        let r0 = self.row(body.y);
        let r1 = self.row(body.y + body.height()).max(r0 + 1);

        let (c0, c1) = (c0.max(0), c1.min(self.cols as i64));
        let (r0, r1) = (r0.max(0), r1.min(self.rows as i64));
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some(CellRect {
            col: c0 as u16,
            row: r0 as u16,
            width: (c1 - c0) as u16,
            height: (r1 - r0) as u16,
        })
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write, R: Rng>(
    out: &mut W,
    game: &Game<R>,
    background: &Background,
    view: &Viewport,
) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, background, view)?;
    for actor in game.round().actors() {
        draw_body(out, actor.body(), glyph(actor.kind()), view)?;
    }
    draw_hud(out, game, view)?;

    if let Some(outcome) = game.phase().outcome() {
        draw_centered(out, view, 0, outcome.message(), C_MESSAGE)?;
    }
    if let Phase::AwaitingRestartChoice { .. } = game.phase() {
        draw_centered(out, view, 2, RESTART_PROMPT, C_PROMPT)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(
    out: &mut W,
    background: &Background,
    view: &Viewport,
) -> std::io::Result<()> {
    match background {
        Background::Flat { color, .. } => {
            out.queue(style::SetBackgroundColor(to_color(*color)))?;
            let blank = " ".repeat(view.cols as usize);
            for row in 0..view.rows {
                out.queue(cursor::MoveTo(0, row))?;
                out.queue(Print(&blank))?;
            }
        }
        Background::Art { .. } => {
            out.queue(style::SetForegroundColor(C_ART))?;
            for row in 0..view.rows {
                let line: String = (0..view.cols)
                    .map(|col| background.sample(col, row, view.cols, view.rows))
                    .collect();
                out.queue(cursor::MoveTo(0, row))?;
                out.queue(Print(line))?;
            }
        }
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn glyph(kind: ActorKind) -> &'static str {
    match kind {
        ActorKind::Player | ActorKind::Opponent => "█",
        ActorKind::Shot => "┃",
    }
}

fn draw_body<W: Write>(
    out: &mut W,
    body: &Body,
    glyph: &str,
    view: &Viewport,
) -> std::io::Result<()> {
    let Some(rect) = view.cells(body) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(to_color(body.sprite.color)))?;
    let fill = glyph.repeat(rect.width as usize);
    for row in rect.row..rect.row + rect.height {
        out.queue(cursor::MoveTo(rect.col, row))?;
        out.queue(Print(&fill))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write, R: Rng>(
    out: &mut W,
    game: &Game<R>,
    view: &Viewport,
) -> std::io::Result<()> {
    let round = game.round();
    out.queue(style::SetForegroundColor(C_HUD))?;

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("Score: {}", round.score())))?;

    let lives = format!("Lives: {}", round.lives());
    let col = view.cols.saturating_sub(lives.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(Print(lives))?;
    Ok(())
}

// ── End-of-round overlay ──────────────────────────────────────────────────────

/// Print `text` centred horizontally, `offset` rows below the middle row.
fn draw_centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    offset: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    let row = (view.rows / 2 + offset).min(view.rows.saturating_sub(1));
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}
