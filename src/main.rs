mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use arena_shooter::assets::Background;
use arena_shooter::config::{GameConfig, CAPTION};
use arena_shooter::input::KeyTracker;
use arena_shooter::round::Game;

use display::Viewport;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The screen belongs to the game, so log lines go to a file. If the file
/// can't be created the game runs without logging.
fn init_logging(config: &GameConfig) {
    let file = match File::create(&config.log_path) {
        Ok(file) => file,
        Err(_) => return,
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

// ── Frame driver ──────────────────────────────────────────────────────────────

/// Fixed-rate loop: drain input, update the round, draw, sleep out the frame.
/// Returns once the round controller reaches `Exit`.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
    background: &Background,
) -> std::io::Result<()> {
    let frame = Duration::from_secs(1) / config.tick_rate.max(1);
    let mut game = Game::new(config, thread_rng());
    let mut keys = KeyTracker::new();

    loop {
        let frame_start = Instant::now();
        keys.begin_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            match rx.try_recv() {
                Ok(ev) => keys.record(&ev),
                Err(TryRecvError::Empty) => break,
                // Reader thread is gone; nothing can ever answer the prompt.
                Err(TryRecvError::Disconnected) => {
                    keys.request_quit();
                    break;
                }
            }
        }

        game.update(&keys.snapshot());
        if game.is_finished() {
            return Ok(());
        }

        let (cols, rows) = terminal::size()?;
        let view = Viewport::new(cols, rows, game.round().arena);
        display::render(out, &game, background, &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config);
    let background = Background::load_or_flat(&config);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    let _ = out.execute(terminal::SetTitle(CAPTION));
    // Focus loss drops held keys whose release we would otherwise miss.
    let _ = out.execute(EnableFocusChange);

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, config, &background);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableFocusChange);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(()) => log::info!("exiting"),
        Err(err) => log::error!("terminal error: {err}"),
    }
    result
}
