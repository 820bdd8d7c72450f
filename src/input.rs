//! Keyboard input: crossterm events in, one `FrameInput` snapshot per frame out.

use std::collections::{HashMap, HashSet};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Once a key is repeating, it stays "held" while its last press/repeat
/// event is at most this many frames old. OS key-repeat runs at 15 Hz or
/// faster, so 8 frames (≈133 ms at 60 FPS) bridges the gap between repeats.
/// It does not bridge the initial repeat delay (usually 250-600 ms): on
/// terminals without release events a key held down registers on the press
/// frame, then again from the first repeat onwards.
pub const HOLD_WINDOW: u64 = 8;

/// Directional and fire keys held during the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartChoice {
    Confirm,
    Decline,
}

/// Everything the round controller needs from one frame of input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Window-close equivalent. Honoured in every phase.
    pub quit_requested: bool,
    pub held: HeldKeys,
    /// Restart answer pressed this frame, if any.
    pub choice: Option<RestartChoice>,
}

/// Last event seen for a key.
#[derive(Clone, Copy, Debug)]
struct KeySeen {
    frame: u64,
    /// A repeat (or a second press inside `HOLD_WINDOW`) has arrived since
    /// the key went down.
    repeating: bool,
}

/// Tracks key state across frames.
///
/// Rather than acting on each key event individually, it records the last
/// event for every key and reports which keys count as held this frame.
/// That lets Space and the arrows be held together.
///
/// * A key pressed this frame is held this frame, even if its release
///   arrived in the same batch of events.
/// * Once the terminal has sent any `Release` event (keyboard-enhancement
///   capable terminals), a key stays held until it is released.
/// * Classic terminals only send `Press` (OS key-repeat shows up as repeated
///   presses). A lone press is a one-frame tap; a repeating key stays held
///   until `HOLD_WINDOW` frames pass without a repeat.
#[derive(Debug, Default)]
pub struct KeyTracker {
    seen: HashMap<KeyCode, KeySeen>,
    tapped: HashSet<KeyCode>,
    releases_reported: bool,
    frame: u64,
    quit: bool,
    choice: Option<RestartChoice>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame. One-shot presses from the previous frame are cleared;
    /// a quit request stays latched.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
        self.tapped.clear();
        self.choice = None;
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn record(&mut self, event: &Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) => match kind {
                KeyEventKind::Press => {
                    let repeating = self.is_fresh(*code);
                    self.seen.insert(
                        *code,
                        KeySeen {
                            frame: self.frame,
                            repeating,
                        },
                    );
                    self.tapped.insert(*code);
                    self.on_press(*code, *modifiers);
                }
                KeyEventKind::Repeat => {
                    self.seen.insert(
                        *code,
                        KeySeen {
                            frame: self.frame,
                            repeating: true,
                        },
                    );
                }
                KeyEventKind::Release => {
                    self.releases_reported = true;
                    self.seen.remove(code);
                }
            },
            // Release events never arrive for keys let go while unfocused.
            Event::FocusLost => {
                self.seen.clear();
                self.tapped.clear();
            }
            _ => {}
        }
    }

    pub fn snapshot(&self) -> FrameInput {
        FrameInput {
            quit_requested: self.quit,
            held: HeldKeys {
                left: self.is_held(KeyCode::Left),
                right: self.is_held(KeyCode::Right),
                up: self.is_held(KeyCode::Up),
                down: self.is_held(KeyCode::Down),
                fire: self.is_held(KeyCode::Char(' ')),
            },
            choice: self.choice,
        }
    }

    fn on_press(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Char('s' | 'S' | 'y' | 'Y') => self.choice = Some(RestartChoice::Confirm),
            KeyCode::Char('n' | 'N') => self.choice = Some(RestartChoice::Decline),
            _ => {}
        }
    }

    fn is_held(&self, key: KeyCode) -> bool {
        if self.tapped.contains(&key) {
            return true;
        }
        match self.seen.get(&key) {
            Some(_) if self.releases_reported => true,
            Some(seen) => seen.repeating && self.is_fresh(key),
            None => false,
        }
    }

    /// True if `key` was last seen within `HOLD_WINDOW` frames.
    fn is_fresh(&self, key: KeyCode) -> bool {
        self.seen
            .get(&key)
            .map(|seen| self.frame.saturating_sub(seen.frame) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}
