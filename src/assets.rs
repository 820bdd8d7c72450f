//! Background asset loading.
//!
//! The background is a text file of ASCII art stretched over the arena. When
//! it can't be used the game silently falls back to a flat fill of the
//! arena's exact size.

use std::io;
use std::path::Path;

use crate::config::GameConfig;
use crate::entities::{Rgb, BLACK};
use crate::error::AssetError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Background {
    Art { rows: Vec<Vec<char>> },
    Flat { width: i32, height: i32, color: Rgb },
}

impl Background {
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => AssetError::Missing {
                path: path.to_path_buf(),
            },
            _ => AssetError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end().chars().collect())
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(AssetError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(Background::Art { rows })
    }

    pub fn flat(width: i32, height: i32) -> Self {
        Background::Flat {
            width,
            height,
            color: BLACK,
        }
    }

    /// Never fails: a missing or unreadable asset becomes a flat black fill.
    pub fn load_or_flat(config: &GameConfig) -> Self {
        match Self::load(&config.background_path) {
            Ok(background) => {
                log::info!("background loaded from {}", config.background_path.display());
                background
            }
            Err(err) => {
                log::warn!("{err}; using flat background");
                Self::flat(config.arena_width, config.arena_height)
            }
        }
    }

    /// Glyph shown at screen cell (`col`, `row`) of a `cols` x `rows` screen.
    /// Art is sampled proportionally; a flat fill is blank everywhere.
    pub fn sample(&self, col: u16, row: u16, cols: u16, rows: u16) -> char {
        match self {
            Background::Flat { .. } => ' ',
            Background::Art { rows: art } => {
                let art_width = art.iter().map(Vec::len).max().unwrap_or(0);
                if art_width == 0 || cols == 0 || rows == 0 {
                    return ' ';
                }
                let r = row as usize * art.len() / rows as usize;
                let c = col as usize * art_width / cols as usize;
                art.get(r)
                    .and_then(|line| line.get(c))
                    .copied()
                    .unwrap_or(' ')
            }
        }
    }
}
