//! Tile-grid level loading
//!
//! A level is a text grid, one character per tile. Each recognised character
//! becomes one spawn request at a position derived from its row and column.
//! Anything else (spaces, dots, ...) is empty space.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TILE_SIZE;

/// Errors from loading a level. A level that fails to load never produces a
/// partial simulation.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("level is empty")]
    Empty,

    #[error("level has no player spawn")]
    MissingPlayer,

    #[error("level has more than one player spawn (row {row}, column {col})")]
    DuplicatePlayer { row: usize, col: usize },

    #[error("spawn list has more than one player (entry {index})")]
    DuplicateSpawn { index: usize },
}

/// What a tile spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Ground,
    Grass,
    Coin,
    Cloud,
    Palm,
    Exit,
    Jerk,
    Player,
}

impl TileKind {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'g' => Some(TileKind::Ground),
            'b' => Some(TileKind::Grass),
            'c' => Some(TileKind::Coin),
            'l' => Some(TileKind::Cloud),
            't' => Some(TileKind::Palm),
            'e' => Some(TileKind::Exit),
            'j' => Some(TileKind::Jerk),
            'p' => Some(TileKind::Player),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            TileKind::Ground => 'g',
            TileKind::Grass => 'b',
            TileKind::Coin => 'c',
            TileKind::Cloud => 'l',
            TileKind::Palm => 't',
            TileKind::Exit => 'e',
            TileKind::Jerk => 'j',
            TileKind::Player => 'p',
        }
    }

    /// Spawn position for a tile at the given grid cell.
    ///
    /// Most tiles sit centered in their cell. Large decorations and the
    /// player are anchored differently so they rest on the row below.
    pub fn spawn_position(&self, row: usize, col: usize) -> Vec2 {
        let x = TILE_SIZE * col as f32;
        let y = TILE_SIZE * row as f32;
        let half = TILE_SIZE / 2.0;
        match self {
            TileKind::Palm => Vec2::new(x + TILE_SIZE, y - half),
            TileKind::Cloud => Vec2::new(x + TILE_SIZE, y + TILE_SIZE),
            TileKind::Player => Vec2::new(x + half, y),
            _ => Vec2::new(x + half, y + half),
        }
    }
}

/// A single entity to create when the level starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub kind: TileKind,
    pub pos: Vec2,
}

impl SpawnRequest {
    pub fn new(kind: TileKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, y),
        }
    }
}

/// A validated level: spawn requests in grid order with exactly one player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    spawns: Vec<SpawnRequest>,
    /// Grid dimensions in tiles (rows, widest row)
    pub rows: usize,
    pub cols: usize,
}

impl Level {
    /// Parse a tile grid, row by row, left to right
    pub fn parse(source: &str) -> Result<Self, LevelError> {
        let grid: Vec<&str> = source.lines().collect();
        if grid.iter().all(|line| line.trim().is_empty()) {
            return Err(LevelError::Empty);
        }

        let mut spawns = Vec::new();
        let mut player_cell: Option<(usize, usize)> = None;
        let mut cols = 0;

        for (row, line) in grid.iter().enumerate() {
            let mut width = 0;
            for (col, code) in line.chars().enumerate() {
                width = col + 1;
                let Some(kind) = TileKind::from_code(code) else {
                    continue;
                };
                if kind == TileKind::Player {
                    if player_cell.is_some() {
                        return Err(LevelError::DuplicatePlayer { row, col });
                    }
                    player_cell = Some((row, col));
                }
                spawns.push(SpawnRequest {
                    kind,
                    pos: kind.spawn_position(row, col),
                });
            }
            cols = cols.max(width);
        }

        if player_cell.is_none() {
            return Err(LevelError::MissingPlayer);
        }

        log::debug!("Parsed level: {}x{} tiles, {} spawns", cols, grid.len(), spawns.len());

        Ok(Self {
            spawns,
            rows: grid.len(),
            cols,
        })
    }

    /// Read and parse a level file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let level = Self::parse(&source)?;
        log::info!("Loaded level {} ({} spawns)", path.display(), level.spawns.len());
        Ok(level)
    }

    /// Build a level from explicit spawn requests (must hold exactly one player)
    pub fn from_spawns(spawns: Vec<SpawnRequest>) -> Result<Self, LevelError> {
        if spawns.is_empty() {
            return Err(LevelError::Empty);
        }
        let mut players = spawns
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind == TileKind::Player);
        if players.next().is_none() {
            return Err(LevelError::MissingPlayer);
        }
        if let Some((index, _)) = players.next() {
            return Err(LevelError::DuplicateSpawn { index });
        }

        Ok(Self {
            spawns,
            rows: 0,
            cols: 0,
        })
    }

    pub fn spawns(&self) -> &[SpawnRequest] {
        &self.spawns
    }
}
