//! Tile Runner - A side-scrolling tile platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, collisions, game state)
//! - `level`: Tile-grid level loading
//! - `platform`: Input and frame timing collaborators
//! - `session`: Driver that owns and restarts the simulation
//! - `tuning`: Data-driven game balance

pub mod level;
pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use level::{Level, LevelError};
pub use session::{Session, StepOutcome};
pub use sim::Simulation;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Edge length of one level grid cell
    pub const TILE_SIZE: f32 = 40.0;

    /// Player body and hitbox
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;

    /// Ground hitboxes are trimmed so the player sinks in slightly
    pub const GROUND_HITBOX_HEIGHT: f32 = TILE_SIZE - 2.0;

    /// Decorations
    pub const CLOUD_SIZE: f32 = 80.0;
    pub const PALM_WIDTH: f32 = 80.0;
    pub const PALM_HEIGHT: f32 = 120.0;

    /// Coin bob: rises 10 units then sinks back to its spawn height
    pub const COIN_BOB_SPEED: f32 = 40.0;
    pub const COIN_BOB_UPPER: f32 = -10.0;
    pub const COIN_BOB_LOWER: f32 = 0.0;

    /// Exit bob: symmetric around its spawn height
    pub const EXIT_BOB_SPEED: f32 = 40.0;
    pub const EXIT_BOB_UPPER: f32 = -5.0;
    pub const EXIT_BOB_LOWER: f32 = 5.0;

    /// Jerk patrol (units/s, and reach either side of spawn)
    pub const JERK_SPEED: f32 = 30.0;
    pub const JERK_REACH: f32 = 40.0;
}

/// Built-in demo level
pub const DEMO_LEVEL: &str = include_str!("../levels/demo.txt");
