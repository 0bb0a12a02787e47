//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as a delta, never from the clock
//! - Stable iteration order (spawn order, by entity ID)
//! - No rendering or platform dependencies beyond the input trait

pub mod collision;
pub mod entity;
pub mod hitbox;
pub mod object;
pub mod player;
pub mod signal;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{ground_snap, player_contacts};
pub use entity::{Bob, Contact, Entity, EntityId, EntityKind, Horizontal, Patrol, Vertical};
pub use hitbox::HitBox;
pub use object::{GameObject, Sprite};
pub use player::{Footing, PlayerState};
pub use signal::{Signal, SignalStack};
pub use state::{DeathCause, SimStatus, Simulation};
pub use tick::{FrameIntent, tick};
pub use view::{Bounds, Drawable, FrameView, SpriteInstance};
