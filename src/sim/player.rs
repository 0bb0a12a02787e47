//! Player physics
//!
//! The player is driven entirely through its signal stack. Each frame the
//! stack is drained most-recent-first, gravity is applied if nothing landed
//! the player, and the player moves by its velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::object::GameObject;
use super::signal::Signal;
use crate::tuning::PlayerTuning;

/// Whether the player is supported this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Footing {
    Grounded,
    Airborne,
}

/// Player-specific state carried by the `Player` entity variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Units per second; negative y is up
    pub velocity: Vec2,
    pub footing: Footing,
    /// Fell out of the world
    pub dead: bool,
    pub physics: PlayerTuning,
}

impl PlayerState {
    pub fn new(physics: PlayerTuning) -> Self {
        Self {
            velocity: Vec2::ZERO,
            footing: Footing::Airborne,
            dead: false,
            physics,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.footing == Footing::Grounded
    }

    /// Apply one signal. `dt` scales accelerations.
    pub fn apply_signal(&mut self, object: &mut GameObject, signal: Signal, dt: f32) {
        let max = self.physics.max_velocity;
        match signal {
            Signal::MoveLeft => {
                if self.velocity.x > -max {
                    self.velocity.x = (self.velocity.x - self.physics.walk_accel * dt).max(-max);
                }
            }
            Signal::MoveRight => {
                if self.velocity.x < max {
                    self.velocity.x = (self.velocity.x + self.physics.walk_accel * dt).min(max);
                }
            }
            Signal::MoveNeutral => {
                let decay = self.physics.neutral_decay * dt;
                // Stop at zero instead of flipping sign
                if self.velocity.x < 0.0 {
                    self.velocity.x = (self.velocity.x + decay).min(0.0);
                } else if self.velocity.x > 0.0 {
                    self.velocity.x = (self.velocity.x - decay).max(0.0);
                }
            }
            Signal::Jump => match self.footing {
                Footing::Grounded => {
                    self.velocity.y = self.physics.jump_velocity;
                    self.footing = Footing::Airborne;
                }
                Footing::Airborne => {}
            },
            Signal::HitGround(y) => {
                // A rising player passes up through the ground it just left
                if self.velocity.y >= 0.0 {
                    self.footing = Footing::Grounded;
                    object.move_to(None, Some(y));
                    self.velocity.y = 0.0;
                }
            }
        }
    }

    /// Advance one frame
    pub fn update(&mut self, object: &mut GameObject, dt: f32) {
        self.footing = Footing::Airborne;

        while let Some(signal) = object.pop_signal() {
            self.apply_signal(object, signal, dt);
        }

        if let Footing::Airborne = self.footing {
            self.velocity.y += self.physics.gravity * dt;
        }

        object.move_relative(self.velocity.x * dt, self.velocity.y * dt);

        if object.pos.y > self.physics.fall_death_y {
            self.dead = true;
        }
    }
}
