//! Base game object
//!
//! Every entity wraps one of these: a position, a size, an optional hitbox
//! that follows the object around, a signal stack and a sprite reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hitbox::HitBox;
use super::signal::{Signal, SignalStack};

/// Opaque sprite handle handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Ground,
    Grass,
    Coin,
    Cloud,
    Palm,
    Exit,
    Jerk,
    Dude,
}

impl Sprite {
    /// Asset name, as used by image caches
    pub fn as_str(&self) -> &'static str {
        match self {
            Sprite::Ground => "ground",
            Sprite::Grass => "grass",
            Sprite::Coin => "coin",
            Sprite::Cloud => "cloud",
            Sprite::Palm => "palm",
            Sprite::Exit => "exit",
            Sprite::Jerk => "jerk",
            Sprite::Dude => "dude",
        }
    }

    /// Stable numeric index (for instance buffers)
    pub fn index(&self) -> u32 {
        *self as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameObject {
    /// Center position
    pub pos: Vec2,
    /// Full width and height
    pub size: Vec2,
    pub sprite: Sprite,
    hitbox: Option<HitBox>,
    signals: SignalStack,
}

impl GameObject {
    pub fn new(x: f32, y: f32, width: f32, height: f32, sprite: Sprite) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            sprite,
            hitbox: None,
            signals: SignalStack::new(),
        }
    }

    /// Attach a hitbox of the given size centered on the object
    pub fn with_hitbox(mut self, width: f32, height: f32) -> Self {
        self.hitbox = Some(HitBox::new(self.pos.x, self.pos.y, width, height));
        self
    }

    /// Returns `(x, y, width, height)` with `x`/`y` at the center
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    pub fn hitbox(&self) -> Option<&HitBox> {
        self.hitbox.as_ref()
    }

    pub fn set_hitbox(&mut self, hitbox: HitBox) {
        self.hitbox = Some(hitbox);
    }

    /// Absolute move; `None` leaves that axis alone
    pub fn move_to(&mut self, x: Option<f32>, y: Option<f32>) {
        if let Some(x) = x {
            self.pos.x = x;
        }
        if let Some(y) = y {
            self.pos.y = y;
        }
        self.sync_hitbox();
    }

    pub fn move_relative(&mut self, dx: f32, dy: f32) {
        self.pos += Vec2::new(dx, dy);
        self.sync_hitbox();
    }

    fn sync_hitbox(&mut self) {
        if let Some(hitbox) = self.hitbox.as_mut() {
            hitbox.move_to(Some(self.pos.x), Some(self.pos.y));
        }
    }

    pub fn push_signal(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    /// Most recently pushed signal, or `None` once drained
    pub fn pop_signal(&mut self) -> Option<Signal> {
        self.signals.pop()
    }

    pub fn pending_signals(&self) -> usize {
        self.signals.len()
    }

    /// Overlap test; false unless both objects carry a hitbox
    pub fn hit_test(&self, other: &GameObject) -> bool {
        match (self.hitbox.as_ref(), other.hitbox.as_ref()) {
            (Some(a), Some(b)) => a.overlaps(b),
            _ => false,
        }
    }

    /// Base per-frame hook. Plain objects do nothing.
    pub fn update(&mut self, _dt: f32) {}
}
