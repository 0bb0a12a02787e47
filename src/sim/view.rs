//! Render-ready snapshot of a frame
//!
//! Everything a drawing layer needs, with no access to simulation internals.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::object::Sprite;
use super::state::{SimStatus, Simulation};

/// Center-anchored rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<(f32, f32, f32, f32)> for Bounds {
    fn from((x, y, width, height): (f32, f32, f32, f32)) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawable {
    pub id: EntityId,
    pub sprite: Sprite,
    pub bounds: Bounds,
    /// Only filled in when hitbox display is on
    pub hitbox: Option<Bounds>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameView {
    /// Live entities in draw (spawn) order
    pub drawables: Vec<Drawable>,
    pub score: f32,
    pub status: SimStatus,
    pub frame: u64,
}

/// One sprite quad, laid out for a GPU instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Center x, center y, width, height
    pub rect: [f32; 4],
    pub sprite: u32,
    pub _pad: [u32; 3],
}

impl Simulation {
    /// Snapshot the current frame for drawing
    pub fn view(&self, show_hitboxes: bool) -> FrameView {
        let drawables = self
            .entities()
            .iter()
            .map(|entity| Drawable {
                id: entity.id,
                sprite: entity.object.sprite,
                bounds: entity.object.bounds().into(),
                hitbox: if show_hitboxes {
                    entity.object.hitbox().map(|hb| hb.bounds().into())
                } else {
                    None
                },
            })
            .collect();

        FrameView {
            drawables,
            score: self.score(),
            status: self.status(),
            frame: self.frame,
        }
    }
}

impl FrameView {
    /// Pack drawables into instance data, preserving draw order
    pub fn instances(&self) -> Vec<SpriteInstance> {
        self.drawables
            .iter()
            .map(|d| SpriteInstance {
                rect: [d.bounds.x, d.bounds.y, d.bounds.width, d.bounds.height],
                sprite: d.sprite.index(),
                _pad: [0; 3],
            })
            .collect()
    }

    /// Score text as shown in the HUD
    pub fn score_label(&self) -> String {
        format!("score: {:<8.2}", self.score)
    }
}
