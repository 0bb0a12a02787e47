//! Axis-aligned hitboxes
//!
//! Hitboxes are anchored at their center, matching how game objects are
//! positioned and drawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Center-anchored axis-aligned rectangle used for overlap tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitBox {
    /// Center of the box
    pub center: Vec2,
    /// Full width and height
    pub size: Vec2,
}

impl HitBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Returns `(x, y, width, height)` with `x`/`y` at the center
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.center.x, self.center.y, self.size.x, self.size.y)
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min() + self.size
    }

    /// Move the center; `None` leaves that axis alone
    pub fn move_to(&mut self, x: Option<f32>, y: Option<f32>) {
        if let Some(x) = x {
            self.center.x = x;
        }
        if let Some(y) = y {
            self.center.y = y;
        }
    }

    /// Change the size around the current center; `None` leaves that axis alone
    pub fn resize(&mut self, width: Option<f32>, height: Option<f32>) {
        if let Some(w) = width {
            self.size.x = w;
        }
        if let Some(h) = height {
            self.size.y = h;
        }
    }

    /// Strict overlap test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &HitBox) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = HitBox::new(0.0, 0.0, 40.0, 40.0);
        let b = HitBox::new(30.0, 10.0, 40.0, 40.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = HitBox::new(200.0, 0.0, 40.0, 40.0);
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = HitBox::new(20.0, 20.0, 40.0, 40.0);
        // Right edge of `a` is x=40, left edge of `b` is x=40
        let b = HitBox::new(60.0, 20.0, 40.0, 40.0);
        assert!(!a.overlaps(&b));

        // Bottom edge of `a` touches top edge of `c`
        let c = HitBox::new(20.0, 60.0, 40.0, 40.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = HitBox::new(0.0, 0.0, 100.0, 100.0);
        let inner = HitBox::new(5.0, -5.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_move_and_resize_are_independent() {
        let mut hb = HitBox::new(10.0, 20.0, 30.0, 40.0);

        hb.move_to(Some(0.0), None);
        assert_eq!(hb.bounds(), (0.0, 20.0, 30.0, 40.0));

        hb.resize(None, Some(8.0));
        assert_eq!(hb.bounds(), (0.0, 20.0, 30.0, 8.0));

        hb.move_to(None, None);
        hb.resize(None, None);
        assert_eq!(hb.bounds(), (0.0, 20.0, 30.0, 8.0));
    }

    #[test]
    fn test_corners() {
        let hb = HitBox::new(20.0, 60.0, 40.0, 38.0);
        assert_eq!(hb.min(), Vec2::new(0.0, 41.0));
        assert_eq!(hb.max(), Vec2::new(40.0, 79.0));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..200.0, ah in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..200.0, bh in 0.0f32..200.0,
        ) {
            let a = HitBox::new(ax, ay, aw, ah);
            let b = HitBox::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn edge_adjacent_boxes_never_overlap(
            x in -500i32..500, y in -500i32..500,
            w in 1i32..100, h in 1i32..100,
        ) {
            // Integer-valued coordinates keep the shared edge exact
            let (x, y, w, h) = (x as f32, y as f32, w as f32, h as f32);
            let a = HitBox::new(x, y, w, h);
            let right = HitBox::new(x + w, y, w, h);
            let below = HitBox::new(x, y + h, w, h);
            prop_assert!(!a.overlaps(&right));
            prop_assert!(!a.overlaps(&below));
        }
    }
}
