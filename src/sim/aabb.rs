//! Axis-aligned bounding boxes
//!
//! Every entity collides as a rectangle built from its centre and size,
//! whatever shape it is drawn with.

use glam::Vec2;

/// An axis-aligned box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of the given size centred on `center`
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// True when the boxes share an area (touching edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Minimal translation that moves `self` out of `other`
    ///
    /// Separation happens along the axis with the smaller overlap; equal
    /// overlaps separate vertically. The sign pushes `self` away from the
    /// centre of `other`. Returns `None` when the boxes do not overlap.
    pub fn penetration(&self, other: &Aabb) -> Option<Vec2> {
        let overlap_x = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let overlap_y = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);

        if overlap_x <= 0.0 || overlap_y <= 0.0 {
            return None;
        }

        let delta = self.center() - other.center();
        if overlap_x < overlap_y {
            let sign = if delta.x < 0.0 { -1.0 } else { 1.0 };
            Some(Vec2::new(sign * overlap_x, 0.0))
        } else {
            let sign = if delta.y < 0.0 { -1.0 } else { 1.0 };
            Some(Vec2::new(0.0, sign * overlap_y))
        }
    }
}
