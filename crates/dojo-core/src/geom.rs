//! Axis-aligned box geometry.
//!
//! [`Aabb`] doubles as the arena/placement region (conventionally with a
//! zero vertical half-extent, so containment is horizontal) and as an
//! obstacle footprint (full-volume containment).

use glam::Vec3;

/// An axis-aligned box described by a center point and a half-extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Center of the box in world space.
    pub center: Vec3,
    /// Half-extent along each axis. Components must be non-negative.
    pub half_extent: Vec3,
}

impl Aabb {
    /// Create a box from its center and half-extent.
    pub fn new(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// Minimum corner of the box.
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extent
    }

    /// Maximum corner of the box.
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extent
    }

    /// Whether `point` lies inside the box on all three axes.
    pub fn contains(&self, point: Vec3) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x
            && point.x <= max.x
            && point.y >= min.y
            && point.y <= max.y
            && point.z >= min.z
            && point.z <= max.z
    }

    /// Whether `point` lies inside the box on the horizontal plane,
    /// ignoring z. This is the containment test for arena bounds, whose
    /// vertical half-extent is conventionally zero.
    pub fn contains_xy(&self, point: Vec3) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// The box grown by `radius` on every face.
    pub fn expanded(&self, radius: f32) -> Self {
        Self {
            center: self.center,
            half_extent: self.half_extent + Vec3::splat(radius),
        }
    }

    /// Corner-to-corner extent of the box.
    ///
    /// For an arena this is the largest distance two points inside it can
    /// be apart, used to normalise distance-shaped rewards.
    pub fn diagonal(&self) -> f32 {
        (self.max() - self.min()).length()
    }

    /// Whether every component of the box is finite and the half-extent
    /// is non-negative on all axes.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.half_extent.is_finite()
            && self.half_extent.cmpge(Vec3::ZERO).all()
    }
}

/// Distance between two points projected onto the horizontal plane.
///
/// Placement separation constraints are planar: an obstacle directly
/// under an elevated agent is still "on top of" it.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
