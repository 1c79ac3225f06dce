//! The obstacle value type.

use dojo_core::Aabb;
use glam::{vec3, Vec3};

/// A single placed obstacle: a box footprint centered on a position.
///
/// Obstacles carry no behaviour beyond geometric queries. They are owned
/// exclusively by the [`ObstacleLayout`](crate::ObstacleLayout) that
/// placed them and are destroyed wholesale on clear/regenerate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// Center of the obstacle's footprint in world space.
    pub position: Vec3,
    /// Half-extent of the footprint along each axis.
    pub half_extent: Vec3,
}

impl Obstacle {
    /// Create an obstacle from an explicit center and half-extent.
    pub fn new(position: Vec3, half_extent: Vec3) -> Self {
        Self {
            position,
            half_extent,
        }
    }

    /// Create an obstacle standing on `base` with a square footprint of
    /// side `size` and a height of 1.5 × `size`.
    ///
    /// `base` is the ground-contact point: the box bottom sits at
    /// `base.z`, so the stored center is half a height above it.
    pub fn from_ground(base: Vec3, size: f32) -> Self {
        let half = vec3(size * 0.5, size * 0.5, size * 0.75);
        Self {
            position: base + vec3(0.0, 0.0, half.z),
            half_extent: half,
        }
    }

    /// The obstacle's footprint as an axis-aligned box.
    pub fn footprint(&self) -> Aabb {
        Aabb::new(self.position, self.half_extent)
    }

    /// Whether a point is blocked by this obstacle for an agent of the
    /// given radius: containment in the footprint grown by `agent_radius`
    /// on every face.
    pub fn blocks(&self, point: Vec3, agent_radius: f32) -> bool {
        self.footprint().expanded(agent_radius).contains(point)
    }
}
