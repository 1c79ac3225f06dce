//! Layout configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use dojo_core::Aabb;
use glam::{vec3, Vec3};

use crate::bias::PlacementBias;

// ── ObstacleMode ───────────────────────────────────────────────────

/// Lifecycle mode of an obstacle layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObstacleMode {
    /// Obstacles are placed once and stay fixed until explicitly
    /// re-initialized.
    #[default]
    Static,
    /// The whole set is periodically replaced on a timer; obstacles are
    /// (re)established lazily after a mode switch.
    Dynamic,
}

impl fmt::Display for ObstacleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

// ── LayoutError ────────────────────────────────────────────────────

/// Errors detected during [`LayoutConfig::validate()`].
///
/// Configuration is the only place this crate can fail; every runtime
/// operation degrades instead of erroring.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// `size_range` is empty, inverted, or non-finite.
    InvalidSizeRange {
        /// The offending `(min, max)` pair.
        min: f32,
        /// See `min`.
        max: f32,
    },
    /// `min_spacing` or `avoid_radius` is negative or non-finite.
    InvalidSeparation {
        /// The offending value.
        value: f32,
    },
    /// The placement bounds are degenerate (non-finite, or zero
    /// horizontal area).
    InvalidBounds,
    /// The bias parameters are out of range.
    InvalidBias,
    /// `reshuffle_interval` is zero, negative, or non-finite.
    InvalidReshuffleInterval {
        /// The offending value, in seconds.
        value: f64,
    },
    /// `ground_clearance` is negative or non-finite.
    InvalidClearance {
        /// The offending value.
        value: f32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSizeRange { min, max } => {
                write!(f, "size range [{min}, {max}] must be finite, positive, and ordered")
            }
            Self::InvalidSeparation { value } => {
                write!(f, "separation distance must be finite and >= 0, got {value}")
            }
            Self::InvalidBounds => write!(f, "placement bounds are degenerate"),
            Self::InvalidBias => write!(f, "placement bias parameters out of range"),
            Self::InvalidReshuffleInterval { value } => {
                write!(f, "reshuffle interval must be finite and positive, got {value}")
            }
            Self::InvalidClearance { value } => {
                write!(f, "ground clearance must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for LayoutError {}

// ── LayoutConfig ───────────────────────────────────────────────────

/// Configuration for an [`ObstacleLayout`](crate::ObstacleLayout).
///
/// The placement region is injected explicitly via `bounds`; there is no
/// implicit lookup of a placement volume at runtime.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Number of obstacles bulk placement aims for. Placement may settle
    /// for fewer when attempt budgets run out; see
    /// [`PlacementReport`](crate::PlacementReport).
    pub max_obstacles: usize,
    /// Uniform range `(min, max)` the footprint side of each obstacle is
    /// drawn from. Height is 1.5 × the drawn side.
    pub size_range: (f32, f32),
    /// Minimum horizontal distance between obstacle centers.
    pub min_spacing: f32,
    /// Minimum horizontal distance between an obstacle and every
    /// avoid-point supplied to avoidance-aware placement.
    pub avoid_radius: f32,
    /// The placement region. Containment is horizontal; the vertical
    /// half-extent is conventionally zero.
    pub bounds: Aabb,
    /// Horizontal candidate sampling strategy.
    pub bias: PlacementBias,
    /// Initial lifecycle mode.
    pub mode: ObstacleMode,
    /// Seconds between wholesale replacements in
    /// [`Dynamic`](ObstacleMode::Dynamic) mode.
    pub reshuffle_interval: f64,
    /// Gap left between the resolved ground height and the bottom face
    /// of each obstacle.
    pub ground_clearance: f32,
    /// Ground height assumed when the spatial query reports no ground.
    pub default_ground_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_obstacles: 24,
            size_range: (60.0, 120.0),
            min_spacing: 60.0,
            avoid_radius: 200.0,
            bounds: Aabb::new(Vec3::ZERO, vec3(2000.0, 2000.0, 0.0)),
            bias: PlacementBias::default(),
            mode: ObstacleMode::Static,
            reshuffle_interval: 60.0,
            ground_clearance: 5.0,
            default_ground_height: 0.0,
        }
    }
}

impl LayoutConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`LayoutError`].
    pub fn validate(&self) -> Result<(), LayoutError> {
        let (min, max) = self.size_range;
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || max < min {
            return Err(LayoutError::InvalidSizeRange { min, max });
        }
        for value in [self.min_spacing, self.avoid_radius] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidSeparation { value });
            }
        }
        if !self.bounds.is_valid()
            || self.bounds.half_extent.x <= 0.0
            || self.bounds.half_extent.y <= 0.0
        {
            return Err(LayoutError::InvalidBounds);
        }
        if !self.bias.is_valid() {
            return Err(LayoutError::InvalidBias);
        }
        if !self.reshuffle_interval.is_finite() || self.reshuffle_interval <= 0.0 {
            return Err(LayoutError::InvalidReshuffleInterval {
                value: self.reshuffle_interval,
            });
        }
        if !self.ground_clearance.is_finite() || self.ground_clearance < 0.0 {
            return Err(LayoutError::InvalidClearance {
                value: self.ground_clearance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_size_range() {
        let config = LayoutConfig {
            size_range: (120.0, 60.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidSizeRange { .. })
        ));
    }

    #[test]
    fn rejects_zero_size() {
        let config = LayoutConfig {
            size_range: (0.0, 120.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_spacing() {
        let config = LayoutConfig {
            min_spacing: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidSeparation { .. })
        ));
    }

    #[test]
    fn rejects_flat_bounds() {
        let config = LayoutConfig {
            bounds: Aabb::new(Vec3::ZERO, vec3(0.0, 2000.0, 0.0)),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(LayoutError::InvalidBounds));
    }

    #[test]
    fn rejects_bad_bias() {
        let config = LayoutConfig {
            bias: PlacementBias::CenterWeighted {
                fraction: 2.0,
                scale: 0.5,
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(LayoutError::InvalidBias));
    }

    #[test]
    fn rejects_zero_reshuffle_interval() {
        let config = LayoutConfig {
            reshuffle_interval: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidReshuffleInterval { .. })
        ));
    }

    #[test]
    fn error_display_is_descriptive() {
        let err = LayoutError::InvalidSizeRange {
            min: 5.0,
            max: 1.0,
        };
        assert!(err.to_string().contains("size range"));
    }
}
