//! Environment configuration, validation, and error types.
//!
//! [`EnvConfig`] is the builder-input for constructing a
//! [`TrainingEnv`](crate::TrainingEnv). [`validate()`](EnvConfig::validate)
//! checks structural invariants at startup; everything past construction
//! degrades instead of erroring.

use std::error::Error;
use std::fmt;

use dojo_core::Aabb;
use dojo_layout::{LayoutConfig, LayoutError};
use glam::{vec3, Vec3};

// ── RewardConfig ───────────────────────────────────────────────────

/// Weights for the per-tick reward composition.
///
/// Penalties are stored as the (negative) values added to the total, not
/// as magnitudes.
#[derive(Clone, Copy, Debug)]
pub struct RewardConfig {
    /// Bonus for being within reach of the target. Default: 100.
    pub reach_bonus: f32,
    /// Scale of the dense distance-shaping term. Default: 0.1.
    pub distance_scale: f32,
    /// Bonus for strictly decreasing the distance since the previous
    /// tick. Default: 0.5.
    pub progress_bonus: f32,
    /// Penalty added every tick. Default: -0.01.
    pub time_penalty: f32,
    /// Penalty added while the agent's speed is below
    /// [`idle_speed`](RewardConfig::idle_speed). Default: -0.1.
    pub idle_penalty: f32,
    /// Speed below which the agent counts as idle. Default: 50.
    pub idle_speed: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            reach_bonus: 100.0,
            distance_scale: 0.1,
            progress_bonus: 0.5,
            time_penalty: -0.01,
            idle_penalty: -0.1,
            idle_speed: 50.0,
        }
    }
}

// ── EpisodeLimits ──────────────────────────────────────────────────

/// Episode length budgets. Exceeding either yields a truncation, never a
/// termination.
///
/// Both budgets are optional and independent; with both unset, episodes
/// only end through terminal states.
#[derive(Clone, Copy, Debug)]
pub struct EpisodeLimits {
    /// Maximum number of reward-gathering steps per episode.
    pub max_steps: Option<u32>,
    /// Maximum episode duration in simulation seconds.
    pub max_seconds: Option<f64>,
}

impl Default for EpisodeLimits {
    fn default() -> Self {
        Self {
            max_steps: Some(1000),
            max_seconds: Some(30.0),
        }
    }
}

impl EpisodeLimits {
    /// Whether an episode at `steps` steps and `elapsed` seconds has
    /// exhausted either budget.
    pub fn exceeded(&self, steps: u32, elapsed: f64) -> bool {
        if self.max_steps.is_some_and(|m| steps >= m) {
            return true;
        }
        self.max_seconds.is_some_and(|m| elapsed >= m)
    }
}

// ── SpawnConfig ────────────────────────────────────────────────────

/// Where and how agents respawn at episode resets.
#[derive(Clone, Debug)]
pub struct SpawnConfig {
    /// Candidate spawn anchors. With anchors configured, each reset picks
    /// one at random and perturbs it; with none, resets fall back to
    /// uniform paired sampling over the arena.
    pub anchors: Vec<Vec3>,
    /// Horizontal perturbation radius around the chosen anchor.
    /// Default: 500.
    pub radius: f32,
    /// Minimum distance from every other registered agent. Default: 300.
    pub min_agent_separation: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            anchors: vec![vec3(0.0, 0.0, 100.0)],
            radius: 500.0,
            min_agent_separation: 300.0,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EnvConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `reach_threshold` is zero, negative, or non-finite.
    InvalidReachThreshold {
        /// The offending value.
        value: f32,
    },
    /// The arena bounds are degenerate (non-finite, or zero horizontal
    /// area).
    InvalidArena,
    /// A spawn parameter (radius or separation) is negative or
    /// non-finite.
    InvalidSpawn {
        /// The offending value.
        value: f32,
    },
    /// A configured episode budget is zero, negative, or non-finite.
    InvalidLimits,
    /// `ground_clearance` is negative or non-finite.
    InvalidClearance {
        /// The offending value.
        value: f32,
    },
    /// The obstacle layout configuration is invalid.
    Layout(LayoutError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidReachThreshold { value } => {
                write!(f, "reach threshold must be finite and positive, got {value}")
            }
            Self::InvalidArena => write!(f, "arena bounds are degenerate"),
            Self::InvalidSpawn { value } => {
                write!(f, "spawn distances must be finite and >= 0, got {value}")
            }
            Self::InvalidLimits => {
                write!(f, "episode budgets must be positive when set")
            }
            Self::InvalidClearance { value } => {
                write!(f, "ground clearance must be finite and >= 0, got {value}")
            }
            Self::Layout(e) => write!(f, "layout: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for ConfigError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

// ── EnvConfig ──────────────────────────────────────────────────────

/// Full configuration for a [`TrainingEnv`](crate::TrainingEnv).
#[derive(Clone, Debug)]
pub struct EnvConfig {
    /// The arena: horizontal bounds agents must stay inside, and the
    /// region reset positions are drawn from. The vertical half-extent
    /// pins the spawn height above the center.
    pub arena: Aabb,
    /// Distance at which the target counts as reached. Default: 150.
    pub reach_threshold: f32,
    /// Reward composition weights.
    pub reward: RewardConfig,
    /// Episode step/time budgets.
    pub limits: EpisodeLimits,
    /// Agent respawn parameters.
    pub spawn: SpawnConfig,
    /// Minimum distance between a fresh spawn and the re-rolled target.
    /// Default: 500.
    pub min_target_separation: f32,
    /// Extra height added to reset positions when placing agents, so
    /// capsules never clip the floor. Default: 200.
    pub ground_clearance: f32,
    /// Height below which an agent counts as fallen out of the world.
    /// Default: -1000.
    pub kill_z: f32,
    /// Whether the environment maintains an obstacle layout.
    pub use_obstacles: bool,
    /// Obstacle layout configuration, used when
    /// [`use_obstacles`](EnvConfig::use_obstacles) is set.
    pub layout: LayoutConfig,
    /// Seed for all randomized placement and spawning.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            arena: Aabb::new(Vec3::ZERO, vec3(2000.0, 2000.0, 0.0)),
            reach_threshold: 150.0,
            reward: RewardConfig::default(),
            limits: EpisodeLimits::default(),
            spawn: SpawnConfig::default(),
            min_target_separation: 500.0,
            ground_clearance: 200.0,
            kill_z: -1000.0,
            use_obstacles: true,
            layout: LayoutConfig::default(),
            seed: 0,
        }
    }
}

impl EnvConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reach_threshold.is_finite() || self.reach_threshold <= 0.0 {
            return Err(ConfigError::InvalidReachThreshold {
                value: self.reach_threshold,
            });
        }
        if !self.arena.is_valid()
            || self.arena.half_extent.x <= 0.0
            || self.arena.half_extent.y <= 0.0
        {
            return Err(ConfigError::InvalidArena);
        }
        for value in [
            self.spawn.radius,
            self.spawn.min_agent_separation,
            self.min_target_separation,
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpawn { value });
            }
        }
        if self.limits.max_steps.is_some_and(|m| m == 0) {
            return Err(ConfigError::InvalidLimits);
        }
        if self
            .limits
            .max_seconds
            .is_some_and(|m| !m.is_finite() || m <= 0.0)
        {
            return Err(ConfigError::InvalidLimits);
        }
        if !self.ground_clearance.is_finite() || self.ground_clearance < 0.0 {
            return Err(ConfigError::InvalidClearance {
                value: self.ground_clearance,
            });
        }
        self.layout.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EnvConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_reach_threshold() {
        let config = EnvConfig {
            reach_threshold: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidReachThreshold { .. })
        ));
    }

    #[test]
    fn rejects_degenerate_arena() {
        let config = EnvConfig {
            arena: Aabb::new(Vec3::ZERO, Vec3::ZERO),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidArena));
    }

    #[test]
    fn rejects_zero_step_budget() {
        let config = EnvConfig {
            limits: EpisodeLimits {
                max_steps: Some(0),
                max_seconds: None,
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidLimits));
    }

    #[test]
    fn unbounded_episodes_are_allowed() {
        let config = EnvConfig {
            limits: EpisodeLimits {
                max_steps: None,
                max_seconds: None,
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn layout_errors_propagate() {
        let config = EnvConfig {
            layout: LayoutConfig {
                size_range: (10.0, 5.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Layout(_))));
    }

    #[test]
    fn limits_exceeded_by_either_budget() {
        let limits = EpisodeLimits {
            max_steps: Some(10),
            max_seconds: Some(5.0),
        };
        assert!(!limits.exceeded(9, 4.9));
        assert!(limits.exceeded(10, 0.0));
        assert!(limits.exceeded(0, 5.0));

        let unbounded = EpisodeLimits {
            max_steps: None,
            max_seconds: None,
        };
        assert!(!unbounded.exceeded(u32::MAX, f64::MAX));
    }
}
