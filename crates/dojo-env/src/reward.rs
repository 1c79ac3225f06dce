//! The per-tick reward policy.
//!
//! A pure function from agent/target/episode state to a scalar. The
//! orchestrator owns the side effects (updating the previous distance,
//! incrementing the step counter); everything here is stateless and unit
//! testable in isolation.

use glam::Vec3;

use crate::config::EnvConfig;

/// Breakdown of one tick's reward. Ephemeral: summed and discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RewardTerms {
    /// Bonus for being within reach of the target.
    pub goal: f32,
    /// Dense shaping term rewarding proximity.
    pub distance: f32,
    /// Bonus for strictly closing the distance since the previous tick.
    pub progress: f32,
    /// Per-tick efficiency penalty.
    pub time: f32,
    /// Penalty for standing still.
    pub idle: f32,
}

impl RewardTerms {
    /// The scalar handed to the trainer: the plain sum of all terms. No
    /// further normalisation or clipping is applied.
    pub fn total(&self) -> f32 {
        self.goal + self.distance + self.progress + self.time + self.idle
    }
}

/// Compute the reward terms for one agent tick.
///
/// `previous_distance` is the episode record's distance from the prior
/// tick, or `None` on the first step after a reset (no progress bonus is
/// possible then). The distance-shaping term normalises against the arena
/// diagonal, so it stays in `[0, distance_scale]` for any in-arena agent.
pub fn evaluate(
    config: &EnvConfig,
    agent: Vec3,
    speed: f32,
    target: Vec3,
    previous_distance: Option<f32>,
) -> RewardTerms {
    let distance = agent.distance(target);
    let max_expected = config.arena.diagonal().max(f32::EPSILON);

    let goal = if distance <= config.reach_threshold {
        config.reward.reach_bonus
    } else {
        0.0
    };

    let normalized = (distance / max_expected).clamp(0.0, 1.0);
    let distance_term = (1.0 - normalized) * config.reward.distance_scale;

    let progress = match previous_distance {
        Some(previous) if distance < previous => config.reward.progress_bonus,
        _ => 0.0,
    };

    let idle = if speed < config.reward.idle_speed {
        config.reward.idle_penalty
    } else {
        0.0
    };

    RewardTerms {
        goal,
        distance: distance_term,
        progress,
        time: config.reward.time_penalty,
        idle,
    }
}
