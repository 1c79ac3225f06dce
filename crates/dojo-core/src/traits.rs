//! Collaborator traits at the simulation and trainer boundaries.
//!
//! The environment core never talks to a concrete engine. Spatial queries
//! and agent actuation are injected through [`SpatialQuery`] and
//! [`AgentDriver`]; the external trainer consumes the environment through
//! [`TrainingEnvironment`].

use crate::geom::Aabb;
use crate::id::AgentId;
use crate::Completion;
use glam::Vec3;

/// Read-only spatial queries against the simulated world.
///
/// Implemented by the physics/level collaborator. All methods are
/// best-effort: a missing answer degrades to a configured default on the
/// caller's side, never to an error.
pub trait SpatialQuery {
    /// Ground height at the given horizontal position.
    ///
    /// Returns `None` if no ground was hit (e.g. the position is over a
    /// pit or outside the level). Callers substitute a configured
    /// default height.
    fn ground_height(&self, x: f32, y: f32) -> Option<f32>;

    /// Whether the given box region overlaps existing level geometry.
    fn box_overlaps(&self, region: &Aabb) -> bool;
}

/// Agent state access and actuation.
///
/// Implemented by the character/locomotion collaborator. Accessors return
/// `None` for handles the world cannot resolve (despawned, never
/// registered); the environment treats that as an agent-local, recoverable
/// condition.
pub trait AgentDriver {
    /// Current world position of the agent, if it can be resolved.
    fn position(&self, agent: AgentId) -> Option<Vec3>;

    /// Current velocity of the agent, if it can be resolved.
    fn velocity(&self, agent: AgentId) -> Option<Vec3>;

    /// Whether the agent is alive. Unresolvable agents report `false`.
    fn is_alive(&self, agent: AgentId) -> bool;

    /// Teleport the agent to `position` facing `yaw` radians, clearing
    /// any accumulated velocity.
    fn place_agent(&mut self, agent: AgentId, position: Vec3, yaw: f32);
}

/// The three per-agent hooks an external trainer drives every tick.
///
/// The contract per simulation tick, for each active agent id: gather a
/// reward, gather a completion status, and — if the episode is over —
/// reset it. [`gather_reward`](TrainingEnvironment::gather_reward)
/// advances per-episode bookkeeping as a side effect;
/// [`gather_completion`](TrainingEnvironment::gather_completion) is pure.
pub trait TrainingEnvironment {
    /// Reward earned by the agent this tick.
    ///
    /// Updates the agent's episode bookkeeping (step counter, previous
    /// distance to target) as a side effect. Unresolvable agents earn 0.
    fn gather_reward(&mut self, agent: AgentId) -> f32;

    /// Completion status of the agent's current episode. Read-only.
    fn gather_completion(&self, agent: AgentId) -> Completion;

    /// Start a fresh episode for the agent: clear its bookkeeping, solve
    /// a new spawn location, and apply it through the driver.
    fn reset_episode(&mut self, agent: AgentId);
}
