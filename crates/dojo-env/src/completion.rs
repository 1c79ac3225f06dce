//! The episode completion policy.
//!
//! A pure function deciding, each tick, whether an agent's episode keeps
//! running, terminated in a true end state, or was truncated by a budget.
//! Rules are evaluated in a fixed priority order; reaching the target
//! always wins over a simultaneously exhausted budget.

use dojo_core::Completion;
use glam::Vec3;

use crate::config::EnvConfig;
use crate::episode::EpisodeRecord;

/// Resolved agent state fed to the completion policy.
#[derive(Clone, Copy, Debug)]
pub struct AgentStatus {
    /// Current world position.
    pub position: Vec3,
    /// Liveness flag from the actuation collaborator.
    pub alive: bool,
}

/// Decide the completion state for one agent tick.
///
/// Priority order:
///
/// 1. unresolvable agent or target — terminated (unrecoverable for this
///    episode, harmless for every other agent);
/// 2. target within reach — terminated;
/// 3. step or time budget exhausted — truncated;
/// 4. outside the horizontal arena, or fallen below the kill height —
///    terminated;
/// 5. agent dead — terminated;
/// 6. otherwise running.
pub fn evaluate(
    config: &EnvConfig,
    agent: Option<AgentStatus>,
    target: Option<Vec3>,
    record: &EpisodeRecord,
    now: f64,
) -> Completion {
    let (Some(agent), Some(target)) = (agent, target) else {
        return Completion::Terminated;
    };

    if agent.position.distance(target) <= config.reach_threshold {
        return Completion::Terminated;
    }

    if config.limits.exceeded(record.steps, record.elapsed(now)) {
        return Completion::Truncated;
    }

    if !config.arena.contains_xy(agent.position) || agent.position.z < config.kill_z {
        return Completion::Terminated;
    }

    if !agent.alive {
        return Completion::Terminated;
    }

    Completion::Running
}
