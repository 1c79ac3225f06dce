//! An in-memory world implementing the collaborator traits.

use dojo_core::{Aabb, AgentDriver, AgentId, SpatialQuery};
use glam::Vec3;
use indexmap::IndexMap;

/// State the mock world tracks per agent.
#[derive(Clone, Copy, Debug)]
pub struct MockAgent {
    /// Current position.
    pub position: Vec3,
    /// Current velocity.
    pub velocity: Vec3,
    /// Liveness flag.
    pub alive: bool,
}

/// Flat-ground mock of the simulation and actuation collaborators.
///
/// Agents are stored in an ordered map so iteration in tests is
/// deterministic. [`place_agent`](AgentDriver::place_agent) upserts:
/// placing an unknown agent spawns it, matching an engine that creates
/// characters on demand. Every placement is also recorded in
/// [`placements`](MockWorld::placements) for assertions.
#[derive(Clone, Debug)]
pub struct MockWorld {
    /// Uniform ground height reported everywhere, or `None` to report no
    /// ground at all (exercises the caller's default-height fallback).
    pub ground: Option<f32>,
    /// Log of `place_agent` calls as `(agent, position, yaw)`.
    pub placements: Vec<(AgentId, Vec3, f32)>,
    agents: IndexMap<AgentId, MockAgent>,
}

impl MockWorld {
    /// A world with flat ground at height zero.
    pub fn new() -> Self {
        Self::with_ground(0.0)
    }

    /// A world with flat ground at the given height.
    pub fn with_ground(height: f32) -> Self {
        Self {
            ground: Some(height),
            placements: Vec::new(),
            agents: IndexMap::new(),
        }
    }

    /// A world where ground queries never hit.
    pub fn without_ground() -> Self {
        Self {
            ground: None,
            placements: Vec::new(),
            agents: IndexMap::new(),
        }
    }

    /// Spawn an agent at `position`, alive, at rest.
    pub fn add_agent(&mut self, agent: AgentId, position: Vec3) {
        self.agents.insert(
            agent,
            MockAgent {
                position,
                velocity: Vec3::ZERO,
                alive: true,
            },
        );
    }

    /// Remove an agent entirely, making its handle unresolvable.
    pub fn remove_agent(&mut self, agent: AgentId) {
        self.agents.shift_remove(&agent);
    }

    /// Move an existing agent. No-op for unknown agents.
    pub fn set_position(&mut self, agent: AgentId, position: Vec3) {
        if let Some(a) = self.agents.get_mut(&agent) {
            a.position = position;
        }
    }

    /// Set an existing agent's velocity. No-op for unknown agents.
    pub fn set_velocity(&mut self, agent: AgentId, velocity: Vec3) {
        if let Some(a) = self.agents.get_mut(&agent) {
            a.velocity = velocity;
        }
    }

    /// Set an existing agent's liveness flag. No-op for unknown agents.
    pub fn set_alive(&mut self, agent: AgentId, alive: bool) {
        if let Some(a) = self.agents.get_mut(&agent) {
            a.alive = alive;
        }
    }

    /// Look up an agent's state.
    pub fn agent(&self, agent: AgentId) -> Option<&MockAgent> {
        self.agents.get(&agent)
    }
}

impl Default for MockWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialQuery for MockWorld {
    fn ground_height(&self, _x: f32, _y: f32) -> Option<f32> {
        self.ground
    }

    fn box_overlaps(&self, _region: &Aabb) -> bool {
        false
    }
}

impl AgentDriver for MockWorld {
    fn position(&self, agent: AgentId) -> Option<Vec3> {
        self.agents.get(&agent).map(|a| a.position)
    }

    fn velocity(&self, agent: AgentId) -> Option<Vec3> {
        self.agents.get(&agent).map(|a| a.velocity)
    }

    fn is_alive(&self, agent: AgentId) -> bool {
        self.agents.get(&agent).map(|a| a.alive).unwrap_or(false)
    }

    fn place_agent(&mut self, agent: AgentId, position: Vec3, yaw: f32) {
        self.placements.push((agent, position, yaw));
        match self.agents.get_mut(&agent) {
            Some(a) => {
                a.position = position;
                a.velocity = Vec3::ZERO;
            }
            None => {
                self.add_agent(agent, position);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn unknown_agents_are_unresolvable() {
        let world = MockWorld::new();
        assert_eq!(world.position(AgentId(1)), None);
        assert_eq!(world.velocity(AgentId(1)), None);
        assert!(!world.is_alive(AgentId(1)));
    }

    #[test]
    fn place_agent_upserts_and_zeroes_velocity() {
        let mut world = MockWorld::new();
        world.place_agent(AgentId(1), vec3(1.0, 2.0, 3.0), 0.0);
        assert_eq!(world.position(AgentId(1)), Some(vec3(1.0, 2.0, 3.0)));

        world.set_velocity(AgentId(1), vec3(100.0, 0.0, 0.0));
        world.place_agent(AgentId(1), Vec3::ZERO, 0.0);
        assert_eq!(world.velocity(AgentId(1)), Some(Vec3::ZERO));
        assert_eq!(world.placements.len(), 2);
    }

    #[test]
    fn ground_modes() {
        assert_eq!(MockWorld::with_ground(5.0).ground_height(0.0, 0.0), Some(5.0));
        assert_eq!(MockWorld::without_ground().ground_height(0.0, 0.0), None);
    }
}
