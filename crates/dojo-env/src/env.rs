//! The training environment orchestrator.

use dojo_core::{AgentDriver, AgentId, Completion, SpatialQuery, TrainingEnvironment};
use dojo_layout::{ObstacleLayout, ObstacleMode};
use glam::{vec3, Vec3};
use indexmap::{IndexMap, IndexSet};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::completion::{self, AgentStatus};
use crate::config::{ConfigError, EnvConfig};
use crate::episode::EpisodeRecord;
use crate::reset;
use crate::reward;
use crate::stats::EnvStats;

/// Separate RNG stream for the obstacle layout, so layout draws and spawn
/// draws stay independent under one config seed.
const LAYOUT_SEED_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Orchestrates episodic training across any number of registered agents.
///
/// Owns the world adapter, the obstacle layout, per-agent episode
/// bookkeeping, and a simulation clock. The external trainer drives the
/// three [`TrainingEnvironment`] hooks per tick per agent; the host
/// simulation advances the clock (and the dynamic-obstacle timer) through
/// [`tick`](TrainingEnv::tick).
///
/// All state advances deterministically from `(config, seed)` under a
/// fixed call sequence: every random draw comes from owned, seeded RNGs.
pub struct TrainingEnv<W> {
    world: W,
    config: EnvConfig,
    layout: ObstacleLayout,
    agents: IndexSet<AgentId>,
    episodes: IndexMap<AgentId, EpisodeRecord>,
    target: Vec3,
    clock: f64,
    rng: ChaCha8Rng,
    stats: EnvStats,
}

impl<W: SpatialQuery + AgentDriver> TrainingEnv<W> {
    /// Create an environment from a validated configuration.
    ///
    /// A static obstacle layout is placed immediately; a dynamic one is
    /// established lazily (first reset or first reshuffle). The target
    /// starts above the arena center and takes its first real position on
    /// the first episode reset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn new(world: W, config: EnvConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = ObstacleLayout::new(config.layout.clone(), config.seed ^ LAYOUT_SEED_STREAM)?;
        let target = config.arena.center + vec3(0.0, 0.0, config.arena.half_extent.z);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        let mut env = Self {
            world,
            config,
            layout,
            agents: IndexSet::new(),
            episodes: IndexMap::new(),
            target,
            clock: 0.0,
            rng,
            stats: EnvStats::default(),
        };
        if env.config.use_obstacles && env.layout.mode() == ObstacleMode::Static {
            env.layout.initialize(&env.world);
        }
        Ok(env)
    }

    /// Register an agent id. Returns `false` if it was already registered.
    ///
    /// Registration feeds the separation constraint at spawn time and the
    /// ordered [`agents`](TrainingEnv::agents) iteration; the hooks
    /// themselves accept any id.
    pub fn register_agent(&mut self, agent: AgentId) -> bool {
        self.agents.insert(agent)
    }

    /// Deregister an agent id, dropping its episode record. Returns
    /// `false` if it was not registered.
    pub fn deregister_agent(&mut self, agent: AgentId) -> bool {
        self.episodes.shift_remove(&agent);
        self.agents.shift_remove(&agent)
    }

    /// Registered agent ids in registration order.
    pub fn agents(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().copied()
    }

    /// Advance the simulation clock by `dt` seconds.
    ///
    /// Also drives the dynamic-obstacle reshuffle timer. The time budget
    /// in the completion policy measures against this clock, so a run is
    /// deterministic under fixed-step ticking.
    pub fn tick(&mut self, dt: f64) {
        self.clock += dt;
        if self.config.use_obstacles {
            self.layout.tick(dt, &self.world);
        }
    }

    /// Current simulation time in seconds.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Current target position.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Move the target explicitly, outside the reset flow.
    pub fn set_target(&mut self, position: Vec3) {
        self.target = position;
    }

    /// The obstacle layout.
    pub fn layout(&self) -> &ObstacleLayout {
        &self.layout
    }

    /// Switch the obstacle layout's lifecycle mode at runtime.
    ///
    /// Switching to Static places a fresh set immediately; switching to
    /// Dynamic clears the set, which is then re-established lazily at the
    /// next reset or reshuffle.
    pub fn set_obstacle_mode(&mut self, mode: ObstacleMode) {
        self.layout.set_mode(mode, &self.world);
    }

    /// An agent's episode record, if it has one yet.
    pub fn episode(&self, agent: AgentId) -> Option<&EpisodeRecord> {
        self.episodes.get(&agent)
    }

    /// Cumulative environment counters.
    pub fn stats(&self) -> EnvStats {
        self.stats
    }

    /// The environment's configuration.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// The world adapter.
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable access to the world adapter.
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }
}

impl<W: SpatialQuery + AgentDriver> TrainingEnvironment for TrainingEnv<W> {
    fn gather_reward(&mut self, agent: AgentId) -> f32 {
        let Some(position) = self.world.position(agent) else {
            // Unresolvable handle: zero reward, bookkeeping untouched.
            return 0.0;
        };
        let speed = self
            .world
            .velocity(agent)
            .map(|v| v.length())
            .unwrap_or(0.0);
        let previous = self.episodes.get(&agent).and_then(|r| r.previous_distance);

        let terms = reward::evaluate(&self.config, position, speed, self.target, previous);
        let distance = position.distance(self.target);
        if distance <= self.config.reach_threshold {
            self.stats.goals_reached += 1;
            trace!(agent = %agent, distance, "agent reached target");
        }

        let record = self.episodes.entry(agent).or_default();
        record.previous_distance = Some(distance);
        record.steps += 1;
        self.stats.steps += 1;

        terms.total()
    }

    fn gather_completion(&self, agent: AgentId) -> Completion {
        let status = self.world.position(agent).map(|position| AgentStatus {
            position,
            alive: self.world.is_alive(agent),
        });
        let record = self.episodes.get(&agent).copied().unwrap_or_default();
        completion::evaluate(&self.config, status, Some(self.target), &record, self.clock)
    }

    fn reset_episode(&mut self, agent: AgentId) {
        let arena = self.config.arena;
        let others: SmallVec<[Vec3; 8]> = self
            .agents
            .iter()
            .filter(|&&a| a != agent)
            .filter_map(|&a| self.world.position(a))
            .collect();

        let (agent_position, target_position) = if self.config.spawn.anchors.is_empty() {
            reset::paired_spawn_positions(
                &mut self.rng,
                arena.center,
                arena.half_extent,
                self.config.min_target_separation,
            )
        } else {
            let spawn = &self.config.spawn;
            let agent_position = reset::agent_spawn_position(
                &mut self.rng,
                &spawn.anchors,
                spawn.radius,
                &others,
                spawn.min_agent_separation,
            );
            let target_position = reset::target_spawn_position(
                &mut self.rng,
                arena.center,
                arena.half_extent,
                agent_position,
                self.config.min_target_separation,
            );
            (agent_position, target_position)
        };

        self.world.place_agent(
            agent,
            agent_position + vec3(0.0, 0.0, self.config.ground_clearance),
            0.0,
        );
        self.target = target_position;

        let record = self.episodes.entry(agent).or_default();
        record.begin(self.clock);
        self.stats.resets += 1;

        // A dynamic layout left empty by a mode switch (or never filled)
        // gets established here, steering clear of the fresh pair.
        if self.config.use_obstacles
            && self.layout.mode() == ObstacleMode::Dynamic
            && self.layout.obstacle_count() == 0
        {
            self.layout
                .initialize_avoiding(&self.world, &[agent_position, target_position]);
        }

        debug!(
            agent = %agent,
            agent_position = ?agent_position,
            target_position = ?target_position,
            distance = agent_position.distance(target_position),
            "episode reset"
        );
    }
}

impl<W> std::fmt::Debug for TrainingEnv<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainingEnv")
            .field("clock", &self.clock)
            .field("agents", &self.agents.len())
            .field("target", &self.target)
            .field("obstacles", &self.layout.obstacle_count())
            .finish()
    }
}
