//! Dojo: episodic goal-navigation training environments for reinforcement
//! learning.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the dojo sub-crates. For most users, adding `dojo` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dojo::prelude::*;
//! use std::collections::HashMap;
//!
//! // A minimal world: flat ground, teleporting agents.
//! #[derive(Default)]
//! struct FlatWorld {
//!     agents: HashMap<AgentId, Vec3>,
//! }
//!
//! impl SpatialQuery for FlatWorld {
//!     fn ground_height(&self, _x: f32, _y: f32) -> Option<f32> {
//!         Some(0.0)
//!     }
//!     fn box_overlaps(&self, _region: &Aabb) -> bool {
//!         false
//!     }
//! }
//!
//! impl AgentDriver for FlatWorld {
//!     fn position(&self, agent: AgentId) -> Option<Vec3> {
//!         self.agents.get(&agent).copied()
//!     }
//!     fn velocity(&self, agent: AgentId) -> Option<Vec3> {
//!         self.agents.get(&agent).map(|_| Vec3::ZERO)
//!     }
//!     fn is_alive(&self, agent: AgentId) -> bool {
//!         self.agents.contains_key(&agent)
//!     }
//!     fn place_agent(&mut self, agent: AgentId, position: Vec3, _yaw: f32) {
//!         self.agents.insert(agent, position);
//!     }
//! }
//!
//! let mut env = TrainingEnv::new(FlatWorld::default(), EnvConfig::default()).unwrap();
//! env.register_agent(AgentId(0));
//! env.reset_episode(AgentId(0));
//!
//! // One trainer-driven tick.
//! env.tick(1.0 / 60.0);
//! let reward = env.gather_reward(AgentId(0));
//! let completion = env.gather_completion(AgentId(0));
//! assert!(reward.is_finite());
//! assert_eq!(completion, Completion::Running);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dojo-core` | IDs, completion states, geometry, collaborator traits |
//! | [`layout`] | `dojo-layout` | Obstacle placement, lifecycle, blocking queries |
//! | [`env`] | `dojo-env` | Rewards, completions, resets, the orchestrator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and collaborator traits (`dojo-core`).
///
/// Contains [`types::AgentId`], [`types::Completion`], [`types::Aabb`],
/// and the traits at the simulation and trainer boundaries.
pub use dojo_core as types;

/// Obstacle placement and lifecycle (`dojo-layout`).
///
/// The [`layout::ObstacleLayout`] owns the obstacle set and answers
/// blocking queries; placement strategies live in
/// [`layout::PlacementBias`].
pub use dojo_layout as layout;

/// The episodic environment (`dojo-env`).
///
/// [`env::TrainingEnv`] is the orchestrator exposing the three trainer
/// hooks; the reward and completion policies are pure functions in
/// [`env::reward`] and [`env::completion`].
pub use dojo_env as env;

/// Common imports for typical dojo usage.
///
/// ```rust
/// use dojo::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use dojo_core::{
        vec3, Aabb, AgentDriver, AgentId, Completion, SpatialQuery, TrainingEnvironment, Vec3,
    };

    // Layout
    pub use dojo_layout::{
        LayoutConfig, LayoutError, Obstacle, ObstacleLayout, ObstacleMode, PlacementBias,
        PlacementReport,
    };

    // Environment
    pub use dojo_env::{
        AgentStatus, ConfigError, EnvConfig, EnvStats, EpisodeLimits, EpisodeRecord, RewardConfig,
        RewardTerms, SpawnConfig, TrainingEnv,
    };
}
