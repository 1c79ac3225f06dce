//! Episodic training environment for goal-navigation agents.
//!
//! Ties the reward policy, completion policy, reset solver, and obstacle
//! layout together behind the three hooks an external trainer drives per
//! tick per agent: gather a reward, gather a completion status, and reset
//! finished episodes. See [`TrainingEnv`] for the orchestrator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod completion;
pub mod config;
pub mod env;
pub mod episode;
pub mod reset;
pub mod reward;
pub mod stats;

pub use completion::AgentStatus;
pub use config::{ConfigError, EnvConfig, EpisodeLimits, RewardConfig, SpawnConfig};
pub use env::TrainingEnv;
pub use episode::EpisodeRecord;
pub use reward::RewardTerms;
pub use stats::EnvStats;
