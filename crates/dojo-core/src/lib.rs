//! Core types and traits for the dojo training environment.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the dojo workspace:
//! agent handles, episode completion states, axis-aligned geometry,
//! and the collaborator traits at the simulation and trainer boundaries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod completion;
pub mod geom;
pub mod id;
pub mod traits;

pub use completion::Completion;
pub use geom::{horizontal_distance, Aabb};
pub use id::AgentId;
pub use traits::{AgentDriver, SpatialQuery, TrainingEnvironment};

pub use glam::{vec3, Vec3};
