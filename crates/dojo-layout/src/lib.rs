//! Procedural obstacle placement for the dojo training environment.
//!
//! [`ObstacleLayout`] owns the current set of obstacles and keeps it
//! usable for blocking queries and spawn-validity checks. Placement is
//! rejection sampling under separation constraints: bounded, synchronous,
//! and best-effort — exhausted attempt budgets degrade to fewer obstacles,
//! never to an error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bias;
pub mod config;
pub mod layout;
pub mod obstacle;
pub mod report;

pub use bias::PlacementBias;
pub use config::{LayoutConfig, LayoutError, ObstacleMode};
pub use layout::ObstacleLayout;
pub use obstacle::Obstacle;
pub use report::PlacementReport;
