//! Shared test fixtures for the dojo workspace.
//!
//! [`MockWorld`] is an in-memory stand-in for the simulation and
//! actuation collaborators, letting environment logic run in unit tests,
//! integration tests, and benches without an engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod world;

pub use world::{MockAgent, MockWorld};
