//! Strongly-typed agent identifiers.

use std::fmt;

/// Identifies an agent registered with a training environment.
///
/// Agent IDs are assigned by the external trainer/manager and are stable
/// for the agent's lifetime in the environment. The environment never
/// allocates IDs itself; it only keys per-agent bookkeeping by them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
