//! Cumulative environment counters.

/// Running totals over the lifetime of a training environment.
///
/// These make degradation and progress visible to orchestration code
/// without ever interrupting the training loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvStats {
    /// Total episode resets across all agents.
    pub resets: u64,
    /// Total reward-gathering steps across all agents.
    pub steps: u64,
    /// Ticks on which an agent was within reach of the target.
    pub goals_reached: u64,
}
