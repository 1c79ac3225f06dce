//! Placement diagnostics.

/// Outcome counters for the most recent bulk placement.
///
/// Placement is best-effort: an obstacle whose attempt budget runs out is
/// skipped, not an error. The report makes that degradation visible to
/// calling code without changing control flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementReport {
    /// Number of obstacles the placement pass aimed for.
    pub requested: usize,
    /// Number actually placed.
    pub placed: usize,
}

impl PlacementReport {
    /// Obstacles skipped because their attempt budget was exhausted.
    pub fn skipped(&self) -> usize {
        self.requested.saturating_sub(self.placed)
    }
}
