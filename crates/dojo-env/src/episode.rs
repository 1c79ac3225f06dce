//! Per-agent episode bookkeeping.

/// Bookkeeping for one agent's current episode.
///
/// Created lazily the first time an agent is reset (or first earns a
/// reward), cleared on every reset, and removed only when the agent is
/// deregistered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EpisodeRecord {
    /// Number of reward-gathering steps taken this episode.
    pub steps: u32,
    /// Distance to the target at the previous step, if any step has been
    /// taken since the last reset. Drives the progress bonus.
    pub previous_distance: Option<f32>,
    /// Simulation time at which this episode started. `None` until the
    /// first reset.
    pub started_at: Option<f64>,
}

impl EpisodeRecord {
    /// Start a fresh episode at simulation time `now`.
    pub fn begin(&mut self, now: f64) {
        self.steps = 0;
        self.previous_distance = None;
        self.started_at = Some(now);
    }

    /// Seconds elapsed since the episode started. Zero for a record that
    /// has never been reset.
    pub fn elapsed(&self, now: f64) -> f64 {
        self.started_at.map(|t| now - t).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_everything() {
        let mut record = EpisodeRecord {
            steps: 412,
            previous_distance: Some(87.5),
            started_at: Some(3.0),
        };
        record.begin(10.0);
        assert_eq!(record.steps, 0);
        assert_eq!(record.previous_distance, None);
        assert_eq!(record.started_at, Some(10.0));
    }

    #[test]
    fn elapsed_counts_from_start() {
        let mut record = EpisodeRecord::default();
        assert_eq!(record.elapsed(99.0), 0.0);
        record.begin(5.0);
        assert!((record.elapsed(12.5) - 7.5).abs() < 1e-9);
    }
}
