//! The obstacle layout: placement, lifecycle, and blocking queries.

use dojo_core::{horizontal_distance, SpatialQuery};
use glam::{vec3, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use crate::config::{LayoutConfig, LayoutError, ObstacleMode};
use crate::obstacle::Obstacle;
use crate::report::PlacementReport;

/// Attempt budget per obstacle for general bulk placement.
const PLACEMENT_ATTEMPTS: u32 = 100;
/// Attempt budget per obstacle when avoid-points are in play. Tighter,
/// since avoidance placement runs during episode resets.
const AVOIDANCE_ATTEMPTS: u32 = 50;

/// Owns the current set of obstacles and their lifecycle.
///
/// All placement is rejection sampling from an owned, seeded RNG:
/// identical `(config, seed)` and call sequence reproduce an identical
/// layout. Exhausted attempt budgets skip the obstacle and show up in
/// [`last_report`](ObstacleLayout::last_report); no placement operation
/// can fail at runtime.
#[derive(Debug)]
pub struct ObstacleLayout {
    config: LayoutConfig,
    mode: ObstacleMode,
    obstacles: Vec<Obstacle>,
    shuffle_elapsed: f64,
    rng: ChaCha8Rng,
    last_report: PlacementReport,
}

impl ObstacleLayout {
    /// Create an empty layout from a validated configuration.
    ///
    /// The layout starts with no obstacles regardless of mode; callers
    /// establish the initial set with [`initialize`](Self::initialize)
    /// (or let a Dynamic layout fill in lazily).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the configuration is invalid.
    pub fn new(config: LayoutConfig, seed: u64) -> Result<Self, LayoutError> {
        config.validate()?;
        let mode = config.mode;
        Ok(Self {
            config,
            mode,
            obstacles: Vec::new(),
            shuffle_elapsed: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            last_report: PlacementReport::default(),
        })
    }

    /// Replace the current set with a freshly sampled one.
    ///
    /// Runs up to 100 placement attempts per obstacle; obstacles whose
    /// budget runs out are skipped, so the resulting count may be below
    /// `max_obstacles`.
    pub fn initialize(&mut self, spatial: &dyn SpatialQuery) {
        self.place_all(spatial, &[], PLACEMENT_ATTEMPTS);
    }

    /// Replace the current set, additionally keeping every obstacle at
    /// least `avoid_radius` away from each point in `avoid`.
    ///
    /// Used at episode resets with the fresh agent and target positions,
    /// so no obstacle spawns on top of either. Runs up to 50 attempts per
    /// obstacle.
    pub fn initialize_avoiding(&mut self, spatial: &dyn SpatialQuery, avoid: &[Vec3]) {
        self.place_all(spatial, avoid, AVOIDANCE_ATTEMPTS);
    }

    /// Destroy all current obstacles. Idempotent.
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Replace the whole set, Dynamic mode only.
    ///
    /// In Static mode this is a no-op: a static layout only changes
    /// through an explicit [`initialize`](Self::initialize).
    pub fn regenerate(&mut self, spatial: &dyn SpatialQuery) {
        if self.mode != ObstacleMode::Dynamic {
            return;
        }
        self.place_all(spatial, &[], PLACEMENT_ATTEMPTS);
        debug!(count = self.obstacles.len(), "regenerated dynamic layout");
    }

    /// Switch lifecycle mode.
    ///
    /// Switching to Static places a fresh set immediately; switching to
    /// Dynamic clears the set, leaving re-establishment to the reshuffle
    /// timer or the next avoidance-aware placement.
    pub fn set_mode(&mut self, mode: ObstacleMode, spatial: &dyn SpatialQuery) {
        self.mode = mode;
        match mode {
            ObstacleMode::Static => self.initialize(spatial),
            ObstacleMode::Dynamic => {
                self.clear();
                self.shuffle_elapsed = 0.0;
            }
        }
    }

    /// Advance the reshuffle timer by `dt` seconds.
    ///
    /// Dynamic mode only: crossing the configured interval replaces the
    /// whole set and resets the timer. Static layouts never tick.
    pub fn tick(&mut self, dt: f64, spatial: &dyn SpatialQuery) {
        if self.mode != ObstacleMode::Dynamic {
            return;
        }
        self.shuffle_elapsed += dt;
        if self.shuffle_elapsed >= self.config.reshuffle_interval {
            self.regenerate(spatial);
            self.shuffle_elapsed = 0.0;
        }
    }

    /// Whether `point`, expanded by `agent_radius`, intersects any
    /// obstacle's footprint. Always false for an empty layout.
    pub fn is_blocked(&self, point: Vec3, agent_radius: f32) -> bool {
        self.obstacles
            .iter()
            .any(|o| o.blocks(point, agent_radius))
    }

    /// The current obstacles, in placement order.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Number of obstacles currently placed.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Current lifecycle mode.
    pub fn mode(&self) -> ObstacleMode {
        self.mode
    }

    /// The configuration this layout was built from.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Outcome counters of the most recent bulk placement.
    pub fn last_report(&self) -> PlacementReport {
        self.last_report
    }

    fn place_all(&mut self, spatial: &dyn SpatialQuery, avoid: &[Vec3], attempts: u32) {
        self.obstacles.clear();
        let requested = self.config.max_obstacles;
        for _ in 0..requested {
            if let Some(base) = self.find_base(spatial, avoid, attempts) {
                let (lo, hi) = self.config.size_range;
                let size = self.rng.random_range(lo..=hi);
                let obstacle = Obstacle::from_ground(base, size);
                trace!(position = ?obstacle.position, size, "placed obstacle");
                self.obstacles.push(obstacle);
            }
        }
        self.last_report = PlacementReport {
            requested,
            placed: self.obstacles.len(),
        };
        info!(
            placed = self.last_report.placed,
            requested,
            skipped = self.last_report.skipped(),
            mode = %self.mode,
            "obstacle layout placed"
        );
    }

    /// One rejection-sampling search for a valid ground-contact point.
    fn find_base(
        &mut self,
        spatial: &dyn SpatialQuery,
        avoid: &[Vec3],
        attempts: u32,
    ) -> Option<Vec3> {
        for _ in 0..attempts {
            let (x, y) = self
                .config
                .bias
                .sample_xy(&mut self.rng, &self.config.bounds);
            let ground = spatial
                .ground_height(x, y)
                .unwrap_or(self.config.default_ground_height);
            let base = vec3(x, y, ground + self.config.ground_clearance);
            if self.candidate_ok(base, avoid) {
                return Some(base);
            }
        }
        None
    }

    fn candidate_ok(&self, base: Vec3, avoid: &[Vec3]) -> bool {
        if !self.config.bounds.contains_xy(base) {
            return false;
        }
        if self.config.avoid_radius > 0.0
            && avoid
                .iter()
                .any(|p| horizontal_distance(base, *p) < self.config.avoid_radius)
        {
            return false;
        }
        !self
            .obstacles
            .iter()
            .any(|o| horizontal_distance(base, o.position) < self.config.min_spacing)
    }
}
