//! The reset solver: constrained random spawn positions.
//!
//! Spawn validity is a soft constraint. Every function here returns a
//! usable position even under a pathologically small or crowded arena,
//! trading placement quality for liveness — an episode reset must never
//! fail.

use glam::{vec3, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

/// Attempt budget for anchor-based agent spawning.
const AGENT_SPAWN_ATTEMPTS: u32 = 50;
/// Attempt budget for paired and target-only sampling.
const PAIR_SPAWN_ATTEMPTS: u32 = 100;

/// Uniform point within `center ± half_extent` on the horizontal plane,
/// with z pinned at `center.z + half_extent.z` (above the ground plane).
fn uniform_point(rng: &mut ChaCha8Rng, center: Vec3, half_extent: Vec3) -> Vec3 {
    vec3(
        center.x + rng.random_range(-half_extent.x..=half_extent.x),
        center.y + rng.random_range(-half_extent.y..=half_extent.y),
        center.z + half_extent.z,
    )
}

/// Solve a spawn position from candidate anchors.
///
/// Up to 50 attempts: pick a random anchor, perturb it horizontally
/// within `radius`, and accept if at least `min_separation` from every
/// position in `others`. Exhaustion falls back to the first anchor
/// verbatim; an empty anchor list degrades to the origin. Neither case
/// is an error.
pub fn agent_spawn_position(
    rng: &mut ChaCha8Rng,
    anchors: &[Vec3],
    radius: f32,
    others: &[Vec3],
    min_separation: f32,
) -> Vec3 {
    if anchors.is_empty() {
        warn!("no spawn anchors configured, spawning at origin");
        return Vec3::ZERO;
    }

    for _ in 0..AGENT_SPAWN_ATTEMPTS {
        let anchor = anchors[rng.random_range(0..anchors.len())];
        let candidate = anchor
            + vec3(
                rng.random_range(-radius..=radius),
                rng.random_range(-radius..=radius),
                0.0,
            );
        if others
            .iter()
            .all(|p| candidate.distance(*p) >= min_separation)
        {
            return candidate;
        }
    }

    warn!("spawn attempts exhausted, falling back to first anchor");
    anchors[0]
}

/// Solve a fresh (agent, target) pair of uniform in-arena positions at
/// least `min_separation` apart.
///
/// Both points are resampled each attempt; after 100 failures the
/// last-sampled pair is used regardless of separation.
pub fn paired_spawn_positions(
    rng: &mut ChaCha8Rng,
    center: Vec3,
    half_extent: Vec3,
    min_separation: f32,
) -> (Vec3, Vec3) {
    let mut pair = (
        uniform_point(rng, center, half_extent),
        uniform_point(rng, center, half_extent),
    );
    for _ in 0..PAIR_SPAWN_ATTEMPTS {
        if pair.0.distance(pair.1) >= min_separation {
            return pair;
        }
        pair = (
            uniform_point(rng, center, half_extent),
            uniform_point(rng, center, half_extent),
        );
    }
    warn!("paired spawn attempts exhausted, using last-sampled pair");
    pair
}

/// Re-roll a target position at least `min_separation` from `anchor`,
/// holding the anchor fixed.
///
/// Used when the agent's spawn came from a configured anchor and only the
/// target needs a fresh uniform position. Same exhaustion policy as
/// [`paired_spawn_positions`]: the last sample wins after 100 attempts.
pub fn target_spawn_position(
    rng: &mut ChaCha8Rng,
    center: Vec3,
    half_extent: Vec3,
    anchor: Vec3,
    min_separation: f32,
) -> Vec3 {
    let mut candidate = uniform_point(rng, center, half_extent);
    for _ in 0..PAIR_SPAWN_ATTEMPTS {
        if candidate.distance(anchor) >= min_separation {
            return candidate;
        }
        candidate = uniform_point(rng, center, half_extent);
    }
    candidate
}
