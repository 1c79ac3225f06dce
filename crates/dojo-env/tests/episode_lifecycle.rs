//! End-to-end episode lifecycle scenarios against the mock world.

use dojo_core::{AgentDriver, AgentId, Completion, TrainingEnvironment};
use dojo_env::{EnvConfig, EpisodeLimits, SpawnConfig, TrainingEnv};
use dojo_layout::ObstacleMode;
use dojo_test_utils::MockWorld;
use glam::vec3;

const A: AgentId = AgentId(0);
const B: AgentId = AgentId(1);

fn env_with(config: EnvConfig) -> TrainingEnv<MockWorld> {
    TrainingEnv::new(MockWorld::new(), config).unwrap()
}

/// A distant, healthy, in-bounds agent runs for exactly the step budget,
/// then truncates — never terminates.
#[test]
fn truncates_at_step_budget_boundary() {
    let mut env = env_with(EnvConfig {
        limits: EpisodeLimits {
            max_steps: Some(1000),
            max_seconds: None,
        },
        ..Default::default()
    });
    env.register_agent(A);
    // Inside the arena, 5000 units from a target beyond it.
    env.world_mut().add_agent(A, vec3(-1900.0, 0.0, 0.0));
    env.set_target(vec3(3100.0, 0.0, 0.0));

    for step in 1..=999 {
        env.gather_reward(A);
        assert_eq!(env.episode(A).unwrap().steps, step);
    }
    assert_eq!(env.gather_completion(A), Completion::Running);

    env.gather_reward(A);
    assert_eq!(env.gather_completion(A), Completion::Truncated);
}

/// Reaching the target terminates no matter how much budget has burned.
#[test]
fn reach_terminates_even_past_budget() {
    let mut env = env_with(EnvConfig::default());
    env.register_agent(A);
    env.world_mut().add_agent(A, vec3(1900.0, 0.0, 0.0));
    env.set_target(vec3(-1900.0, 0.0, 0.0));

    for _ in 0..1500 {
        env.gather_reward(A);
    }
    assert_eq!(env.gather_completion(A), Completion::Truncated);

    // Teleport within reach: termination beats the exhausted budget.
    env.world_mut().set_position(A, vec3(-1800.0, 0.0, 0.0));
    assert_eq!(env.gather_completion(A), Completion::Terminated);
}

/// The time budget truncates on the simulation clock alone.
#[test]
fn truncates_on_simulated_time() {
    let mut env = env_with(EnvConfig {
        limits: EpisodeLimits {
            max_steps: None,
            max_seconds: Some(30.0),
        },
        ..Default::default()
    });
    env.register_agent(A);
    env.reset_episode(A);
    env.set_target(vec3(1900.0, 1900.0, 0.0));
    env.world_mut().set_position(A, vec3(-1900.0, -1900.0, 50.0));

    env.tick(29.5);
    assert_eq!(env.gather_completion(A), Completion::Running);
    env.tick(0.6);
    assert_eq!(env.gather_completion(A), Completion::Truncated);
}

/// A reset in an arena too crowded for any valid spawn still succeeds,
/// falling back to the first anchor.
#[test]
fn crowded_spawn_always_resolves() {
    let anchor = vec3(0.0, 0.0, 100.0);
    let mut env = env_with(EnvConfig {
        spawn: SpawnConfig {
            anchors: vec![anchor],
            radius: 50.0,
            min_agent_separation: 100_000.0,
        },
        ..Default::default()
    });
    env.register_agent(A);
    env.register_agent(B);
    // The blocker sits exactly on the only anchor.
    env.world_mut().add_agent(B, anchor);

    env.reset_episode(A);
    let placed = env.world().position(A).unwrap();
    let expected = anchor + vec3(0.0, 0.0, env.config().ground_clearance);
    assert_eq!(placed, expected);
    assert_eq!(env.episode(A).unwrap().steps, 0);
}

/// Switching to Dynamic empties the layout immediately; the next reset
/// re-establishes it around the fresh spawn pair.
#[test]
fn dynamic_switch_then_reset_reestablishes_obstacles() {
    let mut env = env_with(EnvConfig::default());
    env.register_agent(A);
    assert!(env.layout().obstacle_count() > 0, "static layout starts full");

    env.set_obstacle_mode(ObstacleMode::Dynamic);
    assert_eq!(env.layout().obstacle_count(), 0);

    env.reset_episode(A);
    assert!(env.layout().obstacle_count() > 0);

    env.set_obstacle_mode(ObstacleMode::Static);
    assert!(env.layout().obstacle_count() > 0, "static switch re-places");
}

/// A naive go-to-target controller completes many episodes; bookkeeping
/// stays coherent throughout.
#[test]
fn training_loop_smoke() {
    let mut env = env_with(EnvConfig {
        seed: 99,
        ..Default::default()
    });
    let agents = [A, B, AgentId(2), AgentId(3)];
    for agent in agents {
        env.register_agent(agent);
        env.reset_episode(agent);
    }

    let dt = 1.0 / 60.0;
    let step_length: f32 = 300.0;
    for _ in 0..2000 {
        env.tick(dt);
        for agent in agents {
            // Drive straight at the target, ignoring obstacles (the mock
            // world has no collision).
            let position = env.world().position(agent).unwrap();
            let to_target = env.target() - position;
            let distance = to_target.length();
            if distance > 1.0 {
                let step = to_target * (step_length.min(distance) / distance);
                env.world_mut().set_position(agent, position + step);
                env.world_mut().set_velocity(agent, step * 60.0);
            }

            let reward = env.gather_reward(agent);
            assert!(reward.is_finite());
            if env.gather_completion(agent).is_done() {
                env.reset_episode(agent);
            }
        }
    }

    let stats = env.stats();
    assert_eq!(stats.steps, 4 * 2000);
    assert!(stats.goals_reached > 0, "controller should reach targets");
    assert!(
        stats.resets as usize > agents.len(),
        "episodes should have cycled: {stats:?}"
    );
}

/// Deregistration drops bookkeeping; the hooks stay harmless for unknown
/// ids and other agents keep running.
#[test]
fn deregistered_agents_are_isolated() {
    let mut env = env_with(EnvConfig::default());
    env.register_agent(A);
    env.register_agent(B);
    env.reset_episode(A);
    env.reset_episode(B);

    env.deregister_agent(A);
    env.world_mut().remove_agent(A);

    assert_eq!(env.gather_reward(A), 0.0);
    assert_eq!(env.gather_completion(A), Completion::Terminated);

    // B is untouched by A's disappearance.
    assert!(env.episode(B).is_some());
    let reward = env.gather_reward(B);
    assert!(reward.is_finite());
}
