//! End-to-end training-loop example.
//!
//! Demonstrates: build config → environment → register agents → drive the
//! three trainer hooks per tick, with a naive go-to-target controller
//! standing in for a learned policy.

use dojo_core::{AgentDriver, AgentId, TrainingEnvironment};
use dojo_env::{EnvConfig, TrainingEnv};
use dojo_test_utils::MockWorld;

fn main() {
    tracing_subscriber::fmt::init();

    let config = EnvConfig {
        seed: 42,
        ..Default::default()
    };
    let mut env = TrainingEnv::new(MockWorld::new(), config).unwrap();

    let agents: Vec<AgentId> = (0..4).map(AgentId).collect();
    for &agent in &agents {
        env.register_agent(agent);
        env.reset_episode(agent);
    }
    println!(
        "environment ready: {} obstacles, target at {:?}",
        env.layout().obstacle_count(),
        env.target()
    );

    let dt = 1.0 / 60.0;
    let step_length: f32 = 250.0;
    let mut episode_rewards = vec![0.0f32; agents.len()];

    for tick in 0..600 {
        env.tick(dt);
        for (i, &agent) in agents.iter().enumerate() {
            // Stand-in policy: walk straight at the target.
            let position = env.world().position(agent).unwrap();
            let to_target = env.target() - position;
            let distance = to_target.length();
            if distance > 1.0 {
                let step = to_target * (step_length.min(distance) / distance);
                env.world_mut().set_position(agent, position + step);
                env.world_mut().set_velocity(agent, step * 60.0);
            }

            episode_rewards[i] += env.gather_reward(agent);
            let completion = env.gather_completion(agent);
            if completion.is_done() {
                println!(
                    "  tick {tick:>3}: agent {agent} {completion}, episode return {:.2}",
                    episode_rewards[i]
                );
                episode_rewards[i] = 0.0;
                env.reset_episode(agent);
            }
        }
    }

    let stats = env.stats();
    println!(
        "done: {} resets, {} goal ticks, {} steps",
        stats.resets, stats.goals_reached, stats.steps
    );
}
