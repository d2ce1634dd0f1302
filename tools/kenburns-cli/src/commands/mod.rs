pub mod config;
pub mod generate;
pub mod ratio;
pub mod simulate;

use kenburns_common::config::AppConfig;
use kenburns_engine::{GeneratorConfig, RandomTransitionGenerator};
use kenburns_geometry::easing::EasingFunction;

use crate::AnimationArgs;

/// Build a generator from config defaults overridden by command-line flags.
pub fn build_generator(
    config: &AppConfig,
    args: &AnimationArgs,
) -> anyhow::Result<RandomTransitionGenerator> {
    let mut generator_config = GeneratorConfig::from_defaults(&config.animation)?;
    if let Some(duration_ms) = args.duration_ms {
        anyhow::ensure!(duration_ms > 0, "--duration-ms must be positive");
        generator_config.transition_duration_ms = duration_ms;
    }
    if let Some(name) = &args.easing {
        generator_config.easing = name.parse::<EasingFunction>()?;
    }
    if args.no_chain {
        generator_config.chain_transitions = false;
    }

    anyhow::ensure!(
        !args.drawable.is_empty(),
        "drawable bounds must have positive width and height"
    );
    anyhow::ensure!(
        !args.viewport.is_empty(),
        "viewport must have positive width and height"
    );

    tracing::debug!(?generator_config, seed = ?args.seed, "Building transition generator");
    Ok(match args.seed {
        Some(seed) => RandomTransitionGenerator::with_seed(generator_config, seed),
        None => RandomTransitionGenerator::new(generator_config),
    })
}
