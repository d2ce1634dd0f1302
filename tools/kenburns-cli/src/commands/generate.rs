//! Generate transitions and print them as JSON lines.

use serde::Serialize;

use kenburns_common::config::AppConfig;
use kenburns_engine::{Transition, TransitionGenerator};
use kenburns_geometry::rect::Rect;

use crate::AnimationArgs;

/// One generated transition, as printed.
#[derive(Debug, Serialize)]
pub struct TransitionRecord {
    pub index: usize,
    pub source: Rect,
    pub destiny: Rect,
    pub duration_ms: u64,
    pub chained: bool,
}

impl TransitionRecord {
    pub fn new(index: usize, transition: &Transition, previous: Option<&Transition>) -> Self {
        Self {
            index,
            source: transition.source_rect(),
            destiny: transition.destiny_rect(),
            duration_ms: transition.duration_ms(),
            chained: previous.is_some_and(|p| p.destiny_rect() == transition.source_rect()),
        }
    }
}

pub fn run(config: &AppConfig, args: &AnimationArgs, count: usize) -> anyhow::Result<()> {
    let mut generator = super::build_generator(config, args)?;

    let mut previous: Option<Transition> = None;
    for index in 0..count {
        let transition = generator.generate_next_transition(&args.drawable, &args.viewport)?;
        let record = TransitionRecord::new(index, &transition, previous.as_ref());
        println!("{}", serde_json::to_string(&record)?);
        previous = Some(transition);
    }

    tracing::info!(count, "Generated transitions");
    Ok(())
}
