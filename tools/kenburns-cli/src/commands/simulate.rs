//! Drive the frame loop and print the crop rect of every frame.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use kenburns_common::clock::{AnimationClock, RateController};
use kenburns_common::config::AppConfig;
use kenburns_engine::{KenBurnsDriver, Transition, TransitionListener};
use kenburns_geometry::rect::Rect;

use crate::AnimationArgs;

#[derive(Debug, Serialize)]
struct FrameRecord {
    time_ms: u64,
    transition: usize,
    rect: Rect,
}

/// Counts started transitions and logs boundaries.
struct TransitionCounter(Rc<RefCell<usize>>);

impl TransitionListener for TransitionCounter {
    fn on_transition_start(&mut self, transition: &Transition) {
        *self.0.borrow_mut() += 1;
        tracing::info!(
            source = %transition.source_rect(),
            destiny = %transition.destiny_rect(),
            "Transition started"
        );
    }

    fn on_transition_end(&mut self, transition: &Transition) {
        tracing::info!(destiny = %transition.destiny_rect(), "Transition ended");
    }
}

pub fn run(
    config: &AppConfig,
    args: &AnimationArgs,
    duration_secs: f64,
    fps: Option<u32>,
    realtime: bool,
) -> anyhow::Result<()> {
    anyhow::ensure!(duration_secs >= 0.0, "--duration-secs must not be negative");
    let fps = fps.unwrap_or(config.animation.fps);
    anyhow::ensure!(fps > 0, "--fps must be positive");

    let generator = super::build_generator(config, args)?;
    let started = Rc::new(RefCell::new(0usize));

    let mut driver = KenBurnsDriver::new(generator);
    driver.set_listener(TransitionCounter(Rc::clone(&started)));
    driver.set_drawable_bounds(args.drawable)?;
    driver.set_viewport(args.viewport)?;

    let total_ms = AnimationClock::secs_to_ms(duration_secs);
    let mut rate = RateController::new(fps);
    let clock = AnimationClock::start();
    let mut simulated_ms = 0;
    let mut frames = 0usize;

    loop {
        let now_ms = if realtime {
            std::thread::sleep(rate.time_until_next(clock.elapsed_ms()));
            clock.elapsed_ms()
        } else {
            simulated_ms
        };
        if now_ms > total_ms {
            break;
        }
        if !rate.should_tick(now_ms) {
            continue;
        }

        let transition = *started.borrow();
        if let Some(rect) = driver.on_frame(now_ms)? {
            let record = FrameRecord {
                time_ms: now_ms,
                transition,
                rect,
            };
            println!("{}", serde_json::to_string(&record)?);
            frames += 1;
        }

        simulated_ms += rate.interval_ms();
    }

    tracing::info!(
        frames,
        transitions = *started.borrow(),
        "Simulation finished"
    );
    Ok(())
}
