use std::sync::Arc;

use proptest::prelude::*;

use kenburns_common::error::KenBurnsError;
use kenburns_engine::generator::{max_crop, GeneratorConfig, MIN_RECT_FACTOR};
use kenburns_engine::{RandomTransitionGenerator, Transition, TransitionGenerator};
use kenburns_geometry::easing::EasingFunction;
use kenburns_geometry::ratio::{ratio, same_aspect_ratio};
use kenburns_geometry::rect::Rect;

const EPS: f64 = 1e-6;

fn generator(seed: u64) -> RandomTransitionGenerator {
    RandomTransitionGenerator::with_seed(GeneratorConfig::default(), seed)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}

fn rect_close(a: &Rect, b: &Rect) -> bool {
    close(a.left, b.left) && close(a.top, b.top) && close(a.right, b.right) && close(a.bottom, b.bottom)
}

proptest! {
    #[test]
    fn random_rect_matches_viewport_ratio(
        dw in 1.0f64..5000.0, dh in 1.0f64..5000.0,
        vw in 1.0f64..5000.0, vh in 1.0f64..5000.0,
        seed in any::<u64>(),
    ) {
        let drawable = Rect::from_size(dw, dh);
        let viewport = Rect::from_size(vw, vh);
        let rect = generator(seed).generate_random_rect(&drawable, &viewport);
        prop_assert!(
            (ratio(&rect) - ratio(&viewport)).abs() <= 0.01,
            "ratio {} vs {}", ratio(&rect), ratio(&viewport)
        );
        prop_assert!(same_aspect_ratio(&rect, &viewport));
    }

    #[test]
    fn random_rect_stays_inside_drawable(
        left in 0.0f64..500.0, top in 0.0f64..500.0,
        dw in 1.0f64..5000.0, dh in 1.0f64..5000.0,
        vw in 1.0f64..5000.0, vh in 1.0f64..5000.0,
        seed in any::<u64>(),
    ) {
        let drawable = Rect::new(left, top, left + dw, top + dh);
        let viewport = Rect::from_size(vw, vh);
        let rect = generator(seed).generate_random_rect(&drawable, &viewport);
        prop_assert!(rect.left >= drawable.left);
        prop_assert!(rect.top >= drawable.top);
        prop_assert!(rect.right <= drawable.right + EPS * drawable.right.max(1.0));
        prop_assert!(rect.bottom <= drawable.bottom + EPS * drawable.bottom.max(1.0));
    }

    #[test]
    fn random_rect_size_is_bounded_by_max_crop(
        dw in 1.0f64..5000.0, dh in 1.0f64..5000.0,
        vw in 1.0f64..5000.0, vh in 1.0f64..5000.0,
        seed in any::<u64>(),
    ) {
        let drawable = Rect::from_size(dw, dh);
        let viewport = Rect::from_size(vw, vh);
        let max = max_crop(&drawable, &viewport);
        let rect = generator(seed).generate_random_rect(&drawable, &viewport);

        prop_assert!(rect.width() >= MIN_RECT_FACTOR * max.width() * (1.0 - EPS));
        prop_assert!(rect.width() <= max.width() * (1.0 + EPS));
        prop_assert!(rect.height() >= MIN_RECT_FACTOR * max.height() * (1.0 - EPS));
        prop_assert!(rect.height() <= max.height() * (1.0 + EPS));
    }

    #[test]
    fn generated_transitions_interpolate_between_endpoints(
        dw in 100.0f64..4000.0, dh in 100.0f64..4000.0,
        vw in 100.0f64..4000.0, vh in 100.0f64..4000.0,
        seed in any::<u64>(),
        rounds in 1usize..6,
    ) {
        let drawable = Rect::from_size(dw, dh);
        let viewport = Rect::from_size(vw, vh);
        let mut generator = generator(seed);

        for _ in 0..rounds {
            let t = generator.generate_next_transition(&drawable, &viewport).unwrap();
            let d = t.duration_ms();
            prop_assert!(rect_close(&t.interpolated_rect(0), &t.source_rect()));
            prop_assert!(rect_close(&t.interpolated_rect(d), &t.destiny_rect()));
            prop_assert_eq!(t.interpolated_rect(d + 1234), t.interpolated_rect(d));
        }
    }
}

#[test]
fn square_and_double_wide_rects_cannot_form_a_transition() {
    let result = Transition::new(
        Rect::from_size(300.0, 300.0),
        Rect::new(10.0, 10.0, 410.0, 210.0),
        10_000,
        Arc::new(EasingFunction::Linear),
    );
    assert!(matches!(
        result,
        Err(KenBurnsError::IncompatibleAspectRatio { .. })
    ));
}

#[test]
fn linear_transition_midpoint_is_exactly_halfway() {
    let src = Rect::new(0.0, 0.0, 800.0, 600.0);
    let dst = Rect::new(400.0, 300.0, 1000.0, 750.0);
    let t = Transition::new(src, dst, 10_000, Arc::new(EasingFunction::Linear)).unwrap();
    let mid = t.interpolated_rect(5_000);

    assert_eq!(mid.width(), 700.0);
    assert_eq!(mid.height(), 525.0);
    assert_eq!(mid.center_x(), 550.0);
    assert_eq!(mid.center_y(), 412.5);
}

#[test]
fn wide_drawable_with_square_viewport() {
    let drawable = Rect::new(0.0, 0.0, 1000.0, 500.0);
    let viewport = Rect::from_size(1.0, 1.0);

    let max = max_crop(&drawable, &viewport);
    assert_eq!(max.width(), 500.0);
    assert_eq!(max.height(), 500.0);

    let mut generator = generator(2024);
    for _ in 0..500 {
        let rect = generator.generate_random_rect(&drawable, &viewport);
        assert!((375.0..=500.0).contains(&rect.width()));
        assert!((375.0..=500.0).contains(&rect.height()));
        assert!(same_aspect_ratio(&rect, &viewport));
        assert!(drawable.contains_rect(&rect));
    }
}

#[test]
fn random_sizes_are_quantized_to_one_hundred_steps() {
    let drawable = Rect::from_size(1000.0, 1000.0);
    let viewport = Rect::from_size(1.0, 1.0);
    let mut generator = generator(77);

    for _ in 0..300 {
        let rect = generator.generate_random_rect(&drawable, &viewport);
        // width = (0.75 + 0.25 * k / 100) * 1000 = 750 + 2.5 * k
        let steps = (rect.width() - 750.0) / 2.5;
        assert!((steps - steps.round()).abs() < 1e-6, "width {}", rect.width());
        assert!((0.0..=100.0).contains(&steps.round()));
    }
}

#[test]
fn chained_transitions_form_a_continuous_path() {
    let drawable = Rect::from_size(4000.0, 3000.0);
    let viewport = Rect::from_size(1920.0, 1080.0);
    let mut generator = generator(8);

    let mut previous = generator
        .generate_next_transition(&drawable, &viewport)
        .unwrap();
    for _ in 0..25 {
        let next = generator
            .generate_next_transition(&drawable, &viewport)
            .unwrap();
        assert_eq!(next.source_rect(), previous.destiny_rect());
        assert!(rect_close(
            &next.interpolated_rect(0),
            &previous.interpolated_rect(previous.duration_ms())
        ));
        previous = next;
    }
}
