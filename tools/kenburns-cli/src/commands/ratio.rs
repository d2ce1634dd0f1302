//! Compare the aspect ratios of two sizes.

use kenburns_geometry::ratio::{ratio, same_aspect_ratio, truncate, RATIO_DECIMAL_PLACES};
use kenburns_geometry::rect::Rect;

pub fn run(a: Rect, b: Rect) -> anyhow::Result<()> {
    anyhow::ensure!(
        !a.is_empty() && !b.is_empty(),
        "both sizes must have positive width and height"
    );

    let ra = truncate(ratio(&a), RATIO_DECIMAL_PLACES);
    let rb = truncate(ratio(&b), RATIO_DECIMAL_PLACES);
    let same = same_aspect_ratio(&a, &b);

    println!("A: {}x{} (ratio {ra:.3})", a.width(), a.height());
    println!("B: {}x{} (ratio {rb:.3})", b.width(), b.height());
    println!(
        "Same aspect ratio: {} (difference {:.3})",
        if same { "yes" } else { "no" },
        (ra - rb).abs()
    );
    Ok(())
}
