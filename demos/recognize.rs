//! Register a few strokes and recognize a redrawn one, with debug logging.
//!
//! ```text
//! RUST_LOG=unistroke=trace cargo run --example recognize --features tracing
//! ```

use glam::DVec2;
use tracing_subscriber::EnvFilter;
use unistroke::{Matcher, Point, TemplateStore, pt};

fn circle(center: Point, radius: f64) -> Vec<Point> {
    (0..=64)
        .map(|i| center + DVec2::from_angle(i as f64 / 64.0 * std::f64::consts::TAU) * radius)
        .collect()
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut store = TemplateStore::new();
    store.add_template("circle", &circle(pt(300.0, 300.0), 100.0))?;
    store.add_template("caret", &[pt(0.0, 100.0), pt(50.0, 0.0), pt(100.0, 100.0)])?;
    store.add_template(
        "zigzag",
        &[pt(0.0, 0.0), pt(25.0, 60.0), pt(50.0, 0.0), pt(75.0, 60.0), pt(100.0, 0.0)],
    )?;

    let stroke = circle(pt(40.0, 900.0), 35.0);
    let found = Matcher::new().recognize(&stroke, &store)?;
    println!(
        "{} (score {:.3}, rotated {:.1} degrees)",
        found.name(),
        found.score(),
        found.rotation().to_degrees()
    );
    Ok(())
}
