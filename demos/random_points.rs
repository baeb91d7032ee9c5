//! Random-input harness for the hull pipeline.
//!
//! Generates a seeded uniform point cloud, times `compute_hull`, and
//! prints the resulting boundary.
//!
//! Usage:
//! ```text
//! cargo run --example random_points                # 10000 points, seed 42
//! cargo run --example random_points -- 500000      # bigger cloud
//! cargo run --example random_points -- 500000 7    # explicit seed
//! ```

use std::env;
use std::error::Error;
use std::time::Instant;

use hullis::{compute_hull, Point2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const COORDINATE_RADIUS: i64 = 1_000_000;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let count: usize = match args.next() {
        Some(raw) => raw.parse()?,
        None => 10_000,
    };
    let seed: u64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 42,
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<Point2> = (0..count)
        .map(|_| {
            Point2::new(
                rng.random_range(-COORDINATE_RADIUS..=COORDINATE_RADIUS),
                rng.random_range(-COORDINATE_RADIUS..=COORDINATE_RADIUS),
            )
        })
        .collect();

    let started = Instant::now();
    let hull = compute_hull(&points)?;
    let elapsed = started.elapsed();

    println!(
        "{count} points (seed {seed}) -> {} hull vertices in {elapsed:?}",
        hull.len()
    );
    for p in &hull {
        println!("({}, {})", p.x, p.y);
    }
    Ok(())
}
