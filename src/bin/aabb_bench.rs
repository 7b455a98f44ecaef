//! Ray/AABB slab-test throughput benchmark.
//!
//! Builds one ray and one box, intersects them `--iterations` times, and
//! prints the accumulated sum, the elapsed time, and the throughput in
//! millions of tests per second.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use raybench::aabb::Aabb;
use raybench::bench::{measure, random_unit_vector};
use raybench::ray::Ray;
use raybench::{Point3, Vector3};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of intersection tests to run.
    #[arg(long, default_value_t = 100_000_000)]
    iterations: u64,

    /// Draw the ray direction from a uniform sphere sampler instead of
    /// using the fixed test case.
    #[arg(long)]
    random: bool,

    /// Seed for the randomized ray. Entropy-seeded when omitted, making
    /// randomized runs deliberately non-reproducible.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let aabb = Aabb::with_bounds(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));

    let ray = if cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        // Aim through the box center from three units out, so a randomized
        // run still hits and the printed accumulator varies instead of
        // collapsing to the miss sentinel.
        let direction = random_unit_vector(&mut rng);
        Ray::new(Point3::from(direction * -3.0), direction)
    } else {
        Ray::new(Point3::new(0.0, 0.0, 2.0), Vector3::new(0.3, 0.4, -1.0))
    };

    measure(cli.iterations, || ray.intersects_aabb(&aabb)).report();
}
