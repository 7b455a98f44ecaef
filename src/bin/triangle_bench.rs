//! Ray/triangle Möller-Trumbore throughput benchmark.
//!
//! Builds one ray and one triangle, intersects them `--iterations` times,
//! and prints the accumulated sum, the elapsed time, and the throughput in
//! millions of tests per second.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use raybench::bench::{measure, random_unit_vector};
use raybench::ray::Ray;
use raybench::{Point3, Vector3};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of intersection tests to run.
    #[arg(long, default_value_t = 10_000_123)]
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

    let v0 = Point3::new(-2.0, -1.0, -5.0);
    let v1 = Point3::new(2.0, -1.0, -5.0);
    let v2 = Point3::new(0.0, 1.0, -5.0);

    let direction = if cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        // Fold the sampled direction into the lower hemisphere: the triangle
        // sits at z = -5 wound to face +Z, so every sampled ray sees its
        // front face and backface culling never blanks the whole run.
        let mut direction = random_unit_vector(&mut rng);
        direction.z = -direction.z.abs();
        direction
    } else {
        Vector3::new(0.0, 0.0, -1.0)
    };

    let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), direction);

    measure(cli.iterations, || ray.intersects_triangle(&v0, &v1, &v2)).report();
}
