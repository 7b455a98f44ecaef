//! The throughput measurement harness shared by the benchmark binaries.
//!
//! The harness does not validate results; it exists purely to time a tight
//! intersection loop. Each returned distance is summed into an accumulator
//! behind [`black_box`] so the optimizer cannot discard the loop body, and
//! the accumulated value is printed afterwards as a sanity check that the
//! results are not trivially constant.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::{Real, Vector3};

/// The result of one timed benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// Sum of every distance the intersection routine returned. Not
    /// semantically meaningful; printed so the loop cannot be elided and a
    /// human can spot trivially constant output.
    pub accumulator: Real,

    /// Wall-clock time spent inside the loop, excluding geometry setup.
    pub elapsed: Duration,

    /// Number of intersection calls performed.
    pub iterations: u64,
}

impl Measurement {
    /// Throughput in millions of intersection tests per second.
    pub fn throughput_millions(&self) -> f64 {
        self.iterations as f64 / self.elapsed.as_secs_f64() / 1.0e6
    }

    /// Prints the accumulator, the elapsed time, and the throughput to
    /// standard output, one per line.
    pub fn report(&self) {
        println!("{}", self.accumulator);
        println!("Total time: {} s", self.elapsed.as_secs_f64());
        println!(
            "Millions of intersection tests per second: {}",
            self.throughput_millions()
        );
    }
}

/// Runs `intersect` in a tight loop `iterations` times, summing each result
/// into the accumulator.
///
/// The clock is sampled immediately before and after the loop; whatever it
/// took to build the geometry is the caller's business and stays outside the
/// measured interval.
pub fn measure<F>(iterations: u64, mut intersect: F) -> Measurement
where
    F: FnMut() -> Real,
{
    let mut accumulator = 0.0;

    let start = Instant::now();
    for _ in 0..iterations {
        accumulator += black_box(intersect());
    }
    let elapsed = start.elapsed();

    Measurement {
        accumulator,
        elapsed,
        iterations,
    }
}

/// Samples a direction uniformly distributed on the unit sphere.
///
/// Reject-free spherical coordinate transform: latitude from
/// `acos(2*r1 - 1) - pi/2`, longitude from `2*pi*r2`. The generator is
/// passed explicitly so a fixed seed reproduces the run.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    let r1: Real = rng.random();
    let r2: Real = rng.random();
    let lat = (2.0 * r1 - 1.0).acos() - std::f64::consts::FRAC_PI_2;
    let lon = std::f64::consts::TAU * r2;

    Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{measure, random_unit_vector};

    #[test]
    fn test_throughput_is_positive_and_finite() {
        let m = measure(10_000, || 0.5);
        assert_eq!(m.iterations, 10_000);
        assert!(m.throughput_millions() > 0.0);
        assert!(m.throughput_millions().is_finite());
    }

    #[test]
    fn test_accumulator_sums_results() {
        let m = measure(1_000, || 2.0);
        assert_float_eq!(m.accumulator, 2_000.0, ulps <= 4);
    }

    #[test]
    fn test_random_unit_vector_has_unit_length() {
        let mut rng = StdRng::seed_from_u64(0xdecafbad);
        for _ in 0..1_000 {
            let v = random_unit_vector(&mut rng);
            assert_float_eq!(v.norm(), 1.0, abs <= 1e-12);
        }
    }

    #[test]
    fn test_random_unit_vector_is_seed_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_unit_vector(&mut a), random_unit_vector(&mut b));
    }
}
