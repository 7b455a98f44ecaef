//! A crate which exports rays, axis-aligned bounding boxes, and the
//! intersection micro-benchmarks built on top of them.
//!
//! ## About
//!
//! This crate contains the two workhorse primitives of ray tracing and
//! collision detection — the slab-method ray/[`Aabb`] test and the
//! Möller-Trumbore ray/triangle test — together with a small harness that
//! measures their raw throughput by hammering a single test case in a tight
//! loop. There is deliberately no scene, no acceleration structure, and no
//! I/O: each benchmark binary builds one ray and one piece of geometry,
//! intersects them a few tens of millions of times, and prints how many
//! million tests per second the machine managed.
//!
//! Both intersection routines report a miss by returning [`MISS`]
//! (negative infinity) rather than an `Option` or error; the hot loops stay
//! branch-poor and the sentinel folds harmlessly into the harness
//! accumulator.
//!
//! ## Example
//!
//! ```
//! use raybench::aabb::Aabb;
//! use raybench::ray::Ray;
//! use raybench::{Point3, Vector3};
//!
//! let ray = Ray::new(Point3::new(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, -1.0));
//! let aabb = Aabb::with_bounds(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
//!
//! // The ray enters the box through the +Z face, one unit away.
//! assert_eq!(ray.intersects_aabb(&aabb), 1.0);
//! ```
//!
//! [`Aabb`]: aabb::Aabb

/// Float type used by this crate. The benchmarks measure double-precision
/// intersection throughput.
pub type Real = f64;

/// Point math type used by this crate. Type alias for [`nalgebra::Point3`].
pub type Point3 = nalgebra::Point3<Real>;

/// Vector math type used by this crate. Type alias for [`nalgebra::Vector3`].
pub type Vector3 = nalgebra::Vector3<Real>;

/// Sentinel returned by the intersection routines when the ray misses.
///
/// Negative infinity is comparable under every inequality the algorithms
/// use and sums into the benchmark accumulator without special casing.
pub const MISS: Real = Real::NEG_INFINITY;

/// Determinant threshold below which a ray is considered parallel to (or
/// facing the back of) a triangle.
pub const EPSILON: Real = 1e-6;

pub mod aabb;
pub mod bench;
pub mod ray;
mod utils;
