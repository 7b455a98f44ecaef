//! This module defines a Ray structure and intersection algorithms
//! for axis aligned bounding boxes and triangles.

use crate::aabb::Aabb;
use crate::utils::{fast_max, fast_min};
use crate::{Point3, Real, Vector3, EPSILON, MISS};

/// Multiplicative slack applied to the far slab distance before the final
/// overlap comparison. One ULP-scale of headroom keeps rays that graze an
/// edge or corner exactly from being rejected by rounding.
const TMAX_SLACK: Real = 1.0 + 4.0 * Real::EPSILON;

/// A struct which defines a ray and some of its cached values.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The ray origin.
    pub origin: Point3,

    /// The ray direction. Not required to be normalized; intersection
    /// distances are expressed in units of this vector's length.
    pub direction: Vector3,

    /// Inverse (1/x) ray direction. Cached for use in [`Aabb`] intersections.
    ///
    /// [`Aabb`]: crate::aabb::Aabb
    inv_direction: Vector3,

    /// Sign of the inverse direction. 0 means positive, 1 means negative.
    /// Cached for use in [`Aabb`] intersections.
    ///
    /// [`Aabb`]: crate::aabb::Aabb
    sign: [usize; 3],
}

impl Ray {
    /// Creates a new [`Ray`] from an `origin` and a `direction`.
    ///
    /// The direction is kept as given; `inv_direction` and the per-axis sign
    /// flags are derived from it here and nowhere else, so the three fields
    /// can never fall out of sync.
    ///
    /// # Examples
    /// ```
    /// use raybench::ray::Ray;
    /// use raybench::{Point3, Vector3};
    ///
    /// let origin = Point3::new(0.0, 0.0, 0.0);
    /// let direction = Vector3::new(1.0, 0.0, 0.0);
    /// let ray = Ray::new(origin, direction);
    ///
    /// assert_eq!(ray.origin, origin);
    /// assert_eq!(ray.direction, direction);
    /// ```
    pub fn new(origin: Point3, direction: Vector3) -> Ray {
        let inv_direction = direction.map(|x| 1.0 / x);
        Ray {
            origin,
            direction,
            inv_direction,
            sign: [
                (inv_direction.x < 0.0) as usize,
                (inv_direction.y < 0.0) as usize,
                (inv_direction.z < 0.0) as usize,
            ],
        }
    }

    /// Tests the intersection of a [`Ray`] with an [`Aabb`] using the branch-free
    /// slab method from [this paper](http://www.cs.utah.edu/~awilliam/box/box.pdf).
    ///
    /// Returns the parametric distance to the point where the ray enters the
    /// box, or [`MISS`] if the ray misses it. The entry distance is negative
    /// when the origin is already inside the box. A box that lies entirely
    /// behind the origin counts as a miss.
    ///
    /// The cached sign flags index straight into the box's corner array, so
    /// all three axes fold without a single branch; the overlap test runs
    /// once at the end, with [`TMAX_SLACK`] absorbing the rounding error of
    /// exact edge grazes.
    ///
    /// An axis with a zero direction component yields infinite slab bounds
    /// (and a NaN where the origin sits exactly on a face plane); the
    /// accumulator-order `fast_min`/`fast_max` folds leave the running
    /// bounds untouched in both cases, treating that axis as unconstrained.
    ///
    /// # Examples
    /// ```
    /// use raybench::aabb::Aabb;
    /// use raybench::ray::Ray;
    /// use raybench::{Point3, Vector3, MISS};
    ///
    /// let ray = Ray::new(Point3::new(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, -1.0));
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    ///
    /// assert_eq!(ray.intersects_aabb(&aabb), 1.0);
    /// ```
    ///
    /// [`Ray`]: struct.Ray.html
    /// [`Aabb`]: crate::aabb::Aabb
    pub fn intersects_aabb(&self, aabb: &Aabb) -> Real {
        let tx_near = (aabb[self.sign[0]].x - self.origin.x) * self.inv_direction.x;
        let tx_far = (aabb[1 - self.sign[0]].x - self.origin.x) * self.inv_direction.x;
        let ty_near = (aabb[self.sign[1]].y - self.origin.y) * self.inv_direction.y;
        let ty_far = (aabb[1 - self.sign[1]].y - self.origin.y) * self.inv_direction.y;
        let tz_near = (aabb[self.sign[2]].z - self.origin.z) * self.inv_direction.z;
        let tz_far = (aabb[1 - self.sign[2]].z - self.origin.z) * self.inv_direction.z;

        let tmin = fast_max(tz_near, fast_max(ty_near, fast_max(tx_near, Real::NEG_INFINITY)));
        let tmax = fast_min(tz_far, fast_min(ty_far, fast_min(tx_far, Real::INFINITY)));
        let tmax = tmax * TMAX_SLACK;

        if tmin <= tmax && tmax >= 0.0 {
            tmin
        } else {
            MISS
        }
    }

    /// The branch-per-axis variant of the slab test, with an early exit as
    /// soon as one axis proves a miss.
    ///
    /// Same contract as [`intersects_aabb`], but without the epsilon slack:
    /// a ray that grazes a face exactly is rejected by this variant (the
    /// `0 * inf` NaN in the far bound fails the final behind-origin check)
    /// while the branch-free one accepts it.
    ///
    /// [`intersects_aabb`]: Ray::intersects_aabb
    pub fn intersects_aabb_early_out(&self, aabb: &Aabb) -> Real {
        let mut tmin;
        let mut tmax;
        if self.inv_direction.x >= 0.0 {
            tmin = (aabb.min.x - self.origin.x) * self.inv_direction.x;
            tmax = (aabb.max.x - self.origin.x) * self.inv_direction.x;
        } else {
            tmin = (aabb.max.x - self.origin.x) * self.inv_direction.x;
            tmax = (aabb.min.x - self.origin.x) * self.inv_direction.x;
        }

        let ty_min;
        let ty_max;
        if self.inv_direction.y >= 0.0 {
            ty_min = (aabb.min.y - self.origin.y) * self.inv_direction.y;
            ty_max = (aabb.max.y - self.origin.y) * self.inv_direction.y;
        } else {
            ty_min = (aabb.max.y - self.origin.y) * self.inv_direction.y;
            ty_max = (aabb.min.y - self.origin.y) * self.inv_direction.y;
        }

        if tmin > ty_max || ty_min > tmax {
            return MISS;
        }
        if ty_min > tmin {
            tmin = ty_min;
        }
        if ty_max < tmax {
            tmax = ty_max;
        }

        let tz_min;
        let tz_max;
        if self.inv_direction.z >= 0.0 {
            tz_min = (aabb.min.z - self.origin.z) * self.inv_direction.z;
            tz_max = (aabb.max.z - self.origin.z) * self.inv_direction.z;
        } else {
            tz_min = (aabb.max.z - self.origin.z) * self.inv_direction.z;
            tz_max = (aabb.min.z - self.origin.z) * self.inv_direction.z;
        }

        if tmin > tz_max || tz_min > tmax {
            return MISS;
        }
        if tz_min > tmin {
            tmin = tz_min;
        }
        if tz_max < tmax {
            tmax = tz_max;
        }

        if tmax >= 0.0 {
            tmin
        } else {
            MISS
        }
    }

    /// Implementation of the
    /// [Möller-Trumbore triangle/ray intersection algorithm](https://en.wikipedia.org/wiki/M%C3%B6ller%E2%80%93Trumbore_intersection_algorithm).
    ///
    /// Returns the signed parametric distance to the intersection point on
    /// the triangle's plane, or [`MISS`] if the ray misses the triangle.
    /// Callers wanting only forward intersections must check `t > 0.0`
    /// themselves; this routine does not.
    #[allow(clippy::many_single_char_names)]
    pub fn intersects_triangle(&self, a: &Point3, b: &Point3, c: &Point3) -> Real {
        let a_to_b = *b - *a;
        let a_to_c = *c - *a;

        // Begin calculating determinant - also used to calculate u parameter
        // u_vec lies in view plane
        // length of a_to_c in view_plane = |u_vec| = |a_to_c|*sin(a_to_c, dir)
        let u_vec = self.direction.cross(&a_to_c);

        // If determinant is near zero, ray lies in plane of triangle
        // The determinant corresponds to the parallelepiped volume:
        // det = 0 => [dir, a_to_b, a_to_c] not linearly independant
        let det = a_to_b.dot(&u_vec);

        // Only testing positive bound, thus enabling backface culling
        // If backface culling is not desired write:
        // det < EPSILON && det > -EPSILON
        if det < EPSILON {
            return MISS;
        }

        let inv_det = 1.0 / det;

        // Vector from point a to ray origin
        let a_to_origin = self.origin - *a;

        // Calculate u parameter
        let u = a_to_origin.dot(&u_vec) * inv_det;

        // Test bounds: u < 0 || u > 1 => outside of triangle
        if !(0.0..=1.0).contains(&u) {
            return MISS;
        }

        // Prepare to test v parameter
        let v_vec = a_to_origin.cross(&a_to_b);

        // Calculate v parameter and test bound
        let v = self.direction.dot(&v_vec) * inv_det;
        // The intersection lies outside of the triangle
        if v < 0.0 || u + v > 1.0 {
            return MISS;
        }

        a_to_c.dot(&v_vec) * inv_det
    }
}
