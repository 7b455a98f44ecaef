//! Axis Aligned Bounding Boxes.

use std::ops::Index;

use crate::{Point3, Real, Vector3};

/// AABB struct.
///
/// Invariant: `min[i] <= max[i]` for every axis, maintained by the
/// constructors.
#[derive(Debug, Copy, Clone)]
pub struct Aabb {
    /// Minimum coordinates.
    pub min: Point3,

    /// Maximum coordinates.
    pub max: Point3,
}

impl Aabb {
    /// Creates a new [`Aabb`] with the given bounds.
    ///
    /// # Examples
    /// ```
    /// use raybench::aabb::Aabb;
    /// use raybench::Point3;
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    /// assert_eq!(aabb.min.x, -1.0);
    /// assert_eq!(aabb.max.x, 1.0);
    /// ```
    pub fn with_bounds(min: Point3, max: Point3) -> Aabb {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Aabb { min, max }
    }

    /// Creates a new empty [`Aabb`], which no point is inside of.
    ///
    /// Growing an empty box by a point yields the degenerate box containing
    /// exactly that point.
    pub fn empty() -> Aabb {
        Aabb {
            min: Point3::new(Real::INFINITY, Real::INFINITY, Real::INFINITY),
            max: Point3::new(Real::NEG_INFINITY, Real::NEG_INFINITY, Real::NEG_INFINITY),
        }
    }

    /// Returns a new minimal [`Aabb`] which contains both this [`Aabb`] and the point.
    pub fn grow(&self, other: &Point3) -> Aabb {
        Aabb {
            min: Point3::new(
                self.min.x.min(other.x),
                self.min.y.min(other.y),
                self.min.z.min(other.z),
            ),
            max: Point3::new(
                self.max.x.max(other.x),
                self.max.y.max(other.y),
                self.max.z.max(other.z),
            ),
        }
    }

    /// Returns true if the [`Point3`] is inside the [`Aabb`].
    pub fn contains(&self, p: &Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Returns the size of this [`Aabb`] in all three dimensions.
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns the center point of the [`Aabb`].
    pub fn center(&self) -> Point3 {
        self.min + (self.size() / 2.0)
    }
}

/// Make [`Aabb`]s indexable. `aabb[0]` gives a reference to the minimum bound.
/// All other indices return a reference to the maximum bound.
///
/// This is the 2-element corner array the branch-free slab test indexes with
/// the ray's cached sign flags.
impl Index<usize> for Aabb {
    type Output = Point3;

    fn index(&self, index: usize) -> &Point3 {
        if index == 0 {
            &self.min
        } else {
            &self.max
        }
    }
}
