//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use na;
use num::Bounded;

/// A 2D Axis-Aligned Bounding Box (AABB).
///
/// Used for the local bounds of a sprite, the bounds of a rebuilt mesh, and the
/// cheap "does the cut even reach this polygon" rejection test.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis (bottom-left corner)
/// - **maxs**: The point with the largest coordinates on each axis (top-right corner)
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use slicer2d::bounding_volume::Aabb;
/// use slicer2d::na::Point2;
///
/// let aabb = Aabb::from_points([
///     Point2::new(1.0, 2.0),
///     Point2::new(-1.0, 4.0),
///     Point2::new(0.0, 0.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point2::new(-1.0, 0.0));
/// assert_eq!(aabb.maxs, Point2::new(1.0, 4.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates (bottom-left corner).
    pub mins: Point<Real>,
    /// The point with maximum coordinates (top-right corner).
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Useful as the starting value before calling [`Aabb::take_point`].
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns an invalid AABB (see [`Aabb::new_invalid`]) if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(pt);
        }
        result
    }

    /// Creates a new AABB that tightly encloses a set of borrowed points.
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        Self::from_points(pts.into_iter().copied())
    }

    /// Returns `true` if `mins <= maxs` on every axis.
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// Returns the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Returns the half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The area of this `Aabb`.
    #[inline]
    pub fn area(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Returns this `Aabb` translated by `translation`.
    #[inline]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += *translation;
        self.maxs += *translation;
        self
    }

    /// Do these two AABBs overlap (touching counts as overlapping)?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// The four corners of this AABB, counter-clockwise starting from `mins`.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [
            Point::new(self.mins.x, self.mins.y),
            Point::new(self.maxs.x, self.mins.y),
            Point::new(self.maxs.x, self.maxs.y),
            Point::new(self.mins.x, self.maxs.y),
        ]
    }
}
