use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils;

/// The side of a [`CutLine`] a point lies on.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineSide {
    /// The point is on the left of the line, looking from `start` toward `end`.
    Left,
    /// The point is on the right of the line, looking from `start` toward `end`.
    Right,
    /// The point is on the line, up to some epsilon.
    On,
}

impl LineSide {
    /// The opposite side. `On` is its own opposite.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            LineSide::Left => LineSide::Right,
            LineSide::Right => LineSide::Left,
            LineSide::On => LineSide::On,
        }
    }
}

/// The points where a cut enters and leaves a polygon.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CutHits {
    /// The first boundary crossing along the cut.
    pub enter: Point<Real>,
    /// The last boundary crossing along the cut.
    pub exit: Point<Real>,
}

/// A directed cut segment, from `start` to `end`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CutLine {
    /// The point where the cut starts.
    pub start: Point<Real>,
    /// The point where the cut ends.
    pub end: Point<Real>,
}

impl CutLine {
    /// Creates a new cut line.
    ///
    /// Returns `None` if both points are equal or not finite.
    pub fn new(start: Point<Real>, end: Point<Real>) -> Option<Self> {
        let dir = end - start;

        if dir.norm_squared() <= DEFAULT_EPSILON || !dir.x.is_finite() || !dir.y.is_finite() {
            return None;
        }

        Some(Self { start, end })
    }

    /// The direction of the cut, `end - start`. Not normalized.
    #[inline]
    pub fn direction(&self) -> Vector<Real> {
        self.end - self.start
    }

    /// The 2×3 determinant of `pt` relative to this line.
    ///
    /// Positive when `pt` is on the left.
    #[inline]
    pub fn determinant(&self, pt: &Point<Real>) -> Real {
        utils::determinant2x3(&self.start, &self.end, pt)
    }

    /// Classifies `pt` relative to this line.
    ///
    /// Points with a determinant within `[-epsilon, epsilon]` are [`LineSide::On`] the line.
    pub fn side_of(&self, pt: &Point<Real>, epsilon: Real) -> LineSide {
        let det = self.determinant(pt);

        if det > epsilon {
            LineSide::Left
        } else if det < -epsilon {
            LineSide::Right
        } else {
            LineSide::On
        }
    }

    /// The scalar projection of `pt - start` onto the (unnormalized) direction of the cut.
    #[inline]
    pub fn projection(&self, pt: &Point<Real>) -> Real {
        (pt - self.start).dot(&self.direction())
    }

    /// The bounding box of the cut segment.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.start.inf(&self.end), self.start.sup(&self.end))
    }

    /// Finds where this cut segment enters and leaves the closed polygon `vertices`.
    ///
    /// Returns `None` if the segment crosses the boundary less than twice.
    pub fn hits_on(&self, vertices: &[Point<Real>]) -> Option<CutHits> {
        let mut crossings = 0;
        let mut first = Real::MAX;
        let mut last = -Real::MAX;

        for (i, a) in vertices.iter().enumerate() {
            let b = &vertices[(i + 1) % vertices.len()];

            if let Some((s, _)) =
                utils::segments_intersection2d(&self.start, &self.end, a, b, DEFAULT_EPSILON)
            {
                crossings += 1;
                first = first.min(s);
                last = last.max(s);
            }
        }

        if crossings < 2 || ulps_eq!(first, last) {
            return None;
        }

        let dir = self.direction();
        Some(CutHits {
            enter: self.start + dir * first,
            exit: self.start + dir * last,
        })
    }
}
