use std::fmt::Display;

use crate::{Axis, Error, Point};

/// Optional per-axis clamp applied to regions after construction.
///
/// Each bound is independently nullable; a hemisphere is a sphere whose
/// region set is clamped to y >= 0 rather than a separate containment test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisLimits {
    min: [Option<i32>; 3],
    max: [Option<i32>; 3],
}
impl AxisLimits {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_min(mut self, axis: Axis, value: i32) -> Self {
        self.min[axis.index()] = Some(value);
        self
    }
    pub fn with_max(mut self, axis: Axis, value: i32) -> Self {
        self.max[axis.index()] = Some(value);
        self
    }
    pub fn min(&self, axis: Axis) -> Option<i32> {
        self.min[axis.index()]
    }
    pub fn max(&self, axis: Axis) -> Option<i32> {
        self.max[axis.index()]
    }
}

/// An axis-aligned box spanning the inclusive hyperrectangle between two
/// corner points.
///
/// The corners are stored in whatever orientation they were given; `size`,
/// `volume` and equality do not depend on which corner holds the lower
/// coordinate on any axis.
#[derive(Clone, Copy, Debug)]
pub struct Region {
    p1: Point,
    p2: Point,
}
impl Region {
    pub fn new(point1: Point, point2: Point) -> Self {
        Self {
            p1: point1,
            p2: point2,
        }
    }
    pub fn from_coords(x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32) -> Self {
        Self::new(Point::new(x1, y1, z1), Point::new(x2, y2, z2))
    }
    pub fn p1(&self) -> Point {
        self.p1
    }
    pub fn p2(&self) -> Point {
        self.p2
    }
    /// Lattice-point extent along each axis, at least 1 per axis.
    pub fn size(&self) -> (i32, i32, i32) {
        (
            (self.p2.x - self.p1.x).abs() + 1,
            (self.p2.y - self.p1.y).abs() + 1,
            (self.p2.z - self.p1.z).abs() + 1,
        )
    }
    /// Number of lattice points covered.
    pub fn volume(&self) -> i64 {
        let (x, y, z) = self.size();
        x as i64 * y as i64 * z as i64
    }
    /// Sorted (min, max) bounds per axis.
    pub fn range(&self) -> [(i32, i32); 3] {
        [
            (self.p1.x.min(self.p2.x), self.p1.x.max(self.p2.x)),
            (self.p1.y.min(self.p2.y), self.p1.y.max(self.p2.y)),
            (self.p1.z.min(self.p2.z), self.p1.z.max(self.p2.z)),
        ]
    }
    /// All eight corners of the box.
    pub fn corner_points(&self) -> [Point; 8] {
        let (x1, y1, z1) = self.p1.xyz();
        let (x2, y2, z2) = self.p2.xyz();
        [
            Point::new(x1, y1, z1),
            Point::new(x2, y2, z2),
            Point::new(x2, y1, z1),
            Point::new(x2, y1, z2),
            Point::new(x1, y1, z2),
            Point::new(x1, y2, z1),
            Point::new(x2, y2, z1),
            Point::new(x1, y2, z2),
        ]
    }
    pub fn contains(&self, point: Point) -> bool {
        let [(xlo, xhi), (ylo, yhi), (zlo, zhi)] = self.range();
        xlo <= point.x
            && point.x <= xhi
            && ylo <= point.y
            && point.y <= yhi
            && zlo <= point.z
            && point.z <= zhi
    }
    /// Translates both corners in place.
    pub fn offset(&mut self, point: Point) {
        self.p1 += point;
        self.p2 += point;
    }
    /// Clamps both corners into the given per-axis bounds, each corner
    /// independently.
    pub fn apply_limits(&mut self, limits: &AxisLimits) {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            if let Some(lo) = limits.min(axis) {
                self.p1.set_component(axis, self.p1.component(axis).max(lo));
                self.p2.set_component(axis, self.p2.component(axis).max(lo));
            }
            if let Some(hi) = limits.max(axis) {
                self.p1.set_component(axis, self.p1.component(axis).min(hi));
                self.p2.set_component(axis, self.p2.component(axis).min(hi));
            }
        }
    }

    /// Cuts the region in two along its largest axis (ties broken x, y, z).
    ///
    /// The halves exactly tile the original: no overlap, no gap, volumes
    /// summing to the original volume. Splitting a 1x1x1 region is an
    /// invariant violation.
    pub fn split(&self) -> Result<(Region, Region), Error> {
        let (sx, sy, sz) = self.size();
        if sx == 1 && sy == 1 && sz == 1 {
            return Err(Error::UnsplittableRegion(*self));
        }
        let axis = if sx >= sy && sx >= sz {
            Axis::X
        } else if sy >= sx && sy >= sz {
            Axis::Y
        } else {
            Axis::Z
        };

        let a = self.p1.component(axis);
        let b = self.p2.component(axis);
        // Floor midpoint of the stored corners, whichever orientation they
        // are in; the numerically lower side always ends at the midpoint.
        let middle = (a + b).div_euclid(2);

        let mut r1 = *self;
        let mut r2 = *self;
        if b >= a {
            r1.p2.set_component(axis, middle);
            r2.p1.set_component(axis, middle + 1);
        } else {
            r1.p2.set_component(axis, middle + 1);
            r2.p1.set_component(axis, middle);
        }
        Ok((r1, r2))
    }

    /// Splits recursively until every piece is within the volume budget.
    ///
    /// Terminates because each split at least halves the largest extent and
    /// a unit cube has volume 1.
    pub fn split_to_volume(&self, max_volume: i64) -> Result<Vec<Region>, Error> {
        if max_volume < 1 {
            return Err(Error::ZeroVolumeBudget);
        }
        if self.volume() <= max_volume {
            return Ok(vec![*self]);
        }
        let (r1, r2) = self.split()?;
        let mut regions = r1.split_to_volume(max_volume)?;
        regions.extend(r2.split_to_volume(max_volume)?);
        Ok(regions)
    }
}
impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2)
            || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}
impl Eq for Region {}
impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R({} - {})", self.p1, self.p2)
    }
}
