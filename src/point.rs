use std::fmt::Display;
use std::ops::{Add, AddAssign};

use crate::Axis;

/// A point on the integer lattice.
///
/// Points are plain values; copying one never aliases another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}
impl Point {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
    /// Euclidean distance from the lattice origin.
    pub fn mag(&self) -> f64 {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        (x * x + y * y + z * z).sqrt()
    }
    pub fn xyz(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }
    /// The point reflected through the origin across all three axes.
    pub fn mirrored(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
    pub fn component(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
    pub fn set_component(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}
impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}
impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P({}, {}, {})", self.x, self.y, self.z)
    }
}
