mod scan;

use crate::{Axis, AxisLimits, Error, Point};

/// Containment adjustment compensating for the half-unit offset between
/// voxel centers and the mathematical surface. Tuned against the region
/// count fixtures; different values change which lattice points count as
/// inside and therefore the emitted region counts.
pub const DEFAULT_ADJUSTMENT: f64 = 0.125;

/// The closed set of base solids. Hemispheres and arc tunnels are not
/// primitives of their own; they are a sphere or cylinder plus an axis
/// clamp on the owning [`Solid`].
#[derive(Clone, Copy, Debug)]
enum Primitive {
    Sphere {
        radius: f64,
    },
    Cylinder {
        radius: f64,
        half_length: i32,
        axis: Axis,
    },
}

/// An implicit solid centered on the lattice origin.
///
/// Holds the containment primitive, the brick range `br` (half-extent of
/// the lattice box the boundary scan searches), the optional per-axis
/// clamp, and a translation applied to emitted regions.
#[derive(Clone, Copy, Debug)]
pub struct Solid {
    primitive: Primitive,
    br: i32,
    limits: AxisLimits,
    origin: Point,
    adj: f64,
}
impl Solid {
    /// A full sphere. The diameter must be odd and greater than 1.
    pub fn sphere(diameter: i32) -> Result<Self, Error> {
        if diameter <= 1 {
            return Err(Error::DiameterTooSmall(diameter));
        }
        if diameter % 2 != 1 {
            return Err(Error::EvenDiameter(diameter));
        }
        let radius = diameter as f64 / 2.0;
        Ok(Self {
            primitive: Primitive::Sphere { radius },
            br: radius.floor() as i32,
            limits: AxisLimits::new(),
            origin: Point::new(0, 0, 0),
            adj: DEFAULT_ADJUSTMENT,
        })
    }

    /// The upper half of a sphere, truncated to y >= 0.
    pub fn hemisphere(diameter: i32) -> Result<Self, Error> {
        let mut solid = Self::sphere(diameter)?;
        solid.limits = solid.limits.with_min(Axis::Y, 0);
        Ok(solid)
    }

    /// A cylinder running along the given axis.
    pub fn cylinder(diameter: i32, length: i32, axis: Axis) -> Result<Self, Error> {
        if diameter <= 1 {
            return Err(Error::DiameterTooSmall(diameter));
        }
        if length < 1 {
            return Err(Error::LengthTooSmall(length));
        }
        let radius = diameter as f64 / 2.0;
        Ok(Self {
            primitive: Primitive::Cylinder {
                radius,
                half_length: length / 2,
                axis,
            },
            br: (length / 2).max(diameter / 2),
            limits: AxisLimits::new(),
            origin: Point::new(0, 0, 0),
            adj: DEFAULT_ADJUSTMENT,
        })
    }

    /// The upper half of a horizontal cylinder, truncated to y >= 0.
    pub fn arc_tunnel(diameter: i32, length: i32, axis: Axis) -> Result<Self, Error> {
        if axis == Axis::Y {
            return Err(Error::VerticalArcTunnel);
        }
        let mut solid = Self::cylinder(diameter, length, axis)?;
        solid.limits = solid.limits.with_min(Axis::Y, 0);
        Ok(solid)
    }

    /// Translates emitted regions so the solid is centered on `origin`.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Overrides the containment adjustment epsilon.
    pub fn with_adjustment(mut self, adj: f64) -> Self {
        self.adj = adj;
        self
    }

    pub fn brick_range(&self) -> i32 {
        self.br
    }
    pub fn limits(&self) -> &AxisLimits {
        &self.limits
    }
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Whether the solid-centered point is inside the primitive.
    ///
    /// Pure and side-effect free; axis clamps are applied to regions, not
    /// here, so the scan sees the full symmetric solid.
    pub fn contains(&self, point: Point) -> bool {
        match self.primitive {
            Primitive::Sphere { radius } => point.mag() <= radius + self.adj,
            Primitive::Cylinder {
                radius,
                half_length,
                axis,
            } => {
                if point.component(axis).abs() > half_length {
                    return false;
                }
                let (a, b) = match axis {
                    Axis::X => (point.y, point.z),
                    Axis::Y => (point.x, point.z),
                    Axis::Z => (point.x, point.y),
                };
                let (a, b) = (a as f64, b as f64);
                (a * a + b * b).sqrt() <= radius + self.adj
            }
        }
    }
}
