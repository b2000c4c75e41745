use log::debug;

use super::Solid;
use crate::{Error, Point, Region};

impl Solid {
    /// Decomposes the solid into regions no larger than `max_volume`.
    ///
    /// Scans the non-negative-y half of the bounding lattice box one
    /// horizontal layer at a time, finds the corner points where the
    /// surface crosses, and mirrors each through the origin so a single
    /// region spans all eight symmetric octants. A corner whose y+1
    /// counterpart was a corner of the layer above is skipped; its region
    /// would repeat coverage already emitted where the surface is flat
    /// across that y step. Each surviving region is clamped, translated to
    /// the solid's origin and split down to the volume budget.
    ///
    /// The union of the returned regions covers exactly the contained
    /// lattice points (after clamping). Regions from different corners may
    /// overlap; each recursive split is itself an exact partition.
    pub fn generate_regions(&self, max_volume: i64) -> Result<Vec<Region>, Error> {
        if self.brick_range() < 0 {
            return Err(Error::BrickRangeUnset);
        }
        if max_volume < 1 {
            return Err(Error::ZeroVolumeBudget);
        }

        let mut regions = Vec::new();
        let mut above: Vec<Point> = Vec::new();
        for y in (0..=self.brick_range()).rev() {
            let corners = self.layer_corners(y);
            let kept: Vec<Point> = corners
                .iter()
                .copied()
                .filter(|c| !above.contains(&Point::new(c.x, c.y + 1, c.z)))
                .collect();
            debug!(
                "layer y={}: {} corners, {} kept",
                y,
                corners.len(),
                kept.len()
            );
            above = corners;

            for corner in kept {
                let mut region = Region::new(corner, corner.mirrored());
                region.apply_limits(self.limits());
                region.offset(self.origin());
                regions.extend(region.split_to_volume(max_volume)?);
            }
        }
        debug!("generated {} regions", regions.len());
        Ok(regions)
    }

    /// Corner points of one horizontal layer, first octant only.
    ///
    /// Walks z outward while lowering a running x bound; the boundary x is
    /// non-increasing in z within the octant, so each layer costs O(br)
    /// containment tests beyond the corners themselves. A contained point
    /// is a corner when the point one unit further out in z is not
    /// contained. A layer with no contained points at all (possible at the
    /// very top from rounding) yields no corners.
    fn layer_corners(&self, y: i32) -> Vec<Point> {
        let mut corners = Vec::new();
        let mut x = self.brick_range();
        for z in 0..=self.brick_range() {
            while x >= 0 && !self.contains(Point::new(x, y, z)) {
                x -= 1;
            }
            if x < 0 {
                break;
            }
            if !self.contains(Point::new(x, y, z + 1)) {
                corners.push(Point::new(x, y, z));
            }
        }
        corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;

    #[test]
    fn sphere_layer_corners_trace_the_boundary() {
        let s = Solid::sphere(9).unwrap();
        for corner in s.layer_corners(0) {
            assert!(s.contains(corner));
            assert!(!s.contains(corner + Point::new(0, 0, 1)));
        }
    }

    #[test]
    fn corners_are_unique_within_a_layer() {
        let s = Solid::sphere(33).unwrap();
        for y in 0..=s.brick_range() {
            let corners = s.layer_corners(y);
            for (i, a) in corners.iter().enumerate() {
                assert!(!corners[i + 1..].contains(a));
            }
        }
    }

    #[test]
    fn empty_top_layer_is_skipped() {
        // br equals the floored radius, so the top layer can round to
        // nothing when the adjustment pulls the surface in
        let s = Solid::sphere(9).unwrap().with_adjustment(-0.6);
        assert!(s.layer_corners(s.brick_range()).is_empty());
        assert!(!s.generate_regions(32768).unwrap().is_empty());
    }

    #[test]
    fn zero_volume_budget_is_rejected_before_scanning() {
        let s = Solid::sphere(9).unwrap();
        assert!(matches!(
            s.generate_regions(0),
            Err(Error::ZeroVolumeBudget)
        ));
    }

    #[test]
    fn axis_x_cylinder_scan_terminates() {
        let c = Solid::cylinder(9, 17, Axis::X).unwrap();
        assert!(!c.generate_regions(32768).unwrap().is_empty());
    }

    #[test]
    fn origin_translates_every_region() {
        let origin = Point::new(100, 20, -7);
        let centered = Solid::sphere(9).unwrap().generate_regions(32768).unwrap();
        let moved = Solid::sphere(9)
            .unwrap()
            .with_origin(origin)
            .generate_regions(32768)
            .unwrap();
        assert_eq!(centered.len(), moved.len());
        for (c, m) in centered.iter().zip(&moved) {
            let mut shifted = *c;
            shifted.offset(origin);
            assert_eq!(shifted, *m);
        }
    }
}
