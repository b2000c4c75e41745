//! End-to-end checks of region generation: the region count fixtures and
//! exact voxel coverage for every solid kind.

use std::collections::HashSet;

use fillgen::prelude::*;

const FILL_MAX_VOLUME: i64 = 32768;

fn covered_points(regions: &[Region]) -> HashSet<(i32, i32, i32)> {
    let mut points = HashSet::new();
    for r in regions {
        let [(xlo, xhi), (ylo, yhi), (zlo, zhi)] = r.range();
        for x in xlo..=xhi {
            for y in ylo..=yhi {
                for z in zlo..=zhi {
                    points.insert((x, y, z));
                }
            }
        }
    }
    points
}

fn clamped_solid_points(solid: &Solid) -> HashSet<(i32, i32, i32)> {
    let br = solid.brick_range();
    let within = |axis: Axis, v: i32| {
        solid.limits().min(axis).map_or(true, |lo| v >= lo)
            && solid.limits().max(axis).map_or(true, |hi| v <= hi)
    };
    let mut points = HashSet::new();
    for x in -br..=br {
        for y in -br..=br {
            for z in -br..=br {
                if solid.contains(Point::new(x, y, z))
                    && within(Axis::X, x)
                    && within(Axis::Y, y)
                    && within(Axis::Z, z)
                {
                    points.insert((x, y, z));
                }
            }
        }
    }
    points
}

fn assert_exact_coverage(solid: &Solid) {
    let regions = solid.generate_regions(FILL_MAX_VOLUME).unwrap();
    for r in &regions {
        assert!(r.volume() <= FILL_MAX_VOLUME, "{} over budget", r);
    }
    let covered = covered_points(&regions);
    let expected = clamped_solid_points(solid);
    let missing: Vec<_> = expected.difference(&covered).take(5).collect();
    let extra: Vec<_> = covered.difference(&expected).take(5).collect();
    assert!(
        missing.is_empty() && extra.is_empty(),
        "coverage mismatch: missing {:?}, extra {:?}",
        missing,
        extra
    );
}

#[test]
fn sphere_region_count_fixtures() {
    for (diameter, count) in [(9, 12), (17, 36), (33, 102), (65, 582)] {
        let regions = Solid::sphere(diameter)
            .unwrap()
            .generate_regions(FILL_MAX_VOLUME)
            .unwrap();
        assert_eq!(
            regions.len(),
            count,
            "sphere d={} generated {} regions instead of {}",
            diameter,
            regions.len(),
            count
        );
    }
}

#[test]
fn budget_respected_for_large_spheres() {
    for diameter in [33, 65] {
        let regions = Solid::sphere(diameter)
            .unwrap()
            .generate_regions(FILL_MAX_VOLUME)
            .unwrap();
        for r in &regions {
            assert!(r.volume() <= FILL_MAX_VOLUME);
        }
    }
}

#[test]
fn tight_budget_still_covers_exactly() {
    let solid = Solid::sphere(9).unwrap();
    let regions = solid.generate_regions(8).unwrap();
    for r in &regions {
        assert!(r.volume() <= 8);
    }
    assert_eq!(covered_points(&regions), clamped_solid_points(&solid));
}

#[test]
fn sphere_coverage_is_exact() {
    assert_exact_coverage(&Solid::sphere(9).unwrap());
    assert_exact_coverage(&Solid::sphere(17).unwrap());
}

#[test]
fn hemisphere_coverage_is_exact() {
    assert_exact_coverage(&Solid::hemisphere(9).unwrap());
    assert_exact_coverage(&Solid::hemisphere(17).unwrap());
}

#[test]
fn cylinder_coverage_is_exact_on_every_axis() {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        assert_exact_coverage(&Solid::cylinder(9, 17, axis).unwrap());
        assert_exact_coverage(&Solid::cylinder(5, 9, axis).unwrap());
    }
}

#[test]
fn arc_tunnel_coverage_is_exact() {
    assert_exact_coverage(&Solid::arc_tunnel(9, 17, Axis::X).unwrap());
    assert_exact_coverage(&Solid::arc_tunnel(9, 17, Axis::Z).unwrap());
}

#[test]
fn generation_is_deterministic() {
    let a = Solid::sphere(17).unwrap().generate_regions(FILL_MAX_VOLUME);
    let b = Solid::sphere(17).unwrap().generate_regions(FILL_MAX_VOLUME);
    assert_eq!(a.unwrap(), b.unwrap());
}
