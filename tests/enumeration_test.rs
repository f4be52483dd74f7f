//! Integration tests for lattice enumeration.
//!
//! These tests verify:
//! - Point counts equal the product of step counts
//! - Depth-fastest ordering
//! - The exact sequence for a small CVM-like grid

use cvm_grid::{AxisSpec, GridEnumerator, GridShape, write_grid_points};

fn shape(lon: (f64, f64, usize), lat: (f64, f64, usize), depth: (f64, f64, usize)) -> GridShape {
    GridShape::new(
        AxisSpec::new(lon.0, lon.1, lon.2).unwrap(),
        AxisSpec::new(lat.0, lat.1, lat.2).unwrap(),
        AxisSpec::new(depth.0, depth.1, depth.2).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_point_count_is_product_of_steps() {
    for &(n_lon, n_lat, n_depth) in &[(2, 2, 2), (3, 7, 2), (5, 4, 11), (13, 2, 3)] {
        let s = shape((-121.0, -113.0, n_lon), (31.0, 36.0, n_lat), (4000.0, -15000.0, n_depth));
        assert_eq!(GridEnumerator::new(&s).count(), n_lon * n_lat * n_depth);

        let mut sink = std::io::sink();
        assert_eq!(write_grid_points(&mut sink, &s).unwrap(), n_lon * n_lat * n_depth);
    }
}

#[test]
fn test_consecutive_points_step_in_depth() {
    let s = shape((-120.862, -113.333, 4), (30.956, 36.613, 3), (4000.0, -15000.0, 5));
    let elevs: Vec<i64> = s.depth.values().iter().map(|z| z.trunc() as i64).collect();
    let points: Vec<_> = GridEnumerator::new(&s).collect();

    for i in 0..points.len() - 1 {
        let depth_i = i % s.n_depth();
        if depth_i == s.n_depth() - 1 {
            // Column boundary: horizontal location changes, depth restarts.
            assert_eq!(points[i + 1].elev, elevs[0]);
            continue;
        }
        assert_eq!(points[i].lon, points[i + 1].lon);
        assert_eq!(points[i].lat, points[i + 1].lat);
        assert_eq!(points[i].elev, elevs[depth_i]);
        assert_eq!(points[i + 1].elev, elevs[depth_i + 1]);
    }
}

#[test]
fn test_small_grid_exact_order() {
    let s = shape((-121.0, -113.0, 3), (31.0, 36.0, 2), (-50.0, 4.0, 2));
    let points: Vec<(f64, f64, i64)> = GridEnumerator::new(&s)
        .map(|p| (p.lon, p.lat, p.elev))
        .collect();

    let expected = vec![
        (-121.0, 31.0, -50),
        (-121.0, 31.0, 4),
        (-121.0, 36.0, -50),
        (-121.0, 36.0, 4),
        (-117.0, 31.0, -50),
        (-117.0, 31.0, 4),
        (-117.0, 36.0, -50),
        (-117.0, 36.0, 4),
        (-113.0, 31.0, -50),
        (-113.0, 31.0, 4),
        (-113.0, 36.0, -50),
        (-113.0, 36.0, 4),
    ];
    assert_eq!(points, expected);
}

#[test]
fn test_written_lines_match_points() {
    let s = shape((-121.0, -113.0, 3), (31.0, 36.0, 2), (-50.0, 4.0, 2));
    let mut buf = Vec::new();
    write_grid_points(&mut buf, &s).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "-121.000 31.000 -50");
    assert_eq!(lines[5], "-117.000 31.000 4");
    assert_eq!(lines[11], "-113.000 36.000 4");
}
