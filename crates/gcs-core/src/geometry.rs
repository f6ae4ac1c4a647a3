//! Planar geometry for geofence and mission-area computation.
//!
//! Polygons are plain coordinate lists. A polygon is closed when its last
//! vertex repeats the first one; routines that move vertices keep whatever
//! closure the input had.

use tracing::trace;

use crate::error::GeometryError;
use crate::models::{Coord, Orientation};

/// Relative tolerance for collinearity tests and singular 2x2 systems.
const EPSILON: f64 = 1e-12;

pub use self::to_degrees as degrees;
pub use self::to_radians as radians;

/// Convert degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Convert a polar offset around `center` to a Cartesian coordinate.
///
/// `angle_deg` is measured according to `orientation`; the y axis points up
/// (North) in every convention.
pub fn polar_to_cartesian(
    center: Coord,
    angle_deg: f64,
    radius: f64,
    orientation: Orientation,
) -> Coord {
    let angle = angle_deg.to_radians();
    let (sin, cos) = angle.sin_cos();
    let [cx, cy] = center;

    match orientation {
        Orientation::CounterClockwiseFromEast => [cx + radius * cos, cy + radius * sin],
        Orientation::ClockwiseFromEast => [cx + radius * cos, cy - radius * sin],
        Orientation::ClockwiseFromNorth => [cx + radius * sin, cy + radius * cos],
    }
}

/// Elementwise product-sum of two vectors of the same dimension.
pub fn dot_product<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Coord,
    pub max: Coord,
}

impl BoundingBox {
    pub fn center(&self) -> Coord {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }
}

/// Bounding box of `points`, or `None` when there are no points.
pub fn bounding_box(points: &[Coord]) -> Option<BoundingBox> {
    let first = *points.first()?;
    let bbox = points.iter().skip(1).fold(
        BoundingBox {
            min: first,
            max: first,
        },
        |bbox, p| BoundingBox {
            min: [bbox.min[0].min(p[0]), bbox.min[1].min(p[1])],
            max: [bbox.max[0].max(p[0]), bbox.max[1].max(p[1])],
        },
    );
    Some(bbox)
}

/// Whether the last vertex repeats the first one.
pub fn is_closed(polygon: &[Coord]) -> bool {
    polygon.len() >= 2 && polygon.first() == polygon.last()
}

/// The distinct vertices of a polygon, without the closing vertex.
pub fn open_ring(polygon: &[Coord]) -> &[Coord] {
    if is_closed(polygon) {
        &polygon[..polygon.len() - 1]
    } else {
        polygon
    }
}

/// Return a copy of `polygon` whose last vertex repeats the first one.
pub fn close_polygon(polygon: &[Coord]) -> Vec<Coord> {
    let mut closed = polygon.to_vec();
    if let Some(&first) = polygon.first() {
        if !is_closed(polygon) {
            closed.push(first);
        }
    }
    closed
}

/// Mean of the distinct vertices (the closing vertex is counted once).
pub fn polygon_centroid(polygon: &[Coord]) -> Option<Coord> {
    let ring = open_ring(polygon);
    if ring.is_empty() {
        return None;
    }
    let n = ring.len() as f64;
    let (sx, sy) = ring
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));
    Some([sx / n, sy / n])
}

/// Signed area (shoelace formula); positive for counter-clockwise rings.
pub fn polygon_area(polygon: &[Coord]) -> f64 {
    let ring = open_ring(polygon);
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let twice_area: f64 = (0..n)
        .map(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            a[0] * b[1] - b[0] * a[1]
        })
        .sum();
    twice_area / 2.0
}

/// Compute the convex hull of a planar point set.
///
/// The lowest (then leftmost) point is used as anchor, the rest are sorted by
/// their slope as seen from the anchor (farthest first on ties), duplicate
/// slopes keep only the farthest point, and the chain is built by popping
/// every vertex that would make a non-left turn.
///
/// The hull is returned counter-clockwise, starting at the anchor, without a
/// closing vertex.
pub fn convex_hull(points: &[Coord]) -> Result<Vec<Coord>, GeometryError> {
    ensure_finite(points)?;

    let mut distinct = points.to_vec();
    distinct.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
    distinct.dedup();
    if distinct.len() < 3 {
        return Err(GeometryError::TooFewPoints {
            found: distinct.len(),
        });
    }

    let anchor = distinct
        .iter()
        .copied()
        .min_by(|a, b| a[1].total_cmp(&b[1]).then(a[0].total_cmp(&b[0])))
        .ok_or(GeometryError::TooFewPoints { found: 0 })?;

    let mut rest: Vec<Coord> = distinct
        .iter()
        .filter(|p| **p != anchor)
        .map(|p| sub(*p, anchor))
        .collect();

    // Every translated point lies in the upper half-plane, so the angle is in [0, pi).
    rest.sort_by(|a, b| {
        a[1].atan2(a[0])
            .total_cmp(&b[1].atan2(b[0]))
            .then(norm(*b).total_cmp(&norm(*a)))
    });

    let mut by_slope: Vec<Coord> = Vec::with_capacity(rest.len());
    for p in rest {
        if let Some(last) = by_slope.last_mut() {
            if is_collinear([0.0, 0.0], *last, p) && dot(*last, p) > 0.0 {
                if norm(p) > norm(*last) {
                    *last = p;
                }
                continue;
            }
        }
        by_slope.push(p);
    }

    let mut hull: Vec<Coord> = vec![[0.0, 0.0]];
    for p in by_slope {
        while hull.len() >= 2 && !is_left_turn(hull[hull.len() - 2], hull[hull.len() - 1], p) {
            hull.pop();
        }
        hull.push(p);
    }

    if hull.len() < 3 {
        return Err(GeometryError::Degenerate("all points are collinear"));
    }

    Ok(hull.into_iter().map(|p| add(p, anchor)).collect())
}

/// Scale a polygon uniformly about its vertex centroid.
pub fn scale_polygon(polygon: &[Coord], factor: f64) -> Vec<Coord> {
    let Some(center) = polygon_centroid(polygon) else {
        return Vec::new();
    };
    polygon
        .iter()
        .map(|p| add(center, mul(sub(*p, center), factor)))
        .collect()
}

/// Move every vertex radially away from the bounding-box center by `margin`.
///
/// This is a polar offset of the vertices, not a Minkowski buffer: edges are
/// not kept parallel to the originals.
pub fn grow_polygon(polygon: &[Coord], margin: f64) -> Vec<Coord> {
    let Some(bbox) = bounding_box(polygon) else {
        return Vec::new();
    };
    let center = bbox.center();
    polygon
        .iter()
        .map(|p| {
            let offset = sub(*p, center);
            let angle = offset[1].atan2(offset[0]);
            let radius = norm(offset) + margin;
            add(center, [radius * angle.cos(), radius * angle.sin()])
        })
        .collect()
}

/// Offset every vertex by `margin` along each axis, away from the
/// bounding-box center.
///
/// A cheap axis-aligned approximation of buffering. A vertex lying exactly
/// on a center line does not move along that axis.
pub fn buffer_polygon(polygon: &[Coord], margin: f64) -> Vec<Coord> {
    let Some(bbox) = bounding_box(polygon) else {
        return Vec::new();
    };
    let center = bbox.center();
    polygon
        .iter()
        .map(|p| {
            [
                p[0] + side(p[0] - center[0]) * margin,
                p[1] + side(p[1] - center[1]) * margin,
            ]
        })
        .collect()
}

/// Remove vertices one at a time until the polygon has `limit` distinct
/// vertices.
///
/// Each step drops the vertex with the smallest turn angle. Its two
/// neighbours slide along their other edges onto the line that passes through
/// the dropped vertex parallel to the neighbours' chord, so the new boundary
/// still runs through the old vertex position.
pub fn simplify_polygon_until_limit(
    polygon: &[Coord],
    limit: usize,
) -> Result<Vec<Coord>, GeometryError> {
    if limit < 3 {
        return Err(GeometryError::InvalidVertexLimit { limit });
    }
    ensure_finite(polygon)?;

    let closed = is_closed(polygon);
    let mut ring = open_ring(polygon).to_vec();

    while ring.len() > limit {
        let n = ring.len();
        let (index, angle) = (0..n)
            .map(|i| (i, turn_angle(ring[(i + n - 1) % n], ring[i], ring[(i + 1) % n])))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or(GeometryError::TooFewPoints { found: 0 })?;

        let prev = (index + n - 1) % n;
        let next = (index + 1) % n;
        let before_prev = (index + n - 2) % n;
        let after_next = (index + 2) % n;

        let removed = ring[index];
        let chord = sub(ring[next], ring[prev]);

        let new_prev = intersect_lines(
            ring[before_prev],
            sub(ring[prev], ring[before_prev]),
            removed,
            chord,
        )?;
        let new_next = intersect_lines(
            ring[after_next],
            sub(ring[next], ring[after_next]),
            removed,
            chord,
        )?;

        trace!(
            index,
            turn_deg = angle.to_degrees(),
            remaining = n - 1,
            "removed polygon vertex"
        );

        ring[prev] = new_prev;
        ring[next] = new_next;
        ring.remove(index);
    }

    if closed {
        ring.push(ring[0]);
    }
    Ok(ring)
}

fn ensure_finite(points: &[Coord]) -> Result<(), GeometryError> {
    match points
        .iter()
        .position(|p| !p[0].is_finite() || !p[1].is_finite())
    {
        Some(index) => Err(GeometryError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}

/// Absolute change of direction at `b` when walking `a -> b -> c`.
fn turn_angle(a: Coord, b: Coord, c: Coord) -> f64 {
    let incoming = sub(b, a);
    let outgoing = sub(c, b);
    cross(incoming, outgoing)
        .atan2(dot(incoming, outgoing))
        .abs()
}

/// Intersection of the lines `p + t * dp` and `q + s * dq`.
fn intersect_lines(p: Coord, dp: Coord, q: Coord, dq: Coord) -> Result<Coord, GeometryError> {
    let det = cross(dp, dq);
    if det.abs() <= EPSILON * norm(dp) * norm(dq) {
        return Err(GeometryError::Degenerate(
            "adjacent edges are parallel to the simplified edge",
        ));
    }
    let t = cross(sub(q, p), dq) / det;
    Ok(add(p, mul(dp, t)))
}

fn is_left_turn(o: Coord, a: Coord, b: Coord) -> bool {
    let u = sub(a, o);
    let v = sub(b, o);
    cross(u, v) > EPSILON * norm(u) * norm(v)
}

fn is_collinear(o: Coord, a: Coord, b: Coord) -> bool {
    let u = sub(a, o);
    let v = sub(b, o);
    cross(u, v).abs() <= EPSILON * norm(u) * norm(v)
}

fn side(delta: f64) -> f64 {
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn add(a: Coord, b: Coord) -> Coord {
    [a[0] + b[0], a[1] + b[1]]
}

fn sub(a: Coord, b: Coord) -> Coord {
    [a[0] - b[0], a[1] - b[1]]
}

fn mul(a: Coord, k: f64) -> Coord {
    [a[0] * k, a[1] * k]
}

fn dot(a: Coord, b: Coord) -> f64 {
    dot_product(&a, &b)
}

fn cross(a: Coord, b: Coord) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

fn norm(a: Coord) -> f64 {
    a[0].hypot(a[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[Coord], expected: &[Coord]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                (a[0] - e[0]).abs() < 1e-9 && (a[1] - e[1]).abs() < 1e-9,
                "{actual:?} vs {expected:?}"
            );
        }
    }

    #[test]
    fn radians_and_degrees_round_trip() {
        for x in [-720.0, -90.0, 0.0, 1e-6, 33.3, 180.0, 1234.5] {
            assert!((to_degrees(to_radians(x)) - x).abs() < 1e-9);
            assert!((degrees(radians(x)) - x).abs() < 1e-9);
        }
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn polar_conventions_differ() {
        let c = [10.0, 20.0];
        assert_close(
            &[polar_to_cartesian(c, 90.0, 2.0, Orientation::CounterClockwiseFromEast)],
            &[[10.0, 22.0]],
        );
        assert_close(
            &[polar_to_cartesian(c, 90.0, 2.0, Orientation::ClockwiseFromEast)],
            &[[10.0, 18.0]],
        );
        assert_close(
            &[polar_to_cartesian(c, 90.0, 2.0, Orientation::ClockwiseFromNorth)],
            &[[12.0, 20.0]],
        );
        assert_close(
            &[polar_to_cartesian(c, 0.0, 2.0, Orientation::ClockwiseFromNorth)],
            &[[10.0, 22.0]],
        );
    }

    #[test]
    fn dot_product_sums_pairwise_products() {
        assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
        assert_eq!(dot_product::<0>(&[], &[]), 0.0);
    }

    #[test]
    fn convex_hull_drops_interior_point() {
        let points = [[1.0, 1.0], [0.0, 0.0], [0.5, 0.5], [1.0, 0.0], [0.0, 1.0]];
        let hull = convex_hull(&points).unwrap();
        assert_close(&hull, &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert!(polygon_area(&hull) > 0.0);
    }

    #[test]
    fn convex_hull_skips_points_on_edges() {
        let points = [
            [0.0, 0.0],
            [2.0, 0.0],
            [4.0, 0.0],
            [4.0, 4.0],
            [0.0, 2.0],
            [0.0, 4.0],
            [2.0, 4.0],
            [0.0, 0.0],
        ];
        let hull = convex_hull(&points).unwrap();
        assert_close(&hull, &[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
    }

    #[test]
    fn convex_hull_rejects_degenerate_input() {
        assert_eq!(
            convex_hull(&[[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]]),
            Err(GeometryError::TooFewPoints { found: 2 })
        );
        assert!(matches!(
            convex_hull(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]),
            Err(GeometryError::Degenerate(_))
        ));
        assert_eq!(
            convex_hull(&[[0.0, 0.0], [1.0, f64::NAN], [2.0, 0.0]]),
            Err(GeometryError::NonFiniteCoordinate { index: 1 })
        );
    }

    #[test]
    fn scale_by_one_is_identity() {
        let polygon = [[0.0, 0.0], [3.0, 0.5], [2.0, 4.0], [0.0, 0.0]];
        assert_close(&scale_polygon(&polygon, 1.0), &polygon);
    }

    #[test]
    fn scale_doubles_about_centroid() {
        let square = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]];
        assert_close(
            &scale_polygon(&square, 2.0),
            &[[-1.0, -1.0], [3.0, -1.0], [3.0, 3.0], [-1.0, 3.0], [-1.0, -1.0]],
        );
    }

    #[test]
    fn grow_moves_vertices_radially() {
        let square = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];
        let grown = grow_polygon(&square, 2.0_f64.sqrt());
        assert_close(&grown, &[[-2.0, -2.0], [2.0, -2.0], [2.0, 2.0], [-2.0, 2.0]]);
    }

    #[test]
    fn buffer_offsets_each_axis() {
        let polygon = [[0.0, 0.0], [4.0, 0.0], [4.0, 2.0], [2.0, 4.0], [0.0, 2.0]];
        let buffered = buffer_polygon(&polygon, 1.0);
        assert_close(
            &buffered,
            &[[-1.0, -1.0], [5.0, -1.0], [5.0, 2.0], [2.0, 5.0], [-1.0, 2.0]],
        );
    }

    #[test]
    fn simplify_cuts_roof_apex() {
        let house = [[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [2.0, 4.0], [0.0, 3.0], [0.0, 0.0]];
        let simplified = simplify_polygon_until_limit(&house, 4).unwrap();
        assert_close(
            &simplified,
            &[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
        );
    }

    #[test]
    fn simplify_wraps_around_first_vertex() {
        let house = [[2.0, 4.0], [0.0, 3.0], [0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [2.0, 4.0]];
        let simplified = simplify_polygon_until_limit(&house, 4).unwrap();
        assert_close(
            &simplified,
            &[[0.0, 4.0], [0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]],
        );
    }

    #[test]
    fn simplify_removes_collinear_vertex_without_moving_neighbours() {
        let open = [[0.0, 0.0], [2.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]];
        let simplified = simplify_polygon_until_limit(&open, 4).unwrap();
        assert_close(&simplified, &[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
    }

    #[test]
    fn simplify_leaves_small_polygons_alone() {
        let triangle = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]];
        assert_eq!(simplify_polygon_until_limit(&triangle, 3).unwrap(), triangle);
        assert_eq!(
            simplify_polygon_until_limit(&triangle, 2),
            Err(GeometryError::InvalidVertexLimit { limit: 2 })
        );
    }

    #[test]
    fn simplify_rejects_edge_parallel_to_chord() {
        // Dropping the bump at [5, 1] would slide [0, 0] along the edge from
        // [20, 0], which runs parallel to the replacement edge.
        let polygon = [[20.0, 0.0], [0.0, 0.0], [5.0, 1.0], [10.0, 0.0], [15.0, -10.0]];
        assert!(matches!(
            simplify_polygon_until_limit(&polygon, 4),
            Err(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn simplify_collapses_repeated_vertex_first() {
        let square = [[0.0, 0.0], [10.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];
        let simplified = simplify_polygon_until_limit(&square, 4).unwrap();
        assert_close(
            &simplified,
            &[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
        );
    }

    #[test]
    fn closing_helpers() {
        let open = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let closed = close_polygon(&open);
        assert!(is_closed(&closed));
        assert_eq!(open_ring(&closed), &open);
        assert_eq!(close_polygon(&closed), closed);
        assert_eq!(polygon_centroid(&closed), Some([1.0 / 3.0, 1.0 / 3.0]));
        assert!((polygon_area(&open) - 0.5).abs() < 1e-12);
    }
}
