use geo::orient::{Direction, Orient};
use geo::{Contains, Coord, Euclidean, Length, LineInterpolatePoint, LineString, MultiPolygon, Point, Polygon};
use geo_buffer::buffer_multi_polygon;

use super::Bubble;

/// Distance added to the erosion depth beyond the circle radius. Absorbs
/// boundary simplification error so sampled circles clear the boundary;
/// empirically chosen, not derived.
pub const EROSION_MARGIN: f64 = 30.0;

/// Vertex count of the polygonal circle approximation.
const CIRCLE_SEGMENTS: usize = 32;

/// Shrink the boundary inward so circles of `radius` fit strictly inside.
///
/// An empty result means no placement is possible at this radius; callers
/// treat that as a normal negative outcome, not an error.
pub fn erode(boundary: &MultiPolygon<f64>, radius: i64) -> MultiPolygon<f64> {
    // The offset direction is winding-sensitive.
    let oriented = boundary.orient(Direction::Default);
    buffer_multi_polygon(&oriented, -(radius as f64 + EROSION_MARGIN))
}

/// Walk the exterior contour of each polygon of the eroded region at `step`
/// meters of arc length, keeping the circles of `radius` that the original
/// boundary fully contains.
///
/// The containment re-check compensates for the fixed margin and for
/// erosion artifacts where a contour point does not admit a full circle.
/// Output order is contour traversal order within each polygon, polygons in
/// decomposition order.
pub fn sample_circles(
    boundary: &MultiPolygon<f64>,
    eroded: &MultiPolygon<f64>,
    radius: i64,
    step: f64,
) -> Vec<Bubble> {
    let mut accepted = Vec::new();

    for polygon in eroded {
        let exterior = polygon.exterior();
        let total = Euclidean.length(exterior);

        for position in ArcLengthPositions::new(total, step) {
            let Some(center) = exterior.line_interpolate_point(position / total) else {
                continue;
            };
            let circle = circle(center, radius as f64);
            if boundary.contains(&circle) {
                accepted.push(Bubble { center, radius, circle });
            }
        }
    }

    accepted
}

/// Circle approximation with `CIRCLE_SEGMENTS` vertices around `center`.
fn circle(center: Point<f64>, radius: f64) -> Polygon<f64> {
    let mut coords = Vec::with_capacity(CIRCLE_SEGMENTS + 1);
    for i in 0..CIRCLE_SEGMENTS {
        let angle = std::f64::consts::TAU * i as f64 / CIRCLE_SEGMENTS as f64;
        coords.push(Coord {
            x: center.x() + radius * angle.cos(),
            y: center.y() + radius * angle.sin(),
        });
    }
    coords.push(coords[0]);
    Polygon::new(LineString(coords), vec![])
}

/// Finite lazy sequence of arc-length positions `0, step, 2*step, ..`
/// strictly below `total`. Empty when `total` or `step` is not positive, so
/// a degenerate contour or step yields zero samples.
pub(crate) struct ArcLengthPositions {
    next: f64,
    total: f64,
    step: f64,
}

impl ArcLengthPositions {
    pub(crate) fn new(total: f64, step: f64) -> Self {
        Self { next: 0.0, total, step }
    }
}

impl Iterator for ArcLengthPositions {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.step <= 0.0 || self.next >= self.total {
            return None;
        }
        let position = self.next;
        self.next += self.step;
        Some(position)
    }
}
