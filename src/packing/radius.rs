use geo::{Distance, Euclidean, MinimumRotatedRect, MultiPolygon};

/// Upper bound on the packing radius for a boundary, in meters.
///
/// Measures the two adjacent edges of the minimum rotated bounding rectangle
/// and takes half the shorter one, rounded down to the nearest kilometer, so
/// the first candidate radius never exceeds half the boundary's narrowest
/// extent. Boundaries narrower than 2 km yield 0.
pub fn radius_upper_bound(boundary: &MultiPolygon<f64>) -> i64 {
    let Some(rect) = boundary.minimum_rotated_rect() else {
        return 0;
    };

    let corners: Vec<_> = rect.exterior().points().take(3).collect();
    if corners.len() < 3 {
        return 0;
    }

    let edges = (
        Euclidean.distance(corners[0], corners[1]),
        Euclidean.distance(corners[1], corners[2]),
    );

    let width = edges.0.min(edges.1);
    ((width / 2000.0).floor() as i64) * 1000
}
