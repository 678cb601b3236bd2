use geo::{Area, BooleanOps, MultiPolygon};
use ndarray::Array1;

use super::Bubble;

/// Share of the boundary covered by the union of its bubbles, in percent.
///
/// Bubbles are constrained to lie inside the boundary, so the result is in
/// `[0, 100]` for any boundary with positive area. No bubbles means 0.
pub fn coverage_percent(boundary: &MultiPolygon<f64>, bubbles: &[Bubble]) -> f64 {
    let union = bubbles
        .iter()
        .map(|bubble| MultiPolygon::from(bubble.circle.clone()))
        .reduce(|a, b| a.union(&b));

    let covered = union.map_or(0.0, |shape| shape.unsigned_area());
    100.0 * covered / boundary.unsigned_area()
}

/// Corpus-level summary over the ordered per-boundary coverage list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageSummary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (no Bessel correction).
    pub sigma: f64,
}

/// Summarize the coverages once all boundaries are processed.
/// Returns `None` for an empty corpus.
pub fn summarize(coverages: &[f64]) -> Option<CoverageSummary> {
    if coverages.is_empty() {
        return None;
    }

    let values = Array1::from(coverages.to_vec());
    Some(CoverageSummary {
        mean: values.mean()?,
        median: median(coverages),
        min: coverages.iter().copied().fold(f64::INFINITY, f64::min),
        max: coverages.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        sigma: values.std(0.0),
    })
}

/// Midpoint median: the average of the two middle values for even counts.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
