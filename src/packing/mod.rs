//! Bubble packing: approximating a boundary with circles that fit inside it.
//!
//! A packing run erodes the boundary inward, walks the eroded contours at a
//! computed spacing, and keeps the circles the original boundary fully
//! contains, over up to three passes of decreasing radius.

mod controller;
mod coverage;
mod radius;
mod sampler;

pub use controller::{BUBBLE_LIMIT, MAX_ITERATIONS, PackState, pack_boundary, step_length};
pub use coverage::{CoverageSummary, coverage_percent, summarize};
pub use radius::radius_upper_bound;
pub use sampler::{EROSION_MARGIN, erode, sample_circles};

use geo::{Point, Polygon};

/// A circle fully contained in its boundary, the unit of packing output.
#[derive(Debug, Clone)]
pub struct Bubble {
    /// Center, in the boundary's planar coordinates.
    pub center: Point<f64>,
    /// Radius in meters, a positive multiple of 1000.
    pub radius: i64,
    /// The circle outline, used for containment, union and rendering.
    pub circle: Polygon<f64>,
}

impl Bubble {
    /// Radius in whole kilometers.
    #[inline] pub fn radius_km(&self) -> i64 { self.radius / 1000 }
}
