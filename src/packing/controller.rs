use geo::{Euclidean, Length, MultiPolygon};

use super::{Bubble, radius_upper_bound, sampler};

/// Hard cap on the number of bubbles per boundary.
pub const BUBBLE_LIMIT: usize = 200;

/// Maximum accepted packing iterations per boundary.
pub const MAX_ITERATIONS: u32 = 3;

/// State threaded through one boundary's packing run: the candidate radius,
/// the number of accepted iterations, and the bubbles gathered so far.
#[derive(Debug, Clone)]
pub struct PackState {
    pub radius: i64,
    pub iterations: u32,
    pub bubbles: Vec<Bubble>,
}

impl PackState {
    /// Start a run at the estimated upper-bound radius.
    pub fn new(radius: i64) -> Self {
        Self { radius, iterations: 0, bubbles: Vec::new() }
    }

    /// Whether another transition may run.
    #[inline]
    pub fn viable(&self) -> bool {
        self.radius > 0 && self.iterations < MAX_ITERATIONS
    }

    /// One transition of the packing state machine.
    ///
    /// An empty erosion is a radius failure: the radius steps down one
    /// kilometer and the iteration does not count. A non-empty erosion is an
    /// iteration success: circles are sampled along the eroded contours at
    /// the policy step, and the radius drops to `floor(radius / 1500) * 1000`
    /// for the next pass.
    pub fn advance(&mut self, boundary: &MultiPolygon<f64>) {
        let eroded = sampler::erode(boundary, self.radius);

        if eroded.0.is_empty() {
            self.radius -= 1000;
            return;
        }

        let step = step_length(&eroded, self.radius, self.iterations, self.bubbles.len());
        self.bubbles
            .extend(sampler::sample_circles(boundary, &eroded, self.radius, step));
        self.iterations += 1;
        self.radius = self.radius / 1500 * 1000;
    }

    /// Finish the run: truncate to the bubble cap, preserving insertion order.
    pub fn into_bubbles(mut self) -> Vec<Bubble> {
        self.bubbles.truncate(BUBBLE_LIMIT);
        self.bubbles
    }
}

/// Candidate spacing along the eroded contours.
///
/// Early iterations sample one candidate per radius-length of contour. The
/// last iteration (minimum radius, third pass, or a projected overflow of
/// the cap) spreads the remaining capacity over the whole contour instead.
pub fn step_length(
    eroded: &MultiPolygon<f64>,
    radius: i64,
    iterations: u32,
    accumulated: usize,
) -> f64 {
    let total: f64 = eroded
        .iter()
        .map(|polygon| Euclidean.length(polygon.exterior()))
        .sum();
    let projected = total / radius as f64;

    let last_iteration = radius == 1000
        || iterations == MAX_ITERATIONS - 1
        || accumulated as f64 + projected > BUBBLE_LIMIT as f64;

    if last_iteration {
        let remaining = BUBBLE_LIMIT as i64 - accumulated as i64;
        if remaining <= 0 {
            // Cap already full; a zero step samples nothing.
            return 0.0;
        }
        total / remaining as f64
    } else {
        radius as f64
    }
}

/// Pack one boundary with bubbles: estimate the starting radius, run the
/// state machine to exhaustion, cap the result.
pub fn pack_boundary(boundary: &MultiPolygon<f64>) -> Vec<Bubble> {
    let mut state = PackState::new(radius_upper_bound(boundary));
    while state.viable() {
        state.advance(boundary);
    }
    state.into_bubbles()
}
