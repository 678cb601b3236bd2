// End-to-end packing scenarios over synthetic boundaries.

use geo::{Contains, Coord, LineString, MultiPolygon, Polygon};

use bubblemap::packing::{
    BUBBLE_LIMIT, PackState, coverage_percent, pack_boundary, radius_upper_bound,
};

fn square(side: f64) -> MultiPolygon<f64> {
    let ring = LineString::from(vec![
        (0.0, 0.0),
        (side, 0.0),
        (side, side),
        (0.0, side),
        (0.0, 0.0),
    ]);
    MultiPolygon(vec![Polygon::new(ring, vec![])])
}

/// Regular 64-gon standing in for a point buffered by `radius`.
fn disc(radius: f64) -> MultiPolygon<f64> {
    let coords: Vec<Coord<f64>> = (0..=64)
        .map(|i| {
            let angle = std::f64::consts::TAU * (i % 64) as f64 / 64.0;
            Coord { x: radius * angle.cos(), y: radius * angle.sin() }
        })
        .collect();
    MultiPolygon(vec![Polygon::new(LineString(coords), vec![])])
}

#[test]
fn ten_kilometer_square_estimates_a_two_kilometer_radius() {
    assert_eq!(radius_upper_bound(&square(10_000.0)), 2000);
}

#[test]
fn ten_kilometer_square_packs_contained_kilometer_multiple_bubbles() {
    let boundary = square(10_000.0);
    let bubbles = pack_boundary(&boundary);

    assert!(!bubbles.is_empty());
    assert!(bubbles.len() <= BUBBLE_LIMIT);
    for bubble in &bubbles {
        assert!(boundary.contains(&bubble.circle));
        assert!(bubble.radius > 0 && bubble.radius % 1000 == 0);
    }

    // First pass runs at the estimated 2 km radius; the eroded square's
    // 23760 m perimeter at step 2000 admits a dozen centers.
    let first_pass = bubbles.iter().filter(|bubble| bubble.radius == 2000).count();
    assert!((11..=12).contains(&first_pass), "first pass packed {first_pass}");

    let coverage = coverage_percent(&boundary, &bubbles);
    assert!(coverage > 0.0 && coverage <= 100.0, "coverage {coverage}");
}

#[test]
fn tiny_disc_terminates_with_nothing() {
    let boundary = disc(500.0);

    // Width under 2 km: the estimate is zero and the run never starts.
    assert_eq!(radius_upper_bound(&boundary), 0);
    let bubbles = pack_boundary(&boundary);
    assert!(bubbles.is_empty());
    assert_eq!(coverage_percent(&boundary, &bubbles), 0.0);
}

#[test]
fn tested_radii_never_increase() {
    let boundary = square(10_000.0);
    let mut state = PackState::new(radius_upper_bound(&boundary));

    let mut previous = state.radius;
    let mut transitions = 0;
    while state.viable() {
        state.advance(&boundary);
        assert!(state.radius <= previous, "{} grew to {}", previous, state.radius);
        previous = state.radius;
        transitions += 1;
        assert!(transitions < 100, "run must terminate");
    }
    assert!(state.iterations <= 3);
}

#[test]
fn elongated_strip_stays_under_the_cap() {
    let ring = LineString::from(vec![
        (0.0, 0.0),
        (100_000.0, 0.0),
        (100_000.0, 3_000.0),
        (0.0, 3_000.0),
        (0.0, 0.0),
    ]);
    let boundary = MultiPolygon(vec![Polygon::new(ring, vec![])]);

    let bubbles = pack_boundary(&boundary);
    assert!(bubbles.len() <= BUBBLE_LIMIT);
    for bubble in &bubbles {
        assert!(boundary.contains(&bubble.circle));
    }
}

#[test]
fn island_groups_pack_each_island() {
    // Two 10 km squares far apart, one boundary.
    let a = Polygon::new(
        LineString::from(vec![
            (0.0, 0.0),
            (10_000.0, 0.0),
            (10_000.0, 10_000.0),
            (0.0, 10_000.0),
            (0.0, 0.0),
        ]),
        vec![],
    );
    let b = Polygon::new(
        LineString::from(vec![
            (50_000.0, 0.0),
            (60_000.0, 0.0),
            (60_000.0, 10_000.0),
            (50_000.0, 10_000.0),
            (50_000.0, 0.0),
        ]),
        vec![],
    );
    let boundary = MultiPolygon(vec![a, b]);

    let bubbles = pack_boundary(&boundary);
    assert!(!bubbles.is_empty());
    assert!(bubbles.len() <= BUBBLE_LIMIT);
    for bubble in &bubbles {
        assert!(boundary.contains(&bubble.circle));
    }

    // Both islands receive bubbles.
    assert!(bubbles.iter().any(|bubble| bubble.center.x() < 20_000.0));
    assert!(bubbles.iter().any(|bubble| bubble.center.x() > 40_000.0));
}
