//! SVG rendering of a constituency boundary and its bubbles.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use geo::{BoundingRect, LineString, MultiPolygon, Rect};

use crate::packing::Bubble;

const WIDTH: f64 = 800.0;
const MARGIN: f64 = 20.0;

/// Map from planar boundary coordinates to the SVG viewport (y flipped).
struct Viewport {
    bounds: Rect<f64>,
    scale: f64,
    height: f64,
}

impl Viewport {
    fn new(bounds: Rect<f64>) -> Self {
        let scale = (WIDTH - 2.0 * MARGIN) / bounds.width();
        let height = bounds.height() * scale + 2.0 * MARGIN;
        Self { bounds, scale, height }
    }

    #[inline]
    fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (
            MARGIN + (x - self.bounds.min().x) * self.scale,
            self.height - MARGIN - (y - self.bounds.min().y) * self.scale,
        )
    }
}

/// Render one constituency: boundary outline, bubble circles, caption.
pub(crate) fn render_constituency(
    path: &Path,
    name: &str,
    boundary: &MultiPolygon<f64>,
    bubbles: &[Bubble],
    coverage: f64,
) -> Result<()> {
    let bounds = boundary
        .bounding_rect()
        .with_context(|| format!("empty boundary geometry for {name}"))?;
    let view = Viewport::new(bounds);

    let file = File::create(path)
        .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(
        writer,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{height:.0}" viewBox="0 0 {WIDTH} {height:.0}">"##,
        height = view.height,
    )?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    writeln!(writer, r##"<defs>
<style>
    .boundary {{ fill: none; stroke: #2563eb; stroke-width: 1; }}
    .bubble {{ fill: #ef4444; fill-opacity: 0.55; stroke: #ef4444; stroke-width: 0.5; }}
    .caption {{ font: 14px sans-serif; fill: #111827; }}
</style>
</defs>"##)?;

    for polygon in boundary {
        write_ring(&mut writer, polygon.exterior(), &view)?;
        for hole in polygon.interiors() {
            write_ring(&mut writer, hole, &view)?;
        }
    }

    for bubble in bubbles {
        let (cx, cy) = view.project(bubble.center.x(), bubble.center.y());
        writeln!(
            writer,
            r##"<circle class="bubble" cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}"/>"##,
            r = bubble.radius as f64 * view.scale,
        )?;
    }

    writeln!(
        writer,
        r##"<text class="caption" x="{MARGIN}" y="{MARGIN}">{name}: {coverage:.0}% coverage</text>"##,
        name = escape_xml(name),
    )?;
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Write one closed ring as a boundary path.
fn write_ring<W: Write>(writer: &mut W, ring: &LineString<f64>, view: &Viewport) -> Result<()> {
    let mut d = String::new();
    for (i, coord) in ring.coords().enumerate() {
        let (x, y) = view.project(coord.x, coord.y);
        let op = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{op}{x:.2},{y:.2} "));
    }
    d.push('Z');
    writeln!(writer, r##"<path class="boundary" d="{d}"/>"##)?;
    Ok(())
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, Point, Polygon};

    #[test]
    fn renders_boundary_bubbles_and_caption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.svg");

        let ring = LineString::from(vec![
            (0.0, 0.0),
            (1000.0, 0.0),
            (1000.0, 1000.0),
            (0.0, 1000.0),
            (0.0, 0.0),
        ]);
        let boundary = MultiPolygon(vec![Polygon::new(ring, vec![])]);

        let circle: Vec<Coord<f64>> = (0..=16)
            .map(|i| {
                let angle = std::f64::consts::TAU * (i % 16) as f64 / 16.0;
                Coord { x: 500.0 + 100.0 * angle.cos(), y: 500.0 + 100.0 * angle.sin() }
            })
            .collect();
        let bubbles = vec![Bubble {
            center: Point::new(500.0, 500.0),
            radius: 100,
            circle: Polygon::new(LineString(circle), vec![]),
        }];

        render_constituency(&path, "A & B", &boundary, &bubbles, 3.1).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<?xml"));
        assert!(written.contains(r#"<path class="boundary""#));
        assert!(written.contains(r#"<circle class="bubble""#));
        assert!(written.contains("A &amp; B: 3% coverage"));
        assert!(written.trim_end().ends_with("</svg>"));
    }
}
