//! Planar national grid to geographic coordinate transforms.

use anyhow::{Context, Result};
use geo::Point;
use proj4rs::{proj::Proj as Proj4, transform::transform};

/// British National Grid (EPSG:27700), the CRS of all three source shapefiles.
const OSGB36_PROJ4: &str = "+proj=tmerc +lat_0=49 +lon_0=-2 +k=0.9996012717 \
    +x_0=400000 +y_0=-100000 +ellps=airy \
    +towgs84=446.448,-125.157,542.06,0.15,0.247,0.842,-20.489 \
    +units=m +no_defs +type=crs";

/// WGS84 geographic lat/long (EPSG:4326).
const WGS84_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";

/// Reprojects points from the planar national grid to geographic lat/long.
pub(crate) struct GridToWgs84 {
    from: Proj4,
    to: Proj4,
}

impl GridToWgs84 {
    pub(crate) fn new() -> Result<Self> {
        let from = Proj4::from_proj_string(OSGB36_PROJ4)
            .with_context(|| format!("failed to build source PROJ.4: {OSGB36_PROJ4}"))?;
        let to = Proj4::from_proj_string(WGS84_PROJ4)
            .with_context(|| format!("failed to build target PROJ.4: {WGS84_PROJ4}"))?;
        Ok(Self { from, to })
    }

    /// Easting/northing in meters to `(latitude, longitude)` in degrees.
    pub(crate) fn transform(&self, point: Point<f64>) -> Result<(f64, f64)> {
        // Meters in, radians out for the geographic target.
        let mut coords = (point.x(), point.y(), 0.0);
        transform(&self.from, &self.to, &mut coords).context("CRS transform failed")?;
        Ok((coords.1.to_degrees(), coords.0.to_degrees()))
    }
}
