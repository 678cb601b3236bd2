use std::path::Path;

use anyhow::{Result, bail};
use geo::MultiPolygon;
use shapefile::{Shape, dbase::FieldValue};

use crate::common;

/// One national boundary dataset: where to fetch it and how to read it.
#[derive(Debug, Clone, Copy)]
pub struct BoundarySource {
    /// Directory name under the data dir.
    pub name: &'static str,
    /// Boundary commission archive URL.
    pub url: &'static str,
    /// Path of the `.shp` inside the extracted archive.
    pub shapefile: &'static str,
    /// dBase attribute field holding the constituency name.
    pub name_field: &'static str,
}

/// The 2023-review final recommendation datasets, processed in this order.
pub const SOURCES: [BoundarySource; 3] = [
    BoundarySource {
        name: "england",
        url: "https://boundarycommissionforengland.independent.gov.uk/wp-content/uploads/2023/06/984162_2023_06_27_Final_recommendations_England_shp.zip",
        shapefile: "2023_06_27_Final_recommendations_England.shp",
        name_field: "Constituen",
    },
    BoundarySource {
        name: "scotland",
        url: "https://www.bcomm-scotland.independent.gov.uk/sites/default/files/2023_review_final/bcs_final_recs_2023_review.zip",
        shapefile: "All_Scotland_Final_Recommended_Constituencies_2023_Review.shp",
        name_field: "NAME",
    },
    BoundarySource {
        name: "wales",
        url: "https://bcomm-wales.gov.uk/sites/bcomm/files/review/Shapefiles.zip",
        shapefile: "Final Recs Shapefiles/Final Recommendations_region.shp",
        name_field: "Official_N",
    },
];

/// A named constituency boundary in planar national-grid coordinates.
#[derive(Debug, Clone)]
pub struct Constituency {
    pub name: String,
    pub boundary: MultiPolygon<f64>,
}

/// Load every constituency from one extracted source directory.
pub fn load_constituencies(data_dir: &Path, source: &BoundarySource) -> Result<Vec<Constituency>> {
    let path = data_dir.join(source.name).join(source.shapefile);
    let items = common::read_shapefile(&path)?;

    let mut constituencies = Vec::with_capacity(items.len());
    for (shape, record) in items {
        let boundary = match shape {
            Shape::Polygon(polygon) => common::shp_to_geo(&polygon),
            _ => bail!("expected polygon shapes in {}", path.display()),
        };

        let name = match record.get(source.name_field) {
            Some(FieldValue::Character(Some(s))) => s.trim().to_string(),
            _ => bail!("missing or invalid character field: {}", source.name_field),
        };

        constituencies.push(Constituency { name, boundary });
    }

    if constituencies.is_empty() {
        bail!("no constituencies found in {}", path.display());
    }

    Ok(constituencies)
}
