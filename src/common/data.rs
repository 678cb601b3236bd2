use std::path::Path;

use anyhow::{Context, Result};
use shapefile::{Reader, Shape, dbase::Record};

/// Reads all shapes + attribute records from a given `.shp` file path.
pub(crate) fn read_shapefile(path: &Path) -> Result<Vec<(Shape, Record)>> {
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("Failed to open shapefile: {}", path.display()))?;

    let mut items = Vec::with_capacity(reader.shape_count()?);
    for result in reader.iter_shapes_and_records() {
        let (shape, record) = result.context("Error reading shape+record")?;
        items.push((shape, record));
    }
    Ok(items)
}
