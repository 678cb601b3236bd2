//! CSV writing operations.

use std::{fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::packing::CoverageSummary;

/// One bubbles.csv row, already reprojected to geographic coordinates.
pub(crate) struct BubbleRow {
    pub(crate) lat: f64,
    pub(crate) lon: f64,
    pub(crate) radius_km: i64,
    pub(crate) constituency: String,
}

impl BubbleRow {
    /// `(<lat>, <lon>) +<radius>km`
    fn label(&self) -> String {
        format!("({}, {}) +{}km", self.lat, self.lon, self.radius_km)
    }
}

/// Write a DataFrame to a CSV file.
fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv] Failed to write CSV to {:?}", path))
}

/// Write the per-bubble rows.
pub(crate) fn write_bubbles_csv(rows: &[BubbleRow], path: &Path) -> Result<()> {
    let (bubbles, constituencies): (Vec<String>, Vec<String>) = rows
        .iter()
        .map(|row| (row.label(), row.constituency.clone()))
        .unzip();

    let mut df = DataFrame::new(vec![
        Series::new("bubble".into(), bubbles).into(),
        Series::new("constituency".into(), constituencies).into(),
    ])?;

    write_csv(&mut df, path)
}

/// Write the per-constituency coverage rows, then a blank separator row and
/// the five corpus summary rows.
pub(crate) fn write_statistics_csv(
    rows: &[(String, f64)],
    summary: &CoverageSummary,
    path: &Path,
) -> Result<()> {
    let (constituencies, coverages): (Vec<String>, Vec<f64>) = rows.iter().cloned().unzip();

    let mut df = DataFrame::new(vec![
        Series::new("constituency".into(), constituencies).into(),
        Series::new("coverage".into(), coverages).into(),
    ])?;

    let mut file = File::create(path)
        .with_context(|| format!("[io::csv] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("[io::csv] Failed to write CSV to {:?}", path))?;

    writeln!(file, ",")?;

    let mut summary_df = DataFrame::new(vec![
        Series::new("statistic".into(), vec!["mean", "median", "min", "max", "sigma"]).into(),
        Series::new(
            "value".into(),
            vec![summary.mean, summary.median, summary.min, summary.max, summary.sigma],
        ).into(),
    ])?;
    CsvWriter::new(&mut file)
        .include_header(false)
        .finish(&mut summary_df)
        .with_context(|| format!("[io::csv] Failed to write CSV to {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_label_matches_the_row_format() {
        let row = BubbleRow {
            lat: 51.5,
            lon: -0.125,
            radius_km: 2,
            constituency: "Cities of London and Westminster".into(),
        };
        assert_eq!(row.label(), "(51.5, -0.125) +2km");
    }

    #[test]
    fn statistics_csv_carries_rows_separator_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statistics.csv");

        let rows = vec![("Ceredigion Preseli".to_string(), 62.5), ("Bangor Aberconwy".to_string(), 58.0)];
        let summary = CoverageSummary { mean: 60.25, median: 60.25, min: 58.0, max: 62.5, sigma: 2.25 };
        write_statistics_csv(&rows, &summary, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "constituency,coverage");
        assert!(lines[1].starts_with("Ceredigion Preseli,"));
        assert_eq!(lines[3], ",");
        assert!(lines[4].starts_with("mean,"));
        assert!(lines[8].starts_with("sigma,"));
    }

    #[test]
    fn bubbles_csv_has_one_row_per_bubble() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bubbles.csv");

        let rows = vec![
            BubbleRow { lat: 52.0, lon: -3.0, radius_km: 4, constituency: "Brecon".into() },
            BubbleRow { lat: 52.1, lon: -3.1, radius_km: 1, constituency: "Brecon".into() },
        ];
        write_bubbles_csv(&rows, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "bubble,constituency");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("+4km"));
    }
}
