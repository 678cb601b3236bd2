use anyhow::{Context, Result};

use crate::cli::{Cli, GenerateArgs};
use crate::common::ensure_dir_exists;
use crate::io::{BubbleRow, GridToWgs84, render_constituency, write_bubbles_csv, write_statistics_csv};
use crate::packing::{coverage_percent, pack_boundary, summarize};
use crate::sources::{SOURCES, load_constituencies};

/// Pack every constituency and write the CSV (and optional SVG) output.
pub fn run(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let mut constituencies = Vec::new();
    for source in &SOURCES {
        let mut loaded = load_constituencies(&args.data, source)
            .with_context(|| format!("loading {} boundaries", source.name))?;
        if cli.verbose > 0 {
            eprintln!("[load] {}: {} constituencies", source.name, loaded.len());
        }
        constituencies.append(&mut loaded);
    }

    ensure_dir_exists(&args.out)?;
    let svg_dir = args.out.join("svg");
    if args.svg {
        ensure_dir_exists(&svg_dir)?;
    }

    let transformer = GridToWgs84::new()?;
    let mut bubble_rows = Vec::new();
    let mut coverage_rows = Vec::with_capacity(constituencies.len());

    for constituency in &constituencies {
        println!("{}", constituency.name);

        let bubbles = pack_boundary(&constituency.boundary);
        let coverage = coverage_percent(&constituency.boundary, &bubbles);

        if cli.verbose > 0 {
            let mut radii: Vec<i64> = bubbles.iter().map(|bubble| bubble.radius).collect();
            radii.dedup();
            eprintln!(
                "[pack] {}: {} bubbles at radii {:?}, {:.1}% coverage",
                constituency.name,
                bubbles.len(),
                radii,
                coverage
            );
        }

        for bubble in &bubbles {
            let (lat, lon) = transformer.transform(bubble.center)?;
            bubble_rows.push(BubbleRow {
                lat,
                lon,
                radius_km: bubble.radius_km(),
                constituency: constituency.name.clone(),
            });
        }
        coverage_rows.push((constituency.name.clone(), coverage));

        if args.svg {
            let file = svg_dir.join(format!("{}.svg", constituency.name.replace('/', "-")));
            render_constituency(&file, &constituency.name, &constituency.boundary, &bubbles, coverage)?;
        }
    }

    write_bubbles_csv(&bubble_rows, &args.out.join("bubbles.csv"))?;

    let coverages: Vec<f64> = coverage_rows.iter().map(|(_, coverage)| *coverage).collect();
    let summary = summarize(&coverages).context("no constituencies loaded")?;
    write_statistics_csv(&coverage_rows, &summary, &args.out.join("statistics.csv"))?;

    println!(
        "Packed {} constituencies -> {}",
        constituencies.len(),
        args.out.display()
    );
    Ok(())
}
