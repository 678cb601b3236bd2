use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Bubble map CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "bubblemap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download and extract the constituency boundary shapefiles
    Download(DownloadArgs),

    /// Pack every constituency with bubbles and write CSV/SVG output
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Data directory the archives are extracted into
    #[arg(value_hint = ValueHint::DirPath, default_value = "data")]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Data directory holding the extracted shapefiles
    #[arg(value_hint = ValueHint::DirPath, default_value = "data")]
    pub data: PathBuf,

    /// Output directory for the CSV (and SVG) files
    #[arg(short, long, value_hint = ValueHint::DirPath, default_value = "output")]
    pub out: PathBuf,

    /// Render a per-constituency SVG alongside the CSV rows
    #[arg(long)]
    pub svg: bool,
}
