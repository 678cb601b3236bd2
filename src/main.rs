use anyhow::Result;
use clap::Parser;

use bubblemap::cli::{Cli, Commands};
use bubblemap::commands::{download, generate};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Download(args) => download::run(&cli, args),
        Commands::Generate(args) => generate::run(&cli, args),
    }
}
