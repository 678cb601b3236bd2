use anyhow::Result;

use crate::cli::{Cli, DownloadArgs};
use crate::common::{download_archive, ensure_dir_exists, extract_zip};
use crate::sources::SOURCES;

/// Fetch and extract the three boundary archives, skipping any source whose
/// directory is already present.
pub fn run(cli: &Cli, args: &DownloadArgs) -> Result<()> {
    ensure_dir_exists(&args.out)?;

    for source in &SOURCES {
        let dest = args.out.join(source.name);
        if dest.exists() {
            if cli.verbose > 0 {
                eprintln!("[download] {} already present, skipping", dest.display());
            }
            continue;
        }

        let zip_path = args.out.join(format!("{}.zip", source.name));

        if cli.verbose > 0 { eprintln!("[download] {} -> {}", source.url, zip_path.display()); }
        download_archive(source.url, &zip_path)?;

        if cli.verbose > 0 { eprintln!("[extract] {} -> {}", zip_path.display(), dest.display()); }
        extract_zip(&zip_path, &dest)?;

        println!("Downloaded {} boundaries into {}", source.name, dest.display());
    }

    Ok(())
}
