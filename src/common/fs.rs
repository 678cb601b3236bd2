use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use zip::ZipArchive;

/// Create the directory if it doesn’t exist; error if a non-directory exists there.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            anyhow::bail!("Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Extracts the given `.zip` archive into the target directory and removes
/// the archive afterwards (only the extracted shapefiles are kept).
pub(crate) fn extract_zip(zip_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = fs::File::open(zip_path)
        .with_context(|| format!("failed to open {}", zip_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("failed to read zip archive {}", zip_path.display()))?;

    archive
        .extract(dest_dir)
        .with_context(|| format!("failed to extract {} to {}", zip_path.display(), dest_dir.display()))?;

    fs::remove_file(zip_path)
        .with_context(|| format!("failed to delete {}", zip_path.display()))?;

    Ok(())
}
