use std::{fs::File, io::Write, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Write-then-rename wrapper for atomic archive downloads
struct PendingWrite {
    target: PathBuf,
    tmp: Option<(NamedTempFile, bool)>, // (file, need_fsync_dir)
}

impl PendingWrite {
    /// Open a file for a big write.
    fn open(target: &Path) -> Result<Self> {
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let need_fsync_dir = target.parent().is_some();
        let tmp = NamedTempFile::new_in(target.parent().unwrap_or(Path::new(".")))
            .context("create temp file")?;

        Ok(Self { target: target.to_path_buf(), tmp: Some((tmp, need_fsync_dir)) })
    }

    /// Finalize the big write.
    fn finalize(&mut self) -> Result<()> {
        let (tmp, need_fsync_dir) = self.tmp.take().expect("not finalized");
        tmp.as_file().sync_all().ok(); // best-effort fsync file
        tmp.persist(&self.target)
            .with_context(|| format!("rename to {}", self.target.display()))?;
        if need_fsync_dir {
            if let Some(dir) = self.target.parent() {
                let _ = File::open(dir).and_then(|f| f.sync_all());
            }
        }
        Ok(())
    }
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.tmp.as_mut().unwrap().0.write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.tmp.as_mut().unwrap().0.flush()
    }
}

/// Download a boundary archive from `url` to `out_path`.
pub(crate) fn download_archive(url: &str, out_path: &Path) -> Result<()> {
    // Safe big-file write (tempfile -> atomic rename)
    let mut sink = PendingWrite::open(out_path)?;

    let mut resp = reqwest::blocking::get(url)
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url} returned error status"))?;

    std::io::copy(&mut resp, &mut sink).with_context(|| format!("write {}", out_path.display()))?;

    sink.finalize()?;
    Ok(())
}
