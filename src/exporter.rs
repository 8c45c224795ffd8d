//! Wordlist exporter - writes the sorted candidate set to disk.

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::candidates::CandidateSet;
use crate::error::WordlistError;

/// Writes `set` to `dest`, one candidate per line in ascending code-point
/// order, and returns the number of lines written.
///
/// The list is written to a temporary file next to `dest` and renamed
/// over it once complete, so `dest` never holds a truncated list. An
/// existing file keeps its permissions; a new file is created owner-only
/// (`0600` on Unix).
///
/// # Errors
///
/// Returns `Io` with the destination path if any step fails. The
/// temporary file is removed in that case.
pub fn export<P: AsRef<Path>>(set: &CandidateSet, dest: P) -> Result<usize, WordlistError> {
    let dest = dest.as_ref();
    let dir = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let result = write_atomic(set, dir, dest);

    #[cfg(feature = "tracing")]
    {
        match &result {
            Ok(count) => tracing::info!("Wordlist exported: {} entries to {:?}", count, dest),
            Err(e) => tracing::error!("Wordlist export FAILED: {}", e),
        }
    }

    result
}

fn write_atomic(set: &CandidateSet, dir: &Path, dest: &Path) -> Result<usize, WordlistError> {
    let io_err = |e: std::io::Error| WordlistError::io(dest, e);

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    let mut count = 0;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        for word in set.sorted() {
            writer.write_all(word.as_bytes()).map_err(io_err)?;
            writer.write_all(b"\n").map_err(io_err)?;
            count += 1;
        }
        writer.flush().map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;

    if let Ok(meta) = std::fs::metadata(dest) {
        if meta.is_file() {
            tmp.as_file().set_permissions(meta.permissions()).map_err(io_err)?;
        }
    }

    tmp.persist(dest).map_err(|e| io_err(e.error))?;
    Ok(count)
}
