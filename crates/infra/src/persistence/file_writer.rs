// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;
use users_posts_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically replace `path` with `data`: the bytes go to a temp file in the same
    /// directory, which is then renamed over the target.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        Self::write_via_temp(path, data)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }

    fn write_via_temp(path: &Path, data: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        // Dropped (and removed) on any early return.
        let mut tmp = NamedTempFile::new_in(parent)?;
        // NamedTempFile is owner-only; an existing target keeps its mode.
        if let Ok(meta) = fs::metadata(path) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        tmp.write_all(data)?;
        tmp.flush()?;
        let _ = tmp.as_file().sync_all();

        tmp.persist(path).map_err(|err| err.error)?;
        Ok(())
    }
}
