// crates/infra/src/persistence/file_reader.rs
use std::{fs::File, io::Read, path::Path};

use users_posts_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory; failures name the path.
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        let read = || -> std::io::Result<Vec<u8>> {
            let mut file = File::open(path)?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            Ok(buf)
        };
        read().map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }
}
