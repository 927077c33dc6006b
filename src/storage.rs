pub mod file_sink {
    use crate::errors::errors::SaveError;
    use log::warn;
    use std::fs::{self, File};
    use std::io::{ErrorKind, Write};
    use std::path::Path;

    /// True when a regular file exists at the path and holds at least one byte
    pub fn exists_and_not_empty(path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(meta) => meta.is_file() && meta.len() > 0,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                warn!("Error checking file '{}': {}", path.display(), e);
                false
            }
        }
    }

    /// Create or truncate the file, write all of data and sync it to disk
    pub fn save(path: &Path, data: &[u8]) -> Result<(), SaveError> {
        let mut file = File::create(path).map_err(|source| SaveError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        file.write_all(data).map_err(|source| SaveError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        file.sync_all().map_err(|source| SaveError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

}
