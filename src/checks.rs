use std::fs::{DirBuilder, File};
use std::path::Path;

use log::warn;

use crate::error::PreconditionError;

/// Ensures the template exists, is a regular file, and can be opened for reading.
pub fn check_template(path: &Path) -> Result<(), PreconditionError> {
    if !path.is_file() {
        return Err(PreconditionError::NotAFile(path.to_path_buf()));
    }
    File::open(path).map_err(|source| PreconditionError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Ensures `path` is a writable directory, creating it first if needed.
///
/// Returns `true` if the directory was created.
pub fn prepare_output_dir(path: &Path) -> Result<bool, PreconditionError> {
    let created = if path.exists() {
        false
    } else {
        warn!("directory {path:?} does not exist, creating");
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder
            .create(path)
            .map_err(|source| PreconditionError::CreateDir {
                path: path.to_path_buf(),
                source,
            })?;
        true
    };

    if !path.is_dir() {
        return Err(PreconditionError::NotADirectory(path.to_path_buf()));
    }

    // Probe file is removed when dropped.
    tempfile::Builder::new()
        .prefix(".params-pkg-gen")
        .tempfile_in(path)
        .map_err(|source| PreconditionError::NotWritable {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(created)
}
