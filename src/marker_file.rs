use std::{
    fs::{self, OpenOptions},
    io::{self, ErrorKind},
    path::Path,
};

use tracing::{error, info};

use crate::header_supplier::initialization_error::InitializationError;

pub const MARKER_FILE_PATH: &str = "/tmp/123.test";

/// Creates an empty marker file at `path` if nothing is there yet. An existing
/// regular file is left as is and never opened; any other kind of node fails.
/// The file is never removed.
pub fn create_marker_file(path: impl AsRef<Path>) -> Result<(), InitializationError> {
    let path = path.as_ref();

    touch(path).map_err(|source| {
        error!("Marker file {} could not be created: {}", path.display(), source);
        InitializationError::MarkerFile {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!("Marker file {} is in place", path.display());

    Ok(())
}

fn touch(path: &Path) -> io::Result<()> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            if fs::symlink_metadata(path)?.is_file() {
                Ok(())
            } else {
                Err(io::Error::new(
                    ErrorKind::InvalidInput,
                    "marker path is not a regular file",
                ))
            }
        }
        Err(err) => Err(err),
    }
}
