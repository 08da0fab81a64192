use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InitializationError {
    #[error("Failed to create marker file {}", path.display())]
    MarkerFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
