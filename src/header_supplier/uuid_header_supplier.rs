use std::path::Path;

use tracing::info;
use uuid::Uuid;

use crate::{
    custom_header::custom_header::{CustomHeader, X_CUSTOM_HEADER},
    header_supplier::{header_supplier::HeaderSupplier, initialization_error::InitializationError},
    marker_file::{MARKER_FILE_PATH, create_marker_file},
};

/// Supplies `X-Custom-Header` with a fresh v4 UUID on every call.
#[derive(Debug, Clone, Default)]
pub struct UuidHeaderSupplier {}

impl UuidHeaderSupplier {
    pub fn new() -> Self {
        Self {}
    }

    /// Creates the marker file before the supplier becomes usable.
    pub fn with_marker_file(path: impl AsRef<Path>) -> Result<Self, InitializationError> {
        create_marker_file(path)?;

        Ok(Self::new())
    }

    pub fn legacy() -> Result<Self, InitializationError> {
        Self::with_marker_file(MARKER_FILE_PATH)
    }
}

impl HeaderSupplier for UuidHeaderSupplier {
    fn get_header(&self) -> CustomHeader {
        let header = CustomHeader::new(X_CUSTOM_HEADER, Uuid::new_v4().to_string());

        info!(header = %header, "Supplying custom header");

        header
    }
}
