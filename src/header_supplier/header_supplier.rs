use crate::custom_header::custom_header::CustomHeader;

/// Capability the host calls once per outbound request to a search backend.
#[cfg_attr(test, mockall::automock)]
pub trait HeaderSupplier: Send + Sync {
    fn get_header(&self) -> CustomHeader;
}
