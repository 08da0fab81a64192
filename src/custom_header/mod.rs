pub mod custom_header;
pub mod error;
