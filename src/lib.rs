pub mod custom_header;
pub mod header_supplier;
pub mod marker_file;
pub mod search_client;
