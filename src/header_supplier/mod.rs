pub mod header_supplier;
pub mod initialization_error;
pub mod uuid_header_supplier;
