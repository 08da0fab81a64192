pub mod error;
pub mod request;
pub mod reqwest_search_client;
pub mod response;
pub mod search_client;
