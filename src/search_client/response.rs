use bytes::Bytes;

use crate::search_client::request::SearchRequestHeaders;

#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub status: u16,
    pub headers: SearchRequestHeaders,
    pub body: Bytes,
}
