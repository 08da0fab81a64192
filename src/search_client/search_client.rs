use async_trait::async_trait;

use crate::search_client::{error::Error, request::SearchRequest, response::SearchResponse};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn execute(&self, request: SearchRequest) -> Result<SearchResponse, Error>;
}
