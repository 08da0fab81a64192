use std::sync::Arc;

use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::info;

use crate::{
    header_supplier::header_supplier::HeaderSupplier,
    search_client::{
        error::{Error, SearchClientErrorChecker, classify},
        request::SearchRequest,
        response::SearchResponse,
        search_client::SearchClient,
    },
};

/// Outbound client that asks the supplier for one header per request.
#[derive(Clone)]
pub struct ReqwestSearchClient {
    client: reqwest::Client,
    header_supplier: Arc<dyn HeaderSupplier>,
}

impl ReqwestSearchClient {
    pub fn new(header_supplier: Arc<dyn HeaderSupplier>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            header_supplier,
        }
    }

    pub fn with_client(client: reqwest::Client, header_supplier: Arc<dyn HeaderSupplier>) -> Self {
        Self {
            client,
            header_supplier,
        }
    }
}

#[async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn execute(&self, request: SearchRequest) -> Result<SearchResponse, Error> {
        let custom_header = self.header_supplier.get_header();
        let (name, value): (HeaderName, HeaderValue) = (&custom_header).try_into()?;

        let mut headers: HeaderMap = request.headers.into();
        headers.insert(name, value);

        info!("Sending {} {}", request.method, request.url);

        let response = self
            .client
            .request(request.method.into(), &request.url)
            .headers(headers)
            .body(request.body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let headers = response.headers().into();

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(SearchResponse {
            status,
            headers,
            body,
        })
    }
}

impl SearchClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{
        custom_header::custom_header::{CustomHeader, X_CUSTOM_HEADER},
        header_supplier::header_supplier::MockHeaderSupplier,
        search_client::{
            error::Error,
            request::{SearchRequest, SearchRequestHeaders},
            reqwest_search_client::ReqwestSearchClient,
            search_client::SearchClient,
        },
    };

    fn supplier_returning(value: &'static str) -> MockHeaderSupplier {
        let mut supplier = MockHeaderSupplier::new();
        supplier
            .expect_get_header()
            .times(1)
            .returning(move || CustomHeader::new(X_CUSTOM_HEADER, value));
        supplier
    }

    #[tokio::test]
    async fn should_attach_the_supplied_header_once_per_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/_search"))
            .and(header("X-Custom-Header", "supplied-value"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ReqwestSearchClient::new(Arc::new(supplier_returning("supplied-value")));

        let response = client
            .execute(SearchRequest::get(format!("{}/_search", mock_server.uri())))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, bytes::Bytes::from("{}"));
    }

    #[tokio::test]
    async fn should_replace_a_caller_provided_value_under_the_same_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header("X-Custom-Header", "supplied-value"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = ReqwestSearchClient::new(Arc::new(supplier_returning("supplied-value")));
        let mut request = SearchRequest::get(mock_server.uri());
        request.headers = SearchRequestHeaders::from([(
            "X-Custom-Header".to_string(),
            "caller-value".to_string(),
        )]);

        client.execute(request).await.unwrap();

        let received = mock_server.received_requests().await.unwrap();
        let values: Vec<_> = received[0]
            .headers
            .get_all("x-custom-header")
            .iter()
            .collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "supplied-value");
    }

    #[tokio::test]
    async fn should_refuse_to_send_an_illegal_header() {
        let mut supplier = MockHeaderSupplier::new();
        supplier
            .expect_get_header()
            .returning(|| CustomHeader::new(X_CUSTOM_HEADER, "line\nbreak"));

        let client = ReqwestSearchClient::new(Arc::new(supplier));

        let result = client
            .execute(SearchRequest::get("http://127.0.0.1:9/"))
            .await;

        assert!(matches!(result, Err(Error::InvalidHeader(_))));
    }

    #[tokio::test]
    async fn should_report_unreachable_backends_as_network_errors() {
        let client = ReqwestSearchClient::new(Arc::new(supplier_returning("supplied-value")));

        let result = client
            .execute(SearchRequest::get("http://127.0.0.1:9/"))
            .await;

        assert!(matches!(result, Err(Error::Network(_))));
    }
}
