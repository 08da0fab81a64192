use std::{
    collections::HashMap,
    fmt::{self, Display},
    ops::{Deref, DerefMut},
};

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub method: SearchRequestMethod,
    pub url: String,
    pub headers: SearchRequestHeaders,
    pub body: Bytes,
}

impl SearchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: SearchRequestMethod::Get,
            url: url.into(),
            headers: SearchRequestHeaders::default(),
            body: Bytes::new(),
        }
    }
}

/// Building from name/value pairs lower-cases the names; `insert` keeps them as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequestHeaders(pub HashMap<String, String>);

impl Deref for SearchRequestHeaders {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SearchRequestHeaders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for SearchRequestHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        let map = arr
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        SearchRequestHeaders(map)
    }
}

impl From<&HeaderMap> for SearchRequestHeaders {
    fn from(headers: &HeaderMap) -> Self {
        let map = headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect();
        SearchRequestHeaders(map)
    }
}

impl From<SearchRequestHeaders> for HeaderMap {
    fn from(h: SearchRequestHeaders) -> Self {
        let mut header_map = HeaderMap::new();
        for (k, v) in h.0 {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(&v),
            ) {
                header_map.insert(name, value);
            }
        }
        header_map
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl Display for SearchRequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchRequestMethod::Get => "GET",
            SearchRequestMethod::Post => "POST",
            SearchRequestMethod::Put => "PUT",
            SearchRequestMethod::Delete => "DELETE",
        };
        write!(f, "{}", s)
    }
}

impl From<SearchRequestMethod> for reqwest::Method {
    fn from(value: SearchRequestMethod) -> Self {
        match value {
            SearchRequestMethod::Get => reqwest::Method::GET,
            SearchRequestMethod::Post => reqwest::Method::POST,
            SearchRequestMethod::Put => reqwest::Method::PUT,
            SearchRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}
