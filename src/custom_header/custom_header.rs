use std::fmt::{self, Display};

use http::{HeaderName, HeaderValue};

use crate::custom_header::error::CustomHeaderError;

pub const X_CUSTOM_HEADER: &str = "X-Custom-Header";

/// A single name/value pair handed to the host for one outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomHeader {
    name: String,
    value: String,
}

impl CustomHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for CustomHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomHeader[name={}, value={}]", self.name, self.value)
    }
}

impl TryFrom<&CustomHeader> for (HeaderName, HeaderValue) {
    type Error = CustomHeaderError;

    fn try_from(header: &CustomHeader) -> Result<Self, Self::Error> {
        let name = HeaderName::from_bytes(header.name.as_bytes())
            .map_err(|_| CustomHeaderError::InvalidName(header.name.clone()))?;
        let value = HeaderValue::from_str(&header.value)
            .map_err(|_| CustomHeaderError::InvalidValue(header.name.clone()))?;

        Ok((name, value))
    }
}
