/*
[INPUT]:  Method, relative path, query parameters, JSON payload
[OUTPUT]: Request descriptions and encoded target paths
[POS]:    Data layer - request values passed to the client
[UPDATE]: When request shape or query encoding changes
*/

use reqwest::Method;
use serde_json::Value;

use crate::http::{Result, SwitchBotError};

/// Ordered query parameters appended to a GET target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, keeping insertion order
    pub fn push(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Form-urlencoded query string, without the leading `?`
    pub fn encode(&self) -> Result<String> {
        serde_urlencoded::to_string(&self.0)
            .map_err(|e| SwitchBotError::Config(format!("invalid query parameters: {e}")))
    }

    /// Append the parameters to `path`, using `&` if it already has a query
    pub fn append_to(&self, path: &str) -> Result<String> {
        if self.is_empty() {
            return Ok(path.to_string());
        }

        let query = self.encode()?;
        let separator = if path.contains('?') { '&' } else { '?' };
        Ok(format!("{path}{separator}{query}"))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

/// A call against the API, relative to `{endpoint}/{version}/`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: QueryParams::new(),
            body,
        }
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Path with query parameters applied
    pub fn target(&self) -> Result<String> {
        self.query.append_to(&self.path)
    }
}
