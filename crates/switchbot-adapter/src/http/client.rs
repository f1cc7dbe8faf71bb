/*
[INPUT]:  Client configuration (endpoint, version, credentials, timeouts)
[OUTPUT]: Signed API calls returning parsed JSON or typed errors
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::http::error::QUERY_ID_HEADER;
use crate::http::{ApiError, RequestSigner, Result, SwitchBotError};
use crate::types::{ApiRequest, QueryParams};

/// Main HTTP client for the SwitchBot API
#[derive(Debug, Clone)]
pub struct SwitchBotClient {
    http_client: Client,
    base_url: String,
    signer: RequestSigner,
    config: ClientConfig,
}

impl SwitchBotClient {
    /// Create a new client from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| SwitchBotError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = format!(
            "{}/{}/",
            config.endpoint.trim_end_matches('/'),
            config.api_version.trim_matches('/')
        );
        Url::parse(&base_url).map_err(|e| {
            SwitchBotError::Config(format!("invalid endpoint {}: {e}", config.endpoint))
        })?;

        let signer = RequestSigner::new(&config.credentials);
        // Reject tokens that cannot travel in a header before any request is sent.
        signer.headers().to_header_map()?;

        Ok(Self {
            http_client,
            base_url,
            signer,
            config,
        })
    }

    /// Create a client from `.env` / environment configuration
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for a path relative to `{endpoint}/{version}/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path`, with `query` appended to it
    pub async fn get(&self, path: &str, query: &QueryParams) -> Result<Option<Value>> {
        let target = query.append_to(path)?;
        self.call(Method::GET, &target, None).await
    }

    /// POST `path` with an optional JSON body
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Option<Value>> {
        self.call(Method::POST, path, body).await
    }

    /// Dispatch a prepared request
    pub async fn execute(&self, request: &ApiRequest) -> Result<Option<Value>> {
        let target = request.target()?;
        self.call(request.method.clone(), &target, request.body.as_ref())
            .await
    }

    /// Signed call returning the parsed body.
    ///
    /// Returns `Ok(None)` for 204 No Content, `Ok(Some(json))` for any other
    /// status in 100..300 and an [`ApiError`] otherwise.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let response = self.raw_call(method, path, body).await?;

        let status = response.status();
        let query_id = query_id(&response);
        debug!(
            status = status.as_u16(),
            query_id = query_id.as_deref().unwrap_or(""),
            "received response"
        );

        let bytes = response.bytes().await.map_err(|e| {
            warn!(error = %e, "failed to read response body");
            ApiError::transport(e).with_query_id(query_id.clone())
        })?;

        if is_success(status) {
            if status == StatusCode::NO_CONTENT {
                return Ok(None);
            }
            let json: Value = serde_json::from_slice(&bytes).map_err(|e| {
                ApiError::decode(Some(status.as_u16()), e).with_query_id(query_id.clone())
            })?;
            return Ok(Some(json));
        }

        let json: Option<Value> = serde_json::from_slice(&bytes).ok();
        let err = ApiError::from_status(status, json.as_ref()).with_query_id(query_id);
        warn!(
            status = status.as_u16(),
            label = err.message(),
            query_id = err.query_id().unwrap_or(""),
            "API call failed"
        );
        Err(err.into())
    }

    /// [`call`](Self::call), then deserialize the body into `T`
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        match self.call(method, path, body).await? {
            Some(json) => {
                serde_json::from_value(json).map_err(|e| ApiError::decode(None, e).into())
            }
            None => Err(ApiError::decode(
                Some(StatusCode::NO_CONTENT.as_u16()),
                "response has no content",
            )
            .into()),
        }
    }

    /// Sign and send a request, returning the raw response.
    ///
    /// Any failure before a response arrives is a transport error.
    pub async fn raw_call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response> {
        let url = Url::parse(&self.url(path)).map_err(ApiError::transport)?;
        let signed = self.signer.headers();
        let headers = signed.to_header_map().map_err(ApiError::transport)?;

        debug!(
            method = %method,
            url = %url,
            nonce = %signed.nonce,
            t = signed.timestamp,
            "sending signed request"
        );

        let mut builder = self.http_client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "HTTP request failed");
            ApiError::transport(e)
        })?;
        Ok(response)
    }
}

fn is_success(status: StatusCode) -> bool {
    (100..300).contains(&status.as_u16())
}

fn query_id(response: &Response) -> Option<String> {
    response
        .headers()
        .get(QUERY_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
