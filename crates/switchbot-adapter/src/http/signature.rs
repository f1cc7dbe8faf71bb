/*
[INPUT]:  Credentials, current time, fresh nonce
[OUTPUT]: Signed request headers (Authorization, t, sign, nonce)
[POS]:    HTTP layer - request signing for every API call
[UPDATE]: When changing signing algorithm or header format
*/

use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use crate::auth::{Credentials, HmacSigner};
use crate::http::{Result, SwitchBotError};

/// Headers attached to every signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub authorization: String,
    pub content_type: String,
    pub charset: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub sign: String,
    pub nonce: String,
}

impl SignedHeaders {
    /// Convert into a reqwest header map
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, header_value(&self.authorization)?);
        headers.insert(CONTENT_TYPE, header_value(&self.content_type)?);
        headers.insert(
            HeaderName::from_static("charset"),
            header_value(&self.charset)?,
        );
        headers.insert(
            HeaderName::from_static("t"),
            header_value(&self.timestamp.to_string())?,
        );
        headers.insert(HeaderName::from_static("sign"), header_value(&self.sign)?);
        headers.insert(HeaderName::from_static("nonce"), header_value(&self.nonce)?);
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| SwitchBotError::Config(format!("invalid header value: {e}")))
}

/// Signs requests with the application token and secret
#[derive(Debug, Clone)]
pub struct RequestSigner {
    token: String,
    signer: HmacSigner,
}

impl RequestSigner {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            token: credentials.token().to_string(),
            signer: HmacSigner::new(credentials.secret()),
        }
    }

    /// Generate a nonce for signing headers
    pub fn nonce(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Compute the signature for a timestamp and nonce
    ///
    /// Format: base64(HMAC-SHA256(secret, "{token}{timestamp}{nonce}"))
    pub fn sign(&self, timestamp: i64, nonce: &str) -> String {
        let message = format!("{}{timestamp}{nonce}", self.token);
        self.signer.sign(message.as_bytes())
    }

    /// Build signed headers for a fixed timestamp and nonce
    pub fn headers_at(&self, timestamp: i64, nonce: &str) -> SignedHeaders {
        SignedHeaders {
            authorization: self.token.clone(),
            content_type: "application/json".to_string(),
            charset: "utf8".to_string(),
            timestamp,
            sign: self.sign(timestamp, nonce),
            nonce: nonce.to_string(),
        }
    }

    /// Build signed headers using the current time and a fresh nonce
    pub fn headers(&self) -> SignedHeaders {
        let timestamp = Utc::now().timestamp_millis();
        let nonce = self.nonce();
        self.headers_at(timestamp, &nonce)
    }
}
