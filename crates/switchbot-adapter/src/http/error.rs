/*
[INPUT]:  Error sources (transport, JSON decoding, HTTP status, configuration)
[OUTPUT]: Structured error types with status labels and query ids
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing status labels
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Response header carrying the server-side correlation id
pub const QUERY_ID_HEADER: &str = "X-QUERYID";

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for the SwitchBot adapter
#[derive(Error, Debug)]
pub enum SwitchBotError {
    /// Configuration could not be loaded or the client could not be built
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request failed (transport, decoding or HTTP status)
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SwitchBotError {
    /// Borrow the inner API error, if this is one
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            SwitchBotError::Api(err) => Some(err),
            SwitchBotError::Config(_) => None,
        }
    }
}

/// What went wrong during a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The HTTP request could not be sent or no response was received
    Transport,
    /// The response body was not the expected JSON
    Decode,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    NotAcceptable,
    UnsupportedMediaType,
    UnprocessableEntity,
    TooManyRequests,
    InternalServerError,
    /// Any other status >= 300
    Unexpected,
}

impl ApiErrorKind {
    /// Map a documented error status to its kind.
    ///
    /// Returns `None` for statuses outside the table.
    pub fn from_status(status: u16) -> Option<Self> {
        let kind = match status {
            400 => ApiErrorKind::BadRequest,
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            406 => ApiErrorKind::NotAcceptable,
            415 => ApiErrorKind::UnsupportedMediaType,
            422 => ApiErrorKind::UnprocessableEntity,
            429 => ApiErrorKind::TooManyRequests,
            500 => ApiErrorKind::InternalServerError,
            _ => return None,
        };
        Some(kind)
    }

    /// Fixed message for this kind, if it has one
    pub fn label(self) -> Option<&'static str> {
        match self {
            ApiErrorKind::Transport => Some("Low HTTP request failed error"),
            ApiErrorKind::Decode => Some("Failed to decode API response"),
            ApiErrorKind::BadRequest => Some("Bad Request"),
            ApiErrorKind::Unauthorized => Some("Unauthorized"),
            ApiErrorKind::Forbidden => Some("Forbidden"),
            ApiErrorKind::NotFound => Some("Not Found"),
            ApiErrorKind::NotAcceptable => Some("Not Acceptable"),
            ApiErrorKind::UnsupportedMediaType => Some("Unsupported Media Type"),
            ApiErrorKind::UnprocessableEntity => Some("Unprocessable Entity"),
            ApiErrorKind::TooManyRequests => Some("Too Many Requests"),
            ApiErrorKind::InternalServerError => Some("Internal Server Error"),
            ApiErrorKind::Unexpected => None,
        }
    }
}

/// Error returned by every failed API call.
///
/// Displays as the message, followed by the query id on its own line when
/// the server sent one.
#[derive(Error, Debug)]
#[error("{message}{}", query_id_suffix(.query_id))]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    status: Option<u16>,
    query_id: Option<String>,
    #[source]
    source: Option<BoxError>,
}

fn query_id_suffix(query_id: &Option<String>) -> String {
    match query_id {
        Some(id) => format!(" \nQuery-ID: {id}"),
        None => String::new(),
    }
}

impl ApiError {
    /// Transport failure wrapping the low-level cause
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::with_label(ApiErrorKind::Transport).with_source(source)
    }

    /// Body decoding failure for a response with the given status
    pub fn decode(status: Option<u16>, source: impl Into<BoxError>) -> Self {
        let mut err = Self::with_label(ApiErrorKind::Decode).with_source(source);
        err.status = status;
        err
    }

    /// Error for an HTTP status >= 300.
    ///
    /// Documented statuses use their fixed label. Anything else takes the
    /// `message` field of the parsed body, or a generic message when the
    /// body has none.
    pub fn from_status(status: StatusCode, body: Option<&serde_json::Value>) -> Self {
        let code = status.as_u16();
        let (kind, message) = match ApiErrorKind::from_status(code) {
            Some(kind) => (kind, kind.label().unwrap_or_default().to_string()),
            None => {
                let message = body
                    .and_then(|value| value.get("message"))
                    .and_then(|value| value.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Unexpected HTTP status {code}"));
                (ApiErrorKind::Unexpected, message)
            }
        };

        Self {
            kind,
            message,
            status: Some(code),
            query_id: None,
            source: None,
        }
    }

    fn with_label(kind: ApiErrorKind) -> Self {
        Self {
            kind,
            message: kind.label().unwrap_or_default().to_string(),
            status: None,
            query_id: None,
            source: None,
        }
    }

    fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the correlation id read from the response headers
    pub fn with_query_id(mut self, query_id: Option<String>) -> Self {
        self.query_id = query_id;
        self
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn query_id(&self) -> Option<&str> {
        self.query_id.as_deref()
    }

    /// Check if error indicates rejected credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.kind,
            ApiErrorKind::Unauthorized | ApiErrorKind::Forbidden
        )
    }
}

/// Result type alias for SwitchBot operations
pub type Result<T> = std::result::Result<T, SwitchBotError>;
