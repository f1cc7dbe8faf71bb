/*
[INPUT]:  HTTP client configuration and API paths
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When changing dispatch, signing or error mapping
*/

pub mod client;
pub mod error;
pub mod signature;

pub use error::{ApiError, ApiErrorKind, QUERY_ID_HEADER, Result, SwitchBotError};
pub use signature::{RequestSigner, SignedHeaders};

pub use client::SwitchBotClient;
