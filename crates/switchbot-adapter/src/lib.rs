/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SwitchBot adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod config;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, HmacSigner};

pub use config::ClientConfig;
pub use reqwest::Method;

// Re-export commonly used types from http
pub use http::{
    ApiError,
    ApiErrorKind,
    RequestSigner,
    Result,
    SignedHeaders,
    SwitchBotClient,
    SwitchBotError,
};

// Re-export all types
pub use types::*;
