/*
[INPUT]:  JSON response bodies
[OUTPUT]: Typed view over the API response envelope
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the envelope fields change
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `statusCode` value the API reports for a successful call
pub const STATUS_SUCCESS: i64 = 100;

/// Envelope wrapped around every API payload:
/// `{"statusCode": 100, "body": {...}, "message": "success"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    #[serde(rename = "statusCode")]
    pub status_code: i64,
    #[serde(default)]
    pub body: Option<T>,
    #[serde(default)]
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// The envelope reports success (HTTP 200 can still carry an error code)
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_SUCCESS
    }
}
