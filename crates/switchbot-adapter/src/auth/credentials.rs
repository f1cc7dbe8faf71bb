/*
[INPUT]:  Application token and secret from the SwitchBot app
[OUTPUT]: Validated credentials for request signing
[POS]:    Auth layer - credential storage
[UPDATE]: When credential fields or validation rules change
*/

use std::fmt;

use crate::http::{Result, SwitchBotError};

/// Token and secret issued by the SwitchBot app (developer options)
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    secret: String,
}

impl Credentials {
    /// Create credentials, rejecting blank values
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let secret = secret.into();

        if token.trim().is_empty() {
            return Err(SwitchBotError::Config("TOKEN must not be empty".to_string()));
        }
        if secret.trim().is_empty() {
            return Err(SwitchBotError::Config("SECRET must not be empty".to_string()));
        }

        Ok(Self { token, secret })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token)
            .field("secret", &"<redacted>")
            .finish()
    }
}
