/*
[INPUT]:  API key and API secret supplied by the caller
[OUTPUT]: Immutable credential pair used by the request signer
[POS]:    Auth layer - credential ownership and redaction
[UPDATE]: When credential validation rules change
*/

use std::fmt;

use crate::http::{IrError, Result};

/// API key and secret for private endpoints.
///
/// Fields are private and never change after construction. `Debug` output
/// redacts the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Create a credential pair, rejecting blank values.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(IrError::Configuration("API key is missing".to_string()));
        }
        if api_secret.is_empty() {
            return Err(IrError::Configuration("API secret is missing".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
