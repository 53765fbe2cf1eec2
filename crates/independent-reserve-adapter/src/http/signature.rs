/*
[INPUT]:  Credentials, endpoint URL, nonce and ordered endpoint fields
[OUTPUT]: Signed requests (ordered parts, signature, ordered payload)
[POS]:    HTTP layer - request construction and signing for private endpoints
[UPDATE]: When changing signing algorithm or payload layout
*/

use crate::auth::{Credentials, sign};
use crate::types::{Fields, OrderedPayload, ParamValue};

use super::Result;

/// A fully built private request.
///
/// `ordered_parts` is exactly what was hashed. `payload` holds the same
/// fields in the same order, with `signature` inserted third and the url
/// left out.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedRequest {
    pub url: String,
    pub ordered_parts: Vec<String>,
    pub signature: String,
    pub payload: OrderedPayload,
}

impl SignedRequest {
    /// Check that the payload, minus `signature`, rebuilds the signed parts.
    pub fn verify_alignment(&self) -> bool {
        self.payload.canonical_parts(&self.url) == self.ordered_parts
    }
}

/// Builds and signs private request bodies
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Sign a request according to the exchange's private API rules
    ///
    /// Parts: `[url, "apiKey=..", "nonce=..", "<field>=<value>", ..]`
    /// Payload: `apiKey, nonce, signature, <fields>..`
    pub fn sign_request(&self, url: &str, nonce: u64, fields: Fields) -> Result<SignedRequest> {
        let api_key = self.credentials.api_key();

        let mut ordered_parts = Vec::with_capacity(fields.len() + 3);
        ordered_parts.push(url.to_string());
        ordered_parts.push(format!("apiKey={api_key}"));
        ordered_parts.push(format!("nonce={nonce}"));
        ordered_parts.extend(
            fields
                .iter()
                .map(|(name, value)| format!("{name}={}", value.signing_form())),
        );

        let signature = sign(self.credentials.api_secret(), &ordered_parts)?;

        let mut payload = OrderedPayload::with_capacity(fields.len() + 3);
        payload.push("apiKey", ParamValue::text(api_key));
        payload.push("nonce", ParamValue::Integer(nonce));
        payload.push("signature", ParamValue::text(&signature));
        for (name, value) in fields {
            payload.push(name, value);
        }

        Ok(SignedRequest {
            url: url.to_string(),
            ordered_parts,
            signature,
            payload,
        })
    }
}
