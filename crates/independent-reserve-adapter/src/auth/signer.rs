/*
[INPUT]:  API secret and ordered message parts
[OUTPUT]: Uppercase hex HMAC-SHA256 signatures
[POS]:    Auth layer - cryptographic signing for private requests
[UPDATE]: When changing signing algorithm or message format
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{IrError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Separator between parts of the canonical message.
pub const PART_SEPARATOR: &str = ",";

/// Join message parts into the canonical message that gets hashed.
pub fn canonical_message<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR)
}

/// Sign ordered message parts with HMAC-SHA256 keyed by `secret`.
///
/// The parts are joined with `,` (no spaces) and the digest is rendered as
/// uppercase hex.
pub fn sign<S: AsRef<str>>(secret: &str, parts: &[S]) -> Result<String> {
    if secret.is_empty() {
        return Err(IrError::Configuration(
            "API secret is required to sign requests".to_string(),
        ));
    }

    let message = canonical_message(parts);
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| IrError::Configuration(format!("invalid HMAC key: {e}")))?;
    mac.update(message.as_bytes());

    Ok(hex::encode_upper(mac.finalize().into_bytes()))
}
