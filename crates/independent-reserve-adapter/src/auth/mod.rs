/*
[INPUT]:  API credentials and wall-clock time
[OUTPUT]: Nonces, canonical messages, and HMAC signatures
[POS]:    Auth layer - handles Independent Reserve request authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod nonce;
pub mod signer;

pub use credentials::Credentials;
pub use nonce::NonceGenerator;
pub use signer::{canonical_message, sign};
