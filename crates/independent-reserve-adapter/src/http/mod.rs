/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses as parsed JSON and typed errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;

pub use error::{IrError, Result};
pub use signature::{RequestSigner, SignedRequest};

pub use client::{API_BASE_URL, ClientConfig, IrClient};
pub use public::{DEFAULT_HISTORY_HOURS, DEFAULT_RECENT_TRADES};
