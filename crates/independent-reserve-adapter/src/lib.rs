/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Independent Reserve adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;
pub mod ws;

// Re-export commonly used types from auth
pub use auth::{Credentials, NonceGenerator, canonical_message, sign};

// Re-export commonly used types from http
pub use http::{
    API_BASE_URL,
    ClientConfig,
    DEFAULT_HISTORY_HOURS,
    DEFAULT_RECENT_TRADES,
    IrClient,
    IrError,
    RequestSigner,
    Result,
    SignedRequest,
};

// Re-export all types
pub use types::*;

// Re-export commonly used types from ws
pub use ws::{
    Channel,
    IrWebSocket,
    ReconnectConfig,
    StreamConfig,
    StreamErrorPolicy,
    StreamExit,
    StreamState,
    WS_BASE_URL,
};
