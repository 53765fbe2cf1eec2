/*
[INPUT]:  Stream configuration and subscription channels
[OUTPUT]: Raw stream frames delivered through a bounded queue
[POS]:    WebSocket layer - real-time data streams
[UPDATE]: When adding new channels or changing connection logic
*/

pub mod client;
pub mod message;

pub use client::{
    IrWebSocket, ReconnectConfig, StreamConfig, StreamErrorPolicy, StreamExit, StreamState,
    WS_BASE_URL,
};
pub use message::{Channel, join_channels};
