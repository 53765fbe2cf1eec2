/*
[INPUT]:  WebSocket URL, channel list and cancellation token
[OUTPUT]: Raw inbound frames via a bounded channel, plus a terminal outcome
[POS]:    WebSocket layer - real-time data stream handling
[UPDATE]: When adding new channels or changing connection logic
*/

use std::time::Duration;

use bytes::Bytes;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::tungstenite::error::ProtocolError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::http::client::truncate_for_log;
use crate::http::{IrError, Result};

use super::message::{Channel, join_channels};

/// Streaming endpoint for Independent Reserve
pub const WS_BASE_URL: &str = "wss://websockets.independentreserve.com";
const DEFAULT_QUEUE_CAPACITY: usize = 1024;
const FRAME_SAMPLE_LIMIT: usize = 3;
const RAW_LOG_MAX_BYTES: usize = 256;

/// Lifecycle of a subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Disconnected,
    Connected,
    Streaming,
    Terminated,
}

/// Clean ways for a subscription to end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamExit {
    /// Shutdown token was cancelled
    Cancelled,
    /// The receiving side of the queue was dropped
    ConsumerDropped,
    /// Remote sent a close frame or ended the stream
    RemoteClosed,
}

/// What to do when the stream fails for good
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamErrorPolicy {
    /// Return the error from `run`
    #[default]
    Surface,
    /// Log and exit the process with status 1
    ExitProcess,
}

/// Reconnect settings; delay doubles per attempt up to `max_delay`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectConfig {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl ReconnectConfig {
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub url: String,
    pub queue_capacity: usize,
    pub error_policy: StreamErrorPolicy,
    /// `None` keeps the pass-through model: one connection, no retries
    pub reconnect: Option<ReconnectConfig>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            url: WS_BASE_URL.to_string(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            error_policy: StreamErrorPolicy::Surface,
            reconnect: None,
        }
    }
}

impl StreamConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_error_policy(mut self, policy: StreamErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn with_reconnect(mut self, reconnect: ReconnectConfig) -> Self {
        self.reconnect = Some(reconnect);
        self
    }
}

/// WebSocket subscriber for Independent Reserve channels.
///
/// Inbound text and binary frames are forwarded unmodified to the queue
/// returned by [`take_receiver`](Self::take_receiver).
#[derive(Debug)]
pub struct IrWebSocket {
    config: StreamConfig,
    message_tx: mpsc::Sender<Bytes>,
    message_rx: Option<mpsc::Receiver<Bytes>>,
    state_tx: watch::Sender<StreamState>,
    shutdown: CancellationToken,
}

impl IrWebSocket {
    pub fn new(config: StreamConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));
        let (state_tx, _) = watch::channel(StreamState::Disconnected);
        Self {
            config,
            message_tx: tx,
            message_rx: Some(rx),
            state_tx,
            shutdown: CancellationToken::new(),
        }
    }

    /// Get the message receiver (only once)
    pub fn take_receiver(&mut self) -> Option<mpsc::Receiver<Bytes>> {
        self.message_rx.take()
    }

    pub fn state(&self) -> StreamState {
        *self.state_tx.borrow()
    }

    pub fn state_receiver(&self) -> watch::Receiver<StreamState> {
        self.state_tx.subscribe()
    }

    /// Token that stops the subscriber when cancelled
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Stream URL with `subscribe=<c1>,<c2>,..` as its query
    pub fn subscription_url(&self, channels: &[Channel]) -> Result<String> {
        if channels.is_empty() {
            return Err(IrError::Configuration(
                "at least one channel is required".to_string(),
            ));
        }

        let mut url = Url::parse(&self.config.url).map_err(|e| {
            IrError::Configuration(format!("invalid stream URL {:?}: {e}", self.config.url))
        })?;
        if !matches!(url.scheme(), "ws" | "wss") {
            return Err(IrError::Configuration(format!(
                "stream URL must be ws(s), got {:?}",
                self.config.url
            )));
        }

        // Commas are legal in a query and stay unescaped.
        url.set_query(Some(&format!("subscribe={}", join_channels(channels))));
        Ok(url.into())
    }

    /// Run the subscription on a background task.
    ///
    /// Take the receiver, state receiver and shutdown token first; they are
    /// unreachable once `self` moves into the task.
    pub fn spawn(self, channels: Vec<Channel>) -> JoinHandle<Result<StreamExit>> {
        tokio::spawn(async move { self.run(&channels).await })
    }

    /// Connect, subscribe and forward frames until the stream terminates.
    pub async fn run(&self, channels: &[Channel]) -> Result<StreamExit> {
        let url = self.subscription_url(channels)?;
        let mut attempt = 0u32;

        let outcome = loop {
            let (result, delivered) = self.stream_once(&url).await;
            // A connection only counts as healthy once it has carried data.
            if delivered {
                attempt = 0;
            }

            let should_retry = matches!(result, Ok(StreamExit::RemoteClosed) | Err(_));
            let reconnect = match &self.config.reconnect {
                Some(reconnect) if should_retry => reconnect,
                _ => break result,
            };

            attempt += 1;
            if attempt > reconnect.max_attempts {
                warn!(attempts = reconnect.max_attempts, "ws reconnect attempts exhausted");
                break result;
            }

            let delay = reconnect.delay_for(attempt);
            match &result {
                Err(err) => warn!(attempt, delay_ms = delay.as_millis() as u64, error = %err, "ws reconnecting"),
                Ok(_) => warn!(attempt, delay_ms = delay.as_millis() as u64, "ws reconnecting after remote close"),
            }
            self.set_state(StreamState::Disconnected);

            tokio::select! {
                _ = self.shutdown.cancelled() => break Ok(StreamExit::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        };

        self.set_state(StreamState::Terminated);

        match outcome {
            Ok(exit) => {
                info!(?exit, "ws subscription ended");
                Ok(exit)
            }
            Err(err) => {
                error!(error = %err, "ws subscription failed");
                if self.config.error_policy == StreamErrorPolicy::ExitProcess {
                    std::process::exit(1);
                }
                Err(err)
            }
        }
    }

    /// One connection lifetime. The flag reports whether any frame was forwarded.
    async fn stream_once(&self, url: &str) -> (Result<StreamExit>, bool) {
        let connected = tokio::select! {
            _ = self.shutdown.cancelled() => return (Ok(StreamExit::Cancelled), false),
            connected = connect_async(url) => connected,
        };
        let ws_stream = match connected {
            Ok((ws_stream, _response)) => ws_stream,
            Err(err) => return (Err(IrError::WebSocket(err)), false),
        };

        self.set_state(StreamState::Connected);
        info!(url, "ws connected");

        let (mut write, mut read) = ws_stream.split();
        self.set_state(StreamState::Streaming);

        let mut sampled = 0usize;
        let mut delivered = false;
        loop {
            let incoming = tokio::select! {
                _ = self.shutdown.cancelled() => {
                    let _ = write.send(WsMessage::Close(None)).await;
                    return (Ok(StreamExit::Cancelled), delivered);
                }
                incoming = read.next() => incoming,
            };

            let frame = match incoming {
                Some(Ok(WsMessage::Text(text))) => Bytes::copy_from_slice(text.as_bytes()),
                Some(Ok(WsMessage::Binary(bytes))) => bytes,
                Some(Ok(WsMessage::Close(frame))) => {
                    warn!(?frame, "ws closed by remote");
                    return (Ok(StreamExit::RemoteClosed), delivered);
                }
                Some(Ok(_)) => continue,
                Some(Err(err)) => return (Err(read_error(err)), delivered),
                None => {
                    warn!("ws stream ended without close frame");
                    return (Ok(StreamExit::RemoteClosed), delivered);
                }
            };

            if sampled < FRAME_SAMPLE_LIMIT {
                sampled += 1;
                debug!(
                    sample_index = sampled,
                    sample_limit = FRAME_SAMPLE_LIMIT,
                    bytes = frame.len(),
                    message = %truncate_for_log(&String::from_utf8_lossy(&frame), RAW_LOG_MAX_BYTES),
                    "ws frame sample"
                );
            }

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    let _ = write.send(WsMessage::Close(None)).await;
                    return (Ok(StreamExit::Cancelled), delivered);
                }
                sent = self.message_tx.send(frame) => {
                    if sent.is_err() {
                        return (Ok(StreamExit::ConsumerDropped), delivered);
                    }
                    delivered = true;
                }
            }
        }
    }

    fn set_state(&self, state: StreamState) {
        self.state_tx.send_replace(state);
    }
}

/// Malformed frames are protocol errors; everything else is transport.
fn read_error(err: tungstenite::Error) -> IrError {
    match err {
        tungstenite::Error::Protocol(ProtocolError::ResetWithoutClosingHandshake) => {
            IrError::WebSocket(err)
        }
        tungstenite::Error::Protocol(protocol) => IrError::Protocol(protocol.to_string()),
        tungstenite::Error::Utf8 => IrError::Protocol("text frame is not valid UTF-8".to_string()),
        other => IrError::WebSocket(other),
    }
}

impl Default for IrWebSocket {
    fn default() -> Self {
        Self::new(StreamConfig::default())
    }
}
