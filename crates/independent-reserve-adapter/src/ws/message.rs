/*
[INPUT]:  Stream topic names or currency pairs
[OUTPUT]: Channel identifiers for the subscribe query parameter
[POS]:    WebSocket layer - channel naming
[UPDATE]: When adding new channel families
*/

use std::fmt;

/// A named streaming topic, e.g. `ticker-xbt-aud`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Channel(String);

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Ticker channel for a currency pair, lower-cased
    pub fn ticker(primary: &str, secondary: &str) -> Self {
        Self(format!(
            "ticker-{}-{}",
            primary.to_ascii_lowercase(),
            secondary.to_ascii_lowercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Channel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Channel {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Channel {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Join channels into the single `subscribe` value
pub fn join_channels(channels: &[Channel]) -> String {
    channels
        .iter()
        .map(Channel::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
