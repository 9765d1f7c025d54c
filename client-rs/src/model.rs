//! Response payloads

use serde::{de::DeserializeOwned, Deserialize};

use crate::error::Error;

/// Ping response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pong {
    /// Should be `pong`
    pub message: String,
}

impl Pong {
    /// Checks the pong marker
    pub fn is_pong(&self) -> bool {
        self.message == "pong"
    }
}

/// Connection count, or count of delivered messages
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Count {
    /// Count
    pub count: u64,
}

/// Delivery report of a message
///
/// The server omits the count when nobody received the message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Delivered {
    /// Number of recipients
    #[serde(default)]
    pub count: Option<u64>,
}

impl Delivered {
    /// Returns the number of recipients
    pub fn count(&self) -> u64 {
        self.count.unwrap_or(0)
    }
}

/// User presence
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Presence {
    /// Is the user connected
    #[serde(default)]
    pub online: bool,
}

/// Users of a channel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Users {
    /// User ids
    pub users: Vec<String>,
}

/// Reads the whole response body and parses it as JSON
pub async fn read_json<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, Error> {
    let text = res.text().await?;
    tracing::trace!(body = %text, "response body");
    parse_json(&text)
}

/// Parses a response body
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(text).map_err(|err| {
        tracing::debug!(%err, "invalid response body");
        Error::ResponseParse
    })
}
