//! HTTP adapter for the message board server

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::application::errors::TransportError;
use crate::domain::entities::{Feed, Message, User};
use crate::domain::traits::MessageBoard;

const JSON: &str = "application/json";

/// Used when the configuration does not set a timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Map a response status onto success or an HTTP-status error.
///
/// Only 200..=299 counts as success.
pub fn check_status(status: StatusCode) -> Result<(), TransportError> {
    if (200..=299).contains(&status.as_u16()) {
        Ok(())
    } else {
        Err(TransportError::Status(status.as_u16()))
    }
}

/// JSON-over-HTTP message board client
pub struct HttpBoard {
    client: Client,
    base_url: Url,
}

impl HttpBoard {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL plus `segments`, each percent-encoded as one path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue one request and return the raw body of a 2xx response.
    ///
    /// The body of a failed response is only visible in debug output.
    async fn call(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<Vec<u8>>,
        expects_output: bool,
    ) -> Result<String, TransportError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("[{} {}]", method, url);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            tracing::debug!("[Body: {}]", String::from_utf8_lossy(&body));
            request = request.header(CONTENT_TYPE, JSON).body(body);
        }
        if expects_output {
            request = request.header(ACCEPT, JSON);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("[Status: {}]", status.as_u16());

        if let Err(e) = check_status(status) {
            let contents = response.text().await.unwrap_or_default();
            tracing::debug!("[Output: {}]", contents);
            return Err(e);
        }

        let contents = response.text().await?;
        tracing::debug!("[Output: {}]", contents);
        Ok(contents)
    }

    async fn get<O: DeserializeOwned>(&self, segments: &[&str]) -> Result<O, TransportError> {
        let contents = self.call(Method::GET, segments, None, true).await?;
        decode(&contents)
    }

    async fn post<I: Serialize + Sync, O: DeserializeOwned>(
        &self,
        segments: &[&str],
        input: &I,
    ) -> Result<O, TransportError> {
        let contents = self.call(Method::POST, segments, Some(encode(input)?), true).await?;
        decode(&contents)
    }

    async fn post_ignoring_output<I: Serialize + Sync>(&self, segments: &[&str], input: &I) -> Result<(), TransportError> {
        self.call(Method::POST, segments, Some(encode(input)?), false).await?;
        Ok(())
    }
}

fn encode<I: Serialize>(input: &I) -> Result<Vec<u8>, TransportError> {
    serde_json::to_vec(input).map_err(TransportError::Encode)
}

fn decode<O: DeserializeOwned>(contents: &str) -> Result<O, TransportError> {
    serde_json::from_str(contents).map_err(TransportError::Decode)
}

#[async_trait]
impl MessageBoard for HttpBoard {
    async fn list_users(&self) -> Result<Vec<User>, TransportError> {
        self.get(&["ids"]).await
    }

    async fn lookup_user_id(&self, github_id: &str) -> Result<String, TransportError> {
        self.get(&["ids", github_id]).await
    }

    async fn register_user(&self, user: &User) -> Result<(), TransportError> {
        self.post_ignoring_output(&["ids"], user).await
    }

    async fn list_messages(&self, feed: &Feed) -> Result<Vec<Message>, TransportError> {
        self.get(&feed.segments()).await
    }

    async fn post_message(&self, message: &Message) -> Result<Message, TransportError> {
        self.post(&["ids", message.from_id.as_str(), "messages"], message).await
    }
}
