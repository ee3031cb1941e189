//! HTTP Chat Gateway implementation

use super::protocol::{ChatCompletionRequest, parse_reply};
use async_trait::async_trait;
use chatline_application::{ChatGateway, TransportError};
use chatline_domain::Message;
use reqwest::{Client, Url};
use tracing::{debug, info};

const USER_AGENT: &str = concat!("chatline/", env!("CARGO_PKG_VERSION"));

/// Chat gateway that POSTs the transcript to a fixed endpoint.
///
/// No retries. The per-turn timeout is applied by the session, not here.
pub struct HttpChatGateway {
    client: Client,
    endpoint: Url,
}

impl HttpChatGateway {
    /// Create a gateway with its own HTTP client
    pub fn new(endpoint: Url) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        info!("HttpChatGateway initialized for {}", endpoint);

        Ok(Self::with_client(client, endpoint))
    }

    /// Create a gateway with an existing client
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn transport_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(e.to_string())
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn complete(&self, messages: &[Message]) -> Result<String, TransportError> {
        debug!(
            "POST {} with {} messages",
            self.endpoint,
            messages.len()
        );

        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ChatCompletionRequest { messages })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(transport_error)?;
        parse_reply(&body)
    }
}
