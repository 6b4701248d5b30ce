use thiserror::Error;

/// Raw HTTP response as seen by the client: status and full body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` when the body is missing or only whitespace.
    pub fn is_empty_body(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// The request never produced a response (DNS, connection, body read, ...).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Asynchronous GET capability.
///
/// # Implementations
///
/// - [`ReqwestFetch`]: production implementation using `reqwest`
/// - in-memory doubles for testing
#[async_trait::async_trait]
pub trait Fetch: Send + Sync {
    /// Issue one GET request to `url` and return the whole response.
    async fn get(&self, url: &str) -> Result<FetchResponse, TransportError>;
}

/// Production [`Fetch`] implementation over `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetch {
    client: reqwest::Client,
}

impl ReqwestFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Fetch for ReqwestFetch {
    async fn get(&self, url: &str) -> Result<FetchResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::with_source(format!("GET {url} failed"), e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::with_source(format!("reading body of {url} failed"), e))?;

        Ok(FetchResponse::new(status, body.to_vec()))
    }
}
